use crate::{Bound, Constraint, CurveId, Map, SiteId};
use pwl_core::PwlCurve;

/// A location where units may be installed, priced by one of the model's curves
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Site {
    /// The cost curve this site uses
    pub curve: CurveId,
    /// An upper bound on the number of units, tighter than the curve's domain
    #[cfg_attr(feature = "serde", serde(default))]
    pub capacity: Option<f64>,
}

/// A validated set of cost curves and the sites that use them
///
/// Every site references an existing curve, every identifier is usable as part
/// of a variable name, and every capacity lies within reach of its curve.
#[derive(Clone, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "CostModelDto", into = "CostModelDto")
)]
pub struct CostModel {
    curves: Map<CurveId, PwlCurve>,
    sites: Map<SiteId, Site>,
}

impl CostModel {
    /// Creates a new model, validating that the sites and curves fit together
    pub fn new(curves: Map<CurveId, PwlCurve>, sites: Map<SiteId, Site>) -> Result<Self, ModelError> {
        if sites.is_empty() {
            return Err(ModelError::NoSites);
        }

        for curve_id in curves.keys() {
            if !curve_id.is_valid() {
                return Err(ModelError::InvalidName(curve_id.to_string()));
            }
        }

        for (site_id, site) in sites.iter() {
            if !site_id.is_valid() {
                return Err(ModelError::InvalidName(site_id.to_string()));
            }

            let curve = curves
                .get(&site.curve)
                .ok_or_else(|| ModelError::UnknownCurve {
                    site: site_id.clone(),
                    curve: site.curve.clone(),
                })?;

            if let Some(capacity) = site.capacity {
                if !capacity.is_finite() || capacity < curve.domain().0 {
                    return Err(ModelError::Capacity {
                        site: site_id.clone(),
                        capacity,
                    });
                }
            }
        }

        Ok(Self { curves, sites })
    }

    /// The named cost curves
    pub fn curves(&self) -> &Map<CurveId, PwlCurve> {
        &self.curves
    }

    /// The sites, in the order they were given
    pub fn sites(&self) -> &Map<SiteId, Site> {
        &self.sites
    }

    /// The cost curve used by a site
    pub fn curve(&self, site: &SiteId) -> Option<&PwlCurve> {
        self.sites
            .get(site)
            .and_then(|site| self.curves.get(&site.curve))
    }

    /// The range of unit counts a site may take: the curve's domain, cut off at
    /// the site's capacity if one is given.
    pub fn units_bounds(&self, site: &SiteId) -> Option<(f64, f64)> {
        let capacity = self.sites.get(site)?.capacity;
        let (min, max) = self.curve(site)?.domain();
        Some((min, capacity.map_or(max, |capacity| capacity.min(max))))
    }

    /// Every site paired with its curve, in site order
    pub fn resolved(&self) -> impl Iterator<Item = (&SiteId, &PwlCurve)> {
        self.sites.iter().filter_map(|(site_id, site)| {
            self.curves
                .get(&site.curve)
                .map(|curve| (site_id, curve))
        })
    }

    /// One constraint per site per curve segment, in site order, then segment order
    pub fn constraints(&self, bound: Bound) -> impl Iterator<Item = Constraint<'_>> {
        self.resolved().flat_map(move |(site, curve)| {
            curve.segments().iter().map(move |(index, segment)| Constraint {
                site,
                segment: *index,
                slope: segment.slope,
                intercept: segment.intercept,
                bound,
            })
        })
    }

    /// The sites whose curves are not represented exactly by `bound`.
    ///
    /// An upper bound on a non-concave curve (or a lower bound on a non-convex one)
    /// admits costs the curve does not; each such site is logged as a warning.
    pub fn check_shapes(&self, bound: Bound, tolerance: f64) -> Vec<&SiteId> {
        self.resolved()
            .filter_map(|(site, curve)| {
                let shape = curve.segments().shape(tolerance);
                if bound.is_exact_for(shape) {
                    None
                } else {
                    tracing::warn!(
                        %site,
                        ?shape,
                        ?bound,
                        "segment constraints do not reproduce the cost curve exactly"
                    );
                    Some(site)
                }
            })
            .collect()
    }
}

/// DTO to ensure that we always validate when we deserialize from an untrusted source
#[derive(Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostModelDto {
    /// The named cost curves
    pub curves: Map<CurveId, PwlCurve>,
    /// The sites and the curve each of them uses
    pub sites: Map<SiteId, Site>,
}

impl TryFrom<CostModelDto> for CostModel {
    type Error = ModelError;

    fn try_from(value: CostModelDto) -> Result<Self, Self::Error> {
        Self::new(value.curves, value.sites)
    }
}

impl From<CostModel> for CostModelDto {
    fn from(value: CostModel) -> Self {
        Self {
            curves: value.curves,
            sites: value.sites,
        }
    }
}

/// Errors that can occur when assembling a cost model
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ModelError {
    /// The model has no sites
    #[error("No sites provided")]
    NoSites,
    /// A site references a curve that is not part of the model
    #[error("Site {site} references unknown curve {curve}")]
    UnknownCurve {
        /// The offending site
        site: SiteId,
        /// The missing curve
        curve: CurveId,
    },
    /// A site's capacity is non-finite or below the start of its curve's domain
    #[error("Site {site} has invalid capacity {capacity}")]
    Capacity {
        /// The offending site
        site: SiteId,
        /// The rejected capacity
        capacity: f64,
    },
    /// An identifier is empty or contains characters other than ASCII letters, digits, `_` and `.`
    #[error("Invalid identifier {0:?}")]
    InvalidName(String),
}
