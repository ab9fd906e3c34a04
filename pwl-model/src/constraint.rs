use crate::{Bound, SiteId};

/// One per-segment inequality tying a site's cost to its unit count
///
/// Reads `cost_site - slope * units_site (<= | >=) intercept`, with the
/// direction given by `bound`.
#[derive(Clone, Debug, PartialEq)]
pub struct Constraint<'a> {
    /// The site the inequality belongs to
    pub site: &'a SiteId,
    /// The one-based index of the curve segment
    pub segment: usize,
    /// The segment's slope
    pub slope: f64,
    /// The segment's intercept
    pub intercept: f64,
    /// The direction of the inequality
    pub bound: Bound,
}

impl Constraint<'_> {
    /// The row name of the constraint in exported formats
    pub fn row_name(&self) -> String {
        format!("seg_{}_{}", self.site, self.segment)
    }

    /// Whether the inequality holds for the given unit count and cost
    pub fn is_satisfied(&self, units: f64, cost: f64, tolerance: f64) -> bool {
        let lhs = cost - self.slope * units;
        match self.bound {
            Bound::Upper => lhs <= self.intercept + tolerance,
            Bound::Lower => lhs >= self.intercept - tolerance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_name() {
        let site = SiteId::from("f7");
        let constraint = Constraint {
            site: &site,
            segment: 3,
            slope: 1000.0,
            intercept: 4500.0,
            bound: Bound::Upper,
        };
        assert_eq!(constraint.row_name(), "seg_f7_3");
    }

    #[test]
    fn satisfaction() {
        let site = SiteId::from("f7");
        let mut constraint = Constraint {
            site: &site,
            segment: 4,
            slope: 900.0,
            intercept: 4800.0,
            bound: Bound::Upper,
        };
        // On the line
        assert!(constraint.is_satisfied(4.0, 8400.0, 0.0));
        // Above the line
        assert!(!constraint.is_satisfied(4.0, 8401.0, 0.0));

        constraint.bound = Bound::Lower;
        assert!(constraint.is_satisfied(4.0, 8401.0, 0.0));
        assert!(!constraint.is_satisfied(4.0, 8399.0, 0.0));
    }
}
