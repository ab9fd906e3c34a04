use pwl_core::Shape;

/// The direction of the per-segment inequalities
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Bound {
    /// The cost is bounded above by every segment line; exact for concave curves
    #[default]
    Upper,
    /// The cost is bounded below by every segment line; exact for convex curves
    Lower,
}

impl Bound {
    /// Whether the inequalities reproduce a curve of this shape exactly
    pub fn is_exact_for(&self, shape: Shape) -> bool {
        match self {
            Bound::Upper => shape.is_concave(),
            Bound::Lower => shape.is_convex(),
        }
    }

    pub(crate) fn operator(&self) -> &'static str {
        match self {
            Bound::Upper => "<=",
            Bound::Lower => ">=",
        }
    }
}

/// Settings that control how a cost model is written out
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ExportConfig {
    /// The direction of the per-segment inequalities
    pub bound: Bound,
    /// Slope changes up to this magnitude are ignored when classifying curve shapes
    pub shape_tolerance: f64,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            bound: Bound::Upper,
            shape_tolerance: 1e-9,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactness() {
        assert!(Bound::Upper.is_exact_for(Shape::Concave));
        assert!(Bound::Upper.is_exact_for(Shape::Linear));
        assert!(!Bound::Upper.is_exact_for(Shape::Convex));
        assert!(Bound::Lower.is_exact_for(Shape::Convex));
        assert!(!Bound::Lower.is_exact_for(Shape::Mixed));
    }

    #[test]
    fn partial_config_uses_defaults() {
        let config: ExportConfig = serde_json::from_str(r#"{ "bound": "lower" }"#).unwrap();
        assert_eq!(config.bound, Bound::Lower);
        assert_eq!(config.shape_tolerance, 1e-9);
    }
}
