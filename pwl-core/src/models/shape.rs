/// The curvature of a piecewise-linear function
///
/// Curvature decides which per-segment inequality describes the function
/// exactly: a concave function is the pointwise minimum of its segment lines, a
/// convex function the pointwise maximum.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Shape {
    /// All slopes are equal
    Linear,
    /// Slopes never decrease
    Convex,
    /// Slopes never increase
    Concave,
    /// Slopes both increase and decrease
    Mixed,
}

impl Shape {
    pub(crate) fn classify(slopes: &[f64], tolerance: f64) -> Self {
        let mut rising = false;
        let mut falling = false;

        for pair in slopes.windows(2) {
            let delta = pair[1] - pair[0];
            if delta > tolerance {
                rising = true;
            } else if delta < -tolerance {
                falling = true;
            }
        }

        match (rising, falling) {
            (false, false) => Self::Linear,
            (true, false) => Self::Convex,
            (false, true) => Self::Concave,
            (true, true) => Self::Mixed,
        }
    }

    /// Whether the function equals the minimum of its segment lines
    pub fn is_concave(&self) -> bool {
        matches!(self, Self::Linear | Self::Concave)
    }

    /// Whether the function equals the maximum of its segment lines
    pub fn is_convex(&self) -> bool {
        matches!(self, Self::Linear | Self::Convex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build_segments;

    #[test]
    fn install_cost_is_concave() {
        let segments = build_segments(
            &[0.0, 1.0, 2.0, 3.0, 5.0, 10.0, 20.0],
            &[0.0, 4000.0, 6500.0, 7500.0, 9300.0, 13000.0, 17000.0],
        )
        .unwrap();
        assert_eq!(segments.shape(1e-9), Shape::Concave);
    }

    #[test]
    fn convex() {
        let segments = build_segments(&[0.0, 10.0, 20.0, 40.0], &[0.0, 5.0, 15.0, 45.0]).unwrap();
        assert_eq!(segments.shape(1e-9), Shape::Convex);
    }

    #[test]
    fn single_segment_is_linear() {
        let segments = build_segments(&[0.0, 1.0], &[3.0, 7.0]).unwrap();
        assert_eq!(segments.shape(0.0), Shape::Linear);
    }

    #[test]
    fn mixed() {
        assert_eq!(Shape::classify(&[1.0, 2.0, 0.0], 0.0), Shape::Mixed);
    }

    #[test]
    fn tolerance_absorbs_noise() {
        let slopes = [1.0, 1.0 + 1e-12, 1.0 - 1e-12];
        assert_eq!(Shape::classify(&slopes, 0.0), Shape::Mixed);
        assert_eq!(Shape::classify(&slopes, 1e-9), Shape::Linear);
    }

    #[test]
    fn linear_is_both() {
        assert!(Shape::Linear.is_concave());
        assert!(Shape::Linear.is_convex());
        assert!(!Shape::Mixed.is_concave());
        assert!(!Shape::Concave.is_convex());
    }
}
