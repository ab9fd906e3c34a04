use super::{Segment, Shape};
use crate::Map;

/// The ordered, immutable collection of segments of a piecewise-linear curve
///
/// Keys run from `1` to `n - 1` for a curve with `n` breakpoints, and iteration
/// follows the breakpoints from left to right. The collection is only ever
/// produced whole, by [`build_segments`](crate::build_segments), and exposes no
/// mutation; read access goes through `Deref` to the underlying map.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct Segments(Map<usize, Segment>);

impl Segments {
    // Callers guarantee the map is non-empty, keyed 1..=n and ordered by breakpoint.
    pub(crate) fn new_unchecked(segments: Map<usize, Segment>) -> Self {
        Self(segments)
    }

    /// The interval spanned by all segments, from the first breakpoint to the last.
    pub fn domain(&self) -> (f64, f64) {
        match (self.0.first(), self.0.last()) {
            (Some((_, first)), Some((_, last))) => (first.start, last.end),
            // Unreachable for any collection produced by the builder
            _ => (f64::NAN, f64::NAN),
        }
    }

    /// Find the segment whose domain contains `x`.
    ///
    /// Segments cover half-open intervals `[start, end)`, so an interior
    /// breakpoint belongs to the segment on its right. The last segment is also
    /// closed on the right, so the final breakpoint belongs to it.
    ///
    /// Returns `None` if `x` is outside the domain or NaN.
    pub fn locate(&self, x: f64) -> Option<(usize, &Segment)> {
        let (min, max) = self.domain();
        if !(min <= x && x <= max) {
            return None;
        }

        // Count the segments whose start is <= x; the answer is the last of them.
        let (mut lo, mut hi) = (0, self.0.len());
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            let (_, segment) = self.0.get_index(mid)?;
            if segment.start <= x {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }

        self.0
            .get_index(lo.checked_sub(1)?)
            .map(|(index, segment)| (*index, segment))
    }

    /// Evaluate the piecewise-linear function at `x`, if `x` is in its domain.
    pub fn evaluate(&self, x: f64) -> Option<f64> {
        self.locate(x).map(|(_, segment)| segment.evaluate(x))
    }

    /// The slope of every segment, keyed by segment index.
    pub fn slopes(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.0.iter().map(|(index, segment)| (*index, segment.slope))
    }

    /// The intercept of every segment, keyed by segment index.
    pub fn intercepts(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.0.iter().map(|(index, segment)| (*index, segment.intercept))
    }

    /// Classify the curvature of the function from its consecutive slopes.
    ///
    /// Slope changes no larger than `tolerance` in magnitude are treated as zero.
    pub fn shape(&self, tolerance: f64) -> Shape {
        let slopes = self.0.values().map(|segment| segment.slope).collect::<Vec<_>>();
        Shape::classify(&slopes, tolerance)
    }
}

impl std::ops::Deref for Segments {
    type Target = Map<usize, Segment>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl IntoIterator for Segments {
    type Item = (usize, Segment);
    type IntoIter = indexmap::map::IntoIter<usize, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Segments {
    type Item = (&'a usize, &'a Segment);
    type IntoIter = indexmap::map::Iter<'a, usize, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::build_segments;

    fn data() -> crate::Segments {
        build_segments(
            &[0.0, 1.0, 2.0, 3.0, 5.0, 10.0, 20.0],
            &[0.0, 4000.0, 6500.0, 7500.0, 9300.0, 13000.0, 17000.0],
        )
        .unwrap()
    }

    #[test]
    fn domain() {
        assert_eq!(data().domain(), (0.0, 20.0));
    }

    #[test]
    fn locate_interior() {
        assert_eq!(data().locate(4.0).map(|(i, _)| i), Some(4));
        assert_eq!(data().locate(0.5).map(|(i, _)| i), Some(1));
        assert_eq!(data().locate(15.0).map(|(i, _)| i), Some(6));
    }

    #[test]
    fn locate_breakpoints() {
        let segments = data();
        // The first breakpoint opens segment 1
        assert_eq!(segments.locate(0.0).map(|(i, _)| i), Some(1));
        // Interior breakpoints belong to the segment on the right
        assert_eq!(segments.locate(3.0).map(|(i, _)| i), Some(4));
        assert_eq!(segments.locate(10.0).map(|(i, _)| i), Some(6));
        // The last breakpoint closes the final segment
        assert_eq!(segments.locate(20.0).map(|(i, _)| i), Some(6));
    }

    #[test]
    fn locate_outside() {
        let segments = data();
        assert!(segments.locate(-1.0).is_none());
        assert!(segments.locate(20.000001).is_none());
        assert!(segments.locate(f64::NAN).is_none());
    }

    #[test]
    fn evaluate() {
        let segments = data();
        assert_eq!(segments.evaluate(4.0), Some(8400.0));
        assert_eq!(segments.evaluate(20.0), Some(17000.0));
        assert_eq!(segments.evaluate(21.0), None);
    }

    #[test]
    fn slopes_and_intercepts() {
        let segments = data();
        let slopes = segments.slopes().collect::<Vec<_>>();
        let intercepts = segments.intercepts().collect::<Vec<_>>();

        assert_eq!(
            slopes,
            vec![
                (1, 4000.0),
                (2, 2500.0),
                (3, 1000.0),
                (4, 900.0),
                (5, 740.0),
                (6, 400.0)
            ]
        );
        assert_eq!(
            intercepts,
            vec![
                (1, 0.0),
                (2, 1500.0),
                (3, 4500.0),
                (4, 4800.0),
                (5, 5600.0),
                (6, 9000.0)
            ]
        );
    }
}
