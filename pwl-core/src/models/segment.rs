/// One linear piece of a piecewise-linear curve
///
/// The segment describes the line `y = slope * x + intercept`, valid on the
/// interval `[start, end)`. Whether `end` itself belongs to the segment depends
/// on its position in the enclosing [`Segments`](crate::Segments): only the last
/// segment is closed on the right.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    /// The left breakpoint
    pub start: f64,
    /// The right breakpoint
    pub end: f64,
    /// The rate of change of the value over `[start, end]`
    pub slope: f64,
    /// The value of the extended line at x = 0
    pub intercept: f64,
}

impl Segment {
    /// Evaluate the segment's line at `x`.
    ///
    /// This does not check that `x` lies within the segment.
    pub fn evaluate(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// The width of the interval the segment covers.
    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data() -> Segment {
        Segment {
            start: 3.0,
            end: 5.0,
            slope: 900.0,
            intercept: 4800.0,
        }
    }

    #[test]
    fn evaluate_endpoints() {
        let segment = data();
        assert_eq!(segment.evaluate(3.0), 7500.0);
        assert_eq!(segment.evaluate(5.0), 9300.0);
    }

    #[test]
    fn evaluate_extends_beyond_domain() {
        // The line itself is unbounded; domain checks belong to `Segments::locate`
        assert_eq!(data().evaluate(0.0), 4800.0);
    }

    #[test]
    fn width() {
        assert_eq!(data().width(), 2.0);
    }
}
