use crate::{Map, Segment, Segments};

/// Build the linear segments connecting consecutive breakpoints.
///
/// For every adjacent pair `(x[i], y[i])`, `(x[i+1], y[i+1])` this computes
///
/// ```text
/// slope     = (y[i] - y[i+1]) / (x[i] - x[i+1])
/// intercept = y[i+1] - slope * x[i+1]
/// ```
///
/// and stores the segment under key `i + 1`, so the first segment is `1` and the
/// collection holds exactly `x.len() - 1` entries. Piecewise constraint sets in
/// optimization models are conventionally indexed this way.
///
/// # Errors
///
/// The input is validated completely before any segment is computed, so either
/// every segment is returned or none is. See [`BuildError`] for the conditions
/// and the order in which they are checked. Finite breakpoints can still be far
/// enough apart in value to overflow the slope, which is reported as
/// [`BuildError::Overflow`].
pub fn build_segments(x: &[f64], y: &[f64]) -> Result<Segments, BuildError> {
    validate(x, y)?;

    let segments = x
        .windows(2)
        .zip(y.windows(2))
        .enumerate()
        .map(|(i, (xs, ys))| {
            let slope = (ys[0] - ys[1]) / (xs[0] - xs[1]);
            let intercept = ys[1] - slope * xs[1];
            if !(slope.is_finite() && intercept.is_finite()) {
                return Err(BuildError::Overflow { segment: i + 1 });
            }
            Ok((
                i + 1,
                Segment {
                    start: xs[0],
                    end: xs[1],
                    slope,
                    intercept,
                },
            ))
        })
        .collect::<Result<Map<_, _>, _>>()?;

    Ok(Segments::new_unchecked(segments))
}

fn validate(x: &[f64], y: &[f64]) -> Result<(), BuildError> {
    if x.len() != y.len() {
        return Err(BuildError::ShapeMismatch {
            breakpoints: x.len(),
            values: y.len(),
        });
    }

    if x.len() < 2 {
        return Err(BuildError::InsufficientPoints { count: x.len() });
    }

    if let Some(index) = x
        .iter()
        .zip(y.iter())
        .position(|(x, y)| !(x.is_finite() && y.is_finite()))
    {
        return Err(BuildError::NonFinite { index });
    }

    for (i, pair) in x.windows(2).enumerate() {
        if pair[0] == pair[1] {
            return Err(BuildError::DegenerateSegment { segment: i + 1 });
        }
        if pair[1] < pair[0] {
            return Err(BuildError::NonMonotone { segment: i + 1 });
        }
    }

    Ok(())
}

/// Reasons a set of breakpoints cannot be turned into segments
///
/// The checks run in declaration order, so an input with several problems
/// reports the first one listed here.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum BuildError {
    /// The breakpoint and value sequences have different lengths
    #[error("{breakpoints} breakpoints but {values} values")]
    ShapeMismatch {
        /// Number of breakpoints supplied
        breakpoints: usize,
        /// Number of values supplied
        values: usize,
    },
    /// Fewer than two breakpoints, so no segment can be formed
    #[error("at least 2 breakpoints are required, got {count}")]
    InsufficientPoints {
        /// Number of breakpoints supplied
        count: usize,
    },
    /// A breakpoint or value is NaN or infinite
    #[error("breakpoint {index} has a non-finite coordinate")]
    NonFinite {
        /// Zero-based position of the offending breakpoint
        index: usize,
    },
    /// Two consecutive breakpoints are equal, which would give a zero-width segment
    #[error("segment {segment} has zero width")]
    DegenerateSegment {
        /// One-based index of the segment that would be formed
        segment: usize,
    },
    /// A breakpoint is smaller than its predecessor
    #[error("breakpoints decrease at segment {segment}")]
    NonMonotone {
        /// One-based index of the segment that would be formed
        segment: usize,
    },
    /// The slope or intercept of a segment is too large to represent
    #[error("segment {segment} overflows: slope or intercept is not finite")]
    Overflow {
        /// One-based index of the offending segment
        segment: usize,
    },
}
