use super::{Point, Segments};
use crate::{BuildError, build_segments};

/// A validated piecewise-linear curve together with its segments
///
/// The breakpoints are guaranteed to number at least two, to be finite, and to
/// be strictly increasing in `x`. The segments are computed once, at
/// construction.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "PwlCurveDto", into = "PwlCurveDto")
)]
pub struct PwlCurve {
    points: Vec<Point>,
    segments: Segments,
}

impl PwlCurve {
    /// Creates a new curve from its breakpoints, validating all constraints
    pub fn new(points: Vec<Point>) -> Result<Self, BuildError> {
        let (x, y): (Vec<f64>, Vec<f64>) = points.iter().map(|p| (p.x, p.y)).unzip();
        let segments = build_segments(&x, &y)?;
        Ok(Self { points, segments })
    }

    /// Creates a new curve from separate breakpoint and value sequences
    pub fn from_columns(x: Vec<f64>, y: Vec<f64>) -> Result<Self, BuildError> {
        let segments = build_segments(&x, &y)?;
        let points = x
            .into_iter()
            .zip(y)
            .map(|(x, y)| Point { x, y })
            .collect();
        Ok(Self { points, segments })
    }

    /// The breakpoints of the curve, in increasing order of `x`
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The linear segments between consecutive breakpoints
    pub fn segments(&self) -> &Segments {
        &self.segments
    }

    /// The interval `(min, max)` of breakpoints on which the curve is defined
    pub fn domain(&self) -> (f64, f64) {
        self.segments.domain()
    }

    /// Evaluate the curve at `x`, if `x` is in its domain
    pub fn evaluate(&self, x: f64) -> Option<f64> {
        self.segments.evaluate(x)
    }
}

/// DTO to ensure that we always validate when we deserialize from an untrusted source
///
/// A curve is accepted either as a list of points or as two parallel columns.
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema), schemars(untagged))]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(untagged))]
#[derive(Debug)]
pub enum PwlCurveDto {
    /// `[{"x": .., "y": ..}, ...]`
    Points(Vec<Point>),
    /// `{"x": [..], "y": [..]}`
    Columns(CurveColumns),
}

/// The breakpoints and values of a curve as two parallel sequences
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug)]
pub struct CurveColumns {
    /// The breakpoints
    pub x: Vec<f64>,
    /// The value at each breakpoint
    pub y: Vec<f64>,
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PwlCurveDto {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        serde_untagged::UntaggedEnumVisitor::new()
            .seq(|seq| seq.deserialize().map(PwlCurveDto::Points))
            .map(|map| map.deserialize().map(PwlCurveDto::Columns))
            .deserialize(deserializer)
    }
}

impl TryFrom<PwlCurveDto> for PwlCurve {
    type Error = BuildError;

    fn try_from(value: PwlCurveDto) -> Result<Self, Self::Error> {
        match value {
            PwlCurveDto::Points(points) => Self::new(points),
            PwlCurveDto::Columns(CurveColumns { x, y }) => Self::from_columns(x, y),
        }
    }
}

impl From<PwlCurve> for PwlCurveDto {
    fn from(value: PwlCurve) -> Self {
        PwlCurveDto::Points(value.points)
    }
}

// `schemars` does not follow serde's try_from/into, so the schema of a curve is
// the schema of what it is parsed from.
#[cfg(feature = "schemars")]
impl schemars::JsonSchema for PwlCurve {
    fn schema_name() -> std::borrow::Cow<'static, str> {
        <PwlCurveDto as schemars::JsonSchema>::schema_name()
    }

    fn json_schema(generator: &mut schemars::SchemaGenerator) -> schemars::Schema {
        <PwlCurveDto as schemars::JsonSchema>::json_schema(generator)
    }
}
