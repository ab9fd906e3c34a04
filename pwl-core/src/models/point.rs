/// A breakpoint of a piecewise-linear curve and the value the curve takes there
///
/// In a cost curve, `x` is typically a quantity (e.g. number of units installed)
/// and `y` the cumulative cost of that quantity.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema), schemars(inline))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// The breakpoint (independent variable)
    pub x: f64,
    /// The value at the breakpoint (dependent variable)
    pub y: f64,
}
