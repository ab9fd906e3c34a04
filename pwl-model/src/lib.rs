#![warn(missing_docs)]
//! Piecewise-linear cost curves attached to sites, written out as constraints.
//!
//! A [`CostModel`] names a set of cost curves and a set of sites, each site
//! using one curve. For a site `s` with curve segments `k`, the model relates a
//! unit-count variable `units_s` and a cost variable `cost_s` through one
//! inequality per segment,
//!
//! ```text
//! cost_s - slope_k * units_s <= intercept_k     (Bound::Upper)
//! cost_s - slope_k * units_s >= intercept_k     (Bound::Lower)
//! ```
//!
//! The [`export`] module writes these constraints in `.lp` or `.mps` form for an
//! external MILP solver.

mod config;
pub use config::{Bound, ExportConfig};

mod constraint;
pub use constraint::Constraint;

mod ids;
pub use ids::{CurveId, SiteId};

mod model;
pub use model::{CostModel, CostModelDto, ModelError, Site};

/// Writers for standard mathematical-programming file formats.
pub mod export;

pub use pwl_core::Map;
