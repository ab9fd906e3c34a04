#![warn(missing_docs)]
//! Piecewise-linear approximations of cost curves.
//!
//! A cost curve is given as an ordered list of breakpoints `x` and the values
//! `y` the curve takes at each of them. Every consecutive pair of breakpoints
//! defines a linear segment `y = slope * x + intercept`, and these segments are
//! what an optimization formulation actually consumes: one coefficient pair per
//! segment, indexed from 1.
//!
//! [`build_segments`] is the primitive. It is pure and rejects malformed input
//! before doing any arithmetic. [`PwlCurve`] wraps validated breakpoints together
//! with their [`Segments`] and adds (de)serialization.
//!
//! ```
//! use pwl_core::build_segments;
//!
//! let segments = build_segments(&[0.0, 1.0, 3.0], &[0.0, 4.0, 6.0]).unwrap();
//! assert_eq!(segments.len(), 2);
//! assert_eq!(segments[&2].slope, 1.0);
//! assert_eq!(segments[&2].intercept, 3.0);
//! ```

mod builder;
pub use builder::{BuildError, build_segments};

/// Data types describing breakpoints, segments, and validated curves.
pub mod models;
pub use models::*;

/// An insertion-ordered map with a fast, deterministic hasher.
///
/// Repeated runs over the same input must produce identical output, so the
/// iteration order of every map in this workspace is the insertion order.
pub type Map<K, V> = indexmap::IndexMap<K, V, rustc_hash::FxBuildHasher>;
