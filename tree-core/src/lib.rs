//! Deterministic 2D evergreen tree generation library.
//!
//! Main components:
//! - [`params`] — immutable generation parameters and validation.
//! - [`theme`] — named color palettes with a total lookup.
//! - [`shape`] — the drawable shape list produced by a generation call.
//! - [`geometry`] — jagged edges, ellipse sampling, star points.
//! - [`trunk`] / [`layer`] / [`decor`] — the individual shape builders.
//! - [`scene`] — the composer mapping (parameters, seed) to a [`shape::Scene`].
//! - [`rng`] — the seeded random stream all builders draw from.
//!
//! The whole pipeline is a pure function of the parameters: the same
//! [`params::TreeParameters`] (seed included) always produces the same
//! ordered shape list.

pub mod color;
pub mod decor;
pub mod geometry;
pub mod layer;
pub mod params;
pub mod rng;
pub mod scene;
pub mod shape;
pub mod theme;
pub mod trunk;

pub use params::{ParameterError, TreeParameters};
pub use scene::generate;
pub use shape::{Bounds, Scene, Shape};
pub use theme::{ColorTheme, Theme, theme_for};
