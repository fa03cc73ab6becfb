//! Generation parameters and their validation.

use thiserror::Error;

use crate::theme::Theme;

/// Everything a single generation call needs, seed included.
///
/// The struct is an immutable input: the generator never mutates it,
/// and equal parameter values always produce equal scenes.
#[derive(Clone, Debug, PartialEq)]
pub struct TreeParameters {
    /// Total foliage height, above the trunk.
    pub height: f32,
    /// Number of stacked foliage tiers, bottom to top.
    pub layer_count: usize,
    pub trunk_width: f32,
    pub trunk_height: f32,
    /// Jag / variation amount. 0 gives a perfectly smooth silhouette;
    /// the design-intended range is 0 to 0.5.
    pub randomness: f32,
    pub theme: Theme,
    pub show_ornaments: bool,
    pub show_star: bool,
    pub show_snow: bool,
    pub seed: u64,
}

impl Default for TreeParameters {
    fn default() -> Self {
        Self {
            height: 10.0,
            layer_count: 5,
            trunk_width: 1.0,
            trunk_height: 1.5,
            randomness: 0.25,
            theme: Theme::Classic,
            show_ornaments: true,
            show_star: true,
            show_snow: true,
            seed: 42,
        }
    }
}

/// Rejected parameter values.
///
/// An unknown theme name is deliberately *not* in this taxonomy; name
/// resolution falls back to Classic instead (see [`crate::theme`]).
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ParameterError {
    #[error("height must be positive, got {0}")]
    NonPositiveHeight(f32),
    #[error("layer count must be at least 2, got {0}")]
    TooFewLayers(usize),
    #[error("trunk width must be positive, got {0}")]
    NonPositiveTrunkWidth(f32),
    #[error("trunk height must be positive, got {0}")]
    NonPositiveTrunkHeight(f32),
}

impl TreeParameters {
    /// Checks the numeric ranges the generator relies on.
    ///
    /// Called by [`crate::scene::generate`] before any shape is built,
    /// so an invalid call never produces a partial scene.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if !(self.height > 0.0) {
            return Err(ParameterError::NonPositiveHeight(self.height));
        }
        if self.layer_count < 2 {
            return Err(ParameterError::TooFewLayers(self.layer_count));
        }
        if !(self.trunk_width > 0.0) {
            return Err(ParameterError::NonPositiveTrunkWidth(self.trunk_width));
        }
        if !(self.trunk_height > 0.0) {
            return Err(ParameterError::NonPositiveTrunkHeight(self.trunk_height));
        }
        Ok(())
    }
}
