//! The scene composer.
//!
//! A single generation call runs through a fixed pipeline:
//! 1. Validate the parameters (no shapes on failure).
//! 2. Seed the random stream from `parameters.seed`.
//! 3. Trunk rectangle and bark strokes.
//! 4. Foliage tiers, bottom to top, each overlapping the previous.
//! 5. Snow, ornaments and star, each behind its toggle.
//! 6. View bounds.
//!
//! The pipeline order doubles as the stream consumption order, so
//! reordering any stage breaks seed reproducibility.

use glam::Vec2;

use crate::decor;
use crate::layer;
use crate::params::{ParameterError, TreeParameters};
use crate::rng;
use crate::shape::{Bounds, Scene, Shape};
use crate::theme;
use crate::trunk;

/// Generates the complete scene for one set of parameters.
///
/// Pure given the embedded seed: the same parameters always return the
/// same ordered shape list. Later shapes paint over earlier ones.
///
/// ### Errors
/// [`ParameterError`] if any numeric parameter is out of range; no
/// partial scene is produced in that case.
pub fn generate(params: &TreeParameters) -> Result<Scene, ParameterError> {
    params.validate()?;

    let palette = theme::palette(params.theme);
    let mut stream = rng::seeded(params.seed);
    let mut shapes: Vec<Shape> = Vec::new();

    shapes.extend(trunk::build_trunk(
        params.trunk_width,
        params.trunk_height,
        palette.trunk,
        &mut stream,
    ));

    let base_width = params.height * 0.8;
    let layer_height = params.height / params.layer_count as f32;

    // Horizontal view extent; also the clamp limit for the foliage
    // silhouettes so every tier stays inside the bounds.
    let max_x = base_width / 2.0 + 1.0;

    let mut current_y = params.trunk_height;
    for i in 1..=params.layer_count {
        let layer_bottom = current_y - layer_height * 0.2;
        let layer_top = current_y + layer_height;

        // Power-law taper: concave silhouette instead of a linear cone.
        let width_factor = 1.0 - (i - 1) as f32 / params.layer_count as f32;
        let layer_width = base_width * width_factor.powf(0.7);

        // Foliage shades run dark to light; tiers past the table clamp
        // to the lightest entry.
        let fill = palette.foliage[i.min(4) - 1];

        shapes.extend(layer::build_layer(
            layer_bottom,
            layer_top,
            layer_width,
            max_x,
            fill,
            palette.highlight,
            params.randomness,
            &mut stream,
        ));

        // 15% vertical overlap between successive tiers hides seams.
        current_y = layer_top - layer_height * 0.15;
    }

    if params.show_snow {
        shapes.extend(decor::build_snow(
            params.trunk_height,
            params.height,
            base_width,
            params.layer_count,
            &mut stream,
        ));
    }
    if params.show_ornaments {
        shapes.extend(decor::build_ornaments(
            params.trunk_height,
            params.height,
            base_width,
            params.layer_count,
            &mut stream,
        ));
    }
    if params.show_star {
        shapes.extend(decor::build_star(
            Vec2::new(0.0, params.trunk_height + params.height * 0.95),
            params.height * 0.08,
            palette.star,
        ));
    }

    Ok(Scene {
        shapes,
        bounds: Bounds {
            min_x: -max_x,
            max_x,
            min_y: -0.5,
            max_y: params.trunk_height + params.height + 1.0,
        },
    })
}
