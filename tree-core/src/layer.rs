//! One foliage tier: a jagged triangle silhouette plus optional
//! interior branch strokes.

use glam::Vec2;
use rand::Rng;

use crate::color::Color;
use crate::geometry::{edge_point_count, jagged_edge};
use crate::rng::unit;
use crate::shape::Shape;

/// Randomness level at which branch strokes start to appear.
pub const BRANCH_THRESHOLD: f32 = 0.1;

/// Jag amplitude per unit of width, before the randomness factor.
const JITTER_SCALE: f32 = 0.3;

/// Builds one foliage tier between `y_bottom` and `y_top`.
///
/// The silhouette is a triangle tapering to a point at `y_top`:
/// base X is `±width/2 * (1 - progress)`. With `randomness > 0` the
/// tier width is first perturbed by `1 + (rand() - 0.5) * randomness`,
/// and every edge sample gets a tapered lateral jag. The left edge
/// walks bottom to top, the right edge top to bottom, and the two
/// concatenated make one closed polygon. Silhouette X samples are
/// clamped to `±max_half_width`: the width perturbation plus an
/// outward jag can otherwise overshoot the caller's horizontal
/// extent at high randomness.
///
/// From `randomness >= 0.1` upward, `round(5 + randomness * 10)`
/// branch strokes are scattered over the lower 80% of the tier, each
/// running from near the center line outward and slightly downward,
/// stroked in the highlight color.
///
/// The polygon is always the first returned shape so the strokes draw
/// on top of it.
pub fn build_layer(
    y_bottom: f32,
    y_top: f32,
    target_width: f32,
    max_half_width: f32,
    fill: Color,
    highlight: Color,
    randomness: f32,
    rng: &mut impl Rng,
) -> Vec<Shape> {
    let layer_height = y_top - y_bottom;

    let mut width = target_width;
    if randomness > 0.0 {
        width *= 1.0 + (unit(rng) - 0.5) * randomness;
    }
    let half = width / 2.0;

    let jitter_amplitude = width * JITTER_SCALE * randomness;
    let point_count = edge_point_count(width);

    let mut points = jagged_edge(
        y_bottom,
        y_top,
        |p| -half * (1.0 - p),
        jitter_amplitude,
        point_count,
        false,
        rng,
    );
    points.extend(jagged_edge(
        y_bottom,
        y_top,
        |p| half * (1.0 - p),
        jitter_amplitude,
        point_count,
        true,
        rng,
    ));

    for p in &mut points {
        p.x = p.x.clamp(-max_half_width, max_half_width);
    }

    let mut shapes = vec![Shape::Polygon {
        points,
        fill,
        edge: None,
        opacity: 1.0,
    }];

    if randomness >= BRANCH_THRESHOLD {
        let branch_count = (5.0 + randomness * 10.0).round() as usize;
        for _ in 0..branch_count {
            let branch_y = y_bottom + unit(rng) * 0.8 * layer_height;
            let progress = (branch_y - y_bottom) / layer_height;
            let max_extent = width * (1.0 - progress) * 0.4;
            let side = if unit(rng) < 0.5 { -1.0 } else { 1.0 };

            let start_x = side * 0.2 * max_extent * unit(rng);
            let end_x = side * (0.4 + 0.6 * unit(rng)) * max_extent;
            let end_y = branch_y - 0.1 * layer_height * unit(rng);

            shapes.push(Shape::Line {
                from: Vec2::new(start_x, branch_y),
                to: Vec2::new(end_x, end_y),
                color: highlight,
                width: 1.0 + unit(rng),
            });
        }
    }

    shapes
}
