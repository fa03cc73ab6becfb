//! Decoration builders: snow, ornaments, and the tree-top star.
//!
//! Each builder is a free function taking the layout figures it needs
//! plus the generation call's random stream, and returns its shapes in
//! paint order. The composer decides whether and in which order the
//! builders run.

use glam::Vec2;
use rand::Rng;

use crate::color::Color;
use crate::geometry::{circle_points, star_points};
use crate::rng::unit;
use crate::shape::Shape;

/// Near-white used for snow patches and the ground drift.
pub const SNOW_COLOR: Color = Color::rgb(250, 250, 252);

/// Fixed ornament palette; one uniform index draw picks a color.
pub const ORNAMENT_COLORS: [Color; 6] = [
    Color::rgb(200, 30, 40),
    Color::rgb(240, 190, 60),
    Color::rgb(40, 70, 180),
    Color::rgb(130, 60, 160),
    Color::rgb(205, 210, 220),
    Color::rgb(40, 160, 170),
];

const ORNAMENT_EDGE: Color = Color::rgb(40, 40, 48);
const SHINE_COLOR: Color = Color::rgb(255, 255, 255);
const STAR_EDGE: Color = Color::rgb(212, 175, 55);

/// Inner radius of the star as a fraction of the outer radius.
const STAR_INNER_RATIO: f32 = 0.4;

/// Scatters snow patches over the foliage cone plus one wavy ground
/// drift along the bottom.
///
/// `30 + layer_count * 10` patches land at a random Y in the lower 90%
/// of the foliage, with X confined to a cone that narrows with height
/// (`base_width/2 * (1 - progress) * 0.8`). Each patch is a flattened
/// ellipse (vertical radius half the horizontal) at opacity 0.8.
///
/// The ground drift is a 50-point wavy baseline
/// `y = 0.3 * sin(2x) * rand() + 0.1` over `x ∈ [-base_width, base_width]`,
/// closed down to `y = -0.5` at both ends and filled opaque.
pub fn build_snow(
    trunk_height: f32,
    height: f32,
    base_width: f32,
    layer_count: usize,
    rng: &mut impl Rng,
) -> Vec<Shape> {
    let mut shapes = Vec::new();

    let patch_count = 30 + layer_count * 10;
    for _ in 0..patch_count {
        let y = trunk_height + unit(rng) * height * 0.9;
        let progress = (y - trunk_height) / height;
        let max_x = base_width / 2.0 * (1.0 - progress) * 0.8;
        let x = (unit(rng) * 2.0 - 1.0) * max_x;
        let radius = 0.1 + unit(rng) * 0.2;

        shapes.push(Shape::Ellipse {
            center: Vec2::new(x, y),
            radius_x: radius,
            radius_y: radius * 0.5,
            fill: SNOW_COLOR,
            opacity: 0.8,
        });
    }

    let mut ground = Vec::with_capacity(52);
    for i in 0..50 {
        let x = -base_width + 2.0 * base_width * i as f32 / 49.0;
        let y = 0.3 * (2.0 * x).sin() * unit(rng) + 0.1;
        ground.push(Vec2::new(x, y));
    }
    ground.push(Vec2::new(base_width, -0.5));
    ground.push(Vec2::new(-base_width, -0.5));

    shapes.push(Shape::Polygon {
        points: ground,
        fill: SNOW_COLOR,
        edge: None,
        opacity: 1.0,
    });

    shapes
}

/// Hangs ornaments inside a narrower cone than the snow.
///
/// `10 + layer_count * 3` ornaments land at a random Y in the lower
/// 85% of the foliage, X within `base_width/2 * (1 - progress) * 0.7`.
/// Each is a 30-point filled circle with a thin dark edge, topped by a
/// smaller white shine circle offset up-left at opacity 0.6.
pub fn build_ornaments(
    trunk_height: f32,
    height: f32,
    base_width: f32,
    layer_count: usize,
    rng: &mut impl Rng,
) -> Vec<Shape> {
    let mut shapes = Vec::new();

    let count = 10 + layer_count * 3;
    for _ in 0..count {
        let y = trunk_height + unit(rng) * height * 0.85;
        let progress = (y - trunk_height) / height;
        let max_x = base_width / 2.0 * (1.0 - progress) * 0.7;
        let x = (unit(rng) * 2.0 - 1.0) * max_x;
        let radius = 0.15 + unit(rng) * 0.1;
        let color = ORNAMENT_COLORS[rng.random_range(0..ORNAMENT_COLORS.len())];

        let center = Vec2::new(x, y);
        shapes.push(Shape::Polygon {
            points: circle_points(center, radius, radius, 30),
            fill: color,
            edge: Some(ORNAMENT_EDGE),
            opacity: 1.0,
        });

        let shine_center = center + Vec2::new(-0.3 * radius, 0.3 * radius);
        let shine_radius = radius * 0.25;
        shapes.push(Shape::Polygon {
            points: circle_points(shine_center, shine_radius, shine_radius, 15),
            fill: SHINE_COLOR,
            edge: None,
            opacity: 0.6,
        });
    }

    shapes
}

/// Builds the tree-top star with its soft glow halo.
///
/// One 10-vertex star polygon with a thin gold edge, then three
/// concentric glow stars at growing radii
/// (`outer * (1 + r*0.2)`, `inner * (1 + r*0.1)` for r = 1..3), each a
/// low-opacity fill so the stack reads as a halo. Consumes no random
/// draws.
pub fn build_star(center: Vec2, outer_radius: f32, color: Color) -> Vec<Shape> {
    let inner_radius = outer_radius * STAR_INNER_RATIO;

    let mut shapes = vec![Shape::Polygon {
        points: star_points(center, outer_radius, inner_radius),
        fill: color,
        edge: Some(STAR_EDGE),
        opacity: 1.0,
    }];

    for r in 1..=3 {
        let r = r as f32;
        shapes.push(Shape::Polygon {
            points: star_points(
                center,
                outer_radius * (1.0 + r * 0.2),
                inner_radius * (1.0 + r * 0.1),
            ),
            fill: color,
            edge: None,
            opacity: 0.1,
        });
    }

    shapes
}
