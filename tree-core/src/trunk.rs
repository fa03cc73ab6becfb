//! Trunk rectangle and bark-line strokes.

use glam::Vec2;
use rand::Rng;

use crate::color::Color;
use crate::rng::unit;
use crate::shape::Shape;

/// Stroke color of the bark lines, independent of the theme.
pub const BARK_COLOR: Color = Color::rgb(62, 39, 25);

/// Stroke width of a bark line.
pub const BARK_WIDTH: f32 = 0.5;

/// Builds the trunk: one filled rectangle plus `round(width * 3)`
/// vertical bark strokes.
///
/// The rectangle spans `[-width/2, width/2] × [0, height]`. Bark lines
/// sit at the interior fractions `(i + 1) / (count + 1)` of the width,
/// each x-jittered by `(rand() - 0.5) * width * 0.1`, running from
/// `y = 0.1` to `y = height - 0.1`. A width below roughly a third
/// rounds to zero bark lines, which is fine.
pub fn build_trunk(width: f32, height: f32, fill: Color, rng: &mut impl Rng) -> Vec<Shape> {
    let half = width / 2.0;
    let mut shapes = Vec::new();

    shapes.push(Shape::Polygon {
        points: vec![
            Vec2::new(-half, 0.0),
            Vec2::new(half, 0.0),
            Vec2::new(half, height),
            Vec2::new(-half, height),
        ],
        fill,
        edge: None,
        opacity: 1.0,
    });

    let bark_count = (width * 3.0).round() as usize;
    for i in 0..bark_count {
        let base_x = -half + width * (i + 1) as f32 / (bark_count + 1) as f32;
        let x = base_x + (unit(rng) - 0.5) * width * 0.1;
        shapes.push(Shape::Line {
            from: Vec2::new(x, 0.1),
            to: Vec2::new(x, height - 0.1),
            color: BARK_COLOR,
            width: BARK_WIDTH,
        });
    }

    shapes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng;

    #[test]
    fn trunk_rectangle_has_the_expected_corners() {
        let mut stream = rng::seeded(0);
        let shapes = build_trunk(2.0, 3.0, Color::rgb(100, 70, 40), &mut stream);

        let Shape::Polygon { points, fill, .. } = &shapes[0] else {
            panic!("first trunk shape must be the rectangle");
        };
        assert_eq!(
            points,
            &vec![
                Vec2::new(-1.0, 0.0),
                Vec2::new(1.0, 0.0),
                Vec2::new(1.0, 3.0),
                Vec2::new(-1.0, 3.0),
            ]
        );
        assert_eq!(*fill, Color::rgb(100, 70, 40));
    }

    #[test]
    fn bark_count_rounds_from_the_width() {
        let mut stream = rng::seeded(1);
        // round(1.0 * 3) = 3 bark lines after the rectangle.
        let shapes = build_trunk(1.0, 2.0, BARK_COLOR, &mut stream);
        assert_eq!(shapes.len(), 4);

        let mut stream = rng::seeded(1);
        // round(2.4 * 3) = 7.
        let shapes = build_trunk(2.4, 2.0, BARK_COLOR, &mut stream);
        assert_eq!(shapes.len(), 8);
    }

    #[test]
    fn tiny_width_yields_no_bark_lines() {
        let mut stream = rng::seeded(1);
        let shapes = build_trunk(0.1, 2.0, BARK_COLOR, &mut stream);
        assert_eq!(shapes.len(), 1);
    }

    #[test]
    fn bark_lines_stay_inside_the_trunk_and_span_its_height() {
        let width = 3.0;
        let height = 5.0;
        let mut stream = rng::seeded(7);
        let shapes = build_trunk(width, height, BARK_COLOR, &mut stream);

        for shape in &shapes[1..] {
            let Shape::Line { from, to, color, width: w } = shape else {
                panic!("bark must be a line");
            };
            assert_eq!(from.x, to.x);
            assert_eq!(from.y, 0.1);
            assert_eq!(to.y, height - 0.1);
            assert_eq!(*color, BARK_COLOR);
            assert_eq!(*w, BARK_WIDTH);

            // Interior spacing plus ±width*0.05 jitter keeps lines
            // strictly inside the rectangle.
            assert!(from.x.abs() < width / 2.0, "bark at x = {}", from.x);
        }
    }
}
