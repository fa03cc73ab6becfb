//! The generator's output model.
//!
//! A generation call produces one [`Scene`]: an ordered list of
//! [`Shape`] values plus view bounds. The order of the list **is** the
//! paint order; a renderer must draw shapes in sequence, later shapes
//! on top of earlier ones.

use glam::Vec2;

use crate::color::Color;

/// One drawable primitive.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Polygon {
        /// Vertices in draw order; the renderer closes the path.
        points: Vec<Vec2>,
        fill: Color,
        /// Optional thin edge stroke.
        edge: Option<Color>,
        opacity: f32,
    },
    Line {
        from: Vec2,
        to: Vec2,
        color: Color,
        width: f32,
    },
    Ellipse {
        center: Vec2,
        radius_x: f32,
        radius_y: f32,
        fill: Color,
        opacity: f32,
    },
}

/// Axis-aligned view bounds of a scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl Bounds {
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }
}

/// The full result of one generation call.
///
/// Has no identity beyond the call that produced it; a renderer or
/// serializer consumes it immediately.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub shapes: Vec<Shape>,
    pub bounds: Bounds,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_contains_is_inclusive() {
        let b = Bounds {
            min_x: -1.0,
            max_x: 1.0,
            min_y: 0.0,
            max_y: 2.0,
        };
        assert!(b.contains(Vec2::new(0.0, 1.0)));
        assert!(b.contains(Vec2::new(-1.0, 0.0)));
        assert!(b.contains(Vec2::new(1.0, 2.0)));
        assert!(!b.contains(Vec2::new(1.1, 1.0)));
        assert!(!b.contains(Vec2::new(0.0, -0.1)));
    }
}
