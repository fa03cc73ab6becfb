//! Reusable geometric constructions.
//!
//! Three primitives feed all higher builders:
//! - [`jagged_edge`] — a vertical silhouette edge with per-point jitter.
//! - [`circle_points`] — a parametric ellipse sample.
//! - [`star_points`] — a five-pointed star via alternating radii.

use std::f32::consts::{PI, TAU};

use glam::Vec2;
use rand::Rng;

use crate::rng::unit;

/// Number of sample points for a silhouette edge of the given width.
///
/// `20 + round(width * 5)`, never fewer than 20.
pub fn edge_point_count(width: f32) -> usize {
    20 + (width * 5.0).round().max(0.0) as usize
}

/// Samples one jittered silhouette edge.
///
/// For `point_count` evenly spaced progress values, the base X comes
/// from the caller's shape function and a lateral jitter of
/// `(rand() - 0.5) * jitter_amplitude * (1 - progress * 0.5)` is added,
/// so the jag shrinks toward `progress = 1` (the far end the caller
/// designates). Y interpolates linearly from `y_bottom` at progress 0
/// to `y_top` at progress 1.
///
/// With `reversed = false` the points walk progress 0 → 1; with
/// `reversed = true` they walk 1 → 0, which lets a caller mirror an
/// edge and close a polygon while keeping the same progress semantics.
///
/// One unit draw is consumed per point even when `jitter_amplitude`
/// is zero, so the stream layout does not depend on the randomness
/// setting.
///
/// ### Parameters
/// - `y_bottom`, `y_top` - Y at progress 0 and 1 respectively.
/// - `base_x` - Base X as a function of progress in `[0, 1]`.
/// - `jitter_amplitude` - Full jitter scale before the taper factor.
/// - `point_count` - Number of samples; must be at least 2.
/// - `reversed` - Walk direction over the progress range.
/// - `rng` - The generation call's random stream.
///
/// ### Returns
/// `point_count` points in walk order.
pub fn jagged_edge(
    y_bottom: f32,
    y_top: f32,
    base_x: impl Fn(f32) -> f32,
    jitter_amplitude: f32,
    point_count: usize,
    reversed: bool,
    rng: &mut impl Rng,
) -> Vec<Vec2> {
    let mut points = Vec::with_capacity(point_count);
    let last = (point_count - 1) as f32;

    for i in 0..point_count {
        let linear = i as f32 / last;
        let progress = if reversed { 1.0 - linear } else { linear };

        let jitter = (unit(rng) - 0.5) * jitter_amplitude * (1.0 - progress * 0.5);
        let x = base_x(progress) + jitter;
        let y = y_bottom + (y_top - y_bottom) * progress;
        points.push(Vec2::new(x, y));
    }
    points
}

/// Samples an ellipse outline.
///
/// `sample_count` evenly spaced angles over `[0, 2π]` including both
/// endpoints, so the first and last point coincide and the curve
/// closes at `sample_count - 1` intervals.
pub fn circle_points(center: Vec2, radius_x: f32, radius_y: f32, sample_count: usize) -> Vec<Vec2> {
    let mut points = Vec::with_capacity(sample_count);
    let last = (sample_count - 1) as f32;
    for i in 0..sample_count {
        let angle = i as f32 / last * TAU;
        points.push(Vec2::new(
            center.x + angle.cos() * radius_x,
            center.y + angle.sin() * radius_y,
        ));
    }
    points
}

/// Builds a closed, point-up five-pointed star of 10 vertices.
///
/// For spike `i` in `0..5`, the outer vertex sits at angle
/// `π/2 − i·2π/5` and the following inner vertex at that angle minus
/// `π/5`; outer and inner radii alternate over the 10 vertices.
pub fn star_points(center: Vec2, outer_radius: f32, inner_radius: f32) -> Vec<Vec2> {
    let mut points = Vec::with_capacity(10);
    for i in 0..5 {
        let outer_angle = PI / 2.0 - i as f32 * TAU / 5.0;
        let inner_angle = outer_angle - PI / 5.0;
        points.push(Vec2::new(
            center.x + outer_angle.cos() * outer_radius,
            center.y + outer_angle.sin() * outer_radius,
        ));
        points.push(Vec2::new(
            center.x + inner_angle.cos() * inner_radius,
            center.y + inner_angle.sin() * inner_radius,
        ));
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng;

    const EPS: f32 = 1e-5;

    #[test]
    fn edge_point_count_has_a_floor_of_twenty() {
        assert_eq!(edge_point_count(0.0), 20);
        assert_eq!(edge_point_count(0.05), 20);
        assert_eq!(edge_point_count(1.0), 25);
        assert_eq!(edge_point_count(8.0), 60);
    }

    #[test]
    fn zero_amplitude_edge_follows_the_base_function_exactly() {
        let mut stream = rng::seeded(3);
        let points = jagged_edge(0.0, 2.0, |p| -4.0 * (1.0 - p), 0.0, 21, false, &mut stream);

        assert_eq!(points.len(), 21);
        for (i, p) in points.iter().enumerate() {
            let progress = i as f32 / 20.0;
            assert!((p.x - -4.0 * (1.0 - progress)).abs() < EPS);
            assert!((p.y - 2.0 * progress).abs() < EPS);
        }
    }

    #[test]
    fn reversed_edge_walks_top_to_bottom() {
        let mut stream = rng::seeded(3);
        let points = jagged_edge(0.0, 2.0, |p| 4.0 * (1.0 - p), 0.0, 11, true, &mut stream);

        // First point is at progress 1 (the top, base X = 0), last at
        // progress 0 (the bottom, base X = 4).
        assert!((points[0].y - 2.0).abs() < EPS);
        assert!(points[0].x.abs() < EPS);
        assert!(points[10].y.abs() < EPS);
        assert!((points[10].x - 4.0).abs() < EPS);
    }

    #[test]
    fn jitter_never_exceeds_the_tapered_amplitude() {
        let mut stream = rng::seeded(11);
        let amplitude = 0.6;
        let points = jagged_edge(0.0, 1.0, |_| 0.0, amplitude, 50, false, &mut stream);

        for (i, p) in points.iter().enumerate() {
            let progress = i as f32 / 49.0;
            let max = 0.5 * amplitude * (1.0 - progress * 0.5) + EPS;
            assert!(p.x.abs() <= max, "point {i} jitter {} > {max}", p.x);
        }
    }

    #[test]
    fn edge_draws_from_the_stream_even_at_zero_amplitude() {
        // The stream must advance identically regardless of amplitude,
        // so downstream draws stay aligned across randomness settings.
        let mut a = rng::seeded(9);
        let mut b = rng::seeded(9);
        let _ = jagged_edge(0.0, 1.0, |_| 0.0, 0.0, 10, false, &mut a);
        let _ = jagged_edge(0.0, 1.0, |_| 0.0, 0.5, 10, false, &mut b);
        assert_eq!(rng::unit(&mut a), rng::unit(&mut b));
    }

    #[test]
    fn circle_points_close_and_stay_on_the_ellipse() {
        let center = Vec2::new(1.0, -2.0);
        let points = circle_points(center, 3.0, 1.5, 30);

        assert_eq!(points.len(), 30);
        assert!((points[0] - points[29]).length() < EPS);

        for p in &points {
            let dx = (p.x - center.x) / 3.0;
            let dy = (p.y - center.y) / 1.5;
            assert!((dx * dx + dy * dy - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn star_has_ten_points_with_the_apex_up() {
        let center = Vec2::new(0.0, 5.0);
        let points = star_points(center, 2.0, 0.8);

        assert_eq!(points.len(), 10);

        // First vertex is the top spike, straight above the center.
        assert!(points[0].x.abs() < EPS);
        assert!((points[0].y - 7.0).abs() < EPS);

        // Radii alternate outer/inner around the center.
        for (i, p) in points.iter().enumerate() {
            let r = (*p - center).length();
            let expected = if i % 2 == 0 { 2.0 } else { 0.8 };
            assert!((r - expected).abs() < EPS, "vertex {i}: r = {r}");
        }
    }
}
