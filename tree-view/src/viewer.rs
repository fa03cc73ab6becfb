//! Interactive evergreen tree viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns a set of
//! [`TreeParameters`], regenerates the scene whenever they change, and
//! implements [`eframe::App`] to paint the scene and edit the
//! parameters through an egui UI.

use eframe::App;
use glam::Vec2;
use rand::Rng;
use tree_core::{
    color::Color,
    generate,
    shape::{Bounds, Scene, Shape},
    theme::{self, Theme},
    TreeParameters,
};

/// Main application state for the interactive viewer.
///
/// The per-frame update is:
/// 1. Build the control panels; widget ranges keep the parameters in
///    the generator's valid domain.
/// 2. If the parameters changed since the last frame, regenerate.
/// 3. Paint the scene shapes in order (paint order = scene order).
pub struct Viewer {
    params: TreeParameters,
    last_params: TreeParameters,
    scene: Scene,
    last_error: Option<String>,

    rng: rand::rngs::ThreadRng,

    zoom: f32,
    pan: egui::Vec2,
}

impl Viewer {
    /// Creates a viewer showing the default tree.
    pub fn new() -> Self {
        let params = TreeParameters::default();
        let mut viewer = Self {
            last_params: params.clone(),
            params,
            scene: Scene {
                shapes: Vec::new(),
                bounds: Bounds {
                    min_x: -1.0,
                    max_x: 1.0,
                    min_y: -0.5,
                    max_y: 1.0,
                },
            },
            last_error: None,
            rng: rand::rng(),
            zoom: 40.0,
            pan: egui::vec2(0.0, 220.0),
        };
        viewer.regenerate();
        viewer
    }

    /// Regenerates the scene from the current parameters.
    ///
    /// On a parameter error the previous scene is kept and the error
    /// is shown in the status bar instead of panicking; the widget
    /// ranges normally make this unreachable.
    fn regenerate(&mut self) {
        match generate(&self.params) {
            Ok(scene) => {
                self.scene = scene;
                self.last_error = None;
            }
            Err(e) => self.last_error = Some(e.to_string()),
        }
        self.last_params = self.params.clone();
    }

    /// Converts a world-space position to screen-space.
    ///
    /// World coordinates are scaled by `zoom`, offset by `pan`, and
    /// centered inside the given `rect`. The y-axis is flipped so that
    /// positive y goes up in world space.
    fn world_to_screen(&self, p: Vec2, rect: egui::Rect) -> egui::Pos2 {
        let center = rect.center();
        egui::pos2(
            center.x + p.x * self.zoom + self.pan.x,
            center.y - p.y * self.zoom + self.pan.y,
        )
    }

    /// Inverse of [`Viewer::world_to_screen`] up to rounding.
    fn screen_to_world(&self, p: egui::Pos2, rect: egui::Rect) -> Vec2 {
        let center = rect.center();
        let x = (p.x - center.x - self.pan.x) / self.zoom;
        let y = (center.y - p.y + self.pan.y) / self.zoom;
        Vec2::new(x, y)
    }

    fn color32(c: Color, opacity: f32) -> egui::Color32 {
        egui::Color32::from_rgba_unmultiplied(c.r, c.g, c.b, (opacity * 255.0).round() as u8)
    }

    /// Helper to draw a labeled `f32` [`egui::DragValue`].
    fn labeled_drag_f32(
        ui: &mut egui::Ui,
        label: &str,
        value: &mut f32,
        range: std::ops::RangeInclusive<f32>,
        speed: f64,
    ) {
        ui.horizontal(|ui| {
            ui.label(label);
            ui.add(egui::DragValue::new(value).range(range).speed(speed));
        });
    }

    /// Builds the top panel UI (regenerate, seed reroll, zoom).
    fn ui_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Regenerate").clicked() {
                    self.regenerate();
                }

                if ui.button("🎲 Reroll seed").clicked() {
                    self.params.seed = self.rng.random();
                }

                ui.add(
                    egui::DragValue::new(&mut self.params.seed)
                        .prefix("seed = ")
                        .speed(1.0),
                );

                ui.separator();
                ui.add(egui::Slider::new(&mut self.zoom, 5.0..=120.0).text("Zoom"));
            });
        });
    }

    /// Builds the bottom status bar (shape count, seed, errors).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("seed = {}", self.params.seed));
                ui.separator();
                ui.label(format!("shapes = {}", self.scene.shapes.len()));
                if let Some(err) = &self.last_error {
                    ui.separator();
                    ui.colored_label(egui::Color32::LIGHT_RED, err);
                }
            });
        });
    }

    /// Builds the right-hand panel for the tree parameters.
    fn ui_params_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("params_panel")
            .resizable(true)
            .default_width(220.0)
            .show(ctx, |ui| {
                ui.heading("Tree");

                ui.separator();
                ui.label("Shape");
                Self::labeled_drag_f32(ui, "height:", &mut self.params.height, 2.0..=40.0, 0.1);
                ui.horizontal(|ui| {
                    ui.label("layers:");
                    ui.add(
                        egui::DragValue::new(&mut self.params.layer_count)
                            .range(2..=12)
                            .speed(1.0),
                    );
                });
                Self::labeled_drag_f32(
                    ui,
                    "trunk width:",
                    &mut self.params.trunk_width,
                    0.2..=5.0,
                    0.05,
                );
                Self::labeled_drag_f32(
                    ui,
                    "trunk height:",
                    &mut self.params.trunk_height,
                    0.2..=8.0,
                    0.05,
                );

                ui.separator();
                ui.label("Variation");
                ui.add(egui::Slider::new(&mut self.params.randomness, 0.0..=0.5).text("randomness"));

                ui.separator();
                ui.label("Look");
                egui::ComboBox::from_label("theme")
                    .selected_text(self.params.theme.name())
                    .show_ui(ui, |ui| {
                        for theme in Theme::ALL {
                            ui.selectable_value(&mut self.params.theme, theme, theme.name());
                        }
                    });

                ui.checkbox(&mut self.params.show_ornaments, "ornaments");
                ui.checkbox(&mut self.params.show_star, "star");
                ui.checkbox(&mut self.params.show_snow, "snow");

                ui.separator();
                if ui.button("Reset to defaults").clicked() {
                    self.params = TreeParameters::default();
                }
            });
    }

    /// Tessellates a filled polygon as a centroid fan.
    ///
    /// The scene's polygons (jagged silhouettes, the star, the ground
    /// drift) are concave, so epaint's convex fill cannot be used.
    /// They are all star-shaped about their centroid, which a fan from
    /// the centroid fills correctly.
    fn polygon_mesh(points: &[egui::Pos2], fill: egui::Color32) -> egui::epaint::Mesh {
        let mut mesh = egui::epaint::Mesh::default();
        if points.len() < 3 {
            return mesh;
        }

        let sum = points
            .iter()
            .fold(egui::vec2(0.0, 0.0), |acc, p| acc + p.to_vec2());
        let centroid = egui::pos2(sum.x / points.len() as f32, sum.y / points.len() as f32);

        mesh.colored_vertex(centroid, fill);
        for &p in points {
            mesh.colored_vertex(p, fill);
        }
        let n = points.len() as u32;
        for i in 0..n {
            mesh.add_triangle(0, 1 + i, 1 + (i + 1) % n);
        }
        mesh
    }

    /// Paints one scene shape at the current zoom/pan.
    fn paint_shape(&self, painter: &egui::Painter, rect: egui::Rect, shape: &Shape) {
        match shape {
            Shape::Polygon {
                points,
                fill,
                edge,
                opacity,
            } => {
                let screen: Vec<egui::Pos2> = points
                    .iter()
                    .map(|&p| self.world_to_screen(p, rect))
                    .collect();
                painter.add(egui::Shape::mesh(Self::polygon_mesh(
                    &screen,
                    Self::color32(*fill, *opacity),
                )));
                if let Some(c) = edge {
                    painter.add(egui::Shape::closed_line(
                        screen,
                        egui::Stroke::new(1.0, Self::color32(*c, 1.0)),
                    ));
                }
            }

            Shape::Line {
                from,
                to,
                color,
                width,
            } => {
                let a = self.world_to_screen(*from, rect);
                let b = self.world_to_screen(*to, rect);
                painter.line_segment([a, b], egui::Stroke::new(*width, Self::color32(*color, 1.0)));
            }

            Shape::Ellipse {
                center,
                radius_x,
                radius_y,
                fill,
                opacity,
            } => {
                painter.add(egui::Shape::Ellipse(egui::epaint::EllipseShape {
                    center: self.world_to_screen(*center, rect),
                    radius: egui::vec2(radius_x * self.zoom, radius_y * self.zoom),
                    fill: Self::color32(*fill, *opacity),
                    stroke: egui::Stroke::NONE,
                }));
            }
        }
    }

    /// Builds the central panel where the scene is drawn.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let response = ui.allocate_response(ui.available_size(), egui::Sense::click_and_drag());
            let rect = response.rect;
            let painter = ui.painter_at(rect);

            // Pan with drag.
            if response.dragged() {
                self.pan += response.drag_delta();
            }

            // Zoom around the mouse cursor.
            let scroll = ui.ctx().input(|i| i.raw_scroll_delta.y);
            if scroll != 0.0 {
                let pointer_screen = response.hover_pos().unwrap_or(rect.center());
                let world_before = self.screen_to_world(pointer_screen, rect);

                let factor = (1.0 + scroll * 0.001).clamp(0.5, 2.0);
                self.zoom = (self.zoom * factor).clamp(5.0, 120.0);

                let screen_after = self.world_to_screen(world_before, rect);
                self.pan += pointer_screen - screen_after;
            }

            let background = theme::palette(self.params.theme).background;
            painter.rect_filled(rect, 0.0, Self::color32(background, 1.0));

            // Paint order is the scene order.
            for shape in &self.scene.shapes {
                self.paint_shape(&painter, rect, shape);
            }
        });
    }
}

impl App for Viewer {
    /// eframe callback that builds all UI panels for each frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_top_panel(ctx);
        self.ui_status_bar(ctx);
        self.ui_params_panel(ctx);
        self.ui_central_panel(ctx);

        if self.params != self.last_params {
            self.regenerate();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_rect() -> egui::Rect {
        egui::Rect::from_min_size(egui::Pos2::new(0.0, 0.0), egui::vec2(800.0, 600.0))
    }

    #[test]
    fn world_to_screen_and_back_is_roundtrip() {
        let mut viewer = Viewer::new();
        viewer.zoom = 37.0;
        viewer.pan = egui::vec2(15.0, -7.0);
        let rect = test_rect();

        let world_points = [
            Vec2::new(0.0, 0.0),
            Vec2::new(4.0, 11.5),
            Vec2::new(-3.5, 0.25),
        ];

        let eps = 1e-4;
        for p in world_points {
            let screen = viewer.world_to_screen(p, rect);
            let back = viewer.screen_to_world(screen, rect);
            assert!(
                (back.x - p.x).abs() < eps && (back.y - p.y).abs() < eps,
                "roundtrip mismatch: p={:?}, back={:?}",
                p,
                back
            );
        }
    }

    #[test]
    fn polygon_mesh_fans_a_concave_star_from_its_centroid() {
        // The 10-vertex star outline is concave; the fan must keep one
        // triangle per edge, all rooted at the centroid.
        let star = tree_core::geometry::star_points(Vec2::new(0.0, 0.0), 2.0, 0.8);
        let screen: Vec<egui::Pos2> = star.iter().map(|p| egui::pos2(p.x, p.y)).collect();

        let mesh = Viewer::polygon_mesh(&screen, egui::Color32::GOLD);

        assert_eq!(mesh.vertices.len(), 11);
        assert_eq!(mesh.indices.len(), 30);
        for tri in mesh.indices.chunks(3) {
            assert_eq!(tri[0], 0, "every triangle must be rooted at the centroid");
            assert_ne!(tri[1], tri[2]);
        }

        // The star is symmetric around the origin, so the fan apex
        // lands there.
        let apex = mesh.vertices[0].pos;
        assert!(apex.x.abs() < 1e-3 && apex.y.abs() < 1e-3);
    }

    #[test]
    fn polygon_mesh_ignores_degenerate_outlines() {
        let line = [egui::pos2(0.0, 0.0), egui::pos2(1.0, 0.0)];
        let mesh = Viewer::polygon_mesh(&line, egui::Color32::WHITE);
        assert!(mesh.vertices.is_empty());
        assert!(mesh.indices.is_empty());
    }

    #[test]
    fn new_viewer_has_a_generated_scene() {
        let viewer = Viewer::new();
        assert!(!viewer.scene.shapes.is_empty());
        assert!(viewer.last_error.is_none());
        assert_eq!(viewer.params, viewer.last_params);
    }

    #[test]
    fn parameter_change_regenerates_the_scene() {
        let mut viewer = Viewer::new();
        let before = viewer.scene.clone();

        viewer.params.show_snow = false;
        viewer.params.show_ornaments = false;
        viewer.params.show_star = false;
        viewer.regenerate();

        assert_ne!(viewer.scene, before);
        assert!(viewer.scene.shapes.len() < before.shapes.len());
    }

    #[test]
    fn invalid_parameters_keep_the_previous_scene() {
        let mut viewer = Viewer::new();
        let before = viewer.scene.clone();

        viewer.params.layer_count = 1;
        viewer.regenerate();

        assert_eq!(viewer.scene, before);
        assert!(viewer.last_error.is_some());
    }
}
