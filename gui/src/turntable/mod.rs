//! Interactive turntable view of a pixel sample.
//!
//! Drawn through egui's painter inside an eframe window, so the points go
//! through the GPU-backed renderer eframe was built with.

pub mod camera;

use colormap3d::PixelSample;
use eframe::egui;
use glam::{Mat4, Vec3};

use camera::{Projected, TurntableCamera};

const HELP: &str = "Drag: rotate | Shift/right-drag: pan | Scroll: zoom | Home: reset | Esc: close";

#[derive(Debug, Clone)]
pub struct TurntableOptions {
    pub title: String,
    pub window_size: [f32; 2],
    /// Marker radius in pixels.
    pub point_size: f32,
}

impl Default for TurntableOptions {
    fn default() -> Self {
        Self {
            title: "3D Color Map".to_string(),
            window_size: [1024.0, 768.0],
            point_size: 3.0,
        }
    }
}

/// Open the viewer and block until its window is closed.
pub fn run(sample: PixelSample, options: TurntableOptions) -> anyhow::Result<()> {
    let native = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(options.window_size)
            .with_title(options.title.clone()),
        ..Default::default()
    };

    let title = options.title.clone();
    tracing::debug!("opening turntable viewer with {} points", sample.len());
    eframe::run_native(
        &title,
        native,
        Box::new(move |cc| Ok(Box::new(ColorMapApp::new(cc, &sample, options)))),
    )
    .map_err(|e| anyhow::anyhow!("GUI error: {}", e))
}

struct ViewPoint {
    position: Vec3,
    color: egui::Color32,
}

/// Project the points and order them farthest first, so nearer markers are
/// painted over farther ones. Points behind the eye are left out.
fn far_to_near(
    camera: &TurntableCamera,
    view_proj: &Mat4,
    points: &[ViewPoint],
    size: [f32; 2],
) -> Vec<(Projected, egui::Color32)> {
    let mut projected: Vec<_> = points
        .iter()
        .filter_map(|p| {
            camera
                .project(view_proj, p.position, size)
                .map(|s| (s, p.color))
        })
        .collect();
    projected.sort_by(|a, b| b.0.depth.total_cmp(&a.0.depth));
    projected
}

struct Axis {
    end: Vec3,
    label: &'static str,
    color: egui::Color32,
}

struct ColorMapApp {
    points: Vec<ViewPoint>,
    axes: [Axis; 3],
    camera: TurntableCamera,
    home: TurntableCamera,
    point_size: f32,
}

impl ColorMapApp {
    fn new(cc: &eframe::CreationContext<'_>, sample: &PixelSample, options: TurntableOptions) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        let mode = sample.mode();
        let extent = mode.channel_max().map(f32::from);
        let labels = mode.channel_labels();

        let points = sample
            .points()
            .iter()
            .map(|p| {
                let [r, g, b] = p.rgb8();
                ViewPoint {
                    position: Vec3::from(p.channels.map(f32::from)),
                    color: egui::Color32::from_rgb(r, g, b),
                }
            })
            .collect();

        let axes = [
            Axis {
                end: Vec3::X * extent[0],
                label: labels[0],
                color: egui::Color32::RED,
            },
            Axis {
                end: Vec3::Y * extent[1],
                label: labels[1],
                color: egui::Color32::GREEN,
            },
            Axis {
                end: Vec3::Z * extent[2],
                label: labels[2],
                color: egui::Color32::from_rgb(80, 120, 255),
            },
        ];

        let camera = TurntableCamera::framing(extent);
        Self {
            points,
            axes,
            camera,
            home: camera,
            point_size: options.point_size,
        }
    }

    fn handle_input(&mut self, ui: &egui::Ui, response: &egui::Response) {
        let delta = response.drag_delta();
        let shift = ui.input(|i| i.modifiers.shift);

        if response.dragged_by(egui::PointerButton::Primary) && !shift {
            self.camera.orbit(delta.x, delta.y);
        } else if response.dragged_by(egui::PointerButton::Secondary)
            || response.dragged_by(egui::PointerButton::Middle)
            || response.dragged_by(egui::PointerButton::Primary)
        {
            self.camera.pan(delta.x, delta.y, response.rect.height());
        }

        if response.hovered() {
            let scroll = ui.input(|i| i.smooth_scroll_delta.y);
            if scroll != 0.0 {
                self.camera.zoom((1.0 - scroll * 0.002).clamp(0.5, 2.0));
            }
        }
    }

    fn paint(&self, painter: &egui::Painter, rect: egui::Rect) {
        let size = [rect.width(), rect.height()];
        let view_proj = self.camera.view_proj(rect.aspect_ratio());
        let to_screen = |p: [f32; 2]| rect.min + egui::vec2(p[0], p[1]);

        if let Some(origin) = self.camera.project(&view_proj, Vec3::ZERO, size) {
            for axis in &self.axes {
                let Some(end) = self.camera.project(&view_proj, axis.end, size) else {
                    continue;
                };
                painter.line_segment(
                    [to_screen(origin.screen), to_screen(end.screen)],
                    egui::Stroke::new(2.0, axis.color),
                );
                painter.text(
                    to_screen(end.screen),
                    egui::Align2::LEFT_BOTTOM,
                    axis.label,
                    egui::FontId::proportional(14.0),
                    axis.color,
                );
            }
        }

        for (p, color) in far_to_near(&self.camera, &view_proj, &self.points, size) {
            painter.circle_filled(to_screen(p.screen), self.point_size, color);
        }

        painter.text(
            rect.left_bottom() + egui::vec2(8.0, -8.0),
            egui::Align2::LEFT_BOTTOM,
            HELP,
            egui::FontId::proportional(12.0),
            egui::Color32::GRAY,
        );
    }
}

impl eframe::App for ColorMapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
        if ctx.input(|i| i.key_pressed(egui::Key::Home)) {
            self.camera = self.home;
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(egui::Color32::BLACK))
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::drag());
                self.handle_input(ui, &response);
                self.paint(&painter, response.rect);
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: [f32; 2] = [800.0, 600.0];

    fn point(position: Vec3, color: egui::Color32) -> ViewPoint {
        ViewPoint { position, color }
    }

    #[test]
    fn points_are_painted_far_to_near() {
        let camera = TurntableCamera::framing([255.0, 255.0, 255.0]);
        let vp = camera.view_proj(SIZE[0] / SIZE[1]);
        let toward_eye = camera.eye() - camera.center;

        let points = [
            point(camera.center, egui::Color32::GREEN),
            point(camera.center + toward_eye * 0.5, egui::Color32::WHITE),
            point(camera.center - toward_eye * 0.5, egui::Color32::RED),
            point(camera.eye() + toward_eye, egui::Color32::BLUE),
        ];

        let sorted = far_to_near(&camera, &vp, &points, SIZE);
        let colors: Vec<_> = sorted.iter().map(|(_, c)| *c).collect();
        assert_eq!(
            colors,
            [egui::Color32::RED, egui::Color32::GREEN, egui::Color32::WHITE]
        );
        assert!(sorted.windows(2).all(|w| w[0].0.depth >= w[1].0.depth));
    }

    #[test]
    fn no_points_paints_nothing() {
        let camera = TurntableCamera::framing([180.0, 255.0, 255.0]);
        let vp = camera.view_proj(1.0);
        assert!(far_to_near(&camera, &vp, &[], SIZE).is_empty());
    }
}
