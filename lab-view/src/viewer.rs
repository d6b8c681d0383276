//! Particle background and logic lab built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the [`ParticleField`] and the
//! lab's text state and implements [`eframe::App`] to drive both. egui acts
//! as the host: it reports the panel size, forwards pointer hover into the
//! field's shared pointer, and schedules one tick per repaint.

use eframe::App;
use glam::Vec2;
use lab_core::{
    classifier::{self, Analysis},
    config::Config,
    field::{ParticleField, TickStats},
    render::{self, Canvas, Rgba},
    report::{EMPTY_INPUT_MESSAGE, SUMMARY_TITLE},
    types::Viewport,
};

const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(2, 6, 23);
const ROW_FILL: egui::Color32 = egui::Color32::from_rgb(30, 41, 59);
const MUTED: egui::Color32 = egui::Color32::from_rgb(148, 163, 184);

fn color32(c: Rgba) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
}

/// [`Canvas`] over an egui painter, with field coordinates relative to `origin`.
struct PainterCanvas<'a> {
    painter: &'a egui::Painter,
    origin: egui::Pos2,
}

impl Canvas for PainterCanvas<'_> {
    fn clear(&mut self, viewport: Viewport) {
        let rect = egui::Rect::from_min_size(
            self.origin,
            egui::vec2(viewport.width, viewport.height),
        );
        self.painter.rect_filled(rect, 0.0, BACKGROUND);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        let p = self.origin + egui::vec2(center.x, center.y);
        self.painter.circle_filled(p, radius, color32(color));
    }
}

/// Main application state.
///
/// ### Fields
/// - `field` - The particle simulator; created empty and populated on the
///   first frame, once the panel size is known.
/// - `rng` - Random number generator used when (re)initializing particles.
/// - `viewport` - Panel size seen on the last frame, `None` before the first.
/// - `last_stats` - Result of the last tick (for the status bar).
///
/// - `lab_open` - Whether the "Interactive Lab" window is shown.
/// - `input` - Text typed into the lab.
/// - `analysis` - Result of the last "Visualize" click.
pub struct Viewer {
    field: ParticleField,
    rng: rand::rngs::ThreadRng,
    viewport: Option<Viewport>,
    last_stats: TickStats,

    lab_open: bool,
    input: String,
    analysis: Option<Analysis>,
}

impl Viewer {
    pub fn new(cfg: Config) -> Self {
        Self {
            field: ParticleField::new(cfg),
            rng: rand::rng(),
            viewport: None,
            last_stats: TickStats::default(),
            lab_open: false,
            input: String::new(),
            analysis: None,
        }
    }

    /// Re-scatters all particles over the last known viewport.
    fn reset(&mut self) {
        if let Some(vp) = self.viewport {
            self.field.reset(vp, &mut self.rng);
        }
    }

    /// Converts a screen position into field coordinates for the panel `rect`.
    fn screen_to_field(p: egui::Pos2, rect: egui::Rect) -> Vec2 {
        Vec2::new(p.x - rect.min.x, p.y - rect.min.y)
    }

    /// Inverse of [`Viewer::screen_to_field`].
    fn field_to_screen(p: Vec2, rect: egui::Rect) -> egui::Pos2 {
        rect.min + egui::vec2(p.x, p.y)
    }

    /// Forwards hover state into the field's shared pointer.
    fn update_pointer(&self, hover: Option<egui::Pos2>, rect: egui::Rect) {
        match hover {
            Some(p) => self.field.pointer().set(Self::screen_to_field(p, rect)),
            None => self.field.pointer().clear(),
        }
    }

    /// Runs one frame of the simulation for the given panel size.
    ///
    /// The field is populated the first time a non-empty viewport is seen.
    /// Later size changes are only picked up by the wall checks; existing
    /// particles are not re-scattered.
    fn advance(&mut self, viewport: Viewport) {
        if viewport.is_empty() {
            return;
        }
        if self.viewport.is_none() {
            self.field.reset(viewport, &mut self.rng);
        }
        self.viewport = Some(viewport);
        self.last_stats = self.field.tick(viewport);
    }

    fn visualize(&mut self) {
        self.analysis = Some(classifier::analyze(&self.input));
    }

    /// Builds the top bar (lab toggle, reset).
    fn ui_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .selectable_label(self.lab_open, "🧪 Interactive Lab")
                    .clicked()
                {
                    self.lab_open = !self.lab_open;
                }
                if ui.button("Reset particles").clicked() {
                    self.reset();
                }
            });
        });
    }

    /// Builds the bottom status bar (particles, pointer, displaced count).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("repelled = {}", self.last_stats.displaced));
                ui.label(format!(
                    "pointer = {}",
                    if self.last_stats.pointer_present { "in" } else { "out" }
                ));
                ui.separator();
                ui.label(format!("particles = {}", self.field.particles().len()));
            });
        });
    }

    /// Draws one classified row with a coloured stripe on its left edge.
    fn ui_row(ui: &mut egui::Ui, text: String, accent: egui::Color32) {
        let response = egui::Frame::new()
            .fill(ROW_FILL)
            .inner_margin(egui::Margin::symmetric(12, 8))
            .corner_radius(egui::CornerRadius::same(8))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(egui::RichText::new(text).color(egui::Color32::from_gray(229)));
            })
            .response;
        let stripe = egui::Rect::from_min_size(
            response.rect.min,
            egui::vec2(4.0, response.rect.height()),
        );
        ui.painter().rect_filled(stripe, 0.0, accent);
    }

    fn ui_analysis(ui: &mut egui::Ui, analysis: &Analysis) {
        let Analysis::Report { lines, summary } = analysis else {
            ui.colored_label(MUTED, EMPTY_INPUT_MESSAGE);
            return;
        };

        for line in lines {
            Self::ui_row(ui, line.to_string(), color32(line.kind.accent()));
        }

        ui.add_space(16.0);
        egui::Frame::new()
            .fill(BACKGROUND)
            .stroke(egui::Stroke::new(1.0, egui::Color32::from_rgb(51, 65, 85)))
            .inner_margin(egui::Margin::same(12))
            .corner_radius(egui::CornerRadius::same(10))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.strong(SUMMARY_TITLE);
                ui.add_space(8.0);
                for row in summary.rows() {
                    ui.label(row);
                }
            });
    }

    /// Builds the lab window: text input, "Visualize" button, results.
    fn ui_lab(&mut self, ctx: &egui::Context) {
        let mut open = self.lab_open;
        egui::Window::new("Interactive Lab")
            .open(&mut open)
            .default_width(420.0)
            .show(ctx, |ui| {
                ui.add(
                    egui::TextEdit::multiline(&mut self.input)
                        .code_editor()
                        .desired_rows(8)
                        .desired_width(f32::INFINITY)
                        .hint_text("for i in items\n  if i > 0\n    print i\nend"),
                );
                if ui.button("Visualize").clicked() {
                    self.visualize();
                }
                ui.separator();
                if let Some(analysis) = &self.analysis {
                    egui::ScrollArea::vertical().show(ui, |ui| {
                        Self::ui_analysis(ui, analysis);
                    });
                }
            });
        self.lab_open = open;
    }

    /// Builds the central panel: advances the field and paints it.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(BACKGROUND))
            .show(ctx, |ui| {
                let response = ui.allocate_response(ui.available_size(), egui::Sense::hover());
                let rect = response.rect;
                let viewport = Viewport::new(rect.width(), rect.height());

                self.update_pointer(response.hover_pos(), rect);
                self.advance(viewport);

                let painter = ui.painter_at(rect);
                let mut canvas = PainterCanvas {
                    painter: &painter,
                    origin: Self::field_to_screen(Vec2::ZERO, rect),
                };
                render::render(&self.field, viewport, &mut canvas);
            });
        ctx.request_repaint();
    }
}

impl App for Viewer {
    /// eframe callback that builds all UI panels for each frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_top_panel(ctx);
        self.ui_status_bar(ctx);
        self.ui_central_panel(ctx);
        self.ui_lab(ctx);
    }
}
