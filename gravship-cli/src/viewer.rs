//! Interactive viewer for gravship scenarios
//!
//! Feeds each frame's elapsed time to the simulation and draws the bodies,
//! the ship, its velocity and the predicted trajectory. The scenario file
//! is watched and reloaded when it changes.

use crate::load_scenario;
use eframe::egui;
use gravship_core::{Simulation, Vector};
use notify::{Event, RecommendedWatcher, Watcher};
use std::f32::consts::PI;
use std::path::PathBuf;
use std::sync::mpsc;
use tracing::{info, warn};

const ARROW_HEAD_LENGTH: f32 = 7.0;
const ARROW_SWEEP: f32 = PI * 5.0 / 6.0;
const VIEW_MARGIN: f64 = 40.0;

pub fn run_viewer(scenario_path: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "gravship",
        options,
        Box::new(|cc| Ok(Box::new(ViewerApp::new(scenario_path, cc)))),
    )?;
    Ok(())
}

/// World-space rectangle mapped onto the canvas
#[derive(Debug, Clone, Copy)]
struct ViewBounds {
    min: Vector,
    max: Vector,
}

impl ViewBounds {
    fn around(sim: &Simulation) -> Self {
        let ship = sim.ship();
        let mut min = [ship.position().x() - ship.radius(), ship.position().y() - ship.radius()];
        let mut max = [ship.position().x() + ship.radius(), ship.position().y() + ship.radius()];
        for body in sim.bodies() {
            let p = body.position();
            min = [min[0].min(p.x() - body.radius()), min[1].min(p.y() - body.radius())];
            max = [max[0].max(p.x() + body.radius()), max[1].max(p.y() + body.radius())];
        }
        Self {
            min: Vector::new(min[0] - VIEW_MARGIN, min[1] - VIEW_MARGIN),
            max: Vector::new(max[0] + VIEW_MARGIN, max[1] + VIEW_MARGIN),
        }
    }

    fn scale(&self, rect: egui::Rect) -> f32 {
        let span = self.max.subtract(self.min);
        let sx = rect.width() as f64 / span.x();
        let sy = rect.height() as f64 / span.y();
        sx.min(sy) as f32
    }

    /// Map a world point to the screen; world y grows upwards
    fn to_screen(&self, rect: egui::Rect, scale: f32, p: Vector) -> egui::Pos2 {
        egui::pos2(
            rect.left() + (p.x() - self.min.x()) as f32 * scale,
            rect.bottom() - (p.y() - self.min.y()) as f32 * scale,
        )
    }
}

pub struct ViewerApp {
    scenario_path: Option<PathBuf>,
    sim_opt: Option<Simulation>,
    bounds: Option<ViewBounds>,
    last_error: Option<String>,
    playing: bool,
    show_trajectory: bool,
    speed_multiplier: f32,
    #[allow(dead_code)] // Kept alive to maintain file watching
    file_watcher: Option<RecommendedWatcher>,
    file_receiver: mpsc::Receiver<notify::Result<Event>>,
    needs_reload: bool,
}

impl ViewerApp {
    pub fn new(scenario_path: Option<PathBuf>, _cc: &eframe::CreationContext<'_>) -> Self {
        let (tx, rx) = mpsc::channel();
        let mut watcher = scenario_path.as_ref().and_then(|_| {
            notify::recommended_watcher(move |res| {
                let _ = tx.send(res);
            })
            .ok()
        });

        if let (Some(w), Some(path)) = (watcher.as_mut(), scenario_path.as_ref()) {
            if let Err(e) = w.watch(path, notify::RecursiveMode::NonRecursive) {
                warn!("not watching {}: {}", path.display(), e);
            }
        }

        let mut app = Self {
            scenario_path,
            sim_opt: None,
            bounds: None,
            last_error: None,
            playing: false,
            show_trajectory: true,
            speed_multiplier: 1.0,
            file_watcher: watcher,
            file_receiver: rx,
            needs_reload: false,
        };

        app.reload_simulation();

        app
    }

    fn reload_simulation(&mut self) {
        let built = load_scenario(self.scenario_path.as_deref())
            .map_err(|e| e.to_string())
            .and_then(|scenario| Simulation::from_scenario(&scenario).map_err(|e| e.to_string()));

        match built {
            Ok(sim) => {
                self.bounds = Some(ViewBounds::around(&sim));
                self.sim_opt = Some(sim);
                self.last_error = None;
            }
            Err(e) => {
                warn!("failed to load scenario: {}", e);
                self.last_error = Some(e);
                self.sim_opt = None;
                self.playing = false;
            }
        }
    }

    fn check_file_changes(&mut self) {
        while let Ok(event) = self.file_receiver.try_recv() {
            match event {
                Ok(Event {
                    kind: notify::EventKind::Modify(_),
                    paths,
                    ..
                }) => {
                    if let Some(path) = &self.scenario_path {
                        if paths.iter().any(|p| p.ends_with(path) || path.ends_with(p)) {
                            self.needs_reload = true;
                        }
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    warn!("file watcher error: {}", e);
                }
            }
        }

        if self.needs_reload {
            info!("scenario changed, reloading");
            self.reload_simulation();
            self.needs_reload = false;
        }
    }

    fn advance(&mut self, dt: f64) {
        if let Some(sim) = self.sim_opt.as_mut() {
            if let Err(e) = sim.step(dt) {
                warn!("simulation stopped: {}", e);
                self.last_error = Some(e.to_string());
                self.playing = false;
            }
        }
    }

    fn draw(&self, painter: &egui::Painter, rect: egui::Rect) {
        let (Some(sim), Some(bounds)) = (self.sim_opt.as_ref(), self.bounds) else {
            return;
        };
        let scale = bounds.scale(rect);
        let to_screen = |p: Vector| bounds.to_screen(rect, scale, p);

        for body in sim.bodies() {
            draw_square(painter, to_screen(body.position()), body.radius() as f32 * scale);
        }

        let ship = sim.ship();
        if self.show_trajectory && !ship.lookahead().is_empty() {
            let points = std::iter::once(ship.position())
                .chain(ship.lookahead().iter().map(|s| s.position))
                .map(to_screen)
                .collect::<Vec<_>>();
            painter.add(egui::Shape::line(
                points,
                egui::Stroke::new(1.0, egui::Color32::LIGHT_BLUE),
            ));
        }

        let ship_pos = to_screen(ship.position());
        draw_square(painter, ship_pos, ship.radius() as f32 * scale);
        draw_arrow(
            painter,
            ship_pos,
            to_screen(ship.position().add(ship.velocity())),
        );
    }
}

fn draw_square(painter: &egui::Painter, center: egui::Pos2, side: f32) {
    let rect = egui::Rect::from_center_size(center, egui::vec2(side, side));
    painter.rect_filled(rect, 0.0, egui::Color32::WHITE);
}

fn draw_arrow(painter: &egui::Painter, from: egui::Pos2, to: egui::Pos2) {
    let stroke = egui::Stroke::new(1.0, egui::Color32::YELLOW);
    painter.line_segment([from, to], stroke);

    let delta = to - from;
    let angle = delta.y.atan2(delta.x);
    for head in [angle + ARROW_SWEEP, angle - ARROW_SWEEP] {
        let tip = to + egui::vec2(head.cos(), head.sin()) * ARROW_HEAD_LENGTH;
        painter.line_segment([to, tip], stroke);
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_file_changes();

        let frame_dt = ctx.input(|i| i.stable_dt);

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button(if self.playing { "⏸ Pause" } else { "▶ Play" }).clicked() {
                    self.playing = !self.playing;
                }

                if ui.button("⏮ Reset").clicked() {
                    self.reload_simulation();
                    self.playing = false;
                }

                if ui.button("⏭ Tick").clicked() {
                    let tick = self.sim_opt.as_ref().map(|sim| sim.config().tick_size());
                    if let Some(tick) = tick {
                        self.advance(tick);
                    }
                }

                ui.separator();

                ui.label("Speed:");
                ui.add(egui::Slider::new(&mut self.speed_multiplier, 0.1..=10.0));

                ui.checkbox(&mut self.show_trajectory, "Lookahead");

                ui.separator();

                if let Some(sim) = &self.sim_opt {
                    ui.label(format!(
                        "Tick: {}  |v| = {:.3}",
                        sim.ship().tick_count(),
                        sim.ship().velocity().magnitude()
                    ));
                }
                if frame_dt > 0.0 {
                    ui.label(format!("{:.0} fps", 1.0 / frame_dt));
                }
            });
        });

        if let Some(error) = &self.last_error {
            egui::TopBottomPanel::bottom("errors").show(ctx, |ui| {
                ui.set_max_height(100.0);
                ui.label(
                    egui::RichText::new(format!("Error: {}", error)).color(egui::Color32::RED),
                );
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            let rect = ui.max_rect();
            self.draw(ui.painter(), rect);
        });

        if self.playing {
            self.advance(frame_dt as f64 * self.speed_multiplier as f64);
            ctx.request_repaint();
        }
    }
}
