// ui.rs - Draws the board and the play/pause controls
//
// The board is repainted in full every frame: dead background first, then one
// filled rect per live cell.

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};
use life_engine::PATTERNS;
use std::time::{Duration, Instant};

use crate::app::LifeApp;

const MIN_CELL: f32 = 1.0;
const MAX_CELL: f32 = 24.0;
const GRID_LINES_FROM: f32 = 6.0;

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.advance();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            // Controls
            ui.horizontal(|ui| {
                let button_text = if self.simulation.is_playing() {
                    "⏸ Pause"
                } else {
                    "▶ Play"
                };
                if ui.button(button_text).clicked() {
                    self.simulation.toggle_playing();
                    self.last_update = Instant::now();
                }

                if ui.button("⏭ Step").clicked() {
                    self.simulation.pause();
                    self.simulation.step();
                }

                if ui.button("🎲 Reseed").clicked() {
                    self.simulation.pause();
                    self.reseed_random();
                }

                ui.separator();

                // Pattern dropdown
                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Apply Pattern").clicked() {
                    self.simulation.pause();
                    self.apply_selected_pattern();
                }

                ui.separator();

                ui.label(format!("Generation: {}", self.simulation.generation()));
            });

            ui.separator();

            // Speed and colours
            ui.horizontal(|ui| {
                ui.label("Speed:");
                let mut speed = 1000.0 / self.update_interval.as_millis().max(1) as f32;
                if ui.add(egui::Slider::new(&mut speed, 0.5..=200.0).suffix(" gen/sec")).changed() {
                    self.update_interval = Duration::from_millis((1000.0 / speed) as u64);
                }

                ui.separator();

                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });

            ui.separator();

            ui.label("Edges wrap around. Pause, then click cells to toggle them.");

            ui.separator();

            let board = self.simulation.board();
            let (length, width) = (board.length(), board.width());
            let total = board.total_cells();
            let live_cells = board.population();
            let changed = board.changed_cells().count();

            // Reserve room for the stats row below the board
            let available = ui.available_size() - Vec2::new(0.0, 30.0);
            let cell = (available.x / width as f32)
                .min(available.y / length as f32)
                .clamp(MIN_CELL, MAX_CELL);
            let total_size = Vec2::new(cell * width as f32, cell * length as f32);

            let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());
            let origin = response.rect.min;

            painter.rect_filled(response.rect, 0.0, self.dead_color);

            for (row, cells) in board.rows().enumerate() {
                for (col, _) in cells.iter().enumerate().filter(|(_, alive)| **alive) {
                    let min = origin + Vec2::new(col as f32 * cell, row as f32 * cell);
                    let rect = Rect::from_min_size(min, Vec2::splat(cell));
                    painter.rect_filled(rect, 0.0, self.live_color);
                }
            }

            if cell >= GRID_LINES_FROM {
                let stroke = Stroke::new(0.3, Color32::from_gray(60));
                for col in 0..=width {
                    let x = origin.x + col as f32 * cell;
                    let top = egui::pos2(x, origin.y);
                    painter.line_segment([top, top + Vec2::new(0.0, total_size.y)], stroke);
                }
                for row in 0..=length {
                    let y = origin.y + row as f32 * cell;
                    let left = egui::pos2(origin.x, y);
                    painter.line_segment([left, left + Vec2::new(total_size.x, 0.0)], stroke);
                }
            }

            // Click to toggle (only when paused)
            if !self.simulation.is_playing() && response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let offset = pos - origin;
                    let row = (offset.y / cell) as isize;
                    let col = (offset.x / cell) as isize;
                    self.simulation.board_mut().toggle(row, col);
                }
            }

            ui.separator();

            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {}", live_cells));
                ui.label(format!("Dead cells: {}", total - live_cells));
                ui.label(format!("Population: {:.1}%", (live_cells as f32 / total as f32) * 100.0));
                ui.label(format!("Changed last step: {}", changed));
            });
        });

        // Keep frames coming while playing
        if self.simulation.is_playing() {
            ctx.request_repaint();
        }
    }
}
