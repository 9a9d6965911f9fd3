// ui.rs - egui front end: controls, canvas drawing, click-to-fill

use eframe::egui;
use egui::{Color32, Pos2, Rect, Stroke, Vec2};
use std::time::{Duration, Instant};

use crate::grid::{self, Cell};
use crate::{BOX_SIZE, CanvasInterface, FillMode, PaintBucket, SPACING, patterns};

pub fn paint_color(cell: Cell) -> Color32 {
    match cell {
        Cell::Empty  => Color32::from_rgb(40, 40, 40),
        Cell::Red    => Color32::from_rgb(214, 64, 58),
        Cell::Green  => Color32::from_rgb(0, 200, 0),
        Cell::Blue   => Color32::from_rgb(64, 120, 230),
        Cell::Yellow => Color32::from_rgb(236, 200, 40),
        Cell::Purple => Color32::from_rgb(160, 80, 200),
    }
}

/// Maps a pointer position to the cell under it, if any.
pub fn cell_at(origin: Pos2, pos: Pos2, width: usize, height: usize) -> Option<(usize, usize)> {
    let step = BOX_SIZE + SPACING;
    let (fx, fy) = ((pos.x - origin.x) / step, (pos.y - origin.y) / step);
    if fx < 0.0 || fy < 0.0 {
        return None;
    }
    let (x, y) = (fx as usize, fy as usize);
    (x < width && y < height).then_some((x, y))
}

impl eframe::App for PaintBucket {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Auto-update if running
        if self.is_running && self.last_update.elapsed() >= self.update_interval {
            self.update_generation();
            self.last_update = Instant::now();
            ctx.request_repaint();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Paint Bucket (edges wrap)");

            // Controls
            ui.horizontal(|ui| {
                let button_text = if self.is_running { "⏸ Pause" } else { "▶ Start" };
                if ui.button(button_text).clicked() {
                    self.is_running = !self.is_running;
                    if self.is_running {
                        self.last_update = Instant::now();
                    }
                    tracing::info!(running = self.is_running, "simulation toggled");
                }

                if ui.button("⏭ Step").clicked() {
                    self.is_running = false;
                    self.update_generation();
                }

                if ui.button("⏹ Clear").clicked() {
                    self.is_running = false;
                    self.clear_grid();
                }

                if ui.button("🎲 Random").clicked() {
                    self.is_running = false;
                    self.apply_random_pattern();
                }

                ui.separator();

                // Pattern dropdown
                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(patterns::PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in patterns::PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Apply Pattern").clicked() {
                    self.is_running = false;
                    self.apply_selected_pattern();
                }

                ui.separator();

                ui.label(format!("Generation: {}", self.generation));
            });

            ui.separator();

            // Paint, fill mode and speed
            ui.horizontal(|ui| {
                ui.label("Paint:");
                egui::ComboBox::from_id_source("paint_selector")
                    .selected_text(self.paint().name())
                    .show_ui(ui, |ui| {
                        for (i, paint) in Cell::PAINTS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_paint, i, paint.name());
                        }
                    });
                ui.painter().rect_filled(
                    Rect::from_min_size(ui.cursor().min, Vec2::splat(BOX_SIZE)),
                    1.0,
                    paint_color(self.paint()),
                );
                ui.add_space(BOX_SIZE + 4.0);

                ui.separator();

                ui.radio_value(&mut self.fill_mode, FillMode::Exact, "Fill colour");
                ui.radio_value(&mut self.fill_mode, FillMode::Erase, "Erase shape");

                ui.separator();

                ui.label("Speed:");
                let mut speed = 1000.0 / self.update_interval.as_millis().max(1) as f32;
                if ui.add(egui::Slider::new(&mut speed, 0.5..=90.0).suffix(" gen/sec")).changed() {
                    self.update_interval = Duration::from_millis((1000.0 / speed) as u64);
                }
            });

            ui.separator();

            ui.label("Click a cell to flood its region; regions continue across the edges.");
            ui.label(if self.status.is_empty() { " " } else { self.status.as_str() });

            ui.separator();

            // Draw the canvas
            let shape = grid::shape(&self.grid);
            let start_pos = ui.cursor().min;
            let total_size = Vec2::new(
                (BOX_SIZE + SPACING) * shape.width as f32 - SPACING,
                (BOX_SIZE + SPACING) * shape.height as f32 - SPACING,
            );

            let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());

            // Fill background
            painter.rect_filled(
                Rect::from_min_size(start_pos, total_size),
                0.0,
                Color32::BLACK,
            );

            // Handle clicking (only when not running)
            if !self.is_running && response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    if let Some((x, y)) = cell_at(start_pos, pos, shape.width, shape.height) {
                        self.fill_at(x, y);
                    }
                }
            }

            // Preview what a click would fill
            let mut preview = vec![false; shape.cells()];
            if !self.is_running {
                if let Some((x, y)) = response
                    .hover_pos()
                    .and_then(|pos| cell_at(start_pos, pos, shape.width, shape.height))
                {
                    for p in self.preview_at(x, y) {
                        preview[shape.index(p)] = true;
                    }
                }
            }
            let mut recent = vec![false; shape.cells()];
            for &p in &self.last_filled {
                if shape.contains(p) {
                    recent[shape.index(p)] = true;
                }
            }

            for (row, cells) in self.grid.iter().enumerate() {
                for (col, &cell) in cells.iter().enumerate() {
                    let x = start_pos.x + col as f32 * (BOX_SIZE + SPACING);
                    let y = start_pos.y + row as f32 * (BOX_SIZE + SPACING);
                    let rect = Rect::from_min_size(egui::pos2(x, y), Vec2::splat(BOX_SIZE));
                    let i = row * shape.width + col;

                    painter.rect_filled(rect, 1.0, paint_color(cell));
                    if preview[i] {
                        painter.rect_filled(rect, 1.0, Color32::from_white_alpha(50));
                    }

                    let stroke = if recent[i] {
                        Stroke::new(1.0, Color32::WHITE)
                    } else {
                        Stroke::new(0.2, Color32::from_gray(60))
                    };
                    painter.rect_stroke(rect, 1.0, stroke);
                }
            }

            ui.separator();

            // Statistics
            let painted = self.grid.iter().flatten().filter(|c| c.is_painted()).count();
            ui.horizontal(|ui| {
                ui.label(format!("Painted: {} / {}", painted, shape.cells()));
                for paint in Cell::PAINTS {
                    let n = self.grid.iter().flatten().filter(|&&c| c == paint).count();
                    ui.colored_label(paint_color(paint), format!("{}: {}", paint.name(), n));
                }
            });
        });

        // Request repaint if running to keep animation smooth
        if self.is_running {
            ctx.request_repaint();
        }
    }
}
