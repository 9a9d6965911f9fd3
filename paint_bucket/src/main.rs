// main.rs - Paint bucket canvas: flood fills on a grid whose edges wrap around

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::time::{Duration, Instant};

use anyhow::{Result, anyhow};
use clap::Parser;
use eframe::egui;
use flood_fill::{Point, ToroidalFloodFill};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

mod cli;
mod grid;
mod life;
mod patterns;
mod ui;

use cli::Cli;
use grid::{Cell, TGrid};

pub const BOX_SIZE: f32 = 15.0;
pub const SPACING: f32 = 0.5;

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    info!(
        width = cli.width,
        height = cli.height,
        seed = cli.seed,
        density = cli.density,
        interval_ms = cli.interval_ms,
        "starting paint bucket"
    );

    let app = PaintBucket::new(&cli)?;
    let canvas_w = (BOX_SIZE + SPACING) * cli.width as f32;
    let canvas_h = (BOX_SIZE + SPACING) * cli.height as f32;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([canvas_w.max(760.0) + 40.0, canvas_h + 220.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Paint Bucket",
        options,
        Box::new(move |_cc| Box::new(app)),
    )
    .map_err(|err| anyhow!("{err}"))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Which cells a click floods.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FillMode {
    /// Cells of exactly the clicked colour, painted with the selected paint.
    Exact,
    /// Every painted cell touching the clicked one, whatever its colour,
    /// cleared back to empty.
    Erase,
}

/// Treats all paints as one kind: a cell matches when it is painted exactly
/// when the target is.
fn same_kind(candidate: &Cell, target: &Cell) -> bool {
    candidate.is_painted() == target.is_painted()
}

pub struct PaintBucket {
    pub grid: TGrid,
    pub is_running: bool,
    pub last_update: Instant,
    pub update_interval: Duration,
    pub generation: u32,
    pub selected_pattern: usize,
    pub selected_paint: usize,
    pub fill_mode: FillMode,
    pub status: String,
    pub last_filled: Vec<Point>, // Cells touched by the most recent fill
    pub random_seed: u32,
    pub density: u8,

    runtime: tokio::runtime::Runtime,

    grid_history: [u64; 10],
    history_count: usize,
}

impl PaintBucket {
    pub fn new(cli: &Cli) -> Result<Self> {
        let runtime = tokio::runtime::Runtime::new()?;
        Ok(Self {
            grid: grid::blank(cli.width, cli.height),
            is_running: false,
            last_update: Instant::now(),
            update_interval: Duration::from_millis(cli.interval_ms.max(1)),
            generation: 0,
            selected_pattern: 0,
            selected_paint: 0,
            fill_mode: FillMode::Exact,
            status: String::new(),
            last_filled: Vec::new(),
            random_seed: cli.seed,
            density: cli.density,
            runtime,
            grid_history: [0; 10],
            history_count: 0,
        })
    }

    pub fn paint(&self) -> Cell {
        Cell::PAINTS[self.selected_paint % Cell::PAINTS.len()]
    }

    fn reset_history(&mut self) {
        self.generation = 0;
        self.grid_history = [0; 10];
        self.history_count = 0;
        self.last_filled.clear();
    }
}

/// Operations the UI drives on the canvas.
pub trait CanvasInterface {
    fn fill_at(&mut self, x: usize, y: usize);
    fn preview_at(&mut self, x: usize, y: usize) -> Vec<Point>;
    fn update_generation(&mut self);
    fn hash_grid(&self) -> u64;
    fn check_for_cycle(&mut self) -> bool;
    fn clear_grid(&mut self);
    fn apply_selected_pattern(&mut self);
    fn apply_random_pattern(&mut self);
}

impl CanvasInterface for PaintBucket {
    fn fill_at(&mut self, x: usize, y: usize) {
        let mut filled = Vec::new();
        let result = match self.fill_mode {
            FillMode::Exact => {
                let paint = self.paint();
                ToroidalFloodFill::new(&mut self.grid).fill_into(&paint, x, y, &mut filled)
            }
            FillMode::Erase => ToroidalFloodFill::with_equality(&mut self.grid, same_kind)
                .fill_into(&Cell::Empty, x, y, &mut filled),
        };

        self.status = match result {
            Ok(0) => match self.fill_mode {
                FillMode::Exact => format!("({x}, {y}) is already that colour"),
                FillMode::Erase => format!("({x}, {y}) is already empty"),
            },
            Ok(n) => {
                info!(x, y, filled = n, mode = ?self.fill_mode, "filled region");
                format!("Filled {n} cells from ({x}, {y})")
            }
            Err(err) => {
                warn!(%err, "fill rejected");
                format!("Fill rejected: {err}")
            }
        };
        self.last_filled = filled;
    }

    fn preview_at(&mut self, x: usize, y: usize) -> Vec<Point> {
        let preview = match self.fill_mode {
            FillMode::Exact => {
                let paint = self.paint();
                ToroidalFloodFill::new(&mut self.grid).preview(&paint, x, y)
            }
            FillMode::Erase => ToroidalFloodFill::with_equality(&mut self.grid, same_kind)
                .preview(&Cell::Empty, x, y),
        };
        preview.unwrap_or_else(|err| {
            warn!(%err, x, y, "fill preview rejected");
            Vec::new()
        })
    }

    fn update_generation(&mut self) {
        match life::step(&self.runtime, &self.grid, self.paint()) {
            Ok(next) => {
                self.grid = next;
                self.generation += 1;
                self.last_filled.clear();
            }
            Err(err) => {
                error!(%err, "simulation step failed");
                self.status = format!("Simulation stopped: {err}");
                self.is_running = false;
                return;
            }
        }

        if self.check_for_cycle() {
            info!(generation = self.generation, "generation repeats, pausing");
            self.is_running = false;
        }
    }

    fn hash_grid(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.grid.hash(&mut hasher);
        hasher.finish()
    }

    fn check_for_cycle(&mut self) -> bool {
        let current_hash = self.hash_grid();
        if self.grid_history.contains(&current_hash) { return true; }
        self.grid_history[self.history_count % 10] = current_hash;
        self.history_count += 1;
        false
    }

    fn clear_grid(&mut self) {
        let shape = grid::shape(&self.grid);
        self.grid = grid::blank(shape.width, shape.height);
        self.reset_history();
    }

    fn apply_selected_pattern(&mut self) {
        if let Some(pattern) = patterns::PATTERNS.get(self.selected_pattern) {
            let paint = self.paint();
            patterns::apply_pattern(&mut self.grid, pattern, paint);
            info!(pattern = pattern.name, "applied pattern");
            self.reset_history();
        }
    }

    fn apply_random_pattern(&mut self) {
        patterns::apply_random_pattern(&mut self.grid, self.random_seed, self.density);
        info!(seed = self.random_seed, density = self.density, "applied random pattern");
        self.random_seed = self.random_seed.wrapping_add(1);
        self.reset_history();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas(width: usize, height: usize) -> PaintBucket {
        let cli = Cli::try_parse_from([
            "paint-bucket".to_string(),
            format!("--width={width}"),
            format!("--height={height}"),
        ])
        .unwrap();
        PaintBucket::new(&cli).unwrap()
    }

    #[test]
    fn click_fills_the_empty_canvas() {
        let mut app = canvas(4, 3);
        app.fill_at(3, 2);
        assert!(app.grid.iter().flatten().all(|&c| c == Cell::Red));
        assert_eq!(app.last_filled.len(), 12);
        assert_eq!(app.status, "Filled 12 cells from (3, 2)");

        app.fill_at(0, 0);
        assert_eq!(app.status, "(0, 0) is already that colour");
    }

    #[test]
    fn erase_clears_mixed_colours() {
        let mut app = canvas(5, 1);
        app.grid[0] = vec![Cell::Red, Cell::Blue, Cell::Empty, Cell::Green, Cell::Yellow];
        app.fill_mode = FillMode::Erase;

        // Green, Yellow, Red and Blue touch across the seam.
        assert_eq!(app.preview_at(3, 0).len(), 4);
        assert!(app.preview_at(2, 0).is_empty());
        app.fill_at(3, 0);
        assert_eq!(app.grid[0], vec![Cell::Empty; 5]);

        // Erasing an empty cell is a no-op.
        app.fill_at(2, 0);
        assert!(app.last_filled.is_empty());
        assert_eq!(app.status, "(2, 0) is already empty");
    }

    #[test]
    fn preview_is_empty_where_a_click_changes_nothing() {
        let mut app = canvas(4, 2);
        app.grid[0][0] = Cell::Red;
        app.grid[0][1] = Cell::Blue;

        // Red is the selected paint.
        assert!(app.preview_at(0, 0).is_empty());
        assert_eq!(app.preview_at(1, 0), vec![Point::new(1, 0)]);
        assert_eq!(app.preview_at(3, 1).len(), 6);

        app.fill_at(1, 0);
        assert_eq!(app.last_filled, vec![Point::new(1, 0)]);
        assert!(app.preview_at(1, 0).is_empty());
    }

    fn dirty_history(app: &mut PaintBucket) {
        app.generation = 7;
        app.check_for_cycle();
        app.last_filled = vec![Point::new(0, 0)];
        assert_ne!(app.history_count, 0);
    }

    fn assert_history_reset(app: &PaintBucket) {
        assert_eq!(app.generation, 0);
        assert_eq!(app.history_count, 0);
        assert_eq!(app.grid_history, [0; 10]);
        assert!(app.last_filled.is_empty());
    }

    #[test]
    fn selected_pattern_uses_selected_paint() {
        let mut app = canvas(6, 6);
        app.grid[5][5] = Cell::Yellow;
        dirty_history(&mut app);
        app.selected_paint = 2;
        app.selected_pattern = patterns::PATTERNS.iter().position(|p| p.name == "Glider").unwrap();

        app.apply_selected_pattern();

        let cells: Vec<Cell> = app.grid.iter().flatten().copied().filter(|c| c.is_painted()).collect();
        assert_eq!(cells, vec![Cell::Blue; 5]);
        assert_eq!(grid::shape(&app.grid), flood_fill::GridShape::new(6, 6));
        assert_history_reset(&app);
    }

    #[test]
    fn random_pattern_advances_the_seed() {
        let mut app = canvas(10, 8);
        dirty_history(&mut app);
        let seed = app.random_seed;

        app.apply_random_pattern();

        let mut expected = grid::blank(10, 8);
        patterns::apply_random_pattern(&mut expected, seed, app.density);
        assert_eq!(app.grid, expected);
        assert_eq!(app.random_seed, seed + 1);
        assert_history_reset(&app);

        app.apply_random_pattern();
        assert_eq!(app.random_seed, seed + 2);
    }

    #[test]
    fn clear_keeps_the_canvas_size() {
        let mut app = canvas(5, 3);
        app.fill_at(0, 0);
        dirty_history(&mut app);

        app.clear_grid();

        assert_eq!(app.grid, grid::blank(5, 3));
        assert_history_reset(&app);
    }

    #[test]
    fn out_of_range_click_reports_an_error() {
        let mut app = canvas(3, 3);
        app.fill_at(3, 0);
        assert!(app.status.starts_with("Fill rejected"));
        assert!(app.grid.iter().flatten().all(|c| !c.is_painted()));
        assert!(app.preview_at(0, 9).is_empty());
    }

    #[test]
    fn still_life_stops_the_simulation() {
        let mut app = canvas(6, 6);
        for (x, y) in [(1, 1), (2, 1), (1, 2), (2, 2)] {
            app.grid[y][x] = Cell::Purple;
        }
        app.is_running = true;
        app.update_generation(); // first hash recorded
        assert!(app.is_running);
        app.update_generation(); // block unchanged
        assert!(!app.is_running);
        assert_eq!(app.generation, 2);
    }
}
