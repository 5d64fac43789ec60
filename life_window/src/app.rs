// app.rs - Window state: one simulation session plus display settings

use eframe::egui;
use egui::Color32;
use life_engine::{
    density_filler, seeded_density_filler, BoardConfig, Pattern, Simulation, PATTERNS,
};
use std::time::{Duration, Instant};

pub fn run_window(
    config: BoardConfig,
    seed: Option<u64>,
    pattern: Option<&'static Pattern>,
    interval: Duration,
) -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 1000.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |_cc| Box::new(LifeApp::new(config, seed, pattern, interval))),
    )
}

pub struct LifeApp {
    pub simulation: Simulation,
    pub config: BoardConfig,
    pub seed: Option<u64>,
    pub last_update: Instant,
    pub update_interval: Duration,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub selected_pattern: usize,
}

impl LifeApp {
    /// Builds the board from `config` (or `pattern`, if given) and starts
    /// playing straight away.
    pub fn new(
        config: BoardConfig,
        seed: Option<u64>,
        pattern: Option<&'static Pattern>,
        update_interval: Duration,
    ) -> Self {
        let board = match pattern {
            Some(pattern) => config.build_pattern(pattern),
            None => config.build(seed),
        };
        let mut simulation = Simulation::new(board);
        simulation.play();

        let selected_pattern = pattern
            .and_then(|pattern| PATTERNS.iter().position(|p| p.name == pattern.name))
            .unwrap_or(0);

        Self {
            simulation,
            config,
            seed,
            last_update: Instant::now(),
            update_interval,
            live_color: Color32::from_rgb(0, 200, 0),
            dead_color: Color32::from_rgb(40, 40, 40),
            selected_pattern,
        }
    }

    /// Steps if playing and the interval has elapsed. Returns whether it stepped.
    pub fn advance(&mut self) -> bool {
        if self.last_update.elapsed() < self.update_interval {
            return false;
        }
        self.last_update = Instant::now();
        self.simulation.tick()
    }

    pub fn reseed_random(&mut self) {
        let density = self.config.density;
        match self.seed {
            Some(seed) => self.simulation.reseed(seeded_density_filler(density, seed)),
            None => self.simulation.reseed(density_filler(density)),
        }
    }

    pub fn apply_selected_pattern(&mut self) {
        if let Some(pattern) = PATTERNS.get(self.selected_pattern) {
            let board = self.simulation.board();
            let filler = pattern.centered_filler(board.length(), board.width());
            self.simulation.reseed(filler);
        }
    }
}
