// session.rs - A board plus its play/pause flag, owned by whatever drives it

use tracing::info;

use crate::board::Board;

/// One running simulation.
///
/// The driving loop (a UI frame callback, a timer task, a test) holds this
/// and calls [`Simulation::tick`] on its own cadence. Several sessions can
/// run side by side.
#[derive(Debug)]
pub struct Simulation {
    board: Board,
    playing: bool,
    generation: u64,
}

impl Simulation {
    /// Wraps `board` as generation 0, paused.
    pub fn new(board: Board) -> Self {
        Self { board, playing: false, generation: 0 }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable access for edits between steps, e.g. toggling a cell.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn play(&mut self) {
        if !self.playing {
            info!(generation = self.generation, "playing");
        }
        self.playing = true;
    }

    pub fn pause(&mut self) {
        if self.playing {
            info!(generation = self.generation, "paused");
        }
        self.playing = false;
    }

    pub fn toggle_playing(&mut self) {
        if self.playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Steps once if playing. Returns whether a step happened.
    pub fn tick(&mut self) -> bool {
        if self.playing {
            self.step();
        }
        self.playing
    }

    /// Steps once regardless of the play flag.
    pub fn step(&mut self) {
        self.board.step();
        self.generation += 1;
    }

    /// Refills the board and restarts the generation count.
    pub fn reseed<F>(&mut self, filler: F)
    where
        F: Fn(usize, usize) -> bool + Sync,
    {
        self.board.reseed(filler);
        self.generation = 0;
    }
}
