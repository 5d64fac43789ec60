// lib.rs - Toroidal Game of Life engine
//
// The board owns two generation buffers and steps them in parallel over
// disjoint row chunks. Everything outside the board (parameters, play/pause,
// drawing) is a thin layer on top.

pub mod board;
pub mod error;
pub mod filler;
pub mod params;
pub mod partition;
pub mod patterns;
pub mod rule;
pub mod session;

pub use board::Board;
pub use error::ParamsError;
pub use filler::{density_filler, seeded_density_filler};
pub use params::{query_pairs, BoardConfig, LaunchParams};
pub use partition::Partition;
pub use patterns::{Pattern, PATTERNS};
pub use session::Simulation;
