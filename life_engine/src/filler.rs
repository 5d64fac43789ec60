// filler.rs - Per-cell seeding functions for Board::new and Board::reseed

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Cell starts alive when a uniform draw in `[0, 1)` is `<= density`.
///
/// Draws come from the thread-local generator, so the filler is safe to call
/// from every rayon worker at once.
pub fn density_filler(density: f64) -> impl Fn(usize, usize) -> bool + Sync {
    move |_, _| rand::random::<f64>() <= density
}

/// Reproducible version of [`density_filler`]: each cell's draw is a hash of
/// `(seed, row, col)`, so chunking and call order do not matter.
pub fn seeded_density_filler(density: f64, seed: u64) -> impl Fn(usize, usize) -> bool + Sync {
    move |row, col| {
        let mut hasher = DefaultHasher::new();
        (seed, row, col).hash(&mut hasher);
        unit_interval(hasher.finish()) <= density
    }
}

// Top 53 bits as a float in [0, 1).
fn unit_interval(bits: u64) -> f64 {
    (bits >> 11) as f64 / (1u64 << 53) as f64
}
