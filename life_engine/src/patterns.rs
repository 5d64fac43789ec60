// patterns.rs - Named seed patterns, stamped onto the torus as fillers

use std::collections::HashSet;

/// A named set of live cells, as `(row, col)` offsets from the pattern's
/// top-left corner.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "Toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "Block",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
            (2, 0), (2, 5), (2, 7), (2, 12),
            (3, 0), (3, 5), (3, 7), (3, 12),
            (4, 0), (4, 5), (4, 7), (4, 12),
            (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
            // Bottom half (mirrored)
            (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
            (8, 0), (8, 5), (8, 7), (8, 12),
            (9, 0), (9, 5), (9, 7), (9, 12),
            (10, 0), (10, 5), (10, 7), (10, 12),
            (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (4, 0), (4, 1), (5, 0), (5, 1),
            (4, 10), (5, 10), (6, 10), (3, 11), (7, 11), (2, 12), (8, 12),
            (2, 13), (8, 13), (5, 14), (3, 15), (7, 15), (4, 16), (5, 16),
            (6, 16), (5, 17), (2, 20), (3, 20), (4, 20), (2, 21), (3, 21),
            (4, 21), (1, 22), (5, 22), (0, 24), (1, 24), (5, 24), (6, 24),
            (2, 34), (3, 34), (2, 35), (3, 35),
        ],
    },
];

/// Looks a pattern up by name, ignoring ASCII case.
pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

impl Pattern {
    /// Bounding box as `(rows, cols)`.
    pub fn size(&self) -> (usize, usize) {
        let rows = self.cells.iter().map(|&(r, _)| r + 1).max().unwrap_or(0);
        let cols = self.cells.iter().map(|&(_, c)| c + 1).max().unwrap_or(0);
        (rows, cols)
    }

    /// Filler that is alive exactly on this pattern placed at `origin`.
    ///
    /// Offsets that run past the board edge wrap around, the same way
    /// neighbours do.
    pub fn filler(
        &self,
        origin: (isize, isize),
        length: usize,
        width: usize,
    ) -> impl Fn(usize, usize) -> bool + Sync + use<> {
        let (length_i, width_i) = (length as isize, width as isize);
        let live: HashSet<(usize, usize)> = self
            .cells
            .iter()
            .map(|&(r, c)| {
                (
                    (origin.0 + r as isize).rem_euclid(length_i) as usize,
                    (origin.1 + c as isize).rem_euclid(width_i) as usize,
                )
            })
            .collect();

        move |row, col| live.contains(&(row, col))
    }

    /// Filler with the pattern's bounding box centred on the board.
    pub fn centered_filler(
        &self,
        length: usize,
        width: usize,
    ) -> impl Fn(usize, usize) -> bool + Sync + use<> {
        let (rows, cols) = self.size();
        let origin = (
            (length as isize - rows as isize) / 2,
            (width as isize - cols as isize) / 2,
        );
        self.filler(origin, length, width)
    }
}
