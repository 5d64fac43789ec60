// board.rs - Double-buffered toroidal board

use rayon::prelude::*;
use tracing::debug;

use crate::partition::Partition;
use crate::rule;

/// A fixed-size toroidal Game of Life board.
///
/// `current` holds the readable generation and `next` is the scratch buffer
/// written during [`Board::step`]. Both are row-major `length * width` slices
/// and are exchanged with a swap once every chunk has finished.
#[derive(Clone, Debug)]
pub struct Board {
    length: usize,
    width: usize,
    current: Vec<bool>,
    next: Vec<bool>,
    partition: Partition,
}

impl Board {
    /// Builds a `length x width` board, calling `filler(row, col)` once per cell.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero or `length * width` overflows `usize`.
    pub fn new<F>(length: usize, width: usize, filler: F) -> Self
    where
        F: Fn(usize, usize) -> bool + Sync,
    {
        Self::with_partition(length, width, Partition::default(), filler)
    }

    /// Same as [`Board::new`] with an explicit chunking strategy for init and step.
    pub fn with_partition<F>(length: usize, width: usize, partition: Partition, filler: F) -> Self
    where
        F: Fn(usize, usize) -> bool + Sync,
    {
        assert!(
            length > 0 && width > 0,
            "board dimensions must be positive, got {length}x{width}"
        );
        let total = length
            .checked_mul(width)
            .unwrap_or_else(|| panic!("a {length}x{width} board has too many cells"));

        let mut board = Self {
            length,
            width,
            current: vec![false; total],
            next: vec![false; total],
            partition,
        };
        board.fill_current(&filler);

        let chunks = partition.chunk_count(length);
        debug!(length, width, ?partition, chunks, "board created");
        board
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn total_cells(&self) -> usize {
        self.length * self.width
    }

    pub fn partition(&self) -> Partition {
        self.partition
    }

    /// Cell at `(x, y)` with both coordinates wrapped onto the torus.
    pub fn get(&self, x: isize, y: isize) -> bool {
        self.current[self.wrapped_index(x, y)]
    }

    /// Flips the cell at `(x, y)` (wrapped). Only possible between steps.
    pub fn toggle(&mut self, x: isize, y: isize) {
        let index = self.wrapped_index(x, y);
        self.current[index] = !self.current[index];
    }

    /// Current generation, one slice per row.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[bool]> + '_ {
        self.current.chunks_exact(self.width)
    }

    /// Current generation as a flat row-major slice.
    pub fn cells(&self) -> &[bool] {
        &self.current
    }

    pub fn population(&self) -> usize {
        self.current.par_iter().filter(|&&alive| alive).count()
    }

    /// Cells whose state differs from the previous generation.
    ///
    /// After a step the spare buffer still holds generation `t - 1`, so this
    /// is a straight comparison. On a fresh or reseeded board the previous
    /// generation is all dead and every live cell is reported.
    pub fn changed_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.current
            .iter()
            .zip(&self.next)
            .enumerate()
            .filter(|(_, (now, before))| now != before)
            .map(move |(index, _)| (index / width, index % width))
    }

    /// Advances one generation.
    ///
    /// Each chunk of rows in `next` is computed from the untouched `current`
    /// buffer. `for_each` returns only after every chunk is written, and only
    /// then do the buffers swap.
    pub fn step(&mut self) {
        let (length, width) = (self.length, self.width);
        let rows_per_chunk = self.partition.rows_per_chunk(length);
        let current = &self.current;

        self.next
            .par_chunks_mut(rows_per_chunk * width)
            .enumerate()
            .for_each(|(chunk, out)| {
                let first_row = chunk * rows_per_chunk;
                for (offset, out_row) in out.chunks_exact_mut(width).enumerate() {
                    let row = first_row + offset;
                    for (col, cell) in out_row.iter_mut().enumerate() {
                        let neighbors = live_neighbors(current, length, width, row, col);
                        *cell = rule::next_state(current[row * width + col], neighbors);
                    }
                }
            });

        std::mem::swap(&mut self.current, &mut self.next);
    }

    /// Refills the current generation and forgets the previous one.
    pub fn reseed<F>(&mut self, filler: F)
    where
        F: Fn(usize, usize) -> bool + Sync,
    {
        self.fill_current(&filler);
        self.next.fill(false);
    }

    fn fill_current<F>(&mut self, filler: &F)
    where
        F: Fn(usize, usize) -> bool + Sync,
    {
        let width = self.width;
        let rows_per_chunk = self.partition.rows_per_chunk(self.length);

        self.current
            .par_chunks_mut(rows_per_chunk * width)
            .enumerate()
            .for_each(|(chunk, cells)| {
                let first_row = chunk * rows_per_chunk;
                for (offset, row_cells) in cells.chunks_exact_mut(width).enumerate() {
                    for (col, cell) in row_cells.iter_mut().enumerate() {
                        *cell = filler(first_row + offset, col);
                    }
                }
            });
    }

    fn wrapped_index(&self, x: isize, y: isize) -> usize {
        wrap(x, self.length) * self.width + wrap(y, self.width)
    }
}

#[inline]
fn wrap(coord: isize, extent: usize) -> usize {
    coord.rem_euclid(extent as isize) as usize
}

/// Live cells among the 8 wrapped neighbours of `(row, col)`.
///
/// In a dimension of size 1 or 2 several offsets land on the same cell and
/// each offset is counted separately.
#[inline]
fn live_neighbors(cells: &[bool], length: usize, width: usize, row: usize, col: usize) -> u8 {
    let mut count = 0;
    for dr in -1..=1 {
        for dc in -1..=1 {
            if dr == 0 && dc == 0 {
                continue;
            }
            let r = wrap(row as isize + dr, length);
            let c = wrap(col as isize + dc, width);
            if cells[r * width + c] {
                count += 1;
            }
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "board dimensions must be positive")]
    fn zero_length_panics() {
        Board::new(0, 4, |_, _| false);
    }

    #[test]
    #[should_panic(expected = "board dimensions must be positive")]
    fn zero_width_panics() {
        Board::new(4, 0, |_, _| false);
    }

    #[test]
    #[should_panic(expected = "has too many cells")]
    fn overflowing_cell_count_panics() {
        let side = usize::MAX.isqrt() + 1;
        Board::new(side, side, |_, _| false);
    }

    #[test]
    fn next_starts_dead() {
        let board = Board::new(3, 4, |_, _| true);
        assert!(board.next.iter().all(|&alive| !alive));
        assert!(board.cells().iter().all(|&alive| alive));
    }

    #[test]
    fn filler_sees_row_then_col() {
        let board = Board::new(3, 5, |row, col| row == 2 && col == 4);
        assert!(board.get(2, 4));
        assert_eq!(board.population(), 1);
    }

    #[test]
    fn wrap_handles_negative_and_large_coords() {
        assert_eq!(wrap(-1, 3), 2);
        assert_eq!(wrap(-4, 3), 2);
        assert_eq!(wrap(3, 3), 0);
        assert_eq!(wrap(7, 3), 1);
    }

    #[test]
    fn single_cell_sees_itself_eight_times() {
        let cells = [true];
        assert_eq!(live_neighbors(&cells, 1, 1, 0, 0), 8);
    }

    #[test]
    fn step_swaps_buffers_without_reallocating() {
        let mut board = Board::new(6, 6, |row, col| (row + col) % 3 == 0);
        let current_ptr = board.current.as_ptr();
        let next_ptr = board.next.as_ptr();

        board.step();
        assert_eq!(board.current.as_ptr(), next_ptr);
        assert_eq!(board.next.as_ptr(), current_ptr);

        board.step();
        assert_eq!(board.current.as_ptr(), current_ptr);
    }

    #[test]
    fn changed_cells_reports_blinker_flip() {
        let mut board = Board::new(5, 5, |row, col| row == 2 && (1..=3).contains(&col));
        board.step();

        let mut changed: Vec<_> = board.changed_cells().collect();
        changed.sort();
        assert_eq!(changed, vec![(1, 2), (2, 1), (2, 3), (3, 2)]);
    }

    #[test]
    fn reseed_clears_previous_generation() {
        let mut board = Board::new(4, 4, |_, _| true);
        board.step();
        board.reseed(|row, _| row == 0);

        assert_eq!(board.population(), 4);
        assert_eq!(board.changed_cells().count(), 4);
    }

    #[test]
    fn toggle_wraps_coordinates() {
        let mut board = Board::new(3, 3, |_, _| false);
        board.toggle(-1, -1);
        assert!(board.get(2, 2));
        board.toggle(2, 2);
        assert_eq!(board.population(), 0);
    }
}
