// partition.rs - Static row chunking for parallel init and step

/// How rows are split into disjoint chunks, one worker per chunk.
///
/// The strategy only affects scheduling. Every variant produces the same
/// generation for the same input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Partition {
    /// One chunk per rayon worker thread.
    #[default]
    PerCore,
    /// Fixed number of rows per chunk (clamped to at least one).
    Rows(usize),
    /// Whole grid in one chunk, i.e. single-threaded.
    Single,
}

impl Partition {
    /// Rows per chunk for a board with `length` rows. Always at least 1.
    pub fn rows_per_chunk(self, length: usize) -> usize {
        let rows = match self {
            Partition::PerCore => {
                let workers = rayon::current_num_threads().max(1);
                length.div_ceil(workers)
            }
            Partition::Rows(n) => n.min(length),
            Partition::Single => length,
        };
        rows.max(1)
    }

    /// Number of chunks `length` rows split into.
    pub fn chunk_count(self, length: usize) -> usize {
        length.div_ceil(self.rows_per_chunk(length))
    }
}
