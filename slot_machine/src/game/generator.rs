//! Random board generation with the wildcard placement policy.

use log::debug;
use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};
use std::collections::HashSet;

use super::{
    board::{Board, Cell},
    constants::{ALPHABET, RANK_COUNT},
    symbols::Symbol,
    tier::DifficultyTier,
};

/// Board generator owning its random source.
///
/// Production code uses [`BoardGenerator::new`] (OS-seeded); tests inject a
/// seeded or custom RNG through [`BoardGenerator::seeded`] or
/// [`BoardGenerator::with_rng`].
#[derive(Debug)]
pub struct BoardGenerator<R = StdRng> {
    rng: R,
}

impl BoardGenerator<StdRng> {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible generator for tests and simulations.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for BoardGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> BoardGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a board for the tier.
    ///
    /// Every cell is drawn uniformly from the thirteen ranks, then exactly
    /// `min(wildcard_limit, size²)` distinct cells are overwritten with the
    /// wildcard (see [`BoardGenerator::wildcard_cells`]).
    pub fn generate(&mut self, tier: &DifficultyTier) -> Board {
        let size = tier.board_size;
        let mut board = Board::filled(size, Symbol::Ace);
        for row in 0..size {
            for col in 0..size {
                let rank = self.rng.random_range(0..RANK_COUNT);
                board.set((row, col), ALPHABET[rank]);
            }
        }

        let wild_cells = self.wildcard_cells(size, tier.wildcard_limit);
        for &cell in &wild_cells {
            board.set(cell, Symbol::Wild);
        }

        debug!("Generated {size}x{size} board with wildcards at {wild_cells:?}");
        board
    }

    /// Choose the wildcard cells for a `size` x `size` board.
    ///
    /// Each pick is uniform over the cells still eligible. While some column
    /// has no wildcard, only cells in such columns are eligible; once every
    /// column has one (or none remain), any unchosen cell is. A cell is never
    /// chosen twice, so the result has `min(limit, size²)` entries.
    pub fn wildcard_cells(&mut self, size: usize, limit: usize) -> Vec<Cell> {
        let target = limit.min(size * size);
        let all_cells: Vec<Cell> = (0..size)
            .flat_map(|row| (0..size).map(move |col| (row, col)))
            .collect();

        let mut chosen: Vec<Cell> = Vec::with_capacity(target);
        let mut wild_columns: HashSet<usize> = HashSet::with_capacity(size);

        // Distinct columns first.
        while chosen.len() < target && wild_columns.len() < size {
            let available: Vec<Cell> = all_cells
                .iter()
                .copied()
                .filter(|cell| !wild_columns.contains(&cell.1) && !chosen.contains(cell))
                .collect();
            let Some(&cell) = available.choose(&mut self.rng) else {
                break;
            };
            wild_columns.insert(cell.1);
            chosen.push(cell);
        }

        // Anything left goes anywhere not already taken.
        while chosen.len() < target {
            let available: Vec<Cell> = all_cells
                .iter()
                .copied()
                .filter(|cell| !chosen.contains(cell))
                .collect();
            let Some(&cell) = available.choose(&mut self.rng) else {
                break;
            };
            chosen.push(cell);
        }

        chosen
    }
}
