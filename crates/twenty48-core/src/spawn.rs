//! Random tile spawning, used by self-play drivers.

use rand::Rng;

use crate::board::Board;

/// Values the spawn process can insert, in the order the search tries them.
pub const SPAWN_VALUES: [u32; 2] = [2, 4];

/// Probability that a spawned tile is a 4 rather than a 2.
pub const FOUR_PROBABILITY: f64 = 0.1;

impl Board {
    /// Insert a 2 (90%) or 4 (10%) into a uniformly chosen empty cell.
    ///
    /// A full board is returned unchanged.
    pub fn with_random_tile<R: Rng>(self, rng: &mut R) -> Board {
        let empty = self.empty_cells();
        if empty.is_empty() {
            return self;
        }
        let pos = empty[rng.gen_range(0..empty.len())];
        let value = if rng.gen_bool(FOUR_PROBABILITY) { 4 } else { 2 };
        self.with_tile(pos, value)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::board::Board;

    #[test]
    fn spawn_fills_one_empty_cell() {
        let mut rng = StdRng::seed_from_u64(7);
        let board = Board::EMPTY.with_random_tile(&mut rng);
        assert_eq!(board.empty_count(), 15);
        assert!(matches!(board.max_tile(), 2 | 4));
    }

    #[test]
    fn spawn_is_deterministic_for_a_seed() {
        let a = Board::EMPTY
            .with_random_tile(&mut StdRng::seed_from_u64(42))
            .with_random_tile(&mut StdRng::seed_from_u64(43));
        let b = Board::EMPTY
            .with_random_tile(&mut StdRng::seed_from_u64(42))
            .with_random_tile(&mut StdRng::seed_from_u64(43));
        assert_eq!(a, b);
    }

    #[test]
    fn full_board_is_unchanged() {
        let full: Board = "2 4 2 4/4 2 4 2/2 4 2 4/4 2 4 2".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(full.with_random_tile(&mut rng), full);
    }
}
