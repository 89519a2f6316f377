//! Spawner module - next-block generation and random drops
//!
//! Colors are drawn independently and uniformly from the first `palette_size`
//! palette entries. Drops pick uniformly among the cells that are empty at the
//! moment of the drop, so a batch of drops samples a shrinking set.
//!
//! Randomness is always passed in. The engine defaults to a seeded
//! [`ChaCha8Rng`] so the same seed replays the same game.

use arrayvec::ArrayVec;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::SpawnError;
use crate::grid::Grid;
use crate::types::{Color, MAX_NEXT_BLOCK_LEN};

/// Pieces queued for the next drop
pub type NextBlock = ArrayVec<Color, MAX_NEXT_BLOCK_LEN>;

/// Default, reproducible game RNG
pub type GameRng = ChaCha8Rng;

/// Create the default RNG from a seed
pub fn seeded_rng(seed: u64) -> GameRng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Draw one palette color
pub fn random_color<R: Rng>(rng: &mut R, palette_size: usize) -> Color {
    let size = palette_size.clamp(1, Color::PALETTE.len());
    Color::PALETTE[rng.random_range(0..size)]
}

/// Draw a fresh next block of `len` colors (capped at [`MAX_NEXT_BLOCK_LEN`])
pub fn next_block<R: Rng>(rng: &mut R, len: usize, palette_size: usize) -> NextBlock {
    let mut block = NextBlock::new();
    for _ in 0..len.min(MAX_NEXT_BLOCK_LEN) {
        block.push(random_color(rng, palette_size));
    }
    block
}

/// Put `color` on a uniformly chosen empty cell and return its index
pub fn drop_one<R: Rng>(
    grid: &mut Grid,
    rng: &mut R,
    color: Color,
) -> Result<usize, SpawnError> {
    let empty = grid.count_empty();
    if empty == 0 {
        return Err(SpawnError::BoardFull);
    }
    let pick = rng.random_range(0..empty);
    let index = grid
        .empty_indices()
        .nth(pick)
        .ok_or(SpawnError::BoardFull)?;
    grid.set(index, color).map_err(|_| SpawnError::BoardFull)?;
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = seeded_rng(12345);
        let mut rng2 = seeded_rng(12345);

        // Same seed should produce same blocks
        for _ in 0..100 {
            assert_eq!(next_block(&mut rng1, 3, 6), next_block(&mut rng2, 3, 6));
        }
    }

    #[test]
    fn test_next_block_len_and_palette() {
        let mut rng = seeded_rng(7);
        for _ in 0..200 {
            let block = next_block(&mut rng, 3, 2);
            assert_eq!(block.len(), 3);
            assert!(block
                .iter()
                .all(|c| matches!(c, Color::Yellow | Color::Peach)));
        }
    }

    #[test]
    fn test_next_block_covers_palette() {
        let mut rng = seeded_rng(1);
        let mut seen = [false; 6];
        for _ in 0..200 {
            for color in next_block(&mut rng, 3, 6) {
                seen[color.code() as usize - 1] = true;
            }
        }
        assert!(seen.iter().all(|s| *s), "missing colors: {:?}", seen);
    }

    #[test]
    fn test_drop_fills_only_empty_cells() {
        let mut rng = seeded_rng(3);
        let mut grid = Grid::new(3);
        let mut used = Vec::new();
        for _ in 0..9 {
            let index = drop_one(&mut grid, &mut rng, Color::Blue).unwrap();
            assert!(!used.contains(&index));
            used.push(index);
        }
        assert_eq!(grid.count_empty(), 0);
        assert_eq!(
            drop_one(&mut grid, &mut rng, Color::Blue),
            Err(SpawnError::BoardFull)
        );
    }

    #[test]
    fn test_drop_on_last_empty_cell() {
        let mut rng = seeded_rng(9);
        let mut grid: Grid = "111 1.1 111".parse().unwrap();
        assert_eq!(drop_one(&mut grid, &mut rng, Color::Green), Ok(4));
        assert_eq!(grid.get(4), Ok(Color::Green));
    }
}
