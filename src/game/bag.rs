use crate::game::create_bag::create_bag_tiles;
use crate::game::language::Language;
use crate::game::tile::Tile;
use crate::{Result, ScrabbleError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Source of randomness used when drawing from the bag.
pub trait RandomSource: Send {
    /// Returns an index in `0..upper`. Only called with `upper > 0`.
    fn next_index(&mut self, upper: usize) -> usize;
}

impl RandomSource for StdRng {
    fn next_index(&mut self, upper: usize) -> usize {
        self.random_range(0..upper)
    }
}

/// The tiles not yet handed out to a player or placed on the board.
pub struct TileBag {
    tiles: Vec<Tile>,
    source: Box<dyn RandomSource>,
}

impl TileBag {
    /// A full bag for `language`, drawing with an OS-seeded generator.
    pub fn new(language: Language) -> Self {
        Self::with_source(create_bag_tiles(language), StdRng::from_rng(&mut rand::rng()))
    }

    /// A full bag whose draws are reproducible for a given seed.
    pub fn seeded(language: Language, seed: u64) -> Self {
        Self::with_source(create_bag_tiles(language), StdRng::seed_from_u64(seed))
    }

    pub fn with_source(tiles: Vec<Tile>, source: impl RandomSource + 'static) -> Self {
        TileBag {
            tiles,
            source: Box::new(source),
        }
    }

    /// Draws up to `amount` tiles at random, without replacement.
    ///
    /// If the bag holds fewer than `amount` tiles, all of them are returned and the
    /// bag ends up empty.
    pub fn draw(&mut self, amount: usize) -> Result<Vec<Tile>> {
        if amount == 0 {
            return Err(ScrabbleError::InvalidDrawCount(amount));
        }
        let amount = amount.min(self.tiles.len());
        let mut drawn = Vec::with_capacity(amount);
        for _ in 0..amount {
            let index = self.source.next_index(self.tiles.len());
            drawn.push(self.tiles.remove(index));
        }
        log::debug!("Drew {} tile(s), {} remaining", drawn.len(), self.tiles.len());
        Ok(drawn)
    }

    pub fn return_tile(&mut self, tile: Tile) {
        self.tiles.push(tile);
    }

    pub fn remaining_count(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Number of copies of `tile` still in the bag.
    pub fn count_of(&self, tile: &Tile) -> usize {
        self.tiles.iter().filter(|t| *t == tile).count()
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }
}

impl fmt::Debug for TileBag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TileBag")
            .field("remaining", &self.tiles.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Always takes the first tile, so draws come out in insertion order.
    struct InOrder;

    impl RandomSource for InOrder {
        fn next_index(&mut self, _upper: usize) -> usize {
            0
        }
    }

    #[test]
    fn test_draw_zero_is_rejected() {
        let mut bag = TileBag::seeded(Language::En, 1);
        assert!(matches!(bag.draw(0), Err(ScrabbleError::InvalidDrawCount(0))));
        assert_eq!(bag.remaining_count(), 100);
    }

    #[test]
    fn test_draw_reduces_remaining_count() {
        for seed in 0..20 {
            let mut bag = TileBag::seeded(Language::De, seed);
            let mut drawn_total = 0;
            for amount in [7, 7, 13, 1, 50, 30] {
                let before = bag.remaining_count();
                let drawn = bag.draw(amount).unwrap();
                drawn_total += drawn.len();
                assert_eq!(bag.remaining_count(), before.saturating_sub(amount));
                assert_eq!(drawn.len(), before.min(amount));
            }
            assert_eq!(drawn_total, Language::De.total_tiles() - bag.remaining_count());
        }
    }

    #[test]
    fn test_draw_more_than_remaining_empties_bag() {
        let tiles = vec![Tile::new('A', 1), Tile::new('B', 3)];
        let mut bag = TileBag::with_source(tiles.clone(), InOrder);
        let drawn = bag.draw(7).unwrap();
        assert_eq!(drawn, tiles);
        assert!(bag.is_empty());
        assert!(bag.draw(3).unwrap().is_empty());
    }

    #[test]
    fn test_draw_is_reproducible_for_seed() {
        let mut a = TileBag::seeded(Language::En, 42);
        let mut b = TileBag::seeded(Language::En, 42);
        assert_eq!(a.draw(20).unwrap(), b.draw(20).unwrap());
    }

    #[test]
    fn test_drawn_tiles_come_from_the_bag() {
        let mut bag = TileBag::seeded(Language::En, 7);
        let drawn = bag.draw(100).unwrap();
        let mut expected = create_bag_tiles(Language::En);
        for tile in &drawn {
            let pos = expected.iter().position(|t| t == tile).unwrap();
            expected.swap_remove(pos);
        }
        assert!(expected.is_empty());
    }

    #[test]
    fn test_return_tile_tracks_duplicates() {
        let mut bag = TileBag::with_source(vec![Tile::new('A', 1)], InOrder);
        bag.return_tile(Tile::new('A', 1));
        bag.return_tile(Tile::new('A', 1));
        assert_eq!(bag.remaining_count(), 3);
        assert_eq!(bag.count_of(&Tile::new('A', 1)), 3);
    }
}
