use crate::game::language::Language;
use crate::game::tile::Tile;

/// Expands a language's distribution table into the full list of tiles of a fresh bag.
pub fn create_bag_tiles(language: Language) -> Vec<Tile> {
    language
        .tile_distribution()
        .iter()
        .flat_map(|&(letter, value, count)| std::iter::repeat_n(Tile::new(letter, value), count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_english_bag() {
        let tiles = create_bag_tiles(Language::En);

        assert_eq!(
            tiles.len(),
            100,
            "The english bag should contain exactly 100 tiles, but found {}.",
            tiles.len()
        );

        let e_count = tiles.iter().filter(|t| **t == Tile::new('E', 1)).count();
        assert_eq!(e_count, 12);

        let jokers = tiles.iter().filter(|t| t.is_joker()).count();
        assert_eq!(jokers, 2);
    }

    #[test]
    fn test_create_german_bag() {
        let tiles = create_bag_tiles(Language::De);
        assert_eq!(tiles.len(), 102);
        assert!(
            tiles.contains(&Tile::new('Ü', 6)),
            "The german bag should contain the tile {}.",
            Tile::new('Ü', 6)
        );
        assert!(!tiles.contains(&Tile::new('Ü', 1)));
    }
}
