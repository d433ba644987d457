use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;

/// Full seed of the generator's RNG, wide enough to reach every arrangement of a 5x5 card.
pub type GeneratorSeed = <SmallRng as SeedableRng>::Seed;

/// Shuffles the card labels over the board and draws the center label from the free spaces.
#[derive(Clone, Debug)]
pub struct RandomBoardGenerator {
    rng: SmallRng,
}

impl RandomBoardGenerator {
    /// Seeds from a single `u64`, enough for tests and replays.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn from_seed(seed: GeneratorSeed) -> Self {
        Self {
            rng: SmallRng::from_seed(seed),
        }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(mut self, config: BoardConfig, card: &Card) -> Result<GameState> {
        if config.size == 0 {
            log::warn!("Refusing to generate an empty board");
            return Err(BingoError::InvalidSize);
        }

        let required = config.required_labels();
        let available = card.labels.len();
        if available < required {
            log::warn!(
                "Card {:?} has {} labels, a {}x{} board needs {}",
                card.id,
                available,
                config.size,
                config.size,
                required
            );
            return Err(BingoError::InsufficientLabels {
                required,
                available,
            });
        }

        let mut labels = card.labels.clone();
        shuffle(&mut labels, &mut self.rng);
        let free_label = pick_random(&card.free_spaces, &mut self.rng)
            .cloned()
            .unwrap_or_default();

        // the center takes no label from the pool, cells after it shift back by one
        let size = usize::from(config.size);
        let center = center(config.size);
        let center_index = usize::from(center.0) * size + usize::from(center.1);
        let board = Grid::from_fn(config.size, |coords| {
            if coords == center {
                return CellState::new(free_label.clone());
            }
            let index = usize::from(coords.0) * size + usize::from(coords.1);
            let index = if index > center_index { index - 1 } else { index };
            CellState::new(labels[index].clone())
        });

        log::debug!(
            "Generated {}x{} board from card {:?}, center label {:?}",
            config.size,
            config.size,
            card.id,
            free_label
        );

        Ok(match config.schema {
            SchemaVersion::Flat => Board::Flat(board),
            SchemaVersion::Tagged => Board::Tagged {
                tile_id: card.id.clone(),
                board,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::BTreeSet;
    use alloc::format;
    use alloc::string::String;
    use alloc::vec::Vec;

    fn card(label_count: usize, free_spaces: &[&str]) -> Card {
        Card::new(
            "classic",
            (1..=label_count).map(|i| format!("B{i}")),
            free_spaces.iter().copied(),
        )
    }

    fn generate(seed: u64, size: Coord, card: &Card) -> Result<GameState> {
        RandomBoardGenerator::new(seed).generate(BoardConfig::new(size, SchemaVersion::Tagged), card)
    }

    #[test]
    fn center_holds_a_free_space_label() {
        let free_spaces = ["FREE", "WILD", "JOKER"];

        for size in 1..=7 {
            let card = card(area(size) - 1, &free_spaces);
            for seed in 0..20 {
                let game = generate(seed, size, &card).unwrap();
                let label = &game.cell_at(center(size)).unwrap().label;
                assert!(free_spaces.contains(&label.as_str()), "{label} at center");
            }
        }
    }

    #[test]
    fn center_is_empty_without_free_spaces() {
        let game = generate(7, 5, &card(24, &[])).unwrap();

        assert_eq!(game.cell_at((2, 2)).unwrap().label, "");
    }

    #[test]
    fn exact_pool_is_used_once_each() {
        for size in [2, 3, 5] {
            let card = card(area(size) - 1, &["FREE"]);
            let game = generate(11, size, &card).unwrap();

            let mut non_center: Vec<String> = game
                .grid()
                .indexed_iter()
                .filter(|&(coords, _)| coords != center(size))
                .map(|(_, cell)| cell.label.clone())
                .collect();
            let unique: BTreeSet<_> = non_center.iter().cloned().collect();
            assert_eq!(unique.len(), non_center.len());

            non_center.sort();
            let mut expected = card.labels.clone();
            expected.sort();
            assert_eq!(non_center, expected);
        }
    }

    #[test]
    fn larger_pool_leaves_surplus_unused() {
        let card = card(40, &["FREE"]);
        let game = generate(3, 5, &card).unwrap();

        let labels: BTreeSet<_> = game.grid().iter().map(|cell| cell.label.as_str()).collect();
        assert_eq!(labels.len(), 25);
        assert!(labels.contains("FREE"));
    }

    #[test]
    fn insufficient_labels_are_rejected() {
        assert_eq!(
            generate(0, 5, &card(23, &["FREE"])),
            Err(BingoError::InsufficientLabels {
                required: 24,
                available: 23,
            })
        );
    }

    #[test]
    fn zero_size_is_rejected() {
        assert_eq!(generate(0, 0, &card(10, &["FREE"])), Err(BingoError::InvalidSize));
    }

    #[test]
    fn fresh_board_has_no_play_state() {
        let game = generate(5, 5, &card(24, &["FREE"])).unwrap();

        assert_eq!(game.size(), 5);
        assert!(game.grid().iter().all(|cell| {
            !cell.selected
                && !cell.winning
                && cell.winning_directions.is_empty()
                && cell.element.is_none()
                && !cell.label.is_empty()
        }));
    }

    #[test]
    fn schema_controls_board_shape() {
        let card = card(8, &["FREE"]);

        let tagged = generate(1, 3, &card).unwrap();
        let flat = RandomBoardGenerator::new(1)
            .generate(BoardConfig::new(3, SchemaVersion::Flat), &card)
            .unwrap();

        assert_eq!(tagged.tile_id(), Some("classic"));
        assert_eq!(flat.tile_id(), None);
        assert_eq!(tagged.grid(), flat.grid());
    }

    #[test]
    fn same_seed_same_board() {
        let card = card(24, &["FREE", "WILD"]);

        assert_eq!(generate(99, 5, &card), generate(99, 5, &card));
    }

    #[test]
    fn full_width_seed_is_deterministic() {
        let card = card(24, &["FREE", "WILD"]);
        let config = BoardConfig::new(5, SchemaVersion::Tagged);
        let mut seed = GeneratorSeed::default();
        for (i, byte) in seed.as_mut().iter_mut().enumerate() {
            *byte = (i as u8).wrapping_mul(37).wrapping_add(1);
        }
        let mut other = seed;
        other.as_mut()[0] ^= 0xff;

        let first = RandomBoardGenerator::from_seed(seed).generate(config, &card);
        let again = RandomBoardGenerator::from_seed(seed).generate(config, &card);
        let changed = RandomBoardGenerator::from_seed(other).generate(config, &card);

        assert_eq!(first, again);
        assert_ne!(first, changed);
    }
}
