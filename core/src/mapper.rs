use crate::*;

/// Projects a runtime board down to what gets persisted.
///
/// Keeps shape, tile id, labels and selection. Win metadata and element handles are dropped.
pub fn to_stored(full: &GameState) -> StoredGameState {
    full.map_cells(|cell| StoredCellState::from(cell))
}

/// Rehydrates a runtime board from storage.
///
/// Every cell comes back with `winning == false`, no winning directions and no element. Callers reattach
/// elements and run [`GameState::recompute_winning`] afterwards.
pub fn to_full(stored: &StoredGameState) -> GameState {
    stored.map_cells(|cell| CellState::from(cell))
}

impl From<&GameState> for StoredGameState {
    fn from(full: &GameState) -> Self {
        to_stored(full)
    }
}

impl From<&StoredGameState> for GameState {
    fn from(stored: &StoredGameState) -> Self {
        to_full(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use core::num::NonZeroU32;

    fn stored_grid(size: Coord) -> Grid<StoredCellState> {
        Grid::from_fn(size, |(row, col)| StoredCellState {
            label: format!("B{}", usize::from(row) * usize::from(size) + usize::from(col) + 1),
            selected: (row + col) % 3 == 0,
        })
    }

    #[test]
    fn stored_round_trip_is_exact() {
        let boards = [
            Board::Flat(stored_grid(5)),
            Board::Flat(stored_grid(3)).into_tagged("halloween"),
            Board::Flat(stored_grid(0)),
        ];

        for stored in boards {
            assert_eq!(to_stored(&to_full(&stored)), stored);
        }
    }

    #[test]
    fn to_full_never_carries_win_metadata() {
        let stored = Board::Flat(stored_grid(4)).into_tagged("t");

        let full = to_full(&stored);

        assert_eq!(full.tile_id(), Some("t"));
        assert!(full.grid().iter().all(|cell| {
            !cell.winning && cell.winning_directions.is_empty() && cell.element.is_none()
        }));
    }

    #[test]
    fn to_stored_drops_transient_fields() {
        let mut full = to_full(&Board::Flat(stored_grid(3)));
        for coords in WinningDirection::Row(0).cells(3) {
            full.grid_mut()[coords].selected = true;
        }
        full.recompute_winning();
        let handle = ElementHandle::from_raw(NonZeroU32::MIN);
        full.attach_element((0, 0), handle).unwrap();

        let stored = to_stored(&full);
        let restored = to_full(&stored);

        assert!(stored.grid()[(0, 0)].selected);
        assert_ne!(restored, full);
        assert!(!restored.grid()[(0, 0)].winning);
        assert_eq!(restored.grid()[(0, 0)].element, None);
        assert_eq!(to_stored(&restored), stored);
    }

    #[test]
    fn from_impls_match_functions() {
        let stored = Board::Flat(stored_grid(2));
        let full = GameState::from(&stored);

        assert_eq!(StoredGameState::from(&full), stored);
    }
}
