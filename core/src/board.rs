use alloc::string::String;
use core::fmt;
use core::marker::PhantomData;
use serde::de::value::{MapAccessDeserializer, SeqAccessDeserializer};
use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::*;

/// Shape of a persisted board.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SchemaVersion {
    /// v1: bare grid, `[[cell, ...], ...]`.
    Flat,
    /// v2: grid tagged with the tile set that produced it, `{"tileId": ..., "board": [[...]]}`.
    #[default]
    Tagged,
}

/// A board in either schema shape.
///
/// Serialized untagged: the flat variant is a JSON array, the tagged one a JSON object, so the two can't
/// be confused on decode.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Board<C> {
    Flat(Grid<C>),
    Tagged {
        #[serde(rename = "tileId")]
        tile_id: String,
        board: Grid<C>,
    },
}

/// Full runtime board.
pub type GameState = Board<CellState>;

/// Minimal board as written to storage.
pub type StoredGameState = Board<StoredCellState>;

impl<C> Board<C> {
    pub fn schema(&self) -> SchemaVersion {
        match self {
            Self::Flat(_) => SchemaVersion::Flat,
            Self::Tagged { .. } => SchemaVersion::Tagged,
        }
    }

    pub fn tile_id(&self) -> Option<&str> {
        match self {
            Self::Flat(_) => None,
            Self::Tagged { tile_id, .. } => Some(tile_id),
        }
    }

    pub fn grid(&self) -> &Grid<C> {
        match self {
            Self::Flat(grid) | Self::Tagged { board: grid, .. } => grid,
        }
    }

    pub fn grid_mut(&mut self) -> &mut Grid<C> {
        match self {
            Self::Flat(grid) | Self::Tagged { board: grid, .. } => grid,
        }
    }

    pub fn size(&self) -> Coord {
        self.grid().size()
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<&C> {
        let grid = self.grid();
        let coords = grid.validate_coords(coords)?;
        Ok(&grid[coords])
    }

    /// Builds a board of the same shape and tile id with every cell converted by `f`.
    pub fn map_cells<U>(&self, f: impl FnMut(&C) -> U) -> Board<U> {
        match self {
            Self::Flat(grid) => Board::Flat(grid.map(f)),
            Self::Tagged { tile_id, board } => Board::Tagged {
                tile_id: tile_id.clone(),
                board: board.map(f),
            },
        }
    }

    /// Migrates a v1 board to v2 by tagging it with `tile_id`. Tagged boards keep their own id.
    pub fn into_tagged(self, tile_id: impl Into<String>) -> Self {
        match self {
            Self::Flat(board) => Self::Tagged {
                tile_id: tile_id.into(),
                board,
            },
            tagged @ Self::Tagged { .. } => tagged,
        }
    }
}

/// Outcome of toggling a cell
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SelectOutcome {
    Selected,
    Unselected,
}

impl SelectOutcome {
    pub const fn is_selected(self) -> bool {
        matches!(self, Self::Selected)
    }
}

impl GameState {
    pub fn toggle_selected(&mut self, coords: Coord2) -> Result<SelectOutcome> {
        let grid = self.grid_mut();
        let coords = grid.validate_coords(coords)?;
        let cell = &mut grid[coords];
        cell.selected = !cell.selected;
        log::trace!("toggle {:?}: {}", coords, cell.selected);

        Ok(if cell.selected {
            SelectOutcome::Selected
        } else {
            SelectOutcome::Unselected
        })
    }

    /// Associates a UI element with a cell, returning the handle it replaces.
    pub fn attach_element(
        &mut self,
        coords: Coord2,
        handle: ElementHandle,
    ) -> Result<Option<ElementHandle>> {
        let grid = self.grid_mut();
        let coords = grid.validate_coords(coords)?;
        Ok(grid[coords].element.replace(handle))
    }

    /// Forgets every element handle, e.g. when the UI tears down its cells.
    pub fn detach_elements(&mut self) {
        for cell in self.grid_mut().iter_mut() {
            cell.element = None;
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TaggedRepr<C> {
    tile_id: String,
    board: Grid<C>,
}

struct BoardVisitor<C>(PhantomData<C>);

impl<'de, C: Deserialize<'de>> Visitor<'de> for BoardVisitor<C> {
    type Value = Board<C>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a square grid of cells or a {tileId, board} object")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, seq: A) -> core::result::Result<Self::Value, A::Error> {
        Grid::deserialize(SeqAccessDeserializer::new(seq)).map(Board::Flat)
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> core::result::Result<Self::Value, A::Error> {
        let TaggedRepr { tile_id, board } = TaggedRepr::deserialize(MapAccessDeserializer::new(map))?;
        Ok(Board::Tagged { tile_id, board })
    }
}

impl<'de, C: Deserialize<'de>> Deserialize<'de> for Board<C> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        deserializer.deserialize_any(BoardVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    fn stored(size: Coord) -> Grid<StoredCellState> {
        Grid::from_fn(size, |(row, col)| StoredCellState {
            label: format!("{row}-{col}"),
            selected: row == col,
        })
    }

    #[test]
    fn flat_board_is_a_bare_array() {
        let board = Board::Flat(stored(1));

        assert_eq!(
            serde_json::to_string(&board).unwrap(),
            r#"[[{"label":"0-0","selected":true}]]"#
        );
    }

    #[test]
    fn tagged_board_uses_camel_case_tile_id() {
        let board = Board::Flat(stored(1)).into_tagged("halloween");

        assert_eq!(
            serde_json::to_string(&board).unwrap(),
            r#"{"tileId":"halloween","board":[[{"label":"0-0","selected":true}]]}"#
        );
    }

    #[test]
    fn decodes_both_shapes() {
        let flat: StoredGameState =
            serde_json::from_str(r#"[[{"label":"a","selected":false}]]"#).unwrap();
        let tagged: StoredGameState =
            serde_json::from_str(r#"{"tileId":"t","board":[[{"label":"a","selected":false}]]}"#)
                .unwrap();

        assert_eq!(flat.schema(), SchemaVersion::Flat);
        assert_eq!(tagged.schema(), SchemaVersion::Tagged);
        assert_eq!(tagged.tile_id(), Some("t"));
        assert_eq!(flat.grid(), tagged.grid());
    }

    #[test]
    fn decode_rejects_other_json_types() {
        assert!(serde_json::from_str::<StoredGameState>("42").is_err());
        assert!(serde_json::from_str::<StoredGameState>(r#"{"board":[]}"#).is_err());
        assert!(serde_json::from_str::<StoredGameState>(r#"[[{"label":"a"}]]"#).is_err());
    }

    #[test]
    fn into_tagged_keeps_existing_tile_id() {
        let board = Board::Flat(stored(2)).into_tagged("first").into_tagged("second");

        assert_eq!(board.tile_id(), Some("first"));
    }

    #[test]
    fn toggle_selected_flips_and_validates() {
        let mut game: GameState = Board::Flat(Grid::from_fn(2, |_| CellState::new("x")));

        assert_eq!(game.toggle_selected((1, 0)), Ok(SelectOutcome::Selected));
        assert!(game.cell_at((1, 0)).unwrap().selected);
        assert_eq!(game.toggle_selected((1, 0)), Ok(SelectOutcome::Unselected));
        assert_eq!(game.toggle_selected((2, 0)), Err(BingoError::InvalidCoords));
    }

    #[test]
    fn attach_element_replaces_previous_handle() {
        use core::num::NonZeroU32;

        let mut game: GameState = Board::Flat(Grid::from_fn(1, |_| CellState::new("x")));
        let first = ElementHandle::from_raw(NonZeroU32::MIN);
        let second = ElementHandle::from_raw(NonZeroU32::MIN.saturating_add(1));

        assert_eq!(game.attach_element((0, 0), first), Ok(None));
        assert_eq!(game.attach_element((0, 0), second), Ok(Some(first)));

        game.detach_elements();
        assert_eq!(game.cell_at((0, 0)).unwrap().element, None);
    }
}
