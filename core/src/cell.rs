use alloc::collections::BTreeSet;
use alloc::string::String;
use core::num::NonZeroU32;
use serde::{Deserialize, Serialize};

use crate::WinningDirection;

/// Persisted part of a cell: what survives a page reload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StoredCellState {
    pub label: String,
    pub selected: bool,
}

/// Opaque identifier of a UI element drawn for a cell.
///
/// The board never owns the element. Whoever issued the handle may drop the element at any time, after
/// which the handle simply resolves to nothing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementHandle(NonZeroU32);

impl ElementHandle {
    pub const fn from_raw(raw: NonZeroU32) -> Self {
        Self(raw)
    }
}

/// Runtime cell, including state derived during play.
///
/// Deliberately not serializable, use [`StoredCellState`] for that.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CellState {
    pub label: String,
    pub selected: bool,
    /// Part of at least one completed line.
    pub winning: bool,
    pub winning_directions: BTreeSet<WinningDirection>,
    pub element: Option<ElementHandle>,
}

impl CellState {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn clear_win(&mut self) {
        self.winning = false;
        self.winning_directions.clear();
    }
}

impl From<&CellState> for StoredCellState {
    fn from(cell: &CellState) -> Self {
        Self {
            label: cell.label.clone(),
            selected: cell.selected,
        }
    }
}

impl From<&StoredCellState> for CellState {
    fn from(cell: &StoredCellState) -> Self {
        Self {
            label: cell.label.clone(),
            selected: cell.selected,
            winning: false,
            winning_directions: BTreeSet::new(),
            element: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_cell_uses_plain_field_names() {
        let cell = StoredCellState {
            label: "B1".into(),
            selected: true,
        };

        assert_eq!(
            serde_json::to_string(&cell).unwrap(),
            r#"{"label":"B1","selected":true}"#
        );
    }

    #[test]
    fn stripping_keeps_only_label_and_selection() {
        let mut cell = CellState::new("free");
        cell.selected = true;
        cell.winning = true;
        cell.winning_directions.insert(WinningDirection::Diagonal);
        cell.element = NonZeroU32::new(7).map(ElementHandle::from_raw);

        let stored = StoredCellState::from(&cell);
        let restored = CellState::from(&stored);

        assert_eq!(stored.label, "free");
        assert!(stored.selected);
        assert!(!restored.winning);
        assert!(restored.winning_directions.is_empty());
        assert_eq!(restored.element, None);
    }
}
