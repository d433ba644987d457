use alloc::collections::BTreeSet;
use serde::{Deserialize, Serialize};

use crate::*;

/// A line of the board that can be completed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WinningDirection {
    Row(Coord),
    Column(Coord),
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl WinningDirection {
    /// Every line of a `size × size` board, rows first.
    pub fn all(size: Coord) -> impl Iterator<Item = Self> {
        use WinningDirection::*;
        (0..size)
            .map(Row)
            .chain((0..size).map(Column))
            .chain([Diagonal, AntiDiagonal])
            .filter(move |_| size > 0)
    }

    pub fn cells(self, size: Coord) -> impl Iterator<Item = Coord2> {
        use WinningDirection::*;
        (0..size).map(move |i| match self {
            Row(row) => (row, i),
            Column(col) => (i, col),
            Diagonal => (i, i),
            AntiDiagonal => (i, size - 1 - i),
        })
    }
}

impl GameState {
    /// Recomputes `winning` and `winning_directions` of every cell from the current selection.
    ///
    /// Meant to run after each selection change and after rehydrating from storage, which leaves all win
    /// metadata empty. Returns the completed lines.
    pub fn recompute_winning(&mut self) -> BTreeSet<WinningDirection> {
        let grid = self.grid_mut();
        grid.iter_mut().for_each(CellState::clear_win);

        let size = grid.size();
        let completed: BTreeSet<_> = WinningDirection::all(size)
            .filter(|line| line.cells(size).all(|coords| grid[coords].selected))
            .collect();

        for &line in &completed {
            for coords in line.cells(size) {
                let cell = &mut grid[coords];
                cell.winning = true;
                cell.winning_directions.insert(line);
            }
        }

        if !completed.is_empty() {
            log::debug!("completed lines: {:?}", completed);
        }
        completed
    }
}
