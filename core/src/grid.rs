use alloc::vec::Vec;
use core::ops::{Index, IndexMut};
use ndarray::{Array2, ArrayView1};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::*;

/// Square, row-major grid of cells.
///
/// On the wire a grid is a JSON array of rows, each row an array of cells. Decoding rejects ragged or
/// non-square input instead of producing a partial board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    cells: Array2<T>,
}

impl<T> Grid<T> {
    pub fn from_fn(size: Coord, mut f: impl FnMut(Coord2) -> T) -> Self {
        let size = usize::from(size);
        let cells = Array2::from_shape_fn((size, size), |(row, col)| {
            // both axes are bounded by `size`, which came from a Coord
            f((row as Coord, col as Coord))
        });
        Self { cells }
    }

    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let size = rows.len();
        if Coord::try_from(size).is_err() || rows.iter().any(|row| row.len() != size) {
            return Err(BingoError::InvalidBoardShape);
        }

        let cells = Array2::from_shape_vec((size, size), rows.into_iter().flatten().collect())
            .map_err(|_| BingoError::InvalidBoardShape)?;
        Ok(Self { cells })
    }

    /// Side length of the grid.
    pub fn size(&self) -> Coord {
        self.cells
            .nrows()
            .try_into()
            .expect("grid size is checked on construction")
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size && coords.1 < size {
            Ok(coords)
        } else {
            Err(BingoError::InvalidCoords)
        }
    }

    /// Cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.cells.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.cells.iter_mut()
    }

    pub fn indexed_iter(&self) -> impl Iterator<Item = (Coord2, &T)> {
        self.cells
            .indexed_iter()
            .map(|((row, col), cell)| ((row as Coord, col as Coord), cell))
    }

    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            cells: self.cells.map(f),
        }
    }
}

impl<T> Index<Coord2> for Grid<T> {
    type Output = T;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl<T> IndexMut<Coord2> for Grid<T> {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.cells[coords.to_nd_index()]
    }
}

struct SerializeRow<'a, T>(ArrayView1<'a, T>);

impl<T: Serialize> Serialize for SerializeRow<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter())
    }
}

impl<T: Serialize> Serialize for Grid<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.cells.outer_iter().map(SerializeRow))
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Grid<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        let rows = Vec::<Vec<T>>::deserialize(deserializer)?;
        Grid::from_rows(rows).map_err(D::Error::custom)
    }
}
