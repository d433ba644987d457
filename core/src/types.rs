/// Single coordinate axis used for board size and positions.
pub type Coord = u8;

/// Two-dimensional coordinates `(row, column)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

/// Number of cells on a `size × size` board.
pub const fn area(size: Coord) -> usize {
    let size = size as usize;
    size * size
}

/// Index of the free cell on both axes.
pub const fn center(size: Coord) -> Coord2 {
    (size / 2, size / 2)
}
