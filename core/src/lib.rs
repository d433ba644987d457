#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use card::*;
pub use cell::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use mapper::*;
pub use random::*;
pub use session::*;
pub use types::*;
pub use win::*;

mod board;
mod card;
mod cell;
mod error;
mod generator;
mod grid;
mod mapper;
mod random;
mod session;
mod types;
mod win;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub size: Coord,
    pub schema: SchemaVersion,
}

impl BoardConfig {
    pub const DEFAULT_SIZE: Coord = 5;

    pub const fn new(size: Coord, schema: SchemaVersion) -> Self {
        Self { size, schema }
    }

    pub const fn total_cells(&self) -> usize {
        area(self.size)
    }

    /// Labels the card must provide, every cell but the center.
    pub const fn required_labels(&self) -> usize {
        self.total_cells().saturating_sub(1)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SIZE, SchemaVersion::Tagged)
    }
}
