//! Wall encoding of a single triangular cell
//!
//! Every cell stores three wall flags in the low bits of a byte:
//!
//! | bit | wall                                   |
//! |-----|----------------------------------------|
//! | 0   | left                                   |
//! | 1   | right                                  |
//! | 2   | top or bottom, depending on the parity |
//!
//! Cells with an even `row + col` point down and own a top edge, the others
//! point up and own a bottom edge. Both edges are stored in the same bit.

/// One of the logical walls of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Wall {
    Left,
    Right,
    Top,
    Bottom,
}

/// Which horizontal edge a cell has, decided by position parity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Boundary {
    Top,
    Bottom,
}

/// Stored wall configuration of one cell, always in `0..=7`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell(u8);

/// Split a cell value into its three lowest bits, least significant first.
///
/// Values above 7 are not rejected here; higher bits are simply ignored.
pub fn decode(value: u8) -> [bool; 3] {
    [value & 1 == 1, (value >> 1) & 1 == 1, (value >> 2) & 1 == 1]
}

/// Inverse of [decode]
pub fn encode(bits: [bool; 3]) -> u8 {
    bits.iter()
        .enumerate()
        .map(|(i, &set)| (set as u8) << i)
        .sum()
}

/// Boundary of the cell at `(row, col)`
pub fn logical_boundary(row: usize, col: usize) -> Boundary {
    if (row + col) % 2 == 0 {
        Boundary::Top
    } else {
        Boundary::Bottom
    }
}

impl Wall {
    /// Index of the stored bit that holds this wall.
    ///
    /// `Top` and `Bottom` share bit 2.
    fn bit(self) -> usize {
        match self {
            Wall::Left => 0,
            Wall::Right => 1,
            Wall::Top | Wall::Bottom => 2,
        }
    }
}

impl Boundary {
    /// Logical name of the horizontal wall
    pub fn wall(self) -> Wall {
        match self {
            Boundary::Top => Wall::Top,
            Boundary::Bottom => Wall::Bottom,
        }
    }
}

impl Cell {
    pub const MAX: u8 = 7;

    /// Wrap a value, if it fits into three bits
    pub fn new(value: u8) -> Option<Self> {
        (value <= Self::MAX).then_some(Cell(value))
    }

    /// Stored value
    pub fn value(self) -> u8 {
        self.0
    }

    /// Decoded wall bits, see [decode]
    pub fn bits(self) -> [bool; 3] {
        decode(self.0)
    }

    /// Is `wall` present?
    ///
    /// The query reads the stored bit regardless of the cell's parity: asking
    /// for `Top` on a cell that owns a bottom edge answers for that edge.
    pub fn has(self, wall: Wall) -> bool {
        self.bits()[wall.bit()]
    }
}
