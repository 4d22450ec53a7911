//! Maze grid: loading, validation and wall queries

use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::str::FromStr;

use anyhow::Context;
use itertools::Itertools;
use tracing::debug;

use crate::cell::{logical_boundary, Boundary, Cell, Wall};

/// Location in the maze, zero-based
///
/// Displayed in the one-based `row,col` form used for printed paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

/// Validated grid of triangular cells
///
/// A `Maze` only exists if every cell value is in range and all neighbouring
/// cells agree on the walls they share. It is never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    rows: usize,
    cols: usize,
    /// Row-major cell values
    cells: Vec<Cell>,
}

/// Reason why a maze was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Missing, non-numeric or non-positive dimensions
    Header,
    /// A cell token that is not an integer
    Token { index: usize, token: String },
    /// Number of cell values differs from `rows * cols`
    CellCount { expected: usize, found: usize },
    /// Cell value outside `0..=7`
    OutOfRange { row: usize, col: usize, value: i64 },
    /// Left wall of a cell disagrees with the right wall of its left neighbour
    SideMismatch { row: usize, col: usize },
    /// Top edge of a cell disagrees with the bottom edge of the cell above
    BoundaryMismatch { row: usize, col: usize },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Header => write!(f, "invalid maze dimensions"),
            ValidationError::Token { index, token } => {
                write!(f, "cell #{} is not an integer: `{}`", index, token)
            }
            ValidationError::CellCount { expected, found } => {
                write!(f, "expected {} cell values, found {}", expected, found)
            }
            ValidationError::OutOfRange { row, col, value } => write!(
                f,
                "cell {},{} has value {} outside 0..=7",
                row + 1,
                col + 1,
                value
            ),
            ValidationError::SideMismatch { row, col } => write!(
                f,
                "left wall of cell {},{} does not match its left neighbour",
                row + 1,
                col + 1
            ),
            ValidationError::BoundaryMismatch { row, col } => write!(
                f,
                "top wall of cell {},{} does not match the cell above",
                row + 1,
                col + 1
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

impl Point {
    pub fn new(row: usize, col: usize) -> Self {
        Point { row, col }
    }

    /// Convert user-facing coordinates, which count from 1
    pub fn from_one_based(row: usize, col: usize) -> Option<Self> {
        Some(Point {
            row: row.checked_sub(1)?,
            col: col.checked_sub(1)?,
        })
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row + 1, self.col + 1)
    }
}

impl Maze {
    /// Build a maze from its dimensions and row-major cell values.
    ///
    /// Fails without producing a grid if the dimensions are zero, if the
    /// value count is wrong, if any value is outside `0..=7`, or if two
    /// neighbouring cells disagree on a shared wall.
    ///
    /// # Examples
    /// ```
    /// use tri_maze::{Maze, ValidationError};
    ///
    /// assert!(Maze::new(1, 2, &[2, 3]).is_ok());
    /// assert_eq!(
    ///     Maze::new(1, 2, &[0, 1]),
    ///     Err(ValidationError::SideMismatch { row: 0, col: 1 })
    /// );
    /// ```
    pub fn new(rows: usize, cols: usize, values: &[i64]) -> Result<Self, ValidationError> {
        if rows < 1 || cols < 1 {
            return Err(ValidationError::Header);
        }
        let expected = rows.checked_mul(cols).ok_or(ValidationError::Header)?;
        if values.len() != expected {
            return Err(ValidationError::CellCount {
                expected,
                found: values.len(),
            });
        }

        let mut cells: Vec<Cell> = Vec::with_capacity(expected);
        for (i, &value) in values.iter().enumerate() {
            let (row, col) = (i / cols, i % cols);
            let cell = u8::try_from(value)
                .ok()
                .and_then(Cell::new)
                .ok_or(ValidationError::OutOfRange { row, col, value })?;

            if col > 0 && cell.bits()[0] != cells[i - 1].bits()[1] {
                return Err(ValidationError::SideMismatch { row, col });
            }
            if row > 0 {
                let above = cells[i - cols];
                let paired = logical_boundary(row, col) == Boundary::Top
                    && logical_boundary(row - 1, col) == Boundary::Bottom;
                if paired && cell.bits()[2] != above.bits()[2] {
                    return Err(ValidationError::BoundaryMismatch { row, col });
                }
            }
            cells.push(cell);
        }

        Ok(Maze { rows, cols, cells })
    }

    /// Parse maze text: `rows cols` followed by `rows * cols` cell values,
    /// all separated by whitespace.
    ///
    /// # Examples
    /// ```
    /// use tri_maze::Maze;
    ///
    /// let maze = Maze::parse("2 2\n0 4\n4 4\n").unwrap();
    /// assert_eq!((maze.rows(), maze.cols()), (2, 2));
    /// assert!(Maze::parse("2 2\n0 4\n4").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        let mut tokens = text.split_whitespace();
        let (rows, cols) = tokens
            .next_tuple::<(&str, &str)>()
            .and_then(|(r, c)| Some((r.parse::<usize>().ok()?, c.parse::<usize>().ok()?)))
            .ok_or(ValidationError::Header)?;

        let values = tokens
            .enumerate()
            .map(|(index, token)| {
                token.parse::<i64>().map_err(|_| ValidationError::Token {
                    index,
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(rows, cols, &values)
    }

    /// Read and validate a maze file. Use `-` for stdin.
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = if path.to_str() == Some("-") {
            let mut buf = String::new();
            io::stdin()
                .lock()
                .read_to_string(&mut buf)
                .context("Could not read maze from stdin")?;
            buf
        } else {
            fs::read_to_string(path)
                .with_context(|| format!("Could not read maze file {}", path.display()))?
        };

        let maze = Self::parse(&text);
        match &maze {
            Ok(m) => debug!(rows = m.rows, cols = m.cols, "loaded maze"),
            Err(err) => debug!(%err, "maze rejected"),
        }
        maze.with_context(|| format!("Invalid maze in {}", path.display()))
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell at `point`, if it lies in the grid
    pub fn cell(&self, point: Point) -> Option<Cell> {
        (point.row < self.rows && point.col < self.cols)
            .then(|| self.cells[point.row * self.cols + point.col])
    }

    /// Horizontal edge owned by the cell at `point`
    pub fn boundary(&self, point: Point) -> Boundary {
        logical_boundary(point.row, point.col)
    }

    /// Is `wall` present on the cell at `point`?
    ///
    /// Points outside the grid have no walls.
    pub fn has_wall(&self, point: Point, wall: Wall) -> bool {
        self.cell(point).is_some_and(|cell| cell.has(wall))
    }
}

impl FromStr for Maze {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Renders the maze in the same text format that [Maze::parse] reads
impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.rows, self.cols)?;
        for row in self.cells.chunks(self.cols) {
            writeln!(f, "{}", row.iter().map(|c| c.value()).join(" "))?;
        }
        Ok(())
    }
}
