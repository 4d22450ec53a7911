//! Walk out of a maze of triangular cells by following its walls
//!
//! A maze is a grid of triangles. Each cell stores its walls in three bits
//! (see [cell]), and neighbouring cells must agree on the walls they share.
//! Starting from an entrance on the rim, the walker keeps either its right
//! or its left hand on the wall and lists the cells it passes through.
//!
//! # Examples
//! ## Validating a maze
//! ```
//! use tri_maze::Maze;
//!
//! assert!(Maze::parse("2 3\n1 4 6\n1 6 7").is_ok());
//! // Second cell has a left wall, but the first has no right wall
//! assert!(Maze::parse("1 2\n0 1").is_err());
//! ```
//!
//! ## Following the walls
//! ```
//! use tri_maze::{Hand, Maze, Point};
//!
//! let maze: Maze = "6 7
//! 1 4 4 2 5 0 6
//! 1 4 4 0 4 0 2
//! 1 0 4 0 4 6 1
//! 1 2 7 1 0 4 2
//! 3 1 4 2 3 1 2
//! 4 2 5 0 4 2 5"
//!     .parse()
//!     .unwrap();
//!
//! let entry = Point::from_one_based(6, 7).unwrap();
//! let path = maze.follow_walls(entry, Hand::Left).unwrap();
//! assert_eq!(path.cells, vec![entry]);
//!
//! // Cells in the middle of the maze are never entrances
//! assert!(maze.follow_walls(Point::new(2, 2), Hand::Right).is_err());
//! ```

pub mod cell;
pub mod maze;
pub mod walker;

pub use cell::{Boundary, Cell, Wall};
pub use maze::{Maze, Point, ValidationError};
pub use walker::{
    infer_entry, solve, step, Direction, Ending, EntranceError, Hand, Solution, State, Walk,
};
