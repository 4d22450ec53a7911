//! Wall following through the maze
//!
//! The walker enters at a boundary cell, keeps one hand on the wall and
//! reports every cell it passes until it leaves the grid. Both the choice of
//! the entrance and every step are driven by small lookup tables; the left
//! hand tables of the step rule are derived by mirroring the right hand ones.

use std::fmt;

use tracing::{debug, trace, warn};

use crate::cell::{Boundary, Wall};
use crate::maze::{Maze, Point};

/// Which hand stays on the wall
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hand {
    Right,
    Left,
}

/// Heading of the walker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    East,
    North,
    West,
    South,
}

/// Position and heading during a walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct State {
    pub point: Point,
    pub facing: Direction,
}

/// The requested cell is not an entrance for the requested hand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntranceError {
    pub point: Point,
    pub hand: Hand,
}

impl fmt::Display for EntranceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid Entrance")
    }
}

impl std::error::Error for EntranceError {}

/// How a walk ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    /// Walker stepped out of the grid
    Exited,
    /// Walker visited more states than the grid has, so it can never leave
    Looped,
}

/// Complete walk through the maze
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// Visited cells, including the entrance and the last cell before exit
    pub cells: Vec<Point>,
    pub ending: Ending,
}

impl Direction {
    /// Row and column offset of one step
    fn offset(self) -> (isize, isize) {
        match self {
            Direction::East => (0, 1),
            Direction::North => (-1, 0),
            Direction::West => (0, -1),
            Direction::South => (1, 0),
        }
    }

    fn mirror(self) -> Self {
        match self {
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            other => other,
        }
    }
}

fn mirror_wall(wall: Wall) -> Wall {
    match wall {
        Wall::Left => Wall::Right,
        Wall::Right => Wall::Left,
        other => other,
    }
}

/// Step rule for one heading and cell orientation.
///
/// The walls in `tries` are checked in order and the walker turns towards
/// the first open one. If both are closed it turns to `fallback` without
/// looking at that wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Turn {
    tries: [(Wall, Direction); 2],
    fallback: Direction,
}

impl Turn {
    const fn new(first: (Wall, Direction), second: (Wall, Direction), fallback: Direction) -> Self {
        Turn {
            tries: [first, second],
            fallback,
        }
    }

    fn mirror(self) -> Self {
        let [(w1, d1), (w2, d2)] = self.tries;
        Turn::new(
            (mirror_wall(w1), d1.mirror()),
            (mirror_wall(w2), d2.mirror()),
            self.fallback.mirror(),
        )
    }
}

/// Step rules with the right hand on the wall
fn right_hand_turn(facing: Direction, boundary: Boundary) -> Turn {
    use Direction::*;

    match (facing, boundary) {
        (East, Boundary::Top) => Turn::new((Wall::Right, East), (Wall::Top, North), West),
        (East, Boundary::Bottom) => Turn::new((Wall::Bottom, South), (Wall::Right, East), West),
        (North, Boundary::Top) => Turn::new((Wall::Right, East), (Wall::Top, North), West),
        (North, Boundary::Bottom) => Turn::new((Wall::Right, East), (Wall::Left, West), South),
        (South, Boundary::Top) => Turn::new((Wall::Left, West), (Wall::Right, East), North),
        (South, Boundary::Bottom) => Turn::new((Wall::Left, West), (Wall::Bottom, South), East),
        (West, Boundary::Top) => Turn::new((Wall::Top, North), (Wall::Left, West), East),
        (West, Boundary::Bottom) => Turn::new((Wall::Left, West), (Wall::Bottom, South), East),
    }
}

/// Position of a cell on the rim of the grid.
///
/// Classified in this order: first row, last row, first column, last
/// column. A single-column grid therefore has only left corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edge {
    TopLeft,
    TopRight,
    TopSide,
    BottomLeft,
    BottomRight,
    BottomSide,
    LeftSide,
    RightSide,
}

impl Edge {
    fn of(maze: &Maze, point: Point) -> Option<Self> {
        let last_row = maze.rows() - 1;
        let last_col = maze.cols() - 1;
        let edge = match (point.row, point.col) {
            (0, 0) => Edge::TopLeft,
            (0, c) if c == last_col => Edge::TopRight,
            (0, _) => Edge::TopSide,
            (r, 0) if r == last_row => Edge::BottomLeft,
            (r, c) if r == last_row && c == last_col => Edge::BottomRight,
            (r, _) if r == last_row => Edge::BottomSide,
            (_, 0) => Edge::LeftSide,
            (_, c) if c == last_col => Edge::RightSide,
            _ => return None,
        };
        Some(edge)
    }
}

/// One way of recognising the entrance wall of a rim cell
struct Opening {
    edge: Edge,
    /// Orientation the cell must have; `None` matches both
    boundary: Option<Boundary>,
    closed: &'static [Wall],
    open: &'static [Wall],
    entrance: Wall,
}

const fn opening(
    edge: Edge,
    boundary: Option<Boundary>,
    closed: &'static [Wall],
    open: &'static [Wall],
    entrance: Wall,
) -> Opening {
    Opening {
        edge,
        boundary,
        closed,
        open,
        entrance,
    }
}

const TOP: Option<Boundary> = Some(Boundary::Top);
const BOTTOM: Option<Boundary> = Some(Boundary::Bottom);

use Wall::{Bottom as B, Left as L, Right as R, Top as T};

/// Entrances for the right hand rule, first match wins.
///
/// Rim cells that match no row are not entrances, even if some wall is open.
const RIGHT_HAND_OPENINGS: [Opening; 22] = [
    opening(Edge::TopLeft, None, &[L], &[T], L),
    opening(Edge::TopLeft, None, &[], &[L], B),
    opening(Edge::TopRight, TOP, &[T], &[R], T),
    opening(Edge::TopRight, TOP, &[L], &[T], L),
    opening(Edge::TopRight, BOTTOM, &[L], &[R], R),
    opening(Edge::TopRight, BOTTOM, &[], &[L, R], T),
    opening(Edge::TopSide, TOP, &[], &[T], L),
    opening(Edge::BottomLeft, BOTTOM, &[R], &[B], R),
    opening(Edge::BottomLeft, BOTTOM, &[B], &[L], B),
    opening(Edge::BottomLeft, TOP, &[R], &[L], R),
    opening(Edge::BottomLeft, TOP, &[], &[R, L], B),
    opening(Edge::BottomRight, BOTTOM, &[R], &[B], R),
    opening(Edge::BottomRight, BOTTOM, &[L], &[R], L),
    opening(Edge::BottomRight, BOTTOM, &[], &[L, R], T),
    opening(Edge::BottomRight, TOP, &[], &[R], T),
    opening(Edge::BottomSide, BOTTOM, &[], &[B], R),
    opening(Edge::LeftSide, BOTTOM, &[], &[L], B),
    opening(Edge::LeftSide, TOP, &[R], &[L], R),
    opening(Edge::LeftSide, TOP, &[], &[R, L], B),
    opening(Edge::RightSide, TOP, &[], &[R], T),
    opening(Edge::RightSide, BOTTOM, &[L], &[R], L),
    opening(Edge::RightSide, BOTTOM, &[], &[L, R], T),
];

/// Entrances for the left hand rule, first match wins
const LEFT_HAND_OPENINGS: [Opening; 21] = [
    opening(Edge::TopLeft, None, &[T], &[L], T),
    opening(Edge::TopLeft, None, &[R], &[T], R),
    opening(Edge::TopRight, TOP, &[R], &[T], R),
    opening(Edge::TopRight, TOP, &[], &[L, R], B),
    opening(Edge::TopRight, BOTTOM, &[], &[R], B),
    opening(Edge::TopSide, TOP, &[], &[T], R),
    opening(Edge::BottomLeft, BOTTOM, &[L], &[B], L),
    opening(Edge::BottomLeft, BOTTOM, &[R], &[L], R),
    opening(Edge::BottomLeft, BOTTOM, &[], &[R, L], T),
    opening(Edge::BottomLeft, TOP, &[], &[L], T),
    opening(Edge::BottomRight, BOTTOM, &[], &[B], L),
    opening(Edge::BottomRight, BOTTOM, &[B], &[R], B),
    opening(Edge::BottomRight, TOP, &[L], &[R], L),
    opening(Edge::BottomRight, TOP, &[], &[L, R], B),
    opening(Edge::BottomSide, BOTTOM, &[], &[B], L),
    opening(Edge::LeftSide, TOP, &[], &[L], T),
    opening(Edge::LeftSide, BOTTOM, &[R], &[L], R),
    opening(Edge::LeftSide, BOTTOM, &[], &[R, L], T),
    opening(Edge::RightSide, BOTTOM, &[], &[R], B),
    opening(Edge::RightSide, TOP, &[L], &[R], L),
    opening(Edge::RightSide, TOP, &[], &[L, R], B),
];

impl Hand {
    fn openings(self) -> &'static [Opening] {
        match self {
            Hand::Right => &RIGHT_HAND_OPENINGS,
            Hand::Left => &LEFT_HAND_OPENINGS,
        }
    }

    /// Heading after entering through `entrance`
    fn initial_facing(self, entrance: Wall) -> Direction {
        match (self, entrance) {
            (Hand::Right, Wall::Bottom) => Direction::East,
            (Hand::Right, Wall::Top) => Direction::West,
            (Hand::Right, Wall::Right) => Direction::North,
            (Hand::Right, Wall::Left) => Direction::South,
            (Hand::Left, Wall::Top) => Direction::East,
            (Hand::Left, Wall::Bottom) => Direction::West,
            (Hand::Left, Wall::Left) => Direction::North,
            (Hand::Left, Wall::Right) => Direction::South,
        }
    }

    fn turn(self, facing: Direction, boundary: Boundary) -> Turn {
        match self {
            Hand::Right => right_hand_turn(facing, boundary),
            Hand::Left => right_hand_turn(facing.mirror(), boundary).mirror(),
        }
    }
}

/// Find the initial heading for a walk that starts at `point`.
///
/// Only rim cells can be entrances, and which of their walls counts as the
/// way in depends on the hand rule.
pub fn infer_entry(maze: &Maze, point: Point, hand: Hand) -> Result<State, EntranceError> {
    let error = EntranceError { point, hand };
    if maze.cell(point).is_none() {
        return Err(error);
    }
    let edge = Edge::of(maze, point).ok_or(error)?;
    let boundary = maze.boundary(point);

    let entrance = hand
        .openings()
        .iter()
        .filter(|o| o.edge == edge && o.boundary.map_or(true, |b| b == boundary))
        .find(|o| {
            o.closed.iter().all(|&w| maze.has_wall(point, w))
                && o.open.iter().all(|&w| !maze.has_wall(point, w))
        })
        .map(|o| o.entrance)
        .ok_or(error)?;

    let facing = hand.initial_facing(entrance);
    debug!(%point, ?hand, ?entrance, ?facing, "entered maze");
    Ok(State { point, facing })
}

/// Move one cell according to the hand rule.
///
/// Returns `None` when the move leaves the grid.
pub fn step(maze: &Maze, state: State, hand: Hand) -> Option<State> {
    let State { point, facing } = state;
    let turn = hand.turn(facing, maze.boundary(point));
    let facing = turn
        .tries
        .iter()
        .find(|(wall, _)| !maze.has_wall(point, *wall))
        .map_or(turn.fallback, |&(_, dir)| dir);

    let (dr, dc) = facing.offset();
    let row = point.row.checked_add_signed(dr)?;
    let col = point.col.checked_add_signed(dc)?;
    let next = Point::new(row, col);
    maze.cell(next)?;
    Some(State {
        point: next,
        facing,
    })
}

/// Walk through the maze from `entry`, see [Walk]
pub fn solve(maze: &Maze, entry: Point, hand: Hand) -> Result<Walk<'_>, EntranceError> {
    let start = infer_entry(maze, entry, hand)?;
    Ok(Walk {
        maze,
        hand,
        next: Some(start),
        visited: 0,
        ending: None,
    })
}

/// Iterator over the cells of a walk, in visiting order
///
/// Every state of the walk fully determines the next one, so a walk that
/// has passed through more states than the grid has will never leave it.
/// Such a walk stops early with [Ending::Looped].
pub struct Walk<'a> {
    maze: &'a Maze,
    hand: Hand,
    next: Option<State>,
    visited: usize,
    ending: Option<Ending>,
}

impl Walk<'_> {
    /// How the walk ended, or `None` while it is still running
    pub fn ending(&self) -> Option<Ending> {
        self.ending
    }

    /// Number of distinct `(cell, heading)` states in the grid
    fn state_count(&self) -> usize {
        4 * self.maze.rows() * self.maze.cols()
    }
}

impl Iterator for Walk<'_> {
    type Item = Point;

    fn next(&mut self) -> Option<Self::Item> {
        let state = self.next?;
        if self.visited == self.state_count() {
            warn!(visited = self.visited, "walk is going in circles");
            self.next = None;
            self.ending = Some(Ending::Looped);
            return None;
        }

        trace!(point = %state.point, facing = ?state.facing, "visit");
        self.visited += 1;
        self.next = step(self.maze, state, self.hand);
        if self.next.is_none() {
            self.ending = Some(Ending::Exited);
        }
        Some(state.point)
    }
}

impl Maze {
    /// Follow the walls from `entry` until leaving the maze
    ///
    /// # Examples
    /// ```
    /// use tri_maze::{Ending, Hand, Maze, Point};
    ///
    /// let maze = Maze::parse("1 2\n0 0").unwrap();
    /// let path = maze.follow_walls(Point::new(0, 0), Hand::Right).unwrap();
    /// assert_eq!(path.cells, vec![Point::new(0, 0), Point::new(0, 1)]);
    /// assert_eq!(path.ending, Ending::Exited);
    /// ```
    pub fn follow_walls(&self, entry: Point, hand: Hand) -> Result<Solution, EntranceError> {
        let mut walk = solve(self, entry, hand)?;
        let cells: Vec<Point> = walk.by_ref().collect();
        let ending = walk.ending().unwrap_or(Ending::Exited);
        Ok(Solution { cells, ending })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::tests::{unchecked, SAMPLE};

    fn points(cells: &[(usize, usize)]) -> Vec<Point> {
        cells
            .iter()
            .map(|&(r, c)| Point::from_one_based(r, c).unwrap())
            .collect()
    }

    fn walk(maze: &Maze, entry: (usize, usize), hand: Hand) -> Vec<Point> {
        let entry = Point::from_one_based(entry.0, entry.1).unwrap();
        maze.follow_walls(entry, hand).unwrap().cells
    }

    #[test]
    fn single_open_cell_exits_immediately() {
        let maze = Maze::parse("1 1\n0").unwrap();
        let path = maze.follow_walls(Point::new(0, 0), Hand::Right).unwrap();
        assert_eq!(path.cells, points(&[(1, 1)]));
        assert_eq!(path.ending, Ending::Exited);
    }

    #[test]
    fn two_open_cells_walk_east() {
        let maze = Maze::parse("1 2\n0 0").unwrap();
        assert_eq!(walk(&maze, (1, 1), Hand::Right), points(&[(1, 1), (1, 2)]));
        assert_eq!(walk(&maze, (1, 2), Hand::Right), points(&[(1, 2), (1, 1)]));
        assert_eq!(walk(&maze, (1, 2), Hand::Left), points(&[(1, 2)]));
    }

    #[test]
    fn right_hand_through_sample() {
        let maze = Maze::parse(SAMPLE).unwrap();
        let expected = points(&[
            (6, 1), (6, 2), (5, 2), (5, 3), (5, 4), (6, 4), (6, 3), (6, 4),
            (6, 5), (6, 6), (5, 6), (5, 7), (4, 7), (4, 6), (4, 5), (4, 4),
            (3, 4), (3, 5), (3, 6), (3, 5), (3, 4), (3, 3), (3, 2), (3, 1),
            (2, 1), (2, 2), (2, 3), (2, 4), (2, 5), (2, 6), (2, 7), (3, 7),
        ]);
        assert_eq!(walk(&maze, (6, 1), Hand::Right), expected);
    }

    #[test]
    fn left_hand_through_sample() {
        let maze = Maze::parse(SAMPLE).unwrap();
        let expected = points(&[
            (6, 1), (6, 2), (5, 2), (5, 3), (5, 4), (6, 4), (6, 5), (6, 6),
            (5, 6), (5, 7), (4, 7), (4, 6), (4, 5), (5, 5), (4, 5), (4, 4),
            (3, 4), (3, 3), (3, 2), (4, 2), (4, 1), (5, 1), (4, 1), (4, 2),
            (3, 2), (3, 1), (2, 1), (2, 2), (2, 3), (2, 4), (1, 4), (1, 3),
            (1, 2), (1, 1),
        ]);
        assert_eq!(walk(&maze, (6, 1), Hand::Left), expected);
    }

    #[test]
    fn entering_from_the_right_side() {
        let maze = Maze::parse(SAMPLE).unwrap();
        assert_eq!(
            walk(&maze, (3, 7), Hand::Right),
            points(&[
                (3, 7), (2, 7), (2, 6), (1, 6), (1, 7), (1, 6), (1, 5), (1, 6),
                (2, 6), (2, 5), (2, 4), (1, 4), (1, 3), (1, 2), (1, 1),
            ])
        );
        assert_eq!(walk(&maze, (6, 7), Hand::Left), points(&[(6, 7)]));
    }

    #[test]
    fn hands_diverge_when_there_is_a_choice() {
        let maze = Maze::parse(SAMPLE).unwrap();
        let right = walk(&maze, (6, 1), Hand::Right);
        let left = walk(&maze, (6, 1), Hand::Left);
        assert_eq!(right[..6], left[..6]);
        assert_ne!(right[6], left[6]);
    }

    #[test]
    fn interior_cells_are_never_entrances() {
        let maze = Maze::parse(SAMPLE).unwrap();
        for row in 1..maze.rows() - 1 {
            for col in 1..maze.cols() - 1 {
                for hand in [Hand::Right, Hand::Left] {
                    let point = Point::new(row, col);
                    assert_eq!(
                        solve(&maze, point, hand).err(),
                        Some(EntranceError { point, hand })
                    );
                }
            }
        }
    }

    #[test]
    fn closed_rim_cells_are_not_entrances() {
        let maze = Maze::parse(SAMPLE).unwrap();
        assert!(infer_entry(&maze, Point::new(0, 0), Hand::Left).is_err());
        assert!(infer_entry(&maze, Point::new(0, 3), Hand::Right).is_err());
        assert!(infer_entry(&maze, Point::new(0, 3), Hand::Left).is_err());

        let single = Maze::parse("1 1\n0").unwrap();
        assert!(infer_entry(&single, Point::new(0, 0), Hand::Left).is_err());
    }

    #[test]
    fn points_outside_the_grid_are_rejected() {
        let maze = Maze::parse("1 2\n0 0").unwrap();
        assert!(infer_entry(&maze, Point::new(0, 2), Hand::Right).is_err());
        assert!(infer_entry(&maze, Point::new(1, 0), Hand::Left).is_err());
    }

    #[test]
    fn rim_cells_are_classified_first_row_first() {
        let single = Maze::parse("1 1\n0").unwrap();
        assert_eq!(Edge::of(&single, Point::new(0, 0)), Some(Edge::TopLeft));

        let row = Maze::parse("1 3\n0 0 0").unwrap();
        assert_eq!(Edge::of(&row, Point::new(0, 1)), Some(Edge::TopSide));
        assert_eq!(Edge::of(&row, Point::new(0, 2)), Some(Edge::TopRight));

        let column = Maze::parse("3 1\n0 0 0").unwrap();
        assert_eq!(Edge::of(&column, Point::new(0, 0)), Some(Edge::TopLeft));
        assert_eq!(Edge::of(&column, Point::new(1, 0)), Some(Edge::LeftSide));
        assert_eq!(Edge::of(&column, Point::new(2, 0)), Some(Edge::BottomLeft));

        let square = Maze::parse("3 3\n2 3 1 4 2 1 4 2 1").unwrap();
        assert_eq!(Edge::of(&square, Point::new(1, 1)), None);
        assert_eq!(Edge::of(&square, Point::new(1, 2)), Some(Edge::RightSide));
        assert_eq!(Edge::of(&square, Point::new(2, 1)), Some(Edge::BottomSide));
        assert_eq!(Edge::of(&square, Point::new(2, 2)), Some(Edge::BottomRight));
    }

    /// One case per row of the opening tables, in table order
    #[test]
    fn every_opening_is_recognised() {
        use Direction::*;
        use Hand::{Left, Right};

        let cases: &[(&str, (usize, usize), Hand, Direction)] = &[
            ("1 1\n1", (1, 1), Right, South),
            ("1 1\n0", (1, 1), Right, East),
            ("1 3\n0 6 5", (1, 3), Right, West),
            ("1 3\n5 6 3", (1, 3), Right, South),
            ("1 2\n2 1", (1, 2), Right, North),
            ("1 2\n0 4", (1, 2), Right, West),
            ("1 5\n1 6 3 7 3", (1, 3), Right, South),
            ("2 1\n0 2", (2, 1), Right, North),
            ("2 1\n2 6", (2, 1), Right, East),
            ("3 1\n2 5 6", (3, 1), Right, North),
            ("3 1\n7 0 0", (3, 1), Right, East),
            ("2 3\n0 2 1 4 0 2", (2, 3), Right, North),
            ("2 3\n3 7 5 6 7 5", (2, 3), Right, South),
            ("2 3\n6 7 5 6 5 4", (2, 3), Right, West),
            ("2 2\n5 6 6 5", (2, 2), Right, West),
            ("3 3\n2 3 1 4 2 1 4 2 1", (3, 2), Right, North),
            ("3 1\n7 0 0", (2, 1), Right, East),
            ("5 1\n6 6 6 1 0", (3, 1), Right, North),
            ("5 1\n5 7 4 4 6", (3, 1), Right, East),
            ("3 2\n2 3 4 0 7 7", (2, 2), Right, West),
            ("3 3\n2 3 1 4 2 1 4 2 1", (2, 3), Right, South),
            ("3 3\n7 3 5 1 0 0 0 6 1", (2, 3), Right, West),
            ("1 1\n4", (1, 1), Left, East),
            ("1 1\n2", (1, 1), Left, South),
            ("1 3\n0 0 2", (1, 3), Left, South),
            ("1 3\n6 5 4", (1, 3), Left, West),
            ("1 2\n0 4", (1, 2), Left, West),
            ("1 5\n1 6 3 7 3", (1, 3), Left, South),
            ("2 1\n7 1", (2, 1), Left, North),
            ("2 1\n0 2", (2, 1), Left, South),
            ("2 1\n0 0", (2, 1), Left, East),
            ("3 1\n7 0 0", (3, 1), Left, East),
            ("2 3\n0 2 1 4 0 2", (2, 3), Left, North),
            ("2 3\n6 7 5 6 5 4", (2, 3), Left, West),
            ("2 2\n5 6 6 5", (2, 2), Left, North),
            ("2 2\n4 2 0 0", (2, 2), Left, West),
            ("3 3\n2 3 1 4 2 1 4 2 1", (3, 2), Left, North),
            ("5 1\n6 6 6 1 0", (3, 1), Left, East),
            ("3 1\n3 2 0", (2, 1), Left, South),
            ("3 1\n7 0 0", (2, 1), Left, East),
            ("3 3\n7 3 5 1 0 0 0 6 1", (2, 3), Left, West),
            ("3 2\n0 6 7 5 5 2", (2, 2), Left, North),
            ("3 2\n2 3 4 0 7 7", (2, 2), Left, West),
        ];
        assert_eq!(
            cases.len(),
            RIGHT_HAND_OPENINGS.len() + LEFT_HAND_OPENINGS.len()
        );

        for &(text, (row, col), hand, facing) in cases {
            let maze = Maze::parse(text).unwrap();
            let point = Point::from_one_based(row, col).unwrap();
            let state = infer_entry(&maze, point, hand)
                .unwrap_or_else(|e| panic!("{:?} at {} in {:?}: {}", hand, point, text, e));
            assert_eq!(state, State { point, facing }, "{:?} at {} in {:?}", hand, point, text);
        }
    }

    #[test]
    fn unlisted_rim_combinations_are_not_entrances() {
        let cases: &[(&str, (usize, usize))] = &[
            ("1 1\n5", (1, 1)),
            ("1 2\n6 7", (1, 2)),
            ("1 3\n0 0 2", (1, 2)),
            ("2 1\n3 7", (2, 1)),
            ("2 2\n1 2 1 2", (2, 2)),
            ("2 3\n0 2 1 4 0 2", (2, 2)),
            ("3 1\n4 7 5", (2, 1)),
            ("3 2\n1 2 5 2 6 7", (2, 2)),
        ];
        for &(text, (row, col)) in cases {
            let maze = Maze::parse(text).unwrap();
            let point = Point::from_one_based(row, col).unwrap();
            assert!(Edge::of(&maze, point).is_some());
            for hand in [Hand::Right, Hand::Left] {
                assert_eq!(
                    infer_entry(&maze, point, hand),
                    Err(EntranceError { point, hand }),
                    "{:?} at {} in {:?}",
                    hand,
                    point,
                    text
                );
            }
        }
    }

    #[test]
    fn entrance_decides_initial_heading() {
        // Left wall only: the right hand enters through the left side
        let maze = Maze::parse("1 1\n1").unwrap();
        let state = infer_entry(&maze, Point::new(0, 0), Hand::Right).unwrap();
        assert_eq!(state.facing, Direction::South);

        let maze = Maze::parse("1 1\n0").unwrap();
        let state = infer_entry(&maze, Point::new(0, 0), Hand::Right).unwrap();
        assert_eq!(state.facing, Direction::East);

        // Right wall only: the left hand enters through the top
        let maze = Maze::parse("1 1\n2").unwrap();
        let state = infer_entry(&maze, Point::new(0, 0), Hand::Left).unwrap();
        assert_eq!(state.facing, Direction::South);
    }

    #[test]
    fn left_hand_table_mirrors_right_hand_table() {
        assert_eq!(
            Hand::Left.turn(Direction::East, Boundary::Top),
            Turn::new(
                (Wall::Top, Direction::North),
                (Wall::Right, Direction::East),
                Direction::West
            )
        );
        assert_eq!(
            Hand::Left.turn(Direction::South, Boundary::Bottom),
            Turn::new(
                (Wall::Right, Direction::East),
                (Wall::Bottom, Direction::South),
                Direction::West
            )
        );
        assert_eq!(
            Hand::Left.turn(Direction::North, Boundary::Bottom),
            Turn::new(
                (Wall::Left, Direction::West),
                (Wall::Right, Direction::East),
                Direction::South
            )
        );
    }

    #[test]
    fn step_moves_one_cell() {
        let maze = Maze::parse(SAMPLE).unwrap();
        let start = infer_entry(&maze, Point::new(5, 0), Hand::Right).unwrap();
        let next = step(&maze, start, Hand::Right).unwrap();
        assert_eq!(next.point, Point::new(5, 1));
        assert_eq!(next.facing, Direction::East);
    }

    #[test]
    fn walk_through_broken_walls_is_cut_short() {
        // The middle cell disagrees with its left neighbour, which a loaded
        // maze would never allow; the walker bounces between two cells.
        let maze = unchecked(1, 3, &[0, 5, 6]);
        let path = maze.follow_walls(Point::new(0, 0), Hand::Right).unwrap();
        assert_eq!(path.ending, Ending::Looped);
        assert_eq!(path.cells.len(), 12);
        assert_eq!(path.cells[..4], points(&[(1, 1), (1, 2), (1, 3), (1, 2)]));
    }

    #[test]
    fn walk_reports_ending_only_when_done() {
        let maze = Maze::parse("1 2\n0 0").unwrap();
        let mut walk = solve(&maze, Point::new(0, 0), Hand::Right).unwrap();
        assert_eq!(walk.next(), Some(Point::new(0, 0)));
        assert_eq!(walk.ending(), None);
        assert_eq!(walk.next(), Some(Point::new(0, 1)));
        assert_eq!(walk.ending(), Some(Ending::Exited));
        assert_eq!(walk.next(), None);
    }
}
