//! `SlidingTile`: the n×n sliding-tile puzzle (8-puzzle for n = 3).
//!
//! Tiles are numbered `1..n²` with `0` as the blank. The goal places every
//! tile at its own index in row-major order, so the blank ends in the top-left
//! corner:
//!
//! ```text
//! 0 1 2
//! 3 4 5
//! 6 7 8
//! ```
//!
//! Each move slides one orthogonal neighbour into the blank at cost 1. The
//! heuristic is the summed Manhattan distance of the numbered tiles; the blank
//! is excluded so the estimate never exceeds the true number of moves.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use sextant_kernel::carrier::cost::Cost;
use sextant_kernel::operators::action::Action;
use sextant_kernel::problem::Problem;

/// The blank cell's tile value.
pub const BLANK: u8 = 0;

/// Largest supported side length (`n²` tiles must fit in a `u8`).
pub const MAX_DIM: usize = 15;

/// Malformed board layout, detected before any search begins.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Fewer than two rows.
    #[error("board must be at least 2x2, got {rows} row(s)")]
    TooSmall { rows: usize },
    /// More than [`MAX_DIM`] rows.
    #[error("board must be at most {MAX_DIM}x{MAX_DIM}, got {rows} rows")]
    TooLarge { rows: usize },
    /// A row whose length differs from the row count.
    #[error("board must be square: row {row} has {len} tile(s), expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },
    /// A flat tile list whose length is not a supported square.
    #[error("{len} tile(s) do not form a square board")]
    BadLength { len: usize },
    /// Tiles are not exactly `0..n²`, each once.
    #[error("tiles must be a permutation of 0..{cells}: {detail}")]
    NotAPermutation { cells: usize, detail: String },
    /// A token in a textual board is not a tile number.
    #[error("cannot parse tile `{token}`")]
    Parse { token: String },
}

/// A cell position: `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// An immutable board configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    dim: usize,
    tiles: Vec<u8>,
    blank: usize,
}

impl Board {
    /// Build a board from rows of tile numbers.
    ///
    /// # Errors
    ///
    /// Returns a [`BoardError`] if the layout is not an n×n permutation of
    /// `0..n²` with `2 <= n <= MAX_DIM`.
    pub fn new(rows: &[Vec<u8>]) -> Result<Self, BoardError> {
        let dim = rows.len();
        if dim < 2 {
            return Err(BoardError::TooSmall { rows: dim });
        }
        if dim > MAX_DIM {
            return Err(BoardError::TooLarge { rows: dim });
        }
        for (row, tiles) in rows.iter().enumerate() {
            if tiles.len() != dim {
                return Err(BoardError::NotSquare {
                    row,
                    len: tiles.len(),
                    expected: dim,
                });
            }
        }

        let tiles: Vec<u8> = rows.iter().flatten().copied().collect();
        let cells = dim * dim;
        let mut seen = vec![false; cells];
        for &tile in &tiles {
            let index = usize::from(tile);
            if index >= cells {
                return Err(BoardError::NotAPermutation {
                    cells,
                    detail: format!("tile {tile} is out of range"),
                });
            }
            if seen[index] {
                return Err(BoardError::NotAPermutation {
                    cells,
                    detail: format!("tile {tile} appears twice"),
                });
            }
            seen[index] = true;
        }

        let blank = tiles.iter().position(|&t| t == BLANK).unwrap_or_default();
        Ok(Self { dim, tiles, blank })
    }

    /// The solved board of side `dim`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::TooSmall`] or [`BoardError::TooLarge`] for an
    /// unsupported side length.
    pub fn goal(dim: usize) -> Result<Self, BoardError> {
        let rows: Vec<Vec<u8>> = (0..dim)
            .map(|y| {
                (0..dim)
                    .map(|x| u8::try_from(y * dim + x).unwrap_or(u8::MAX))
                    .collect()
            })
            .collect();
        Self::new(&rows)
    }

    /// Side length.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Tiles in row-major order.
    #[must_use]
    pub fn tiles(&self) -> &[u8] {
        &self.tiles
    }

    /// Tiles as rows.
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<u8>> {
        self.tiles.chunks(self.dim).map(<[u8]>::to_vec).collect()
    }

    /// Tile at `coord`.
    ///
    /// # Panics
    ///
    /// Panics if `coord` lies outside the board.
    #[must_use]
    pub fn tile_at(&self, coord: Coord) -> u8 {
        self.tiles[self.index_of(coord)]
    }

    /// Position of the blank.
    #[must_use]
    pub fn blank(&self) -> Coord {
        self.coord_of(self.blank)
    }

    /// Whether every tile is home.
    #[must_use]
    pub fn is_goal(&self) -> bool {
        self.tiles
            .iter()
            .enumerate()
            .all(|(index, &tile)| usize::from(tile) == index)
    }

    /// Sum over numbered tiles of the row and column distance to their home
    /// cell.
    #[must_use]
    pub fn manhattan_distance(&self) -> Cost {
        let total: usize = self
            .tiles
            .iter()
            .enumerate()
            .filter(|&(_, &tile)| tile != BLANK)
            .map(|(index, &tile)| {
                let here = self.coord_of(index);
                let home = self.coord_of(usize::from(tile));
                here.x.abs_diff(home.x) + here.y.abs_diff(home.y)
            })
            .sum();
        total as Cost
    }

    /// Whether the goal is reachable, by inversion parity.
    ///
    /// For odd sides the inversion count of the numbered tiles is invariant
    /// mod 2; for even sides the inversion count plus the blank's row is.
    /// The goal has zero inversions with the blank in row 0.
    #[must_use]
    pub fn is_solvable(&self) -> bool {
        let numbered: Vec<u8> = self.tiles.iter().copied().filter(|&t| t != BLANK).collect();
        let inversions: usize = numbered
            .iter()
            .enumerate()
            .map(|(i, &a)| numbered[i + 1..].iter().filter(|&&b| b < a).count())
            .sum();
        if self.dim % 2 == 1 {
            inversions % 2 == 0
        } else {
            (inversions + self.blank().y) % 2 == 0
        }
    }

    /// Neighbour cells of the blank, in the order left, right, up, down.
    #[must_use]
    pub fn blank_neighbours(&self) -> Vec<Coord> {
        let Coord { x, y } = self.blank();
        let mut out = Vec::with_capacity(4);
        if x > 0 {
            out.push(Coord { x: x - 1, y });
        }
        if x + 1 < self.dim {
            out.push(Coord { x: x + 1, y });
        }
        if y > 0 {
            out.push(Coord { x, y: y - 1 });
        }
        if y + 1 < self.dim {
            out.push(Coord { x, y: y + 1 });
        }
        out
    }

    /// A new board with the tiles at `a` and `b` exchanged.
    #[must_use]
    pub fn swapped(&self, a: Coord, b: Coord) -> Self {
        let mut tiles = self.tiles.clone();
        let (ia, ib) = (self.index_of(a), self.index_of(b));
        tiles.swap(ia, ib);
        let blank = if self.blank == ia {
            ib
        } else if self.blank == ib {
            ia
        } else {
            self.blank
        };
        Self {
            dim: self.dim,
            tiles,
            blank,
        }
    }

    fn index_of(&self, coord: Coord) -> usize {
        coord.y * self.dim + coord.x
    }

    fn coord_of(&self, index: usize) -> Coord {
        Coord {
            x: index % self.dim,
            y: index / self.dim,
        }
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parse a flat row-major tile list separated by commas and/or
    /// whitespace, e.g. `"1,4,8,6,3,0,5,2,7"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tiles = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(|token| {
                token.parse::<u8>().map_err(|_| BoardError::Parse {
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<u8>, _>>()?;
        let dim = (2..=MAX_DIM)
            .find(|d| d * d == tiles.len())
            .ok_or(BoardError::BadLength { len: tiles.len() })?;
        let rows: Vec<Vec<u8>> = tiles.chunks(dim).map(<[u8]>::to_vec).collect();
        Self::new(&rows)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.tiles.chunks(self.dim).enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for (x, tile) in row.iter().enumerate() {
                if x > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{tile}")?;
            }
        }
        Ok(())
    }
}

/// Slide the tile at `to` into the blank at `from`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    pub from: Coord,
    pub to: Coord,
}

impl Action for Slide {
    type State = Board;

    fn cost(&self) -> Cost {
        1
    }

    fn enact(&self, state: &Board) -> Board {
        state.swapped(self.from, self.to)
    }
}

impl fmt::Display for Slide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "move to {}", self.to)
    }
}

/// A sliding-tile instance: a start board solved toward [`Board::goal`].
#[derive(Debug, Clone)]
pub struct SlidingTileProblem {
    initial: Board,
}

impl SlidingTileProblem {
    /// Wrap a validated start board.
    #[must_use]
    pub fn new(initial: Board) -> Self {
        Self { initial }
    }

    /// Build the problem straight from rows.
    ///
    /// # Errors
    ///
    /// Returns a [`BoardError`] for a malformed layout.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self, BoardError> {
        Board::new(rows).map(Self::new)
    }
}

impl Problem for SlidingTileProblem {
    type State = Board;
    type Action = Slide;

    fn initial_state(&self) -> &Board {
        &self.initial
    }

    fn actions(&self, state: &Board) -> Vec<Slide> {
        let from = state.blank();
        state
            .blank_neighbours()
            .into_iter()
            .map(|to| Slide { from, to })
            .collect()
    }

    fn is_terminal(&self, state: &Board) -> bool {
        state.is_goal()
    }

    fn heuristic(&self, state: &Board) -> Cost {
        state.manhattan_distance()
    }
}

impl fmt::Display for SlidingTileProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.initial)
    }
}
