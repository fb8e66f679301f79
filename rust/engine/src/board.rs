use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::GameError;
use crate::player::Color;

/// Number of rows and columns on the board
pub const BOARD_SIZE: usize = 6;

/// A board location, 0-indexed from the top-left corner.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn is_on_board(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Returns the coordinate back when it lies on the board.
    pub fn checked(self) -> Result<Coord, GameError> {
        if self.is_on_board() {
            Ok(self)
        } else {
            Err(GameError::OutOfBounds {
                row: self.row,
                col: self.col,
            })
        }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Coord::new(row, col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Pieces on one cell, bottom first. The last element is the top piece.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Stack(Vec<Color>);

impl Stack {
    pub fn pieces(&self) -> &[Color] {
        &self.0
    }
    pub fn height(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// The piece that decides who controls this stack.
    pub fn top(&self) -> Option<Color> {
        self.0.last().copied()
    }
}

/// The 6x6 grid of stacks.
///
/// Mutating helpers are crate-private: only the engine moves pieces, and it
/// validates every coordinate before it touches the board.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Board {
    cells: [[Stack; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Seeds the opening position: colors alternate every two cells and each
    /// row starts where the previous one left off, so row 0 reads
    /// `first first second second first first` and row 1 is its mirror.
    ///
    /// # Examples
    ///
    /// ```
    /// use focus_engine::board::{Board, Coord};
    /// use focus_engine::player::Color;
    ///
    /// let board = Board::new(Color('R'), Color('G'));
    /// assert_eq!(board.stack(Coord::new(0, 2)).unwrap().pieces(), &[Color('G')]);
    /// assert_eq!(board.stack(Coord::new(1, 0)).unwrap().pieces(), &[Color('G')]);
    /// assert_eq!(board.count_color(Color('R')), 18);
    /// ```
    pub fn new(first: Color, second: Color) -> Self {
        let colors = [first, second];
        let mut next = 0;
        let cells = std::array::from_fn(|_| {
            std::array::from_fn(|col| {
                let stack = Stack(vec![colors[next]]);
                if col % 2 == 1 {
                    next = 1 - next;
                }
                stack
            })
        });
        Self { cells }
    }

    pub fn stack(&self, at: Coord) -> Option<&Stack> {
        self.cells.get(at.row).and_then(|row| row.get(at.col))
    }

    fn stack_mut(&mut self, at: Coord) -> Result<&mut Stack, GameError> {
        self.cells
            .get_mut(at.row)
            .and_then(|row| row.get_mut(at.col))
            .ok_or(GameError::OutOfBounds {
                row: at.row,
                col: at.col,
            })
    }

    /// Iterates every cell in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &Stack)> {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(move |(c, stack)| (Coord::new(r, c), stack))
        })
    }

    /// Total pieces on the board.
    pub fn piece_count(&self) -> usize {
        self.iter().map(|(_, s)| s.height()).sum()
    }

    /// Pieces of one color on the board, buried or not.
    pub fn count_color(&self, color: Color) -> usize {
        self.iter()
            .flat_map(|(_, s)| s.pieces().iter())
            .filter(|&&p| p == color)
            .count()
    }

    pub fn tallest(&self) -> usize {
        self.iter().map(|(_, s)| s.height()).max().unwrap_or(0)
    }

    /// Lifts the top `count` pieces off a stack, keeping their order.
    pub(crate) fn take_top(&mut self, at: Coord, count: usize) -> Result<Vec<Color>, GameError> {
        let stack = self.stack_mut(at)?;
        let height = stack.height();
        if count > height {
            return Err(GameError::InvalidPieceCount { count, height });
        }
        Ok(stack.0.split_off(height - count))
    }

    /// Drops pieces on top of a stack, first element lowest.
    pub(crate) fn place(&mut self, at: Coord, pieces: &[Color]) -> Result<(), GameError> {
        self.stack_mut(at)?.0.extend_from_slice(pieces);
        Ok(())
    }

    /// Removes pieces from the bottom until the stack is at most
    /// `max_height` tall. Removed pieces are returned bottom first.
    pub(crate) fn collapse(
        &mut self,
        at: Coord,
        max_height: usize,
    ) -> Result<Vec<Color>, GameError> {
        let stack = self.stack_mut(at)?;
        let excess = stack.height().saturating_sub(max_height);
        Ok(stack.0.drain(..excess).collect())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let cells: Vec<String> = row
                .iter()
                .map(|s| {
                    let pieces: String = s.pieces().iter().map(|c| c.as_char()).collect();
                    format!("[{:<5}]", pieces)
                })
                .collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const R: Color = Color('R');
    const G: Color = Color('G');

    #[test]
    fn opening_rows_alternate_in_pairs() {
        let board = Board::new(R, G);
        let row = |r: usize| -> Vec<Color> {
            (0..BOARD_SIZE)
                .map(|c| board.stack(Coord::new(r, c)).unwrap().pieces()[0])
                .collect()
        };
        assert_eq!(row(0), vec![R, R, G, G, R, R]);
        assert_eq!(row(1), vec![G, G, R, R, G, G]);
        assert_eq!(row(4), row(0));
        assert_eq!(row(5), row(1));
    }

    #[test]
    fn take_top_keeps_order_and_place_stacks_above() {
        let mut board = Board::new(R, G);
        let a = Coord::new(0, 0);
        let b = Coord::new(0, 2);
        board.place(a, &[G, R]).unwrap();
        let lifted = board.take_top(a, 2).unwrap();
        assert_eq!(lifted, vec![G, R]);
        board.place(b, &lifted).unwrap();
        assert_eq!(board.stack(b).unwrap().pieces(), &[G, G, R]);
        assert_eq!(board.stack(a).unwrap().pieces(), &[R]);
    }

    #[test]
    fn collapse_drains_from_the_bottom() {
        let mut board = Board::new(R, G);
        let at = Coord::new(2, 2);
        board.place(at, &[R, G, R, G, R]).unwrap();
        assert_eq!(board.stack(at).unwrap().height(), 6);
        let removed = board.collapse(at, 5).unwrap();
        assert_eq!(removed, vec![G]);
        assert_eq!(board.stack(at).unwrap().pieces(), &[R, G, R, G, R]);
        assert!(board.collapse(at, 5).unwrap().is_empty());
    }

    #[test]
    fn off_board_lookups_fail() {
        let mut board = Board::new(R, G);
        assert!(board.stack(Coord::new(6, 0)).is_none());
        assert_eq!(
            board.place(Coord::new(0, 9), &[R]),
            Err(GameError::OutOfBounds { row: 0, col: 9 })
        );
    }

    #[test]
    fn display_renders_one_line_per_row() {
        let board = Board::new(R, G);
        let text = board.to_string();
        assert_eq!(text.lines().count(), BOARD_SIZE);
        assert!(text.starts_with("[R    ] [R    ] [G    ]"));
    }
}
