use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::error::{GridError, MoveRejection, Result};
use crate::types::*;

/// N×N grid plus turn and outcome state.
///
/// `detect_outcome` is the only way `ended`/`winner` change, and once latched they
/// stay until `reset`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Mark>>,
    // Indices of every row, column and both main diagonals, built once per board.
    lines: Vec<Vec<usize>>,
    to_move: Mark,
    moves_made: usize,
    ended: bool,
    winner: Option<Mark>,
}

impl Default for Board {
    fn default() -> Self {
        Self::empty(DEFAULT_BOARD_SIZE)
    }
}

impl Board {
    pub fn new(size: usize) -> Result<Self> {
        if size < MIN_BOARD_SIZE {
            return Err(GridError::InvalidSize { size });
        }
        Ok(Self::empty(size))
    }

    fn empty(size: usize) -> Self {
        Board {
            size,
            cells: vec![None; size * size],
            lines: build_lines(size),
            to_move: HUMAN_MARK,
            moves_made: 0,
            ended: false,
            winner: None,
        }
    }

    /// Parses a text grid, one string per row. `X`/`O` are marks, `.`, `_` or a
    /// space is an empty cell. Used by tests and fixtures.
    pub fn from_rows(rows: &[&str]) -> Result<Self> {
        let mut board = Board::new(rows.len())?;
        let size = board.size;

        let (mut xs, mut os) = (0usize, 0usize);
        for (row, text) in rows.iter().enumerate() {
            let chars: Vec<char> = text.chars().collect();
            if chars.len() != size {
                return Err(GridError::DimensionMismatch {
                    row,
                    expected: size,
                    got: chars.len(),
                });
            }
            for (col, ch) in chars.into_iter().enumerate() {
                let cell = match ch {
                    '.' | '_' | ' ' => None,
                    other => match Mark::from_char(other) {
                        Some(mark) => Some(mark),
                        None => {
                            return Err(GridError::InvalidCell {
                                character: other,
                                row,
                                col,
                            });
                        }
                    },
                };
                match cell {
                    Some(Mark::X) => xs += 1,
                    Some(Mark::O) => os += 1,
                    None => {}
                }
                board.cells[row * size + col] = cell;
            }
        }

        board.moves_made = xs + os;
        board.to_move = if xs > os { Mark::O } else { Mark::X };
        Ok(board)
    }

    /// Reinitializes to an all-empty grid of `size`, clearing turn and outcome state.
    pub fn reset(&mut self, size: usize) -> Result<()> {
        *self = Board::new(size)?;
        Ok(())
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cells(&self) -> &[Option<Mark>] {
        &self.cells
    }

    pub fn lines(&self) -> &[Vec<usize>] {
        &self.lines
    }

    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    pub fn moves_made(&self) -> usize {
        self.moves_made
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }

    pub fn winner(&self) -> Option<Mark> {
        self.winner
    }

    pub fn outcome(&self) -> Outcome {
        match (self.ended, self.winner) {
            (false, _) => Outcome::InProgress,
            (true, Some(mark)) => Outcome::Won(mark),
            (true, None) => Outcome::Draw,
        }
    }

    #[inline]
    fn index_of(&self, mv: Move) -> Option<usize> {
        if mv.row < self.size && mv.col < self.size {
            Some(mv.row * self.size + mv.col)
        } else {
            None
        }
    }

    /// Mark at `mv`, `None` for an empty or out-of-bounds cell.
    pub fn cell(&self, mv: Move) -> Option<Mark> {
        self.index_of(mv).and_then(|i| self.cells[i])
    }

    #[inline]
    pub fn is_empty_at(&self, mv: Move) -> bool {
        matches!(self.index_of(mv), Some(i) if self.cells[i].is_none())
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Move> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_none())
            .map(move |(i, _)| Move::new(i / size, i % size))
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// True if every cell of some row, column or main diagonal holds `mark`.
    pub fn has_line(&self, mark: Mark) -> bool {
        self.lines
            .iter()
            .any(|line| line.iter().all(|&i| self.cells[i] == Some(mark)))
    }

    /// Writes `mark` at `mv` and hands the turn to the other mark.
    pub fn place(&mut self, mv: Move, mark: Mark) -> Result<()> {
        let reject = |reason| GridError::InvalidMove {
            row: mv.row,
            col: mv.col,
            reason,
        };

        let idx = self
            .index_of(mv)
            .ok_or_else(|| reject(MoveRejection::OutOfBounds))?;
        if self.ended {
            return Err(reject(MoveRejection::GameOver));
        }
        if self.cells[idx].is_some() {
            return Err(reject(MoveRejection::Occupied));
        }

        self.cells[idx] = Some(mark);
        self.moves_made += 1;
        self.to_move = mark.other();
        Ok(())
    }

    /// Checks whether `mark` has completed a line or the board is full, latching
    /// the terminal state if so. An already ended board reports its latched outcome.
    pub fn detect_outcome(&mut self, mark: Mark) -> Outcome {
        if self.ended {
            return self.outcome();
        }

        if self.has_line(mark) {
            self.ended = true;
            self.winner = Some(mark);
        } else if self.is_full() {
            self.ended = true;
        }
        self.outcome()
    }

    /// Temporarily occupies an empty cell for lookahead.
    ///
    /// The returned guard dereferences to the board and vacates the cell when
    /// dropped. Turn, move count and outcome state are left untouched.
    pub fn occupy(&mut self, mv: Move, mark: Mark) -> CellGuard<'_> {
        let index = mv.row * self.size + mv.col;
        debug_assert!(
            mv.row < self.size && mv.col < self.size,
            "occupy outside the board"
        );
        debug_assert!(self.cells[index].is_none(), "occupy on a taken cell");
        self.cells[index] = Some(mark);
        CellGuard { board: self, index }
    }
}

/// A cell held by [`Board::occupy`]; released on drop.
pub struct CellGuard<'a> {
    board: &'a mut Board,
    index: usize,
}

impl Deref for CellGuard<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for CellGuard<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for CellGuard<'_> {
    fn drop(&mut self) {
        self.board.cells[self.index] = None;
    }
}

fn build_lines(size: usize) -> Vec<Vec<usize>> {
    let mut lines = Vec::with_capacity(2 * size + 2);
    for r in 0..size {
        lines.push((0..size).map(|c| r * size + c).collect());
    }
    for c in 0..size {
        lines.push((0..size).map(|r| r * size + c).collect());
    }
    lines.push((0..size).map(|i| i * size + i).collect());
    lines.push((0..size).map(|i| i * size + (size - 1 - i)).collect());
    lines
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size) {
            let text: Vec<String> = row
                .iter()
                .map(|c| c.map_or('.', Mark::to_char).to_string())
                .collect();
            writeln!(f, "{}", text.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
