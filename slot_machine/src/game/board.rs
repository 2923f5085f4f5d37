use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::{errors::BoardError, symbols::Symbol};

/// Row and column of a board cell.
pub type Cell = (usize, usize);

/// A square grid of symbols stored row-major.
///
/// `cells.len() == size * size` holds for every board, including one
/// deserialized from untrusted input.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(try_from = "BoardRepr")]
pub struct Board {
    size: usize,
    cells: Vec<Symbol>,
}

/// Wire form of a [`Board`], checked before it becomes one.
#[derive(Deserialize)]
struct BoardRepr {
    size: usize,
    cells: Vec<Symbol>,
}

impl TryFrom<BoardRepr> for Board {
    type Error = BoardError;

    fn try_from(repr: BoardRepr) -> Result<Self, Self::Error> {
        let expected = repr.size.checked_mul(repr.size);
        if expected != Some(repr.cells.len()) {
            return Err(BoardError::CellCount {
                size: repr.size,
                cells: repr.cells.len(),
            });
        }
        Ok(Self {
            size: repr.size,
            cells: repr.cells,
        })
    }
}

impl Board {
    /// Board of `size` x `size` cells all holding `symbol`.
    pub fn filled(size: usize, symbol: Symbol) -> Self {
        Self {
            size,
            cells: vec![symbol; size * size],
        }
    }

    /// Build a board from explicit rows. Every row must be as long as
    /// there are rows.
    pub fn from_rows(rows: Vec<Vec<Symbol>>) -> Result<Self, BoardError> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for (row, symbols) in rows.into_iter().enumerate() {
            if symbols.len() != size {
                return Err(BoardError::NotSquare {
                    row,
                    len: symbols.len(),
                    expected: size,
                });
            }
            cells.extend(symbols);
        }
        Ok(Self { size, cells })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, (row, col): Cell) -> Option<Symbol> {
        if row < self.size && col < self.size {
            Some(self.cells[row * self.size + col])
        } else {
            None
        }
    }

    pub(crate) fn set(&mut self, (row, col): Cell, symbol: Symbol) {
        self.cells[row * self.size + col] = symbol;
    }

    /// Symbols of one row, or `None` past the last row.
    pub fn row(&self, row: usize) -> Option<&[Symbol]> {
        if row < self.size {
            Some(&self.cells[row * self.size..(row + 1) * self.size])
        } else {
            None
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Symbol]> {
        // `chunks` panics on zero; an empty board simply has no rows.
        self.cells.chunks(self.size.max(1))
    }

    pub fn wildcard_count(&self) -> usize {
        self.cells.iter().filter(|s| s.is_wild()).count()
    }

    /// Cells holding the wildcard, in row-major order.
    pub fn wildcard_cells(&self) -> Vec<Cell> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_wild())
            .map(|(idx, _)| (idx / self.size, idx % self.size))
            .collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, row) in self.rows().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            let repr: Vec<&str> = row.iter().map(|s| s.as_str()).collect();
            write!(f, "{}", repr.join(" | "))?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Rows are separated by `/` or newlines, cells by whitespace, e.g.
    /// `"* 7 7 / A 2 3 / K Q J"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .split(['/', '\n'])
            .map(str::trim)
            .filter(|row| !row.is_empty())
            .map(|row| {
                row.split_whitespace()
                    .map(str::parse)
                    .collect::<Result<Vec<Symbol>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_rows(rows)
    }
}
