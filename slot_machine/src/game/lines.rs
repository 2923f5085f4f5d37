//! Scoring line extraction.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{board::Board, symbols::Symbol};

/// Which part of the board a line was read from.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum LineId {
    Row(usize),
    Column(usize),
    /// Top-left to bottom-right
    MainDiagonal,
    /// Top-right to bottom-left
    AntiDiagonal,
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row(idx) => write!(f, "row {}", idx + 1),
            Self::Column(idx) => write!(f, "column {}", idx + 1),
            Self::MainDiagonal => write!(f, "main diagonal"),
            Self::AntiDiagonal => write!(f, "anti-diagonal"),
        }
    }
}

/// An ordered run of symbols read across the board.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Line {
    pub id: LineId,
    pub symbols: Vec<Symbol>,
}

impl Line {
    pub fn contains_wild(&self) -> bool {
        self.symbols.iter().any(|s| s.is_wild())
    }
}

/// All scoring lines of the board: rows top to bottom, columns left to
/// right, then the main diagonal and the anti-diagonal. An `n` x `n` board
/// always yields `2n + 2` lines.
pub fn lines(board: &Board) -> Vec<Line> {
    let n = board.size();
    let rows: Vec<&[Symbol]> = board.rows().collect();
    let at = |row: usize, col: usize| rows[row][col];

    let mut lines = Vec::with_capacity(2 * n + 2);
    for (row, symbols) in rows.iter().enumerate() {
        lines.push(Line {
            id: LineId::Row(row),
            symbols: symbols.to_vec(),
        });
    }
    for col in 0..n {
        lines.push(Line {
            id: LineId::Column(col),
            symbols: (0..n).map(|row| at(row, col)).collect(),
        });
    }
    lines.push(Line {
        id: LineId::MainDiagonal,
        symbols: (0..n).map(|i| at(i, i)).collect(),
    });
    lines.push(Line {
        id: LineId::AntiDiagonal,
        symbols: (0..n).map(|i| at(i, n - 1 - i)).collect(),
    });
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use Symbol::*;

    #[test]
    fn test_line_order_and_contents() {
        let board: Board = "A 2 3 / 4 5 6 / 7 8 9".parse().unwrap();
        let lines = lines(&board);
        assert_eq!(lines.len(), 8);

        let ids: Vec<LineId> = lines.iter().map(|l| l.id).collect();
        assert_eq!(
            ids,
            vec![
                LineId::Row(0),
                LineId::Row(1),
                LineId::Row(2),
                LineId::Column(0),
                LineId::Column(1),
                LineId::Column(2),
                LineId::MainDiagonal,
                LineId::AntiDiagonal,
            ]
        );

        assert_eq!(lines[1].symbols, vec![Four, Five, Six]);
        assert_eq!(lines[3].symbols, vec![Ace, Four, Seven]);
        assert_eq!(lines[6].symbols, vec![Ace, Five, Nine]);
        assert_eq!(lines[7].symbols, vec![Three, Five, Seven]);
    }

    #[test]
    fn test_line_count_per_size() {
        for n in 1..=6 {
            let board = Board::filled(n, King);
            let lines = lines(&board);
            assert_eq!(lines.len(), 2 * n + 2);
            assert!(lines.iter().all(|l| l.symbols.len() == n));
        }
    }

    #[test]
    fn test_contains_wild() {
        let board: Board = "A * / 2 3".parse().unwrap();
        let lines = lines(&board);
        assert!(lines[0].contains_wild());
        assert!(!lines[1].contains_wild());
    }

    #[test]
    fn test_line_id_display() {
        assert_eq!(LineId::Row(0).to_string(), "row 1");
        assert_eq!(LineId::AntiDiagonal.to_string(), "anti-diagonal");
    }
}
