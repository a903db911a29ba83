use std::fmt;

use crate::error::BoardError;
use crate::types::*;

/// Occupancy and check queries the move rules consume.
///
/// Implementors own the cell -> piece mapping. Only `get_piece_at`,
/// `set_piece_at` and `is_king_in_check` are required; the capture and entry
/// predicates are derived from them and fail closed for cells off the board.
pub trait Board {
    /// Piece on `cell`, stamped with that cell. `None` for empty or off-board cells.
    fn get_piece_at(&self, cell: Cell) -> Option<Piece>;

    /// Store `piece` on `cell` (or clear it) without validating any game rule.
    fn set_piece_at(&mut self, cell: Cell, piece: Option<Piece>) -> Result<(), BoardError>;

    /// Whether `color`'s king is attacked in the position as it stands now.
    ///
    /// Called after every simulated move, so it must never answer from state
    /// captured before the last `set_piece_at`.
    fn is_king_in_check(&self, color: Color) -> Result<bool, BoardError>;

    fn cell_in_bounds(&self, cell: Cell) -> bool {
        cell.is_on_board()
    }

    fn cell_in_bounds_and_empty(&self, cell: Cell) -> bool {
        self.cell_in_bounds(cell) && self.get_piece_at(cell).is_none()
    }

    /// In bounds and occupied by a piece of the other color.
    fn can_capture_at(&self, piece: &Piece, cell: Cell) -> bool {
        self.cell_in_bounds(cell)
            && self
                .get_piece_at(cell)
                .is_some_and(|other| other.color != piece.color)
    }

    fn can_enter(&self, piece: &Piece, cell: Cell) -> bool {
        self.cell_in_bounds_and_empty(cell) || self.can_capture_at(piece, cell)
    }
}

const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (-1, 2),
    (1, -2),
    (-1, -2),
];
const ORTHOGONAL: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const DIAGONAL: [(i8, i8); 4] = [(1, -1), (1, 1), (-1, 1), (-1, -1)];

/// Plain 8x8 array board.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ChessBoard {
    cells: [[Option<Piece>; 8]; 8],
}

impl Default for ChessBoard {
    fn default() -> Self {
        Self::empty()
    }
}

impl ChessBoard {
    pub fn empty() -> Self {
        Self {
            cells: [[None; 8]; 8],
        }
    }

    /// The initial array.
    pub fn standard() -> Self {
        let mut b = Self::empty();
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (col, &kind) in back.iter().enumerate() {
            let col = col as i8;
            b.put(Cell::new(0, col), Piece::new(kind, Color::White));
            b.put(Cell::new(1, col), Piece::new(PieceKind::Pawn, Color::White));
            b.put(Cell::new(6, col), Piece::new(PieceKind::Pawn, Color::Black));
            b.put(Cell::new(7, col), Piece::new(kind, Color::Black));
        }
        b
    }

    /// Parse the piece-placement field of a FEN string, e.g.
    /// `"rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"`. Trailing FEN fields are ignored.
    pub fn from_placement(text: &str) -> Result<Self, BoardError> {
        let field = text
            .split_whitespace()
            .next()
            .ok_or_else(|| BoardError::InvalidPlacement("empty placement".to_string()))?;

        let ranks: Vec<&str> = field.split('/').collect();
        if ranks.len() != BOARD_SIZE as usize {
            return Err(BoardError::InvalidPlacement(format!(
                "expected 8 ranks, found {}",
                ranks.len()
            )));
        }

        let mut b = Self::empty();
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            // Placement lists rank 8 first.
            let row = BOARD_SIZE - 1 - rank_idx as i8;
            let mut col: i8 = 0;
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    if !(1..=8).contains(&d) {
                        return Err(BoardError::InvalidPlacement(format!(
                            "bad empty-run length {d} in rank {}",
                            row + 1
                        )));
                    }
                    col += d as i8;
                } else {
                    let (kind, color) = PieceKind::from_symbol(ch).ok_or_else(|| {
                        BoardError::InvalidPlacement(format!("unknown piece letter {ch:?}"))
                    })?;
                    if col >= BOARD_SIZE {
                        return Err(BoardError::InvalidPlacement(format!(
                            "too many files in rank {}",
                            row + 1
                        )));
                    }
                    b.put(Cell::new(row, col), Piece::new(kind, color));
                    col += 1;
                }
                if col > BOARD_SIZE {
                    return Err(BoardError::InvalidPlacement(format!(
                        "too many files in rank {}",
                        row + 1
                    )));
                }
            }
            if col != BOARD_SIZE {
                return Err(BoardError::InvalidPlacement(format!(
                    "rank {} covers {col} files",
                    row + 1
                )));
            }
        }
        Ok(b)
    }

    /// Setup helper: place a fresh piece and return it stamped with its cell.
    pub fn place(&mut self, kind: PieceKind, color: Color, cell: Cell) -> Result<Piece, BoardError> {
        self.set_piece_at(cell, Some(Piece::new(kind, color)))?;
        self.get_piece_at(cell)
            .ok_or_else(|| BoardError::Rejected(format!("placement on {cell} did not stick")))
    }

    /// Pieces of `color`, row-major.
    pub fn pieces(&self, color: Color) -> Vec<Piece> {
        Cell::all()
            .filter_map(|c| self.get_piece_at(c))
            .filter(|p| p.color == color)
            .collect()
    }

    /// All placed pieces, row-major.
    pub fn occupied(&self) -> impl Iterator<Item = Piece> + '_ {
        Cell::all().filter_map(|c| self.get_piece_at(c))
    }

    pub fn king_cell(&self, color: Color) -> Option<Cell> {
        Cell::all().find(|&c| {
            self.get_piece_at(c)
                .is_some_and(|p| p.color == color && p.kind == PieceKind::King)
        })
    }

    /// Off-board targets are never attacked.
    pub fn is_cell_attacked(&self, target: Cell, by: Color) -> bool {
        if !target.is_on_board() {
            return false;
        }
        let holds = |c: Cell, kinds: &[PieceKind]| {
            self.get_piece_at(c)
                .is_some_and(|p| p.color == by && kinds.contains(&p.kind))
        };

        // A pawn of `by` attacks diagonally forward, so look one row behind the target.
        let pawn_row = -by.forward();
        if [(pawn_row, -1), (pawn_row, 1)]
            .into_iter()
            .any(|d| holds(target.offset(d), &[PieceKind::Pawn]))
        {
            return true;
        }

        if KNIGHT_JUMPS
            .into_iter()
            .any(|d| holds(target.offset(d), &[PieceKind::Knight]))
        {
            return true;
        }

        if ORTHOGONAL
            .into_iter()
            .chain(DIAGONAL)
            .any(|d| holds(target.offset(d), &[PieceKind::King]))
        {
            return true;
        }

        let ray_hits = |dirs: &[(i8, i8)], kinds: &[PieceKind]| {
            dirs.iter().any(|&d| {
                let mut c = target.offset(d);
                while c.is_on_board() {
                    if self.get_piece_at(c).is_some() {
                        return holds(c, kinds);
                    }
                    c = c.offset(d);
                }
                false
            })
        };

        ray_hits(&ORTHOGONAL, &[PieceKind::Rook, PieceKind::Queen])
            || ray_hits(&DIAGONAL, &[PieceKind::Bishop, PieceKind::Queen])
    }

    fn put(&mut self, cell: Cell, piece: Piece) {
        self.cells[cell.row as usize][cell.col as usize] = Some(piece.at(cell));
    }
}

impl Board for ChessBoard {
    fn get_piece_at(&self, cell: Cell) -> Option<Piece> {
        if !cell.is_on_board() {
            return None;
        }
        self.cells[cell.row as usize][cell.col as usize]
    }

    fn set_piece_at(&mut self, cell: Cell, piece: Option<Piece>) -> Result<(), BoardError> {
        if !cell.is_on_board() {
            return Err(BoardError::OutOfBounds(cell));
        }
        self.cells[cell.row as usize][cell.col as usize] = piece.map(|p| p.at(cell));
        Ok(())
    }

    // No king of that color means nothing to be in check.
    fn is_king_in_check(&self, color: Color) -> Result<bool, BoardError> {
        Ok(self
            .king_cell(color)
            .is_some_and(|k| self.is_cell_attacked(k, color.other())))
    }
}

impl fmt::Display for ChessBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..BOARD_SIZE).rev() {
            write!(f, "{} ", row + 1)?;
            for col in 0..BOARD_SIZE {
                let ch = self
                    .get_piece_at(Cell::new(row, col))
                    .map_or('.', |p| p.symbol());
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        write!(f, "  abcdefgh")
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
