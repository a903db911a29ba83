//! Per-kind reachability: where a piece could move ignoring its own king's safety.

use crate::board::Board;
use crate::error::{MoveError, MoveResult};
use crate::types::*;

const ROOK_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const BISHOP_DIRS: [(i8, i8); 4] = [(1, -1), (1, 1), (-1, 1), (-1, -1)];
const QUEEN_DIRS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, -1),
    (1, 1),
    (-1, 1),
    (-1, -1),
];
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

/// How a kind of piece moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Movement {
    /// Pushes forward onto empty cells, captures diagonally forward.
    Pawn,
    /// Repeats each direction until blocked.
    Slide(&'static [(i8, i8)]),
    /// Single hop per offset, ignoring anything in between.
    Leap(&'static [(i8, i8)]),
}

impl PieceKind {
    pub fn movement(self) -> Movement {
        match self {
            PieceKind::Pawn => Movement::Pawn,
            PieceKind::Rook => Movement::Slide(&ROOK_DIRS),
            PieceKind::Knight => Movement::Leap(&KNIGHT_JUMPS),
            PieceKind::Bishop => Movement::Slide(&BISHOP_DIRS),
            PieceKind::Queen => Movement::Slide(&QUEEN_DIRS),
            PieceKind::King => Movement::Leap(&QUEEN_DIRS),
        }
    }
}

/// Cell a piece stands on, or the reason it cannot move.
pub(crate) fn origin_of<B: Board + ?Sized>(board: &B, piece: &Piece) -> MoveResult<Cell> {
    let cell = piece.cell.ok_or(MoveError::Unplaced {
        kind: piece.kind,
        color: piece.color,
    })?;
    match board.get_piece_at(cell) {
        Some(found) if found.same_identity(piece) => Ok(cell),
        _ => Err(MoveError::NotOnBoard {
            piece: *piece,
            cell,
        }),
    }
}

/// Cells `piece` could move into, in canonical direction order.
pub fn reachable_cells<B: Board + ?Sized>(board: &B, piece: &Piece) -> MoveResult<Vec<Cell>> {
    let mut out = Vec::with_capacity(28);
    reachable_cells_into(board, piece, &mut out)?;
    Ok(out)
}

/// Like [`reachable_cells`], reusing `out` (cleared first).
pub fn reachable_cells_into<B: Board + ?Sized>(
    board: &B,
    piece: &Piece,
    out: &mut Vec<Cell>,
) -> MoveResult<()> {
    out.clear();
    let from = origin_of(board, piece)?;
    match piece.kind.movement() {
        Movement::Pawn => gen_pawn(board, piece, from, out),
        Movement::Slide(dirs) => gen_slider(board, piece, from, dirs, out),
        Movement::Leap(offsets) => gen_leaper(board, piece, from, offsets, out),
    }
    Ok(())
}

fn gen_pawn<B: Board + ?Sized>(board: &B, piece: &Piece, from: Cell, out: &mut Vec<Cell>) {
    let dir = piece.color.forward();

    let one = from.offset((dir, 0));
    if board.cell_in_bounds_and_empty(one) {
        out.push(one);

        let two = from.offset((2 * dir, 0));
        if from.row == piece.color.pawn_home_row() && board.cell_in_bounds_and_empty(two) {
            out.push(two);
        }
    }

    // Diagonals only ever as captures.
    for dc in [1, -1] {
        let to = from.offset((dir, dc));
        if board.can_capture_at(piece, to) {
            out.push(to);
        }
    }
}

fn gen_slider<B: Board + ?Sized>(
    board: &B,
    piece: &Piece,
    from: Cell,
    dirs: &[(i8, i8)],
    out: &mut Vec<Cell>,
) {
    for &d in dirs {
        let mut to = from.offset(d);
        while board.cell_in_bounds_and_empty(to) {
            out.push(to);
            to = to.offset(d);
        }
        if board.can_capture_at(piece, to) {
            out.push(to);
        }
    }
}

fn gen_leaper<B: Board + ?Sized>(
    board: &B,
    piece: &Piece,
    from: Cell,
    offsets: &[(i8, i8)],
    out: &mut Vec<Cell>,
) {
    for &d in offsets {
        let to = from.offset(d);
        if board.can_enter(piece, to) {
            out.push(to);
        }
    }
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod rules_tests;
