//! Legality filtering by simulate, probe, restore on the shared board.

use tracing::{debug, error, trace};

use crate::board::Board;
use crate::error::{MoveError, MoveResult};
use crate::rules::{origin_of, reachable_cells_into};
use crate::types::*;

/// A move played onto the board only for as long as this guard lives.
///
/// `apply` vacates the origin and puts the piece on the target, remembering
/// whatever stood there. `restore` puts both back and reports a failed write.
/// A guard dropped without `restore` (early return, unwinding) restores in
/// `Drop`; if that fails too it logs and panics, because the board can no
/// longer be trusted.
pub struct SpeculativeMove<'a, B: Board + ?Sized> {
    board: &'a mut B,
    piece: Piece,
    from: Cell,
    to: Cell,
    displaced: Option<Piece>,
    restored: bool,
}

impl<'a, B: Board + ?Sized> SpeculativeMove<'a, B> {
    /// Fails with `NotOnBoard` unless `piece` stands on `from`.
    pub fn apply(board: &'a mut B, piece: &Piece, from: Cell, to: Cell) -> MoveResult<Self> {
        if origin_of(board, piece)? != from {
            return Err(MoveError::NotOnBoard {
                piece: *piece,
                cell: from,
            });
        }
        let displaced = board.get_piece_at(to);
        let sim = Self {
            board,
            piece: *piece,
            from,
            to,
            displaced,
            restored: false,
        };

        let placed = sim
            .board
            .set_piece_at(from, None)
            .and_then(|()| sim.board.set_piece_at(to, Some(*piece)));
        if let Err(source) = placed {
            sim.restore()?;
            return Err(MoveError::Simulation { from, to, source });
        }
        Ok(sim)
    }

    /// The board with the move applied.
    pub fn board(&self) -> &B {
        self.board
    }

    /// Piece that stood on the target before the move, if any.
    pub fn displaced(&self) -> Option<Piece> {
        self.displaced
    }

    pub fn restore(mut self) -> MoveResult<()> {
        self.undo()
    }

    fn undo(&mut self) -> MoveResult<()> {
        // Single attempt: Drop must not retry a write the board already refused.
        self.restored = true;
        let (from, to) = (self.from, self.to);
        self.board
            .set_piece_at(from, Some(self.piece))
            .and_then(|()| self.board.set_piece_at(to, self.displaced))
            .map_err(|source| MoveError::Restore { from, to, source })
    }
}

impl<B: Board + ?Sized> Drop for SpeculativeMove<'_, B> {
    fn drop(&mut self) {
        if self.restored {
            return;
        }
        if let Err(e) = self.undo() {
            error!(error = %e, "board left in unknown state");
            if !std::thread::panicking() {
                panic!("{e}");
            }
        }
    }
}

/// Whether moving `piece` from `from` to `to` leaves its own king out of check.
///
/// The board is back in its original configuration when this returns,
/// whether the probe succeeded or not.
pub fn keeps_king_safe<B: Board + ?Sized>(
    board: &mut B,
    piece: &Piece,
    from: Cell,
    to: Cell,
) -> MoveResult<bool> {
    let sim = SpeculativeMove::apply(board, piece, from, to)?;
    let probe = sim.board().is_king_in_check(piece.color);
    sim.restore()?;

    let in_check = probe?;
    if in_check {
        trace!(%from, %to, kind = ?piece.kind, color = ?piece.color, "rejected: king in check");
    }
    Ok(!in_check)
}

/// Reachable cells of `piece` that do not leave its own king in check.
pub fn legal_cells<B: Board + ?Sized>(board: &mut B, piece: &Piece) -> MoveResult<Vec<Cell>> {
    let mut out = Vec::with_capacity(28);
    legal_cells_into(board, piece, &mut out)?;
    Ok(out)
}

/// Like [`legal_cells`], reusing `out`. On error `out` is left empty.
pub fn legal_cells_into<B: Board + ?Sized>(
    board: &mut B,
    piece: &Piece,
    out: &mut Vec<Cell>,
) -> MoveResult<()> {
    reachable_cells_into(board, piece, out)?;
    let from = origin_of(board, piece)?;
    let reachable = out.len();

    let mut failure = None;
    out.retain(|&to| {
        if failure.is_some() {
            return false;
        }
        match keeps_king_safe(board, piece, from, to) {
            Ok(safe) => safe,
            Err(e) => {
                failure = Some(e);
                false
            }
        }
    });
    if let Some(e) = failure {
        out.clear();
        return Err(e);
    }

    debug!(
        %from,
        kind = ?piece.kind,
        color = ?piece.color,
        reachable,
        legal = out.len(),
        "legal cells"
    );
    Ok(())
}

/// Every legal (from, to) pair for the pieces of `color`, row-major by origin.
pub fn legal_moves<B: Board + ?Sized>(board: &mut B, color: Color) -> MoveResult<Vec<(Cell, Cell)>> {
    let pieces: Vec<Piece> = Cell::all()
        .filter_map(|c| board.get_piece_at(c))
        .filter(|p| p.color == color)
        .collect();

    let mut moves = Vec::with_capacity(64);
    let mut buf = Vec::with_capacity(28);
    for piece in &pieces {
        legal_cells_into(board, piece, &mut buf)?;
        if let Some(from) = piece.cell {
            moves.extend(buf.iter().map(|&to| (from, to)));
        }
    }
    Ok(moves)
}

#[cfg(test)]
#[path = "legal_tests.rs"]
mod legal_tests;
