//! Error types for board access, move generation and configuration.

use crate::types::{Cell, Color, Piece, PieceKind};

/// Errors raised by a board collaborator.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// A write addressed a cell outside the board
    #[error("cell {0} is outside the board")]
    OutOfBounds(Cell),

    /// A coordinate string that does not name a cell
    #[error("invalid coordinate: {0:?}")]
    InvalidCoord(String),

    /// Malformed piece-placement text
    #[error("invalid placement: {0}")]
    InvalidPlacement(String),

    /// The collaborator refused the operation
    #[error("board rejected operation: {0}")]
    Rejected(String),
}

/// Errors from reachability and legality queries.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Move generation was asked for a piece that was never placed
    #[error("{color:?} {kind:?} has no cell")]
    Unplaced { kind: PieceKind, color: Color },

    /// The board does not hold the piece at the cell it claims
    #[error("{piece:?} is not on the board at {cell}")]
    NotOnBoard { piece: Piece, cell: Cell },

    /// Placing the piece on a candidate cell failed
    #[error("failed to simulate move {from} -> {to}: {source}")]
    Simulation {
        from: Cell,
        to: Cell,
        #[source]
        source: BoardError,
    },

    /// Undoing a simulated move failed; the board state is unknown
    #[error("failed to restore board after simulating {from} -> {to}: {source}")]
    Restore {
        from: Cell,
        to: Cell,
        #[source]
        source: BoardError,
    },

    /// The check probe itself failed
    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Errors loading a material table.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    TomlSer(#[from] toml::ser::Error),

    #[error("invalid material table: {0}")]
    Invalid(String),
}

pub type MoveResult<T> = Result<T, MoveError>;
