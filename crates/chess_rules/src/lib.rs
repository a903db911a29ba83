//! Move rules for chess pieces: geometric reachability per piece kind, legality
//! filtering against the mover's own king, and static piece values.
//!
//! The board itself is a collaborator behind the [`Board`] trait. Legality is
//! decided by playing each candidate onto that one board, asking whether the
//! king is in check, and putting everything back before the next candidate.
//! [`ChessBoard`] is a plain array implementation of the trait.

pub mod board;
pub mod error;
pub mod eval;
pub mod legal;
pub mod rules;
pub mod types;

pub use board::*;
pub use error::*;
pub use eval::{KING_VALUE, MaterialTable, kind_value, material_balance, static_value};
pub use legal::{SpeculativeMove, keeps_king_safe, legal_cells, legal_cells_into, legal_moves};
pub use rules::{Movement, reachable_cells, reachable_cells_into};
pub use types::*;
