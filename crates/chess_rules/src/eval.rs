//! Static piece values and the color-signed material count built on them.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::ConfigError;
use crate::types::*;

/// Stands in for "the game is decided": larger than any board's other material.
pub const KING_VALUE: u32 = 9_999_999;

/// Fixed magnitude of a piece, independent of its color.
pub fn static_value(piece: &Piece) -> u32 {
    kind_value(piece.kind)
}

pub fn kind_value(kind: PieceKind) -> u32 {
    match kind {
        PieceKind::Pawn => 1,
        PieceKind::Knight => 3,
        PieceKind::Bishop => 3,
        PieceKind::Rook => 5,
        PieceKind::Queen => 10,
        PieceKind::King => KING_VALUE,
    }
}

/// White material minus Black material using the built-in values.
pub fn material_balance<B: Board + ?Sized>(board: &B) -> i64 {
    MaterialTable::default().balance(board)
}

/// Piece values, loadable from TOML:
///
/// ```toml
/// pawn = 1
/// knight = 3
/// bishop = 3
/// rook = 5
/// queen = 10
/// king = 9999999
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MaterialTable {
    pub pawn: u32,
    pub knight: u32,
    pub bishop: u32,
    pub rook: u32,
    pub queen: u32,
    pub king: u32,
}

impl Default for MaterialTable {
    fn default() -> Self {
        Self {
            pawn: kind_value(PieceKind::Pawn),
            knight: kind_value(PieceKind::Knight),
            bishop: kind_value(PieceKind::Bishop),
            rook: kind_value(PieceKind::Rook),
            queen: kind_value(PieceKind::Queen),
            king: kind_value(PieceKind::King),
        }
    }
}

impl MaterialTable {
    pub fn value(&self, kind: PieceKind) -> u32 {
        match kind {
            PieceKind::Pawn => self.pawn,
            PieceKind::Knight => self.knight,
            PieceKind::Bishop => self.bishop,
            PieceKind::Rook => self.rook,
            PieceKind::Queen => self.queen,
            PieceKind::King => self.king,
        }
    }

    /// Signed sum over every occupied cell: White adds, Black subtracts.
    pub fn balance<B: Board + ?Sized>(&self, board: &B) -> i64 {
        Cell::all()
            .filter_map(|c| board.get_piece_at(c))
            .map(|p| {
                let v = i64::from(self.value(p.kind));
                match p.color {
                    Color::White => v,
                    Color::Black => -v,
                }
            })
            .sum()
    }

    /// Parse and validate. Missing keys keep their built-in value.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let table: MaterialTable = toml::from_str(text)?;
        table.validate()?;
        Ok(table)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if PieceKind::ALL.iter().any(|&k| self.value(k) == 0) {
            return Err(ConfigError::Invalid("values must be positive".to_string()));
        }
        for (name, minor) in [("knight", self.knight), ("bishop", self.bishop)] {
            if !(self.pawn < minor && minor < self.rook) {
                return Err(ConfigError::Invalid(format!(
                    "{name} ({minor}) must lie strictly between pawn ({}) and rook ({})",
                    self.pawn, self.rook
                )));
            }
        }
        if self.rook >= self.queen {
            return Err(ConfigError::Invalid(format!(
                "rook ({}) must be below queen ({})",
                self.rook, self.queen
            )));
        }
        // 30 non-king pieces at most, none worth more than a queen.
        if u64::from(self.king) <= 30 * u64::from(self.queen) {
            return Err(ConfigError::Invalid(format!(
                "king ({}) must exceed all other material (30 x queen = {})",
                self.king,
                30 * u64::from(self.queen)
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
