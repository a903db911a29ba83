use std::fmt;
use std::str::FromStr;

use crate::error::BoardError;

/// Board extent along both axes.
pub const BOARD_SIZE: i8 = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}
impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
    /// Row delta a pawn of this color advances by.
    pub fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
    /// Row from which a pawn of this color may advance two cells.
    pub fn pawn_home_row(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Placement letter, uppercase for White.
    pub fn symbol(self, color: Color) -> char {
        let c = match self {
            PieceKind::Pawn => 'p',
            PieceKind::Rook => 'r',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    pub fn from_symbol(ch: char) -> Option<(PieceKind, Color)> {
        let color = if ch.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let kind = match ch.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'r' => PieceKind::Rook,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        Some((kind, color))
    }
}

/// A (row, column) coordinate. Row 0 is White's back rank, column 0 is the a-file.
///
/// Coordinates outside the board are representable so that direction
/// stepping can walk off the edge; the board decides what is in bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: i8,
    pub col: i8,
}

impl Cell {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    pub fn offset(self, (dr, dc): (i8, i8)) -> Cell {
        Cell::new(self.row.saturating_add(dr), self.col.saturating_add(dc))
    }

    pub fn is_on_board(self) -> bool {
        (0..BOARD_SIZE).contains(&self.row) && (0..BOARD_SIZE).contains(&self.col)
    }

    /// Every cell of the board, row-major from (0, 0).
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Cell::new(row, col)))
    }
}

impl From<(i8, i8)> for Cell {
    fn from((row, col): (i8, i8)) -> Self {
        Cell::new(row, col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_on_board() {
            let file = (b'a' + self.col as u8) as char;
            let rank = (b'1' + self.row as u8) as char;
            write!(f, "{file}{rank}")
        } else {
            write!(f, "({}, {})", self.row, self.col)
        }
    }
}

impl FromStr for Cell {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let b = s.as_bytes();
        if b.len() != 2 || !(b'a'..=b'h').contains(&b[0]) || !(b'1'..=b'8').contains(&b[1]) {
            return Err(BoardError::InvalidCoord(s.to_string()));
        }
        Ok(Cell::new((b[1] - b'1') as i8, (b[0] - b'a') as i8))
    }
}

/// A piece's identity plus the cell the board last placed it on.
///
/// `cell` is `None` until the piece goes through `Board::set_piece_at`;
/// pieces read back from a board always carry the cell they sit on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub cell: Option<Cell>,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color) -> Self {
        Self {
            kind,
            color,
            cell: None,
        }
    }

    /// Copy of this piece stamped with `cell`.
    pub fn at(self, cell: Cell) -> Self {
        Self {
            cell: Some(cell),
            ..self
        }
    }

    /// Same kind and color, regardless of placement.
    pub fn same_identity(&self, other: &Piece) -> bool {
        self.kind == other.kind && self.color == other.color
    }

    pub fn symbol(&self) -> char {
        self.kind.symbol(self.color)
    }
}
