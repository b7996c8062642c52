use serde::{Deserialize, Serialize};

/// Board edge length. The variant is played on a fixed 5x5 grid.
pub const BOARD_SIZE: u8 = 5;
/// Total number of squares.
pub const NUM_SQUARES: u8 = BOARD_SIZE * BOARD_SIZE;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
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
    pub fn idx(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    King,
    Rook,
    Bishop,
}
impl PieceKind {
    pub fn idx(self) -> usize {
        match self {
            PieceKind::King => 0,
            PieceKind::Rook => 1,
            PieceKind::Bishop => 2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    /// One-character encoding: uppercase for white, lowercase for black.
    pub fn to_char(self) -> char {
        let c = match self.kind {
            PieceKind::King => 'K',
            PieceKind::Rook => 'R',
            PieceKind::Bishop => 'B',
        };
        match self.color {
            Color::White => c,
            Color::Black => c.to_ascii_lowercase(),
        }
    }

    pub fn from_char(c: char) -> Option<Piece> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let kind = match c.to_ascii_uppercase() {
            'K' => PieceKind::King,
            'R' => PieceKind::Rook,
            'B' => PieceKind::Bishop,
            _ => return None,
        };
        Some(Piece { color, kind })
    }
}

/// Game result. `Winner` names the side that delivered checkmate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Winner(Color),
    Draw,
}

/// A move is a source/destination square pair. The variant has no pawns,
/// so there is no promotion payload, and no castling or en passant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    pub from: u8, // 0..25
    pub to: u8,   // 0..25
}

impl Move {
    pub fn new(from: u8, to: u8) -> Self {
        Self { from, to }
    }
}

// Helpers
pub fn file_of(sq: u8) -> i8 {
    (sq % BOARD_SIZE) as i8
}
pub fn rank_of(sq: u8) -> i8 {
    (sq / BOARD_SIZE) as i8
}
pub fn sq(file: i8, rank: i8) -> Option<u8> {
    if (0..BOARD_SIZE as i8).contains(&file) && (0..BOARD_SIZE as i8).contains(&rank) {
        Some((rank as u8) * BOARD_SIZE + (file as u8))
    } else {
        None
    }
}

pub fn sq_to_coord(sq: u8) -> String {
    let f = (b'a' + (sq % BOARD_SIZE)) as char;
    let r = (b'1' + (sq / BOARD_SIZE)) as char;
    format!("{f}{r}")
}

pub fn coord_to_sq(c: &str) -> Option<u8> {
    let b = c.as_bytes();
    if b.len() != 2 {
        return None;
    }
    let f = b[0];
    let r = b[1];
    if !(b'a'..=b'e').contains(&f) || !(b'1'..=b'5').contains(&r) {
        return None;
    }
    let file = f - b'a';
    let rank = r - b'1';
    Some(rank * BOARD_SIZE + file)
}
