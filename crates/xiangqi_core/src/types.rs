use serde::{Deserialize, Serialize};
use std::fmt;

/// Board width (files, x axis).
pub const WIDTH: i8 = 9;
/// Board height (ranks, y axis).
pub const HEIGHT: i8 = 10;

/// The two players. Red moves first and starts on the high-y half of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Red,
    Black,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Red => Side::Black,
            Side::Black => Side::Red,
        }
    }

    pub fn idx(self) -> usize {
        match self {
            Side::Red => 0,
            Side::Black => 1,
        }
    }

    /// Direction of travel along y for this side's soldiers.
    pub fn forward(self) -> i8 {
        match self {
            Side::Red => -1,
            Side::Black => 1,
        }
    }

    /// Whether `y` lies on this side's own half of the river.
    pub fn owns_rank(self, y: i8) -> bool {
        match self {
            Side::Red => y >= 5,
            Side::Black => y <= 4,
        }
    }

    /// Whether `(x, y)` is inside this side's palace.
    pub fn in_palace(self, x: i8, y: i8) -> bool {
        let ranks = match self {
            Side::Red => 7..=9,
            Side::Black => 0..=2,
        };
        (3..=5).contains(&x) && ranks.contains(&y)
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Red => write!(f, "red"),
            Side::Black => write!(f, "black"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    General,
    Advisor,
    Elephant,
    Horse,
    Chariot,
    Cannon,
    Soldier,
}

impl PieceKind {
    pub const ALL: [PieceKind; 7] = [
        PieceKind::General,
        PieceKind::Advisor,
        PieceKind::Elephant,
        PieceKind::Horse,
        PieceKind::Chariot,
        PieceKind::Cannon,
        PieceKind::Soldier,
    ];

    /// Material value used by move scoring.
    pub fn value(self) -> i32 {
        match self {
            PieceKind::General => 1000,
            PieceKind::Chariot => 90,
            PieceKind::Cannon => 45,
            PieceKind::Horse => 40,
            PieceKind::Advisor => 20,
            PieceKind::Elephant => 20,
            PieceKind::Soldier => 10,
        }
    }

    /// Single-letter tag, uppercase for red and lowercase for black.
    pub fn letter(self, side: Side) -> char {
        let c = match self {
            PieceKind::General => 'k',
            PieceKind::Advisor => 'a',
            PieceKind::Elephant => 'e',
            PieceKind::Horse => 'h',
            PieceKind::Chariot => 'r',
            PieceKind::Cannon => 'c',
            PieceKind::Soldier => 'p',
        };
        match side {
            Side::Red => c.to_ascii_uppercase(),
            Side::Black => c,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    #[serde(rename = "type")]
    pub kind: PieceKind,
    pub side: Side,
    pub x: i8, // 0..9
    pub y: i8, // 0..10
}

impl Piece {
    pub fn new(kind: PieceKind, side: Side, x: i8, y: i8) -> Self {
        Self { kind, side, x, y }
    }

    pub fn is_at(&self, x: i8, y: i8) -> bool {
        self.x == x && self.y == y
    }

    /// Manhattan distance from this piece to `(x, y)`.
    pub fn distance_to(&self, x: i8, y: i8) -> i32 {
        manhattan(self.x, self.y, x, y)
    }
}

/// A move request.
///
/// `piece_id` indexes the piece list of the exact [`GameState`](crate::GameState)
/// the move was produced for. Every transition rebuilds that list, so a
/// `piece_id` must never be carried over to a successor state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub piece_id: usize,
    pub to_x: i8,
    pub to_y: i8,
}

impl Move {
    pub fn new(piece_id: usize, to_x: i8, to_y: i8) -> Self {
        Self {
            piece_id,
            to_x,
            to_y,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} -> ({}, {})", self.piece_id, self.to_x, self.to_y)
    }
}

// Helpers
pub fn on_board(x: i8, y: i8) -> bool {
    (0..WIDTH).contains(&x) && (0..HEIGHT).contains(&y)
}

pub fn manhattan(x0: i8, y0: i8, x1: i8, y1: i8) -> i32 {
    (x0 as i32 - x1 as i32).abs() + (y0 as i32 - y1 as i32).abs()
}
