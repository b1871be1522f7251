use std::fmt;

/// The side a piece belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "Black"),
            Color::White => write!(f, "White"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::King => "King",
            Kind::Queen => "Queen",
            Kind::Rook => "Rook",
            Kind::Bishop => "Bishop",
            Kind::Knight => "Knight",
            Kind::Pawn => "Pawn",
        };
        write!(f, "{name}")
    }
}

/// A piece is a color plus a kind. As a special case a piece may not be
/// present: such a piece does not exist on the board and its color and
/// kind fields must never drive a game decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub color: Color,
    pub kind: Kind,
    pub present: bool,
}

impl Piece {
    pub fn new(color: Color, kind: Kind) -> Self {
        Self {
            color,
            kind,
            present: true,
        }
    }

    /// The sentinel for an empty square.
    pub fn absent() -> Self {
        Self {
            color: Color::White,
            kind: Kind::King,
            present: false,
        }
    }

    /// Whether this piece may move onto the square `occupant` sits on.
    /// An absent mover can go nowhere; an absent occupant blocks nobody;
    /// otherwise only opposing colors may capture.
    pub fn can_take_place_of(self, occupant: Piece) -> bool {
        if !self.present {
            return false;
        }

        if !occupant.present {
            return true;
        }

        self.color != occupant.color
    }

    /// Two-character code for board diagrams, e.g. "wK", "bP", ".." when
    /// the square is empty.
    pub fn code(self) -> String {
        if !self.present {
            return "..".to_string();
        }

        let color = match self.color {
            Color::Black => 'b',
            Color::White => 'w',
        };
        let kind = match self.kind {
            Kind::King => 'K',
            Kind::Queen => 'Q',
            Kind::Rook => 'R',
            Kind::Bishop => 'B',
            Kind::Knight => 'N',
            Kind::Pawn => 'P',
        };

        format!("{color}{kind}")
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.present {
            write!(f, "({}, {})", self.color, self.kind)
        } else {
            write!(f, "(absent)")
        }
    }
}
