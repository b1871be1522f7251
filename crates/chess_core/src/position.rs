use std::fmt;
use std::ops::{Add, AddAssign, Mul};

/// A square in programming coordinates: x grows to the right, y grows
/// downward, so Black's back rank is y=0 and White's is y=7. Coordinates
/// are signed so that offset arithmetic may leave the board; only
/// `on_board` distinguishes valid squares.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: i8,
    pub y: i8,
}

impl Pos {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// Whether both coordinates are in [0, 7].
    pub fn on_board(self) -> bool {
        (0..=7).contains(&self.x) && (0..=7).contains(&self.y)
    }

    /// Parse a square like "e2". Rank 8 maps to y=0, rank 1 to y=7.
    pub fn from_algebraic(notation: &str) -> Option<Self> {
        let mut chars = notation.chars();
        let file = chars.next()?;
        let rank = chars.next()?;

        if chars.next().is_some() {
            return None;
        }

        if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
            return None;
        }

        let x = (file as u8 - b'a') as i8;
        let y = (b'8' - rank as u8) as i8;
        Some(Self { x, y })
    }
}

impl Add for Pos {
    type Output = Pos;

    fn add(self, other: Pos) -> Pos {
        Pos::new(self.x + other.x, self.y + other.y)
    }
}

impl AddAssign for Pos {
    fn add_assign(&mut self, other: Pos) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl Mul<i8> for Pos {
    type Output = Pos;

    fn mul(self, k: i8) -> Pos {
        Pos::new(self.x * k, self.y * k)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
