use std::fmt;

use crate::{Color, Kind, Piece, Pos};

const ROWS: usize = 8;
const COLUMNS: usize = 8;
const NUM_CELLS: usize = ROWS * COLUMNS;

/// An 8x8 chess board stored row-major (x + y*8). `Board` is a plain
/// value: copying one yields a fully independent snapshot, which move
/// enumeration relies on when it tries out candidate moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Piece; NUM_CELLS],
}

fn index_for(pos: Pos) -> usize {
    assert!(pos.on_board(), "square {pos} is off the board");
    pos.x as usize + pos.y as usize * COLUMNS
}

impl Board {
    /// A board with every square empty.
    pub fn empty() -> Self {
        Self {
            cells: [Piece::absent(); NUM_CELLS],
        }
    }

    /// The standard starting position. Black sits on top (y=0, 1),
    /// White on the bottom (y=6, 7).
    pub fn initial() -> Self {
        let mut board = Self::empty();

        let back_rank = [
            Kind::Rook,
            Kind::Knight,
            Kind::Bishop,
            Kind::Queen,
            Kind::King,
            Kind::Bishop,
            Kind::Knight,
            Kind::Rook,
        ];

        for (x, &kind) in back_rank.iter().enumerate() {
            let x = x as i8;
            board.set(Pos::new(x, 0), Piece::new(Color::Black, kind));
            board.set(Pos::new(x, 1), Piece::new(Color::Black, Kind::Pawn));
            board.set(Pos::new(x, 6), Piece::new(Color::White, Kind::Pawn));
            board.set(Pos::new(x, 7), Piece::new(Color::White, kind));
        }

        board
    }

    /// The piece at `pos`. Panics if `pos` is off the board.
    pub fn at(&self, pos: Pos) -> Piece {
        self.cells[index_for(pos)]
    }

    pub fn set(&mut self, pos: Pos, piece: Piece) {
        self.cells[index_for(pos)] = piece;
    }

    pub fn is_empty_at(&self, pos: Pos) -> bool {
        !self.at(pos).present
    }

    /// Relocate the piece at `from` to `to` and return the captured
    /// piece, if one was standing there. Legality is the caller's
    /// responsibility; this only asserts the basic contract.
    pub fn move_piece(&mut self, from: Pos, to: Pos) -> Option<Piece> {
        let mover = self.at(from);
        assert!(mover.present, "no piece to move at {from}");

        let occupant = self.at(to);
        assert!(
            !occupant.present || mover.can_take_place_of(occupant),
            "piece at {from} may not take the place of the one at {to}"
        );

        self.set(from, Piece::absent());
        self.set(to, mover);

        if occupant.present {
            log::debug!("{mover} captured {occupant} at {to}");
            Some(occupant)
        } else {
            None
        }
    }

    /// All 64 squares with their pieces, in row-major order.
    pub fn squares(&self) -> impl Iterator<Item = (Pos, Piece)> + '_ {
        self.cells.iter().enumerate().map(|(idx, &piece)| {
            let pos = Pos::new((idx % COLUMNS) as i8, (idx / COLUMNS) as i8);
            (pos, piece)
        })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..ROWS as i8 {
            for x in 0..COLUMNS as i8 {
                write!(f, "{}", self.at(Pos::new(x, y)).code())?;

                if x != COLUMNS as i8 - 1 {
                    write!(f, " ")?;
                }
            }

            if y != ROWS as i8 - 1 {
                writeln!(f)?;
            }
        }

        Ok(())
    }
}
