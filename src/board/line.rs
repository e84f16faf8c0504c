use super::Color;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const MIN_SQUARES: usize = 3;
pub const MAX_SQUARES: usize = 12;
pub const STANDARD_SQUARES: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("board length {0} outside 3..=12")]
    BadLength(usize),
    #[error("standard layout needs at least 6 squares, got {0}")]
    TooShortForStandard(usize),
    #[error("unknown piece character '{0}'")]
    UnknownPiece(char),
    #[error("unknown color '{0}'")]
    UnknownColor(String),
    #[error("{0} king missing")]
    MissingKing(Color),
    #[error("more than one {0}")]
    DuplicatePiece(Piece),
    #[error("kings on squares {0} and {1} are adjacent")]
    AdjacentKings(usize, usize),
    #[error("{0} is in check but it is not their move")]
    OpponentInCheck(Color),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    Rook,
    Knight,
    King,
}

impl PieceKind {
    pub fn letter(self) -> char {
        match self { PieceKind::Rook => 'R', PieceKind::Knight => 'N', PieceKind::King => 'K' }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub const fn new(color: Color, kind: PieceKind) -> Self { Self { color, kind } }

    pub fn to_char(self) -> char {
        let c = self.kind.letter();
        if self.color == Color::White { c } else { c.to_ascii_lowercase() }
    }

    pub fn from_char(c: char) -> Option<Self> {
        let kind = match c.to_ascii_uppercase() {
            'R' => PieceKind::Rook,
            'N' => PieceKind::Knight,
            'K' => PieceKind::King,
            _ => return None,
        };
        let color = if c.is_ascii_uppercase() { Color::White } else { Color::Black };
        Some(Self { color, kind })
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.kind { PieceKind::Rook => "rook", PieceKind::Knight => "knight", PieceKind::King => "king" };
        write!(f, "{} {}", self.color, name)
    }
}

/// A line of squares indexed from 0 (White's home end) upwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<Piece>; MAX_SQUARES],
    len: u8,
}

impl Board {
    pub fn empty(len: usize) -> Result<Self, BoardError> {
        if !(MIN_SQUARES..=MAX_SQUARES).contains(&len) { return Err(BoardError::BadLength(len)); }
        Ok(Self { squares: [None; MAX_SQUARES], len: len as u8 })
    }

    /// `KNR` at the left end, `rnk` at the right end, empty squares between.
    pub fn standard(len: usize) -> Result<Self, BoardError> {
        if len < 6 { return Err(BoardError::TooShortForStandard(len)); }
        let mut b = Self::empty(len)?;
        b.set(0, Some(Piece::new(Color::White, PieceKind::King)));
        b.set(1, Some(Piece::new(Color::White, PieceKind::Knight)));
        b.set(2, Some(Piece::new(Color::White, PieceKind::Rook)));
        b.set(len - 3, Some(Piece::new(Color::Black, PieceKind::Rook)));
        b.set(len - 2, Some(Piece::new(Color::Black, PieceKind::Knight)));
        b.set(len - 1, Some(Piece::new(Color::Black, PieceKind::King)));
        Ok(b)
    }

    pub fn size(&self) -> usize { self.len as usize }

    pub fn is_on_board(&self, sq: isize) -> bool { sq >= 0 && (sq as usize) < self.size() }

    pub fn get(&self, sq: usize) -> Option<Piece> {
        if sq < self.size() { self.squares[sq] } else { None }
    }

    pub fn set(&mut self, sq: usize, piece: Option<Piece>) {
        if sq < self.size() { self.squares[sq] = piece; }
    }

    pub fn pieces(&self) -> impl Iterator<Item = (usize, Piece)> + '_ {
        self.squares[..self.size()].iter().enumerate().filter_map(|(i, p)| p.map(|p| (i, p)))
    }

    pub fn find(&self, piece: Piece) -> Option<usize> {
        self.pieces().find(|&(_, p)| p == piece).map(|(sq, _)| sq)
    }

    pub fn king(&self, color: Color) -> Option<usize> { self.find(Piece::new(color, PieceKind::King)) }

    pub fn non_king_count(&self) -> usize {
        self.pieces().filter(|(_, p)| p.kind != PieceKind::King).count()
    }

    fn is_own(&self, sq: usize, color: Color) -> bool {
        matches!(self.get(sq), Some(p) if p.color == color)
    }

    /// Squares the piece on `sq` attacks, in move-generation order.
    pub fn targets(&self, sq: usize) -> Vec<usize> {
        let mut out = Vec::new();
        let Some(piece) = self.get(sq) else { return out };
        let len = self.size();
        match piece.kind {
            PieceKind::Rook => {
                for to in sq + 1..len {
                    if !self.is_own(to, piece.color) { out.push(to); }
                    if self.get(to).is_some() { break; }
                }
                for to in (0..sq).rev() {
                    if !self.is_own(to, piece.color) { out.push(to); }
                    if self.get(to).is_some() { break; }
                }
            }
            PieceKind::Knight | PieceKind::King => {
                let step: isize = if piece.kind == PieceKind::Knight { 2 } else { 1 };
                for to in [sq as isize + step, sq as isize - step] {
                    if self.is_on_board(to) && !self.is_own(to as usize, piece.color) { out.push(to as usize); }
                }
            }
        }
        out
    }

    pub fn attacked_by(&self, color: Color) -> [bool; MAX_SQUARES] {
        let mut attacked = [false; MAX_SQUARES];
        for (sq, p) in self.pieces() {
            if p.color != color { continue; }
            for t in self.targets(sq) { attacked[t] = true; }
        }
        attacked
    }

    pub fn is_king_attacked(&self, color: Color) -> bool {
        match self.king(color) {
            Some(k) => self.attacked_by(color.opponent())[k],
            None => false,
        }
    }

    /// Copy with the piece on `from` moved to `to`, capturing whatever stood there.
    pub fn moved(&self, from: usize, to: usize) -> Self {
        let mut b = *self;
        b.set(to, self.get(from));
        b.set(from, None);
        b
    }

    fn validate(&self) -> Result<(), BoardError> {
        let mut seen: Vec<Piece> = Vec::with_capacity(6);
        for (_, p) in self.pieces() {
            if seen.contains(&p) { return Err(BoardError::DuplicatePiece(p)); }
            seen.push(p);
        }
        let wk = self.king(Color::White).ok_or(BoardError::MissingKing(Color::White))?;
        let bk = self.king(Color::Black).ok_or(BoardError::MissingKing(Color::Black))?;
        if wk.abs_diff(bk) == 1 { return Err(BoardError::AdjacentKings(wk.min(bk), wk.max(bk))); }
        Ok(())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for sq in 0..self.size() {
            let c = self.get(sq).map_or('.', Piece::to_char);
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut b = Self::empty(s.chars().count())?;
        for (sq, c) in s.chars().enumerate() {
            if c == '.' { continue; }
            let p = Piece::from_char(c).ok_or(BoardError::UnknownPiece(c))?;
            b.set(sq, Some(p));
        }
        b.validate()?;
        Ok(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_layout_text() {
        assert_eq!(Board::standard(8).unwrap().to_string(), "KNR..rnk");
        assert_eq!(Board::standard(6).unwrap().to_string(), "KNRrnk");
        assert!(Board::standard(5).is_err());
    }

    #[test]
    fn parse_rejects_bad_layouts() {
        assert_eq!("KNR..rnx".parse::<Board>(), Err(BoardError::UnknownPiece('x')));
        assert_eq!("KNR..rn.".parse::<Board>(), Err(BoardError::MissingKing(Color::Black)));
        assert_eq!("KRR..rnk".parse::<Board>(), Err(BoardError::DuplicatePiece(Piece::new(Color::White, PieceKind::Rook))));
        assert_eq!("..Kk....".parse::<Board>(), Err(BoardError::AdjacentKings(2, 3)));
        assert_eq!("Kk".parse::<Board>(), Err(BoardError::BadLength(2)));
    }

    #[test]
    fn rook_ray_stops_at_first_piece() {
        let b: Board = "K.R..r.k".parse().unwrap();
        assert_eq!(b.targets(2), vec![3, 4, 5, 1]);
        // knight jumps over blockers
        let b: Board = "KNR..rnk".parse().unwrap();
        assert_eq!(b.targets(6), vec![4]);
        assert_eq!(b.targets(1), vec![3]);
    }
}
