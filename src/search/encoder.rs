use crate::board::{Board, Color, GameState, Piece, PieceKind};
use super::StateEncoder;

pub const FIELD_COUNT: usize = 8;

/// Digit positions of the mixed-radix index, most significant first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    WhiteKing,
    WhiteKnight,
    WhiteRook,
    BlackRook,
    BlackKnight,
    BlackKing,
    Turn,
    Repetition,
}

pub const FIELD_ORDER: [Field; FIELD_COUNT] = [
    Field::WhiteKing,
    Field::WhiteKnight,
    Field::WhiteRook,
    Field::BlackRook,
    Field::BlackKnight,
    Field::BlackKing,
    Field::Turn,
    Field::Repetition,
];

impl Field {
    fn of(piece: Piece) -> Self {
        match (piece.color, piece.kind) {
            (Color::White, PieceKind::King) => Field::WhiteKing,
            (Color::White, PieceKind::Knight) => Field::WhiteKnight,
            (Color::White, PieceKind::Rook) => Field::WhiteRook,
            (Color::Black, PieceKind::Rook) => Field::BlackRook,
            (Color::Black, PieceKind::Knight) => Field::BlackKnight,
            (Color::Black, PieceKind::King) => Field::BlackKing,
        }
    }

    fn slot(self) -> usize { self as usize }

    fn capturable(self) -> bool {
        matches!(self, Field::WhiteKnight | Field::WhiteRook | Field::BlackRook | Field::BlackKnight)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    /// Only the squares a piece can reach from the standard setup:
    /// kings never pass each other, rooks stay between the kings and a
    /// knight keeps the colour of its starting square.
    Compact,
    /// Every square for every piece.
    Direct,
}

/// Bijective mixed-radix encoding of (piece squares, side to move, repetition).
/// Captured knights and rooks use the top digit of their field; kings are never captured.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PositionEncoder {
    layout: Layout,
    squares: usize,
    radices: [usize; FIELD_COUNT],
    weights: [usize; FIELD_COUNT],
}

impl PositionEncoder {
    pub fn compact(squares: usize) -> Self {
        let king = squares - 2;
        let knight = (squares - 1) / 2 + 2;
        let rook = squares - 1;
        Self::with_radices(Layout::Compact, squares, [king, knight, rook, rook, knight, king, 2, 2])
    }

    pub fn direct(squares: usize) -> Self {
        let piece = squares + 1;
        Self::with_radices(Layout::Direct, squares, [squares, piece, piece, piece, piece, squares, 2, 2])
    }

    /// Compact when every position reachable from `board` fits its ranges, direct otherwise.
    pub fn for_board(board: &Board) -> Self {
        if Self::compact_fits(board) { Self::compact(board.size()) } else { Self::direct(board.size()) }
    }

    /// White king left of the black king with every rook between them. Pieces
    /// cannot pass a king on the line, so this holds for all descendants too.
    pub fn compact_fits(board: &Board) -> bool {
        let (Some(wk), Some(bk)) = (board.king(Color::White), board.king(Color::Black)) else { return false };
        if wk > bk { return false; }
        board.pieces().all(|(sq, p)| p.kind != PieceKind::Rook || (wk < sq && sq < bk))
    }

    fn with_radices(layout: Layout, squares: usize, radices: [usize; FIELD_COUNT]) -> Self {
        let mut weights = [1usize; FIELD_COUNT];
        for i in (0..FIELD_COUNT - 1).rev() {
            weights[i] = weights[i + 1] * radices[i + 1];
        }
        Self { layout, squares, radices, weights }
    }

    pub fn layout(&self) -> Layout { self.layout }
    pub fn squares(&self) -> usize { self.squares }
    pub fn radices(&self) -> [usize; FIELD_COUNT] { self.radices }

    fn square_digit(&self, field: Field, sq: usize) -> usize {
        match self.layout {
            Layout::Direct => sq,
            Layout::Compact => match field {
                Field::WhiteKing => sq,
                Field::BlackKing => sq - 2,
                Field::WhiteKnight | Field::BlackKnight => sq / 2,
                _ => sq - 1,
            },
        }
    }

    /// Per-field digits of `state`, in `FIELD_ORDER`.
    pub fn digits(&self, state: &GameState) -> [usize; FIELD_COUNT] {
        let mut digits = [0usize; FIELD_COUNT];
        for field in FIELD_ORDER {
            if field.capturable() { digits[field.slot()] = self.radices[field.slot()] - 1; }
        }
        for (sq, piece) in state.board().pieces() {
            let field = Field::of(piece);
            digits[field.slot()] = self.square_digit(field, sq);
        }
        digits[Field::Turn.slot()] = if state.to_move() == Color::White { 0 } else { 1 };
        // a third repetition is a draw and never reaches the table
        digits[Field::Repetition.slot()] = (state.repetition_count().clamp(1, 2) - 1) as usize;
        digits
    }

    pub fn compose(&self, digits: &[usize; FIELD_COUNT]) -> usize {
        debug_assert!(digits.iter().zip(self.radices.iter()).all(|(d, r)| d < r), "digit out of range: {digits:?}");
        digits.iter().zip(self.weights.iter()).map(|(d, w)| d * w).sum()
    }

    pub fn decompose(&self, index: usize) -> [usize; FIELD_COUNT] {
        let mut digits = [0usize; FIELD_COUNT];
        for i in 0..FIELD_COUNT {
            digits[i] = (index / self.weights[i]) % self.radices[i];
        }
        digits
    }
}

impl StateEncoder<GameState> for PositionEncoder {
    fn capacity(&self) -> usize { self.radices.iter().product() }

    fn encode(&self, state: &GameState) -> usize { self.compose(&self.digits(state)) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_radix_table() {
        let enc = PositionEncoder::compact(8);
        assert_eq!(enc.radices(), [6, 5, 7, 7, 5, 6, 2, 2]);
        assert_eq!(enc.capacity(), 176_400);
    }

    #[test]
    fn start_position_digits() {
        let state = GameState::standard(8).unwrap();
        let enc = PositionEncoder::for_board(state.board());
        assert_eq!(enc.layout(), Layout::Compact);
        // K0 N1 R2 r5 n6 k7, white to move, first occurrence
        assert_eq!(enc.digits(&state), [0, 0, 1, 4, 3, 5, 0, 0]);
        let idx = enc.encode(&state);
        assert_eq!(enc.decompose(idx), enc.digits(&state));
    }

    #[test]
    fn reversed_kings_fall_back_to_direct() {
        let board: Board = "k..R...K".parse().unwrap();
        assert!(!PositionEncoder::compact_fits(&board));
        assert_eq!(PositionEncoder::for_board(&board).layout(), Layout::Direct);
    }
}
