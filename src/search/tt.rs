use super::eval::Outcome;

const ENTRIES_PER_BYTE: usize = 4;
const BITS_PER_ENTRY: usize = 2;
const ENTRY_MASK: u8 = 0b11;

// 2-bit codes; zero must stay Unknown so a zeroed table is empty
const UNKNOWN: u8 = 0;
const WHITE_WINS: u8 = 1;
const DRAW: u8 = 2;
const BLACK_WINS: u8 = 3;

fn code(outcome: Outcome) -> u8 {
    match outcome { Outcome::WhiteWins => WHITE_WINS, Outcome::Draw => DRAW, Outcome::BlackWins => BLACK_WINS }
}

fn decode(bits: u8) -> Option<Outcome> {
    match bits {
        WHITE_WINS => Some(Outcome::WhiteWins),
        DRAW => Some(Outcome::Draw),
        BLACK_WINS => Some(Outcome::BlackWins),
        _ => None,
    }
}

/// Solved values for every index of an encoder, four 2-bit entries per byte.
/// An entry is Unknown until written; a written entry is never expected to change.
#[derive(Clone, Debug, Default)]
pub struct PackedTable {
    bytes: Vec<u8>,
    entries: usize,
}

impl PackedTable {
    pub fn new(entries: usize) -> Self {
        let bytes = (entries + ENTRIES_PER_BYTE - 1) / ENTRIES_PER_BYTE;
        Self { bytes: vec![0u8; bytes], entries }
    }

    pub fn len(&self) -> usize { self.entries }
    pub fn is_empty(&self) -> bool { self.entries == 0 }
    pub fn byte_len(&self) -> usize { self.bytes.len() }

    fn locate(index: usize) -> (usize, usize) {
        (index / ENTRIES_PER_BYTE, (index % ENTRIES_PER_BYTE) * BITS_PER_ENTRY)
    }

    pub fn get(&self, index: usize) -> Option<Outcome> {
        let (byte, shift) = Self::locate(index);
        decode((self.bytes[byte] >> shift) & ENTRY_MASK)
    }

    pub fn set(&mut self, index: usize, outcome: Outcome) {
        let (byte, shift) = Self::locate(index);
        let b = &mut self.bytes[byte];
        *b &= !(ENTRY_MASK << shift);
        *b |= code(outcome) << shift;
    }

    /// Number of entries holding a value.
    pub fn filled(&self) -> usize {
        self.bytes.iter().map(|&b| (0..ENTRIES_PER_BYTE).filter(|i| (b >> (i * BITS_PER_ENTRY)) & ENTRY_MASK != UNKNOWN).count()).sum()
    }

    pub fn clear(&mut self) {
        self.bytes.iter_mut().for_each(|b| *b = 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizing_rounds_up() {
        assert_eq!(PackedTable::new(176_400).byte_len(), 44_100);
        assert_eq!(PackedTable::new(5).byte_len(), 2);
        assert_eq!(PackedTable::new(5).get(4), None);
    }

    #[test]
    fn neighbours_in_same_byte_untouched() {
        let mut t = PackedTable::new(8);
        t.set(4, Outcome::BlackWins);
        t.set(6, Outcome::WhiteWins);
        t.set(5, Outcome::Draw);
        assert_eq!(t.get(4), Some(Outcome::BlackWins));
        assert_eq!(t.get(5), Some(Outcome::Draw));
        assert_eq!(t.get(6), Some(Outcome::WhiteWins));
        assert_eq!(t.get(7), None);
        assert_eq!(t.filled(), 3);
        t.clear();
        assert_eq!(t.filled(), 0);
    }
}
