/// The 58 symbols of the video-site identifier numeral system, in digit order.
pub const SYMBOLS: &[u8; 58] = b"FcwAPNKTMug3GV5Lj7EJnHpWsx4tb8haYeviqBz6rkCy12mUSDQX9RdoZf";

const INVALID: u8 = u8::MAX;

/// A bidirectional mapping between base-58 digits and their symbols.
///
/// The reverse index is computed at compile time, so a table can live in a
/// `static` and be shared across threads without any synchronization.
#[derive(Debug)]
pub struct AlphabetTable {
    symbols: &'static [u8; 58],
    index: [u8; 256],
}

impl AlphabetTable {
    pub const fn new(symbols: &'static [u8; 58]) -> Self {
        let mut index = [INVALID; 256];
        let mut digit = 0;
        while digit < symbols.len() {
            index[symbols[digit] as usize] = digit as u8;
            digit += 1;
        }
        Self { symbols, index }
    }

    /// Number of symbols, i.e. the radix of the numeral system.
    pub const fn base(&self) -> u64 {
        self.symbols.len() as u64
    }

    /// Returns the symbol for `digit`. Panics if `digit >= base()`.
    pub fn symbol(&self, digit: u64) -> u8 {
        self.symbols[digit as usize]
    }

    /// Returns the digit value of `symbol`, or `None` if it is not part of the alphabet.
    pub fn digit(&self, symbol: u8) -> Option<u64> {
        match self.index[symbol as usize] {
            INVALID => None,
            digit => Some(digit as u64),
        }
    }
}

pub static BILIBILI: AlphabetTable = AlphabetTable::new(SYMBOLS);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_symbol_maps_back_to_its_digit() {
        for digit in 0..BILIBILI.base() {
            let symbol = BILIBILI.symbol(digit);
            assert_eq!(BILIBILI.digit(symbol), Some(digit));
        }
    }

    #[test]
    fn ambiguous_glyphs_are_not_symbols() {
        for symbol in [b'0', b'O', b'I', b'l', b' ', b'-'] {
            assert_eq!(BILIBILI.digit(symbol), None);
        }
    }
}
