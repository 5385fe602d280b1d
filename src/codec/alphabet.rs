use crate::hash::Network;

pub const ALPHABET_LEN: usize = 58;

const INVALID: u8 = 0xFF;

/// An ordered set of 58 distinct ASCII symbols plus its reverse lookup.
#[derive(Debug)]
pub struct Alphabet {
    symbols: [u8; ALPHABET_LEN],
    reverse: [u8; 128],
}

impl Alphabet {
    /// Builds and validates an alphabet. Evaluated in const context, so a
    /// malformed literal is a compile error rather than a runtime failure.
    pub const fn new(symbols: &[u8; ALPHABET_LEN]) -> Alphabet {
        let mut reverse = [INVALID; 128];
        let mut i = 0;
        while i < ALPHABET_LEN {
            let c = symbols[i];
            if c >= 128 {
                panic!("alphabet symbols must be ASCII");
            }
            if reverse[c as usize] != INVALID {
                panic!("alphabet symbols must be distinct");
            }
            reverse[c as usize] = i as u8;
            i += 1;
        }
        Alphabet {
            symbols: *symbols,
            reverse,
        }
    }

    pub fn symbol(&self, digit: u8) -> char {
        self.symbols[digit as usize] as char
    }

    /// The symbol standing for a leading zero byte.
    pub fn zero(&self) -> char {
        self.symbol(0)
    }

    pub fn digit(&self, c: char) -> Option<u8> {
        if !c.is_ascii() {
            return None;
        }
        match self.reverse[c as usize] {
            INVALID => None,
            d => Some(d),
        }
    }

    pub fn as_str(&self) -> &str {
        // Every symbol is ASCII, checked in `new`.
        std::str::from_utf8(&self.symbols).unwrap_or_default()
    }
}

pub static RIPPLE: Alphabet =
    Alphabet::new(b"rpshnaf39wBUDNEGHJKLM4PQRST7VWXYZ2bcdeCg65jkm8oFqi1tuvAxyz");

pub static BITCOIN: Alphabet =
    Alphabet::new(b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz");

pub fn alphabet_for(network: Network) -> &'static Alphabet {
    match network {
        Network::Ripple => &RIPPLE,
        Network::Bitcoin | Network::Litecoin => &BITCOIN,
    }
}
