use serde::Serialize;

/// Input alphabet of the scanner automaton.
///
/// Every byte maps to exactly one class. `Eof` is not a byte: it is the class
/// of the lookahead once the buffer is exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CharClass {
    Letter,
    Digit,
    Underscore,
    Whitespace,
    Plus,
    Semicolon,
    LParen,
    RParen,
    Comma,
    Other,
    Eof,
}

impl CharClass {
    pub fn is_punctuation(self) -> bool {
        matches!(
            self,
            CharClass::Plus
                | CharClass::Semicolon
                | CharClass::LParen
                | CharClass::RParen
                | CharClass::Comma
        )
    }
}

static CLASS_TABLE: [CharClass; 256] = {
    let mut table = [CharClass::Other; 256];
    let mut i = 0usize;
    while i < 256 {
        table[i] = match i as u8 {
            b'a'..=b'z' | b'A'..=b'Z' => CharClass::Letter,
            b'0'..=b'9' => CharClass::Digit,
            b'_' => CharClass::Underscore,
            b' ' | b'\t' | b'\n' | b'\r' | 0x0c => CharClass::Whitespace,
            b'+' => CharClass::Plus,
            b';' => CharClass::Semicolon,
            b'(' => CharClass::LParen,
            b')' => CharClass::RParen,
            b',' => CharClass::Comma,
            _ => CharClass::Other,
        };
        i += 1;
    }
    table
};

#[inline]
pub fn classify(byte: u8) -> CharClass {
    CLASS_TABLE[byte as usize]
}

/// Classifies the scanner's lookahead, mapping end of input to `Eof`.
#[inline]
pub fn classify_lookahead(lookahead: Option<u8>) -> CharClass {
    match lookahead {
        Some(byte) => classify(byte),
        None => CharClass::Eof,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_and_digits() {
        for b in b'a'..=b'z' {
            assert_eq!(classify(b), CharClass::Letter);
        }
        for b in b'A'..=b'Z' {
            assert_eq!(classify(b), CharClass::Letter);
        }
        for b in b'0'..=b'9' {
            assert_eq!(classify(b), CharClass::Digit);
        }
    }

    #[test]
    fn punctuation() {
        assert_eq!(classify(b'+'), CharClass::Plus);
        assert_eq!(classify(b';'), CharClass::Semicolon);
        assert_eq!(classify(b'('), CharClass::LParen);
        assert_eq!(classify(b')'), CharClass::RParen);
        assert_eq!(classify(b','), CharClass::Comma);
        assert!(CharClass::Comma.is_punctuation());
        assert!(!CharClass::Underscore.is_punctuation());
    }

    #[test]
    fn whitespace_and_other() {
        for b in [b' ', b'\t', b'\n', b'\r'] {
            assert_eq!(classify(b), CharClass::Whitespace);
        }
        for b in [b'-', b':', b'=', 0u8, 0xff, b'$'] {
            assert_eq!(classify(b), CharClass::Other);
        }
    }

    #[test]
    fn end_of_input_is_its_own_class() {
        assert_eq!(classify_lookahead(None), CharClass::Eof);
        assert_eq!(classify_lookahead(Some(0)), CharClass::Other);
    }
}
