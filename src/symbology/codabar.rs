use crate::common::error::{BarcodeError, BarcodeResult};

// Codabar
//------------------------------------------------------------------------------

// Seven elements per symbol, bars and spaces alternating and starting with
// a bar; a set bit means a wide element
static CHARSET: &[u8; 20] = b"0123456789-$:/.+ABCD";

static PATTERNS: [u8; 20] = [
    0b0000011, // 0
    0b0000110, // 1
    0b0001001, // 2
    0b1100000, // 3
    0b0010010, // 4
    0b1000010, // 5
    0b0100001, // 6
    0b0100100, // 7
    0b0110000, // 8
    0b1001000, // 9
    0b0001100, // -
    0b0011000, // $
    0b1000101, // :
    0b1010001, // /
    0b1010100, // .
    0b0010101, // +
    0b0011010, // A
    0b0101001, // B
    0b0001011, // C
    0b0001110, // D
];

const WIDE: usize = 2;

fn push_symbol(out: &mut Vec<bool>, pattern: u8) {
    for i in 0..7 {
        let wide = pattern & (1 << (6 - i)) != 0;
        let bar = i & 1 == 0;
        for _ in 0..if wide { WIDE } else { 1 } {
            out.push(bar);
        }
    }
}

/// Wide/narrow module stream with a narrow gap between symbols. The payload
/// must be framed by A-D start and stop characters.
pub(crate) fn modules(data: &[u8]) -> BarcodeResult<Vec<bool>> {
    debug_assert!(data.len() >= 3, "Length is validated by the registry");

    for &byte in [data[0], data[data.len() - 1]].iter() {
        if !byte.is_ascii_uppercase() {
            return Err(BarcodeError::InvalidCharacter { byte, symbology: "Codabar" });
        }
    }

    let mut out = Vec::new();
    for (i, &byte) in data.iter().enumerate() {
        if i > 0 {
            out.push(false);
        }
        let index = CHARSET.iter().position(|&c| c == byte).expect("Validated charset");
        push_symbol(&mut out, PATTERNS[index]);
    }
    Ok(out)
}

pub(crate) fn accepts(byte: u8) -> bool {
    CHARSET.contains(&byte)
}

#[cfg(test)]
mod codabar_tests {
    use super::{accepts, modules, PATTERNS};
    use crate::common::error::BarcodeError;

    #[test]
    fn test_digit_patterns_have_one_wide_bar_and_space() {
        // Digits and dash/dollar carry exactly two wide elements, the four
        // punctuation symbols three wide bars, the sentinels one wide bar
        // and two wide spaces
        for &p in &PATTERNS[..12] {
            assert_eq!(p.count_ones(), 2);
        }
        for &p in &PATTERNS[12..16] {
            assert_eq!(p.count_ones(), 3);
        }
        for &p in &PATTERNS[16..] {
            assert_eq!(p.count_ones(), 3);
        }
    }

    #[test]
    fn test_modules_framed_by_sentinels() {
        let modules = modules(b"A40156B").unwrap();
        // 7 elements with k wides -> 7 + k modules per symbol, plus gaps
        let wides: u32 = b"A40156B"
            .iter()
            .map(|b| {
                let i = super::CHARSET.iter().position(|c| c == b).unwrap();
                PATTERNS[i].count_ones()
            })
            .sum();
        assert_eq!(modules.len(), 7 * 7 + wides as usize + 6);
    }

    #[test]
    fn test_requires_letter_framing() {
        let err = modules(b"40156").unwrap_err();
        assert_eq!(err, BarcodeError::InvalidCharacter { byte: b'4', symbology: "Codabar" });
    }

    #[test]
    fn test_accepts() {
        assert!(accepts(b'0'));
        assert!(accepts(b'$'));
        assert!(accepts(b'D'));
        assert!(!accepts(b'E'));
        assert!(!accepts(b'a'));
    }
}
