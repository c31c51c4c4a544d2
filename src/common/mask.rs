use std::ops::Deref;

// Mask pattern
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord)]
pub struct MaskPattern(u8);

impl MaskPattern {
    pub fn new(pattern: u8) -> Self {
        debug_assert!(pattern < 8, "Invalid mask pattern");
        Self(pattern)
    }
}

impl Deref for MaskPattern {
    type Target = u8;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

mod mask_functions {
    pub fn checkerboard(r: i16, c: i16) -> bool {
        (r + c) & 1 == 0
    }

    pub fn horizontal_lines(r: i16, _: i16) -> bool {
        r & 1 == 0
    }

    pub fn vertical_lines(_: i16, c: i16) -> bool {
        c % 3 == 0
    }

    pub fn diagonal_lines(r: i16, c: i16) -> bool {
        (r + c) % 3 == 0
    }

    pub fn large_checkerboard(r: i16, c: i16) -> bool {
        ((r >> 1) + (c / 3)) & 1 == 0
    }

    pub fn fields(r: i16, c: i16) -> bool {
        ((r * c) & 1) + ((r * c) % 3) == 0
    }

    pub fn diamonds(r: i16, c: i16) -> bool {
        (((r * c) & 1) + ((r * c) % 3)) & 1 == 0
    }

    pub fn meadow(r: i16, c: i16) -> bool {
        (((r + c) & 1) + ((r * c) % 3)) & 1 == 0
    }
}

impl MaskPattern {
    pub fn mask_function(self) -> fn(i16, i16) -> bool {
        match self.0 {
            0b000 => mask_functions::checkerboard,
            0b001 => mask_functions::horizontal_lines,
            0b010 => mask_functions::vertical_lines,
            0b011 => mask_functions::diagonal_lines,
            0b100 => mask_functions::large_checkerboard,
            0b101 => mask_functions::fields,
            0b110 => mask_functions::diamonds,
            0b111 => mask_functions::meadow,
            _ => unreachable!("Invalid mask pattern"),
        }
    }
}

// Penalty scoring
//------------------------------------------------------------------------------

use crate::builder::QrSymbol;

/// Applies the minimum-penalty mask, trying all eight patterns. Ties break
/// toward the lowest pattern index.
pub(crate) fn apply_best_mask(qr: &mut QrSymbol) -> MaskPattern {
    let best_mask = (0..8)
        .min_by_key(|&m| {
            let mut candidate = qr.clone();
            candidate.apply_mask(MaskPattern::new(m));
            compute_total_penalty(&candidate)
        })
        .expect("Eight masks were scored");
    let best_mask = MaskPattern::new(best_mask);
    qr.apply_mask(best_mask);
    best_mask
}

pub(crate) fn compute_total_penalty(qr: &QrSymbol) -> u32 {
    compute_run_penalty(qr)
        + compute_block_penalty(qr)
        + compute_finder_pattern_penalty(qr, true)
        + compute_finder_pattern_penalty(qr, false)
        + compute_balance_penalty(qr)
}

// Rule 1: runs of five or more same-colored modules in a row or column
fn compute_run_penalty(qr: &QrSymbol) -> u32 {
    let mut pen = 0;
    let w = qr.width() as i16;
    for (is_row, i) in (0..w).flat_map(|i| [(true, i), (false, i)]) {
        let mut run = 0;
        let mut last = None;
        for j in 0..w {
            let dark = if is_row { qr.is_dark(i, j) } else { qr.is_dark(j, i) };
            if last == Some(dark) {
                run += 1;
            } else {
                if run >= 5 {
                    pen += run - 2;
                }
                run = 1;
                last = Some(dark);
            }
        }
        if run >= 5 {
            pen += run - 2;
        }
    }
    pen
}

// Rule 2: 2x2 blocks of one color
fn compute_block_penalty(qr: &QrSymbol) -> u32 {
    let mut pen = 0;
    let w = qr.width() as i16;
    for r in 0..w - 1 {
        for c in 0..w - 1 {
            let dark = qr.is_dark(r, c);
            if dark == qr.is_dark(r + 1, c)
                && dark == qr.is_dark(r, c + 1)
                && dark == qr.is_dark(r + 1, c + 1)
            {
                pen += 3;
            }
        }
    }
    pen
}

// Rule 3: 1011101 runs with four light modules on either flank
fn compute_finder_pattern_penalty(qr: &QrSymbol, is_hor: bool) -> u32 {
    static CORE: [bool; 7] = [true, false, true, true, true, false, true];

    let mut pen = 0;
    let w = qr.width() as i16;
    for i in 0..w {
        let at = |j: i16| if is_hor { qr.is_dark(i, j) } else { qr.is_dark(j, i) };
        for j in 0..w - 6 {
            if (0..7).any(|k| at(j + k) != CORE[k as usize]) {
                continue;
            }
            let light_flank =
                |range: std::ops::Range<i16>| range.clone().all(|x| x < 0 || x >= w || !at(x));
            if light_flank(j - 4..j) || light_flank(j + 7..j + 11) {
                pen += 40;
            }
        }
    }
    pen
}

// Rule 4: deviation of the dark-module share from 50%, in 5% steps
fn compute_balance_penalty(qr: &QrSymbol) -> u32 {
    let dark = qr.count_dark_modules();
    let total = qr.width() * qr.width();
    let deviation = (2 * dark).abs_diff(total) * 10 / total;
    (deviation * 10) as u32
}

#[cfg(test)]
mod penalty_tests {
    use super::{
        compute_balance_penalty, compute_block_penalty, compute_finder_pattern_penalty,
        compute_run_penalty,
    };
    use crate::builder::QrSymbol;
    use crate::common::metadata::{ECLevel, Version};

    fn filled_symbol(dark: bool) -> QrSymbol {
        let mut qr = QrSymbol::new(Version::new(1).unwrap(), ECLevel::L);
        let w = qr.width() as i16;
        for r in 0..w {
            for c in 0..w {
                qr.set_data(r, c, dark);
            }
        }
        qr
    }

    #[test]
    fn test_run_penalty_uniform_grid() {
        let qr = filled_symbol(true);
        // Every row and column is one 21-long run scoring 21 - 2
        assert_eq!(compute_run_penalty(&qr), 2 * 21 * 19);
    }

    #[test]
    fn test_block_penalty_uniform_grid() {
        let qr = filled_symbol(false);
        assert_eq!(compute_block_penalty(&qr), 3 * 20 * 20);
    }

    #[test]
    fn test_finder_penalty_uniform_grid_is_zero() {
        let qr = filled_symbol(true);
        assert_eq!(compute_finder_pattern_penalty(&qr, true), 0);
        assert_eq!(compute_finder_pattern_penalty(&qr, false), 0);
    }

    #[test]
    fn test_finder_penalty_detects_pattern() {
        let mut qr = filled_symbol(false);
        // 1011101 at the start of row 3; the leading flank is off-grid and
        // the trailing four modules are light
        for (c, &dark) in [true, false, true, true, true, false, true].iter().enumerate() {
            qr.set_data(3, c as i16, dark);
        }
        assert_eq!(compute_finder_pattern_penalty(&qr, true), 40);
    }

    #[test]
    fn test_balance_penalty() {
        assert_eq!(compute_balance_penalty(&filled_symbol(true)), 100);
        assert_eq!(compute_balance_penalty(&filled_symbol(false)), 100);
    }
}
