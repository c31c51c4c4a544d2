use super::metadata::Version;

// Iterator over the encoding region of a QR grid
//------------------------------------------------------------------------------

/// Walks the grid in two-column strips from the bottom-right corner,
/// alternately upward and downward, skipping the vertical timing column.
pub(crate) struct EncRegionIter {
    r: i16,
    c: i16,
    width: i16,
    vert_timing_col: i16,
}

impl EncRegionIter {
    pub fn new(version: Version) -> Self {
        let w = version.width() as i16;
        Self { r: w - 1, c: w - 1, width: w, vert_timing_col: 6 }
    }
}

impl Iterator for EncRegionIter {
    type Item = (i16, i16);
    fn next(&mut self) -> Option<Self::Item> {
        let adjusted_col = if self.c <= self.vert_timing_col { self.c + 1 } else { self.c };
        if self.c < 0 {
            return None;
        }
        let res = (self.r, self.c);
        let col_type = (self.width - adjusted_col) % 4;
        match col_type {
            2 if self.r > 0 => {
                self.r -= 1;
                self.c += 1;
            }
            0 if self.r < self.width - 1 => {
                self.r += 1;
                self.c += 1;
            }
            0 | 2 if self.c == self.vert_timing_col + 1 => {
                self.c -= 2;
            }
            _ => {
                self.c -= 1;
            }
        }
        Some(res)
    }
}

#[cfg(test)]
mod iter_tests {
    use super::EncRegionIter;
    use crate::common::metadata::Version;

    #[test]
    fn test_starts_bottom_right_and_zigzags_up() {
        let version = Version::new(1).unwrap();
        let coords: Vec<_> = EncRegionIter::new(version).take(6).collect();
        assert_eq!(coords, [(20, 20), (20, 19), (19, 20), (19, 19), (18, 20), (18, 19)]);
    }

    #[test]
    fn test_skips_vertical_timing_column() {
        for v in [1, 7, 21, 40] {
            let version = Version::new(v).unwrap();
            assert!(EncRegionIter::new(version).all(|(_, c)| c != 6), "version {v}");
        }
    }

    #[test]
    fn test_visits_every_non_timing_module_once() {
        for v in [1, 2, 7, 14, 40] {
            let version = Version::new(v).unwrap();
            let w = version.width();
            let mut seen = vec![false; w * w];
            let mut count = 0;
            for (r, c) in EncRegionIter::new(version) {
                let idx = r as usize * w + c as usize;
                assert!(!seen[idx], "revisited ({r}, {c}) at version {v}");
                seen[idx] = true;
                count += 1;
            }
            assert_eq!(count, w * (w - 1), "version {v}");
        }
    }
}
