use std::ops::Deref;

use super::poly::Polynomial;

// Reed-Solomon block encoding
//------------------------------------------------------------------------------

/// Error correction codewords for one block: remainder of the data
/// polynomial (shifted past the generator) modulo the generator, emitted in
/// descending degree order and left-padded to exactly `ec_count` bytes.
pub(crate) fn ecc(data: &[u8], ec_count: usize) -> Vec<u8> {
    let gen = Polynomial::generator(ec_count);
    let raw = Polynomial::new(data, gen.len() - 1);
    let rem = raw.rem(&gen);
    debug_assert!(rem.len() <= ec_count, "Remainder longer than generator degree");

    let mut out = vec![0u8; ec_count];
    let pad = ec_count - rem.len();
    for i in 0..rem.len() {
        out[pad + i] = rem.coeff(i);
    }
    out
}

/// Column-major interleave: codeword `i` of every block in order, for
/// ascending `i`, skipping blocks that have run out.
pub(crate) fn interleave<T: Copy, V: Deref<Target = [T]>>(blocks: &[V]) -> Vec<T> {
    let max_len = blocks.iter().map(|b| b.len()).max().unwrap_or(0);
    let total = blocks.iter().map(|b| b.len()).sum();
    let mut out = Vec::with_capacity(total);
    for i in 0..max_len {
        for block in blocks {
            if i < block.len() {
                out.push(block[i]);
            }
        }
    }
    out
}

#[cfg(test)]
mod block_tests {
    use super::{ecc, interleave};
    use crate::common::ec::poly::Polynomial;

    #[test]
    fn test_ecc_short_block() {
        let res = ecc(b" [\x0bx\xd1r\xdcMC@\xec\x11\xec\x11\xec\x11", 10);
        assert_eq!(&*res, b"\xc4#'w\xeb\xd7\xe7\xe2]\x17");
    }

    #[test]
    fn test_ecc_unaligned_block() {
        let res = ecc(b" [\x0bx\xd1r\xdcMC@\xec\x11\xec", 13);
        assert_eq!(&*res, b"\xa8H\x16R\xd96\x9c\x00.\x0f\xb4z\x10");
    }

    #[test]
    fn test_ecc_mid_block() {
        let res = ecc(b"CUF\x86W&U\xc2w2\x06\x12\x06g&", 18);
        assert_eq!(&*res, b"\xd5\xc7\x0b-s\xf7\xf1\xdf\xe5\xf8\x9au\x9aoV\xa1o'");
    }

    #[test]
    fn test_ecc_zero_data() {
        assert_eq!(ecc(&[0u8; 16], 10), vec![0u8; 10]);
    }

    #[test]
    fn test_codeword_poly_divisible_by_generator() {
        let data = b" [\x0bx\xd1r\xdcMC@\xec\x11\xec\x11\xec\x11";
        let parity = ecc(data, 10);
        let mut codeword = data.to_vec();
        codeword.extend_from_slice(&parity);
        let rem = Polynomial::new(&codeword, 0).rem(&Polynomial::generator(10));
        assert_eq!(rem.len(), 0);
    }

    #[test]
    fn test_interleave() {
        let blocks = vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9, 0]];
        let interleaved = interleave(&blocks);
        let exp_interleaved = vec![1, 4, 7, 2, 5, 8, 3, 6, 9, 0];
        assert_eq!(interleaved, exp_interleaved);
    }

    #[test]
    fn test_interleave_empty() {
        let blocks: Vec<Vec<u8>> = vec![];
        assert!(interleave(&blocks).is_empty());
    }
}
