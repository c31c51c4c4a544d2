use super::galois::{gexp, glog};

// Polynomial over GF(256)
//------------------------------------------------------------------------------

/// Dense polynomial with GF(256) coefficients, highest degree first.
/// Coefficient 0 is always nonzero except for the zero polynomial, whose
/// stored coefficients are all zero (or empty).
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Polynomial {
    coeffs: Vec<u8>,
}

impl Polynomial {
    /// Strips leading zeros from `coeffs`, then multiplies by `x^shift`
    /// (appends `shift` implicit trailing zeros).
    pub fn new(coeffs: &[u8], shift: usize) -> Self {
        let offset = coeffs.iter().position(|&c| c != 0).unwrap_or(coeffs.len());
        let mut stored = Vec::with_capacity(coeffs.len() - offset + shift);
        stored.extend_from_slice(&coeffs[offset..]);
        stored.resize(coeffs.len() - offset + shift, 0);
        Self { coeffs: stored }
    }

    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    pub fn coeff(&self, i: usize) -> u8 {
        debug_assert!(i < self.coeffs.len(), "Coefficient index out of range: {i}");
        self.coeffs[i]
    }

    pub fn multiply(&self, other: &Self) -> Self {
        debug_assert!(self.len() > 0 && other.len() > 0, "Cannot multiply empty polynomials");

        let mut out = vec![0u8; self.len() + other.len() - 1];
        for (i, &a) in self.coeffs.iter().enumerate() {
            if a == 0 {
                continue;
            }
            for (j, &b) in other.coeffs.iter().enumerate() {
                if b == 0 {
                    continue;
                }
                out[i + j] ^= gexp((glog(a) + glog(b)) as isize);
            }
        }
        Self::new(&out, 0)
    }

    /// Remainder of polynomial long division. The quotient is never needed
    /// for Reed-Solomon encoding, so only the remainder survives.
    pub fn rem(&self, divisor: &Self) -> Self {
        debug_assert!(divisor.len() > 0 && divisor.coeffs[0] != 0, "Divisor must be nonzero");

        let mut buf = self.coeffs.clone();
        let mut start = 0;
        while buf.len() - start >= divisor.len() {
            if buf[start] != 0 {
                let ratio = 255 + glog(buf[start]) - glog(divisor.coeffs[0]);
                for (u, &d) in buf[start..].iter_mut().zip(divisor.coeffs.iter()) {
                    if d != 0 {
                        *u ^= gexp((glog(d) + ratio) as isize);
                    }
                }
            }
            // The leading term is now cancelled
            start += 1;
        }
        Self::new(&buf[start..], 0)
    }

    /// Reed-Solomon generator ∏ (x + α^i) for i in 0..ec_count, of length
    /// `ec_count + 1`.
    pub fn generator(ec_count: usize) -> Self {
        let mut gen = Self::new(&[1], 0);
        for i in 0..ec_count {
            gen = gen.multiply(&Self::new(&[1, gexp(i as isize)], 0));
        }
        gen
    }
}
