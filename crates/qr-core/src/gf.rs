use std::sync::OnceLock;

/// GF(2^8) with primitive polynomial x^8+x^4+x^3+x^2+1 (0x11D) and generator 0x02.
///
/// The exp/log tables are computed once on first use rather than embedded as a
/// verbatim static table; both produce the same field, and computing them
/// removes 512 bytes of transcription risk for a table this cheap to derive.
struct Tables {
    exp: [u8; 256],
    log: [u8; 256],
}

static TABLES: OnceLock<Tables> = OnceLock::new();

fn tables() -> &'static Tables {
    TABLES.get_or_init(|| {
        let mut exp = [0u8; 256];
        let mut log = [0u8; 256];
        let mut x: u16 = 1;
        for i in 0..255usize {
            exp[i] = x as u8;
            log[x as usize] = i as u8;
            x <<= 1;
            if x & 0x100 != 0 {
                x ^= 0x11D;
            }
        }
        exp[255] = exp[0]; // convenience wraparound for mod-255 indexing
        Tables { exp, log }
    })
}

/// Multiplies two field elements.
pub fn mul(a: u8, b: u8) -> u8 {
    if a == 0 || b == 0 {
        return 0;
    }
    let t = tables();
    let sum = usize::from(t.log[a as usize]) + usize::from(t.log[b as usize]);
    t.exp[sum % 255]
}

/// Divides `a` by `b`. Panics if `b == 0`.
pub fn div(a: u8, b: u8) -> u8 {
    assert!(b != 0, "division by zero in GF(256)");
    if a == 0 {
        return 0;
    }
    let t = tables();
    let diff = usize::from(t.log[a as usize]) + 255 - usize::from(t.log[b as usize]);
    t.exp[diff % 255]
}

/// `0x02 ^ power`, used to build Reed-Solomon generator polynomials.
pub fn exp_of(power: usize) -> u8 {
    tables().exp[power % 255]
}

/// A polynomial over GF(256), coefficients stored highest-degree first.
///
/// Mirrors the source's `Polynomial` type (Add/Multiply/Divide/Normalize) but
/// expressed as plain Rust methods over `Vec<u8>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polynomial(pub Vec<u8>);

impl Polynomial {
    pub fn from_coefficients(coefficients: Vec<u8>) -> Self {
        let mut p = Self(coefficients);
        p.normalize();
        p
    }

    pub fn degree(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// Drops leading zero coefficients (keeping at least one term).
    pub fn normalize(&mut self) {
        while self.0.len() > 1 && self.0[0] == 0 {
            self.0.remove(0);
        }
    }

    /// Length-aware XOR of two polynomials (addition and subtraction coincide in GF(2^n)).
    pub fn add(&self, other: &Polynomial) -> Polynomial {
        let len = self.0.len().max(other.0.len());
        let mut result = vec![0u8; len];
        for (i, &c) in self.0.iter().rev().enumerate() {
            result[len - 1 - i] ^= c;
        }
        for (i, &c) in other.0.iter().rev().enumerate() {
            result[len - 1 - i] ^= c;
        }
        Polynomial::from_coefficients(result)
    }

    /// Full convolution product of two polynomials over GF(256).
    pub fn multiply(&self, other: &Polynomial) -> Polynomial {
        let mut result = vec![0u8; self.0.len() + other.0.len() - 1];
        for (i, &a) in self.0.iter().enumerate() {
            for (j, &b) in other.0.iter().enumerate() {
                result[i + j] ^= mul(a, b);
            }
        }
        Polynomial::from_coefficients(result)
    }

    /// Increases degree by `n`, appending `n` zero low-order coefficients.
    pub fn shift(&self, n: usize) -> Polynomial {
        let mut coefficients = self.0.clone();
        coefficients.extend(std::iter::repeat(0).take(n));
        Polynomial(coefficients)
    }

    /// Synthetic division remainder of `self` (data codewords, one coefficient
    /// per call to `remainder`) by a degree-`divisor.len()` monic generator
    /// polynomial whose leading 1 coefficient is implicit (`divisor` holds only
    /// the lower-order terms, matching `generator_polynomial`'s representation).
    /// Returns `divisor.len()` remainder bytes, highest-degree first.
    pub fn remainder(&self, divisor: &Polynomial) -> Vec<u8> {
        let mut register = vec![0u8; divisor.0.len()];
        for &b in &self.0 {
            let factor = b ^ register.remove(0);
            register.push(0);
            for (r, &d) in register.iter_mut().zip(divisor.0.iter()) {
                *r ^= mul(d, factor);
            }
        }
        register
    }
}

/// Builds the degree-`degree` Reed-Solomon generator polynomial
/// `Π_{i=0..degree-1} (x - α^i)`, with the implicit monic leading term dropped:
/// the returned polynomial holds exactly `degree` coefficients (the lower-order
/// terms), the representation `Polynomial::remainder` expects as a divisor.
pub fn generator_polynomial(degree: usize) -> Polynomial {
    assert!((1..=255).contains(&degree), "degree out of range");
    let mut coefficients = vec![0u8; degree - 1];
    coefficients.push(1);
    let mut root: u8 = 1;
    for _ in 0..degree {
        for j in 0..degree {
            coefficients[j] = mul(coefficients[j], root);
            if j + 1 < coefficients.len() {
                coefficients[j] ^= coefficients[j + 1];
            }
        }
        root = mul(root, 0x02);
    }
    Polynomial(coefficients)
}

#[cfg(test)]
mod should {
    use super::*;

    #[test]
    fn multiply_is_commutative_and_zero_absorbing() {
        assert_eq!(mul(5, 0), 0);
        assert_eq!(mul(5, 9), mul(9, 5));
    }

    #[test]
    fn division_inverts_multiplication() {
        for a in 1..=255u16 {
            let a = a as u8;
            for b in 1..=255u16 {
                let b = b as u8;
                assert_eq!(div(mul(a, b), b), a);
            }
        }
    }

    #[test]
    fn generator_polynomial_degree_matches_request() {
        let g = generator_polynomial(10);
        assert_eq!(g.0.len(), 10);
    }
}
