//! Shared types and arithmetic utilities for the RSA key-recovery attacks.
//!
//! Everything number-theoretic that more than one attack needs lives here:
//! integer square roots and perfect-square detection, modular exponentiation
//! and inversion, uniform sampling below a bound, the byte rendering of a
//! recovered plaintext, and the test-target generator (random primes via
//! Miller-Rabin) used by the demos, benches, and integration tests.

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::Rng;
use std::fmt;

/// The attacks this workspace implements, for reporting which one won.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attack {
    Wiener,
    PollardPMinus1,
    PollardRhoBrent,
    Fermat,
}

impl fmt::Display for Attack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Attack::Wiener => write!(f, "Wiener (continued fractions)"),
            Attack::PollardPMinus1 => write!(f, "Pollard's p-1"),
            Attack::PollardRhoBrent => write!(f, "Pollard's rho (Brent)"),
            Attack::Fermat => write!(f, "Fermat (close factors)"),
        }
    }
}

/// Terminal failures of a recovery attempt.
///
/// A single method running out of budget is not an error (those return
/// `None` and the caller escalates); these are the outcomes left once every
/// escalation is spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RecoveryError {
    #[error("no factorization method produced a factor of the modulus")]
    FactorizationFailed,

    #[error("the public exponent has no inverse modulo the recovered totient")]
    NoInverse,
}

/// A discovered splitting n = p * q, normalized so that p <= q.
///
/// The order of the factors carries no meaning beyond display; the pair is
/// immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Factorization {
    pub p: BigUint,
    pub q: BigUint,
}

impl Factorization {
    pub fn new(a: BigUint, b: BigUint) -> Self {
        if a <= b {
            Factorization { p: a, q: b }
        } else {
            Factorization { p: b, q: a }
        }
    }

    pub fn product(&self) -> BigUint {
        &self.p * &self.q
    }

    /// Euler totient (p-1)(q-1) of the product.
    pub fn totient(&self) -> BigUint {
        (&self.p - 1u32) * (&self.q - 1u32)
    }
}

impl fmt::Display for Factorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.p, self.q)
    }
}

/// Floor of the integer square root, by Newton's method.
pub fn isqrt(n: &BigUint) -> BigUint {
    if *n <= BigUint::one() {
        return n.clone();
    }

    // Initial guess 2^((bits+1)/2) is >= sqrt(n), so the iteration
    // decreases monotonically until it crosses the root.
    let bits = n.bits();
    let mut x = BigUint::one() << ((bits + 1) / 2);
    loop {
        let next = (&x + n / &x) >> 1;
        if next >= x {
            return x;
        }
        x = next;
    }
}

/// Ceiling of the integer square root.
pub fn isqrt_ceil(n: &BigUint) -> BigUint {
    let r = isqrt(n);
    if &(&r * &r) == n {
        r
    } else {
        r + 1u32
    }
}

/// If n is a perfect square, its root; `None` otherwise.
pub fn perfect_sqrt(n: &BigUint) -> Option<BigUint> {
    let r = isqrt(n);
    if &(&r * &r) == n {
        Some(r)
    } else {
        None
    }
}

/// Modular exponentiation: base^exp mod modulus.
pub fn mod_pow(base: &BigUint, exp: &BigUint, modulus: &BigUint) -> BigUint {
    base.modpow(exp, modulus)
}

/// Greatest common divisor.
pub fn gcd(a: &BigUint, b: &BigUint) -> BigUint {
    a.gcd(b)
}

/// Modular multiplicative inverse a^(-1) mod m via the iterative extended
/// Euclidean algorithm, carried out in `BigInt` so the Bezout coefficient
/// can go negative. Returns `None` when gcd(a, m) != 1.
pub fn mod_inverse(a: &BigUint, modulus: &BigUint) -> Option<BigUint> {
    let m = BigInt::from(modulus.clone());
    if m <= BigInt::one() {
        return None;
    }

    // Invariant: s0 * a == r0 and s1 * a == r1, both mod m.
    let mut r0 = BigInt::from(a.clone()) % &m;
    let mut r1 = m.clone();
    let mut s0 = BigInt::one();
    let mut s1 = BigInt::zero();

    while !r1.is_zero() {
        let q = &r0 / &r1;
        let r2 = &r0 - &q * &r1;
        r0 = std::mem::replace(&mut r1, r2);
        let s2 = &s0 - &q * &s1;
        s0 = std::mem::replace(&mut s1, s2);
    }

    if r0 != BigInt::one() {
        return None;
    }
    let inv = ((s0 % &m) + &m) % &m;
    inv.to_biguint()
}

/// Sample a uniform random integer in [1, n) from `rng`.
///
/// Draws as many random bytes as n occupies and reduces mod n; zero draws
/// are rejected so the result is always a usable nonzero residue.
pub fn random_below(n: &BigUint, rng: &mut impl Rng) -> BigUint {
    let width = n.to_bytes_be().len();
    loop {
        let mut bytes = vec![0u8; width];
        rng.fill(&mut bytes[..]);
        let candidate = BigUint::from_bytes_be(&bytes) % n;
        if !candidate.is_zero() {
            return candidate;
        }
    }
}

/// Render a nonnegative integer as its minimal big-endian byte sequence.
///
/// Zero renders as the empty sequence; there is never a leading zero byte.
pub fn int_to_bytes(n: &BigUint) -> Vec<u8> {
    if n.is_zero() {
        // BigUint::to_bytes_be would give [0] here.
        return Vec::new();
    }
    n.to_bytes_be()
}

/// Miller-Rabin probabilistic primality test with `rounds` random witnesses.
pub fn is_probably_prime(n: &BigUint, rounds: u32, rng: &mut impl Rng) -> bool {
    let one = BigUint::one();
    let two = BigUint::from(2u32);

    if *n < two {
        return false;
    }
    if *n == two || *n == BigUint::from(3u32) {
        return true;
    }
    if n.is_even() {
        return false;
    }

    // Write n-1 as 2^r * d with d odd.
    let n_minus_1 = n - &one;
    let mut d = n_minus_1.clone();
    let mut r: u32 = 0;
    while d.is_even() {
        d >>= 1;
        r += 1;
    }

    'witness: for _ in 0..rounds {
        let a = loop {
            let a = random_below(n, rng);
            if a >= two {
                break a;
            }
        };

        let mut x = mod_pow(&a, &d, n);
        if x == one || x == n_minus_1 {
            continue 'witness;
        }
        for _ in 1..r {
            x = mod_pow(&x, &two, n);
            if x == n_minus_1 {
                continue 'witness;
            }
        }
        return false;
    }

    true
}

/// Generate a random prime with exactly `bits` bits.
pub fn random_prime(bits: u32, rng: &mut impl Rng) -> BigUint {
    assert!(bits >= 2, "a prime needs at least 2 bits");
    let num_bytes = (bits as usize + 7) / 8;
    let excess = num_bytes as u32 * 8 - bits;

    loop {
        let mut bytes = vec![0u8; num_bytes];
        rng.fill(&mut bytes[..]);
        // Trim to the requested width, pin the top bit, and force odd.
        bytes[0] &= 0xffu8 >> excess;
        bytes[0] |= 1u8 << ((bits - 1) % 8);
        if let Some(last) = bytes.last_mut() {
            *last |= 1;
        }

        let candidate = BigUint::from_bytes_be(&bytes);
        if is_probably_prime(&candidate, 20, rng) {
            return candidate;
        }
    }
}

/// An RSA target with known factors and a usable public exponent, for
/// demos, benches, and round-trip tests.
#[derive(Debug, Clone)]
pub struct RsaTarget {
    pub n: BigUint,
    pub p: BigUint,
    pub q: BigUint,
    pub e: BigUint,
}

/// Generate a semiprime of roughly `bits` bits whose totient is coprime to
/// e = 65537, so the target is decryptable once factored.
pub fn generate_rsa_target(bits: u32, rng: &mut impl Rng) -> RsaTarget {
    let e = BigUint::from(65_537u32);
    loop {
        let p = random_prime(bits / 2, rng);
        let q = random_prime(bits / 2, rng);
        if p == q {
            continue;
        }
        let phi = (&p - 1u32) * (&q - 1u32);
        if gcd(&e, &phi) != BigUint::one() {
            continue;
        }
        let n = &p * &q;
        return RsaTarget { n, p, q, e };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_isqrt() {
        for (n, root) in [(0u32, 0u32), (1, 1), (4, 2), (7, 2), (9, 3), (15, 3), (16, 4), (10_000, 100)] {
            assert_eq!(isqrt(&BigUint::from(n)), BigUint::from(root), "isqrt({})", n);
        }
    }

    #[test]
    fn test_isqrt_ceil() {
        assert_eq!(isqrt_ceil(&BigUint::from(16u32)), BigUint::from(4u32));
        assert_eq!(isqrt_ceil(&BigUint::from(17u32)), BigUint::from(5u32));
        assert_eq!(isqrt_ceil(&BigUint::from(3233u32)), BigUint::from(57u32));
    }

    #[test]
    fn test_perfect_sqrt_exact_squares() {
        // r^2 must be recognized for many r, and r^2 + 1 must not.
        for r in 0u64..200 {
            let square = BigUint::from(r) * BigUint::from(r);
            assert_eq!(
                perfect_sqrt(&square),
                Some(BigUint::from(r)),
                "{}^2 should be a perfect square",
                r
            );
            if r > 0 {
                assert_eq!(
                    perfect_sqrt(&(square + 1u32)),
                    None,
                    "{}^2 + 1 should not be a perfect square",
                    r
                );
            }
        }
    }

    #[test]
    fn test_perfect_sqrt_large() {
        let r = BigUint::parse_bytes(b"123456789012345678901234567890", 10).unwrap();
        let square = &r * &r;
        assert_eq!(perfect_sqrt(&square), Some(r.clone()));
        assert_eq!(perfect_sqrt(&(square + 1u32)), None);
    }

    #[test]
    fn test_mod_inverse() {
        // 3^(-1) mod 7 = 5
        let inv = mod_inverse(&BigUint::from(3u32), &BigUint::from(7u32));
        assert_eq!(inv, Some(BigUint::from(5u32)));

        // gcd(6, 9) = 3, no inverse
        assert_eq!(mod_inverse(&BigUint::from(6u32), &BigUint::from(9u32)), None);

        // 17 * inv(17) == 1 mod 3120 (the totient of 3233)
        let a = BigUint::from(17u32);
        let m = BigUint::from(3120u32);
        let inv = mod_inverse(&a, &m).expect("17 and 3120 are coprime");
        assert_eq!(inv, BigUint::from(2753u32));
        assert_eq!((&a * &inv) % &m, BigUint::one());
    }

    #[test]
    fn test_mod_inverse_degenerate_moduli() {
        assert_eq!(mod_inverse(&BigUint::from(3u32), &BigUint::one()), None);
        assert_eq!(mod_inverse(&BigUint::zero(), &BigUint::from(7u32)), None);
    }

    #[test]
    fn test_int_to_bytes() {
        assert!(int_to_bytes(&BigUint::zero()).is_empty());
        assert_eq!(int_to_bytes(&BigUint::from(65u32)), vec![0x41]);
        assert_eq!(int_to_bytes(&BigUint::from(0x1234u32)), vec![0x12, 0x34]);

        // No leading zero byte, and from_bytes_be round-trips.
        let n = BigUint::from(0x00ff_ffffu32);
        let bytes = int_to_bytes(&n);
        assert_eq!(bytes.len(), 3);
        assert_ne!(bytes[0], 0);
        assert_eq!(BigUint::from_bytes_be(&bytes), n);
    }

    #[test]
    fn test_random_below_range() {
        let mut rng = StdRng::seed_from_u64(1);
        let n = BigUint::from(97u32);
        for _ in 0..200 {
            let x = random_below(&n, &mut rng);
            assert!(!x.is_zero() && x < n, "sample {} out of [1, 97)", x);
        }
    }

    #[test]
    fn test_is_probably_prime() {
        let mut rng = StdRng::seed_from_u64(2);
        assert!(is_probably_prime(&BigUint::from(2u32), 20, &mut rng));
        assert!(is_probably_prime(&BigUint::from(7u32), 20, &mut rng));
        assert!(is_probably_prime(&BigUint::from(104_729u32), 20, &mut rng));
        assert!(is_probably_prime(&BigUint::from(1_299_709u32), 20, &mut rng));
        assert!(!is_probably_prime(&BigUint::one(), 20, &mut rng));
        assert!(!is_probably_prime(&BigUint::from(100u32), 20, &mut rng));
        assert!(!is_probably_prime(&BigUint::from(3233u32), 20, &mut rng));
    }

    #[test]
    fn test_random_prime_width() {
        let mut rng = StdRng::seed_from_u64(3);
        for bits in [16u32, 24, 33, 48] {
            let p = random_prime(bits, &mut rng);
            assert_eq!(p.bits(), bits as u64, "requested a {}-bit prime, got {}", bits, p);
        }
    }

    #[test]
    fn test_generate_rsa_target() {
        let mut rng = StdRng::seed_from_u64(4);
        let target = generate_rsa_target(48, &mut rng);
        assert_eq!(&target.p * &target.q, target.n);
        let phi = (&target.p - 1u32) * (&target.q - 1u32);
        assert_eq!(gcd(&target.e, &phi), BigUint::one());
    }

    #[test]
    fn test_factorization_normalizes() {
        let f = Factorization::new(BigUint::from(97u32), BigUint::from(83u32));
        assert_eq!(f.p, BigUint::from(83u32));
        assert_eq!(f.q, BigUint::from(97u32));
        assert_eq!(f.product(), BigUint::from(8051u32));
        // (83-1)(97-1) = 7872
        assert_eq!(f.totient(), BigUint::from(7872u32));
    }
}
