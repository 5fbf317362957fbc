//! Continued fraction expansion of a ratio of two integers.
//!
//! For positive integers num/den the expansion is finite and is produced by
//! Euclidean floor-division steps:
//!
//! ```text
//! a_i  = num div den
//! (num, den) <- (den, num mod den)      until den = 0
//! ```
//!
//! Convergents k_i/d_i follow the standard second-order recurrence, seeded
//! so that the first convergent is (a_0, 1):
//!
//! ```text
//! k_{-1} = 1, k_{-2} = 0        k_i = a_i * k_{i-1} + k_{i-2}
//! d_{-1} = 0, d_{-2} = 1        d_i = a_i * d_{i-1} + d_{i-2}
//! ```

use num_bigint::BigUint;
use num_traits::{One, Zero};
use std::mem;

/// A single convergent k/d of a continued fraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Convergent {
    /// Numerator.
    pub k: BigUint,
    /// Denominator.
    pub d: BigUint,
}

/// The continued-fraction coefficient sequence of num/den.
pub fn coefficients(num: &BigUint, den: &BigUint) -> Vec<BigUint> {
    let mut num = num.clone();
    let mut den = den.clone();
    let mut terms = Vec::new();
    while !den.is_zero() {
        let a = &num / &den;
        let r = &num % &den;
        terms.push(a);
        num = mem::replace(&mut den, r);
    }
    terms
}

/// Lazy iterator over the convergents of num/den, one per coefficient, in
/// increasing index order. Construct a fresh one to restart.
#[derive(Debug, Clone)]
pub struct Convergents {
    num: BigUint,
    den: BigUint,
    k_prev1: BigUint,
    k_prev2: BigUint,
    d_prev1: BigUint,
    d_prev2: BigUint,
}

impl Convergents {
    pub fn new(num: &BigUint, den: &BigUint) -> Self {
        Convergents {
            num: num.clone(),
            den: den.clone(),
            k_prev1: BigUint::one(),
            k_prev2: BigUint::zero(),
            d_prev1: BigUint::zero(),
            d_prev2: BigUint::one(),
        }
    }
}

impl Iterator for Convergents {
    type Item = Convergent;

    fn next(&mut self) -> Option<Convergent> {
        if self.den.is_zero() {
            return None;
        }

        let a = &self.num / &self.den;
        let r = &self.num % &self.den;
        self.num = mem::replace(&mut self.den, r);

        let k = &a * &self.k_prev1 + &self.k_prev2;
        let d = &a * &self.d_prev1 + &self.d_prev2;
        self.k_prev2 = mem::replace(&mut self.k_prev1, k.clone());
        self.d_prev2 = mem::replace(&mut self.d_prev1, d.clone());

        Some(Convergent { k, d })
    }
}
