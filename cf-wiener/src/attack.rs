//! The Wiener attack: scan the convergents of e/n for the private exponent.

use crate::cf::{Convergent, Convergents};
use num_bigint::BigUint;
use num_traits::Zero;
use recovery_core::perfect_sqrt;

/// Attempt to recover a small RSA private exponent from (e, n).
///
/// For every convergent k/d of e/n with k != 0, k is treated as the
/// candidate multiplier in e*d = 1 + k*phi. That forces
/// phi = (e*d - 1) / k, which in turn forces the prime sum
/// s = n - phi + 1. The candidate is accepted when the discriminant
/// s^2 - 4n of x^2 - s*x + n is a nonnegative perfect square: the primes
/// then exist as integer roots, so phi is the true totient and d the true
/// exponent, without ever computing the roots.
///
/// Returns the first accepted d, or `None` once the expansion is exhausted.
/// The scan is exact and runs in O(bit length of n) convergents; it finds d
/// precisely when d is below roughly n^(1/4)/3.
pub fn wiener(e: &BigUint, n: &BigUint) -> Option<BigUint> {
    let n_plus_1 = n + 1u32;
    let four_n: BigUint = n << 2;

    for Convergent { k, d } in Convergents::new(e, n) {
        if k.is_zero() {
            continue;
        }

        let ed_minus_1 = e * &d - 1u32;
        if !(&ed_minus_1 % &k).is_zero() {
            continue;
        }
        let phi = ed_minus_1 / &k;

        // s = n - phi + 1 would be negative, and with it the discriminant.
        if phi > n_plus_1 {
            continue;
        }
        let s = &n_plus_1 - &phi;

        let s_squared = &s * &s;
        if s_squared < four_n {
            continue;
        }
        let discriminant = s_squared - &four_n;
        if perfect_sqrt(&discriminant).is_some() {
            return Some(d);
        }
    }

    None
}
