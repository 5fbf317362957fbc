//! Pollard's p-1 smooth-order factorization.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::One;
use recovery_core::{gcd, mod_pow};

/// Try to split n with smoothness bound `bound`.
///
/// Raises a = 2 to successive integers 2, 3, ..., bound mod n, which
/// accumulates a = 2^(bound!) mod n. If some prime p | n has p-1
/// bound-smooth, then (p-1) | bound! and a = 1 mod p by Fermat, so
/// gcd(a - 1, n) picks p up. The candidate is accepted only when it is
/// strictly between 1 and n; a GCD of n itself means every prime of n was
/// smooth at once and the bound tells us nothing.
///
/// Cost is linear in `bound`, which is why the chain escalates through an
/// ascending bound list rather than starting large.
pub fn pollard_p_minus_1(n: &BigUint, bound: u64) -> Option<BigUint> {
    let one = BigUint::one();

    if *n <= one {
        return None;
    }
    if n.is_even() {
        return Some(BigUint::from(2u32));
    }

    let mut a = BigUint::from(2u32);
    for j in 2..=bound {
        a = mod_pow(&a, &BigUint::from(j), n);
    }

    // n is odd, so a = 2^(bound!) mod n is never zero; a - 1 is safe.
    let candidate = gcd(&(a - &one), n);
    if candidate > one && candidate < *n {
        Some(candidate)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::Zero;

    #[test]
    fn test_smooth_factor_found() {
        // 43843 = 17 * 2579. 17 - 1 = 2^4 is 2-smooth, while
        // 2579 - 1 = 2 * 1289 needs the prime 1289, so bound 20 isolates 17.
        let n = BigUint::from(43_843u32);
        let f = pollard_p_minus_1(&n, 20).expect("16 is smooth below 20");
        assert_eq!(f, BigUint::from(17u32));
        assert!((&n % &f).is_zero());
    }

    #[test]
    fn test_no_bound_suffices() {
        // 5258581 = 2579 * 2039, both safe primes: the orders of 2 carry
        // 1289 and 1019 respectively, so no bound below those can work.
        let n = BigUint::from(5_258_581u32);
        for bound in [100u64, 500, 1000] {
            assert_eq!(pollard_p_minus_1(&n, bound), None, "bound {}", bound);
        }
    }

    #[test]
    fn test_collapsed_gcd_rejected() {
        // 3233 = 61 * 53 with 60 and 52 both 13-smooth: a = 1 mod n, the
        // GCD collapses to n itself and must be reported as not-found.
        let n = BigUint::from(3233u32);
        assert_eq!(pollard_p_minus_1(&n, 100), None);
    }

    #[test]
    fn test_even_modulus_fast_path() {
        assert_eq!(
            pollard_p_minus_1(&BigUint::from(1234u32), 10),
            Some(BigUint::from(2u32))
        );
    }

    #[test]
    fn test_trivial_modulus() {
        assert_eq!(pollard_p_minus_1(&BigUint::one(), 10), None);
    }
}
