//! Fermat's difference-of-squares factorization.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::One;
use recovery_core::{isqrt_ceil, perfect_sqrt};

/// Search for factors of n as n = a^2 - b^2 = (a - b)(a + b).
///
/// a starts at ceil(sqrt(n)) and walks upward at most `max_steps` times;
/// a hit needs a^2 - n to be a perfect square b^2 with (a - b)(a + b)
/// multiplying back to n nontrivially. The walk reaches a split of
/// p <= q after (p + q)/2 - sqrt(n) steps, so close factors fall out almost
/// immediately while far-apart ones run into the cap.
pub fn fermat_factor(n: &BigUint, max_steps: u64) -> Option<BigUint> {
    let one = BigUint::one();

    if *n <= one {
        return None;
    }
    if n.is_even() {
        return Some(BigUint::from(2u32));
    }

    let mut a = isqrt_ceil(n);
    for _ in 0..max_steps {
        let b_squared = &a * &a - n;
        if let Some(b) = perfect_sqrt(&b_squared) {
            let p = &a - &b;
            let q = &a + &b;
            if &p * &q == *n && p > one && p < *n {
                return Some(p);
            }
        }
        a += 1u32;
    }

    None
}
