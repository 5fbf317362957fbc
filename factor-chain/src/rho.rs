//! Pollard's rho with Brent's cycle detection and batched GCDs.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::One;
use rand::Rng;
use recovery_core::{gcd, random_below};

/// Randomized restarts per call; no attempt count guarantees success, the
/// budget just bounds the retries.
pub const DEFAULT_ATTEMPTS: u32 = 10;

/// GCD batch: |x - y| products are accumulated mod n and a single GCD is
/// taken per chunk of at most this many steps.
const BATCH_LIMIT: u64 = 1 << 12;

/// Cap on the power-of-two block length, bounding one attempt's work.
const MAX_BLOCK: u64 = 1 << 21;

/// Find a nontrivial factor of n with the default retry budget.
pub fn pollard_rho_brent(n: &BigUint, rng: &mut impl Rng) -> Option<BigUint> {
    pollard_rho_brent_with_attempts(n, DEFAULT_ATTEMPTS, rng)
}

/// Brent's variant of Pollard's rho with a configurable retry budget.
///
/// Each attempt draws a fresh seed y and polynomial offset c in [1, n) and
/// iterates y <- y^2 + c mod n, doubling a power-of-two block length r each
/// round. Within a block, |x - y| values are multiplied into a running
/// product mod n and a single batched GCD with n is taken per chunk. A
/// batched GCD of exactly n means the batch collapsed several factors at
/// once; the walk is then replayed step by step from the last checkpoint
/// until the first nontrivial divisor surfaces. Only 1 < g < n is accepted;
/// anything else discards the attempt.
pub fn pollard_rho_brent_with_attempts(
    n: &BigUint,
    max_attempts: u32,
    rng: &mut impl Rng,
) -> Option<BigUint> {
    let one = BigUint::one();

    if *n <= one {
        return None;
    }
    if n.is_even() {
        return Some(BigUint::from(2u32));
    }

    for _ in 0..max_attempts {
        let c = random_below(n, rng);
        let mut y = random_below(n, rng);
        let f = |x: &BigUint| -> BigUint { (x * x + &c) % n };

        let mut x = y.clone();
        let mut ys = y.clone(); // checkpoint for the step-by-step replay
        let mut q = BigUint::one();
        let mut g = BigUint::one();
        let mut r: u64 = 1;

        while g == one && r <= MAX_BLOCK {
            x = y.clone();
            for _ in 0..r {
                y = f(&y);
            }

            let mut k: u64 = 0;
            while k < r && g == one {
                ys = y.clone();
                let chunk = BATCH_LIMIT.min(r - k);
                for _ in 0..chunk {
                    y = f(&y);
                    let diff = if x > y { &x - &y } else { &y - &x };
                    q = q * diff % n;
                }
                g = gcd(&q, n);
                k += chunk;
            }

            r <<= 1;
        }

        if g == *n {
            // The batch overshot; replay from the checkpoint one GCD at a
            // time until a divisor appears (worst case it is n again).
            g = loop {
                ys = f(&ys);
                let diff = if x > ys { &x - &ys } else { &ys - &x };
                let step_g = gcd(&diff, n);
                if step_g > one {
                    break step_g;
                }
            };
        }

        if g > one && g < *n {
            return Some(g);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::Zero;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_even_modulus_fast_path() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            pollard_rho_brent(&BigUint::from(1_000_000u64), &mut rng),
            Some(BigUint::from(2u32))
        );
    }

    #[test]
    fn test_factors_8051() {
        // 8051 = 83 * 97; seeded rng keeps the walk reproducible.
        let n = BigUint::from(8051u32);
        let mut rng = StdRng::seed_from_u64(1);
        let f = pollard_rho_brent(&n, &mut rng).expect("8051 splits");
        assert!((&n % &f).is_zero(), "factor {} must divide 8051", f);
        assert!(f > BigUint::one() && f < n, "factor {} must be nontrivial", f);
    }

    #[test]
    fn test_factors_larger_semiprime() {
        // 1000003 * 1000033
        let p = BigUint::from(1_000_003u64);
        let q = BigUint::from(1_000_033u64);
        let n = &p * &q;
        let mut rng = StdRng::seed_from_u64(2);
        let f = pollard_rho_brent(&n, &mut rng).expect("40-bit semiprime splits");
        assert!(f == p || f == q, "factor {} should be one of the primes", f);
    }

    #[test]
    fn test_prime_modulus_not_found() {
        // Every GCD against a prime is 1 or n, so all attempts must fail.
        let n = BigUint::from(104_729u32);
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(pollard_rho_brent_with_attempts(&n, 3, &mut rng), None);
    }

    #[test]
    fn test_trivial_modulus() {
        let mut rng = StdRng::seed_from_u64(4);
        assert_eq!(pollard_rho_brent(&BigUint::one(), &mut rng), None);
    }
}
