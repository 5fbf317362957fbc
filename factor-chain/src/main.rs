//! Demo binary for factor-chain: the individual methods and the full chain.

use factor_chain::chain::factor_chain;
use factor_chain::fermat::fermat_factor;
use factor_chain::p_minus_1::pollard_p_minus_1;
use factor_chain::rho::pollard_rho_brent;
use num_bigint::BigUint;
use rand::rngs::StdRng;
use rand::SeedableRng;
use recovery_core::generate_rsa_target;
use std::time::Instant;

fn main() {
    env_logger::init();
    let mut rng = StdRng::seed_from_u64(0xfac70c);

    println!("=== factor-chain: Classical Factorization Methods ===\n");

    println!("--- Pollard's p-1 ---");
    // 43843 = 17 * 2579, and 17 - 1 = 2^4 is smooth at a tiny bound.
    let n = BigUint::from(43_843u32);
    match pollard_p_minus_1(&n, 20) {
        Some(f) => println!("  {} = {} x {} (bound 20)", n, f, &n / &f),
        None => println!("  {} resisted bound 20", n),
    }
    println!();

    println!("--- Pollard's rho (Brent) ---");
    for n_val in [8051u64, 10_002_200_057, 1_000_036_000_099] {
        let n = BigUint::from(n_val);
        let start = Instant::now();
        match pollard_rho_brent(&n, &mut rng) {
            Some(f) => println!("  {} = {} x {} ({:?})", n, f, &n / &f, start.elapsed()),
            None => println!("  {} resisted all attempts ({:?})", n, start.elapsed()),
        }
    }
    println!();

    println!("--- Fermat ---");
    // 10403 = 101 * 103: close factors fall out on the first step.
    let n = BigUint::from(10_403u32);
    match fermat_factor(&n, 100) {
        Some(f) => println!("  {} = {} x {}", n, f, &n / &f),
        None => println!("  {} resisted the step cap", n),
    }
    println!();

    println!("--- Full chain on random semiprimes ---");
    for bits in [32, 48, 64] {
        let target = generate_rsa_target(bits, &mut rng);
        let outcome = factor_chain(&target.n, &mut rng);
        match (&outcome.factors, &outcome.attack) {
            (Some(factors), Some(attack)) => println!(
                "  {}-bit {} = {} (method: {}, time: {:?})",
                bits, outcome.n, factors, attack, outcome.duration
            ),
            _ => println!("  {}-bit {} EXHAUSTED ({:?})", bits, outcome.n, outcome.duration),
        }
    }

    println!("\n=== Done ===");
}
