//! Sequencing of the factorization methods with escalating budgets.

use crate::fermat::fermat_factor;
use crate::p_minus_1::pollard_p_minus_1;
use crate::rho::pollard_rho_brent_with_attempts;
use num_bigint::BigUint;
use rand::Rng;
use recovery_core::{Attack, Factorization};
use std::time::{Duration, Instant};

/// Budgets for one pass through the chain.
///
/// p-1 runs first because it is the cheapest method when it applies at all,
/// retried over the ascending bound list; rho is the general-purpose
/// fallback; Fermat goes last since its budget is expensive and only the
/// close-factor case needs it, which rho usually catches anyway.
#[derive(Debug, Clone)]
pub struct ChainParams {
    /// Ascending smoothness bounds for Pollard's p-1.
    pub p_minus_1_bounds: Vec<u64>,
    /// Randomized restarts for Pollard's rho.
    pub rho_attempts: u32,
    /// Step cap for Fermat's method.
    pub fermat_max_steps: u64,
}

impl Default for ChainParams {
    fn default() -> Self {
        Self {
            p_minus_1_bounds: vec![100_000, 300_000, 700_000, 1_200_000],
            rho_attempts: 10,
            fermat_max_steps: 1_000_000,
        }
    }
}

/// What one pass through the chain produced.
#[derive(Debug, Clone)]
pub struct ChainOutcome {
    /// The modulus that was attacked.
    pub n: BigUint,
    /// The discovered splitting, if any method succeeded.
    pub factors: Option<Factorization>,
    /// The method that found it.
    pub attack: Option<Attack>,
    /// Wall-clock time for the whole pass.
    pub duration: Duration,
}

/// Run the chain with the default budgets.
pub fn factor_chain(n: &BigUint, rng: &mut impl Rng) -> ChainOutcome {
    factor_chain_with(n, &ChainParams::default(), rng)
}

/// Run p-1 over each bound, then rho, then Fermat; the first nontrivial
/// factor short-circuits the rest. All methods exhausted leaves `factors`
/// empty, which is terminal for this modulus: the only variance left is
/// rho's randomness and its retry budget is already spent.
pub fn factor_chain_with(n: &BigUint, params: &ChainParams, rng: &mut impl Rng) -> ChainOutcome {
    let start = Instant::now();

    for &bound in &params.p_minus_1_bounds {
        if let Some(f) = pollard_p_minus_1(n, bound) {
            log::info!("p-1 split {} at bound {}", n, bound);
            return success(n, f, Attack::PollardPMinus1, start);
        }
        log::debug!("p-1 exhausted bound {}", bound);
    }

    if let Some(f) = pollard_rho_brent_with_attempts(n, params.rho_attempts, rng) {
        log::info!("rho split {}", n);
        return success(n, f, Attack::PollardRhoBrent, start);
    }
    log::debug!("rho exhausted {} attempts", params.rho_attempts);

    if let Some(f) = fermat_factor(n, params.fermat_max_steps) {
        log::info!("fermat split {}", n);
        return success(n, f, Attack::Fermat, start);
    }
    log::debug!("fermat exhausted {} steps", params.fermat_max_steps);

    ChainOutcome {
        n: n.clone(),
        factors: None,
        attack: None,
        duration: start.elapsed(),
    }
}

fn success(n: &BigUint, factor: BigUint, attack: Attack, start: Instant) -> ChainOutcome {
    let cofactor = n / &factor;
    ChainOutcome {
        n: n.clone(),
        factors: Some(Factorization::new(factor, cofactor)),
        attack: Some(attack),
        duration: start.elapsed(),
    }
}
