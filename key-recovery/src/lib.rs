//! # key-recovery
//!
//! The top-level RSA key-recovery service.
//!
//! Given a public key (e, n) and a ciphertext c, the service first tries
//! the Wiener attack, which when it hits hands back the private exponent
//! directly. Otherwise it runs the factorization chain; a recovered
//! splitting gives the totient, the totient gives d by modular inversion,
//! and d decrypts. Both terminal failures are ordinary values: an
//! exhausted chain reports [`RecoveryError::FactorizationFailed`], a
//! non-invertible exponent reports [`RecoveryError::NoInverse`].

use cf_wiener::attack::wiener;
use factor_chain::chain::{factor_chain_with, ChainParams};
use num_bigint::BigUint;
use rand::Rng;
use recovery_core::{int_to_bytes, mod_inverse, Attack, RecoveryError};

/// A successfully recovered plaintext, with how it was reached.
#[derive(Debug, Clone)]
pub struct Recovered {
    /// The decrypted integer m = c^d mod n.
    pub plaintext: BigUint,
    /// m rendered as its minimal big-endian bytes. Always present, even
    /// when the bytes turn out not to decode to anything readable; shape
    /// checks are the caller's policy.
    pub bytes: Vec<u8>,
    /// The recovered private exponent.
    pub d: BigUint,
    /// The attack that produced d.
    pub attack: Attack,
}

/// Recover and decrypt with the default chain budgets.
pub fn recover(e: &BigUint, n: &BigUint, c: &BigUint, rng: &mut impl Rng) -> Result<Recovered, RecoveryError> {
    recover_with(e, n, c, &ChainParams::default(), rng)
}

/// Recover and decrypt, with explicit chain budgets.
///
/// Wiener runs first: it is cheap, exact, and needs no factors. On its
/// not-found the chain takes over; its exhaustion is terminal for this
/// modulus, and retrying the same inputs is pointless since rho's retry
/// budget is the only randomness and it is already spent.
pub fn recover_with(
    e: &BigUint,
    n: &BigUint,
    c: &BigUint,
    params: &ChainParams,
    rng: &mut impl Rng,
) -> Result<Recovered, RecoveryError> {
    if let Some(d) = wiener(e, n) {
        log::info!("wiener recovered a {}-bit private exponent", d.bits());
        let plaintext = c.modpow(&d, n);
        return Ok(Recovered {
            bytes: int_to_bytes(&plaintext),
            plaintext,
            d,
            attack: Attack::Wiener,
        });
    }
    log::debug!("wiener exhausted the convergents of e/n, falling back to factoring");

    let outcome = factor_chain_with(n, params, rng);
    let (factors, attack) = match (outcome.factors, outcome.attack) {
        (Some(factors), Some(attack)) => (factors, attack),
        _ => return Err(RecoveryError::FactorizationFailed),
    };

    let totient = factors.totient();
    let d = mod_inverse(e, &totient).ok_or(RecoveryError::NoInverse)?;
    log::info!("inverted e mod totient after splitting n as {}", factors);

    let plaintext = c.modpow(&d, n);
    Ok(Recovered {
        bytes: int_to_bytes(&plaintext),
        plaintext,
        d,
        attack,
    })
}
