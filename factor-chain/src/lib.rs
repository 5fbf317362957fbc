//! # factor-chain
//!
//! Classical factorization methods for RSA moduli, and the chain that
//! sequences them with escalating budgets.
//!
//! ## Algorithms
//!
//! - **Pollard's p-1**: smooth-order factorization, cheapest when one prime
//!   has a smooth predecessor; run first over an ascending bound list
//! - **Pollard's rho (Brent)**: randomized cycle finding with batched GCD,
//!   the general-purpose fallback of moderate bounded cost
//! - **Fermat**: difference-of-squares search, last because it only pays
//!   off for close factors, a case rho usually catches anyway
//!
//! Every method is a pure function from (modulus, budget) to an optional
//! nontrivial factor; "not found" is `None` and the chain escalates.

pub mod chain;
pub mod fermat;
pub mod p_minus_1;
pub mod rho;
