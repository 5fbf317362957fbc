//! Demo binary for cf-wiener: continued fractions and the Wiener attack.

use cf_wiener::attack::wiener;
use cf_wiener::cf::{coefficients, Convergents};
use num_bigint::BigUint;

fn main() {
    println!("=== cf-wiener: Continued Fractions and the Wiener Attack ===\n");

    println!("--- Expansion of 649/200 ---");
    let num = BigUint::from(649u32);
    let den = BigUint::from(200u32);
    let terms: Vec<String> = coefficients(&num, &den).iter().map(|a| a.to_string()).collect();
    println!("649/200 = [{}]", terms.join("; "));
    for (i, c) in Convergents::new(&num, &den).enumerate() {
        println!("  convergent {}: {}/{}", i, c.k, c.d);
    }
    println!();

    println!("--- Wiener attack on a vulnerable key (n = 90581, e = 17993) ---");
    let n = BigUint::from(90_581u32);
    let e = BigUint::from(17_993u32);
    match wiener(&e, &n) {
        Some(d) => {
            println!("  recovered d = {}", d);
            let m = BigUint::from(42u32);
            let c = m.modpow(&e, &n);
            println!("  check: {}^e mod n = {}, decrypted back to {}", m, c, c.modpow(&d, &n));
        }
        None => println!("  not recovered"),
    }
    println!();

    println!("--- Wiener attack on a resistant key (n = 3233, e = 17) ---");
    let n = BigUint::from(3233u32);
    let e = BigUint::from(17u32);
    match wiener(&e, &n) {
        Some(d) => println!("  recovered d = {} (unexpected)", d),
        None => println!("  not recovered, as expected: d = 2753 is far above n^(1/4)/3"),
    }

    println!("\n=== Done ===");
}
