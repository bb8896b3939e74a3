#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint_dig::BigUint;

use textbook_rsa::{arith, factor};

fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }

    // 24-bit inputs keep the prime case inside rho's budget
    let n = u32::from_le_bytes([data[0], data[1], data[2], 0]);
    let n = BigUint::from(n);

    match factor::factorize(&n) {
        Some((p, q)) => {
            assert_eq!(&p * &q, n, "halves must multiply back");
        }
        None => {
            // only primes and degenerate inputs may resist
            assert!(
                n < BigUint::from(2u32) || arith::is_prime(&n),
                "{n} is composite but did not factor"
            );
        }
    }
});
