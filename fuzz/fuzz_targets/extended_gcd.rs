#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint_dig::{BigInt, BigUint};
use num_traits::Zero;

use textbook_rsa::arith;

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let half = (data.len() / 2).min(24);
    let a = BigUint::from_bytes_le(&data[..half]);
    let b = BigUint::from_bytes_le(&data[half..2 * half]);

    if a.is_zero() || b.is_zero() {
        assert!(arith::extended_gcd(&a, &b).is_err());
        return;
    }

    let (g, (s, t)) = arith::extended_gcd(&a, &b).unwrap();

    assert_eq!(g, arith::gcd(&a, &b));
    assert!((&a % &g).is_zero() && (&b % &g).is_zero());

    let bezout = BigInt::from(a.clone()) * &s + BigInt::from(b.clone()) * &t;
    assert_eq!(bezout, BigInt::from(g), "Bezout identity for a={a} b={b}");
});
