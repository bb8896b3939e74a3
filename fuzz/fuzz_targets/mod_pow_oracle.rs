#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint_dig::BigUint;
use num_traits::Zero;

use textbook_rsa::arith;

fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }

    // three little-endian operands, capped so each exec stays cheap
    let third = (data.len() / 3).min(16);
    let base = BigUint::from_bytes_le(&data[..third]);
    let exponent = BigUint::from_bytes_le(&data[third..2 * third]);
    let modulus = BigUint::from_bytes_le(&data[2 * third..3 * third]);

    if modulus.is_zero() {
        return;
    }

    assert_eq!(
        arith::mod_pow(&base, &exponent, &modulus),
        base.modpow(&exponent, &modulus),
        "disagrees with the library for base={base} exponent={exponent} modulus={modulus}"
    );
});
