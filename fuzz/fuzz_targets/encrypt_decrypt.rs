#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint_dig::BigUint;
use std::sync::OnceLock;

use textbook_rsa::{Decrypt, Encrypt, KeyPair};

static KEYPAIR: OnceLock<KeyPair> = OnceLock::new();

fuzz_target!(|data: &[u8]| {
    let key_pair = KEYPAIR.get_or_init(|| {
        KeyPair::from_primes(&BigUint::from(61u32), &BigUint::from(53u32)).unwrap()
    });

    // every byte maps to a code below 256, far below n = 3233
    let message: String = data.iter().map(|&b| b as char).collect();

    let ciphertext = key_pair.encrypt(&message).unwrap();
    let decrypted = key_pair.decrypt(&ciphertext).unwrap();

    assert_eq!(message, decrypted, "roundtrip mismatch for {data:?}");
});
