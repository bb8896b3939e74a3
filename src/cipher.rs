// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use num_bigint_dig::BigUint;
use num_traits::ToPrimitive;

use crate::arith;
use crate::ciphertext::Ciphertext;
use crate::error::{Error, Result};
use crate::key::{KeyPair, PrivateKey, PublicKey};

/// Maps each character of `message` to its Unicode scalar value.
pub fn text_to_codes(message: &str) -> Vec<BigUint> {
    message.chars().map(|ch| BigUint::from(ch as u32)).collect()
}

/// Maps numeric codes back to text.
///
/// Fails with [`Error::InvalidCharCode`] on anything that is not a valid
/// Unicode scalar value, which is how a wrong decryption key most often
/// announces itself.
pub fn codes_to_text(codes: &[BigUint]) -> Result<String> {
    codes
        .iter()
        .map(|code| {
            code.to_u32()
                .and_then(char::from_u32)
                .ok_or_else(|| Error::InvalidCharCode(code.clone()))
        })
        .collect()
}

/// Encrypts `message` under the public components (n, e).
///
/// Each character code m becomes mod_pow(m, e, n). Codes at or above the
/// modulus cannot survive the round trip, the reduction would wrap them,
/// so they are rejected up front with [`Error::SymbolTooLarge`] instead
/// of corrupting silently.
pub fn encrypt(n: &BigUint, e: &BigUint, message: &str) -> Result<Ciphertext> {
    let symbols = text_to_codes(message)
        .into_iter()
        .map(|code| {
            if code >= *n {
                return Err(Error::SymbolTooLarge { code, n: n.clone() });
            }
            Ok(arith::mod_pow(&code, e, n))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Ciphertext::new(symbols))
}

/// Decrypts a ciphertext with the private components (n, d).
///
/// A mismatched key produces garbage, not an integrity failure: textbook
/// RSA carries no authenticity. Expect readable nonsense or
/// [`Error::InvalidCharCode`].
pub fn decrypt(n: &BigUint, d: &BigUint, ciphertext: &Ciphertext) -> Result<String> {
    let codes: Vec<BigUint> = ciphertext
        .symbols()
        .iter()
        .map(|symbol| arith::mod_pow(symbol, d, n))
        .collect();

    codes_to_text(&codes)
}

/// Encryption seam for anything that carries public components.
pub trait Encrypt {
    fn encrypt(&self, message: &str) -> Result<Ciphertext>;
}

/// Decryption seam for anything that carries private components.
pub trait Decrypt {
    fn decrypt(&self, ciphertext: &Ciphertext) -> Result<String>;
}

impl Encrypt for PublicKey {
    fn encrypt(&self, message: &str) -> Result<Ciphertext> {
        encrypt(self.n(), self.e(), message)
    }
}

impl Encrypt for KeyPair {
    fn encrypt(&self, message: &str) -> Result<Ciphertext> {
        self.public_key().encrypt(message)
    }
}

impl Decrypt for PrivateKey {
    fn decrypt(&self, ciphertext: &Ciphertext) -> Result<String> {
        decrypt(self.n(), self.d(), ciphertext)
    }
}

impl Decrypt for KeyPair {
    fn decrypt(&self, ciphertext: &Ciphertext) -> Result<String> {
        self.private_key().decrypt(ciphertext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: u64) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn text_to_codes_uses_scalar_values() {
        assert_eq!(text_to_codes("HI"), vec![big(72), big(73)]);
        assert_eq!(text_to_codes(""), Vec::<BigUint>::new());
        assert_eq!(text_to_codes("é"), vec![big(233)]);
    }

    #[test]
    fn codes_to_text_inverts_encoding() {
        let message = "Attack at dawn!";
        let codes = text_to_codes(message);
        assert_eq!(codes_to_text(&codes).unwrap(), message);
    }

    #[test]
    fn codes_to_text_rejects_non_scalar_values() {
        // 0xD800 is a surrogate, u64::MAX does not even fit a u32
        assert!(matches!(
            codes_to_text(&[big(0xD800)]),
            Err(Error::InvalidCharCode(_))
        ));
        assert!(matches!(
            codes_to_text(&[big(u64::MAX)]),
            Err(Error::InvalidCharCode(_))
        ));
    }

    #[test]
    fn encrypt_classic_vector() {
        let encrypted = encrypt(&big(3233), &big(7), "HI").unwrap();
        assert_eq!(encrypted.symbols(), &[big(1087), big(286)][..]);
    }

    #[test]
    fn decrypt_classic_vector() {
        let ciphertext = Ciphertext::new(vec![big(1087), big(286)]);
        assert_eq!(decrypt(&big(3233), &big(1783), &ciphertext).unwrap(), "HI");
    }

    #[test]
    fn roundtrip_under_derived_keys() {
        let pair = KeyPair::from_primes(&big(61), &big(53)).unwrap();
        for message in ["Hello, World!", "textbook rsa", "punctuation: ,.;!?", "é µ"] {
            let encrypted = pair.encrypt(message).unwrap();
            assert_eq!(pair.decrypt(&encrypted).unwrap(), message, "{message:?}");
        }
    }

    #[test]
    fn empty_message_roundtrips() {
        let pair = KeyPair::from_primes(&big(61), &big(53)).unwrap();
        let encrypted = pair.encrypt("").unwrap();
        assert!(encrypted.is_empty());
        assert_eq!(pair.decrypt(&encrypted).unwrap(), "");
    }

    #[test]
    fn oversized_symbol_is_rejected() {
        // 'ÿ' is 255, which does not fit below n = 221
        assert!(matches!(
            encrypt(&big(221), &big(5), "ÿ"),
            Err(Error::SymbolTooLarge { .. })
        ));
    }

    #[test]
    fn wrong_exponent_does_not_recover_plaintext() {
        let encrypted = encrypt(&big(3233), &big(7), "HI").unwrap();
        match decrypt(&big(3233), &big(5), &encrypted) {
            Ok(text) => assert_ne!(text, "HI"),
            Err(err) => assert!(matches!(err, Error::InvalidCharCode(_))),
        }
    }

    #[test]
    fn trait_surface_delegates_to_free_functions() {
        let pair = KeyPair::from_primes(&big(61), &big(53)).unwrap();
        let via_trait = pair.encrypt("HI").unwrap();
        let via_free = encrypt(pair.public_key().n(), pair.public_key().e(), "HI").unwrap();
        assert_eq!(via_trait, via_free);
        assert_eq!(pair.private_key().decrypt(&via_trait).unwrap(), "HI");
    }
}
