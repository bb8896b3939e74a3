// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use num_bigint_dig::BigUint;

/// Errors that can occur during key derivation, encryption, decryption,
/// or key recovery.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Extended gcd requires nonzero operands")]
    InvalidArgument,

    #[error("Not a prime: {0}")]
    NotPrime(BigUint),

    #[error("Modulus {n} is too small: need n > 150 so every character code stays below n")]
    ModulusTooSmall { n: BigUint },

    #[error("No valid public exponent below the totient")]
    NoValidExponent,

    #[error("Public exponent {e} is not coprime with the totient")]
    ExponentNotCoprime { e: BigUint },

    #[error("Key derivation failed: d*e != 1 (mod phi)")]
    KeyDerivationFailed,

    #[error("Character code {code} does not fit below the modulus {n}")]
    SymbolTooLarge { code: BigUint, n: BigUint },

    #[error("{0} is not a valid Unicode character code")]
    InvalidCharCode(BigUint),

    #[error("invalid ciphertext: {0}")]
    InvalidCiphertext(String),

    #[error("Could not factor the modulus into two nontrivial factors")]
    FactorizationFailed,
}

pub type Result<T> = std::result::Result<T, Error>;
