// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Textbook RSA
//!
//! The classic RSA construction exactly as the textbooks introduce it:
//! pick two primes, derive (n, e) and (n, d), and encrypt each character
//! separately with modular exponentiation. Alongside the honest path the
//! crate ships the attack the construction invites: factor n with trial
//! division or Pollard's rho and rebuild both keys from the public
//! modulus alone.
//!
//! ## Security
//!
//! None. Per-character encryption is a substitution cipher over an
//! alphabet of codes, deterministic and unpadded, and the demo-sized
//! moduli factor in microseconds. That is the point: this crate exists
//! to show why the textbook scheme must never leave the classroom.
//! Private exponents are still zeroized on drop via the `zeroize` crate.
//!
//! ## Example
//!
//! ```rust
//! use textbook_rsa::{cipher, KeyPair};
//! use num_bigint_dig::BigUint;
//!
//! let pair = KeyPair::from_primes(&BigUint::from(61u32), &BigUint::from(53u32))?;
//! let encrypted = cipher::encrypt(pair.public_key().n(), pair.public_key().e(), "HI")?;
//! assert_eq!(encrypted.to_string(), "[1087, 286]");
//!
//! let decrypted = cipher::decrypt(pair.private_key().n(), pair.private_key().d(), &encrypted)?;
//! assert_eq!(decrypted, "HI");
//!
//! // the attack: all it takes is the public modulus
//! let stolen = KeyPair::recover(pair.public_key().n())?;
//! assert_eq!(stolen.private_key().d(), pair.private_key().d());
//! # Ok::<(), textbook_rsa::Error>(())
//! ```

pub mod arith;
pub mod cipher;
pub mod factor;

mod ciphertext;
mod error;
mod key;

pub use cipher::{Decrypt, Encrypt};
pub use ciphertext::Ciphertext;
pub use error::{Error, Result};
pub use key::{derive_private, derive_public, KeyPair, PrivateKey, PublicKey, MIN_MODULUS};
