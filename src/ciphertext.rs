// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt;
use std::str::FromStr;

use num_bigint_dig::BigUint;

use crate::error::{Error, Result};

/// Sequence of encrypted symbols, one per character of the plaintext.
///
/// The textual form is the bracketed list the interactive shell prints
/// and accepts back, e.g. `[1087, 286]`. Parsing also tolerates the bare
/// comma-separated form without brackets, and the empty list round-trips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ciphertext {
    symbols: Vec<BigUint>,
}

impl Ciphertext {
    pub fn new(symbols: Vec<BigUint>) -> Self {
        Self { symbols }
    }

    #[inline]
    pub fn symbols(&self) -> &[BigUint] {
        &self.symbols
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl From<Vec<BigUint>> for Ciphertext {
    fn from(symbols: Vec<BigUint>) -> Self {
        Self::new(symbols)
    }
}

impl<'a> IntoIterator for &'a Ciphertext {
    type Item = &'a BigUint;
    type IntoIter = std::slice::Iter<'a, BigUint>;

    fn into_iter(self) -> Self::IntoIter {
        self.symbols.iter()
    }
}

impl fmt::Display for Ciphertext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, symbol) in self.symbols.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{symbol}")?;
        }
        write!(f, "]")
    }
}

impl FromStr for Ciphertext {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let inner = s.trim();
        let inner = inner.strip_prefix('[').unwrap_or(inner);
        let inner = inner.strip_suffix(']').unwrap_or(inner);

        if inner.trim().is_empty() {
            return Ok(Self::new(Vec::new()));
        }

        inner
            .split(',')
            .map(|part| {
                let part = part.trim();
                part.parse::<BigUint>()
                    .map_err(|_| Error::InvalidCiphertext(format!("bad symbol {part:?}")))
            })
            .collect::<Result<Vec<_>>>()
            .map(Self::new)
    }
}
