// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::arith;
use crate::factor;
use crate::{Error, Result};

use num_bigint_dig::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::One;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Smallest modulus the key derivation accepts.
///
/// Every character code the cipher handles must stay below n; a floor of
/// 150 keeps the printable ASCII range inside even the smallest keys.
pub const MIN_MODULUS: u32 = 150;

/// RSA public key (n, e).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    n: BigUint,
    e: BigUint,
}

impl PublicKey {
    #[inline]
    pub fn n(&self) -> &BigUint {
        &self.n
    }

    #[inline]
    pub fn e(&self) -> &BigUint {
        &self.e
    }
}

/// RSA private key (n, d) with automatic secure erasure.
///
/// `Zeroize` and `ZeroizeOnDrop` wipe the exponent when the key is
/// dropped. `num-bigint-dig` implements `Zeroize` for `BigUint`, which
/// recursively zeroes the underlying heap-allocated digit vectors.
/// There is no `Debug` impl, so d cannot leak through formatting by
/// accident.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey {
    n: BigUint,
    d: BigUint,
}

impl PrivateKey {
    #[inline]
    pub fn n(&self) -> &BigUint {
        &self.n
    }

    /// The private exponent. Rendering it anywhere is the caller's
    /// explicit decision.
    #[inline]
    pub fn d(&self) -> &BigUint {
        &self.d
    }
}

fn ensure_prime(value: &BigUint) -> Result<()> {
    if !arith::is_prime(value) {
        return Err(Error::NotPrime(value.clone()));
    }
    Ok(())
}

/// Derives the public key from two primes.
///
/// The modulus is n = p·q and the exponent is the smallest odd e ≥ 3
/// that is coprime with φ(n) = (p−1)(q−1) and equal to neither prime.
/// Candidates run 3, 5, 7, … so the result is deterministic in p and q.
///
/// ## Errors
///
/// - [`Error::NotPrime`] if either input fails the primality check.
/// - [`Error::ModulusTooSmall`] if n ≤ 150; single-character codes would
///   not reliably fit below such a modulus.
/// - [`Error::NoValidExponent`] if the search exhausts every candidate
///   below φ(n).
pub fn derive_public(p: &BigUint, q: &BigUint) -> Result<PublicKey> {
    ensure_prime(p)?;
    ensure_prime(q)?;

    let n = p * q;
    if n <= BigUint::from(MIN_MODULUS) {
        return Err(Error::ModulusTooSmall { n });
    }

    let one = BigUint::one();
    let phi = (p - &one) * (q - &one);

    let two = BigUint::from(2u32);
    let mut e = BigUint::from(3u32);
    while e < phi {
        if arith::gcd(&e, &phi).is_one() && e != *p && e != *q {
            return Ok(PublicKey { n, e });
        }
        e += &two;
    }

    Err(Error::NoValidExponent)
}

/// Derives the private key matching a public exponent.
///
/// Runs the extended Euclidean algorithm on (e, φ), reduces the Bezout
/// coefficient of e into [0, φ) to obtain d, and verifies d·e ≡ 1 (mod φ)
/// before handing the key out.
///
/// ## Errors
///
/// - [`Error::NotPrime`] if either prime fails the primality check.
/// - [`Error::InvalidArgument`] if e is zero.
/// - [`Error::ExponentNotCoprime`] if gcd(e, φ) ≠ 1.
/// - [`Error::KeyDerivationFailed`] if the inverse check fails, as it
///   does for the trivial totient φ = 1.
pub fn derive_private(e: &BigUint, p: &BigUint, q: &BigUint) -> Result<PrivateKey> {
    ensure_prime(p)?;
    ensure_prime(q)?;

    let one = BigUint::one();
    let phi = (p - &one) * (q - &one);

    let (g, (s, _)) = arith::extended_gcd(e, &phi)?;
    if !g.is_one() {
        return Err(Error::ExponentNotCoprime { e: e.clone() });
    }

    // reduce the signed coefficient into [0, phi)
    let d = s
        .mod_floor(&BigInt::from(phi.clone()))
        .to_biguint()
        .ok_or(Error::KeyDerivationFailed)?;

    if (&d * e) % &phi != one {
        return Err(Error::KeyDerivationFailed);
    }

    Ok(PrivateKey { n: p * q, d })
}

/// Matched public/private key pair.
#[derive(PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct KeyPair {
    #[zeroize(skip)]
    public: PublicKey,
    secret: PrivateKey,
}

impl KeyPair {
    /// Derives a full key pair from two primes.
    ///
    /// `p == q` is accepted, mirroring the classic construction this
    /// crate teaches, but such keys do not round-trip: the totient is
    /// computed as (p−1)(q−1), which for n = p² is not φ(p²) = p(p−1),
    /// so decryption inverts encryption only on a handful of residues.
    pub fn from_primes(p: &BigUint, q: &BigUint) -> Result<Self> {
        let public = derive_public(p, q)?;
        let secret = derive_private(public.e(), p, q)?;
        Ok(Self { public, secret })
    }

    /// Reconstructs the key pair from a bare public modulus.
    ///
    /// This is the attack the crate exists to demonstrate: factor n,
    /// then rerun the ordinary derivation on the recovered pair. The
    /// factor pair is not trusted; derivation re-validates it, so a
    /// modulus with more than two prime factors fails with
    /// [`Error::NotPrime`] instead of producing a bogus key.
    ///
    /// ## Errors
    ///
    /// - [`Error::FactorizationFailed`] if both factorization stages
    ///   give up (prime or degenerate n).
    /// - Any derivation error for factor pairs that make no RSA key.
    pub fn recover(n: &BigUint) -> Result<Self> {
        let (p, q) = factor::factorize(n).ok_or(Error::FactorizationFailed)?;
        Self::from_primes(&p, &q)
    }

    #[inline]
    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    #[inline]
    pub fn private_key(&self) -> &PrivateKey {
        &self.secret
    }
}
