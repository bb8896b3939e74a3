// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{Error, Result};

use num_bigint_dig::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

/// Greatest common divisor by iterative Euclid.
///
/// `gcd(x, 0) == x` for any `x`, including `gcd(0, 0) == 0`.
pub fn gcd(a: &BigUint, b: &BigUint) -> BigUint {
    let mut a = a.clone();
    let mut b = b.clone();
    while !b.is_zero() {
        let r = &a % &b;
        a = b;
        b = r;
    }
    a
}

/// Extended Euclidean algorithm.
///
/// Returns `(g, (s, t))` with `a·s + b·t = g = gcd(a, b)`. The coefficients
/// are signed; callers that want a modular inverse reduce `s` into the
/// proper residue range themselves.
///
/// Both operands must be nonzero.
pub fn extended_gcd(a: &BigUint, b: &BigUint) -> Result<(BigUint, (BigInt, BigInt))> {
    if a.is_zero() || b.is_zero() {
        return Err(Error::InvalidArgument);
    }

    // run on (max, min), swap the coefficients back at the end
    let (mut m, mut n) = if a > b {
        (a.clone(), b.clone())
    } else {
        (b.clone(), a.clone())
    };

    let (mut s1, mut s2) = (BigInt::one(), BigInt::zero());
    let (mut t1, mut t2) = (BigInt::zero(), BigInt::one());

    while !n.is_zero() {
        let (q, r) = m.div_rem(&n);
        m = n;
        n = r;

        let q = BigInt::from(q);
        let s_next = &s1 - &q * &s2;
        s1 = s2;
        s2 = s_next;

        let t_next = &t1 - &q * &t2;
        t1 = t2;
        t2 = t_next;
    }

    let coefficients = if a > b { (s1, t1) } else { (t1, s1) };
    Ok((m, coefficients))
}

/// Modular exponentiation by binary square-and-multiply, least significant
/// bit first.
///
/// The running square folds into the accumulator whenever the current
/// exponent bit is set, so every bit of the exponent is touched exactly
/// once. `modulus` must be nonzero; anything mod 1 is zero.
pub fn mod_pow(base: &BigUint, exponent: &BigUint, modulus: &BigUint) -> BigUint {
    debug_assert!(!modulus.is_zero(), "mod_pow: zero modulus");

    if modulus.is_one() {
        return BigUint::zero();
    }

    let mut result = BigUint::one();
    let mut square = base % modulus;
    let mut exponent = exponent.clone();

    while !exponent.is_zero() {
        if exponent.is_odd() {
            result = &result * &square % modulus;
        }
        square = &square * &square % modulus;
        exponent >>= 1;
    }

    result
}

/// Deterministic primality test by trial division.
///
/// Tries every odd divisor up to `⌊√n⌋`, so the cost grows with the square
/// root of `n`. Fine for the demo-sized operands this crate works with; do
/// not point it at 2048-bit candidates.
pub fn is_prime(n: &BigUint) -> bool {
    let two = BigUint::from(2u32);
    if n < &two {
        return false;
    }
    if *n == two {
        return true;
    }
    if n.is_even() {
        return false;
    }

    let limit = n.sqrt();
    let mut divisor = BigUint::from(3u32);
    while divisor <= limit {
        if (n % &divisor).is_zero() {
            return false;
        }
        divisor += &two;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: u64) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn gcd_known_values() {
        assert_eq!(gcd(&big(48), &big(18)), big(6));
        assert_eq!(gcd(&big(17), &big(5)), big(1));
        assert_eq!(gcd(&big(12), &big(8)), big(4));
    }

    #[test]
    fn gcd_zero_identity() {
        assert_eq!(gcd(&big(42), &big(0)), big(42));
        assert_eq!(gcd(&big(0), &big(42)), big(42));
        assert_eq!(gcd(&big(0), &big(0)), big(0));
    }

    #[test]
    fn gcd_euclid_recurrence() {
        let a = big(3233);
        let b = big(360);
        assert_eq!(gcd(&a, &b), gcd(&b, &(&a % &b)));
    }

    #[test]
    fn extended_gcd_bezout_identity() {
        let cases = [(240u64, 46u64), (7, 3120), (3120, 7), (17, 17), (99991, 2)];
        for (a, b) in cases {
            let (a, b) = (big(a), big(b));
            let (g, (s, t)) = extended_gcd(&a, &b).unwrap();
            let lhs = BigInt::from(a.clone()) * &s + BigInt::from(b.clone()) * &t;
            assert_eq!(lhs, BigInt::from(g.clone()), "Bezout identity for ({a}, {b})");
            assert_eq!(g, gcd(&a, &b));
        }
    }

    #[test]
    fn extended_gcd_small_pinned() {
        // 5*(-1) + 3*2 = 1
        let (g, (s, t)) = extended_gcd(&big(5), &big(3)).unwrap();
        assert_eq!(g, big(1));
        assert_eq!(s, BigInt::from(-1));
        assert_eq!(t, BigInt::from(2));
    }

    #[test]
    fn extended_gcd_rejects_zero() {
        assert_eq!(extended_gcd(&big(0), &big(5)), Err(Error::InvalidArgument));
        assert_eq!(extended_gcd(&big(5), &big(0)), Err(Error::InvalidArgument));
    }

    #[test]
    fn mod_pow_known_values() {
        assert_eq!(mod_pow(&big(2), &big(10), &big(1000)), big(24));
        assert_eq!(mod_pow(&big(72), &big(7), &big(3233)), big(1087));
        assert_eq!(mod_pow(&big(1087), &big(1783), &big(3233)), big(72));
    }

    #[test]
    fn mod_pow_edge_exponents() {
        assert_eq!(mod_pow(&big(999), &big(0), &big(17)), big(1));
        assert_eq!(mod_pow(&big(999), &big(123), &big(1)), big(0));
        assert_eq!(mod_pow(&big(0), &big(5), &big(17)), big(0));
    }

    #[test]
    fn mod_pow_fermat_little_theorem() {
        // a^(p-1) ≡ 1 (mod p) for prime p and a not a multiple of p
        for a in [2u64, 5, 10, 690] {
            assert_eq!(mod_pow(&big(a), &big(690), &big(691)), big(1));
        }
    }

    #[test]
    fn mod_pow_matches_library_oracle() {
        let base = big(123_456_789);
        let exponent = big(987_654);
        let modulus = big(1_000_003);
        assert_eq!(
            mod_pow(&base, &exponent, &modulus),
            base.modpow(&exponent, &modulus)
        );
    }

    #[test]
    fn is_prime_small_values() {
        assert!(!is_prime(&big(0)));
        assert!(!is_prime(&big(1)));
        assert!(is_prime(&big(2)));
        assert!(is_prime(&big(3)));
        assert!(!is_prime(&big(4)));
        assert!(is_prime(&big(61)));
        assert!(is_prime(&big(53)));
        assert!(!is_prime(&big(3233)));
        assert!(is_prime(&big(104_729)));
    }

    #[test]
    fn is_prime_agrees_with_sieve() {
        let limit = 10_000usize;
        let mut sieve = vec![true; limit + 1];
        sieve[0] = false;
        sieve[1] = false;
        for i in 2..=limit {
            if sieve[i] {
                for multiple in (i * i..=limit).step_by(i) {
                    sieve[multiple] = false;
                }
            }
        }
        for (i, &expected) in sieve.iter().enumerate() {
            assert_eq!(is_prime(&big(i as u64)), expected, "disagrees with sieve at {i}");
        }
    }
}
