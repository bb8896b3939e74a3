// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::arith::gcd;

use num_bigint_dig::{BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::rngs::OsRng;

/// Iteration budget for Pollard's rho, shared across restarts.
pub const DEFAULT_MAX_ATTEMPTS: usize = 100_000;

/// How many fresh starting points rho may try after collapsed walks.
pub const MAX_RESTARTS: u32 = 16;

/// Smallest prime factor of `n` by direct search, or `n` itself when no
/// divisor at most `⌊√n⌋` exists (`n` prime or one).
///
/// Checks 2 first, then odd candidates only. Zero counts as even and
/// maps to 2.
pub fn trial_division(n: &BigUint) -> BigUint {
    if n.is_even() {
        return BigUint::from(2u32);
    }

    let two = BigUint::from(2u32);
    let limit = n.sqrt();
    let mut divisor = BigUint::from(3u32);
    while divisor <= limit {
        if (n % &divisor).is_zero() {
            return divisor;
        }
        divisor += &two;
    }
    n.clone()
}

/// Pollard's rho with Floyd cycle detection.
///
/// Walks x ↦ x² + 1 (mod n) at two speeds and extracts a factor from
/// gcd(|x − y|, n). Probabilistic: `Some` holds a nontrivial factor of
/// `n`, `None` means the budget ran out. The factor is NOT checked for
/// primality; callers that need primes validate downstream.
pub fn pollards_rho(n: &BigUint) -> Option<BigUint> {
    pollards_rho_with_attempts(n, DEFAULT_MAX_ATTEMPTS)
}

/// Pollard's rho with a configurable iteration budget.
///
/// The budget is shared across restarts: a walk whose gcd jumps straight
/// to `n` collapsed into a cycle and restarts from a fresh random point,
/// at most [`MAX_RESTARTS`] times, without resetting the budget. Prime
/// inputs always exhaust, since only trivial gcds exist for them.
pub fn pollards_rho_with_attempts(n: &BigUint, max_attempts: usize) -> Option<BigUint> {
    let one = BigUint::one();
    let two = BigUint::from(2u32);

    // no room for a random start in [2, n-1], or no nontrivial split at all
    if *n < BigUint::from(4u32) {
        return None;
    }

    let f = |x: &BigUint| -> BigUint { (x * x + &one) % n };

    let mut rng = OsRng;
    let mut attempts = 0usize;

    for _ in 0..MAX_RESTARTS {
        let mut x = rng.gen_biguint_range(&two, n);
        let mut y = x.clone();
        let mut d = one.clone();

        while d == one {
            if attempts >= max_attempts {
                return None;
            }
            attempts += 1;

            x = f(&x);
            y = f(&f(&y));

            let diff = if x > y { &x - &y } else { &y - &x };
            d = gcd(&diff, n);
        }

        if d != *n {
            return Some(d);
        }
        // collapsed walk, try another starting point
    }

    None
}

/// Splits `n` into an ordered factor pair.
///
/// Trial division runs first and is complete for composites, so the rho
/// stage only ever sees numbers trial division gave up on. The halves
/// come back in discovery order, smallest factor first on the trial
/// path, and are reported as found, without any primality check.
///
/// `None` when no factor exists to find (prime inputs and one).
pub fn factorize(n: &BigUint) -> Option<(BigUint, BigUint)> {
    let factor = trial_division(n);
    if factor != *n {
        let cofactor = n / &factor;
        return Some((factor, cofactor));
    }

    let factor = pollards_rho(n)?;
    let cofactor = n / &factor;
    Some((factor, cofactor))
}
