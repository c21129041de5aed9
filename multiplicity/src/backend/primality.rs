// -*- mode: rust; -*-
//
// This file is part of multiplicity.
// See LICENSE for licensing information.

//! Miller–Rabin primality testing over `u128`.
//!
//! With the first twelve primes as bases the test is exact for every
//! \\( n < 3.3 \cdot 10^{24} \\), which covers all of `u64`. Above that,
//! eight further bases are used and a composite survives with probability
//! at most \\( 4^{-20} \\).

/// The first twenty primes, used both for trial division and as witnesses.
pub(crate) const WITNESSES: [u64; 20] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71,
];

/// Bases needed for an exact answer below this bound.
const EXACT_WITNESSES: usize = 12;
const EXACT_BOUND: u128 = 3_317_044_064_679_887_385_961_981;

/// `(a + b) mod m` for `a, b < m`, without overflowing.
#[inline]
fn add_mod(a: u128, b: u128, m: u128) -> u128 {
    if a >= m - b {
        a - (m - b)
    } else {
        a + b
    }
}

/// `(a * b) mod m` for `a, b < m`.
fn mul_mod(a: u128, b: u128, m: u128) -> u128 {
    if m <= u64::MAX as u128 {
        // a, b < 2^64 so the product fits
        return (a * b) % m;
    }
    let (mut a, mut b) = (a, b);
    let mut acc = 0;
    while b > 0 {
        if b & 1 == 1 {
            acc = add_mod(acc, a, m);
        }
        a = add_mod(a, a, m);
        b >>= 1;
    }
    acc
}

fn pow_mod(base: u128, exp: u128, m: u128) -> u128 {
    let mut acc = 1 % m;
    let mut base = base % m;
    let mut exp = exp;
    while exp > 0 {
        if exp & 1 == 1 {
            acc = mul_mod(acc, base, m);
        }
        base = mul_mod(base, base, m);
        exp >>= 1;
    }
    acc
}

/// Return true if odd `n` is a strong probable prime to base `a`, where
/// \\( n - 1 = d \cdot 2^s \\) with `d` odd.
fn strong_probable_prime(n: u128, d: u128, s: u32, a: u128) -> bool {
    let mut x = pow_mod(a, d, n);
    if x == 1 || x == n - 1 {
        return true;
    }
    for _ in 1..s {
        x = mul_mod(x, x, n);
        if x == n - 1 {
            return true;
        }
    }
    false
}

/// Test `n` for primality.
pub(crate) fn is_prime_u128(n: u128) -> bool {
    if n < 2 {
        return false;
    }
    for &p in WITNESSES.iter() {
        if n % p as u128 == 0 {
            return n == p as u128;
        }
    }
    // n is odd and larger than every witness from here on
    let s = (n - 1).trailing_zeros();
    let d = (n - 1) >> s;
    let rounds = if n < EXACT_BOUND {
        EXACT_WITNESSES
    } else {
        WITNESSES.len()
    };
    WITNESSES[..rounds]
        .iter()
        .all(|&a| strong_probable_prime(n, d, s, a as u128))
}
