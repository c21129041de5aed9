// -*- mode: rust; -*-
//
// This file is part of multiplicity.
// See LICENSE for licensing information.

//! Carrier implementations for `num-bigint`'s arbitrary-precision integers.
//!
//! `BigUint` models the naturals and `BigInt` the integers, with the same
//! finiteness closed forms as the primitive backend. Powers never
//! overflow here, so the provided `pow_divides` is used as is.

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, ToPrimitive, Zero};

use super::primality;
use crate::traits::{Carrier, DecideFinite, DivExact, IsPrime, MonoidWithZero};

impl Carrier for BigUint {
    fn one() -> BigUint {
        <BigUint as One>::one()
    }

    fn multiply(&self, other: &BigUint) -> BigUint {
        self * other
    }

    fn power(&self, n: u32) -> BigUint {
        BigUint::pow(self, n)
    }

    fn divides(&self, other: &BigUint) -> bool {
        if Zero::is_zero(self) {
            return Zero::is_zero(other);
        }
        Zero::is_zero(&(other % self))
    }

    fn is_unit(&self) -> bool {
        One::is_one(self)
    }
}

impl MonoidWithZero for BigUint {
    fn zero() -> BigUint {
        <BigUint as Zero>::zero()
    }

    fn is_zero(&self) -> bool {
        Zero::is_zero(self)
    }
}

impl DecideFinite for BigUint {
    fn multiplicity_finite(divisor: &BigUint, dividend: &BigUint) -> bool {
        !One::is_one(divisor) && !Zero::is_zero(dividend)
    }
}

impl DivExact for BigUint {
    fn divide_exact(&self, divisor: &BigUint) -> Option<BigUint> {
        if Zero::is_zero(divisor) {
            return Zero::is_zero(self).then(<BigUint as Zero>::zero);
        }
        let (q, r) = self.div_rem(divisor);
        Zero::is_zero(&r).then_some(q)
    }
}

impl IsPrime for BigUint {
    /// Miller–Rabin. Values that fit in a `u128` take the fixed-width path;
    /// wider ones run twenty rounds with `modpow`, so a composite passes
    /// with probability at most \( 4^{-20} \).
    fn is_prime(&self) -> bool {
        if let Some(n) = self.to_u128() {
            return primality::is_prime_u128(n);
        }
        for &p in primality::WITNESSES.iter() {
            if Zero::is_zero(&(self % p)) {
                return false;
            }
        }
        let one = <BigUint as One>::one();
        let n_minus_one = self - &one;
        let s = n_minus_one.trailing_zeros().unwrap_or(0);
        let d = &n_minus_one >> s;
        primality::WITNESSES.iter().all(|&a| {
            let mut x = BigUint::from(a).modpow(&d, self);
            if x == one || x == n_minus_one {
                return true;
            }
            for _ in 1..s {
                x = &x * &x % self;
                if x == n_minus_one {
                    return true;
                }
            }
            false
        })
    }
}

impl Carrier for BigInt {
    fn one() -> BigInt {
        <BigInt as One>::one()
    }

    fn multiply(&self, other: &BigInt) -> BigInt {
        self * other
    }

    fn power(&self, n: u32) -> BigInt {
        BigInt::pow(self, n)
    }

    fn divides(&self, other: &BigInt) -> bool {
        // `Integer::divides` is also in scope, with the arguments reversed
        Carrier::divides(self.magnitude(), other.magnitude())
    }

    fn pow_divides(&self, n: u32, other: &BigInt) -> bool {
        Carrier::pow_divides(self.magnitude(), n, other.magnitude())
    }

    fn is_unit(&self) -> bool {
        One::is_one(self.magnitude())
    }
}

impl MonoidWithZero for BigInt {
    fn zero() -> BigInt {
        <BigInt as Zero>::zero()
    }

    fn is_zero(&self) -> bool {
        Zero::is_zero(self)
    }
}

impl DecideFinite for BigInt {
    fn multiplicity_finite(divisor: &BigInt, dividend: &BigInt) -> bool {
        BigUint::multiplicity_finite(divisor.magnitude(), dividend.magnitude())
    }
}

impl DivExact for BigInt {
    fn divide_exact(&self, divisor: &BigInt) -> Option<BigInt> {
        if Zero::is_zero(divisor) {
            return Zero::is_zero(self).then(<BigInt as Zero>::zero);
        }
        let (q, r) = self.div_rem(divisor);
        Zero::is_zero(&r).then_some(q)
    }
}

impl IsPrime for BigInt {
    fn is_prime(&self) -> bool {
        self.magnitude().is_prime()
    }
}
