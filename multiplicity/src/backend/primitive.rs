// -*- mode: rust; -*-
//
// This file is part of multiplicity.
// See LICENSE for licensing information.

//! Carrier implementations for the primitive integer types.
//!
//! Unsigned types model the naturals, where the multiplicity of `a` in `b`
//! is finite iff \\( a \ne 1 \wedge b > 0 \\). Signed types model the
//! integers, where it is finite iff \\( |a| \ne 1 \wedge b \ne 0 \\).
//! Divisibility between signed values is decided on their magnitudes,
//! so `i8::MIN` and `-1` need no special casing.
//!
//! No power is formed unless it fits: if \\( a^n \\) overflows the type,
//! its magnitude exceeds every representable nonzero value and so it
//! divides only zero.

use super::primality;
use crate::traits::{Carrier, DecideFinite, DivExact, IsPrime, MonoidWithZero};

macro_rules! impl_unsigned_carrier {
    ($($t:ty),* $(,)?) => {$(
        impl Carrier for $t {
            #[inline]
            fn one() -> $t {
                1
            }

            /// Multiplication as `*`, so overflow panics in debug builds.
            #[inline]
            fn multiply(&self, other: &$t) -> $t {
                *self * *other
            }

            #[inline]
            fn power(&self, n: u32) -> $t {
                <$t>::pow(*self, n)
            }

            #[inline]
            fn divides(&self, other: &$t) -> bool {
                match other.checked_rem(*self) {
                    Some(r) => r == 0,
                    // only zero is a multiple of zero
                    None => *other == 0,
                }
            }

            #[inline]
            fn pow_divides(&self, n: u32, other: &$t) -> bool {
                match <$t>::checked_pow(*self, n) {
                    Some(d) => d.divides(other),
                    None => *other == 0,
                }
            }

            #[inline]
            fn is_unit(&self) -> bool {
                *self == 1
            }
        }

        impl MonoidWithZero for $t {
            #[inline]
            fn zero() -> $t {
                0
            }

            #[inline]
            fn is_zero(&self) -> bool {
                *self == 0
            }
        }

        impl DecideFinite for $t {
            #[inline]
            fn multiplicity_finite(divisor: &$t, dividend: &$t) -> bool {
                *divisor != 1 && *dividend > 0
            }
        }

        impl DivExact for $t {
            fn divide_exact(&self, divisor: &$t) -> Option<$t> {
                if !divisor.divides(self) {
                    return None;
                }
                match self.checked_div(*divisor) {
                    Some(q) => Some(q),
                    // 0 = 0 * q for any q
                    None => Some(0),
                }
            }
        }

        impl IsPrime for $t {
            /// Miller–Rabin, exact for every value up to `u64::MAX`.
            #[inline]
            fn is_prime(&self) -> bool {
                // unsigned widening is lossless
                primality::is_prime_u128(*self as u128)
            }
        }
    )*};
}

macro_rules! impl_signed_carrier {
    ($(($t:ty, $u:ty)),* $(,)?) => {$(
        impl Carrier for $t {
            #[inline]
            fn one() -> $t {
                1
            }

            /// Multiplication as `*`, so overflow panics in debug builds.
            #[inline]
            fn multiply(&self, other: &$t) -> $t {
                *self * *other
            }

            #[inline]
            fn power(&self, n: u32) -> $t {
                <$t>::pow(*self, n)
            }

            #[inline]
            fn divides(&self, other: &$t) -> bool {
                self.unsigned_abs().divides(&other.unsigned_abs())
            }

            #[inline]
            fn pow_divides(&self, n: u32, other: &$t) -> bool {
                self.unsigned_abs().pow_divides(n, &other.unsigned_abs())
            }

            #[inline]
            fn is_unit(&self) -> bool {
                self.unsigned_abs() == 1
            }
        }

        impl MonoidWithZero for $t {
            #[inline]
            fn zero() -> $t {
                0
            }

            #[inline]
            fn is_zero(&self) -> bool {
                *self == 0
            }
        }

        impl DecideFinite for $t {
            #[inline]
            fn multiplicity_finite(divisor: &$t, dividend: &$t) -> bool {
                <$u as DecideFinite>::multiplicity_finite(
                    &divisor.unsigned_abs(),
                    &dividend.unsigned_abs(),
                )
            }
        }

        impl DivExact for $t {
            /// `None` for `MIN / -1`, whose quotient is not representable.
            fn divide_exact(&self, divisor: &$t) -> Option<$t> {
                if !divisor.divides(self) {
                    return None;
                }
                if *divisor == 0 {
                    return Some(0);
                }
                self.checked_div(*divisor)
            }
        }

        impl IsPrime for $t {
            /// The primes of \\( \mathbb{Z} \\) are \\( \pm p \\) for a prime
            /// natural `p`.
            fn is_prime(&self) -> bool {
                self.unsigned_abs().is_prime()
            }
        }
    )*};
}

impl_unsigned_carrier!(u8, u16, u32, u64, u128, usize);

impl_signed_carrier!(
    (i8, u8),
    (i16, u16),
    (i32, u32),
    (i64, u64),
    (i128, u128),
    (isize, usize),
);
