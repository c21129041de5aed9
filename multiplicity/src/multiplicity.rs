// -*- mode: rust; -*-
//
// This file is part of multiplicity.
// See LICENSE for licensing information.

//! The multiplicity of a divisor.
//!
//! The multiplicity of `a` in `b` is the largest `n` such that
//! \\( a^n \mid b \\), or `Top` when every power of `a` divides `b`. It is
//! computed as the least `n` with \\( a^{n+1} \nmid b \\), once the
//! carrier's [`DecideFinite`] oracle has said such an `n` exists.
//!
//! ```
//! use multiplicity::{multiplicity, ExtendedNat};
//!
//! assert_eq!(multiplicity(&2u32, &12), 2);
//! assert_eq!(multiplicity(&3u32, &0), ExtendedNat::TOP);
//! assert_eq!(multiplicity(&1u32, &5), ExtendedNat::TOP);
//! assert_eq!(multiplicity(&2i64, &-12), 2);
//! ```
//!
//! # Extracting the exponent
//!
//! An infinite multiplicity has no concrete value. A [`Finite`] witness
//! can only be constructed for a finite pair, so extraction through it
//! cannot fail:
//!
//! ```
//! use multiplicity::Finite;
//!
//! let w = Finite::new(&2u64, &40).unwrap();
//! assert_eq!(w.get(), 3);
//! assert_eq!(w.cofactor(), Ok(5));
//!
//! assert!(Finite::new(&1u64, &40).is_none());
//! ```

use crate::enat::ExtendedNat;
use crate::errors::Error;
use crate::find::find;
use crate::traits::{DecideFinite, DivExact};

/// Compute the multiplicity of `divisor` in `dividend`.
///
/// # Returns
///
/// * `Finite(m)` with \\( a^m \mid b \\) and \\( a^{m+1} \nmid b \\);
/// * `Top` if \\( a^k \mid b \\) for every `k`. This is the case when
///   `divisor` is a unit or `dividend` is zero.
pub fn multiplicity<T>(divisor: &T, dividend: &T) -> ExtendedNat
where
    T: DecideFinite,
{
    find(T::multiplicity_finite(divisor, dividend), |n| match n.checked_add(1) {
        Some(k) => !divisor.pow_divides(k, dividend),
        None => true,
    })
}

/// Return true if the multiplicity of `divisor` in `dividend` is finite.
///
/// This consults the carrier's closed-form oracle and performs no search.
#[inline]
pub fn is_finite<T>(divisor: &T, dividend: &T) -> bool
where
    T: DecideFinite,
{
    T::multiplicity_finite(divisor, dividend)
}

/// Return true if \\( k \le \\) the multiplicity of `divisor` in
/// `dividend`, which holds exactly when \\( a^k \mid b \\).
pub fn le_multiplicity<T>(divisor: &T, dividend: &T, k: u32) -> bool
where
    T: DecideFinite,
{
    multiplicity(divisor, dividend) >= k
}

/// Evidence that the multiplicity of a divisor in a dividend is finite,
/// carrying the computed exponent.
///
/// Construct one with [`Finite::new`]; it returns `None` for an infinite
/// pair, so holding a `Finite` is the precondition for extraction.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Finite<'a, T> {
    divisor: &'a T,
    dividend: &'a T,
    exponent: u32,
}

impl<'a, T> Finite<'a, T>
where
    T: DecideFinite,
{
    /// Compute the multiplicity of `divisor` in `dividend`, returning a
    /// witness if it is finite and `None` otherwise.
    pub fn new(divisor: &'a T, dividend: &'a T) -> Option<Self> {
        match multiplicity(divisor, dividend) {
            ExtendedNat::Finite(exponent) => Some(Finite {
                divisor,
                dividend,
                exponent,
            }),
            ExtendedNat::Top => None,
        }
    }

    /// The multiplicity as a natural number.
    #[inline]
    pub fn get(&self) -> u32 {
        self.exponent
    }

    /// The divisor this witness was computed for.
    pub fn divisor(&self) -> &'a T {
        self.divisor
    }

    /// The dividend this witness was computed for.
    pub fn dividend(&self) -> &'a T {
        self.dividend
    }

    /// Return the `c` with \\( b = a^m \cdot c \\), where `m` is the
    /// multiplicity. The divisor does not divide `c`.
    ///
    /// # Returns
    ///
    /// `Err(Error::InexactDivision)` if the carrier's `divide_exact` refuses a
    /// divisor its `divides` accepted.
    pub fn cofactor(&self) -> Result<T, Error>
    where
        T: DivExact,
    {
        // Divide the divisor out one factor at a time: `a^m` itself need not
        // be representable (`2^7` in `i8` for `b = i8::MIN`), but every
        // partial quotient is smaller than `b` in magnitude.
        let mut c = self.dividend.clone();
        for _ in 0..self.exponent {
            c = c.divide_exact(self.divisor).ok_or(Error::InexactDivision)?;
        }
        Ok(c)
    }
}

impl<'a, T> From<Finite<'a, T>> for ExtendedNat {
    fn from(w: Finite<'a, T>) -> ExtendedNat {
        ExtendedNat::Finite(w.exponent)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::traits::Carrier;

    #[test]
    fn concrete_naturals() {
        assert_eq!(multiplicity(&2u32, &12), 2);
        assert!(is_finite(&2u32, &12));
        assert!(!is_finite(&1u32, &5));
        assert!(!is_finite(&3u32, &0));
        assert_eq!(multiplicity(&1u32, &5), ExtendedNat::TOP);
        assert_eq!(multiplicity(&3u32, &0), ExtendedNat::TOP);
    }

    #[test]
    fn zero_divisor() {
        assert_eq!(multiplicity(&0u32, &7), 0);
        assert_eq!(multiplicity(&0i32, &-7), 0);
        assert_eq!(multiplicity(&0u32, &0), ExtendedNat::TOP);
    }

    #[test]
    fn zero_iff_not_divides() {
        for a in 0..30u32 {
            for b in 0..60u32 {
                let m = multiplicity(&a, &b);
                assert_eq!(m == 0, !a.divides(&b), "a = {}, b = {}", a, b);
            }
        }
    }

    #[test]
    fn defining_invariant_over_small_naturals() {
        for a in 2..20u32 {
            for b in 1..500u32 {
                let m = multiplicity(&a, &b).try_get().unwrap();
                assert!(a.pow_divides(m, &b));
                assert!(!a.pow_divides(m + 1, &b));
            }
        }
    }

    #[test]
    fn le_multiplicity_matches_pow_divides() {
        for k in 0..8u32 {
            assert_eq!(le_multiplicity(&2u32, &24, k), 2u32.pow_divides(k, &24));
            assert_eq!(le_multiplicity(&-3i32, &-162, k), 3u32.pow_divides(k, &162));
        }
        assert!(le_multiplicity(&5u32, &0, u32::MAX));
    }

    #[test]
    fn no_overflow_near_type_bounds() {
        assert_eq!(multiplicity(&2u8, &128), 7);
        assert_eq!(multiplicity(&2u64, &(1u64 << 63)), 63);
        assert_eq!(multiplicity(&2i8, &i8::MIN), 7);
        assert_eq!(multiplicity(&-1i8, &i8::MIN), ExtendedNat::TOP);
        assert_eq!(multiplicity(&i128::MIN, &i128::MIN), 1);
        assert_eq!(multiplicity(&u128::MAX, &u128::MAX), 1);
        assert_eq!(multiplicity(&3u128, &u128::MAX), 1);
    }

    #[test]
    fn witness_extraction() {
        let w = Finite::new(&2u32, &12).unwrap();
        assert_eq!(w.get(), 2);
        assert_eq!(*w.divisor(), 2);
        assert_eq!(*w.dividend(), 12);
        assert_eq!(ExtendedNat::from(w), 2);
        assert_eq!(w.cofactor(), Ok(3));

        assert!(Finite::new(&1u32, &12).is_none());
        assert!(Finite::new(&2u32, &0).is_none());
    }

    #[test]
    fn cofactor_is_not_divisible() {
        for b in 1..300i32 {
            let w = Finite::new(&-2i32, &b).unwrap();
            let c = w.cofactor().unwrap();
            assert!(!(-2i32).divides(&c));
            assert_eq!((-2i32).pow(w.get()) * c, b);
        }
    }

    #[test]
    fn cofactor_of_min_dividend() {
        macro_rules! check_min {
            ($($t:ty),*) => {$(
                for a in [2 as $t, -2, 4, -4, 8, -8] {
                    let w = Finite::new(&a, &<$t>::MIN).unwrap();
                    let c = w.cofactor().unwrap();
                    assert!(!a.divides(&c), "{} in {}", a, <$t>::MIN);
                    // reassemble in i128, where a^m always fits
                    assert_eq!(
                        (a as i128).pow(w.get()) * (c as i128),
                        <$t>::MIN as i128,
                        "{} in {}",
                        a,
                        <$t>::MIN
                    );
                }
            )*};
        }
        check_min!(i8, i16, i32, i64, isize);

        assert_eq!(Finite::new(&2i8, &i8::MIN).unwrap().cofactor(), Ok(-1));
        assert_eq!(Finite::new(&-2i8, &i8::MIN).unwrap().cofactor(), Ok(1));
        let w = Finite::new(&8i64, &i64::MIN).unwrap();
        assert_eq!(w.get(), 21);
        assert_eq!(w.cofactor(), Ok(-1));
        let w = Finite::new(&2i128, &i128::MIN).unwrap();
        assert_eq!(w.get(), 127);
        assert_eq!(w.cofactor(), Ok(-1));
    }

    #[test]
    fn cofactor_of_non_multiple_is_dividend() {
        let w = Finite::new(&7u16, &10).unwrap();
        assert_eq!(w.get(), 0);
        assert_eq!(w.cofactor(), Ok(10));
    }
}
