// -*- mode: rust; -*-
//
// This file is part of multiplicity.
// See LICENSE for licensing information.

//! Natural numbers extended with an infinite top element.
//!
//! An [`ExtendedNat`] is either a concrete exponent, held as a `u32`, or
//! [`ExtendedNat::Top`]. Every finite value is strictly below `Top`, so
//! the derived ordering is total:
//!
//! ```
//! use multiplicity::ExtendedNat;
//!
//! assert!(ExtendedNat::from(u32::MAX) < ExtendedNat::TOP);
//! assert_eq!(ExtendedNat::from(3).min(ExtendedNat::TOP), 3);
//! ```
//!
//! Addition saturates at `Top`, and scaling by a natural follows the
//! convention \\( 0 \cdot \top = 0 \\):
//!
//! ```
//! use multiplicity::ExtendedNat;
//!
//! assert_eq!(ExtendedNat::from(2) + ExtendedNat::from(1), 3);
//! assert_eq!(ExtendedNat::TOP + ExtendedNat::from(1), ExtendedNat::TOP);
//! assert_eq!(ExtendedNat::TOP * 0u32, 0);
//! ```
//!
//! A finite part that would leave the `u32` range is not representable and
//! becomes `Top`.

use core::borrow::Borrow;
use core::cmp::Ordering;
use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign};
use core::ops::{Mul, MulAssign};

use crate::errors::Error;

/// A natural number, or the infinite value `Top` above all of them.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ExtendedNat {
    /// A concrete natural number.
    Finite(u32),
    /// The infinite value, greater than every finite one.
    Top,
}

impl ExtendedNat {
    /// The finite value \\( 0 \\).
    pub const ZERO: ExtendedNat = ExtendedNat::Finite(0);

    /// The finite value \\( 1 \\).
    pub const ONE: ExtendedNat = ExtendedNat::Finite(1);

    /// The infinite value.
    pub const TOP: ExtendedNat = ExtendedNat::Top;

    /// Return `true` if this value is a concrete natural number.
    #[inline]
    pub const fn is_finite(&self) -> bool {
        matches!(self, ExtendedNat::Finite(_))
    }

    /// Return `true` if this value is `Top`.
    #[inline]
    pub const fn is_top(&self) -> bool {
        matches!(self, ExtendedNat::Top)
    }

    /// View the value as an `Option`, mapping `Top` to `None`.
    #[inline]
    pub const fn finite(self) -> Option<u32> {
        match self {
            ExtendedNat::Finite(n) => Some(n),
            ExtendedNat::Top => None,
        }
    }

    /// Extract the underlying natural number.
    ///
    /// # Returns
    ///
    /// `Err(Error::NotFinite)` if the value is `Top`.
    #[inline]
    pub fn try_get(self) -> Result<u32, Error> {
        self.finite().ok_or(Error::NotFinite)
    }

    /// Extract the underlying natural number, or `default` if the value
    /// is `Top`.
    #[inline]
    pub const fn get_or(self, default: u32) -> u32 {
        match self {
            ExtendedNat::Finite(n) => n,
            ExtendedNat::Top => default,
        }
    }

    /// The successor, with \\( \top + 1 = \top \\).
    #[inline]
    pub fn succ(self) -> ExtendedNat {
        self + ExtendedNat::ONE
    }
}

impl Default for ExtendedNat {
    fn default() -> ExtendedNat {
        ExtendedNat::ZERO
    }
}

impl From<u32> for ExtendedNat {
    fn from(n: u32) -> ExtendedNat {
        ExtendedNat::Finite(n)
    }
}

impl TryFrom<ExtendedNat> for u32 {
    type Error = Error;

    fn try_from(n: ExtendedNat) -> Result<u32, Error> {
        n.try_get()
    }
}

impl PartialEq<u32> for ExtendedNat {
    fn eq(&self, other: &u32) -> bool {
        *self == ExtendedNat::Finite(*other)
    }
}

impl PartialOrd<u32> for ExtendedNat {
    fn partial_cmp(&self, other: &u32) -> Option<Ordering> {
        Some(self.cmp(&ExtendedNat::Finite(*other)))
    }
}

impl fmt::Display for ExtendedNat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtendedNat::Finite(n) => write!(f, "{}", n),
            ExtendedNat::Top => write!(f, "∞"),
        }
    }
}

// ------------------------------------------------------------------------
// Arithmetic
// ------------------------------------------------------------------------

impl<'a, 'b> Add<&'b ExtendedNat> for &'a ExtendedNat {
    type Output = ExtendedNat;
    fn add(self, rhs: &'b ExtendedNat) -> ExtendedNat {
        match (*self, *rhs) {
            (ExtendedNat::Finite(a), ExtendedNat::Finite(b)) => match a.checked_add(b) {
                Some(n) => ExtendedNat::Finite(n),
                None => ExtendedNat::Top,
            },
            _ => ExtendedNat::Top,
        }
    }
}

define_add_variants!(LHS = ExtendedNat, RHS = ExtendedNat, Output = ExtendedNat);

impl<'b> AddAssign<&'b ExtendedNat> for ExtendedNat {
    fn add_assign(&mut self, rhs: &'b ExtendedNat) {
        *self = (self as &ExtendedNat) + rhs;
    }
}

define_add_assign_variants!(LHS = ExtendedNat, RHS = ExtendedNat);

impl<'a, 'b> Mul<&'b u32> for &'a ExtendedNat {
    type Output = ExtendedNat;
    /// Scale by a natural number, with \\( 0 \cdot \top = 0 \\).
    fn mul(self, rhs: &'b u32) -> ExtendedNat {
        match (*self, *rhs) {
            (_, 0) => ExtendedNat::ZERO,
            (ExtendedNat::Finite(a), k) => match a.checked_mul(k) {
                Some(n) => ExtendedNat::Finite(n),
                None => ExtendedNat::Top,
            },
            (ExtendedNat::Top, _) => ExtendedNat::Top,
        }
    }
}

define_mul_variants!(LHS = ExtendedNat, RHS = u32, Output = ExtendedNat);

impl<'b> MulAssign<&'b u32> for ExtendedNat {
    fn mul_assign(&mut self, rhs: &'b u32) {
        *self = (self as &ExtendedNat) * rhs;
    }
}

define_mul_assign_variants!(LHS = ExtendedNat, RHS = u32);

impl<T> Sum<T> for ExtendedNat
where
    T: Borrow<ExtendedNat>,
{
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = T>,
    {
        iter.fold(ExtendedNat::ZERO, |acc, item| acc + item.borrow())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::string::ToString;

    #[test]
    fn top_is_above_every_finite_value() {
        assert!(ExtendedNat::Finite(0) < ExtendedNat::Top);
        assert!(ExtendedNat::Finite(u32::MAX) < ExtendedNat::Top);
        assert!(ExtendedNat::Finite(2) < ExtendedNat::Finite(3));
        assert!(ExtendedNat::Top > 7u32);
        assert!(ExtendedNat::Finite(7) >= 7u32);
    }

    #[test]
    fn add_saturates_at_top() {
        let two = ExtendedNat::from(2);
        assert_eq!(two + ExtendedNat::ONE, 3);
        assert_eq!(two + ExtendedNat::TOP, ExtendedNat::TOP);
        assert_eq!(ExtendedNat::TOP + two, ExtendedNat::TOP);
        assert_eq!(ExtendedNat::TOP + ExtendedNat::TOP, ExtendedNat::TOP);
    }

    #[test]
    fn add_leaving_u32_range_is_top() {
        let big = ExtendedNat::from(u32::MAX);
        assert_eq!(big + ExtendedNat::ZERO, u32::MAX);
        assert_eq!(big + ExtendedNat::ONE, ExtendedNat::TOP);
    }

    #[test]
    fn add_borrow_variants_agree() {
        let a = ExtendedNat::from(4);
        let b = ExtendedNat::from(5);
        assert_eq!(&a + &b, a + b);
        assert_eq!(a + &b, &a + b);

        let mut c = a;
        c += b;
        assert_eq!(c, 9);
        c += &ExtendedNat::TOP;
        assert!(c.is_top());
    }

    #[test]
    fn scaling_by_zero_kills_top() {
        assert_eq!(ExtendedNat::TOP * 0u32, ExtendedNat::ZERO);
        assert_eq!(ExtendedNat::TOP * 3u32, ExtendedNat::TOP);
        assert_eq!(ExtendedNat::from(3) * 4u32, 12);
        assert_eq!(ExtendedNat::from(u32::MAX) * 2u32, ExtendedNat::TOP);

        let mut n = ExtendedNat::from(5);
        n *= 2u32;
        assert_eq!(n, 10);
    }

    #[test]
    fn sum_of_empty_iterator_is_zero() {
        let empty: [ExtendedNat; 0] = [];
        assert_eq!(empty.iter().sum::<ExtendedNat>(), 0);
        let xs = [ExtendedNat::from(1), ExtendedNat::from(2), ExtendedNat::from(3)];
        assert_eq!(xs.iter().sum::<ExtendedNat>(), 6);
        let with_top = [ExtendedNat::from(1), ExtendedNat::TOP];
        assert_eq!(with_top.into_iter().sum::<ExtendedNat>(), ExtendedNat::TOP);
    }

    #[test]
    fn extraction_requires_finiteness() {
        assert_eq!(ExtendedNat::from(5).try_get(), Ok(5));
        assert_eq!(ExtendedNat::TOP.try_get(), Err(Error::NotFinite));
        assert_eq!(u32::try_from(ExtendedNat::TOP), Err(Error::NotFinite));
        assert_eq!(ExtendedNat::TOP.get_or(42), 42);
        assert_eq!(ExtendedNat::from(1).get_or(42), 1);
        assert_eq!(ExtendedNat::TOP.finite(), None);
    }

    #[test]
    fn succ_of_top_is_top() {
        assert_eq!(ExtendedNat::from(0).succ(), 1);
        assert_eq!(ExtendedNat::TOP.succ(), ExtendedNat::TOP);
    }

    #[test]
    fn display() {
        assert_eq!(ExtendedNat::from(12).to_string(), "12");
        assert_eq!(ExtendedNat::TOP.to_string(), "∞");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_bincode_top_and_finite() {
        let encoded = bincode::serialize(&ExtendedNat::TOP).unwrap();
        let decoded: ExtendedNat = bincode::deserialize(&encoded).unwrap();
        assert_eq!(decoded, ExtendedNat::TOP);

        let encoded = bincode::serialize(&ExtendedNat::from(3)).unwrap();
        let decoded: ExtendedNat = bincode::deserialize(&encoded).unwrap();
        assert_eq!(decoded, 3);
    }
}
