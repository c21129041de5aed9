// -*- mode: rust; -*-
//
// This file is part of multiplicity.
// See LICENSE for licensing information.

//! Multiplicative laws of the multiplicity at a prime.
//!
//! For a prime `p`, the multiplicity is a valuation:
//!
//! * \\( v_p(b c) = v_p(b) + v_p(c) \\),
//! * \\( v_p(b^k) = k \cdot v_p(b) \\),
//! * \\( v_p(p^k) = k \\).
//!
//! A [`Prime`] can only be built from an element its carrier certifies as
//! prime, and evaluates these laws without forming the product, which for
//! fixed-width carriers would usually overflow:
//!
//! ```
//! use multiplicity::Prime;
//!
//! let two = Prime::new(2u64).unwrap();
//!
//! // v_2(4 * 6) = v_2(4) + v_2(6)
//! assert_eq!(two.multiplicity_mul(&4, &6), 3);
//!
//! // v_2(1 * 2 * ... * 40), far outside the range of u64
//! let factorial: Vec<u64> = (1..=40).collect();
//! assert_eq!(two.multiplicity_product(&factorial), 38);
//!
//! assert!(Prime::new(12u64).is_err());
//! ```

use core::borrow::Borrow;

use crate::enat::ExtendedNat;
use crate::errors::Error;
use crate::multiplicity::multiplicity;
use crate::traits::{DecideFinite, IsPrime};

/// A carrier element certified prime by its [`IsPrime`] implementation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Prime<T>(T);

impl<T> Prime<T>
where
    T: IsPrime + DecideFinite,
{
    /// Certify `p` as prime.
    ///
    /// # Returns
    ///
    /// `Err(Error::NotPrime)` if the carrier does not consider `p` prime.
    pub fn new(p: T) -> Result<Prime<T>, Error> {
        if p.is_prime() {
            Ok(Prime(p))
        } else {
            log_event!(debug, "rejected non-prime element");
            Err(Error::NotPrime)
        }
    }

    /// The multiplicity of this prime in `b`.
    pub fn multiplicity(&self, b: &T) -> ExtendedNat {
        multiplicity(&self.0, b)
    }

    /// The multiplicity of this prime in \\( b c \\).
    pub fn multiplicity_mul(&self, b: &T, c: &T) -> ExtendedNat {
        self.multiplicity(b) + self.multiplicity(c)
    }

    /// The multiplicity of this prime in \\( b^k \\).
    ///
    /// Since \\( b^0 = 1 \\) and a prime is not a unit, this is `0` for
    /// `k = 0` even when `b` is zero.
    pub fn multiplicity_pow(&self, b: &T, k: u32) -> ExtendedNat {
        self.multiplicity(b) * k
    }

    /// The multiplicity of this prime in the product of `factors`.
    ///
    /// The empty product is \\( 1 \\), whose multiplicity is `0`.
    pub fn multiplicity_product<I>(&self, factors: I) -> ExtendedNat
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        factors
            .into_iter()
            .map(|f| self.multiplicity(f.borrow()))
            .sum()
    }

    /// The multiplicity of this prime in \\( p^k \\), which is `k`.
    #[inline]
    pub fn multiplicity_pow_self(&self, k: u32) -> ExtendedNat {
        ExtendedNat::Finite(k)
    }

    /// Return the underlying element.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> AsRef<T> for Prime<T> {
    fn as_ref(&self) -> &T {
        &self.0
    }
}
