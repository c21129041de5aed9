// -*- mode: rust; -*-
//
// This file is part of multiplicity.
// See LICENSE for licensing information.

//! Module for the algebraic traits a carrier type implements.
//!
//! The multiplicity query only needs a monoid with a decidable
//! divisibility relation ([`Carrier`]) together with an oracle deciding
//! whether the search terminates ([`DecideFinite`]). The remaining traits
//! unlock the extraction and prime helpers.
//!
//! Implementations are provided for every primitive integer type and,
//! with the `num-bigint` feature, for `BigUint` and `BigInt`.

// ------------------------------------------------------------------------
// Public Traits
// ------------------------------------------------------------------------

/// A monoid whose divisibility relation is decidable.
///
/// Divisibility is the left-multiple relation of the monoid: `a` divides
/// `b` when \\( b = a \cdot c \\) for some `c`.
pub trait Carrier: Clone {
    /// Returns the multiplicative identity.
    fn one() -> Self;

    /// Multiply two elements.
    fn multiply(&self, other: &Self) -> Self;

    /// Raise `self` to the `n`th power, with \\( x^0 = 1 \\).
    fn power(&self, n: u32) -> Self {
        let mut acc = Self::one();
        let mut base = self.clone();
        let mut n = n;
        while n > 0 {
            if n & 1 == 1 {
                acc = acc.multiply(&base);
            }
            n >>= 1;
            if n > 0 {
                base = base.multiply(&base);
            }
        }
        acc
    }

    /// Return true if `self` divides `other`.
    fn divides(&self, other: &Self) -> bool;

    /// Return true if `self^n` divides `other`.
    ///
    /// Fixed-width carriers override this so the power is never formed
    /// when it would overflow.
    fn pow_divides(&self, n: u32, other: &Self) -> bool {
        self.power(n).divides(other)
    }

    /// Return true if `self` has a multiplicative inverse.
    fn is_unit(&self) -> bool {
        self.divides(&Self::one())
    }
}

/// A [`Carrier`] with an absorbing zero element.
pub trait MonoidWithZero: Carrier {
    /// Returns the zero element.
    fn zero() -> Self;

    /// Return true if this element is zero.
    fn is_zero(&self) -> bool;
}

/// Trait for carriers which can decide whether a multiplicity is finite.
///
/// The search in [`multiplicity`](crate::multiplicity()) never iterates
/// to find out whether it terminates; it asks this oracle first. An
/// implementation must return `true` exactly when some power
/// \\( a^{n+1} \\) fails to divide `b`.
pub trait DecideFinite: Carrier {
    /// Return true if the multiplicity of `divisor` in `dividend` is finite.
    fn multiplicity_finite(divisor: &Self, dividend: &Self) -> bool;
}

/// Trait for carriers which can divide out a known divisor.
pub trait DivExact: Carrier {
    /// Return the `q` with \\( \mathtt{self} = \mathtt{divisor} \cdot q \\),
    /// or `None` if `divisor` does not divide `self` or the quotient is not
    /// representable.
    fn divide_exact(&self, divisor: &Self) -> Option<Self>;
}

/// Trait for carriers which can test an element for primality.
///
/// An element is prime when it is neither zero nor a unit, and dividing a
/// product means dividing one of the factors.
pub trait IsPrime: Carrier {
    /// Return true if this element is prime.
    fn is_prime(&self) -> bool;
}
