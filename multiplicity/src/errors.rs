// -*- mode: rust; -*-
//
// This file is part of multiplicity.
// See LICENSE for licensing information.

//! Errors which may occur when extracting values from a multiplicity query.

use core::fmt;
use core::fmt::Display;

/// Errors which may occur while querying multiplicities.
///
/// This error may arise due to:
///
/// * Asking for the concrete value of an infinite multiplicity.
///
/// * Handing a non-prime element to [`Prime::new`](crate::Prime::new).
///
/// * A carrier whose exact division disagrees with its divisibility test.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Error {
    /// The multiplicity is infinite and has no underlying natural number.
    NotFinite,
    /// The element is not prime, so the multiplicative laws do not hold for it.
    NotPrime,
    /// `divides` reported a divisor that `divide_exact` could not divide out.
    InexactDivision,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::NotFinite => write!(f, "Multiplicity is infinite"),
            Error::NotPrime => write!(f, "Element is not prime"),
            Error::InexactDivision => {
                write!(f, "Carrier division was not exact for a reported divisor")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
