// -*- mode: rust; -*-
//
// This file is part of multiplicity.
// See LICENSE for licensing information.

//! Least-witness search over the naturals.
//!
//! Both searches return an [`ExtendedNat`]: the least `n` satisfying the
//! predicate, or `Top` when there is none. Neither decides existence by
//! iterating forever. [`find`] takes the answer from an oracle, and
//! [`find_bounded`] takes a bound below which any witness must lie.
//!
//! ```
//! use multiplicity::find::{find, find_bounded};
//! use multiplicity::ExtendedNat;
//!
//! // least n with n * n > 50
//! assert_eq!(find(true, |n| n * n > 50), 8);
//! assert_eq!(find(false, |_| true), ExtendedNat::TOP);
//! assert_eq!(find_bounded(5, |n| n == 9), ExtendedNat::TOP);
//! ```

use crate::enat::ExtendedNat;

/// Find the least `n` with `pred(n)`.
///
/// # Inputs
///
/// * `exists`: whether some `n` satisfies `pred`, decided by the caller.
/// * `pred`: the predicate, evaluated at `0, 1, 2, ...` in order.
///
/// # Returns
///
/// `Top` without evaluating `pred` when `exists` is false. Otherwise the
/// first `n` for which `pred(n)` holds. If the oracle was wrong, or the
/// least witness lies beyond `u32::MAX`, the exponent is not representable
/// and the result is `Top`.
pub fn find<P>(exists: bool, mut pred: P) -> ExtendedNat
where
    P: FnMut(u32) -> bool,
{
    if !exists {
        return ExtendedNat::Top;
    }
    match (0..=u32::MAX).find(|&n| pred(n)) {
        Some(n) => {
            log_event!(trace, "search found least witness {}", n);
            ExtendedNat::Finite(n)
        }
        None => {
            log_event!(warn, "oracle claimed a witness but none exists in the u32 range");
            ExtendedNat::Top
        }
    }
}

/// Find the least `n <= bound` with `pred(n)`.
///
/// The caller guarantees that a witness exists if and only if one exists
/// in `0..=bound`, so an exhausted range means there is none.
pub fn find_bounded<P>(bound: u32, mut pred: P) -> ExtendedNat
where
    P: FnMut(u32) -> bool,
{
    match (0..=bound).find(|&n| pred(n)) {
        Some(n) => ExtendedNat::Finite(n),
        None => ExtendedNat::Top,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use core::cell::Cell;

    #[test]
    fn witness_at_zero() {
        assert_eq!(find(true, |_| true), 0);
        assert_eq!(find_bounded(0, |_| true), 0);
    }

    #[test]
    fn oracle_false_never_evaluates_predicate() {
        let calls = Cell::new(0u32);
        let result = find(false, |_| {
            calls.set(calls.get() + 1);
            true
        });
        assert_eq!(result, ExtendedNat::TOP);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn scan_stops_at_least_witness() {
        let calls = Cell::new(0u32);
        let result = find(true, |n| {
            calls.set(calls.get() + 1);
            n >= 17
        });
        assert_eq!(result, 17);
        assert_eq!(calls.get(), 18);
    }

    #[test]
    fn bounded_search_includes_the_bound() {
        assert_eq!(find_bounded(10, |n| n == 10), 10);
        assert_eq!(find_bounded(9, |n| n == 10), ExtendedNat::TOP);
    }

    #[test]
    fn bounded_and_oracle_searches_agree() {
        for k in 0..40u32 {
            let pred = |n: u32| n * 3 >= k;
            assert_eq!(find(true, pred), find_bounded(40, pred));
        }
    }
}
