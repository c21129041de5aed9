// -*- mode: rust; -*-
//
// This file is part of multiplicity.
// See LICENSE for licensing information.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg, doc_cfg_hide))]
#![cfg_attr(docsrs, doc(cfg_hide(docsrs)))]
//------------------------------------------------------------------------
// Documentation:
//------------------------------------------------------------------------
#![deny(missing_docs)]
#![doc = include_str!("../README.md")]

//------------------------------------------------------------------------
// External dependencies:
//------------------------------------------------------------------------

#[cfg(any(test, feature = "std"))]
#[macro_use]
extern crate std;

// Internal macros. Must come first!
#[macro_use]
pub(crate) mod macros;

//------------------------------------------------------------------------
// multiplicity public modules
//------------------------------------------------------------------------

// Natural numbers extended with an infinite top element
pub mod enat;

// Least-witness search over the naturals
pub mod find;

// Multiplicative laws evaluated through a validated prime
pub mod prime;

// Algebraic traits a carrier type implements
pub mod traits;

//------------------------------------------------------------------------
// multiplicity internal modules
//------------------------------------------------------------------------

// Carrier implementations for primitive and big integers live here
pub(crate) mod backend;

mod errors;

// The multiplicity query, its finiteness witness and extraction helpers.
// Private: `use multiplicity::multiplicity` must resolve to the function alone.
mod multiplicity;

pub use crate::{
    enat::ExtendedNat,
    errors::Error,
    multiplicity::{is_finite, le_multiplicity, multiplicity, Finite},
    prime::Prime,
};
