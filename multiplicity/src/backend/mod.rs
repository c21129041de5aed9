// -*- mode: rust; -*-
//
// This file is part of multiplicity.
// See LICENSE for licensing information.

//! Carrier implementations for concrete number types.
//!
//! The `primitive` backend covers every built-in integer type, where the
//! finiteness oracle is the closed form \\( |a| \ne 1 \wedge b \ne 0 \\) and
//! powers that would overflow are reasoned about instead of formed. The
//! `bigint` backend does the same for `num-bigint`'s arbitrary-precision
//! integers and is only compiled with the `num-bigint` feature.

pub mod primitive;

pub(crate) mod primality;

#[cfg(feature = "num-bigint")]
pub mod bigint;
