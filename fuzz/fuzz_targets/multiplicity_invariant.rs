#![no_main]
use libfuzzer_sys::fuzz_target;

use multiplicity::traits::Carrier;
use multiplicity::{is_finite, multiplicity, ExtendedNat, Finite};

/// Check the defining property of the multiplicity on arbitrary `i64`
/// pairs: if it is `m` then `a^m | b` and `a^(m+1) ∤ b`, and it is
/// infinite exactly when `|a| = 1` or `b = 0`. The cofactor `c` must
/// satisfy `a^m * c = b`, checked in `i128` since `a^m` may not fit in
/// `i64`.
fuzz_target!(|data: &[u8]| {
    if data.len() != 16 {
        return;
    }
    let mut a_bytes = [0u8; 8];
    let mut b_bytes = [0u8; 8];
    a_bytes.copy_from_slice(&data[0..8]);
    b_bytes.copy_from_slice(&data[8..16]);
    let a = i64::from_le_bytes(a_bytes);
    let b = i64::from_le_bytes(b_bytes);

    let m = multiplicity(&a, &b);
    assert_eq!(m.is_finite(), is_finite(&a, &b));
    assert_eq!(m.is_finite(), a.unsigned_abs() != 1 && b != 0);

    match Finite::new(&a, &b) {
        Some(w) => {
            assert_eq!(ExtendedNat::from(w), m);
            assert!(a.pow_divides(w.get(), &b));
            assert!(!a.pow_divides(w.get() + 1, &b));

            let c = w.cofactor().unwrap();
            assert!(!a.divides(&c));
            assert_eq!((a as i128).pow(w.get()) * (c as i128), b as i128);
        }
        None => assert_eq!(m, ExtendedNat::TOP),
    }
});
