#![no_main]
use libfuzzer_sys::fuzz_target;

use multiplicity::{multiplicity, Prime};

/// Check that at a prime `p`, the multiplicity of `b * c` is the sum of
/// the multiplicities of `b` and `c`, for `u32` factors whose product is
/// formed in `u64`.
fuzz_target!(|data: &[u8]| {
    if data.len() != 9 {
        return;
    }
    let mut b_bytes = [0u8; 4];
    let mut c_bytes = [0u8; 4];
    b_bytes.copy_from_slice(&data[1..5]);
    c_bytes.copy_from_slice(&data[5..9]);
    let b = u32::from_le_bytes(b_bytes) as u64;
    let c = u32::from_le_bytes(c_bytes) as u64;

    let p = [2u64, 3, 5, 7, 11, 13, 251, 65521][(data[0] % 8) as usize];
    let prime = Prime::new(p).unwrap();

    assert_eq!(prime.multiplicity_mul(&b, &c), multiplicity(&p, &(b * c)));
});
