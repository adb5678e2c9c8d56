//! Seeded shuffling for the right-hand endpoint order.
//!
//! A splitmix32 mixer drives a Fisher–Yates pass, so a board is fully
//! reproducible from one `u32` seed. That keeps the core free of any OS
//! entropy source (WASM builds supply a seed from the clock).

use smallvec::SmallVec;

/// One round of the splitmix32 mixer.
pub fn splitmix32(value: u32) -> u32 {
    let mut z = value.wrapping_add(0x9E37_79B9);
    z = (z ^ (z >> 16)).wrapping_mul(0x85EB_CA6B);
    z = (z ^ (z >> 13)).wrapping_mul(0xC2B2_AE35);
    z ^ (z >> 16)
}

/// A permutation of `0..count`, shuffled by `seed`.
pub fn shuffled_order(count: usize, seed: u32) -> SmallVec<[usize; 8]> {
    let mut order: SmallVec<[usize; 8]> = (0..count).collect();
    let mut state = seed;
    for i in (1..count).rev() {
        state = splitmix32(state);
        let j = state as usize % (i + 1);
        order.swap(i, j);
    }
    log::debug!("shuffled order: {order:?}");
    order
}
