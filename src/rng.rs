// Based on `Lcg64Xsh32` (pcg32) in
// https://github.com/rust-random/rand/blob/master/rand_pcg/src/pcg64.rs, which is
//
// Copyright 2018 Developers of the Rand project.
// Copyright 2017 Paul Dicker.
// Copyright 2014-2017 Melissa O'Neill and PCG Project contributors
//
// and licensed under the MIT license.

use core::fmt;
use rand_core::{impls, le, Error, RngCore, SeedableRng};
#[cfg(feature = "serde1")] use serde::{Deserialize, Serialize};

// This is the default multiplier used by PCG for 64-bit state.
const MULTIPLIER: u64 = 0x5851f42d4c957f2d;
const INCREMENT: u64 = 0xa02bdbf7bb3c0a7;

/// A PCG random number generator (XSH RR 64/32 (LCG) variant).
///
/// 64 bits of state on a single fixed stream, with 32-bit output via
/// "xorshift high (bits), random rotation". The output for a given seed is
/// fixed here rather than delegated to `rand`, so seeded runs stay
/// reproducible across dependency upgrades.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct Pcg32 {
    state: u64
}

impl Pcg32 {
    pub fn new(seed: u64) -> Self {
        // Same initialisation as pcg32_srandom_r: step, mix in the seed, step.
        let mut pcg = Pcg32 { state: 0 };
        pcg.step();
        pcg.state = pcg.state.wrapping_add(seed);
        pcg.step();
        pcg
    }

    #[inline]
    fn step(&mut self) {
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT);
    }
}

// Custom Debug implementation that does not expose the internal state
impl fmt::Debug for Pcg32 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Pcg32 {{}}")
    }
}

impl SeedableRng for Pcg32 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        let mut seed_u64 = [0u64; 1];
        le::read_u64_into(&seed, &mut seed_u64);
        Pcg32::new(seed_u64[0])
    }
}

impl RngCore for Pcg32 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        let state = self.state;
        self.step();

        // Output function XSH RR: xorshift high (bits), followed by a random rotate
        // Constants are for 64-bit state, 32-bit output
        const ROTATE: u32 = 59; // 64 - 5
        const XSHIFT: u32 = 18; // (5 + 32) / 2
        const SPARE: u32 = 27; // 64 - 32 - 5

        let rot = (state >> ROTATE) as u32;
        let xsh = (((state >> XSHIFT) ^ state) >> SPARE) as u32;
        xsh.rotate_right(rot)
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    #[inline]
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = Pcg32::new(42);
        let mut b = Pcg32::new(42);
        for _ in 0..100 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn xsh_rr_output_for_seed_42() {
        let mut rng = Pcg32::new(42);
        let first: Vec<u32> = (0..4).map(|_| rng.next_u32()).collect();
        assert_eq!(first, vec![3476633199, 1293430941, 820339564, 72045558]);
    }

    #[test]
    fn different_seeds_diverge() {
        let a: Vec<u32> = {
            let mut rng = Pcg32::new(1);
            (0..8).map(|_| rng.next_u32()).collect()
        };
        let b: Vec<u32> = {
            let mut rng = Pcg32::new(2);
            (0..8).map(|_| rng.next_u32()).collect()
        };
        assert_ne!(a, b);
    }

    #[test]
    fn from_seed_reads_little_endian() {
        let mut from_bytes = Pcg32::from_seed(0x0123_4567_89ab_cdefu64.to_le_bytes());
        let mut from_int = Pcg32::new(0x0123_4567_89ab_cdef);
        assert_eq!(from_bytes, from_int);
        assert_eq!(from_bytes.next_u64(), from_int.next_u64());
    }

    #[test]
    fn debug_hides_state() {
        assert_eq!(format!("{:?}", Pcg32::new(7)), "Pcg32 {}");
    }

    #[test]
    fn fill_bytes_matches_next_u32() {
        let mut a = Pcg32::new(99);
        let mut b = Pcg32::new(99);
        let mut buf = [0u8; 4];
        a.fill_bytes(&mut buf);
        assert_eq!(u32::from_le_bytes(buf), b.next_u32());
    }

    #[cfg(feature = "serde1")]
    #[test]
    fn serde_roundtrip_resumes_sequence() {
        let mut rng = Pcg32::new(5);
        rng.next_u32();
        let json = serde_json::to_string(&rng).unwrap();
        let mut restored: Pcg32 = serde_json::from_str(&json).unwrap();
        assert_eq!(rng.next_u32(), restored.next_u32());
    }
}
