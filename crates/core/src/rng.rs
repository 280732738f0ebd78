//! Seeded splitmix64 generator and the attempt-token hash that seeds it.
//!
//! Both are bit-exact across platforms and process restarts. Nothing here may
//! depend on `std::collections::hash_map::RandomState` or any other salted hash.

use rand::RngCore;

/// Golden-ratio increment, also the replacement for a zero seed.
pub const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

const MIX_1: u64 = 0xBF58_476D_1CE4_E5B9;
const MIX_2: u64 = 0x94D0_49BB_1331_11EB;

const FNV_OFFSET_BASIS: u64 = 0xCBF2_9CE4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01B3;

/// Deterministic pseudo-random generator (splitmix64).
///
/// Not suitable for anything security related.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    /// Creates a generator from a signed seed. A zero seed is replaced by
    /// [`GOLDEN_GAMMA`] so the stream never starts from the all-zero state.
    #[must_use]
    pub fn new(seed: i64) -> Self {
        #[allow(clippy::cast_sign_loss)]
        let state = if seed == 0 { GOLDEN_GAMMA } else { seed as u64 };
        Self { state }
    }

    /// Creates a generator seeded from an attempt token via [`seed_from_token`].
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        Self::new(seed_from_token(token))
    }

    /// Draws the next 64-bit value.
    pub fn next_value(&mut self) -> u64 {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(MIX_1);
        z = (z ^ (z >> 27)).wrapping_mul(MIX_2);
        z ^ (z >> 31)
    }

    /// Draws a value in `[0, bound)` by plain modulo reduction.
    ///
    /// The slight modulo bias is accepted: shuffles must stay bit-compatible
    /// with previously generated attempts. Returns 0 when `bound` is 0.
    pub fn next_below(&mut self, bound: usize) -> usize {
        let draw = self.next_value();
        if bound == 0 {
            return 0;
        }
        // usize -> u64 is lossless on every supported target, and the result
        // is < bound so it fits back into usize.
        #[allow(clippy::cast_possible_truncation)]
        let picked = (draw % bound as u64) as usize;
        picked
    }

    /// In-place Fisher–Yates shuffle driven by this generator, one draw per
    /// swap position from the back of the slice to index 1.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.next_below(i + 1);
            items.swap(i, j);
        }
    }
}

impl RngCore for SplitMix64 {
    fn next_u32(&mut self) -> u32 {
        #[allow(clippy::cast_possible_truncation)]
        let high = (self.next_value() >> 32) as u32;
        high
    }

    fn next_u64(&mut self) -> u64 {
        self.next_value()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_value().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

/// 64-bit FNV-1a over raw bytes.
#[must_use]
pub fn fnv1a_64(bytes: &[u8]) -> u64 {
    bytes.iter().fold(FNV_OFFSET_BASIS, |hash, byte| {
        (hash ^ u64::from(*byte)).wrapping_mul(FNV_PRIME)
    })
}

/// Derives a generator seed from an opaque attempt token (FNV-1a of its UTF-8 bytes).
#[must_use]
pub fn seed_from_token(token: &str) -> i64 {
    i64::from_le_bytes(fnv1a_64(token.as_bytes()).to_le_bytes())
}
