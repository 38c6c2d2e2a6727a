//! Murmur3 family: the avalanche finalizer plus the full hash in its
//! fixed-32-bit, fixed-64-bit, and arbitrary-byte-buffer shapes.
//!
//! Constants, rotation amounts, and shift distances follow Austin Appleby's
//! reference MurmurHash3 (public domain) bit-for-bit. None of them are
//! tunable; changing any of them silently degrades the output distribution.

use crate::hashers::KeyHasher;
use crate::types::{Hash128, HashWord, to_hash128};

const C1: u64 = 0x87C3_7B91_1142_53D5;
const C2: u64 = 0x4CF5_AD43_2745_937F;

/// Default seed for the 128-bit variants: a random 64-bit prime.
pub const MURMUR3_128_DEFAULT_SEED: u64 = 0xC745_5FEC_83DD_661F;

/// The width-specific 5-step xor/multiply/xor avalanche mix, usable on its
/// own as a cheap full-width mixer for already-wide keys.
#[derive(Clone, Copy, Debug, Default)]
pub struct MurmurFinalizer<T: HashWord> {
    _width: std::marker::PhantomData<T>,
}

impl<T: HashWord> MurmurFinalizer<T> {
    pub fn new() -> Self {
        Self { _width: std::marker::PhantomData }
    }

    pub fn name(&self) -> String {
        format!("murmur_finalizer{}", T::BITS)
    }

    #[inline(always)]
    pub fn hash(&self, key: T) -> T {
        key.fmix()
    }
}

impl<T: HashWord> KeyHasher<T> for MurmurFinalizer<T> {
    fn name(&self) -> String {
        MurmurFinalizer::name(self)
    }

    #[inline(always)]
    fn hash(&self, key: T) -> T {
        key.fmix()
    }
}

/// Murmur3 over a single 32-bit key: exactly one block, no tail bytes.
#[derive(Clone, Copy, Debug)]
pub struct Murmur3Hash32 {
    seed: u32,
}

impl Default for Murmur3Hash32 {
    fn default() -> Self {
        Self::new()
    }
}

impl Murmur3Hash32 {
    pub fn new() -> Self {
        Self { seed: 0 }
    }

    pub fn with_seed(seed: u32) -> Self {
        Self { seed }
    }

    pub fn name(&self) -> String {
        "murmur3_32".to_string()
    }

    #[inline(always)]
    pub fn hash(&self, key: u32) -> u32 {
        let mut k = key.wrapping_mul(0xCC9E_2D51);
        k = k.rotate_left(15);
        k = k.wrapping_mul(0x1B87_3593);

        let mut h = self.seed ^ k;
        h = h.rotate_left(13);
        h = h.wrapping_mul(5).wrapping_add(0xE654_6B64);

        // Finalize with the input length (4 bytes) folded in.
        (h ^ 4).fmix()
    }
}

impl KeyHasher<u32> for Murmur3Hash32 {
    fn name(&self) -> String {
        Murmur3Hash32::name(self)
    }

    #[inline(always)]
    fn hash(&self, key: u32) -> u32 {
        Murmur3Hash32::hash(self, key)
    }
}

/// Murmur3 x64 128-bit. Hashes either a fixed 64-bit key or an arbitrary
/// byte buffer; both shapes pack the result as `(h1 << 64) | h2`, so
/// [`hash`](Self::hash) on a key equals [`hash_bytes`](Self::hash_bytes) on
/// that key's little-endian bytes.
#[derive(Clone, Copy, Debug)]
pub struct Murmur3Hash128 {
    seed: u64,
}

impl Default for Murmur3Hash128 {
    fn default() -> Self {
        Self::new()
    }
}

impl Murmur3Hash128 {
    pub fn new() -> Self {
        Self { seed: MURMUR3_128_DEFAULT_SEED }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self { seed }
    }

    pub fn name(&self) -> String {
        "murmur3_128".to_string()
    }

    /// Fixed 64-bit key: 8 bytes of pure tail (no 16-byte block), so only
    /// the `k1` lane is touched before finalization.
    #[inline(always)]
    pub fn hash(&self, key: u64) -> Hash128 {
        let mut h1 = self.seed;
        let h2 = self.seed;

        let mut k1 = key; // the 8 little-endian key bytes, assembled
        k1 = k1.wrapping_mul(C1);
        k1 = k1.rotate_left(31);
        k1 = k1.wrapping_mul(C2);
        h1 ^= k1;

        Self::finish(h1, h2, 8)
    }

    /// Full MurmurHash3_x64_128 over an arbitrary byte buffer. Zero-length
    /// input is well defined and depends only on the seed.
    pub fn hash_bytes(&self, data: &[u8]) -> Hash128 {
        let mut h1 = self.seed;
        let mut h2 = self.seed;

        let mut blocks = data.chunks_exact(16);
        for block in &mut blocks {
            let mut k1 = u64::from_le_bytes(block[..8].try_into().unwrap());
            let mut k2 = u64::from_le_bytes(block[8..].try_into().unwrap());

            k1 = k1.wrapping_mul(C1);
            k1 = k1.rotate_left(31);
            k1 = k1.wrapping_mul(C2);
            h1 ^= k1;

            h1 = h1.rotate_left(27);
            h1 = h1.wrapping_add(h2);
            h1 = h1.wrapping_mul(5).wrapping_add(0x52DC_E729);

            k2 = k2.wrapping_mul(C2);
            k2 = k2.rotate_left(33);
            k2 = k2.wrapping_mul(C1);
            h2 ^= k2;

            h2 = h2.rotate_left(31);
            h2 = h2.wrapping_add(h1);
            h2 = h2.wrapping_mul(5).wrapping_add(0x3849_5AB5);
        }

        // Tail: 0..=15 leftover bytes, assembled highest index first so each
        // byte lands at the shift offset of its position. Bytes 8..15 fold
        // into the h2 lane, bytes 0..7 into the h1 lane.
        let tail = blocks.remainder();

        if tail.len() > 8 {
            let mut k2 = 0u64;
            for i in (8..tail.len()).rev() {
                k2 ^= (tail[i] as u64) << (8 * (i - 8));
            }
            k2 = k2.wrapping_mul(C2);
            k2 = k2.rotate_left(33);
            k2 = k2.wrapping_mul(C1);
            h2 ^= k2;
        }

        if !tail.is_empty() {
            let mut k1 = 0u64;
            for i in (0..tail.len().min(8)).rev() {
                k1 ^= (tail[i] as u64) << (8 * i);
            }
            k1 = k1.wrapping_mul(C1);
            k1 = k1.rotate_left(31);
            k1 = k1.wrapping_mul(C2);
            h1 ^= k1;
        }

        Self::finish(h1, h2, data.len() as u64)
    }

    #[inline(always)]
    fn finish(mut h1: u64, mut h2: u64, len: u64) -> Hash128 {
        h1 ^= len;
        h2 ^= len;

        h1 = h1.wrapping_add(h2);
        h2 = h2.wrapping_add(h1);

        h1 = h1.fmix();
        h2 = h2.fmix();

        h1 = h1.wrapping_add(h2);
        h2 = h2.wrapping_add(h1);

        to_hash128(h1, h2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finalizer_known_values() {
        let f64 = MurmurFinalizer::<u64>::new();
        assert_eq!(f64.hash(0), 0);
        assert_eq!(f64.hash(1), 0xB456_BCFC_34C2_CB2C);
        assert_eq!(f64.hash(0xDEAD_BEEF_CAFE_BABE), 0x7082_9950_08F0_C48C);

        let f32 = MurmurFinalizer::<u32>::new();
        assert_eq!(f32.hash(0), 0);
        assert_eq!(f32.hash(1), 0x514E_28B7);
        assert_eq!(f32.hash(0xDEAD_BEEF), 0x0DE5_C6A9);
    }

    #[test]
    fn finalizer_names() {
        assert_eq!(MurmurFinalizer::<u32>::new().name(), "murmur_finalizer32");
        assert_eq!(MurmurFinalizer::<u64>::new().name(), "murmur_finalizer64");
    }

    /// Flipping any single input bit should flip about half the output bits.
    #[test]
    fn finalizer_avalanche() {
        let f = MurmurFinalizer::<u64>::new();
        let mut rng = fastrand::Rng::with_seed(42);
        let mut flipped_total = 0u64;
        let mut trials = 0u64;
        for _ in 0..200 {
            let x = rng.u64(..);
            let hx = f.hash(x);
            for bit in 0..64 {
                flipped_total += (hx ^ f.hash(x ^ (1 << bit))).count_ones() as u64;
                trials += 1;
            }
        }
        let mean = flipped_total as f64 / trials as f64;
        assert!((mean - 32.0).abs() < 1.0, "avalanche mean {mean}");
    }

    #[test]
    fn murmur3_32_known_values() {
        let h = Murmur3Hash32::new();
        assert_eq!(h.hash(0), 0x2362_F9DE);
        assert_eq!(h.hash(1), 0xFBF1_402A);
        assert_eq!(h.hash(0xDEAD_BEEF), 0xC193_D15C);
        assert_eq!(Murmur3Hash32::with_seed(0x9747_B28C).hash(42), 0x0C9A_A44C);
    }

    #[test]
    fn murmur3_128_reference_vectors() {
        // Published MurmurHash3_x64_128 outputs, seed 0.
        let h = Murmur3Hash128::with_seed(0);
        assert_eq!(h.hash_bytes(b""), 0);
        assert_eq!(
            h.hash_bytes(b"Hello, world!"),
            to_hash128(0xF151_2DD1_D2D6_65DF, 0x2C32_6650_A8F3_C564),
        );
        assert_eq!(
            h.hash_bytes(b"The quick brown fox jumps over the lazy dog"),
            to_hash128(0xE34B_BC7B_BC07_1B6C, 0x7A43_3CA9_C49A_9347),
        );
    }

    #[test]
    fn murmur3_128_seed_shifts_output() {
        let h = Murmur3Hash128::with_seed(0x9747_B28C);
        assert_eq!(
            h.hash_bytes(b"Hello, world!"),
            to_hash128(0xEDC4_85D6_62A8_392E, 0xF85E_7E76_31D5_76BA),
        );
    }

    /// Tail lengths 0 through 15 all exercise distinct assembly paths; an
    /// off-by-one in the tail loop only corrupts some of them.
    #[test]
    fn murmur3_128_every_tail_length() {
        let h = Murmur3Hash128::with_seed(0);
        let data: Vec<u8> = (0u8..31).collect();
        assert_eq!(
            h.hash_bytes(&data[..16]),
            to_hash128(0x4449_24B5_9190_3F30, 0xAB90_6456_762F_E845),
        );
        assert_eq!(
            h.hash_bytes(&data),
            to_hash128(0x053D_D3E1_A32C_D094, 0x9EE5_9AEF_B400_5490),
        );
        assert_eq!(
            h.hash_bytes(b"aaaaaaaaa"),
            to_hash128(0xF7BA_E178_7868_7F64, 0x3BED_259F_9F8A_D09F),
        );
        assert_eq!(
            h.hash_bytes(b"abc"),
            to_hash128(0xB496_3F3F_3FAD_7867, 0x3BA2_7441_26CA_2D52),
        );
        // Same prefix, every length: each one must hash differently.
        let mut seen = std::collections::HashSet::new();
        for len in 0..=31 {
            assert!(seen.insert(h.hash_bytes(&data[..len])));
        }
    }

    #[test]
    fn fixed_key_matches_buffer_on_le_bytes() {
        let h = Murmur3Hash128::new();
        let mut rng = fastrand::Rng::with_seed(5);
        for _ in 0..1000 {
            let key = rng.u64(..);
            assert_eq!(h.hash(key), h.hash_bytes(&key.to_le_bytes()), "{key:#x}");
        }
        for key in [0, 1, u64::MAX, 0xDEAD_BEEF_CAFE_BABE] {
            assert_eq!(h.hash(key), h.hash_bytes(&key.to_le_bytes()));
        }
    }

    #[test]
    fn fixed_key_known_values() {
        // Default seed 0xC7455FEC83DD661F.
        let h = Murmur3Hash128::new();
        assert_eq!(
            h.hash(0),
            to_hash128(0xB96D_314B_AA67_5840, 0xAAC0_9D86_D29C_6D96),
        );
        assert_eq!(
            h.hash(0xDEAD_BEEF_CAFE_BABE),
            to_hash128(0xCBBB_AE2F_199E_586A, 0x9493_7E66_EFBF_7EE7),
        );
    }

    #[test]
    fn deterministic() {
        let h = Murmur3Hash128::new();
        let payload = b"determinism check payload, longer than one block....";
        assert_eq!(h.hash_bytes(payload), h.hash_bytes(payload));
        assert_eq!(h.hash(12345), h.hash(12345));
    }
}
