//! Fixed-width hash value types and the `HashWord` abstraction over the two
//! supported word widths (32 and 64 bits).

use std::fmt::Debug;
use std::ops::BitXor;

pub type Hash32 = u32;
pub type Hash64 = u64;
pub type Hash128 = u128;

/// 256-bit hash value, four 64-bit words, `r0` least significant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(align(16))]
pub struct Hash256 {
    pub r0: u64,
    pub r1: u64,
    pub r2: u64,
    pub r3: u64,
}

/// Pack two 64-bit halves into a 128-bit value, `high` in the upper bits.
#[inline(always)]
pub const fn to_hash128(high: u64, low: u64) -> Hash128 {
    ((high as u128) << 64) | low as u128
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for u32 {}
    impl Sealed for u64 {}
}

/// An unsigned word usable as a hash input/output domain.
///
/// Sealed: only `u32` and `u64` implement this, so instantiating a primitive
/// at an unsupported width is a compile error rather than a runtime check.
pub trait HashWord:
    Copy + Eq + Debug + BitXor<Output = Self> + Send + Sync + 'static + sealed::Sealed
{
    const BITS: u32;
    const BYTES: usize;
    const ZERO: Self;

    /// Multiplicative hashing constant, prime family.
    const MULT_PRIME: Self;
    /// Multiplicative hashing constant derived from the golden ratio.
    const MULT_FIBONACCI: Self;
    /// Prime close to the golden-ratio constant.
    const MULT_FIBONACCI_PRIME: Self;

    fn wrapping_mul(self, rhs: Self) -> Self;

    /// Right shift that tolerates `shift == BITS` (returns zero) so callers
    /// can express "keep the top 0 bits" without overflowing the shift.
    fn shr_full(self, shift: u32) -> Self;

    /// Byte `index` of the word, little-endian (byte 0 is least significant).
    fn byte(self, index: usize) -> u8;

    /// `((self as wide) * (bound as wide)) >> BITS`, i.e. scale a full-width
    /// value into `[0, bound)`.
    fn scale(self, bound: Self) -> Self;

    /// The width-specific Murmur3 avalanche finalizer.
    fn fmix(self) -> Self;

    /// Uniform draw over the full width.
    fn random(rng: &mut fastrand::Rng) -> Self;
}

impl HashWord for u32 {
    const BITS: u32 = 32;
    const BYTES: usize = 4;
    const ZERO: Self = 0;

    const MULT_PRIME: Self = 0x238E_F8E3;
    const MULT_FIBONACCI: Self = 0x9E37_79B9;
    const MULT_FIBONACCI_PRIME: Self = 0x9E37_79B1;

    #[inline(always)]
    fn wrapping_mul(self, rhs: Self) -> Self {
        u32::wrapping_mul(self, rhs)
    }

    #[inline(always)]
    fn shr_full(self, shift: u32) -> Self {
        if shift >= 32 { 0 } else { self >> shift }
    }

    #[inline(always)]
    fn byte(self, index: usize) -> u8 {
        (self >> (8 * index)) as u8
    }

    #[inline(always)]
    fn scale(self, bound: Self) -> Self {
        ((self as u64 * bound as u64) >> 32) as u32
    }

    #[inline(always)]
    fn fmix(mut self) -> Self {
        self ^= self >> 16;
        self = self.wrapping_mul(0x85EB_CA6B);
        self ^= self >> 13;
        self = self.wrapping_mul(0xC2B2_AE35);
        self ^= self >> 16;
        self
    }

    #[inline(always)]
    fn random(rng: &mut fastrand::Rng) -> Self {
        rng.u32(..)
    }
}

impl HashWord for u64 {
    const BITS: u32 = 64;
    const BYTES: usize = 8;
    const ZERO: Self = 0;

    const MULT_PRIME: Self = 0xC745_5FEC_83DD_661F;
    const MULT_FIBONACCI: Self = 0x9E37_79B9_7F4A_7C15;
    const MULT_FIBONACCI_PRIME: Self = 0x9E37_79B9_7F4A_7C55;

    #[inline(always)]
    fn wrapping_mul(self, rhs: Self) -> Self {
        u64::wrapping_mul(self, rhs)
    }

    #[inline(always)]
    fn shr_full(self, shift: u32) -> Self {
        if shift >= 64 { 0 } else { self >> shift }
    }

    #[inline(always)]
    fn byte(self, index: usize) -> u8 {
        (self >> (8 * index)) as u8
    }

    #[inline(always)]
    fn scale(self, bound: Self) -> Self {
        ((self as u128 * bound as u128) >> 64) as u64
    }

    #[inline(always)]
    fn fmix(mut self) -> Self {
        self ^= self >> 33;
        self = self.wrapping_mul(0xFF51_AFD7_ED55_8CCD);
        self ^= self >> 33;
        self = self.wrapping_mul(0xC4CE_B9FE_1A85_EC53);
        self ^= self >> 33;
        self
    }

    #[inline(always)]
    fn random(rng: &mut fastrand::Rng) -> Self {
        rng.u64(..)
    }
}
