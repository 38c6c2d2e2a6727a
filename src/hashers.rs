//! The uniform primitive interface, plus a bridge into `std::hash` so any
//! fixed-width primitive can drive a std `HashMap`/`HashSet`.

use crate::types::HashWord;
use std::hash::{BuildHasher, Hasher};

/// What every fixed-width hash primitive exposes: a stable diagnostic name
/// and a pure key-to-value mapping.
///
/// `hash` has no observable side effects; `name` identifies the exact
/// algorithm, width, and parameterization for labeling only, never for
/// correctness.
pub trait KeyHasher<T: HashWord> {
    fn name(&self) -> String;
    fn hash(&self, key: T) -> T;
}

impl<T: HashWord, H: KeyHasher<T>> KeyHasher<T> for &H {
    fn name(&self) -> String {
        (*self).name()
    }

    #[inline(always)]
    fn hash(&self, key: T) -> T {
        (*self).hash(key)
    }
}

/// `BuildHasher` over any clonable `u64` primitive, for use with std
/// collections. For table-backed primitives, pass a reference (the blanket
/// `KeyHasher` impl for `&H` makes `&TabulationHash<..>` a cheap clone).
#[derive(Clone, Copy, Debug)]
pub struct KeyBuildHasher<H> {
    primitive: H,
}

impl<H: KeyHasher<u64> + Clone> KeyBuildHasher<H> {
    pub fn new(primitive: H) -> Self {
        Self { primitive }
    }
}

impl<H: KeyHasher<u64> + Clone> BuildHasher for KeyBuildHasher<H> {
    type Hasher = KeyHasherState<H>;

    fn build_hasher(&self) -> Self::Hasher {
        KeyHasherState {
            primitive: self.primitive.clone(),
            result: 0,
        }
    }
}

/// One in-flight std hash computation. Only whole-integer writes are
/// accepted; feeding byte slices through this adapter is a caller bug.
pub struct KeyHasherState<H> {
    primitive: H,
    result: u64,
}

impl<H: KeyHasher<u64>> Hasher for KeyHasherState<H> {
    fn write(&mut self, _bytes: &[u8]) {
        unreachable!("expected an integer key, got bytes");
    }

    #[inline(always)]
    fn write_u64(&mut self, value: u64) {
        self.result = self.primitive.hash(value);
    }

    #[inline(always)]
    fn write_u32(&mut self, value: u32) {
        self.result = self.primitive.hash(value as u64);
    }

    #[inline(always)]
    fn finish(&self) -> u64 {
        self.result
    }
}
