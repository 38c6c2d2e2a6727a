//! Deterministic integer hash primitives: multiplicative/Fibonacci hashing,
//! the Murmur3 family, and tabulation hashing, over 32- and 64-bit keys.
//!
//! Every primitive is an immutable instance exposing `name()` (diagnostic
//! label) and `hash(key)` (a pure mapping). They are interchangeable mixing
//! functions, not cryptographic hashes: no collision resistance or preimage
//! resistance is claimed or provided. Multiplicative and Murmur instances
//! are stateless constants; tabulation instances randomize their lookup
//! tables once at construction and are read-only afterwards, so all of them
//! can be shared freely across threads.

pub mod hashers;
pub mod mult;
pub mod murmur;
pub mod tabulation;
pub mod types;

pub use hashers::{KeyBuildHasher, KeyHasher};
pub use mult::{MultHash, MultRangeHash};
pub use murmur::{MURMUR3_128_DEFAULT_SEED, Murmur3Hash32, Murmur3Hash128, MurmurFinalizer};
pub use tabulation::{
    FullTabulationHash32, FullTabulationHash64, LargeTabulationHash, MediumTabulationHash,
    SmallTabulationHash, TabulationHash,
};
pub use types::{Hash32, Hash64, Hash128, Hash256, HashWord, to_hash128};
