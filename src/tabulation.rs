//! Tabulation hashing: xor-combine random-table lookups indexed by the bytes
//! of the key.
//!
//! Each instance owns its own `COLUMNS x 256` table of full-width random
//! words, drawn once at construction. Two independently constructed
//! instances are therefore different members of the same hash family; only a
//! fixed instance is a deterministic function.

use crate::hashers::KeyHasher;
use crate::types::HashWord;

pub const TABULATION_ROWS: usize = 256;

/// Tabulation hash over `T`-width keys with `COLUMNS` table columns.
///
/// Byte `i` of the key selects a row in column `i % COLUMNS`; fewer columns
/// than key bytes means columns are reused across byte positions, trading
/// table size for independence.
#[derive(Clone, Debug)]
pub struct TabulationHash<T: HashWord, const COLUMNS: usize> {
    table: Box<[[T; TABULATION_ROWS]; COLUMNS]>,
    seed: T,
}

/// Single-column tabulation hash (16KiB of table for 64-bit words is
/// overkill for one byte of independence, but 2KiB here is cache-resident).
pub type SmallTabulationHash<T> = TabulationHash<T, 1>;
/// Four-column tabulation hash.
pub type MediumTabulationHash<T> = TabulationHash<T, 4>;
/// Eight-column tabulation hash.
pub type LargeTabulationHash<T> = TabulationHash<T, 8>;
/// One column per key byte: every byte position gets its own table.
pub type FullTabulationHash32 = TabulationHash<u32, 4>;
pub type FullTabulationHash64 = TabulationHash<u64, 8>;

impl<T: HashWord, const COLUMNS: usize> TabulationHash<T, COLUMNS> {
    /// Construct with tables drawn from fresh process entropy. Results are
    /// not reproducible across instances; use [`with_rng`](Self::with_rng)
    /// with a seeded rng when reproducibility matters.
    pub fn new() -> Self {
        Self::with_rng(&mut fastrand::Rng::new())
    }

    /// Construct with tables drawn from the supplied rng. Two instances
    /// built from identically seeded rngs hash identically.
    pub fn with_rng(rng: &mut fastrand::Rng) -> Self {
        Self::with_rng_and_seed(rng, T::ZERO)
    }

    /// `seed` is the initial value of the xor accumulator, independent of
    /// table generation. It shifts every output by a fixed xor mask.
    pub fn with_rng_and_seed(rng: &mut fastrand::Rng, seed: T) -> Self {
        const { assert!(COLUMNS > 0, "tabulation hash needs at least one column") }
        let mut table = Box::new([[T::ZERO; TABULATION_ROWS]; COLUMNS]);
        for column in table.iter_mut() {
            for cell in column.iter_mut() {
                *cell = T::random(rng);
            }
        }
        Self { table, seed }
    }

    pub fn name(&self) -> String {
        format!("tabulation_{}x{}_{}", COLUMNS, TABULATION_ROWS, T::BITS)
    }

    pub fn columns(&self) -> usize {
        COLUMNS
    }

    pub fn rows(&self) -> usize {
        TABULATION_ROWS
    }

    #[inline(always)]
    pub fn hash(&self, key: T) -> T {
        let mut out = self.seed;
        for i in 0..T::BYTES {
            out = out ^ self.table[i % COLUMNS][key.byte(i) as usize];
        }
        out
    }
}

impl<T: HashWord, const COLUMNS: usize> Default for TabulationHash<T, COLUMNS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: HashWord, const COLUMNS: usize> KeyHasher<T> for TabulationHash<T, COLUMNS> {
    fn name(&self) -> String {
        TabulationHash::name(self)
    }

    #[inline(always)]
    fn hash(&self, key: T) -> T {
        TabulationHash::hash(self, key)
    }
}
