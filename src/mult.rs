//! Multiplicative (Fibonacci) hashing: `(key * A mod 2^w) >> (w - p)`.
//!
//! The high bits of the wrapping product `key * A` avalanche far better than
//! the low bits, so the engine keeps the top `p` bits of the product. Three
//! constant families are provided per width: a fixed odd prime ("prime"), the
//! fractional part of the golden ratio ("Fibonacci"), and a prime close to
//! the golden-ratio constant ("Fibonacci prime").

use crate::hashers::KeyHasher;
use crate::types::HashWord;

#[derive(Clone, Copy, Debug)]
enum Family {
    Prime,
    Fibonacci,
    FibonacciPrime,
}

impl Family {
    fn base_name(self) -> &'static str {
        match self {
            Family::Prime => "MultHash",
            Family::Fibonacci => "MultFibonacci",
            Family::FibonacciPrime => "MultFibonacciPrime",
        }
    }

    fn constant<T: HashWord>(self) -> T {
        match self {
            Family::Prime => T::MULT_PRIME,
            Family::Fibonacci => T::MULT_FIBONACCI,
            Family::FibonacciPrime => T::MULT_FIBONACCI_PRIME,
        }
    }
}

/// Multiplicative hash keeping the top `p` bits of `key * A mod 2^w`.
///
/// Output domain is `[0, 2^p)`; `p` defaults to the full width `w`.
#[derive(Clone, Copy, Debug)]
pub struct MultHash<T: HashWord> {
    constant: T,
    family: Family,
    output_bits: u32,
}

impl<T: HashWord> MultHash<T> {
    pub fn prime() -> Self {
        Self::family(Family::Prime, T::BITS)
    }

    pub fn fibonacci() -> Self {
        Self::family(Family::Fibonacci, T::BITS)
    }

    pub fn fibonacci_prime() -> Self {
        Self::family(Family::FibonacciPrime, T::BITS)
    }

    /// Same family selection, narrowed to the top `output_bits` bits.
    ///
    /// Panics if `output_bits > w`; that is a construction-time programmer
    /// error, not a value-level failure.
    pub fn prime_top(output_bits: u32) -> Self {
        Self::family(Family::Prime, output_bits)
    }

    pub fn fibonacci_top(output_bits: u32) -> Self {
        Self::family(Family::Fibonacci, output_bits)
    }

    pub fn fibonacci_prime_top(output_bits: u32) -> Self {
        Self::family(Family::FibonacciPrime, output_bits)
    }

    fn family(family: Family, output_bits: u32) -> Self {
        assert!(
            output_bits <= T::BITS,
            "output width {} exceeds word width {}",
            output_bits,
            T::BITS,
        );
        Self {
            constant: family.constant::<T>(),
            family,
            output_bits,
        }
    }

    pub fn name(&self) -> String {
        if self.output_bits == T::BITS {
            format!("{}{}", self.family.base_name(), T::BITS)
        } else {
            format!("{}{}_top{}", self.family.base_name(), T::BITS, self.output_bits)
        }
    }

    /// `(key * A mod 2^w) >> (w - p)`. The product wraps mod `2^w`; the
    /// arithmetic is modular, never checked or saturating.
    #[inline(always)]
    pub fn hash(&self, key: T) -> T {
        key.wrapping_mul(self.constant)
            .shr_full(T::BITS - self.output_bits)
    }
}

impl<T: HashWord> KeyHasher<T> for MultHash<T> {
    fn name(&self) -> String {
        MultHash::name(self)
    }

    #[inline(always)]
    fn hash(&self, key: T) -> T {
        MultHash::hash(self, key)
    }
}

/// Multiplicative hash scaling directly into `[0, bound)`:
/// `((key * A mod 2^w) * N) >> w`.
///
/// Used where the primitive doubles as a range-reducing hash. Kept separate
/// from [`MultHash`] because the output domains differ.
#[derive(Clone, Copy, Debug)]
pub struct MultRangeHash<T: HashWord> {
    constant: T,
    family: Family,
    bound: T,
}

impl<T: HashWord> MultRangeHash<T> {
    pub fn prime(bound: T) -> Self {
        Self { constant: Family::Prime.constant::<T>(), family: Family::Prime, bound }
    }

    pub fn fibonacci(bound: T) -> Self {
        Self { constant: Family::Fibonacci.constant::<T>(), family: Family::Fibonacci, bound }
    }

    pub fn fibonacci_prime(bound: T) -> Self {
        Self {
            constant: Family::FibonacciPrime.constant::<T>(),
            family: Family::FibonacciPrime,
            bound,
        }
    }

    pub fn name(&self) -> String {
        format!("{}{}_range", self.family.base_name(), T::BITS)
    }

    #[inline(always)]
    pub fn hash(&self, key: T) -> T {
        key.wrapping_mul(self.constant).scale(self.bound)
    }
}
