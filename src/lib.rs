#![deny(clippy::cast_lossless)]
use num_bigint::BigInt;
use num_traits::Zero;
use std::ops::Neg;

pub mod data;
mod predicates;
mod wide;

pub use predicates::{should_flip, should_flip_with, MAX_COORD};
pub use wide::Int128;

/// An integer wide enough to hold the predicate's per-edge dot and cross
/// products exactly: products of two 64-bit coordinate differences plus
/// one addition.
///
/// Together with [`CrossScalar`] this is the strategy parameter of the
/// predicate. Only construction-by-product, addition, negation and
/// ordering are required of a backend.
pub trait EdgeScalar: Zero + Neg<Output = Self> + Ord {
  /// The exact product `a * b`.
  fn product(a: i64, b: i64) -> Self;
}

/// An integer wide enough to hold the predicate's final sine-sum terms
/// exactly: products of two [`EdgeScalar`] values. For bounded coordinates
/// these are 126-bit quantities, hence the 128-bit fixed-width backend
/// [`Int128`].
pub trait CrossScalar<E>: Zero + Ord {
  /// The exact product `a * b` of two edge-role values.
  fn product(a: &E, b: &E) -> Self;
}

impl EdgeScalar for i64 {
  // Exact by the predicate's coordinate bound; a violated bound panics in
  // checked builds (see `overflow-checks` in Cargo.toml).
  fn product(a: i64, b: i64) -> Self {
    a * b
  }
}

impl EdgeScalar for i128 {
  fn product(a: i64, b: i64) -> Self {
    i128::from(a) * i128::from(b)
  }
}

impl EdgeScalar for BigInt {
  fn product(a: i64, b: i64) -> Self {
    BigInt::from(a) * BigInt::from(b)
  }
}

impl CrossScalar<i64> for Int128 {
  fn product(a: &i64, b: &i64) -> Self {
    Int128::mul_wide(*a, *b)
  }
}

impl CrossScalar<i64> for i128 {
  fn product(a: &i64, b: &i64) -> Self {
    i128::from(*a) * i128::from(*b)
  }
}

impl CrossScalar<i128> for i128 {
  fn product(a: &i128, b: &i128) -> Self {
    a * b
  }
}

impl CrossScalar<i64> for BigInt {
  fn product(a: &i64, b: &i64) -> Self {
    BigInt::from(*a) * BigInt::from(*b)
  }
}

impl CrossScalar<BigInt> for BigInt {
  fn product(a: &BigInt, b: &BigInt) -> Self {
    a * b
  }
}
