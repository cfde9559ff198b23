use num_traits::Zero;
use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Neg, Shl};

/// A 128-bit signed two's-complement integer stored as a high/low word
/// pair. The value is `high * 2^64 + low`, interpreted as two's-complement
/// over 128 bits, and the decomposition is unique after every operation.
///
/// Only the operations the flip predicate needs are implemented:
/// construction from 32/64-bit integers, addition, negation, left shift,
/// ordering, and the exact 64x64->128 product. Addition wraps around like
/// any fixed-width integer; the predicate guarantees its sums stay in
/// range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Int128 {
  high: i64,
  low: u64,
}

impl Int128 {
  /// Exact product of two signed 64-bit integers, with the full 128-bit
  /// result. Never loses precision and never overflows.
  ///
  /// The magnitudes are split into 32-bit halves and the four 64-bit
  /// partial products are accumulated at bit offsets 0, 32, 32 and 64.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use delaunay_flip::Int128;
  /// assert_eq!(Int128::mul_wide(3, -4), Int128::from(-12i64));
  /// assert!(Int128::mul_wide(i64::MAX, i64::MAX) > Int128::from(u64::MAX));
  /// ```
  pub fn mul_wide(a: i64, b: i64) -> Int128 {
    let neg = (a < 0) != (b < 0);
    // unsigned_abs is total, i64::MIN included.
    let a = a.unsigned_abs();
    let b = b.unsigned_abs();

    let ah = a >> 32;
    let al = a & 0xffff_ffff;
    let bh = b >> 32;
    let bl = b & 0xffff_ffff;

    // Long multiplication with 64-bit partial products:
    //
    //            ah al
    //          * bh bl
    //   ---------------
    //            al*bl   (t1)
    //  +      ah*bl      (t2)
    //  +      al*bh      (t3)
    //  +   ah*bh         (t4)
    let t1 = al * bl;
    let t2 = ah * bl;
    let t3 = al * bh;
    let t4 = ah * bh;

    // |a|, |b| <= 2^63, so t4 <= 2^62 and the magnitude fits 126 bits.
    let mut r = Int128 {
      high: t4 as i64,
      low: t1,
    };
    r += Int128::from(t2) << 32;
    r += Int128::from(t3) << 32;

    if neg {
      -r
    } else {
      r
    }
  }
}

impl From<i64> for Int128 {
  // Sign extension: the high word replicates the sign bit.
  fn from(v: i64) -> Int128 {
    Int128 {
      high: v >> 63,
      low: v as u64,
    }
  }
}

impl From<i32> for Int128 {
  fn from(v: i32) -> Int128 {
    Int128::from(i64::from(v))
  }
}

impl From<u64> for Int128 {
  fn from(v: u64) -> Int128 {
    Int128 { high: 0, low: v }
  }
}

impl From<u32> for Int128 {
  fn from(v: u32) -> Int128 {
    Int128::from(u64::from(v))
  }
}

impl Shl<u32> for Int128 {
  type Output = Int128;

  /// Shifts left by `amt` bits, i.e. multiplies by `2^amt`.
  ///
  /// # Panics
  ///
  /// Panics unless `0 < amt < 64`. The predicate only ever shifts by 32;
  /// amounts of 0 or 64 and more would read past a word boundary and are
  /// outside the domain of this operation.
  fn shl(self, amt: u32) -> Int128 {
    assert!(0 < amt && amt < 64, "shift amount out of domain: {}", amt);
    Int128 {
      high: ((self.low >> (64 - amt)) as i64) | (self.high << amt),
      low: self.low << amt,
    }
  }
}

impl AddAssign for Int128 {
  // Wraparound is the intended two's-complement semantics, not an error.
  fn add_assign(&mut self, rhs: Int128) {
    self.low = self.low.wrapping_add(rhs.low);
    let carry = self.low < rhs.low;
    self.high = self.high.wrapping_add(rhs.high);
    if carry {
      self.high = self.high.wrapping_add(1);
    }
  }
}

impl Add for Int128 {
  type Output = Int128;
  fn add(mut self, rhs: Int128) -> Int128 {
    self += rhs;
    self
  }
}

impl Neg for Int128 {
  type Output = Int128;

  // Two's-complement: invert both words, then increment. When the
  // incremented low word wraps to zero the carry moves into the high word.
  fn neg(mut self) -> Int128 {
    self.low = !self.low;
    self.high = !self.high;
    self.low = self.low.wrapping_add(1);
    if self.low == 0 {
      self.high = self.high.wrapping_add(1);
    }
    self
  }
}

impl Ord for Int128 {
  // Signed on the high word, unsigned on the low word.
  fn cmp(&self, other: &Int128) -> Ordering {
    self.high.cmp(&other.high).then(self.low.cmp(&other.low))
  }
}

impl PartialOrd for Int128 {
  fn partial_cmp(&self, other: &Int128) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl Zero for Int128 {
  fn zero() -> Int128 {
    Int128 { high: 0, low: 0 }
  }
  fn is_zero(&self) -> bool {
    self.high == 0 && self.low == 0
  }
}

#[cfg(test)]
#[cfg(not(tarpaulin_include))]
mod tests {
  use super::*;
  use num::BigInt;
  use proptest::prelude::*;
  use test_strategy::proptest;

  fn to_i128(v: Int128) -> i128 {
    (i128::from(v.high) << 64) | i128::from(v.low)
  }

  fn from_i128(v: i128) -> Int128 {
    Int128 {
      high: (v >> 64) as i64,
      low: v as u64,
    }
  }

  #[proptest]
  fn mul_wide_matches_bigint(a: i64, b: i64) {
    prop_assert_eq!(
      BigInt::from(to_i128(Int128::mul_wide(a, b))),
      BigInt::from(a) * BigInt::from(b)
    );
  }

  #[test]
  fn mul_wide_extremes() {
    for &a in &[i64::MIN, -(1 << 62), -1, 0, 1, 1 << 31, i64::MAX] {
      for &b in &[i64::MIN, -(1 << 32), -1, 0, 1, i64::MAX] {
        assert_eq!(
          to_i128(Int128::mul_wide(a, b)),
          i128::from(a) * i128::from(b),
          "a={}, b={}",
          a,
          b
        );
      }
    }
  }

  #[proptest]
  fn add_wraps_like_i128(a: i128, b: i128) {
    prop_assert_eq!(to_i128(from_i128(a) + from_i128(b)), a.wrapping_add(b));
  }

  #[test]
  fn add_carries_across_words() {
    let x = Int128 {
      high: 0,
      low: u64::MAX,
    };
    assert_eq!(to_i128(x + x), 2 * i128::from(u64::MAX));
    assert_eq!((x + x).high, 1);
  }

  #[proptest]
  fn neg_involution(v: i128) {
    let x = from_i128(v);
    prop_assert_eq!(-(-x), x);
    prop_assert!((x + -x).is_zero());
  }

  #[test]
  fn neg_carries_across_words() {
    // -(-2^64): the inverted low word is all ones, so the increment must
    // carry into the high word.
    let x = from_i128(-(1i128 << 64));
    assert_eq!(to_i128(-x), 1i128 << 64);
  }

  #[proptest]
  fn ord_matches_i128(a: i128, b: i128) {
    prop_assert_eq!(from_i128(a).cmp(&from_i128(b)), a.cmp(&b));
  }

  #[test]
  fn ord_signed_high_unsigned_low() {
    assert!(Int128::from(-1i64) < Int128::from(0u32));
    assert!(Int128::from(u64::MAX) < from_i128(1i128 << 64));
    assert!(from_i128(-1 - (1i128 << 64)) < from_i128(-(1i128 << 64)));
  }

  #[proptest]
  fn shl_is_exact(v: i64, #[strategy(1u32..64)] amt: u32) {
    prop_assert_eq!(to_i128(Int128::from(v) << amt), i128::from(v) << amt);
  }

  #[test]
  fn shl_moves_bits_across_words() {
    assert_eq!(
      Int128::from(u64::MAX) << 32,
      from_i128(i128::from(u64::MAX) << 32)
    );
  }

  #[test]
  #[should_panic]
  fn shl_by_zero_is_out_of_domain() {
    let _ = Int128::from(1u64) << 0;
  }

  #[test]
  fn extension_rules() {
    assert_eq!(
      Int128::from(-1i32),
      Int128 {
        high: -1,
        low: u64::MAX
      }
    );
    assert_eq!(Int128::from(1u32), Int128 { high: 0, low: 1 });
    assert_eq!(
      Int128::from(i64::MIN),
      Int128 {
        high: -1,
        low: 1 << 63
      }
    );
    assert_eq!(
      Int128::from(u64::MAX),
      Int128 {
        high: 0,
        low: u64::MAX
      }
    );
  }
}
