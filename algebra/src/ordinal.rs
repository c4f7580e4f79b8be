use std::cmp::Ordering;

use crate::finite::Finite;

/// A trait for finite sets with labeled elements.
pub trait Ordinal: Finite + Sized {
  /// Returns a unique integer for each element of a set which exactly covers
  /// the range (0..size). There must exist an element associated with each
  /// number in the range.
  fn ord(&self) -> usize;

  /// The inverse of `ord`, returns the element associated with the ordinal.
  fn from_ord(ord: usize) -> Self;

  /// Every element of the set, in order of their ordinals.
  fn elements() -> impl Iterator<Item = Self> {
    (0..Self::SIZE).map(Self::from_ord)
  }
}

impl Ordinal for () {
  fn ord(&self) -> usize {
    0
  }

  fn from_ord(_ord: usize) -> Self {}
}

impl Ordinal for bool {
  fn ord(&self) -> usize {
    *self as usize
  }

  fn from_ord(ord: usize) -> Self {
    debug_assert!(ord < Self::SIZE);
    ord != 0
  }
}

impl Ordinal for Ordering {
  fn ord(&self) -> usize {
    (*self as i8 + 1) as usize
  }

  fn from_ord(ord: usize) -> Self {
    match ord {
      0 => Ordering::Less,
      1 => Ordering::Equal,
      _ => {
        debug_assert!(ord < Self::SIZE);
        Ordering::Greater
      }
    }
  }
}
