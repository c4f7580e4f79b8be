use std::cmp::Ordering;

/// Types with finitely many values, where the count depends only on the type.
/// Lets law checks enumerate every value instead of sampling.
pub trait Finite {
  /// The number of distinct values of `Self`.
  const SIZE: usize;

  fn size() -> usize {
    Self::SIZE
  }
}

impl Finite for () {
  const SIZE: usize = 1;
}

impl Finite for bool {
  const SIZE: usize = 2;
}

impl Finite for Ordering {
  const SIZE: usize = 3;
}
