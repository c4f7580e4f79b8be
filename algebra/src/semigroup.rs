use std::{any::type_name, fmt::Debug};

/// An algebraic semigroup over `A`, carried around as a value.
///
/// A `Semigroup` is a single binary operation on `A`. Whoever constructs one
/// promises that the operation is associative, for all `x`, `y` and `z`:
///
/// ```text
/// combine(&combine(&x, &y), &z) == combine(&x, &combine(&y, &z))
/// ```
///
/// Nothing checks this at construction time. Use the helpers in
/// [`crate::laws`] to test an instance.
pub struct Semigroup<A> {
  combine: fn(&A, &A) -> A,
}

impl<A> Semigroup<A> {
  pub const fn new(combine: fn(&A, &A) -> A) -> Self {
    Self { combine }
  }

  /// Combines `x` and `y`, in that order.
  pub fn combine(&self, x: &A, y: &A) -> A {
    (self.combine)(x, y)
  }
}

impl<A> Clone for Semigroup<A> {
  fn clone(&self) -> Self {
    *self
  }
}

impl<A> Copy for Semigroup<A> {}

impl<A> Debug for Semigroup<A> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Semigroup")
      .field("over", &type_name::<A>())
      .finish_non_exhaustive()
  }
}

/// Types with a canonical semigroup, located by trait resolution.
///
/// The semigroup lives in a `'static` so that every consumer of `Self`'s
/// semigroup, including the one embedded in its
/// [`Monoid`](crate::monoid::Monoid), shares a single operation.
pub trait SemigroupInstance: Sized + 'static {
  const SEMIGROUP: &'static Semigroup<Self>;
}

/// The canonical semigroup for `A`.
pub fn semigroup<A: SemigroupInstance>() -> &'static Semigroup<A> {
  A::SEMIGROUP
}

/// Combines `x` and `y` with the canonical semigroup for `A`.
pub fn combine<A: SemigroupInstance>(x: &A, y: &A) -> A {
  A::SEMIGROUP.combine(x, y)
}

/// Declares the canonical semigroup of a type.
///
/// ```
/// # use algebra::{semigroup::combine, semigroup_instance};
/// #[derive(Clone, Copy, Debug, PartialEq)]
/// struct MaxU8(u8);
///
/// semigroup_instance!(MaxU8, |x: &MaxU8, y: &MaxU8| MaxU8(x.0.max(y.0)));
///
/// assert_eq!(combine(&MaxU8(3), &MaxU8(7)), MaxU8(7));
/// ```
#[macro_export]
macro_rules! semigroup_instance {
  ($t:ty, $combine:expr) => {
    impl $crate::semigroup::SemigroupInstance for $t {
      const SEMIGROUP: &'static $crate::semigroup::Semigroup<Self> =
        &$crate::semigroup::Semigroup::new($combine);
    }
  };
}

#[cfg(test)]
mod tests {
  use googletest::{expect_true, gtest, prelude::*};

  use crate::semigroup::{combine, semigroup, Semigroup};

  fn concat(x: &String, y: &String) -> String {
    format!("{x}{y}")
  }

  #[gtest]
  fn test_explicit_dictionary() {
    let strings = Semigroup::new(concat);
    assert_eq!(strings.combine(&"ab".to_owned(), &"cd".to_owned()), "abcd");
  }

  #[gtest]
  fn test_combine_is_ordered() {
    let strings = Semigroup::new(concat);
    assert_eq!(strings.combine(&"x".to_owned(), &"y".to_owned()), "xy");
    assert_eq!(strings.combine(&"y".to_owned(), &"x".to_owned()), "yx");
  }

  #[gtest]
  fn test_copy_shares_operation() {
    let sums: Semigroup<i32> = Semigroup::new(|x: &i32, y: &i32| x + y);
    let copy = sums;
    expect_that!(copy.combine(&2, &3), eq(sums.combine(&2, &3)));
  }

  #[gtest]
  fn test_resolved_semigroup() {
    expect_that!(combine(&2_i64, &3_i64), eq(5));
    expect_that!(semigroup::<i64>().combine(&4, &-4), eq(0));
  }

  #[gtest]
  fn test_debug_names_type() {
    let sums: Semigroup<i32> = Semigroup::new(|x: &i32, y: &i32| x + y);
    expect_true!(format!("{sums:?}").contains("i32"));
  }
}
