use std::fmt::Debug;

use crate::semigroup::{Semigroup, SemigroupInstance};

/// An algebraic monoid: a [`Semigroup`] plus an identity element for its
/// operation.
///
/// The semigroup is held by reference, so a type's canonical semigroup is
/// shared between code that only needs to combine values and code that also
/// needs the identity. Any context that requires only a `Semigroup<A>` can be
/// handed [`Monoid::semigroup`].
///
/// Whoever constructs a `Monoid` promises, for every `x`:
///
/// ```text
/// combine(&empty, &x) == x
/// combine(&x, &empty) == x
/// ```
///
/// where `combine` is the embedded semigroup's operation. Nothing checks
/// this; a violation silently corrupts any result that relies on it.
#[derive(Clone)]
pub struct Monoid<'s, A> {
  semigroup: &'s Semigroup<A>,
  empty: A,
}

impl<'s, A> Monoid<'s, A> {
  pub const fn new(semigroup: &'s Semigroup<A>, empty: A) -> Self {
    Self { semigroup, empty }
  }

  /// The semigroup whose operation `empty` is the identity of.
  pub const fn semigroup(&self) -> &'s Semigroup<A> {
    self.semigroup
  }

  /// The identity element.
  pub const fn empty(&self) -> &A {
    &self.empty
  }

  pub fn into_empty(self) -> A {
    self.empty
  }
}

impl<A> AsRef<Semigroup<A>> for Monoid<'_, A> {
  fn as_ref(&self) -> &Semigroup<A> {
    self.semigroup
  }
}

impl<A: Debug> Debug for Monoid<'_, A> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Monoid")
      .field("semigroup", self.semigroup)
      .field("empty", &self.empty)
      .finish()
  }
}

/// Types with a canonical monoid, located by trait resolution.
///
/// Every `MonoidInstance` is also a [`SemigroupInstance`], so a monoid type can
/// be passed anywhere only a semigroup is required.
pub trait MonoidInstance: SemigroupInstance {
  /// The identity element of `Self::SEMIGROUP`.
  fn identity() -> Self;

  /// The canonical capability record for `Self`.
  ///
  /// Always embeds `Self::SEMIGROUP`; overriding this to embed anything else
  /// breaks every consumer that widens a monoid to its semigroup.
  fn monoid() -> Monoid<'static, Self> {
    Monoid::new(Self::SEMIGROUP, Self::identity())
  }
}

/// The identity value of `A`'s canonical monoid.
pub fn empty<A: MonoidInstance>() -> A {
  A::monoid().into_empty()
}

/// Declares the canonical semigroup and monoid of a type in one place.
///
/// ```
/// # use algebra::{monoid::empty, monoid_instance, semigroup::combine};
/// #[derive(Clone, Copy, Debug, PartialEq)]
/// struct Xor(u8);
///
/// monoid_instance!(Xor, |x: &Xor, y: &Xor| Xor(x.0 ^ y.0), Xor(0));
///
/// assert_eq!(combine(&empty::<Xor>(), &Xor(5)), Xor(5));
/// ```
#[macro_export]
macro_rules! monoid_instance {
  ($t:ty, $combine:expr, $identity:expr) => {
    $crate::semigroup_instance!($t, $combine);

    impl $crate::monoid::MonoidInstance for $t {
      fn identity() -> Self {
        $identity
      }
    }
  };
}

#[cfg(test)]
mod tests {
  use googletest::{expect_true, gtest, prelude::*};

  use crate::{
    monoid::{empty, Monoid, MonoidInstance},
    semigroup::{combine, Semigroup, SemigroupInstance},
  };

  fn combine_twice<A: SemigroupInstance>(x: &A) -> A {
    combine(x, x)
  }

  fn combine_with(semigroup: &Semigroup<i64>, x: i64, y: i64) -> i64 {
    semigroup.combine(&x, &y)
  }

  #[gtest]
  fn test_empty_is_zero_for_integers() {
    expect_that!(empty::<i64>(), eq(0));
    expect_that!(empty::<u8>(), eq(0));
  }

  #[gtest]
  fn test_integer_scenario() {
    let zero = empty::<i64>();
    expect_that!(combine(&zero, &5), eq(5));
    expect_that!(combine(&5, &zero), eq(5));
    expect_that!(combine(&combine(&2, &3), &4), eq(9));
    expect_that!(combine(&2, &combine(&3, &4)), eq(9));
  }

  #[gtest]
  fn test_accessor_matches_record() {
    let monoid = i64::monoid();
    expect_that!(empty::<i64>(), eq(*monoid.empty()));
    assert_eq!(empty::<String>(), String::monoid().into_empty());
  }

  #[gtest]
  fn test_monoid_widens_to_semigroup() {
    let monoid = i64::monoid();
    for (x, y) in [(1, 2), (-7, 3), (i64::MAX, 1)] {
      expect_that!(combine_with(monoid.semigroup(), x, y), eq(combine(&x, &y)));
      expect_that!(combine_with(monoid.as_ref(), x, y), eq(combine(&x, &y)));
    }
    expect_that!(combine_twice(&21_i64), eq(42));
  }

  #[gtest]
  fn test_local_dictionary() {
    let products = Semigroup::new(|x: &i64, y: &i64| x * y);
    let monoid = Monoid::new(&products, 1);

    expect_that!(monoid.semigroup().combine(monoid.empty(), &7), eq(7));
    expect_that!(monoid.semigroup().combine(&6, &7), eq(42));
  }

  #[gtest]
  fn test_clone_keeps_semigroup() {
    let monoid = String::monoid();
    let copy = monoid.clone();
    assert_eq!(
      copy.semigroup().combine(&"a".to_owned(), &"b".to_owned()),
      "ab"
    );
    assert_eq!(copy.into_empty(), "");
  }

  #[gtest]
  fn test_debug_shows_empty() {
    expect_true!(format!("{:?}", i64::monoid()).contains("empty: 0"));
  }
}
