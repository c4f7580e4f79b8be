use num_traits::{Bounded, One, WrappingAdd, WrappingMul, Zero};

use crate::{
  monoid::MonoidInstance,
  semigroup::{Semigroup, SemigroupInstance},
};

/// Selects the additive monoid of `T`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Sum<T>(pub T);

/// Selects the multiplicative monoid of `T`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Product<T>(pub T);

/// Selects the monoid of `T` under `min`, with `T`'s largest value as the
/// identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Min<T>(pub T);

/// Selects the monoid of `T` under `max`, with `T`'s smallest value as the
/// identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Max<T>(pub T);

fn sum<T: WrappingAdd>(x: &Sum<T>, y: &Sum<T>) -> Sum<T> {
  Sum(x.0.wrapping_add(&y.0))
}

fn product<T: WrappingMul>(x: &Product<T>, y: &Product<T>) -> Product<T> {
  Product(x.0.wrapping_mul(&y.0))
}

fn min<T: Ord + Clone>(x: &Min<T>, y: &Min<T>) -> Min<T> {
  if y.0 < x.0 {
    y.clone()
  } else {
    x.clone()
  }
}

fn max<T: Ord + Clone>(x: &Max<T>, y: &Max<T>) -> Max<T> {
  if y.0 > x.0 {
    y.clone()
  } else {
    x.clone()
  }
}

impl<T: WrappingAdd + 'static> SemigroupInstance for Sum<T> {
  const SEMIGROUP: &'static Semigroup<Self> = &Semigroup::new(sum);
}

impl<T: WrappingAdd + Zero + 'static> MonoidInstance for Sum<T> {
  fn identity() -> Self {
    Sum(T::zero())
  }
}

impl<T: WrappingMul + 'static> SemigroupInstance for Product<T> {
  const SEMIGROUP: &'static Semigroup<Self> = &Semigroup::new(product);
}

impl<T: WrappingMul + One + 'static> MonoidInstance for Product<T> {
  fn identity() -> Self {
    Product(T::one())
  }
}

impl<T: Ord + Clone + 'static> SemigroupInstance for Min<T> {
  const SEMIGROUP: &'static Semigroup<Self> = &Semigroup::new(min);
}

impl<T: Ord + Clone + Bounded + 'static> MonoidInstance for Min<T> {
  fn identity() -> Self {
    Min(T::max_value())
  }
}

impl<T: Ord + Clone + 'static> SemigroupInstance for Max<T> {
  const SEMIGROUP: &'static Semigroup<Self> = &Semigroup::new(max);
}

impl<T: Ord + Clone + Bounded + 'static> MonoidInstance for Max<T> {
  fn identity() -> Self {
    Max(T::min_value())
  }
}

#[cfg(test)]
mod tests {
  use googletest::{gtest, prelude::*};

  use crate::{
    instances::{Max, Min, Product, Sum},
    monoid::empty,
    semigroup::combine,
  };

  #[gtest]
  fn test_identities() {
    expect_that!(empty::<Sum<u32>>().0, eq(0));
    expect_that!(empty::<Product<i16>>().0, eq(1));
    expect_that!(empty::<Min<i8>>().0, eq(i8::MAX));
    expect_that!(empty::<Max<u64>>().0, eq(u64::MIN));
  }

  #[gtest]
  fn test_combine() {
    expect_that!(combine(&Sum(40_u8), &Sum(2)).0, eq(42));
    expect_that!(combine(&Product(6_i32), &Product(7)).0, eq(42));
    expect_that!(combine(&Min(3_i32), &Min(-3)).0, eq(-3));
    expect_that!(combine(&Max(3_i32), &Max(-3)).0, eq(3));
  }

  #[gtest]
  fn test_product_wraps() {
    expect_that!(combine(&Product(16_u8), &Product(16)).0, eq(0));
  }

  #[gtest]
  fn test_bounds_are_neutral() {
    let (top, bottom) = (Min(i32::MAX), Max(i32::MIN));
    expect_that!(combine(&empty(), &top), eq(top));
    expect_that!(combine(&bottom, &empty()), eq(bottom));
  }
}
