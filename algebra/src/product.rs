use crate::{
  finite::Finite,
  monoid::MonoidInstance,
  ordinal::Ordinal,
  semigroup::{combine, Semigroup, SemigroupInstance},
};

/// The direct product of two algebraic structures, combined component-wise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DirectProduct<L, R> {
  left: L,
  right: R,
}

impl<L, R> DirectProduct<L, R> {
  pub const fn new(left: L, right: R) -> Self {
    Self { left, right }
  }

  pub const fn left(&self) -> &L {
    &self.left
  }

  pub const fn right(&self) -> &R {
    &self.right
  }
}

impl<L, R> DirectProduct<L, R>
where
  L: SemigroupInstance,
  R: SemigroupInstance,
{
  fn combine_components(&self, other: &Self) -> Self {
    Self {
      left: combine(&self.left, &other.left),
      right: combine(&self.right, &other.right),
    }
  }
}

impl<L, R> SemigroupInstance for DirectProduct<L, R>
where
  L: SemigroupInstance,
  R: SemigroupInstance,
{
  const SEMIGROUP: &'static Semigroup<Self> = &Semigroup::new(Self::combine_components);
}

impl<L, R> MonoidInstance for DirectProduct<L, R>
where
  L: MonoidInstance,
  R: MonoidInstance,
{
  fn identity() -> Self {
    Self {
      left: L::identity(),
      right: R::identity(),
    }
  }
}

impl<L, R> Finite for DirectProduct<L, R>
where
  L: Finite,
  R: Finite,
{
  const SIZE: usize = L::SIZE * R::SIZE;
}

impl<L, R> Ordinal for DirectProduct<L, R>
where
  L: Ordinal,
  R: Ordinal,
{
  fn ord(&self) -> usize {
    self.left.ord() + self.right.ord() * L::SIZE
  }

  fn from_ord(ord: usize) -> Self {
    let l = ord % L::SIZE;
    let r = ord / L::SIZE;
    Self {
      left: L::from_ord(l),
      right: R::from_ord(r),
    }
  }
}

#[macro_export]
macro_rules! direct_product_type {
  ($g:ty) => {
    $g
  };
  ($l:ty, $($rs:ty),+) => {
    $crate::product::DirectProduct<$l, $crate::direct_product_type!($($rs),+)>
  }
}

#[macro_export]
macro_rules! direct_product {
  ($g:expr) => {
    $g
  };
  ($l:expr, $($rs:expr),+) => {
    $crate::product::DirectProduct::new($l, $crate::direct_product!($($rs),+))
  }
}
