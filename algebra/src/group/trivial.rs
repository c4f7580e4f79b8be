use crate::{
  finite::Finite,
  monoid::MonoidInstance,
  ordinal::Ordinal,
  semigroup::{Semigroup, SemigroupInstance},
};

/// The group with a single element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Trivial;

impl SemigroupInstance for Trivial {
  const SEMIGROUP: &'static Semigroup<Self> = &Semigroup::new(|_: &Trivial, _: &Trivial| Trivial);
}

impl MonoidInstance for Trivial {
  fn identity() -> Self {
    Self
  }
}

impl Finite for Trivial {
  const SIZE: usize = 1;
}

impl Ordinal for Trivial {
  fn ord(&self) -> usize {
    0
  }

  fn from_ord(_ord: usize) -> Self {
    Self
  }
}

#[cfg(test)]
mod tests {
  use googletest::{expect_true, gtest};

  use crate::{
    group::Trivial,
    laws::{check_exhaustive, LawCheckOptions},
    monoid::empty,
  };

  #[gtest]
  fn test_only_element_is_identity() {
    let options = LawCheckOptions::default();
    expect_true!(empty::<Trivial>() == Trivial);
    expect_true!(check_exhaustive::<Trivial>(options).is_ok());
  }
}
