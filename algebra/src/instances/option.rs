use crate::{
  monoid::MonoidInstance,
  semigroup::{combine, Semigroup, SemigroupInstance},
};

/// Adjoins `None` as an identity to any semigroup, so every semigroup `A`
/// yields a monoid `Option<A>`.
fn combine_options<A: SemigroupInstance + Clone>(x: &Option<A>, y: &Option<A>) -> Option<A> {
  match (x, y) {
    (Some(x), Some(y)) => Some(combine(x, y)),
    (Some(only), None) | (None, Some(only)) => Some(only.clone()),
    (None, None) => None,
  }
}

impl<A: SemigroupInstance + Clone> SemigroupInstance for Option<A> {
  const SEMIGROUP: &'static Semigroup<Self> = &Semigroup::new(combine_options);
}

impl<A: SemigroupInstance + Clone> MonoidInstance for Option<A> {
  fn identity() -> Self {
    None
  }
}
