use crate::{
  monoid::MonoidInstance,
  semigroup::{combine, Semigroup, SemigroupInstance},
};

fn combine_pairs<A, B>(x: &(A, B), y: &(A, B)) -> (A, B)
where
  A: SemigroupInstance,
  B: SemigroupInstance,
{
  (combine(&x.0, &y.0), combine(&x.1, &y.1))
}

fn combine_triples<A, B, C>(x: &(A, B, C), y: &(A, B, C)) -> (A, B, C)
where
  A: SemigroupInstance,
  B: SemigroupInstance,
  C: SemigroupInstance,
{
  (
    combine(&x.0, &y.0),
    combine(&x.1, &y.1),
    combine(&x.2, &y.2),
  )
}

impl<A, B> SemigroupInstance for (A, B)
where
  A: SemigroupInstance,
  B: SemigroupInstance,
{
  const SEMIGROUP: &'static Semigroup<Self> = &Semigroup::new(combine_pairs);
}

impl<A, B> MonoidInstance for (A, B)
where
  A: MonoidInstance,
  B: MonoidInstance,
{
  fn identity() -> Self {
    (A::identity(), B::identity())
  }
}

impl<A, B, C> SemigroupInstance for (A, B, C)
where
  A: SemigroupInstance,
  B: SemigroupInstance,
  C: SemigroupInstance,
{
  const SEMIGROUP: &'static Semigroup<Self> = &Semigroup::new(combine_triples);
}

impl<A, B, C> MonoidInstance for (A, B, C)
where
  A: MonoidInstance,
  B: MonoidInstance,
  C: MonoidInstance,
{
  fn identity() -> Self {
    (A::identity(), B::identity(), C::identity())
  }
}

#[cfg(test)]
mod tests {
  use crate::{
    instances::{Any, Max, Product},
    monoid::empty,
    semigroup::combine,
  };

  #[test]
  fn test_pairs_combine_componentwise() {
    let x = (3_i32, "ab".to_owned());
    let y = (4_i32, "cd".to_owned());
    assert_eq!(combine(&x, &y), (7, "abcd".to_owned()));
  }

  #[test]
  fn test_triple_identity() {
    type T = (Product<u32>, Max<i8>, Any);
    assert_eq!(empty::<T>(), (Product(1), Max(i8::MIN), Any(false)));
  }

  #[test]
  fn test_identity_is_neutral() {
    let x = (Product(6_u32), Max(-2_i8), Any(true));
    assert_eq!(combine(&empty(), &x), x);
    assert_eq!(combine(&x, &empty()), x);
  }
}
