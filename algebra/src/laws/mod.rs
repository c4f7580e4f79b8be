//! Checks for the laws every semigroup and monoid instance must obey.
//!
//! The type system cannot enforce associativity or identity, so instance
//! authors are expected to run these over sampled (or, for finite types,
//! all) values in their tests.

mod error;
mod options;

use std::{any::type_name, fmt::Debug};

pub use error::*;
use itertools::iproduct;
pub use options::*;
use rand::{rngs::StdRng, SeedableRng};
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::{
  make_law_violation,
  monoid::{empty, Monoid, MonoidInstance},
  ordinal::Ordinal,
  semigroup::{combine, Semigroup},
};

fn log_violation<A>(result: LawResult) -> LawResult {
  result.inspect_err(|violation| {
    warn!(
      law = %violation.law(),
      type_name = type_name::<A>(),
      "{}",
      violation.message()
    )
  })
}

/// Checks `(x <> y) <> z == x <> (y <> z)`.
pub fn check_associativity<A>(semigroup: &Semigroup<A>, x: &A, y: &A, z: &A) -> LawResult
where
  A: PartialEq + Debug,
{
  let grouped_left = semigroup.combine(&semigroup.combine(x, y), z);
  let grouped_right = semigroup.combine(x, &semigroup.combine(y, z));
  if grouped_left == grouped_right {
    Ok(())
  } else {
    Err(make_law_violation!(
      Law::Associativity,
      "({:?} <> {:?}) <> {:?} = {:?}, but {:?} <> ({:?} <> {:?}) = {:?}",
      x,
      y,
      z,
      grouped_left,
      x,
      y,
      z,
      grouped_right
    ))
  }
}

/// Checks `empty <> x == x`.
pub fn check_left_identity<A>(monoid: &Monoid<A>, x: &A) -> LawResult
where
  A: PartialEq + Debug,
{
  let combined = monoid.semigroup().combine(monoid.empty(), x);
  if combined == *x {
    Ok(())
  } else {
    Err(make_law_violation!(
      Law::LeftIdentity,
      "{:?} <> {:?} = {:?}",
      monoid.empty(),
      x,
      combined
    ))
  }
}

/// Checks `x <> empty == x`.
pub fn check_right_identity<A>(monoid: &Monoid<A>, x: &A) -> LawResult
where
  A: PartialEq + Debug,
{
  let combined = monoid.semigroup().combine(x, monoid.empty());
  if combined == *x {
    Ok(())
  } else {
    Err(make_law_violation!(
      Law::RightIdentity,
      "{:?} <> {:?} = {:?}",
      x,
      monoid.empty(),
      combined
    ))
  }
}

/// Checks associativity over every ordered triple drawn from `samples`.
pub fn check_semigroup_laws<A>(semigroup: &Semigroup<A>, samples: &[A]) -> LawResult
where
  A: PartialEq + Debug,
{
  debug!(
    type_name = type_name::<A>(),
    n_samples = samples.len(),
    "checking semigroup laws"
  );
  log_violation::<A>(
    iproduct!(samples, samples, samples)
      .try_for_each(|(x, y, z)| check_associativity(semigroup, x, y, z)),
  )
}

fn check_identities<A>(monoid: &Monoid<A>, samples: &[A]) -> LawResult
where
  A: PartialEq + Debug,
{
  samples.iter().try_for_each(|x| {
    check_left_identity(monoid, x)?;
    check_right_identity(monoid, x)
  })
}

/// Checks both identity laws for each of `samples`, then associativity over
/// every triple.
pub fn check_monoid_laws<A>(monoid: &Monoid<A>, samples: &[A]) -> LawResult
where
  A: PartialEq + Debug,
{
  debug!(
    type_name = type_name::<A>(),
    n_samples = samples.len(),
    "checking monoid laws"
  );
  log_violation::<A>(check_identities(monoid, samples))?;
  check_semigroup_laws(monoid.semigroup(), samples)
}

/// Checks that the trait-resolved pieces of `A`'s instance agree with its
/// capability record: `empty::<A>()` is the record's identity, and combining
/// through the record's semigroup matches combining through
/// `A::SEMIGROUP`.
///
/// Each of `empty::<A>()`, `A::monoid()` and `A::identity()` calls
/// `identity()` afresh, so the accessor check fails when `identity()` does not
/// return the same value every time.
fn check_resolution<A>(samples: &[A]) -> LawResult
where
  A: MonoidInstance + PartialEq + Debug,
{
  let monoid = A::monoid();
  let resolved_empty = empty::<A>();
  let identity = A::identity();
  if resolved_empty != *monoid.empty() || resolved_empty != identity {
    return Err(make_law_violation!(
      Law::EmptyAccessor,
      "empty() = {:?}, but the monoid holds {:?} and identity() = {:?}",
      resolved_empty,
      monoid.empty(),
      identity
    ));
  }

  iproduct!(samples, samples).try_for_each(|(x, y)| {
    let widened = monoid.semigroup().combine(x, y);
    let resolved = combine(x, y);
    if widened == resolved {
      Ok(())
    } else {
      Err(make_law_violation!(
        Law::SharedSemigroup,
        "{:?} <> {:?} = {:?} through the monoid, but {:?} through the semigroup",
        x,
        y,
        widened,
        resolved
      ))
    }
  })
}

/// Runs every law against the canonical instance of `A` over `samples`.
pub fn check_instance<A>(samples: &[A]) -> LawResult
where
  A: MonoidInstance + PartialEq + Debug,
{
  log_violation::<A>(check_resolution(samples))?;
  check_monoid_laws(&A::monoid(), samples)
}

/// Draws `options.n_samples` values with `generate` from a seeded rng, adds the
/// identity, and runs [`check_instance`] over them.
pub fn check_random<A, F>(options: LawCheckOptions, mut generate: F) -> LawResult
where
  A: MonoidInstance + PartialEq + Debug,
  F: FnMut(&mut StdRng) -> A,
{
  let mut rng = StdRng::seed_from_u64(options.seed);
  let samples = std::iter::once(empty::<A>())
    .chain((0..options.n_samples).map(|_| generate(&mut rng)))
    .collect::<Vec<_>>();
  check_instance(&samples)
}

/// Checks every law over every element (and every triple of elements) of a
/// finite type.
pub fn check_exhaustive<A>(options: LawCheckOptions) -> LawResult
where
  A: MonoidInstance + Ordinal + PartialEq + Debug + Send + Sync,
{
  let elements = A::elements().collect::<Vec<_>>();
  debug!(
    type_name = type_name::<A>(),
    n_elements = elements.len(),
    parallel = options.parallel,
    "checking laws exhaustively"
  );

  log_violation::<A>(check_resolution(&elements))?;
  let monoid = A::monoid();
  log_violation::<A>(check_identities(&monoid, &elements))?;

  let semigroup = monoid.semigroup();
  let check_from = |x: &A| {
    iproduct!(&elements, &elements).try_for_each(|(y, z)| check_associativity(semigroup, x, y, z))
  };
  let associativity = if options.parallel {
    elements.par_iter().try_for_each(check_from)
  } else {
    elements.iter().try_for_each(check_from)
  };
  log_violation::<A>(associativity)
}
