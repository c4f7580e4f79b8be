use std::{
  collections::{BTreeMap, HashMap},
  env,
  error::Error,
  fmt::Debug,
};

use algebra::{
  direct_product_type,
  group::{Cyclic, Dihedral, Trivial},
  instances::{All, Any, Max, Min, Product, Sum},
  laws::{check_exhaustive, check_random, LawCheckOptions, LawResult},
  ordinal::Ordinal,
  MonoidInstance,
};
use rand::{rngs::StdRng, Rng};
use tracing::info;

type CheckResult = Result<(), Box<dyn Error + Send + Sync + 'static>>;

fn options_from_env() -> Result<LawCheckOptions, Box<dyn Error + Send + Sync + 'static>> {
  let mut options = LawCheckOptions::default();
  if let Ok(n_samples) = env::var("MONOID_LAW_SAMPLES") {
    options = options.with_n_samples(n_samples.parse()?);
  }
  if let Ok(seed) = env::var("MONOID_LAW_SEED") {
    options = options.with_seed(seed.parse()?);
  }
  if env::var_os("MONOID_LAW_SERIAL").is_some() {
    options = options.with_parallel(false);
  }
  Ok(options)
}

fn report(instance: &str, result: LawResult) -> CheckResult {
  result?;
  info!(instance, "laws hold");
  Ok(())
}

fn random<A, F>(instance: &str, options: LawCheckOptions, generate: F) -> CheckResult
where
  A: MonoidInstance + PartialEq + Debug,
  F: FnMut(&mut StdRng) -> A,
{
  report(instance, check_random(options, generate))
}

fn exhaustive<A>(instance: &str, options: LawCheckOptions) -> CheckResult
where
  A: MonoidInstance + Ordinal + PartialEq + Debug + Send + Sync,
{
  report(instance, check_exhaustive::<A>(options))
}

fn short_string(rng: &mut StdRng) -> String {
  (0..rng.random_range(0..6))
    .map(|_| rng.random_range('a'..='e'))
    .collect()
}

fn small_map(rng: &mut StdRng) -> Vec<(u8, i32)> {
  (0..rng.random_range(0..4))
    .map(|_| (rng.random_range(0..4), rng.random_range(-10..10)))
    .collect()
}

fn check_sampled(options: LawCheckOptions) -> CheckResult {
  random("i64", options, |rng| rng.random::<i64>())?;
  random("u8", options, |rng| rng.random::<u8>())?;
  random("Sum<i32>", options, |rng| Sum(rng.random::<i32>()))?;
  random("Product<u16>", options, |rng| Product(rng.random::<u16>()))?;
  random("Min<i64>", options, |rng| Min(rng.random::<i64>()))?;
  random("Max<u32>", options, |rng| Max(rng.random::<u32>()))?;
  random("String", options, short_string)?;
  random("Vec<u8>", options, |rng| short_string(rng).into_bytes())?;
  random("Option<Min<i8>>", options, |rng| {
    rng.random_bool(0.8).then(|| Min(rng.random::<i8>()))
  })?;
  random("(i16, String)", options, |rng| {
    (rng.random::<i16>(), short_string(rng))
  })?;
  random("BTreeMap<u8, i32>", options, |rng| {
    small_map(rng).into_iter().collect::<BTreeMap<_, _>>()
  })?;
  random("HashMap<u8, i32>", options, |rng| {
    small_map(rng).into_iter().collect::<HashMap<_, _>>()
  })
}

fn check_finite(options: LawCheckOptions) -> CheckResult {
  exhaustive::<()>("()", options)?;
  exhaustive::<All>("All", options)?;
  exhaustive::<Any>("Any", options)?;
  exhaustive::<std::cmp::Ordering>("Ordering", options)?;
  exhaustive::<Trivial>("Trivial", options)?;
  exhaustive::<Cyclic<12>>("Cyclic<12>", options)?;
  exhaustive::<Dihedral<6>>("Dihedral<6>", options)?;
  type Product = direct_product_type!(Dihedral<3>, Cyclic<4>, Cyclic<2>);
  exhaustive::<Product>("D3 x C4 x C2", options)
}

fn main() -> CheckResult {
  tracing_subscriber::fmt()
    .with_max_level(tracing::Level::INFO)
    .init();

  let options = options_from_env()?;
  info!(
    n_samples = options.n_samples,
    seed = options.seed,
    parallel = options.parallel,
    "checking monoid laws"
  );

  check_sampled(options)?;
  check_finite(options)
}
