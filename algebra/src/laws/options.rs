/// Knobs for the sampling and exhaustive law checks.
#[derive(Clone, Copy, Debug)]
pub struct LawCheckOptions {
  /// How many random values `check_random` draws. Associativity is checked
  /// over every triple, so the cost is cubic in this.
  pub n_samples: usize,
  pub seed: u64,
  /// Spread exhaustive associativity checks over the rayon thread pool.
  pub parallel: bool,
}

impl LawCheckOptions {
  pub fn with_n_samples(&self, n_samples: usize) -> Self {
    Self { n_samples, ..*self }
  }

  pub fn with_seed(&self, seed: u64) -> Self {
    Self { seed, ..*self }
  }

  pub fn with_parallel(&self, parallel: bool) -> Self {
    Self { parallel, ..*self }
  }
}

impl Default for LawCheckOptions {
  fn default() -> Self {
    Self {
      n_samples: 32,
      seed: 0x8d24_48bd_f720_8b65,
      parallel: true,
    }
  }
}
