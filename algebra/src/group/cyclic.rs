use crate::{
  finite::Finite,
  monoid::MonoidInstance,
  ordinal::Ordinal,
  semigroup::{Semigroup, SemigroupInstance},
};

/// The cyclic group of order `N`: rotations `r0..r(N-1)` under composition.
///
/// Values are always reduced modulo `N`, so every constructible value is one
/// of the `N` elements. `N` must be nonzero:
///
/// ```compile_fail
/// # use algebra::group::Cyclic;
/// let _ = Cyclic::<0>::new(1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cyclic<const N: u16>(u16);

impl<const N: u16> Cyclic<N> {
  const NONEMPTY: () = assert!(N > 0, "the cyclic group of order 0 has no elements");

  /// The rotation `r(value mod N)`.
  pub const fn new(value: u16) -> Self {
    let () = Self::NONEMPTY;
    Self(value % N)
  }

  pub const fn value(&self) -> u16 {
    self.0
  }

  pub const fn const_op(&self, rhs: &Self) -> Self {
    let () = Self::NONEMPTY;
    // Both sides are below N, so the sum fits in u32 for any N.
    Self(((self.0 as u32 + rhs.0 as u32) % N as u32) as u16)
  }

  pub const fn const_identity() -> Self {
    Self::new(0)
  }
}

impl<const N: u16> SemigroupInstance for Cyclic<N> {
  const SEMIGROUP: &'static Semigroup<Self> = &Semigroup::new(Self::const_op);
}

impl<const N: u16> MonoidInstance for Cyclic<N> {
  fn identity() -> Self {
    Self::const_identity()
  }
}

impl<const N: u16> Finite for Cyclic<N> {
  const SIZE: usize = N as usize;
}

impl<const N: u16> Ordinal for Cyclic<N> {
  fn ord(&self) -> usize {
    self.0 as usize
  }

  fn from_ord(ord: usize) -> Self {
    debug_assert!(ord < N as usize);
    Self::new(ord as u16)
  }
}
