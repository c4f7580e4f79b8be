use std::fmt::Debug;

use crate::{
  finite::Finite,
  monoid::MonoidInstance,
  ordinal::Ordinal,
  semigroup::{Semigroup, SemigroupInstance},
};

/// The dihedral group of order `2N`: the symmetries of a regular `N`-gon,
/// `N` rotations `r0..r(N-1)` and `N` reflections `s0..s(N-1)`.
///
/// Indices are reduced modulo `N` on construction. `N` must be nonzero:
///
/// ```compile_fail
/// # use algebra::group::Dihedral;
/// let _ = Dihedral::<0>::rot(1);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dihedral<const N: u16> {
  index: u16,
  reflected: bool,
}

impl<const N: u16> Dihedral<N> {
  const NONEMPTY: () = assert!(N > 0, "the dihedral group of order 0 has no elements");

  /// The rotation `r(i mod N)`.
  pub const fn rot(i: u16) -> Self {
    let () = Self::NONEMPTY;
    Self {
      index: i % N,
      reflected: false,
    }
  }

  /// The reflection `s(i mod N)`.
  pub const fn rfl(i: u16) -> Self {
    let () = Self::NONEMPTY;
    Self {
      index: i % N,
      reflected: true,
    }
  }

  pub const fn index(&self) -> u16 {
    self.index
  }

  pub const fn is_reflection(&self) -> bool {
    self.reflected
  }

  /// While const traits are nightly-only, define const versions of the trait
  /// impls manually.
  pub const fn const_identity() -> Self {
    Self::rot(0)
  }

  pub const fn const_ord(self) -> usize {
    if self.reflected {
      N as usize + self.index as usize
    } else {
      self.index as usize
    }
  }

  /// `r_i r_j = r_(i+j)`, `r_i s_j = s_(i+j)`, `s_i r_j = s_(i-j)` and
  /// `s_i s_j = r_(i-j)`.
  pub const fn const_op(&self, rhs: &Self) -> Self {
    let () = Self::NONEMPTY;
    let (i, j, n) = (self.index as u32, rhs.index as u32, N as u32);
    let index = if self.reflected { n + i - j } else { i + j };
    Self {
      index: (index % n) as u16,
      reflected: self.reflected != rhs.reflected,
    }
  }
}

impl<const N: u16> SemigroupInstance for Dihedral<N> {
  const SEMIGROUP: &'static Semigroup<Self> = &Semigroup::new(Self::const_op);
}

impl<const N: u16> MonoidInstance for Dihedral<N> {
  fn identity() -> Self {
    Self::const_identity()
  }
}

impl<const N: u16> Finite for Dihedral<N> {
  const SIZE: usize = 2 * (N as usize);
}

impl<const N: u16> Ordinal for Dihedral<N> {
  fn ord(&self) -> usize {
    Self::const_ord(*self)
  }

  fn from_ord(ord: usize) -> Self {
    if ord < N as usize {
      Self::rot(ord as u16)
    } else {
      debug_assert!(ord < 2 * N as usize);
      Self::rfl((ord - N as usize) as u16)
    }
  }
}

impl<const N: u16> Debug for Dihedral<N> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let name = if self.reflected { "Rfl" } else { "Rot" };
    f.debug_tuple(name).field(&self.index).finish()
  }
}

#[cfg(test)]
mod tests {
  use googletest::{gtest, prelude::*};
  use rstest::rstest;

  use super::*;
  use crate::{
    laws::{check_exhaustive, check_instance, LawCheckOptions},
    monoid::empty,
    semigroup::combine,
  };

  fn permute_all<const N: u16>() {
    for i in 0..(2 * N) {
      let a: Dihedral<N> = if i < N {
        Dihedral::rot(i)
      } else {
        Dihedral::rfl(i - N)
      };
      assert_eq!(a.ord(), i as usize);
      assert_eq!(Dihedral::from_ord(i as usize), a);

      for j in 0..(2 * N) {
        let b = if j < N {
          Dihedral::rot(j)
        } else {
          Dihedral::rfl(j - N)
        };

        let expected = match (i < N, j < N) {
          (true, true) => Dihedral::rot((i + j) % N),
          (true, false) => Dihedral::rfl((i + j - N) % N),
          (false, true) => Dihedral::rfl((i - j) % N),
          (false, false) => Dihedral::rot((i + N - j) % N),
        };
        assert_eq!(combine(&a, &b), expected);
      }
    }
  }

  fn laws<const N: u16>() {
    assert_eq!(
      check_exhaustive::<Dihedral<N>>(LawCheckOptions::default()),
      Ok(())
    );
  }

  #[rstest]
  #[case::order_2(permute_all::<1>)]
  #[case::order_4(permute_all::<2>)]
  #[case::order_6(permute_all::<3>)]
  #[case::order_8(permute_all::<4>)]
  #[case::order_10(permute_all::<5>)]
  #[case::order_12(permute_all::<6>)]
  fn test_ops(#[case] check: fn()) {
    check();
  }

  #[rstest]
  #[case::order_2(laws::<1>)]
  #[case::order_6(laws::<3>)]
  #[case::order_14(laws::<7>)]
  fn test_laws(#[case] check: fn()) {
    check();
  }

  #[test]
  fn test_not_commutative() {
    let r = Dihedral::<3>::rot(1);
    let s = Dihedral::<3>::rfl(0);
    assert_ne!(combine(&r, &s), combine(&s, &r));
  }

  #[gtest]
  fn test_out_of_range_indices_are_reduced() {
    type D3 = Dihedral<3>;

    let seven = D3::rot(7);
    expect_that!(seven, eq(D3::rot(1)));
    expect_that!(D3::rfl(5), eq(D3::rfl(2)));
    expect_that!(combine(&seven, &empty()), eq(seven));
    expect_that!(combine(&empty(), &D3::rfl(5)), eq(D3::rfl(5)));

    let samples = [seven, D3::rfl(5), D3::rot(u16::MAX), D3::rfl(3)];
    assert_eq!(check_instance(&samples), Ok(()));
  }

  #[gtest]
  fn test_large_order_does_not_overflow() {
    type Largest = Dihedral<{ u16::MAX }>;

    let top = u16::MAX - 1;
    expect_that!(
      combine(&Largest::rot(top), &Largest::rot(top)),
      eq(Largest::rot(top - 1))
    );
    expect_that!(
      combine(&Largest::rfl(1), &Largest::rot(top)),
      eq(Largest::rfl(2))
    );
    expect_that!(
      combine(&Largest::rfl(0), &Largest::rfl(top)),
      eq(Largest::rot(1))
    );

    let samples = [
      Largest::rot(0),
      Largest::rot(40000),
      Largest::rfl(top),
      Largest::rfl(3),
    ];
    assert_eq!(check_instance(&samples), Ok(()));
  }

  #[test]
  fn test_debug() {
    assert_eq!(format!("{:?}", Dihedral::<5>::rot(2)), "Rot(2)");
    assert_eq!(format!("{:?}", Dihedral::<5>::rfl(4)), "Rfl(4)");
  }
}
