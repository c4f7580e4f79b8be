use crate::{finite::Finite, ordinal::Ordinal};

/// Selects the monoid of `bool` under `&&`, with `true` as the identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct All(pub bool);

/// Selects the monoid of `bool` under `||`, with `false` as the identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Any(pub bool);

crate::monoid_instance!(All, |x: &All, y: &All| All(x.0 && y.0), All(true));
crate::monoid_instance!(Any, |x: &Any, y: &Any| Any(x.0 || y.0), Any(false));
crate::monoid_instance!((), |_: &(), _: &()| (), ());

impl Finite for All {
  const SIZE: usize = bool::SIZE;
}

impl Ordinal for All {
  fn ord(&self) -> usize {
    self.0.ord()
  }

  fn from_ord(ord: usize) -> Self {
    All(bool::from_ord(ord))
  }
}

impl Finite for Any {
  const SIZE: usize = bool::SIZE;
}

impl Ordinal for Any {
  fn ord(&self) -> usize {
    self.0.ord()
  }

  fn from_ord(ord: usize) -> Self {
    Any(bool::from_ord(ord))
  }
}
