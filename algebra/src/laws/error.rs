use std::{error::Error, fmt::Display};

/// The algebraic law a [`LawViolation`] refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Law {
  Associativity,
  LeftIdentity,
  RightIdentity,
  /// `empty::<A>()` disagrees with the identity held by `A::monoid()` or
  /// returned by `A::identity()`.
  EmptyAccessor,
  /// The semigroup embedded in `A::monoid()` disagrees with
  /// `A::SEMIGROUP`.
  SharedSemigroup,
}

impl Display for Law {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let name = match self {
      Self::Associativity => "associativity",
      Self::LeftIdentity => "left identity",
      Self::RightIdentity => "right identity",
      Self::EmptyAccessor => "empty accessor",
      Self::SharedSemigroup => "shared semigroup",
    };
    write!(f, "{name}")
  }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LawViolation {
  law: Law,
  message: String,
}

impl LawViolation {
  pub fn new(law: Law, message: String) -> Self {
    LawViolation { law, message }
  }

  pub fn law(&self) -> Law {
    self.law
  }

  pub fn message(&self) -> &str {
    &self.message
  }
}

impl Error for LawViolation {}

impl Display for LawViolation {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{} violated: {}", self.law, self.message)
  }
}

#[macro_export]
macro_rules! make_law_violation {
  ($law:expr, $($args:expr),+) => {
    $crate::laws::LawViolation::new($law, format!($($args),+))
  };
}

pub type LawResult<T = ()> = Result<T, LawViolation>;
