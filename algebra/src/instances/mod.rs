//! Canonical semigroup and monoid instances for standard library types, plus
//! newtypes selecting alternative monoids over the same underlying type.
//!
//! Floating point types have no instance: their addition is not associative.

mod collections;
mod int;
mod logic;
mod num;
mod option;
mod ordering;
mod tuple;

pub use logic::*;
pub use num::*;
