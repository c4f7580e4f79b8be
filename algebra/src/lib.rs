//! A monoid capability: a [`Semigroup`] plus an identity element, usable as
//! an explicitly passed record ([`Monoid`]) or located by trait resolution
//! ([`MonoidInstance`], [`empty`]).

pub mod finite;
pub mod group;
pub mod instances;
pub mod laws;
pub mod monoid;
pub mod ordinal;
pub mod product;
pub mod semigroup;

pub use monoid::{empty, Monoid, MonoidInstance};
pub use semigroup::{combine, semigroup, Semigroup, SemigroupInstance};
