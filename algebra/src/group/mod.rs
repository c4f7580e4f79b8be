//! Small finite groups. Every value has an inverse, but only the monoid
//! structure is exposed; they serve as exhaustively checkable instances.

mod cyclic;
mod dihedral;
mod trivial;

pub use cyclic::*;
pub use dihedral::*;
pub use trivial::*;
