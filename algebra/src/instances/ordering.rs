use std::cmp::Ordering;

// Lexicographic: the first non-`Equal` comparison decides.
crate::monoid_instance!(
  Ordering,
  |x: &Ordering, y: &Ordering| x.then(*y),
  Ordering::Equal
);
