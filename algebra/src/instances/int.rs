/// Integers combine by wrapping addition, so the operation is total and
/// associative over the whole range.
macro_rules! wrapping_sum_instance {
  ($($t:ty),+ $(,)?) => {
    $(
      crate::monoid_instance!($t, |x: &$t, y: &$t| x.wrapping_add(*y), 0);
    )+
  };
}

wrapping_sum_instance!(i8, i16, i32, i64, i128, isize);
wrapping_sum_instance!(u8, u16, u32, u64, u128, usize);
