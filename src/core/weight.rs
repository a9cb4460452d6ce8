use std::{cmp::Ordering, ops::Add};

/// Edge weight and path distance.
///
/// [`Weight::inf`] is the reserved "no edge" value. A graph never stores it as
/// a weight of an existing edge, see [`Weight::is_reserved`].
pub trait Weight: PartialOrd + Add<Self, Output = Self> + Clone + Sized {
    fn zero() -> Self;
    fn inf() -> Self;
    fn is_unsigned() -> bool;

    /// Addition that returns `None` instead of overflowing.
    ///
    /// A sum that is [reserved](Weight::is_reserved) counts as an overflow
    /// too, so a valid distance never coincides with the sentinel.
    fn checked_add(self, other: Self) -> Option<Self>;

    /// Returns `true` if the value cannot be used as an edge weight.
    ///
    /// That is the case of the sentinel [`Weight::inf`] and of values that are
    /// not comparable with it (NaN).
    fn is_reserved(&self) -> bool {
        !matches!(self.partial_cmp(&Self::inf()), Some(Ordering::Less | Ordering::Greater))
    }
}

macro_rules! impl_int_weight {
    ($ty:ty, $is_unsigned:expr) => {
        impl Weight for $ty {
            fn zero() -> Self {
                0
            }

            fn inf() -> Self {
                <$ty>::MAX
            }

            fn is_unsigned() -> bool {
                $is_unsigned
            }

            fn checked_add(self, other: Self) -> Option<Self> {
                <$ty>::checked_add(self, other).filter(|sum| *sum != <$ty>::MAX)
            }
        }
    };
}

impl_int_weight!(i8, false);
impl_int_weight!(i16, false);
impl_int_weight!(i32, false);
impl_int_weight!(i64, false);
impl_int_weight!(u8, true);
impl_int_weight!(u16, true);
impl_int_weight!(u32, true);
impl_int_weight!(u64, true);
impl_int_weight!(isize, false);
impl_int_weight!(usize, true);

macro_rules! impl_float_weight {
    ($ty:ty) => {
        impl Weight for $ty {
            fn zero() -> Self {
                <$ty>::default()
            }

            fn inf() -> Self {
                <$ty>::INFINITY
            }

            fn is_unsigned() -> bool {
                false
            }

            fn checked_add(self, other: Self) -> Option<Self> {
                Some(self + other).filter(|sum| sum.is_finite())
            }
        }
    };
}

impl_float_weight!(f32);
impl_float_weight!(f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_values() {
        assert!(i32::MAX.is_reserved());
        assert!(!(i32::MAX - 1).is_reserved());
        assert!(!0u8.is_reserved());
        assert!(f64::INFINITY.is_reserved());
        assert!(f32::NAN.is_reserved());
        assert!(!(-1.5f32).is_reserved());
    }

    #[test]
    fn checked_addition() {
        assert_eq!(Weight::checked_add(3u8, 4), Some(7));
        assert_eq!(Weight::checked_add(i32::MAX - 1, 5), None);
        assert_eq!(Weight::checked_add(-3i8, -4), Some(-7));
        assert_eq!(Weight::checked_add(i8::MIN, -1), None);
    }

    #[test]
    fn checked_addition_never_reaches_sentinel() {
        assert_eq!(Weight::checked_add(200u8, 54), Some(254));
        assert_eq!(Weight::checked_add(200u8, 55), None);
        assert_eq!(Weight::checked_add(0.5f32, 0.25), Some(0.75));
        assert_eq!(Weight::checked_add(f64::MAX, f64::MAX), None);
    }
}
