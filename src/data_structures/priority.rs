use ordered_float::OrderedFloat;
use std::cmp::Ordering;
use std::fmt::Debug;

/// Numeric types usable as a queue priority
///
/// Only signed integers and floating point types implement this trait. Every
/// implementation provides a total order through [`Priority::cmp_priority`], so
/// the heap never has to deal with incomparable keys.
pub trait Priority: Copy + Debug + PartialOrd {
    /// Total ordering between two priorities
    fn cmp_priority(&self, other: &Self) -> Ordering;
}

macro_rules! impl_priority_for_ints {
    ($($t:ty),*) => {
        $(
            impl Priority for $t {
                #[inline]
                fn cmp_priority(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }
            }
        )*
    };
}

impl_priority_for_ints!(i8, i16, i32, i64, i128, isize);

// IEEE 754 totalOrder: -NaN < -inf < ... < -0.0 < 0.0 < ... < inf < NaN
impl Priority for f32 {
    #[inline]
    fn cmp_priority(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

impl Priority for f64 {
    #[inline]
    fn cmp_priority(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

impl Priority for OrderedFloat<f32> {
    #[inline]
    fn cmp_priority(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl Priority for OrderedFloat<f64> {
    #[inline]
    fn cmp_priority(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}
