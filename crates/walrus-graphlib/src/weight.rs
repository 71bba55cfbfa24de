//! Numeric edge weights.
//!
//! Distances are accumulated with [`Weight::relax_add`], which never wraps: integer weights
//! reserve `MAX / 2` as the "unreachable" sentinel and saturate there, so adding any edge
//! weight to the sentinel (or to a real distance) stays representable.

use std::cmp::Ordering;
use std::fmt::Debug;

pub trait Weight: Copy + PartialEq + PartialOrd + Debug {
    const ZERO: Self;
    const ONE: Self;
    /// Reserved "no path" distance. Never the type's true maximum.
    const INFINITY: Self;

    /// Total order used by priority queues and sorts. Floats treat `-0.0` and `0.0` as equal.
    fn compare(&self, other: &Self) -> Ordering;

    /// Adds two distances, saturating at [`Weight::INFINITY`].
    ///
    /// `INFINITY + w == INFINITY` for every `w`, including negative weights.
    fn relax_add(self, rhs: Self) -> Self;

    fn is_infinite(self) -> bool {
        self.compare(&Self::INFINITY) != Ordering::Less
    }

    fn less_than(self, other: Self) -> bool {
        self.compare(&other) == Ordering::Less
    }
}

macro_rules! impl_int_weight {
    ($($t:ty),* $(,)?) => {
        $(
            impl Weight for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const INFINITY: Self = <$t>::MAX / 2;

                fn compare(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }

                fn relax_add(self, rhs: Self) -> Self {
                    if self >= Self::INFINITY || rhs >= Self::INFINITY {
                        return Self::INFINITY;
                    }
                    self.saturating_add(rhs).min(Self::INFINITY)
                }
            }
        )*
    };
}

macro_rules! impl_float_weight {
    ($($t:ty),* $(,)?) => {
        $(
            impl Weight for $t {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;
                const INFINITY: Self = <$t>::INFINITY;

                // `+ 0.0` folds -0.0 into +0.0 so signed zeros compare equal.
                fn compare(&self, other: &Self) -> Ordering {
                    (*self + 0.0).total_cmp(&(*other + 0.0))
                }

                fn relax_add(self, rhs: Self) -> Self {
                    if self == Self::INFINITY || rhs == Self::INFINITY {
                        return Self::INFINITY;
                    }
                    self + rhs
                }
            }
        )*
    };
}

impl_int_weight!(i32, i64, isize, u32, u64, usize);
impl_float_weight!(f32, f64);
