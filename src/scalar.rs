use num_traits::Float;
use std::fmt;
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

pub trait Scalar:  // Avoid repeating all the traits
    Float
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + std::iter::Sum<Self>
    + Default
    + fmt::Debug
    + fmt::Display
    + Send
    + Sync
    + 'static
{
    /// Widen to `f64` for elimination and accumulation.
    fn widen(self) -> f64;

    /// Narrow an `f64` accumulator back to the element type.
    fn narrow(value: f64) -> Self;
}

impl Scalar for f32 {
    #[inline(always)]
    fn widen(self) -> f64 {
        self as f64
    }

    #[inline(always)]
    fn narrow(value: f64) -> Self {
        value as f32
    }
}

impl Scalar for f64 {
    #[inline(always)]
    fn widen(self) -> f64 {
        self
    }

    #[inline(always)]
    fn narrow(value: f64) -> Self {
        value
    }
}
