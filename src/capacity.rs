use core::fmt::{Debug, Display};
use core::iter::Sum;
use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use num_traits::{CheckedAdd, One, Zero};

/// A trait representing an edge capacity (and flow) type which is typically a signed integer.
///
/// Flow on a reverse edge is stored as the negation of its partner's flow, so the type must be
/// signed even though capacities themselves are never negative.
pub trait Capacity:
    Copy
    + Sum<Self>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + Ord
    + AddAssign
    + SubAssign
    + Zero
    + One
    + CheckedAdd
    + Debug
    + Display
    + Default
{
}

impl Capacity for i32 {}

impl Capacity for i64 {}
