use std::{
    fmt,
    iter::Sum,
    marker::PhantomData,
    ops::{Add, AddAssign, Sub},
};

pub trait DistanceUnit: Copy {
    const SYMBOL: &'static str;
    const NANOMETERS: i64;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Meters;

impl DistanceUnit for Meters {
    const SYMBOL: &'static str = "m";
    const NANOMETERS: i64 = 1_000_000_000;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Kilometers;

impl DistanceUnit for Kilometers {
    const SYMBOL: &'static str = "km";
    const NANOMETERS: i64 = 1_000_000_000_000;
}

/// Fixed-point length stored as whole nanometers.
///
/// Sums are exact, so adding the same edges in any order gives the same
/// total, and two searches that find the same path report equal distances.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Distance<T> {
    nanometers: i64,
    unit: PhantomData<T>,
}

impl<T: DistanceUnit> Distance<T> {
    pub const ZERO: Distance<T> = Distance::from_nanometers(0);

    const fn from_nanometers(nanometers: i64) -> Self {
        Distance {
            nanometers,
            unit: PhantomData,
        }
    }

    pub fn nanometers(&self) -> i64 {
        self.nanometers
    }

    #[inline(always)]
    pub fn value(&self) -> f64 {
        self.nanometers as f64 / T::NANOMETERS as f64
    }

    /// Same length expressed in another unit.
    pub fn to<U: DistanceUnit>(self) -> Distance<U> {
        Distance::from_nanometers(self.nanometers)
    }
}

impl<T: DistanceUnit> From<f64> for Distance<T> {
    /// Rounds to the nearest nanometer.
    fn from(value: f64) -> Self {
        Distance::from_nanometers((value * T::NANOMETERS as f64).round() as i64)
    }
}

impl<T: DistanceUnit> From<i64> for Distance<T> {
    fn from(value: i64) -> Self {
        Distance::from_nanometers(value * T::NANOMETERS)
    }
}

impl<T: DistanceUnit> From<Distance<T>> for f64 {
    fn from(distance: Distance<T>) -> Self {
        distance.value()
    }
}

impl<T: DistanceUnit> Add for Distance<T> {
    type Output = Self;

    #[inline(always)]
    fn add(self, other: Self) -> Self {
        Distance::from_nanometers(self.nanometers + other.nanometers)
    }
}

impl<T: DistanceUnit> AddAssign for Distance<T> {
    #[inline(always)]
    fn add_assign(&mut self, other: Self) {
        self.nanometers += other.nanometers;
    }
}

impl<T: DistanceUnit> Sub for Distance<T> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Distance::from_nanometers(self.nanometers - other.nanometers)
    }
}

impl<T: DistanceUnit> Sum for Distance<T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<T: DistanceUnit> fmt::Display for Distance<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.value(), T::SYMBOL)
    }
}

#[macro_export]
macro_rules! meters {
    ($num:expr) => {
        $crate::distance::Distance::<$crate::distance::Meters>::from($num)
    };
}

#[macro_export]
macro_rules! kilometers {
    ($num:expr) => {
        $crate::distance::Distance::<$crate::distance::Kilometers>::from($num)
    };
}
