//! Pitch-class algebra over the 12-element cyclic space

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Rem, Sub, SubAssign};

use serde::{Deserialize, Serialize};

/// Number of pitch classes in an octave
pub const SEMITONES: u8 = 12;

/// A pitch class in 12-TET, always normalized into `0..=11`.
///
/// All arithmetic wraps modulo 12. Conversion from any integer reduces with
/// euclidean remainder, so `-1` becomes `11`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub struct PitchClass(u8);

impl PitchClass {
    pub const C: Self = Self(0);
    pub const TRITONE: Self = Self(6);
    pub const FIFTH: Self = Self(7);

    /// Reduce any integer into a pitch class
    pub fn new(value: i64) -> Self {
        Self(value.rem_euclid(SEMITONES as i64) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Cyclic successor: 11 wraps to 0
    pub fn succ(self) -> Self {
        self + Self(1)
    }

    /// Cyclic predecessor: 0 wraps to 11
    pub fn pred(self) -> Self {
        self - Self(1)
    }

    /// Mirror image `12 - v`, used for set inversion
    pub fn complement(self) -> Self {
        Self::C - self
    }

    /// Interval class of this value read as a directed interval, folded into `0..=6`
    pub fn interval_class(self) -> u8 {
        if self.0 <= 6 { self.0 } else { SEMITONES - self.0 }
    }

    pub fn checked_div(self, rhs: Self) -> Option<Self> {
        self.0.checked_div(rhs.0).map(Self)
    }

    pub fn checked_rem(self, rhs: Self) -> Option<Self> {
        self.0.checked_rem(rhs.0).map(Self)
    }

    /// Endless cyclic enumeration starting at `start`
    pub fn cycle_from(start: Self) -> impl Iterator<Item = PitchClass> {
        std::iter::successors(Some(start), |pc| Some(pc.succ()))
    }

    /// All twelve pitch classes in ascending order
    pub fn all() -> impl Iterator<Item = PitchClass> {
        (0..SEMITONES).map(Self)
    }
}

impl From<i64> for PitchClass {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<i32> for PitchClass {
    fn from(value: i32) -> Self {
        Self::new(value as i64)
    }
}

impl From<u8> for PitchClass {
    fn from(value: u8) -> Self {
        Self(value % SEMITONES)
    }
}

impl From<PitchClass> for u8 {
    fn from(pc: PitchClass) -> Self {
        pc.0
    }
}

impl From<PitchClass> for i32 {
    fn from(pc: PitchClass) -> Self {
        pc.0 as i32
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for PitchClass {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self((self.0 + rhs.0) % SEMITONES)
    }
}

impl Sub for PitchClass {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self((self.0 + SEMITONES - rhs.0) % SEMITONES)
    }
}

impl Mul for PitchClass {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self((self.0 * rhs.0) % SEMITONES)
    }
}

impl AddAssign for PitchClass {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for PitchClass {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for PitchClass {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// Negation is the identity on this representation. Use [`PitchClass::complement`]
/// for the additive inverse.
impl Neg for PitchClass {
    type Output = Self;
    fn neg(self) -> Self {
        self
    }
}

/// Integer division of the representatives. Panics when `rhs` is zero.
impl Div for PitchClass {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        match self.checked_div(rhs) {
            Some(q) => q,
            None => panic!("pitch class division by zero"),
        }
    }
}

/// Remainder of the representatives. Panics when `rhs` is zero.
impl Rem for PitchClass {
    type Output = Self;
    fn rem(self, rhs: Self) -> Self {
        match self.checked_rem(rhs) {
            Some(r) => r,
            None => panic!("pitch class remainder by zero"),
        }
    }
}
