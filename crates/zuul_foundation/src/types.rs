//! Room identifiers and item weights.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// Default carry limit for the player, in grams.
pub const MAX_CARRY_WEIGHT: Weight = Weight::grams(5000);

/// Index of a room in the world's room arena.
///
/// Rooms never move or disappear once the world is built, so a `RoomId`
/// stays valid for the lifetime of the world that issued it.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct RoomId(u32);

impl RoomId {
    /// Creates a room id from a raw arena index.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Returns the arena index as a `usize`.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RoomId({})", self.0)
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Room({})", self.0)
    }
}

/// A weight in grams.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Weight(u32);

impl Weight {
    /// No weight at all.
    pub const ZERO: Self = Self(0);

    /// Creates a weight from grams.
    #[must_use]
    pub const fn grams(grams: u32) -> Self {
        Self(grams)
    }

    /// Returns the weight in grams.
    #[must_use]
    pub const fn as_grams(self) -> u32 {
        self.0
    }

    /// Adds two weights, returning `None` on overflow.
    #[must_use]
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(sum) => Some(Self(sum)),
            None => None,
        }
    }
}

impl Add for Weight {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl Sum for Weight {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Weight> for Weight {
    fn sum<I: Iterator<Item = &'a Weight>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}g", self.0)
    }
}
