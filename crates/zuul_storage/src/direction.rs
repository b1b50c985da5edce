//! Exit directions.

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// A direction an exit can lead in.
///
/// Parsing is an exact, case-sensitive match on the lowercase name:
/// `"north"` parses, `"North"` does not.
#[derive(
    Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    /// North
    North,
    /// South
    South,
    /// East
    East,
    /// West
    West,
    /// Up
    Up,
    /// Down
    Down,
}

impl Direction {
    /// Returns the direction leading back the way this one came.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }

    /// Returns the lowercase name of this direction.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }
}
