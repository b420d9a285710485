//! Level identifiers and the lookup table between indices and element keys.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::NavError;

/// Number of levels in the quest, homepage and final screen included.
pub const TOTAL_LEVELS: u8 = 8;

/// Index of the final level.
pub const FINAL_LEVEL: u8 = TOTAL_LEVELS - 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LevelId {
    #[serde(rename = "homepage")]
    Home,
    Level1,
    Level2,
    Level3,
    Level4,
    Level5,
    Level6,
    #[serde(rename = "finalLevel")]
    Final,
}

impl LevelId {
    pub const ALL: [Self; TOTAL_LEVELS as usize] = [
        Self::Home,
        Self::Level1,
        Self::Level2,
        Self::Level3,
        Self::Level4,
        Self::Level5,
        Self::Level6,
        Self::Final,
    ];

    /// Level at `index`, or `None` past the final level.
    #[must_use]
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::Home => 0,
            Self::Level1 => 1,
            Self::Level2 => 2,
            Self::Level3 => 3,
            Self::Level4 => 4,
            Self::Level5 => 5,
            Self::Level6 => 6,
            Self::Final => 7,
        }
    }

    /// Stable element key used for the level's DOM id.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Home => "homepage",
            Self::Level1 => "level1",
            Self::Level2 => "level2",
            Self::Level3 => "level3",
            Self::Level4 => "level4",
            Self::Level5 => "level5",
            Self::Level6 => "level6",
            Self::Final => "finalLevel",
        }
    }

    /// Resolve an element key.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::UnknownLevel`] when `key` is not in the level table.
    pub fn from_key(key: &str) -> Result<Self, NavError> {
        Self::ALL
            .iter()
            .copied()
            .find(|level| level.key() == key)
            .ok_or_else(|| NavError::UnknownLevel(key.to_string()))
    }

    #[must_use]
    pub const fn is_home(self) -> bool {
        matches!(self, Self::Home)
    }

    #[must_use]
    pub const fn is_final(self) -> bool {
        matches!(self, Self::Final)
    }

    #[must_use]
    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    #[must_use]
    pub fn previous(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }
}

impl fmt::Display for LevelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for LevelId {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s)
    }
}
