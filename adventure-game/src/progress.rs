//! Progress and history tracking for the level sequence.
use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

use crate::level::{FINAL_LEVEL, LevelId, TOTAL_LEVELS};

pub type History = SmallVec<[u8; TOTAL_LEVELS as usize]>;

/// Current level, back-navigation history and the skills gate.
///
/// `history` is never empty and its last entry always equals `current_level`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationState {
    current_level: u8,
    history: History,
    skills_activated: bool,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            current_level: 0,
            history: smallvec![0],
            skills_activated: false,
        }
    }

    #[must_use]
    pub const fn current_level(&self) -> u8 {
        self.current_level
    }

    /// Current level as a [`LevelId`].
    #[must_use]
    pub fn current(&self) -> LevelId {
        LevelId::from_index(self.current_level).unwrap_or(LevelId::Home)
    }

    #[must_use]
    pub fn history(&self) -> &[u8] {
        &self.history
    }

    #[must_use]
    pub const fn skills_activated(&self) -> bool {
        self.skills_activated
    }

    #[must_use]
    pub const fn is_at_start(&self) -> bool {
        self.current_level == 0
    }

    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.current_level == FINAL_LEVEL
    }

    /// Move one level forward. Returns `false` at the final level.
    pub fn advance(&mut self) -> bool {
        if self.current_level >= FINAL_LEVEL {
            return false;
        }
        self.current_level += 1;
        self.history.push(self.current_level);
        true
    }

    /// Pop the history stack. Returns `false` when only the first entry is left.
    pub fn retreat(&mut self) -> bool {
        if self.history.len() <= 1 {
            return false;
        }
        self.history.pop();
        if let Some(&top) = self.history.last() {
            self.current_level = top;
        }
        true
    }

    /// Make `level` current, keeping only the visited levels below it.
    /// Returns `false` when `level` is already current.
    pub fn jump_to(&mut self, level: LevelId) -> bool {
        let target = level.index();
        if target == self.current_level {
            return false;
        }
        self.history.retain(|visited| *visited < target);
        self.history.push(target);
        self.current_level = target;
        true
    }

    pub fn reset(&mut self) {
        self.current_level = 0;
        self.skills_activated = false;
        self.history = smallvec![0];
    }

    /// Open the one-shot skills gate. Returns `true` only on the first call
    /// since the last reset.
    pub fn activate_skills(&mut self) -> bool {
        if self.skills_activated {
            return false;
        }
        self.skills_activated = true;
        true
    }

    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        f64::from(self.current_level) / f64::from(FINAL_LEVEL) * 100.0
    }

    #[must_use]
    pub fn status_label(&self) -> String {
        match self.current_level {
            0 => "READY TO START".to_string(),
            FINAL_LEVEL => "QUEST COMPLETE".to_string(),
            level => format!("LEVEL {level}"),
        }
    }
}
