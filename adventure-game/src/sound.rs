//! Sound toggle. There is no audio yet; cues are only published while enabled.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundCue {
    LevelComplete,
    ButtonClick,
    SkillActivate,
    Back,
}

impl SoundCue {
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::LevelComplete => "Level complete sound",
            Self::ButtonClick => "Button click sound",
            Self::SkillActivate => "Skill activate sound",
            Self::Back => "Back navigation sound",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoundSettings {
    enabled: bool,
}

impl Default for SoundSettings {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl SoundSettings {
    #[must_use]
    pub const fn enabled(self) -> bool {
        self.enabled
    }

    pub const fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }

    #[must_use]
    pub const fn icon(self) -> &'static str {
        if self.enabled { "🔊" } else { "🔇" }
    }

    /// The cue to publish, or `None` while muted.
    #[must_use]
    pub const fn play(self, cue: SoundCue) -> Option<SoundCue> {
        if self.enabled { Some(cue) } else { None }
    }
}
