//! Adventure Resume core
//!
//! Platform-agnostic logic for the game-like resume: the level table,
//! progress/history tracking, the level transition state machine, skill bars,
//! contact form checks and resume content. Nothing here touches the browser;
//! hosts schedule the returned timers and feed the ticks back.

pub mod config;
pub mod contact;
pub mod error;
pub mod level;
pub mod meters;
pub mod progress;
pub mod resume;
pub mod session;
pub mod skills;
pub mod sound;
pub mod timeline;
pub mod transition;

// Re-export commonly used types
pub use config::{QuestConfig, SkillTimings, TransitionTimings};
pub use contact::{ContactDraft, ContactMessage};
pub use error::{ContactError, ContactField, DataError, NavError};
pub use level::{FINAL_LEVEL, LevelId, TOTAL_LEVELS};
pub use meters::{Countdown, LevelMeters};
pub use progress::NavigationState;
pub use resume::{LevelCopy, ResumeProfile};
pub use session::{Command, Dispatch, QuestSession, SessionEvent, Tick, Timer};
pub use skills::{BarState, Skill, SkillsBoard};
pub use sound::{SoundCue, SoundSettings};
pub use timeline::Timeline;
pub use transition::{
    Direction, LevelEffect, LevelView, Offset, TickOutcome, TransitionController,
    TransitionPhase, ViewPhase,
};

/// Build a session from the embedded configuration and resume profile.
///
/// # Errors
///
/// Returns an error if the embedded resume profile cannot be parsed.
pub fn session_from_static() -> Result<(QuestSession, ResumeProfile), DataError> {
    let profile = ResumeProfile::load_from_static()?;
    let session = QuestSession::new(QuestConfig::load_from_static(), profile.skills.clone());
    Ok((session, profile))
}
