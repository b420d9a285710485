//! Skill bars and the staggered power-up animation.
use serde::{Deserialize, Serialize};

use crate::config::SkillTimings;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency, 0..=100.
    pub level: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillStep {
    Fill,
    GlowOff,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillTick {
    pub epoch: u32,
    pub index: usize,
    pub step: SkillStep,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillTimer {
    pub delay_ms: u32,
    pub tick: SkillTick,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BarState {
    pub filled: bool,
    pub glowing: bool,
}

/// Fill state of every skill bar.
///
/// Ticks carry the epoch that scheduled them; `reset` bumps the epoch so a
/// restart mid-animation does not refill bars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillsBoard {
    skills: Vec<Skill>,
    bars: Vec<BarState>,
    timings: SkillTimings,
    epoch: u32,
}

impl SkillsBoard {
    #[must_use]
    pub fn new(skills: Vec<Skill>, timings: SkillTimings) -> Self {
        let bars = vec![BarState::default(); skills.len()];
        Self {
            skills,
            bars,
            timings,
            epoch: 0,
        }
    }

    #[must_use]
    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    #[must_use]
    pub fn bar(&self, index: usize) -> BarState {
        self.bars.get(index).copied().unwrap_or_default()
    }

    /// Width the bar at `index` should be drawn with, in percent.
    #[must_use]
    pub fn fill_percent(&self, index: usize) -> u8 {
        match (self.skills.get(index), self.bar(index).filled) {
            (Some(skill), true) => skill.level.min(100),
            _ => 0,
        }
    }

    #[must_use]
    pub fn all_filled(&self) -> bool {
        self.bars.iter().all(|bar| bar.filled)
    }

    /// Schedule the fill of every bar, `stagger_ms` apart.
    #[must_use]
    pub fn activate(&self) -> Vec<SkillTimer> {
        (0..self.skills.len())
            .map(|index| SkillTimer {
                delay_ms: u32::try_from(index)
                    .unwrap_or(u32::MAX)
                    .saturating_mul(self.timings.stagger_ms),
                tick: SkillTick {
                    epoch: self.epoch,
                    index,
                    step: SkillStep::Fill,
                },
            })
            .collect()
    }

    /// Apply a tick. A fill returns the timer that clears its glow.
    pub fn on_tick(&mut self, tick: SkillTick) -> Option<SkillTimer> {
        if tick.epoch != self.epoch {
            return None;
        }
        let bar = self.bars.get_mut(tick.index)?;
        match tick.step {
            SkillStep::Fill => {
                bar.filled = true;
                bar.glowing = true;
                Some(SkillTimer {
                    delay_ms: self.timings.glow_ms,
                    tick: SkillTick {
                        step: SkillStep::GlowOff,
                        ..tick
                    },
                })
            }
            SkillStep::GlowOff => {
                bar.glowing = false;
                None
            }
        }
    }

    pub fn reset(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
        self.bars.fill(BarState::default());
    }
}
