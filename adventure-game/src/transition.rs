//! Level transition controller.
//!
//! A transition runs `Exiting -> EnteringOffscreen -> Active` and then goes
//! back to idle once the target's post-entry effects are released. The
//! controller never touches timers itself: every phase hands back a
//! [`PhaseTimer`] and the host feeds the tick back through
//! [`TransitionController::on_tick`] when the delay elapses.
//!
//! Every request mints a new token. Ticks carrying an older token are stale
//! and ignored, so a request made mid-transition cancels the previous one and
//! restarts from the element currently tracked as current.
use serde::{Deserialize, Serialize};

use crate::config::TransitionTimings;
use crate::error::NavError;
use crate::level::LevelId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Style tag applied to the level sliding out.
    #[must_use]
    pub const fn exit_class(self) -> &'static str {
        match self {
            Self::Forward => "exit-left",
            Self::Backward => "exit-right",
        }
    }

    /// Where the incoming level waits before sliding in.
    #[must_use]
    pub const fn entry_offset(self) -> Offset {
        match self {
            Self::Forward => Offset::Right,
            Self::Backward => Offset::Left,
        }
    }
}

/// Horizontal resting position of a level element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Offset {
    #[default]
    Center,
    Right,
    Left,
}

impl Offset {
    #[must_use]
    pub const fn transform(self) -> &'static str {
        match self {
            Self::Center => "translateX(0)",
            Self::Right => "translateX(100%)",
            Self::Left => "translateX(-100%)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransitionPhase {
    Idle,
    Exiting,
    EnteringOffscreen,
    Active,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransitionStep {
    ExitComplete,
    Settle,
    PostEntry,
}

impl TransitionStep {
    const fn expected_phase(self) -> TransitionPhase {
        match self {
            Self::ExitComplete => TransitionPhase::Exiting,
            Self::Settle => TransitionPhase::EnteringOffscreen,
            Self::PostEntry => TransitionPhase::Active,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionTick {
    pub token: u64,
    pub step: TransitionStep,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseTimer {
    pub delay_ms: u32,
    pub tick: TransitionTick,
}

/// Level-specific work released once a level has settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelEffect {
    FillXpBar,
    StartGraduationCountdown,
    FillCgpaBar,
}

#[must_use]
pub const fn post_entry_effects(level: LevelId) -> &'static [LevelEffect] {
    match level {
        LevelId::Level2 => &[LevelEffect::FillXpBar],
        LevelId::Level4 => &[
            LevelEffect::StartGraduationCountdown,
            LevelEffect::FillCgpaBar,
        ],
        _ => &[],
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// The tick belongs to a cancelled or finished transition.
    Stale,
    Next(PhaseTimer),
    Settled {
        level: LevelId,
        effects: &'static [LevelEffect],
    },
}

/// Presentation phase of a single level element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPhase {
    Idle,
    Exiting(Direction),
    Entering,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelView {
    pub level: LevelId,
    pub active: bool,
    pub phase: ViewPhase,
    pub offset: Offset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct InFlight {
    token: u64,
    target: LevelId,
    direction: Direction,
    phase: TransitionPhase,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionController {
    timings: TransitionTimings,
    current: Option<LevelId>,
    active: Option<LevelId>,
    offset: Offset,
    exiting: Option<(LevelId, Direction)>,
    in_flight: Option<InFlight>,
    next_token: u64,
}

impl TransitionController {
    /// Controller with `initial` active and centered.
    #[must_use]
    pub const fn new(initial: LevelId, timings: TransitionTimings) -> Self {
        Self {
            timings,
            current: Some(initial),
            active: Some(initial),
            offset: Offset::Center,
            exiting: None,
            in_flight: None,
            next_token: 1,
        }
    }

    #[must_use]
    pub const fn timings(&self) -> TransitionTimings {
        self.timings
    }

    /// The element tracked as current (the target once the exit finishes).
    #[must_use]
    pub const fn current(&self) -> Option<LevelId> {
        self.current
    }

    #[must_use]
    pub const fn active(&self) -> Option<LevelId> {
        self.active
    }

    #[must_use]
    pub fn phase(&self) -> TransitionPhase {
        self.in_flight
            .map_or(TransitionPhase::Idle, |flight| flight.phase)
    }

    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    #[must_use]
    pub fn target(&self) -> Option<LevelId> {
        self.in_flight.map(|flight| flight.target)
    }

    /// Begin a transition to `target`, cancelling any transition in flight.
    pub fn request(&mut self, target: LevelId, direction: Direction) -> PhaseTimer {
        if self.in_flight.take().is_some() {
            self.exiting = None;
        }

        if let Some(source) = self.current {
            if self.active == Some(source) {
                self.active = None;
            }
            self.exiting = Some((source, direction));
        }

        let token = self.next_token;
        self.next_token += 1;
        self.in_flight = Some(InFlight {
            token,
            target,
            direction,
            phase: TransitionPhase::Exiting,
        });

        PhaseTimer {
            delay_ms: self.timings.exit_ms,
            tick: TransitionTick {
                token,
                step: TransitionStep::ExitComplete,
            },
        }
    }

    /// Begin a transition to the level identified by `key`.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::UnknownLevel`] if `key` is not a level; nothing
    /// changes in that case.
    pub fn request_key(
        &mut self,
        key: &str,
        direction: Direction,
    ) -> Result<PhaseTimer, NavError> {
        let target = LevelId::from_key(key)?;
        Ok(self.request(target, direction))
    }

    /// Advance the transition that scheduled `tick`.
    pub fn on_tick(&mut self, tick: TransitionTick) -> TickOutcome {
        let Some(mut flight) = self.in_flight else {
            return TickOutcome::Stale;
        };
        if flight.token != tick.token || flight.phase != tick.step.expected_phase() {
            return TickOutcome::Stale;
        }

        match tick.step {
            TransitionStep::ExitComplete => {
                self.exiting = None;
                self.current = Some(flight.target);
                self.offset = flight.direction.entry_offset();
                flight.phase = TransitionPhase::EnteringOffscreen;
                self.in_flight = Some(flight);
                TickOutcome::Next(self.timer(flight.token, TransitionStep::Settle))
            }
            TransitionStep::Settle => {
                self.active = Some(flight.target);
                self.offset = Offset::Center;
                flight.phase = TransitionPhase::Active;
                self.in_flight = Some(flight);
                TickOutcome::Next(self.timer(flight.token, TransitionStep::PostEntry))
            }
            TransitionStep::PostEntry => {
                self.in_flight = None;
                TickOutcome::Settled {
                    level: flight.target,
                    effects: post_entry_effects(flight.target),
                }
            }
        }
    }

    const fn timer(&self, token: u64, step: TransitionStep) -> PhaseTimer {
        let delay_ms = match step {
            TransitionStep::ExitComplete => self.timings.exit_ms,
            TransitionStep::Settle => self.timings.settle_ms,
            TransitionStep::PostEntry => self.timings.post_entry_ms,
        };
        PhaseTimer {
            delay_ms,
            tick: TransitionTick { token, step },
        }
    }

    /// Snapshot of how `level` should be drawn right now.
    #[must_use]
    pub fn view(&self, level: LevelId) -> LevelView {
        let entering = self.current == Some(level)
            && self.phase() == TransitionPhase::EnteringOffscreen;
        let phase = match self.exiting {
            Some((exiting, direction)) if exiting == level => ViewPhase::Exiting(direction),
            _ if entering => ViewPhase::Entering,
            _ => ViewPhase::Idle,
        };
        let offset = if self.current == Some(level) {
            self.offset
        } else {
            Offset::Center
        };
        LevelView {
            level,
            active: self.active == Some(level),
            phase,
            offset,
        }
    }

    #[must_use]
    pub fn views(&self) -> Vec<LevelView> {
        LevelId::ALL.iter().map(|level| self.view(*level)).collect()
    }
}

impl Default for TransitionController {
    fn default() -> Self {
        Self::new(LevelId::Home, TransitionTimings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn next(outcome: TickOutcome) -> PhaseTimer {
        match outcome {
            TickOutcome::Next(timer) => timer,
            other => panic!("expected a follow-up timer, got {other:?}"),
        }
    }

    fn active_count(ctrl: &TransitionController) -> usize {
        ctrl.views().iter().filter(|view| view.active).count()
    }

    #[test]
    fn forward_transition_walks_every_phase() {
        let mut ctrl = TransitionController::default();
        let exit = ctrl.request(LevelId::Level1, Direction::Forward);
        assert_eq!(exit.delay_ms, 400);
        assert_eq!(ctrl.phase(), TransitionPhase::Exiting);
        assert_eq!(ctrl.active(), None);
        assert_eq!(
            ctrl.view(LevelId::Home).phase,
            ViewPhase::Exiting(Direction::Forward)
        );

        let settle = next(ctrl.on_tick(exit.tick));
        assert_eq!(settle.delay_ms, 50);
        assert_eq!(ctrl.current(), Some(LevelId::Level1));
        let entering = ctrl.view(LevelId::Level1);
        assert_eq!(entering.phase, ViewPhase::Entering);
        assert_eq!(entering.offset, Offset::Right);
        assert!(!entering.active);
        assert_eq!(ctrl.view(LevelId::Home).phase, ViewPhase::Idle);

        let post = next(ctrl.on_tick(settle.tick));
        assert_eq!(post.delay_ms, 800);
        let settled = ctrl.view(LevelId::Level1);
        assert!(settled.active);
        assert_eq!(settled.offset, Offset::Center);

        assert_eq!(
            ctrl.on_tick(post.tick),
            TickOutcome::Settled {
                level: LevelId::Level1,
                effects: &[],
            }
        );
        assert_eq!(ctrl.phase(), TransitionPhase::Idle);
        assert_eq!(active_count(&ctrl), 1);
    }

    #[test]
    fn backward_entry_waits_on_the_left() {
        let mut ctrl = TransitionController::new(LevelId::Level3, TransitionTimings::default());
        let exit = ctrl.request(LevelId::Level2, Direction::Backward);
        assert_eq!(
            ctrl.view(LevelId::Level3).phase,
            ViewPhase::Exiting(Direction::Backward)
        );
        next(ctrl.on_tick(exit.tick));
        assert_eq!(ctrl.view(LevelId::Level2).offset, Offset::Left);
        assert_eq!(Direction::Backward.exit_class(), "exit-right");
    }

    #[test]
    fn level_four_releases_countdown_and_cgpa() {
        let mut ctrl = TransitionController::new(LevelId::Level3, TransitionTimings::default());
        let exit = ctrl.request(LevelId::Level4, Direction::Forward);
        let settle = next(ctrl.on_tick(exit.tick));
        let post = next(ctrl.on_tick(settle.tick));
        let TickOutcome::Settled { effects, .. } = ctrl.on_tick(post.tick) else {
            panic!("transition should settle");
        };
        assert_eq!(
            effects,
            &[LevelEffect::StartGraduationCountdown, LevelEffect::FillCgpaBar]
        );
    }

    #[test]
    fn unknown_key_leaves_everything_untouched() {
        let mut ctrl = TransitionController::default();
        let before = ctrl.clone();
        assert_eq!(
            ctrl.request_key("level9", Direction::Forward),
            Err(NavError::UnknownLevel("level9".into()))
        );
        assert_eq!(ctrl, before);
        assert_eq!(ctrl.active(), Some(LevelId::Home));
    }

    #[test]
    fn overlapping_request_cancels_the_previous_one() {
        let mut ctrl = TransitionController::default();
        let first = ctrl.request(LevelId::Level1, Direction::Forward);
        let settle = next(ctrl.on_tick(first.tick));

        let second = ctrl.request(LevelId::Level2, Direction::Forward);
        assert_eq!(ctrl.on_tick(settle.tick), TickOutcome::Stale);
        assert_eq!(ctrl.on_tick(first.tick), TickOutcome::Stale);
        assert_eq!(
            ctrl.view(LevelId::Level1).phase,
            ViewPhase::Exiting(Direction::Forward)
        );

        let settle = next(ctrl.on_tick(second.tick));
        let post = next(ctrl.on_tick(settle.tick));
        assert!(matches!(
            ctrl.on_tick(post.tick),
            TickOutcome::Settled {
                level: LevelId::Level2,
                ..
            }
        ));
        assert_eq!(ctrl.active(), Some(LevelId::Level2));
        assert_eq!(active_count(&ctrl), 1);
    }

    #[test]
    fn ticks_out_of_order_are_stale() {
        let mut ctrl = TransitionController::default();
        let exit = ctrl.request(LevelId::Level1, Direction::Forward);
        let early = TransitionTick {
            token: exit.tick.token,
            step: TransitionStep::PostEntry,
        };
        assert_eq!(ctrl.on_tick(early), TickOutcome::Stale);
        assert_eq!(ctrl.phase(), TransitionPhase::Exiting);
    }
}
