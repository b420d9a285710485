//! The quest session: one explicit owner for all navigation state.
//!
//! Input handlers turn user gestures into [`Command`]s. Each command or timer
//! tick returns a [`Dispatch`] holding the timers the host must schedule and
//! the events the presentation layer reacts to.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::QuestConfig;
use crate::contact::ContactMessage;
use crate::error::NavError;
use crate::level::LevelId;
use crate::meters::{LevelMeters, MeterTargets};
use crate::progress::NavigationState;
use crate::skills::{Skill, SkillTick, SkillsBoard};
use crate::sound::{SoundCue, SoundSettings};
use crate::transition::{Direction, PhaseTimer, TickOutcome, TransitionController, TransitionTick};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Continue,
    Back,
    Restart,
    ActivateSkills,
    ToggleSound,
    ContactSent(ContactMessage),
    CloseModal,
    DownloadResume,
    GoToKey { key: String, direction: Direction },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tick {
    Transition(TransitionTick),
    Skill(SkillTick),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    pub delay_ms: u32,
    pub tick: Tick,
}

impl From<PhaseTimer> for Timer {
    fn from(timer: PhaseTimer) -> Self {
        Self {
            delay_ms: timer.delay_ms,
            tick: Tick::Transition(timer.tick),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    ProgressChanged { percent: f64, label: String },
    TransitionStarted {
        from: Option<LevelId>,
        to: LevelId,
        direction: Direction,
    },
    LevelSettled(LevelId),
    Blocked(NavError),
    Sound(SoundCue),
    SoundToggled(bool),
    SkillsActivated,
    ContactReceived { name: String },
    ModalClosed,
    DownloadRequested,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dispatch {
    pub timers: Vec<Timer>,
    pub events: Vec<SessionEvent>,
}

impl Dispatch {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timers.is_empty() && self.events.is_empty()
    }

    pub fn extend(&mut self, other: Self) {
        self.timers.extend(other.timers);
        self.events.extend(other.events);
    }
}

#[derive(Debug, Clone)]
pub struct QuestSession {
    config: QuestConfig,
    nav: NavigationState,
    transitions: TransitionController,
    skills: SkillsBoard,
    meters: LevelMeters,
    sound: SoundSettings,
    modal_open: bool,
    last_contact: Option<ContactMessage>,
}

impl QuestSession {
    #[must_use]
    pub fn new(config: QuestConfig, skills: Vec<Skill>) -> Self {
        Self {
            transitions: TransitionController::new(LevelId::Home, config.transitions),
            skills: SkillsBoard::new(skills, config.skills),
            nav: NavigationState::new(),
            meters: LevelMeters::default(),
            sound: SoundSettings::default(),
            modal_open: false,
            last_contact: None,
            config,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &QuestConfig {
        &self.config
    }

    #[must_use]
    pub const fn nav(&self) -> &NavigationState {
        &self.nav
    }

    #[must_use]
    pub const fn transitions(&self) -> &TransitionController {
        &self.transitions
    }

    #[must_use]
    pub const fn skills(&self) -> &SkillsBoard {
        &self.skills
    }

    #[must_use]
    pub const fn meters(&self) -> &LevelMeters {
        &self.meters
    }

    #[must_use]
    pub const fn sound(&self) -> SoundSettings {
        self.sound
    }

    #[must_use]
    pub const fn modal_open(&self) -> bool {
        self.modal_open
    }

    #[must_use]
    pub const fn last_contact(&self) -> Option<&ContactMessage> {
        self.last_contact.as_ref()
    }

    #[must_use]
    pub const fn can_continue(&self) -> bool {
        !self.nav.is_complete()
    }

    #[must_use]
    pub const fn can_go_back(&self) -> bool {
        !self.nav.is_at_start()
    }

    pub fn dispatch(&mut self, command: Command) -> Dispatch {
        let mut out = Dispatch::default();
        match command {
            Command::Start => {
                self.cue(&mut out, SoundCue::ButtonClick);
                self.step_forward(&mut out);
            }
            Command::Continue => {
                self.cue(&mut out, SoundCue::ButtonClick);
                if self.step_forward(&mut out) {
                    self.cue(&mut out, SoundCue::LevelComplete);
                }
            }
            Command::Back => {
                self.cue(&mut out, SoundCue::Back);
                if self.nav.retreat() {
                    self.progress_changed(&mut out);
                    self.begin_transition(&mut out, self.nav.current(), Direction::Backward);
                } else {
                    out.events.push(SessionEvent::Blocked(NavError::BeforeStart));
                }
            }
            Command::Restart => {
                self.cue(&mut out, SoundCue::ButtonClick);
                self.nav.reset();
                self.progress_changed(&mut out);
                self.begin_transition(&mut out, LevelId::Home, Direction::Backward);
                self.skills.reset();
            }
            Command::ActivateSkills => {
                if self.nav.activate_skills() {
                    self.cue(&mut out, SoundCue::SkillActivate);
                    out.timers.extend(self.skills.activate().into_iter().map(|timer| Timer {
                        delay_ms: timer.delay_ms,
                        tick: Tick::Skill(timer.tick),
                    }));
                    out.events.push(SessionEvent::SkillsActivated);
                }
            }
            Command::ToggleSound => {
                let enabled = self.sound.toggle();
                out.events.push(SessionEvent::SoundToggled(enabled));
            }
            Command::ContactSent(message) => {
                out.events.push(SessionEvent::ContactReceived {
                    name: message.name.clone(),
                });
                self.last_contact = Some(message);
                self.modal_open = true;
            }
            Command::CloseModal => {
                if self.modal_open {
                    self.modal_open = false;
                    out.events.push(SessionEvent::ModalClosed);
                }
            }
            Command::DownloadResume => {
                self.cue(&mut out, SoundCue::ButtonClick);
                out.events.push(SessionEvent::DownloadRequested);
            }
            Command::GoToKey { key, direction } => match LevelId::from_key(&key) {
                Ok(level) => {
                    if self.nav.jump_to(level) {
                        self.progress_changed(&mut out);
                        self.begin_transition(&mut out, level, direction);
                    }
                }
                Err(err) => out.events.push(SessionEvent::Blocked(err)),
            },
        }
        out
    }

    /// Feed back a timer tick. `now` dates the graduation countdown.
    pub fn on_tick(&mut self, tick: Tick, now: DateTime<Utc>) -> Dispatch {
        let mut out = Dispatch::default();
        match tick {
            Tick::Transition(tick) => match self.transitions.on_tick(tick) {
                TickOutcome::Stale => {}
                TickOutcome::Next(timer) => out.timers.push(timer.into()),
                TickOutcome::Settled { level, effects } => {
                    let targets = MeterTargets {
                        xp_percent: self.config.xp_fill_percent,
                        cgpa_percent: self.config.cgpa_fill_percent,
                    };
                    let deadline = self.config.graduation_deadline().ok();
                    for effect in effects {
                        self.meters.apply(*effect, targets, deadline, now);
                    }
                    out.events.push(SessionEvent::LevelSettled(level));
                }
            },
            Tick::Skill(tick) => {
                if let Some(timer) = self.skills.on_tick(tick) {
                    out.timers.push(Timer {
                        delay_ms: timer.delay_ms,
                        tick: Tick::Skill(timer.tick),
                    });
                }
            }
        }
        out
    }

    fn step_forward(&mut self, out: &mut Dispatch) -> bool {
        if !self.nav.advance() {
            out.events.push(SessionEvent::Blocked(NavError::PastFinal));
            return false;
        }
        self.progress_changed(out);
        self.begin_transition(out, self.nav.current(), Direction::Forward);
        true
    }

    fn begin_transition(&mut self, out: &mut Dispatch, to: LevelId, direction: Direction) {
        let from = self.transitions.current();
        let timer = self.transitions.request(to, direction);
        out.timers.push(timer.into());
        out.events.push(SessionEvent::TransitionStarted {
            from,
            to,
            direction,
        });
    }

    fn progress_changed(&self, out: &mut Dispatch) {
        out.events.push(SessionEvent::ProgressChanged {
            percent: self.nav.progress_percent(),
            label: self.nav.status_label(),
        });
    }

    fn cue(&self, out: &mut Dispatch, cue: SoundCue) {
        if let Some(cue) = self.sound.play(cue) {
            out.events.push(SessionEvent::Sound(cue));
        }
    }
}

impl Default for QuestSession {
    fn default() -> Self {
        Self::new(QuestConfig::default_config(), Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 30, 0, 0, 0).unwrap()
    }

    fn session() -> QuestSession {
        QuestSession::new(
            QuestConfig::default_config(),
            vec![
                Skill {
                    name: "Rust".into(),
                    level: 90,
                },
                Skill {
                    name: "SQL".into(),
                    level: 70,
                },
            ],
        )
    }

    fn drain(session: &mut QuestSession, mut pending: Vec<Timer>) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        while !pending.is_empty() {
            let timer = pending.remove(0);
            let out = session.on_tick(timer.tick, now());
            pending.extend(out.timers);
            events.extend(out.events);
        }
        events
    }

    #[test]
    fn start_advances_and_transitions_forward() {
        let mut session = session();
        let out = session.dispatch(Command::Start);
        assert_eq!(session.nav().current_level(), 1);
        assert!(out.events.contains(&SessionEvent::Sound(SoundCue::ButtonClick)));
        assert!(out.events.contains(&SessionEvent::TransitionStarted {
            from: Some(LevelId::Home),
            to: LevelId::Level1,
            direction: Direction::Forward,
        }));
        assert_eq!(out.timers.len(), 1);

        let events = drain(&mut session, out.timers);
        assert_eq!(events, vec![SessionEvent::LevelSettled(LevelId::Level1)]);
        assert_eq!(session.transitions().active(), Some(LevelId::Level1));
    }

    #[test]
    fn continue_at_final_is_blocked() {
        let mut session = session();
        for _ in 0..7 {
            session.dispatch(Command::Continue);
        }
        let out = session.dispatch(Command::Continue);
        assert!(out.timers.is_empty());
        assert!(out.events.contains(&SessionEvent::Blocked(NavError::PastFinal)));
        assert!(!out.events.contains(&SessionEvent::Sound(SoundCue::LevelComplete)));
        assert!(!session.can_continue());
    }

    #[test]
    fn back_at_start_is_blocked() {
        let mut session = session();
        let out = session.dispatch(Command::Back);
        assert_eq!(
            out.events,
            vec![
                SessionEvent::Sound(SoundCue::Back),
                SessionEvent::Blocked(NavError::BeforeStart)
            ]
        );
    }

    #[test]
    fn level_two_fills_the_xp_bar_after_settling() {
        let mut session = session();
        session.dispatch(Command::Start);
        let out = session.dispatch(Command::Continue);
        drain(&mut session, out.timers);
        assert!((session.meters().xp_percent - 100.0).abs() < f32::EPSILON);
        assert_eq!(session.meters().countdown, None);
    }

    #[test]
    fn skills_activate_once_and_reset_on_restart() {
        let mut session = session();
        let out = session.dispatch(Command::ActivateSkills);
        assert_eq!(out.timers.len(), 2);
        assert!(session.dispatch(Command::ActivateSkills).is_empty());

        let fill = out.timers[0];
        session.on_tick(fill.tick, now());
        assert_eq!(session.skills().fill_percent(0), 90);

        session.dispatch(Command::Restart);
        assert_eq!(session.skills().fill_percent(0), 0);
        assert!(!session.nav().skills_activated());
        assert!(session.on_tick(out.timers[1].tick, now()).is_empty());
    }

    #[test]
    fn muted_sessions_publish_no_cues() {
        let mut session = session();
        let out = session.dispatch(Command::ToggleSound);
        assert_eq!(out.events, vec![SessionEvent::SoundToggled(false)]);
        let out = session.dispatch(Command::Start);
        assert!(
            !out.events
                .iter()
                .any(|event| matches!(event, SessionEvent::Sound(_)))
        );
    }

    #[test]
    fn contact_modal_opens_and_closes() {
        let mut session = session();
        session.dispatch(Command::ContactSent(ContactMessage {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "Hi".into(),
        }));
        assert!(session.modal_open());
        assert_eq!(session.last_contact().map(|m| m.name.as_str()), Some("Ada"));
        assert_eq!(
            session.dispatch(Command::CloseModal).events,
            vec![SessionEvent::ModalClosed]
        );
        assert!(session.dispatch(Command::CloseModal).is_empty());
    }

    #[test]
    fn known_key_moves_tracker_and_view_together() {
        let mut session = session();
        let out = session.dispatch(Command::GoToKey {
            key: "level5".into(),
            direction: Direction::Forward,
        });
        assert_eq!(session.nav().current(), LevelId::Level5);
        assert!(out.events.contains(&SessionEvent::ProgressChanged {
            percent: session.nav().progress_percent(),
            label: String::from("LEVEL 5"),
        }));
        drain(&mut session, out.timers);
        assert_eq!(session.transitions().active(), Some(LevelId::Level5));

        let out = session.dispatch(Command::Back);
        drain(&mut session, out.timers);
        assert_eq!(session.nav().current(), LevelId::Home);
        assert_eq!(session.transitions().active(), Some(LevelId::Home));

        let out = session.dispatch(Command::GoToKey {
            key: "homepage".into(),
            direction: Direction::Backward,
        });
        assert!(out.is_empty());
    }

    #[test]
    fn unknown_key_is_reported_without_changes() {
        let mut session = session();
        let out = session.dispatch(Command::GoToKey {
            key: "level9".into(),
            direction: Direction::Forward,
        });
        assert_eq!(
            out.events,
            vec![SessionEvent::Blocked(NavError::UnknownLevel("level9".into()))]
        );
        assert_eq!(session.transitions().active(), Some(LevelId::Home));
    }
}
