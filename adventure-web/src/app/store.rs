//! Reducer-backed owner of the quest session.
//!
//! Every command or tick runs through [`QuestStore::reduce`]. The timers and
//! events it produces land in a shared outbox that the app shell drains after
//! rendering, so nothing is lost when several actions are reduced before the
//! next render.
use adventure_game::{
    Command, DataError, Dispatch, QuestConfig, QuestSession, ResumeProfile, SessionEvent, Tick,
    Timer,
};
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use yew::Reducible;

static PROFILE: Lazy<Result<ResumeProfile, DataError>> = Lazy::new(ResumeProfile::load_from_static);

#[derive(Debug, Clone, PartialEq)]
pub enum QuestAction {
    Command(Command),
    Tick { tick: Tick, now: DateTime<Utc> },
}

/// Work for the host once the reducer has run.
#[derive(Debug, Clone, PartialEq)]
pub enum Outbound {
    Timer(Timer),
    Event(SessionEvent),
}

#[derive(Clone)]
pub struct QuestStore {
    pub session: QuestSession,
    pub profile: Rc<ResumeProfile>,
    /// Bumped on every reduce; drives the outbox effect.
    pub revision: u64,
    outbox: Rc<RefCell<VecDeque<Outbound>>>,
}

impl QuestStore {
    #[must_use]
    pub fn new(session: QuestSession, profile: ResumeProfile) -> Self {
        Self {
            session,
            profile: Rc::new(profile),
            revision: 0,
            outbox: Rc::default(),
        }
    }

    /// Session and profile from the embedded data files.
    #[must_use]
    pub fn from_static() -> Self {
        let profile = match &*PROFILE {
            Ok(profile) => profile.clone(),
            Err(err) => {
                log::error!("Failed to load resume profile: {err}");
                ResumeProfile::default()
            }
        };
        let session = QuestSession::new(QuestConfig::load_from_static(), profile.skills.clone());
        Self::new(session, profile)
    }

    /// Take everything queued since the last drain, in order.
    #[must_use]
    pub fn drain(&self) -> Vec<Outbound> {
        self.outbox.borrow_mut().drain(..).collect()
    }

    #[must_use]
    pub fn queued(&self) -> usize {
        self.outbox.borrow().len()
    }

    fn enqueue(&self, out: Dispatch) {
        let mut outbox = self.outbox.borrow_mut();
        outbox.extend(out.events.into_iter().map(Outbound::Event));
        outbox.extend(out.timers.into_iter().map(Outbound::Timer));
    }
}

impl Reducible for QuestStore {
    type Action = QuestAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let out = match action {
            QuestAction::Command(command) => next.session.dispatch(command),
            QuestAction::Tick { tick, now } => next.session.on_tick(tick, now),
        };
        next.revision = next.revision.wrapping_add(1);
        next.enqueue(out);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adventure_game::{LevelId, TransitionPhase};
    use chrono::TimeZone;

    fn reduce(store: Rc<QuestStore>, action: QuestAction) -> Rc<QuestStore> {
        store.reduce(action)
    }

    fn timers(outbound: &[Outbound]) -> Vec<Timer> {
        outbound
            .iter()
            .filter_map(|item| match item {
                Outbound::Timer(timer) => Some(*timer),
                Outbound::Event(_) => None,
            })
            .collect()
    }

    #[test]
    fn embedded_profile_loads() {
        let store = QuestStore::from_static();
        assert_eq!(store.profile.name, "Debasish Roy");
        assert_eq!(store.session.skills().skills().len(), 10);
        assert_eq!(store.revision, 0);
    }

    #[test]
    fn outbox_survives_back_to_back_reduces() {
        let store = Rc::new(QuestStore::new(QuestSession::default(), ResumeProfile::default()));
        let store = reduce(store, QuestAction::Command(Command::Start));
        let store = reduce(store, QuestAction::Command(Command::Continue));
        assert_eq!(store.revision, 2);

        let drained = store.drain();
        assert_eq!(timers(&drained).len(), 2);
        assert!(drained.contains(&Outbound::Event(SessionEvent::TransitionStarted {
            from: Some(LevelId::Home),
            to: LevelId::Level1,
            direction: adventure_game::Direction::Forward,
        })));
        assert_eq!(store.queued(), 0);
    }

    #[test]
    fn ticks_advance_the_transition() {
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let mut store = Rc::new(QuestStore::new(QuestSession::default(), ResumeProfile::default()));
        store = reduce(store, QuestAction::Command(Command::Start));
        let mut pending: VecDeque<Timer> = timers(&store.drain()).into();
        while let Some(timer) = pending.pop_front() {
            store = reduce(
                store,
                QuestAction::Tick {
                    tick: timer.tick,
                    now,
                },
            );
            pending.extend(timers(&store.drain()));
        }
        assert_eq!(store.session.transitions().active(), Some(LevelId::Level1));
        assert_eq!(store.session.transitions().phase(), TransitionPhase::Idle);
    }
}
