//! A virtual clock for hosts without browser timers.
//!
//! Timers fire in due-time order; timers due at the same instant fire in the
//! order they were scheduled, matching browser `setTimeout` ordering.
use chrono::{DateTime, TimeDelta, Utc};

use crate::session::{Command, Dispatch, QuestSession, SessionEvent, Timer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pending {
    due_ms: u64,
    seq: u64,
    timer: Timer,
}

#[derive(Debug, Clone)]
pub struct Timeline {
    session: QuestSession,
    started_at: DateTime<Utc>,
    now_ms: u64,
    next_seq: u64,
    pending: Vec<Pending>,
    events: Vec<SessionEvent>,
}

impl Timeline {
    #[must_use]
    pub const fn new(session: QuestSession, started_at: DateTime<Utc>) -> Self {
        Self {
            session,
            started_at,
            now_ms: 0,
            next_seq: 0,
            pending: Vec::new(),
            events: Vec::new(),
        }
    }

    #[must_use]
    pub const fn session(&self) -> &QuestSession {
        &self.session
    }

    #[must_use]
    pub const fn elapsed_ms(&self) -> u64 {
        self.now_ms
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Every event published so far.
    #[must_use]
    pub fn events(&self) -> &[SessionEvent] {
        &self.events
    }

    pub fn take_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn dispatch(&mut self, command: Command) {
        let out = self.session.dispatch(command);
        self.absorb(out);
    }

    /// Move the clock forward, firing every timer that comes due.
    pub fn advance_by(&mut self, ms: u64) {
        let until = self.now_ms.saturating_add(ms);
        while let Some(next) = self.next_due(until) {
            self.now_ms = next.due_ms;
            let now = self.wall_clock();
            let out = self.session.on_tick(next.timer.tick, now);
            self.absorb(out);
        }
        self.now_ms = until;
    }

    /// Fire timers until none are left.
    pub fn run_until_idle(&mut self) {
        while let Some(due) = self.pending.iter().map(|p| p.due_ms).min() {
            self.advance_by(due.saturating_sub(self.now_ms));
        }
    }

    fn next_due(&mut self, until: u64) -> Option<Pending> {
        let idx = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due_ms <= until)
            .min_by_key(|(_, p)| (p.due_ms, p.seq))
            .map(|(idx, _)| idx)?;
        Some(self.pending.remove(idx))
    }

    fn wall_clock(&self) -> DateTime<Utc> {
        let offset = TimeDelta::milliseconds(i64::try_from(self.now_ms).unwrap_or(i64::MAX));
        self.started_at + offset
    }

    fn absorb(&mut self, out: Dispatch) {
        for timer in out.timers {
            self.pending.push(Pending {
                due_ms: self.now_ms.saturating_add(u64::from(timer.delay_ms)),
                seq: self.next_seq,
                timer,
            });
            self.next_seq += 1;
        }
        self.events.extend(out.events);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::LevelId;
    use crate::transition::TransitionPhase;
    use chrono::TimeZone;

    fn timeline() -> Timeline {
        let start = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        Timeline::new(QuestSession::default(), start)
    }

    #[test]
    fn phases_fire_on_schedule() {
        let mut tl = timeline();
        tl.dispatch(Command::Start);
        tl.advance_by(399);
        assert_eq!(tl.session().transitions().phase(), TransitionPhase::Exiting);
        tl.advance_by(1);
        assert_eq!(
            tl.session().transitions().phase(),
            TransitionPhase::EnteringOffscreen
        );
        tl.advance_by(50);
        assert_eq!(tl.session().transitions().active(), Some(LevelId::Level1));
        tl.run_until_idle();
        assert_eq!(tl.elapsed_ms(), 1250);
        assert_eq!(tl.pending(), 0);
    }
}
