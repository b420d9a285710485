//! Invariants every quest session must hold between steps.
use adventure_game::{
    DataError, FINAL_LEVEL, QuestSession, Timeline, TransitionPhase, ViewPhase,
    session_from_static,
};
use chrono::{DateTime, Utc};
use std::fmt::Debug;
use thiserror::Error;

/// 2025-06-30T00:00:00Z, so countdowns come out the same on every run.
const FIXED_START_SECS: i64 = 1_751_241_600;

#[derive(Debug, Error)]
pub enum CheckFailure {
    #[error("embedded data failed to load: {0}")]
    Data(#[from] DataError),
    #[error("start time out of range")]
    Clock,
    #[error("{what}: expected {expected}, found {found}")]
    Mismatch {
        what: &'static str,
        expected: String,
        found: String,
    },
    #[error("{0}")]
    Invariant(String),
}

pub fn expect_eq<T: Debug + PartialEq>(
    what: &'static str,
    expected: T,
    found: T,
) -> Result<(), CheckFailure> {
    if expected == found {
        Ok(())
    } else {
        Err(CheckFailure::Mismatch {
            what,
            expected: format!("{expected:?}"),
            found: format!("{found:?}"),
        })
    }
}

pub fn ensure(condition: bool, message: impl FnOnce() -> String) -> Result<(), CheckFailure> {
    if condition {
        Ok(())
    } else {
        Err(CheckFailure::Invariant(message()))
    }
}

/// A fresh timeline over the embedded session.
pub fn new_timeline() -> Result<Timeline, CheckFailure> {
    let (session, _profile) = session_from_static()?;
    let start: DateTime<Utc> =
        DateTime::from_timestamp(FIXED_START_SECS, 0).ok_or(CheckFailure::Clock)?;
    Ok(Timeline::new(session, start))
}

/// Navigation history and transition views agree with each other.
pub fn check_session(session: &QuestSession) -> Result<(), CheckFailure> {
    let nav = session.nav();
    let history = nav.history();
    ensure(!history.is_empty(), || String::from("history is empty"))?;
    expect_eq("history head", Some(0), history.first().copied())?;
    expect_eq(
        "history tail",
        Some(nav.current_level()),
        history.last().copied(),
    )?;
    ensure(nav.current_level() <= FINAL_LEVEL, || {
        format!("level {} past the final level", nav.current_level())
    })?;
    ensure(
        history.windows(2).all(|pair| pair[0] < pair[1]),
        || format!("history not strictly increasing: {history:?}"),
    )?;

    let percent = nav.progress_percent();
    ensure((0.0..=100.0).contains(&percent), || {
        format!("progress {percent} out of range")
    })?;

    let views = session.transitions().views();
    let active = views.iter().filter(|view| view.active).count();
    ensure(active <= 1, || format!("{active} levels active at once"))?;
    let exiting = views
        .iter()
        .filter(|view| matches!(view.phase, ViewPhase::Exiting(_)))
        .count();
    ensure(exiting <= 1, || format!("{exiting} levels exiting at once"))?;
    if session.transitions().phase() == TransitionPhase::Idle {
        expect_eq("exiting levels while idle", 0, exiting)?;
    }
    Ok(())
}

/// Once every timer has fired the visible level is the tracked one.
pub fn check_settled(tl: &Timeline) -> Result<(), CheckFailure> {
    let session = tl.session();
    expect_eq("pending timers", 0, tl.pending())?;
    expect_eq(
        "transition phase",
        TransitionPhase::Idle,
        session.transitions().phase(),
    )?;
    expect_eq(
        "active level",
        Some(session.nav().current()),
        session.transitions().active(),
    )?;
    check_session(session)
}
