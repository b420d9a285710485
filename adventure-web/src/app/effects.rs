//! Draining the store outbox: timers go to the browser, events go to the log
//! and the live region.
use adventure_game::{NavError, SessionEvent};
use log::Level;
use yew::prelude::*;

use super::store::QuestStore;
#[cfg(target_arch = "wasm32")]
use super::store::{Outbound, QuestAction};

/// Log level and line for a session event.
#[must_use]
pub fn describe(event: &SessionEvent) -> (Level, String) {
    match event {
        SessionEvent::ProgressChanged { percent, label } => {
            (Level::Debug, format!("Progress {percent:.1}% ({label})"))
        }
        SessionEvent::TransitionStarted {
            from,
            to,
            direction,
        } => {
            let from = from.map_or_else(|| String::from("none"), |level| level.to_string());
            (
                Level::Info,
                format!("Transitioning from {from} to {to} ({direction:?})"),
            )
        }
        SessionEvent::LevelSettled(level) => (Level::Debug, format!("Level {level} active")),
        SessionEvent::Blocked(err @ NavError::UnknownLevel(_)) => (Level::Error, err.to_string()),
        SessionEvent::Blocked(err) => (Level::Debug, err.to_string()),
        SessionEvent::Sound(cue) => (Level::Info, cue.description().to_string()),
        SessionEvent::SoundToggled(enabled) => (
            Level::Info,
            format!("Sound {}", if *enabled { "enabled" } else { "disabled" }),
        ),
        SessionEvent::SkillsActivated => (Level::Info, String::from("Power-ups activated")),
        SessionEvent::ContactReceived { name } => {
            (Level::Info, format!("Contact form submitted by {name}"))
        }
        SessionEvent::ModalClosed => (Level::Debug, String::from("Success modal closed")),
        SessionEvent::DownloadRequested => (Level::Info, String::from("Preparing resume download")),
    }
}

/// Screen reader announcement for an event, if it deserves one.
#[must_use]
pub fn announcement(event: &SessionEvent) -> Option<String> {
    match event {
        SessionEvent::ProgressChanged { label, .. } => Some(label.clone()),
        SessionEvent::SkillsActivated => Some(String::from("POWER-UPS ACTIVATED!")),
        SessionEvent::ContactReceived { .. } => Some(String::from("Message sent")),
        _ => None,
    }
}

/// Run the outbox after every reduce.
#[hook]
pub fn use_outbox(store: &UseReducerHandle<QuestStore>) {
    let handle = store.clone();
    use_effect_with(store.revision, move |_| {
        let outbound = handle.drain();
        #[cfg(target_arch = "wasm32")]
        run(outbound, &handle);
        #[cfg(not(target_arch = "wasm32"))]
        drop(outbound);
        || {}
    });
}

#[cfg(target_arch = "wasm32")]
fn run(outbound: Vec<Outbound>, store: &UseReducerHandle<QuestStore>) {
    for item in outbound {
        match item {
            Outbound::Timer(timer) => {
                let dispatcher = store.dispatcher();
                let scheduled = crate::dom::set_timeout(timer.delay_ms, move || {
                    dispatcher.dispatch(QuestAction::Tick {
                        tick: timer.tick,
                        now: chrono::Utc::now(),
                    });
                });
                if let Err(err) = scheduled {
                    log::error!(
                        "Failed to schedule timer: {}",
                        crate::dom::js_error_message(&err)
                    );
                }
            }
            Outbound::Event(event) => {
                let (level, line) = describe(&event);
                log::log!(level, "{line}");
                if let Some(msg) = announcement(&event) {
                    crate::a11y::set_status(&msg);
                }
                if event == SessionEvent::DownloadRequested {
                    crate::download::download_with_notice(
                        &store.profile,
                        store.session.config().download_notice_ms,
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adventure_game::{Direction, LevelId, SoundCue};

    #[test]
    fn unknown_levels_log_as_errors() {
        let (level, line) = describe(&SessionEvent::Blocked(NavError::UnknownLevel(
            String::from("level9"),
        )));
        assert_eq!(level, Level::Error);
        assert!(line.contains("level9"));

        let (level, _) = describe(&SessionEvent::Blocked(NavError::PastFinal));
        assert_eq!(level, Level::Debug);
    }

    #[test]
    fn transitions_and_sounds_log_at_info() {
        let (level, line) = describe(&SessionEvent::TransitionStarted {
            from: None,
            to: LevelId::Level1,
            direction: Direction::Forward,
        });
        assert_eq!(level, Level::Info);
        assert!(line.starts_with("Transitioning from none to level1"));

        let (_, line) = describe(&SessionEvent::Sound(SoundCue::Back));
        assert_eq!(line, "Back navigation sound");
    }

    #[test]
    fn progress_is_announced() {
        let event = SessionEvent::ProgressChanged {
            percent: 50.0,
            label: String::from("LEVEL 4"),
        };
        assert_eq!(announcement(&event).as_deref(), Some("LEVEL 4"));
        assert_eq!(announcement(&SessionEvent::ModalClosed), None);
    }
}
