//! Keyboard and touch mapping onto session commands.
//!
//! Pure functions so the guards can be tested without a browser; the app shell
//! feeds them `KeyboardEvent.key()` values and touch coordinates.
use adventure_game::{Command, QuestSession};

/// What the player is allowed to do right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputContext {
    pub at_start: bool,
    pub can_continue: bool,
    pub can_go_back: bool,
    pub modal_open: bool,
}

impl InputContext {
    #[must_use]
    pub const fn from_session(session: &QuestSession) -> Self {
        Self {
            at_start: session.nav().is_at_start(),
            can_continue: session.can_continue(),
            can_go_back: session.can_go_back(),
            modal_open: session.modal_open(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyIntent {
    pub command: Option<Command>,
    pub prevent_default: bool,
}

/// Map a key press. `modifier` is Ctrl or Meta held down.
#[must_use]
pub fn key_intent(key: &str, modifier: bool, ctx: InputContext) -> KeyIntent {
    match key {
        "ArrowRight" if ctx.can_continue => KeyIntent {
            command: Some(if ctx.at_start {
                Command::Start
            } else {
                Command::Continue
            }),
            prevent_default: false,
        },
        "ArrowLeft" if ctx.can_go_back => KeyIntent {
            command: Some(Command::Back),
            prevent_default: false,
        },
        " " => KeyIntent {
            command: ctx.at_start.then_some(Command::Start),
            prevent_default: true,
        },
        "r" | "R" if modifier => KeyIntent {
            command: Some(Command::Restart),
            prevent_default: true,
        },
        "Escape" if ctx.modal_open => KeyIntent {
            command: Some(Command::CloseModal),
            prevent_default: false,
        },
        _ => KeyIntent::default(),
    }
}

/// Map a horizontal swipe. A positive distance (finger moved right) goes back.
#[must_use]
pub fn swipe_intent(
    start_x: i32,
    end_x: i32,
    threshold: i32,
    ctx: InputContext,
) -> Option<Command> {
    let distance = i64::from(end_x) - i64::from(start_x);
    if distance.abs() <= i64::from(threshold) {
        return None;
    }
    if distance > 0 {
        ctx.can_go_back.then_some(Command::Back)
    } else if ctx.at_start {
        Some(Command::Start)
    } else {
        ctx.can_continue.then_some(Command::Continue)
    }
}

/// Form fields keep their own key handling; global shortcuts skip them.
#[must_use]
pub fn is_typing_target(tag_name: &str) -> bool {
    matches!(
        tag_name.to_ascii_uppercase().as_str(),
        "INPUT" | "TEXTAREA" | "SELECT"
    )
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    const HOME: InputContext = InputContext {
        at_start: true,
        can_continue: true,
        can_go_back: false,
        modal_open: false,
    };

    const MIDWAY: InputContext = InputContext {
        at_start: false,
        can_continue: true,
        can_go_back: true,
        modal_open: false,
    };

    const FINAL: InputContext = InputContext {
        at_start: false,
        can_continue: false,
        can_go_back: true,
        modal_open: false,
    };

    #[test]
    fn arrows_respect_level_guards() {
        assert_eq!(key_intent("ArrowRight", false, HOME).command, Some(Command::Start));
        assert_eq!(
            key_intent("ArrowRight", false, MIDWAY).command,
            Some(Command::Continue)
        );
        assert_eq!(key_intent("ArrowRight", false, FINAL).command, None);
        assert_eq!(key_intent("ArrowLeft", false, HOME).command, None);
        assert_eq!(key_intent("ArrowLeft", false, FINAL).command, Some(Command::Back));
    }

    #[test]
    fn space_always_swallows_default() {
        let home = key_intent(" ", false, HOME);
        assert_eq!(home.command, Some(Command::Start));
        assert!(home.prevent_default);

        let midway = key_intent(" ", false, MIDWAY);
        assert_eq!(midway.command, None);
        assert!(midway.prevent_default);
    }

    #[test]
    fn restart_needs_modifier() {
        assert_eq!(key_intent("r", false, MIDWAY), KeyIntent::default());
        let intent = key_intent("R", true, MIDWAY);
        assert_eq!(intent.command, Some(Command::Restart));
        assert!(intent.prevent_default);
    }

    #[test]
    fn escape_only_closes_open_modal() {
        assert_eq!(key_intent("Escape", false, MIDWAY).command, None);
        let open = InputContext {
            modal_open: true,
            ..MIDWAY
        };
        assert_eq!(
            key_intent("Escape", false, open).command,
            Some(Command::CloseModal)
        );
    }

    #[test]
    fn short_swipes_are_ignored() {
        assert_eq!(swipe_intent(100, 150, 50, MIDWAY), None);
        assert_eq!(swipe_intent(150, 100, 50, MIDWAY), None);
    }

    #[test]
    fn swipe_direction_maps_to_navigation() {
        assert_eq!(swipe_intent(100, 200, 50, MIDWAY), Some(Command::Back));
        assert_eq!(swipe_intent(200, 100, 50, MIDWAY), Some(Command::Continue));
        assert_eq!(swipe_intent(200, 100, 50, HOME), Some(Command::Start));
        assert_eq!(swipe_intent(100, 200, 50, HOME), None);
        assert_eq!(swipe_intent(200, 100, 50, FINAL), None);
    }

    #[test]
    fn extreme_coordinates_do_not_overflow() {
        assert_eq!(swipe_intent(i32::MAX, i32::MIN, 50, MIDWAY), Some(Command::Continue));
        assert_eq!(swipe_intent(i32::MIN, i32::MAX, 50, MIDWAY), Some(Command::Back));
    }

    #[test]
    fn typing_targets_are_form_fields() {
        assert!(is_typing_target("input"));
        assert!(is_typing_target("TEXTAREA"));
        assert!(!is_typing_target("BUTTON"));
    }

    #[test]
    fn context_tracks_session() {
        let session = QuestSession::default();
        assert_eq!(InputContext::from_session(&session), HOME);
    }
}
