use adventure_game::{Command, ContactMessage};
use yew::prelude::*;

use super::store::{QuestAction, QuestStore};

/// Button callbacks handed down to the level views.
#[derive(Clone, PartialEq)]
pub struct AppHandlers {
    pub start: Callback<()>,
    pub next: Callback<()>,
    pub back: Callback<()>,
    pub restart: Callback<()>,
    pub activate_skills: Callback<()>,
    pub toggle_sound: Callback<()>,
    pub close_modal: Callback<()>,
    pub download: Callback<()>,
    pub contact_sent: Callback<ContactMessage>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(dispatcher: &UseReducerDispatcher<QuestStore>) -> Self {
        Self {
            start: build_command(dispatcher, Command::Start),
            next: build_command(dispatcher, Command::Continue),
            back: build_command(dispatcher, Command::Back),
            restart: build_command(dispatcher, Command::Restart),
            activate_skills: build_command(dispatcher, Command::ActivateSkills),
            toggle_sound: build_command(dispatcher, Command::ToggleSound),
            close_modal: build_command(dispatcher, Command::CloseModal),
            download: build_command(dispatcher, Command::DownloadResume),
            contact_sent: build_contact_sent(dispatcher),
        }
    }

    /// Handlers that do nothing, for rendering outside the app shell.
    #[must_use]
    pub fn noop() -> Self {
        Self {
            start: Callback::noop(),
            next: Callback::noop(),
            back: Callback::noop(),
            restart: Callback::noop(),
            activate_skills: Callback::noop(),
            toggle_sound: Callback::noop(),
            close_modal: Callback::noop(),
            download: Callback::noop(),
            contact_sent: Callback::noop(),
        }
    }
}

fn build_command(dispatcher: &UseReducerDispatcher<QuestStore>, command: Command) -> Callback<()> {
    let dispatcher = dispatcher.clone();
    Callback::from(move |()| dispatcher.dispatch(QuestAction::Command(command.clone())))
}

fn build_contact_sent(dispatcher: &UseReducerDispatcher<QuestStore>) -> Callback<ContactMessage> {
    let dispatcher = dispatcher.clone();
    Callback::from(move |message: ContactMessage| {
        dispatcher.dispatch(QuestAction::Command(Command::ContactSent(message)));
    })
}
