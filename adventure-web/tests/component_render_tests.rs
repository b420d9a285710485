use adventure_game::{Command, ContactMessage, LevelId, QuestSession, ResumeProfile, Timeline};
use adventure_web::app::AppHandlers;
use adventure_web::app::view::render_app;
use chrono::{TimeZone, Utc};
use futures::executor::block_on;
use yew::prelude::*;
use yew::LocalServerRenderer;

#[derive(Properties, PartialEq)]
struct PageProps {
    node: Html,
}

#[function_component(Page)]
fn page(props: &PageProps) -> Html {
    props.node.clone()
}

fn render_session(session: &QuestSession) -> String {
    let profile = ResumeProfile::load_from_static().expect("embedded profile");
    let node = render_app(session, &profile, &AppHandlers::noop());
    block_on(LocalServerRenderer::<Page>::with_props(PageProps { node }).render())
}

fn played(commands: &[Command]) -> QuestSession {
    let (session, _) = adventure_game::session_from_static().expect("embedded data");
    let start = Utc.with_ymd_and_hms(2025, 6, 30, 0, 0, 0).unwrap();
    let mut tl = Timeline::new(session, start);
    for command in commands {
        tl.dispatch(command.clone());
        tl.run_until_idle();
    }
    tl.session().clone()
}

fn active_section(html: &str, level: LevelId) -> bool {
    let marker = format!("id=\"{}\"", level.key());
    let Some(at) = html.find(&marker) else {
        return false;
    };
    let open = html[..at].rfind("<section").unwrap_or(0);
    let close = html[at..].find('>').map_or(html.len(), |end| at + end);
    html[open..close].contains("class=\"level active\"")
}

#[test]
fn fresh_page_shows_home_only() {
    let html = render_session(&played(&[]));
    assert!(active_section(&html, LevelId::Home));
    assert!(!active_section(&html, LevelId::Level1));
    assert!(html.contains("READY TO START"));
    assert!(html.contains("ADVENTURE RESUME"));
}

#[test]
fn second_level_fills_xp_after_settling() {
    let html = render_session(&played(&[Command::Start, Command::Continue]));
    assert!(active_section(&html, LevelId::Level2));
    assert!(html.contains("LEVEL 2"));
    assert!(html.contains("xp-bar"));
    assert!(html.contains("width: 100%"));
}

#[test]
fn power_up_level_reflects_activation() {
    let mut commands = vec![Command::Start];
    commands.extend(std::iter::repeat_n(Command::Continue, 4));
    let html = render_session(&played(&commands));
    assert!(active_section(&html, LevelId::Level5));
    assert!(html.contains("⚡ ACTIVATE ALL POWER-UPS"));

    commands.push(Command::ActivateSkills);
    let html = render_session(&played(&commands));
    assert!(html.contains("⚡ POWER-UPS ACTIVATED!"));
    assert!(html.contains("width: 95%"));
}

#[test]
fn contact_success_opens_modal() {
    let message = ContactMessage {
        name: String::from("Ada"),
        email: String::from("ada@example.com"),
        message: String::from("Hello"),
    };
    let html = render_session(&played(&[Command::ContactSent(message)]));
    assert!(html.contains("successModal"));
    assert!(html.contains("Thanks Ada!"));

    let closed = render_session(&played(&[
        Command::ContactSent(ContactMessage {
            name: String::from("Ada"),
            email: String::from("ada@example.com"),
            message: String::from("Hello"),
        }),
        Command::CloseModal,
    ]));
    assert!(!closed.contains("successModal"));
}

#[test]
fn muted_sound_swaps_icon() {
    let html = render_session(&played(&[Command::ToggleSound]));
    assert!(html.contains("🔇"));
    assert!(html.contains("Unmute sound"));
}

#[test]
fn final_level_has_no_continue_button() {
    let mut commands = vec![Command::Start];
    commands.extend(std::iter::repeat_n(Command::Continue, 6));
    let session = played(&commands);
    assert_eq!(session.nav().current(), LevelId::Final);
    let html = render_session(&session);
    assert!(active_section(&html, LevelId::Final));
    assert!(html.contains("QUEST COMPLETE"));
    assert!(html.contains("downloadResume"));
}
