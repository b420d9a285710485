use adventure_game::{LevelId, QuestSession, ResumeProfile};
use yew::prelude::*;

use super::handlers::AppHandlers;
use crate::components::contact_form::ContactForm;
use crate::components::hud::Hud;
use crate::components::level_frame::LevelFrame;
use crate::components::levels;
use crate::components::modal::Modal;
use crate::components::skills_panel::{SkillsPanel, bar_views};

fn level_body(
    level: LevelId,
    session: &QuestSession,
    profile: &ResumeProfile,
    handlers: &AppHandlers,
) -> Html {
    let meters = session.meters();
    match level {
        LevelId::Home => levels::home_body(profile),
        LevelId::Level1 => levels::profile_body(profile),
        LevelId::Level2 => levels::experience_body(profile, meters.xp_percent),
        LevelId::Level3 => levels::projects_body(profile),
        LevelId::Level4 => levels::training_body(profile, meters.cgpa_percent, meters.countdown),
        LevelId::Level5 => html! {
            <SkillsPanel
                bars={bar_views(session.skills())}
                activated={session.nav().skills_activated()}
                on_activate={handlers.activate_skills.clone()}
            />
        },
        LevelId::Level6 => html! {
            <>
                { levels::guild_body(profile) }
                <ContactForm on_sent={handlers.contact_sent.clone()} />
            </>
        },
        LevelId::Final => levels::final_body(profile, &handlers.download, &handlers.restart),
    }
}

fn render_level(
    level: LevelId,
    session: &QuestSession,
    profile: &ResumeProfile,
    handlers: &AppHandlers,
) -> Html {
    let copy = profile.level_copy(level);
    let (on_back, on_continue, continue_label) = match level {
        LevelId::Home => (None, Some(handlers.start.clone()), "▶ START GAME"),
        LevelId::Final => (Some(handlers.back.clone()), None, ""),
        _ => (
            Some(handlers.back.clone()),
            Some(handlers.next.clone()),
            crate::components::level_frame::CONTINUE_LABEL,
        ),
    };
    html! {
        <LevelFrame
            key={level.key()}
            view={session.transitions().view(level)}
            title={copy.title}
            tagline={copy.tagline}
            {on_back}
            {on_continue}
            continue_label={continue_label}
        >
            { level_body(level, session, profile, handlers) }
        </LevelFrame>
    }
}

/// The whole page for a session snapshot.
#[must_use]
pub fn render_app(session: &QuestSession, profile: &ResumeProfile, handlers: &AppHandlers) -> Html {
    let nav = session.nav();
    let sound = session.sound();
    let sender = session
        .last_contact()
        .map(|msg| msg.name.clone())
        .unwrap_or_default();

    html! {
        <>
            <style>{ crate::a11y::visible_focus_css() }</style>
            <Hud
                percent={nav.progress_percent()}
                label={nav.status_label()}
                sound_enabled={sound.enabled()}
                sound_icon={sound.icon()}
                on_toggle_sound={handlers.toggle_sound.clone()}
            />
            <main id="main" class="game-container" role="main">
                { for LevelId::ALL.iter().map(|level| render_level(*level, session, profile, handlers)) }
            </main>
            <Modal
                id="successModal"
                open={session.modal_open()}
                title="MESSAGE SENT!"
                on_close={handlers.close_modal.clone()}
            >
                <div class="success-animation">{"🏆"}</div>
                <p>{ format!("Thanks {sender}! Your message has reached the guild.") }</p>
            </Modal>
            <div id={crate::a11y::STATUS_REGION_ID} class="sr-only" aria-live="polite"></div>
        </>
    }
}
