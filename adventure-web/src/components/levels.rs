//! Level bodies built from the resume profile.
use adventure_game::{Countdown, ResumeProfile};
use yew::prelude::*;

use crate::components::countdown::GraduationCountdown;
use crate::components::meter::Meter;

fn bullet_list(items: &[String]) -> Html {
    html! {
        <ul class="bullet-list">
            { for items.iter().map(|item| html! { <li>{ item.clone() }</li> }) }
        </ul>
    }
}

#[must_use]
pub fn home_body(profile: &ResumeProfile) -> Html {
    html! {
        <div class="home-screen">
            <p class="player-name">{ profile.name.clone() }</p>
            <p class="player-class">{ profile.title.clone() }</p>
        </div>
    }
}

#[must_use]
pub fn profile_body(profile: &ResumeProfile) -> Html {
    let contact = &profile.contact;
    html! {
        <div class="character-card">
            <h3>{ profile.name.clone() }</h3>
            <p class="character-class">{ profile.title.clone() }</p>
            <dl class="character-stats">
                <dt>{"Phone"}</dt><dd>{ contact.phone.clone() }</dd>
                <dt>{"Email"}</dt>
                <dd><a href={format!("mailto:{}", contact.email)}>{ contact.email.clone() }</a></dd>
                <dt>{"Location"}</dt><dd>{ contact.location.clone() }</dd>
                <dt>{"LinkedIn"}</dt>
                <dd><a href={contact.linkedin.clone()} target="_blank" rel="noopener">{"Profile"}</a></dd>
            </dl>
        </div>
    }
}

#[must_use]
pub fn experience_body(profile: &ResumeProfile, xp_percent: f32) -> Html {
    html! {
        <div class="experience">
            <Meter label="XP" percent={xp_percent} class="xp-bar" />
            { for profile.experience.iter().map(|exp| html! {
                <article class="quest-card">
                    <h3>{ exp.role.clone() }</h3>
                    { bullet_list(&exp.highlights) }
                </article>
            }) }
        </div>
    }
}

#[must_use]
pub fn projects_body(profile: &ResumeProfile) -> Html {
    html! {
        <div class="projects">
            { for profile.projects.iter().map(|project| html! {
                <article class="quest-card">
                    <h3>{ project.name.clone() }</h3>
                    { bullet_list(&project.highlights) }
                    if !project.tech_stack.is_empty() {
                        <p class="tech-stack">{ format!("Tech Stack: {}", project.tech_stack.join(", ")) }</p>
                    }
                </article>
            }) }
        </div>
    }
}

#[must_use]
pub fn training_body(
    profile: &ResumeProfile,
    cgpa_percent: f32,
    countdown: Option<Countdown>,
) -> Html {
    html! {
        <div class="training">
            { for profile.education.iter().map(|edu| html! {
                <article class="quest-card">
                    <h3>{ edu.institution.clone() }</h3>
                    <p>{ format!("{} ({})", edu.degree, edu.years) }</p>
                    <Meter label="CGPA" percent={cgpa_percent}
                        value_text={Some(AttrValue::from(edu.cgpa.clone()))} class="cgpa-bar" />
                </article>
            }) }
            <h3 class="countdown-title">{"GRADUATION COUNTDOWN"}</h3>
            <GraduationCountdown {countdown} />
        </div>
    }
}

#[must_use]
pub fn guild_body(profile: &ResumeProfile) -> Html {
    html! {
        <div class="guild">
            <h3>{"EXTRA CURRICULAR"}</h3>
            { bullet_list(&profile.extra_curricular) }
        </div>
    }
}

#[must_use]
pub fn final_body(
    profile: &ResumeProfile,
    on_download: &Callback<()>,
    on_restart: &Callback<()>,
) -> Html {
    let download = {
        let cb = on_download.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let restart = {
        let cb = on_restart.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    html! {
        <div class="final-screen">
            <p class="closing">{ profile.closing.clone() }</p>
            <div class="final-actions">
                <button id="downloadResume" type="button" class="retro-btn" onclick={download}>
                    {"📄 DOWNLOAD RESUME"}
                </button>
                <button id="restartGame" type="button" class="retro-btn" onclick={restart}>
                    {"🔄 PLAY AGAIN"}
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> ResumeProfile {
        ResumeProfile::load_from_static().unwrap()
    }

    fn render(node: Html) -> String {
        #[function_component(Host)]
        fn host(props: &HostProps) -> Html {
            props.node.clone()
        }

        #[derive(Properties, PartialEq)]
        struct HostProps {
            node: Html,
        }

        futures::executor::block_on(
            yew::LocalServerRenderer::<Host>::with_props(HostProps { node }).render(),
        )
    }

    #[test]
    fn profile_lists_contact_card() {
        let html = render(profile_body(&profile()));
        assert!(html.contains("droy41259@gmail.com"));
        assert!(html.contains("Kalyani"));
    }

    #[test]
    fn projects_show_tech_stack() {
        let html = render(projects_body(&profile()));
        assert!(html.contains("Responsive Hotel Booking Website"));
        assert!(html.contains("Tech Stack: HTML, CSS, JavaScript, Node.js, MongoDB"));
    }

    #[test]
    fn training_shows_cgpa_and_countdown() {
        let html = render(training_body(
            &profile(),
            80.4,
            Some(Countdown {
                years: 0,
                days: 300,
            }),
        ));
        assert!(html.contains("JIS College of Engineering"));
        assert!(html.contains("width: 80.4%"));
        assert!(html.contains("300"));
    }

    #[test]
    fn final_screen_offers_download_and_restart() {
        let html = render(final_body(&profile(), &Callback::noop(), &Callback::noop()));
        assert!(html.contains("downloadResume"));
        assert!(html.contains("restartGame"));
        assert!(html.contains("Thank you for visiting"));
    }
}
