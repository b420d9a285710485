use adventure_game::{LevelView, Offset, ViewPhase};
use yew::prelude::*;

pub const CONTINUE_LABEL: &str = "CONTINUE →";
pub const BACK_LABEL: &str = "← BACK";

/// Style classes for a level in its current transition phase.
#[must_use]
pub fn level_classes(view: &LevelView) -> Classes {
    let mut classes = classes!("level");
    if view.active {
        classes.push("active");
    }
    match view.phase {
        ViewPhase::Exiting(direction) => classes.push(direction.exit_class()),
        ViewPhase::Entering => classes.push("entering"),
        ViewPhase::Idle => {}
    }
    classes
}

/// Inline transform while the level waits off-screen.
#[must_use]
pub fn level_style(view: &LevelView) -> Option<String> {
    (view.offset != Offset::Center).then(|| format!("transform: {}", view.offset.transform()))
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub view: LevelView,
    pub title: AttrValue,
    #[prop_or_default]
    pub tagline: AttrValue,
    #[prop_or_default]
    pub on_back: Option<Callback<()>>,
    #[prop_or_default]
    pub on_continue: Option<Callback<()>>,
    #[prop_or(AttrValue::from(CONTINUE_LABEL))]
    pub continue_label: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

/// One level screen with its heading and navigation buttons.
#[function_component(LevelFrame)]
pub fn level_frame(p: &Props) -> Html {
    let view = p.view;
    let visible = view.active || !matches!(view.phase, ViewPhase::Idle);
    let heading_id = format!("{}-title", view.level.key());

    let back = p.on_back.clone().map(|cb| {
        let onclick = Callback::from(move |_: MouseEvent| cb.emit(()));
        html! { <button type="button" class="retro-btn back-btn" {onclick}>{ BACK_LABEL }</button> }
    });
    let forward = p.on_continue.clone().map(|cb| {
        let onclick = Callback::from(move |_: MouseEvent| cb.emit(()));
        html! {
            <button type="button" class="retro-btn continue-btn" {onclick}>
                { p.continue_label.clone() }
            </button>
        }
    });

    html! {
        <section
            id={view.level.key()}
            class={level_classes(&view)}
            style={level_style(&view)}
            aria-labelledby={heading_id.clone()}
            aria-hidden={(!visible).to_string()}
        >
            <h2 id={heading_id} class="level-title">{ p.title.clone() }</h2>
            if !p.tagline.is_empty() {
                <p class="level-tagline">{ p.tagline.clone() }</p>
            }
            <div class="level-content">
                { for p.children.iter() }
            </div>
            <nav class="level-nav" aria-label="Level navigation">
                { back.unwrap_or_default() }
                { forward.unwrap_or_default() }
            </nav>
        </section>
    }
}
