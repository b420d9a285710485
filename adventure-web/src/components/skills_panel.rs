use adventure_game::SkillsBoard;
use yew::prelude::*;

pub const ACTIVATE_LABEL: &str = "⚡ ACTIVATE ALL POWER-UPS";
pub const ACTIVATED_LABEL: &str = "⚡ POWER-UPS ACTIVATED!";

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SkillBarView {
    pub name: AttrValue,
    pub level: u8,
    pub fill: u8,
    pub glowing: bool,
}

/// Snapshot the board for rendering.
#[must_use]
pub fn bar_views(board: &SkillsBoard) -> Vec<SkillBarView> {
    board
        .skills()
        .iter()
        .enumerate()
        .map(|(idx, skill)| SkillBarView {
            name: AttrValue::from(skill.name.clone()),
            level: skill.level,
            fill: board.fill_percent(idx),
            glowing: board.bar(idx).glowing,
        })
        .collect()
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub bars: Vec<SkillBarView>,
    pub activated: bool,
    #[prop_or_default]
    pub on_activate: Callback<()>,
}

#[function_component(SkillsPanel)]
pub fn skills_panel(p: &Props) -> Html {
    let onclick = {
        let cb = p.on_activate.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let label = if p.activated {
        ACTIVATED_LABEL
    } else {
        ACTIVATE_LABEL
    };

    html! {
        <section class="skills-panel">
            <ul class="skills-grid">
                { for p.bars.iter().map(|bar| {
                    let class = classes!("skill-item", bar.glowing.then_some("glow"));
                    let width = format!("width: {}%", bar.fill);
                    html! {
                        <li class={class} data-level={bar.level.to_string()}>
                            <span class="skill-name">{ bar.name.clone() }</span>
                            <div class="skill-track">
                                <div class="skill-fill" style={width}></div>
                            </div>
                            <span class="skill-level">{ format!("{}%", bar.level) }</span>
                        </li>
                    }
                }) }
            </ul>
            <button id="powerUpBtn" type="button" class="retro-btn power-up-btn"
                disabled={p.activated} {onclick}>
                { label }
            </button>
        </section>
    }
}
