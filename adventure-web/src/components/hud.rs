use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub percent: f64,
    pub label: AttrValue,
    pub sound_enabled: bool,
    pub sound_icon: AttrValue,
    #[prop_or_default]
    pub on_toggle_sound: Callback<()>,
}

/// Progress bar, level indicator and sound toggle.
#[function_component(Hud)]
pub fn hud(p: &Props) -> Html {
    let onclick = {
        let cb = p.on_toggle_sound.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let width = format!("width: {:.2}%", p.percent.clamp(0.0, 100.0));
    let sound_label = if p.sound_enabled {
        "Mute sound"
    } else {
        "Unmute sound"
    };

    html! {
        <header class="game-hud" role="banner">
            <div class="progress-bar" role="progressbar"
                aria-valuemin="0" aria-valuemax="100"
                aria-valuenow={format!("{:.0}", p.percent)}>
                <div class="progress-fill" style={width}></div>
            </div>
            <span class="level-indicator">{ p.label.clone() }</span>
            <button id="soundToggle" class="sound-toggle" type="button"
                aria-label={sound_label} aria-pressed={(!p.sound_enabled).to_string()} {onclick}>
                <span class="sound-icon">{ p.sound_icon.clone() }</span>
            </button>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn hud_renders_progress_and_label() {
        let props = Props {
            percent: 100.0 / 7.0,
            label: AttrValue::from("LEVEL 1"),
            sound_enabled: true,
            sound_icon: AttrValue::from("🔊"),
            on_toggle_sound: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<Hud>::with_props(props).render());
        assert!(html.contains("width: 14.29%"));
        assert!(html.contains("LEVEL 1"));
        assert!(html.contains("🔊"));
        assert!(html.contains("Mute sound"));
    }
}
