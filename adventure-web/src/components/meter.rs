use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub label: AttrValue,
    pub percent: f32,
    #[prop_or_default]
    pub value_text: Option<AttrValue>,
    #[prop_or(AttrValue::from("meter"))]
    pub class: AttrValue,
}

/// A labelled horizontal fill bar (XP, CGPA).
#[function_component(Meter)]
pub fn meter(p: &Props) -> Html {
    let width = format!("width: {}%", p.percent.clamp(0.0, 100.0));
    html! {
        <div class={classes!(p.class.to_string())}>
            <span class="meter__label">{ p.label.clone() }</span>
            <div class="meter__track">
                <div class="meter__fill" style={width}></div>
            </div>
            if let Some(text) = p.value_text.clone() {
                <span class="meter__value">{ text }</span>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn meter_draws_fill_width() {
        let props = Props {
            label: AttrValue::from("CGPA"),
            percent: 80.4,
            value_text: Some(AttrValue::from("8.04")),
            class: AttrValue::from("cgpa-bar"),
        };
        let html = block_on(LocalServerRenderer::<Meter>::with_props(props).render());
        assert!(html.contains("width: 80.4%"));
        assert!(html.contains("cgpa-bar"));
        assert!(html.contains("8.04"));
    }
}
