use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub title: AttrValue,
    pub on_close: Callback<()>,
    #[prop_or(AttrValue::from("modal"))]
    pub id: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

/// Dialog over a dimmed backdrop. Closes on the close button, on a click on
/// the backdrop itself, or on Escape.
#[function_component(Modal)]
pub fn modal(props: &Props) -> Html {
    let container_ref = use_node_ref();

    {
        let container_ref = container_ref.clone();
        use_effect_with(props.open, move |is_open| {
            if *is_open && let Some(el) = container_ref.cast::<web_sys::HtmlElement>() {
                let _ = el.focus();
            }
            || {}
        });
    }

    if !props.open {
        return Html::default();
    }

    let title_id = format!("{}-title", props.id);

    let on_close = {
        let cb = props.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_backdrop = {
        let cb = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            let on_backdrop = match (e.target(), e.current_target()) {
                (Some(target), Some(current)) => target
                    .dyn_ref::<web_sys::Element>()
                    .zip(current.dyn_ref::<web_sys::Element>())
                    .is_some_and(|(t, c)| t == c),
                _ => false,
            };
            if on_backdrop {
                cb.emit(());
            }
        })
    };
    let on_keydown = {
        let cb = props.on_close.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                e.prevent_default();
                cb.emit(());
            }
        })
    };

    html! {
        <div id={props.id.clone()} class="modal" role="presentation" onclick={on_backdrop}>
            <div
                class="modal-content"
                role="dialog"
                aria-modal="true"
                aria-labelledby={title_id.clone()}
                tabindex="-1"
                onkeydown={on_keydown}
                ref={container_ref}
            >
                <h2 id={title_id}>{ props.title.clone() }</h2>
                <div class="modal__body">
                    { for props.children.iter() }
                </div>
                <button type="button" class="close-modal retro-btn" onclick={on_close}>
                    {"CLOSE"}
                </button>
            </div>
        </div>
    }
}
