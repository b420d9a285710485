use adventure_game::{ContactDraft, ContactError, ContactMessage};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    #[prop_or_default]
    pub on_sent: Callback<ContactMessage>,
}

fn report(err: &ContactError) {
    #[cfg(target_arch = "wasm32")]
    crate::dom::alert(&err.to_string());
    log::warn!("Contact form rejected: {err:?}");
}

/// Guild hall message board. Every field must be filled; nothing is sent
/// anywhere, the app only shows the success modal.
#[function_component(ContactForm)]
pub fn contact_form(p: &Props) -> Html {
    let draft = use_state(ContactDraft::default);
    let error = use_state(|| None::<AttrValue>);

    let on_name = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*draft).clone();
            next.name = e.target_unchecked_into::<HtmlInputElement>().value();
            draft.set(next);
        })
    };
    let on_email = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*draft).clone();
            next.email = e.target_unchecked_into::<HtmlInputElement>().value();
            draft.set(next);
        })
    };
    let on_message = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*draft).clone();
            next.message = e.target_unchecked_into::<HtmlTextAreaElement>().value();
            draft.set(next);
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        let error = error.clone();
        let on_sent = p.on_sent.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match draft.submit() {
                Ok(message) => {
                    let mut cleared = (*draft).clone();
                    cleared.clear();
                    draft.set(cleared);
                    error.set(None);
                    on_sent.emit(message);
                }
                Err(err) => {
                    report(&err);
                    error.set(Some(AttrValue::from(err.to_string())));
                }
            }
        })
    };

    html! {
        <form id="contactForm" class="contact-form" {onsubmit}>
            <label for="senderName">{"Name"}</label>
            <input id="senderName" type="text" value={draft.name.clone()} oninput={on_name} />
            <label for="senderEmail">{"Email"}</label>
            <input id="senderEmail" type="email" value={draft.email.clone()} oninput={on_email} />
            <label for="message">{"Message"}</label>
            <textarea id="message" rows="4" value={draft.message.clone()} oninput={on_message} />
            if let Some(msg) = (*error).clone() {
                <p class="form-error" role="alert">{ msg }</p>
            }
            <button type="submit" class="retro-btn send-btn">{"📨 SEND MESSAGE"}</button>
        </form>
    }
}
