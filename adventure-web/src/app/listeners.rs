//! Document-level keyboard and swipe listeners.
use yew::prelude::*;

use super::store::QuestStore;
use crate::input::InputContext;

/// Keep the input guards current and, in the browser, attach the listeners
/// once for the lifetime of the app.
#[hook]
pub fn use_global_input(store: &UseReducerHandle<QuestStore>) {
    let ctx = use_mut_ref(InputContext::default);
    *ctx.borrow_mut() = InputContext::from_session(&store.session);

    #[cfg(target_arch = "wasm32")]
    {
        let dispatcher = store.dispatcher();
        let threshold = store.session.config().swipe_threshold_px;
        use_effect_with((), move |()| {
            let listeners = wasm::Listeners::attach(ctx, dispatcher, threshold);
            if listeners.is_none() {
                log::warn!("Keyboard and touch navigation unavailable");
            }
            move || drop(listeners)
        });
    }
}

#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use web_sys::{Document, Element, KeyboardEvent, TouchEvent};
    use yew::functional::UseReducerDispatcher;

    use crate::app::store::{QuestAction, QuestStore};
    use crate::input::{InputContext, is_typing_target, key_intent, swipe_intent};

    pub struct Listeners {
        doc: Document,
        keydown: Closure<dyn FnMut(KeyboardEvent)>,
        touchstart: Closure<dyn FnMut(TouchEvent)>,
        touchend: Closure<dyn FnMut(TouchEvent)>,
    }

    fn first_touch_x(e: &TouchEvent) -> Option<i32> {
        e.changed_touches().get(0).map(|touch| touch.screen_x())
    }

    impl Listeners {
        pub fn attach(
            ctx: Rc<RefCell<InputContext>>,
            dispatcher: UseReducerDispatcher<QuestStore>,
            threshold: i32,
        ) -> Option<Self> {
            let doc = crate::dom::document()?;

            let keydown = {
                let ctx = ctx.clone();
                let dispatcher = dispatcher.clone();
                Closure::<dyn FnMut(KeyboardEvent)>::new(move |e: KeyboardEvent| {
                    let key = e.key();
                    let typing = e
                        .target()
                        .and_then(|target| target.dyn_into::<Element>().ok())
                        .is_some_and(|el| is_typing_target(&el.tag_name()));
                    if typing && key != "Escape" {
                        return;
                    }
                    let intent = key_intent(&key, e.ctrl_key() || e.meta_key(), *ctx.borrow());
                    if intent.prevent_default {
                        e.prevent_default();
                    }
                    if let Some(command) = intent.command {
                        dispatcher.dispatch(QuestAction::Command(command));
                    }
                })
            };

            let start_x = Rc::new(Cell::new(0_i32));
            let touchstart = {
                let start_x = start_x.clone();
                Closure::<dyn FnMut(TouchEvent)>::new(move |e: TouchEvent| {
                    if let Some(x) = first_touch_x(&e) {
                        start_x.set(x);
                    }
                })
            };
            let touchend = Closure::<dyn FnMut(TouchEvent)>::new(move |e: TouchEvent| {
                let Some(end_x) = first_touch_x(&e) else {
                    return;
                };
                if let Some(command) = swipe_intent(start_x.get(), end_x, threshold, *ctx.borrow())
                {
                    dispatcher.dispatch(QuestAction::Command(command));
                }
            });

            let listeners = Self {
                doc,
                keydown,
                touchstart,
                touchend,
            };
            for (name, callback) in listeners.callbacks() {
                if let Err(err) = listeners
                    .doc
                    .add_event_listener_with_callback(name, callback)
                {
                    log::error!(
                        "Failed to attach {name} listener: {}",
                        crate::dom::js_error_message(&err)
                    );
                    return None;
                }
            }
            Some(listeners)
        }

        fn callbacks(&self) -> [(&'static str, &js_sys::Function); 3] {
            [
                ("keydown", self.keydown.as_ref().unchecked_ref()),
                ("touchstart", self.touchstart.as_ref().unchecked_ref()),
                ("touchend", self.touchend.as_ref().unchecked_ref()),
            ]
        }
    }

    impl Drop for Listeners {
        fn drop(&mut self) {
            for (name, callback) in self.callbacks() {
                let _ = self.doc.remove_event_listener_with_callback(name, callback);
            }
        }
    }
}
