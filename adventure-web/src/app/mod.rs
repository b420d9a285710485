pub mod effects;
pub mod handlers;
pub mod listeners;
pub mod store;
pub mod view;

pub use handlers::AppHandlers;
pub use store::{Outbound, QuestAction, QuestStore};

use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let store = use_reducer(QuestStore::from_static);
    effects::use_outbox(&store);
    listeners::use_global_input(&store);

    let handlers = AppHandlers::new(&store.dispatcher());
    view::render_app(&store.session, &store.profile, &handlers)
}
