use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::views::{BadgesView, Header, HomeView, Theme};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/badges", BadgesView)] Badges {},
}

#[component]
fn Layout() -> Element {
    // Window-scoped; not persisted.
    let theme = use_context_provider(|| Signal::new(Theme::default()));

    rsx! {
        div { class: "app {theme().class()}",
            Header {}
            main { class: "content",
                Outlet::<Route> {}
            }
            footer { class: "app-footer",
                p { "BIMARIBOT does not replace a doctor. Seek professional care for medical concerns." }
            }
        }
    }
}
