use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;
use crate::views::Theme;

#[component]
pub fn Header() -> Element {
    let mut theme = use_context::<Signal<Theme>>();
    let current = theme();

    rsx! {
        header { class: "app-header",
            div { class: "brand",
                span { class: "brand-icon", "🩺" }
                h1 { "BIMARI" span { class: "brand-accent", "BOT" } }
            }
            nav { class: "app-nav",
                Link { to: Route::Home {}, "Home" }
                Link { to: Route::Badges {}, "Badges" }
            }
            button {
                class: "theme-toggle",
                r#type: "button",
                title: "Toggle theme",
                onclick: move |_| theme.set(current.toggled()),
                "{current.toggle_icon()}"
            }
        }
    }
}
