use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn NotFoundPage(path: String) -> Element {
    rsx! {
        div { class: "flex justify-center items-center min-h-screen p-4",
            div { class: "w-full max-w-md retro-window",
                div { class: "retro-title-bar",
                    span { class: "font-pixel text-white text-sm uppercase tracking-wider", "Error" }
                }
                div { class: "p-6 text-center text-black",
                    p { class: "font-pixel text-2xl mb-2", "404" }
                    p { class: "text-sm mb-6 font-sans", "Nothing lives at {path}." }
                    Link { to: Route::Home {}, class: "retro-link", "Back to Home" }
                }
            }
        }
    }
}

/// `/community` has no page yet; logged-in users land here.
#[component]
pub fn CommunityPage() -> Element {
    rsx! {
        NotFoundPage { path: "/community" }
    }
}
