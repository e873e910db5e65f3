use dioxus::prelude::*;

use crate::api::{self, ApiClient};
use crate::config::{ClientConfig, SessionTrust};
use crate::routes::Route;
use crate::state::{self, token_confirmed, use_session, NotificationType};

/// Links shown in the nav bar. Register/Login are replaced by the user
/// block once logged in.
pub fn nav_items(logged_in: bool) -> Vec<(Route, &'static str)> {
    let mut items = vec![
        (Route::Home {}, "Home"),
        (Route::About {}, "About"),
        (Route::Contact {}, "Contact"),
    ];

    if logged_in {
        items.push((Route::Community {}, "Community"));
    } else {
        items.push((Route::Register {}, "Register"));
        items.push((Route::Login {}, "Login"));
    }
    items
}

/// Once per mount, sign out a stored session the backend no longer
/// confirms. Does nothing unless the trust model asks for it.
fn use_session_revalidation() {
    let client = use_context::<ApiClient>();
    let config = use_context::<ClientConfig>();
    let mut session = use_session();

    use_hook(move || {
        if config.session_trust != SessionTrust::Revalidate {
            return;
        }
        let Some(stored) = session.peek() else {
            return;
        };
        spawn(async move {
            let remote = api::auth::fetch_session_token(&client, &config.session_verify_path).await;
            let confirmed = match &remote {
                Ok(token) => token_confirmed(&stored.access_token, token.as_deref()),
                Err(e) => {
                    tracing::warn!("Session check failed: {}", e);
                    false
                }
            };
            if !confirmed {
                tracing::info!("Stored session not confirmed by backend");
                session.sign_out(&client);
            }
        });
    });
}

#[component]
pub fn Header() -> Element {
    let client = use_context::<ApiClient>();
    let mut session = use_session();
    let nav = use_navigator();
    let mut menu_open = use_signal(|| false);

    use_session_revalidation();

    let logged_in = session.is_logged_in();
    let username = session.username().unwrap_or_default();
    let items = nav_items(logged_in);

    let logout = use_callback(move |_: ()| {
        session.sign_out(&client);
        menu_open.set(false);
        state::show_notification("You have been logged out.", NotificationType::Info);
        nav.push(Route::Home {});
    });

    rsx! {
        header { class: "relative z-30 pt-6",
            nav { class: "relative z-10 container mx-auto px-4",
                div { class: "absolute top-0 right-4 md:hidden",
                    button {
                        class: "flex flex-col items-center text-white focus:outline-none p-2",
                        aria_label: "Toggle menu",
                        aria_expanded: "{menu_open}",
                        onclick: move |_| menu_open.toggle(),
                        span { class: "text-3xl", "\u{1F4C1}" }
                        span { class: "text-xs mt-1 font-pixel", "Menu" }
                    }
                }

                ul { class: "hidden md:flex justify-center items-end space-x-12 lg:space-x-16",
                    for (route, label) in items.iter() {
                        li { class: "text-center",
                            Link {
                                to: route.clone(),
                                class: "flex flex-col items-center text-white hover:text-[#FFCF53] transition-colors duration-200 group",
                                span { class: "text-4xl mb-2 transition-transform duration-200 group-hover:-translate-y-1", "\u{1F4C1}" }
                                span { class: "text-lg font-pixel", "{label}" }
                            }
                        }
                    }
                    if logged_in {
                        li { class: "text-center text-white",
                            div { class: "flex items-center gap-2",
                                span { class: "text-4xl", "\u{1F4C1}" }
                                span { class: "text-xl font-pixel", "{username}" }
                            }
                            button {
                                class: "text-xl font-pixel text-white hover:text-[#FFCF53] focus:outline-none",
                                onclick: move |_| logout.call(()),
                                "Logout"
                            }
                        }
                    }
                }
            }

            if menu_open() {
                div { class: "fixed inset-0 bg-white z-40 p-8 pt-24 md:hidden overflow-y-auto",
                    button {
                        class: "absolute top-6 right-6 text-2xl text-gray-800",
                        aria_label: "Close menu",
                        onclick: move |_| menu_open.set(false),
                        "\u{2715}"
                    }
                    div { class: "flex flex-col items-start space-y-6",
                        for (route, label) in items.iter() {
                            Link {
                                to: route.clone(),
                                class: "flex items-center text-gray-800 hover:text-[#FFB703] text-xl w-full py-2",
                                onclick: move |_| menu_open.set(false),
                                span { class: "mr-4", "\u{1F4C1}" }
                                span { "{label}" }
                            }
                        }
                        if logged_in {
                            div { class: "pt-6 border-t border-gray-200 w-full space-y-6",
                                p { class: "text-gray-700 pl-10", "Logged in as: {username}" }
                                button {
                                    class: "flex items-center text-red-600 hover:text-red-800 text-xl w-full py-2",
                                    onclick: move |_| logout.call(()),
                                    span { class: "mr-4", "\u{1F4C1}" }
                                    span { "Logout" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
