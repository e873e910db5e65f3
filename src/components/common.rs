use dioxus::prelude::*;
use crate::state::{UI_STATE, NotificationType};

#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div { class: "flex items-center justify-center p-4",
            div { class: "animate-spin rounded-full h-10 w-10 border-4 border-indigo-600 border-t-transparent" }
        }
    }
}

#[component]
pub fn ErrorMessage(message: String) -> Element {
    rsx! {
        p { class: "text-red-500 text-xs text-center font-semibold py-1", "{message}" }
    }
}

#[component]
pub fn SuccessMessage(message: String) -> Element {
    rsx! {
        p { class: "text-green-700 text-xs text-center font-semibold py-1", "{message}" }
    }
}

#[component]
pub fn Button(
    children: Element,
    onclick: Option<EventHandler<MouseEvent>>,
    #[props(default = "button".to_string())]
    button_type: String,
    #[props(default = "primary".to_string())]
    variant: String,
    #[props(default = false)]
    disabled: bool,
    #[props(default = "".to_string())]
    class: String,
) -> Element {
    let variant_class = match variant.as_str() {
        "secondary" => "bg-transparent text-neon-blue border-2 border-neon-blue hover:bg-neon-blue hover:text-dark-bg",
        "window" => "retro-button",
        "danger" => "bg-red-100 text-red-700 border border-red-300 hover:bg-red-200",
        _ => "bg-neon-pink text-dark-bg border-2 border-neon-pink hover:bg-opacity-80",
    };

    let disabled_class = if disabled { "opacity-50 cursor-not-allowed" } else { "" };

    rsx! {
        button {
            class: "px-6 py-2 font-bold uppercase tracking-wider transition duration-300 text-sm {variant_class} {disabled_class} {class}",
            r#type: "{button_type}",
            disabled: disabled,
            onclick: move |e| {
                if let Some(handler) = onclick {
                    handler.call(e);
                }
            },
            {children}
        }
    }
}

#[component]
pub fn Card(children: Element, #[props(default = "".to_string())] class: String) -> Element {
    rsx! {
        div { class: "bg-gray-800 p-6 rounded-xl border-2 shadow-lg {class}",
            {children}
        }
    }
}

#[component]
pub fn Badge(text: String, #[props(default = "bg-gray-100 text-gray-800".to_string())] color_class: String) -> Element {
    rsx! {
        span { class: "px-3 py-1 text-sm font-mono rounded-xl {color_class}",
            "{text}"
        }
    }
}

#[component]
pub fn Notification() -> Element {
    let notification = UI_STATE.read().notification.clone();

    // Auto-dismiss notification after 4 seconds
    {
        let has_notification = notification.is_some();
        use_effect(move || {
            if has_notification {
                spawn(async move {
                    #[cfg(target_arch = "wasm32")]
                    {
                        gloo_timers::future::TimeoutFuture::new(4000).await;
                    }
                    #[cfg(not(target_arch = "wasm32"))]
                    {
                        tokio::time::sleep(std::time::Duration::from_millis(4000)).await;
                    }
                    crate::state::clear_notification();
                });
            }
        });
    }

    if let Some(notif) = notification {
        let color_class = notif.notification_type.color_class();
        let icon = match notif.notification_type {
            NotificationType::Success => "\u{2705}",
            NotificationType::Info => "\u{2139}",
        };
        rsx! {
            div {
                class: "fixed top-4 right-4 z-50 {color_class} text-white px-6 py-4 shadow-xl max-w-sm animate-slide-in",
                div { class: "flex items-start gap-3",
                    span { class: "text-xl flex-shrink-0", "{icon}" }
                    div { class: "flex-1",
                        p { class: "font-medium", "{notif.message}" }
                    }
                    button {
                        class: "ml-2 text-white hover:text-gray-200 flex-shrink-0",
                        onclick: move |_| {
                            crate::state::clear_notification();
                        },
                        "\u{2715}"
                    }
                }
            }
        }
    } else {
        rsx! {}
    }
}

/// Labeled text, email, password or textarea control.
#[component]
pub fn Input(
    value: String,
    oninput: EventHandler<FormEvent>,
    #[props(default = "".to_string())]
    id: String,
    #[props(default = "".to_string())]
    name: String,
    #[props(default = "text".to_string())]
    input_type: String,
    #[props(default = "".to_string())]
    placeholder: String,
    #[props(default = "".to_string())]
    label: String,
    #[props(default = true)]
    required: bool,
    #[props(default = "".to_string())]
    class: String,
) -> Element {
    let control_class = format!(
        "w-full px-2 py-1 bg-white border border-black text-black text-sm font-sans placeholder-gray-500 focus:outline-none focus:border-blue-500 focus:ring-1 focus:ring-blue-500 {}",
        class
    );
    let name = if name.is_empty() { id.clone() } else { name };

    rsx! {
        div { class: "mb-3 w-full",
            if !label.is_empty() {
                label { class: "block text-black mb-1 text-xs font-sans", r#for: "{id}",
                    "{label}"
                    if required {
                        span { class: "text-red-500", " *" }
                    }
                }
            }
            if input_type == "textarea" {
                textarea {
                    id: "{id}",
                    name: "{name}",
                    class: "{control_class}",
                    rows: "3",
                    value: "{value}",
                    placeholder: "{placeholder}",
                    required: required,
                    oninput: move |e| oninput.call(e),
                }
            } else {
                input {
                    id: "{id}",
                    name: "{name}",
                    class: "{control_class}",
                    r#type: "{input_type}",
                    value: "{value}",
                    placeholder: "{placeholder}",
                    required: required,
                    oninput: move |e| oninput.call(e),
                }
            }
        }
    }
}
