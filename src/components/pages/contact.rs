use dioxus::prelude::*;

use crate::components::common::{Button, Input};
use crate::state::{show_notification, NotificationType};

#[derive(Clone, Default, PartialEq)]
struct ContactDraft {
    name: String,
    email: String,
    message: String,
}

/// Contact form. Messages are not sent anywhere yet; submitting only
/// confirms with a toast.
#[component]
pub fn ContactPage() -> Element {
    let mut draft = use_signal(ContactDraft::default);

    let submit = move |e: FormEvent| {
        e.prevent_default();
        tracing::info!("Contact form submitted");
        show_notification("Message submitted!", NotificationType::Success);
    };

    let current = draft.read();

    rsx! {
        div { class: "min-h-screen p-6",
            h1 { class: "text-3xl font-bold text-green-600 text-center mb-8 font-pixel", "Contact Us" }
            div { class: "max-w-4xl mx-auto",
                form { class: "bg-white p-6 rounded-lg shadow-md", onsubmit: submit,
                    Input {
                        label: "Name",
                        id: "contact-name",
                        name: "name",
                        value: current.name.clone(),
                        oninput: move |e: FormEvent| draft.write().name = e.value(),
                    }
                    Input {
                        label: "Email",
                        id: "contact-email",
                        name: "email",
                        input_type: "email",
                        value: current.email.clone(),
                        oninput: move |e: FormEvent| draft.write().email = e.value(),
                    }
                    Input {
                        label: "Message",
                        id: "contact-message",
                        name: "message",
                        input_type: "textarea",
                        value: current.message.clone(),
                        oninput: move |e: FormEvent| draft.write().message = e.value(),
                    }
                    Button { button_type: "submit", class: "mt-4", "Send" }
                }
            }
        }
    }
}
