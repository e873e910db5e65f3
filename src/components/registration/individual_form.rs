use dioxus::prelude::*;

use crate::components::common::Input;
use crate::models::{IndividualDraft, IndividualField};

#[component]
pub fn IndividualForm(draft: IndividualDraft, on_change: EventHandler<(IndividualField, String)>) -> Element {
    rsx! {
        div { class: "space-y-3",
            Input {
                label: "Name",
                id: "individual-name",
                name: "name",
                value: draft.name.clone(),
                placeholder: "Your Full Name",
                oninput: move |e: FormEvent| on_change.call((IndividualField::Name, e.value())),
            }
            Input {
                label: "Email",
                id: "individual-email",
                name: "email",
                input_type: "email",
                value: draft.email.clone(),
                placeholder: "your.email@example.com",
                oninput: move |e: FormEvent| on_change.call((IndividualField::Email, e.value())),
            }
            Input {
                label: "Password",
                id: "individual-password",
                name: "password",
                input_type: "password",
                value: draft.password.clone(),
                placeholder: "Choose a secure password",
                oninput: move |e: FormEvent| on_change.call((IndividualField::Password, e.value())),
            }
            Input {
                label: "Expertise",
                id: "individual-expertise",
                name: "expertise",
                value: draft.expertise.clone(),
                placeholder: "e.g., AI Research, Web Dev",
                oninput: move |e: FormEvent| on_change.call((IndividualField::Expertise, e.value())),
            }
        }
    }
}
