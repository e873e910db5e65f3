//! Individual / team sign-up.
//!
//! [`RegistrationPanel`] owns the draft; the forms below it only render
//! fields and report edits.

mod individual_form;
mod team_form;
mod team_member_input;

pub use individual_form::IndividualForm;
pub use team_form::TeamForm;
pub use team_member_input::TeamMemberInput;

use dioxus::prelude::*;

use crate::api::{self, ApiClient};
use crate::components::common::{Button, ErrorMessage, SuccessMessage};
use crate::models::{IndividualField, MemberField, RegistrationType, TeamField};
use crate::state::{RegistrationForm, RegistrationRequest};

#[component]
pub fn RegistrationPanel() -> Element {
    let client = use_context::<ApiClient>();
    let mut form = use_signal(RegistrationForm::default);

    let submit = move |e: FormEvent| {
        e.prevent_default();
        let Some(request) = form.write().begin_submit() else {
            return;
        };

        let client = client.clone();
        spawn(async move {
            let result = match request {
                RegistrationRequest::Individual(payload) => api::auth::register_individual(&client, &payload).await,
                RegistrationRequest::Team(payload) => api::auth::register_team(&client, &payload).await,
            };
            if result.is_ok() {
                tracing::info!("Registration submitted");
            }
            form.write().finish_submit(result);
        });
    };

    let state = form.read();
    let active = state.registration_type;
    let submit_label = if state.loading {
        "Submitting..."
    } else if state.submitted {
        "Registered"
    } else {
        "Submit Registration"
    };

    rsx! {
        div { class: "w-full max-w-2xl retro-window",
            div { class: "retro-title-bar",
                span { class: "font-pixel text-white text-sm uppercase tracking-wider", "Registration" }
            }

            div { class: "p-6 md:p-10",
                div { class: "flex justify-center space-x-4 mb-8",
                    for option in [RegistrationType::Individual, RegistrationType::Team] {
                        button {
                            r#type: "button",
                            class: if option == active { "button-active-pink" } else { "button-inactive-pink" },
                            onclick: move |_| form.write().select_type(option),
                            "{option.label()}"
                        }
                    }
                }

                form { onsubmit: submit,
                    if let Some(error) = &state.error {
                        ErrorMessage { message: error.clone() }
                    }

                    if active == RegistrationType::Individual {
                        IndividualForm {
                            draft: state.individual.clone(),
                            on_change: move |(field, value): (IndividualField, String)| {
                                form.write().set_individual_field(field, value);
                            },
                        }
                    } else {
                        TeamForm {
                            draft: state.team.clone(),
                            limit_notice: state.limit_notice.clone(),
                            on_team_change: move |(field, value): (TeamField, String)| {
                                form.write().set_team_field(field, value);
                            },
                            on_member_change: move |(index, field, value): (usize, MemberField, String)| {
                                form.write().set_member_field(index, field, value);
                            },
                            on_add_member: move |_| {
                                form.write().add_member();
                            },
                            on_remove_member: move |index: usize| {
                                form.write().remove_member(index);
                            },
                        }
                    }

                    if let Some(success) = &state.success {
                        SuccessMessage { message: success.clone() }
                    }

                    div { class: "pt-4 flex justify-center",
                        Button {
                            button_type: "submit",
                            disabled: !state.can_submit(),
                            "{submit_label}"
                        }
                    }
                }
            }
        }
    }
}
