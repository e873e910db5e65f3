use dioxus::prelude::*;

use crate::components::common::{Button, Input};
use crate::models::{MemberField, TeamMember};

#[component]
pub fn TeamMemberInput(
    index: usize,
    member: TeamMember,
    on_change: EventHandler<(usize, MemberField, String)>,
    on_remove: EventHandler<usize>,
) -> Element {
    let number = index + 1;

    rsx! {
        div { class: "border-t border-gray-300 pt-4 mb-4 relative",
            h4 { class: "text-sm font-semibold text-black mb-2 font-sans", "Member #{number}" }

            Button {
                variant: "danger",
                class: "absolute top-3 right-0 !px-2 !py-0.5 text-xs",
                onclick: move |_| on_remove.call(index),
                "X Remove"
            }

            div { class: "grid grid-cols-1 sm:grid-cols-2 gap-x-3",
                Input {
                    label: "Name",
                    id: "member-name-{index}",
                    name: "name",
                    value: member.name.clone(),
                    placeholder: "Member's Full Name",
                    oninput: move |e: FormEvent| on_change.call((index, MemberField::Name, e.value())),
                }
                Input {
                    label: "Email",
                    id: "member-email-{index}",
                    name: "email",
                    input_type: "email",
                    value: member.email.clone(),
                    placeholder: "Member's Email",
                    oninput: move |e: FormEvent| on_change.call((index, MemberField::Email, e.value())),
                }
                Input {
                    label: "Expertise",
                    id: "member-expertise-{index}",
                    name: "expertise",
                    value: member.expertise.clone(),
                    placeholder: "e.g., Frontend Dev",
                    class: "sm:col-span-2",
                    oninput: move |e: FormEvent| on_change.call((index, MemberField::Expertise, e.value())),
                }
            }
        }
    }
}
