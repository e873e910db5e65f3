use dioxus::prelude::*;

use super::TeamMemberInput;
use crate::components::common::{Button, Input};
use crate::models::{MemberField, TeamDraft, TeamField, MAX_TEAM_MEMBERS};

#[component]
pub fn TeamForm(
    draft: TeamDraft,
    limit_notice: Option<String>,
    on_team_change: EventHandler<(TeamField, String)>,
    on_member_change: EventHandler<(usize, MemberField, String)>,
    on_add_member: EventHandler<()>,
    on_remove_member: EventHandler<usize>,
) -> Element {
    let member_count = draft.members.len();
    let add_class = if draft.can_add_member() {
        "!px-3 !py-1 text-xs bg-blue-200 text-blue-800 border border-blue-400"
    } else {
        "!px-3 !py-1 text-xs bg-gray-200 text-gray-500 border border-gray-400"
    };

    rsx! {
        div { class: "space-y-4",
            Input {
                label: "Team Name",
                id: "teamName",
                value: draft.team_name.clone(),
                placeholder: "Your Awesome Team Name",
                oninput: move |e: FormEvent| on_team_change.call((TeamField::TeamName, e.value())),
            }
            Input {
                label: "Team Password",
                id: "teamPassword",
                input_type: "password",
                value: draft.team_password.clone(),
                placeholder: "Shared password for all members",
                oninput: move |e: FormEvent| on_team_change.call((TeamField::TeamPassword, e.value())),
            }
            Input {
                label: "Team Description (Optional)",
                id: "description",
                input_type: "textarea",
                required: false,
                value: draft.description.clone(),
                placeholder: "What your team is about",
                class: "min-h-[60px]",
                oninput: move |e: FormEvent| on_team_change.call((TeamField::Description, e.value())),
            }

            h3 { class: "text-base font-semibold text-black pt-2 font-sans",
                "Team Members ({member_count}/{MAX_TEAM_MEMBERS})"
            }
            if let Some(notice) = &limit_notice {
                p { class: "text-yellow-600 text-xs mb-2", "{notice}" }
            }

            div { class: "space-y-4",
                for (index, member) in draft.members.iter().enumerate() {
                    TeamMemberInput {
                        key: "{index}",
                        index: index,
                        member: member.clone(),
                        on_change: on_member_change,
                        on_remove: on_remove_member,
                    }
                }
            }

            div { class: "flex justify-end",
                // Stays clickable at the cap so the limit notice can be shown.
                Button {
                    class: "{add_class}",
                    onclick: move |_| on_add_member.call(()),
                    "+ Add Member"
                }
            }
        }
    }
}
