use dioxus::prelude::*;

use crate::routes::Route;

const EVENT_FACTS: [(&str, &str, &str); 4] = [
    ("\u{1F4C5}", "When", "2-3 June 2025"),
    ("\u{1F4CD}", "Where", "JK Building, Roeterselland Campus UvA"),
    ("\u{1F465}", "Who", "All UvA students welcome, no prior skills needed"),
    ("\u{1F4BB}", "What", "Join solo or as a team, pick a role and co-create a digital intervention"),
];

#[component]
pub fn HomePage() -> Element {
    rsx! {
        div { class: "flex flex-col items-center justify-center min-h-full text-center px-4 pt-24 pb-28",
            h1 { class: "text-4xl md:text-5xl lg:text-6xl font-pixel text-white mb-8 uppercase tracking-wider text-shadow-hard",
                "Welcome to the"
            }

            div { class: "bg-gray-100 border-4 border-black shadow-lg w-full max-w-3xl relative",
                div { class: "bg-purple-600 text-white flex items-center justify-between px-4 py-2 border-b-4 border-black font-pixel",
                    span { class: "font-bold text-sm md:text-base uppercase", "D.I.C.E Impact-thon" }
                }

                div { class: "p-6 md:p-8 pb-16 sm:pb-24 text-left text-sm md:text-base leading-relaxed text-black",
                    p { class: "mb-6",
                        "The D.I.C.E. ImpactThon is a 2-day challenge where UvA students from all backgrounds come together to create data-driven, ethically grounded digital solutions for real-world problems."
                    }
                    ul { class: "space-y-3 mb-6",
                        for (icon, label, text) in EVENT_FACTS {
                            li { class: "flex items-start",
                                span { class: "mr-3 flex-shrink-0", "{icon}" }
                                span {
                                    span { class: "font-semibold", "{label}: " }
                                    "{text}"
                                }
                            }
                        }
                    }
                    p { class: "text-center font-bold text-lg md:text-xl uppercase font-pixel", "Want to know more?" }
                }

                div { class: "absolute bottom-0 left-1/2 -translate-x-1/2 translate-y-1/2 z-20 w-full px-4 sm:px-0 sm:w-auto",
                    div { class: "flex flex-col space-y-2 sm:flex-row sm:space-y-0 sm:space-x-4",
                        Link { to: Route::About {}, class: "retro-link", "Explore tracks" }
                        Link { to: Route::Register {}, class: "retro-link", "Register" }
                    }
                }
            }
        }
    }
}
