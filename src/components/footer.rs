use chrono::Datelike;
use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    let year = chrono::Local::now().year();

    rsx! {
        footer { class: "retro-panel font-pixel text-black p-2 mt-auto",
            div { class: "container mx-auto flex flex-col sm:flex-row justify-between items-center text-xs",
                div { class: "mb-2 sm:mb-0", "\u{00A9} {year} D.I.C.E. IMPACT All Rights Reserved." }
                div { class: "flex space-x-4",
                    a { href: "https://www.bloom-uva.nl/", class: "hover:underline", "Made by Bloom" }
                    a { href: "https://www.instagram.com/dice_impact/", class: "hover:underline", "Instagram" }
                }
            }
        }
    }
}
