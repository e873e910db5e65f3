use dioxus::prelude::*;

use crate::routes::Route;

pub struct TrackInfo {
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
}

/// Tracks announced for the event. The live list comes from `/api/tracks`.
pub const DATATHON_TRACKS: [TrackInfo; 4] = [
    TrackInfo {
        title: "Track 1: Predictive Maintenance for Industrial IoT",
        description: "Utilize sensor data from industrial equipment to build models that predict potential failures. Aim to optimize maintenance schedules, reduce downtime, and extend equipment lifespan. Datasets include time-series sensor readings, maintenance logs, and equipment specifications.",
        keywords: &["IoT", "Time Series", "Predictive Analytics", "Manufacturing"],
    },
    TrackInfo {
        title: "Track 2: AI in Sustainable Agriculture",
        description: "Develop AI-driven solutions to enhance agricultural sustainability. Focus on optimizing crop yields, reducing water and pesticide usage, or improving soil health monitoring. Datasets may include satellite imagery, weather patterns, soil sensor data, and crop information.",
        keywords: &["Sustainability", "Computer Vision", "Environmental AI", "Agriculture Tech"],
    },
    TrackInfo {
        title: "Track 3: Healthcare Data Anonymization & Insights",
        description: "Explore techniques for robustly anonymizing sensitive healthcare datasets while preserving their utility for research. Subsequently, derive meaningful insights from the anonymized data to improve patient outcomes or healthcare efficiency. Ethical considerations are paramount.",
        keywords: &["Healthcare", "Data Privacy", "Anonymization", "Machine Learning", "Ethics"],
    },
    TrackInfo {
        title: "Track 4: Smart City Traffic Flow Optimization",
        description: "Leverage diverse urban datasets (traffic sensors, public transport schedules, event data) to create models that optimize traffic flow, reduce congestion, and minimize carbon emissions in a smart city context. Solutions could involve dynamic signal timing or route recommendations.",
        keywords: &["Smart Cities", "Urban Mobility", "Optimization", "Data Simulation"],
    },
];

#[component]
pub fn AboutPage() -> Element {
    rsx! {
        div { class: "flex flex-col items-center p-4 sm:p-6 md:p-8 text-black font-pixel min-h-screen",
            div { class: "w-full max-w-3xl mb-8",
                div { class: "retro-title-bar justify-center",
                    h1 { class: "text-xl sm:text-2xl font-bold uppercase tracking-wider",
                        "DATATHON UVA - AVAILABLE TRACKS"
                    }
                }
            }

            ul { class: "w-full max-w-3xl space-y-6",
                for track in DATATHON_TRACKS.iter() {
                    li { key: "{track.title}", class: "retro-panel p-4",
                        h2 { class: "text-lg sm:text-xl font-bold mb-2 border-b border-gray-500 pb-1", "{track.title}" }
                        p { class: "text-sm sm:text-base mb-3 leading-relaxed font-sans", "{track.description}" }
                        div { class: "text-xs",
                            span { class: "font-semibold", "Keywords:" }
                            span { class: "font-sans ml-1", {track.keywords.join(", ")} }
                        }
                    }
                }
            }

            div { class: "mt-10 mb-6 flex flex-col sm:flex-row space-y-3 sm:space-y-0 sm:space-x-4",
                Link { to: Route::Home {}, class: "retro-link", "Go to Dashboard" }
                Link { to: Route::Tracks {}, class: "retro-link", "Live Tracks" }
            }
        }
    }
}
