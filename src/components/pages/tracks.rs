use dioxus::prelude::*;

use crate::api::{self, ApiClient};
use crate::components::common::{Badge, Card, LoadingSpinner};
use crate::models::{DashboardStats, Submission, Track};
use crate::routes::Route;

#[derive(Clone, Default)]
struct TracksData {
    tracks: Vec<Track>,
    submissions: Vec<Submission>,
    stats: DashboardStats,
}

fn status_badge_class(submission: &Submission) -> &'static str {
    if submission.is_pending() {
        "bg-yellow-900/50 text-yellow-400 border border-yellow-400/50"
    } else {
        "bg-green-900/30 text-green-400 border border-green-400/50"
    }
}

fn submission_date_label(submission: &Submission) -> String {
    submission
        .submitted_on()
        .map(|date| date.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| "date unknown".to_string())
}

/// Live tracks-and-submissions dashboard.
#[component]
pub fn TracksPage() -> Element {
    let client = use_context::<ApiClient>();
    let mut data = use_signal(TracksData::default);
    let mut is_loading = use_signal(|| true);
    let mut error = use_signal(|| None::<String>);

    use_effect(move || {
        let client = client.clone();
        spawn(async move {
            is_loading.set(true);
            error.set(None);

            let (tracks, submissions) = futures::join!(
                api::events::get_tracks(&client),
                api::events::get_submissions(&client)
            );

            match (tracks, submissions) {
                (Ok(tracks), Ok(submissions)) => {
                    let stats = DashboardStats::from_lists(&tracks, &submissions);
                    data.set(TracksData { tracks, submissions, stats });
                }
                (Err(e), _) | (_, Err(e)) => {
                    tracing::error!("Dashboard fetch failed: {}", e);
                    error.set(Some(e.to_string()));
                }
            }
            is_loading.set(false);
        });
    });

    if *is_loading.read() {
        return rsx! {
            div { class: "flex justify-center items-center h-screen", LoadingSpinner {} }
        };
    }

    if let Some(message) = error() {
        return rsx! {
            div { class: "p-8 text-red-600", "Error: {message}" }
        };
    }

    let dashboard = data.read();

    rsx! {
        div { class: "max-w-7xl mx-auto px-4 py-8 bg-gray-900 min-h-screen",
            div { class: "grid grid-cols-1 md:grid-cols-3 gap-6 mb-12",
                StatCard { title: "TOTAL TRACKS", value: dashboard.stats.total_tracks, icon: "\u{1F9D9}", accent: "cyan" }
                StatCard { title: "ACTIVE SUBMISSIONS", value: dashboard.stats.active_submissions, icon: "\u{1F4E4}", accent: "green" }
                StatCard { title: "PENDING REVIEWS", value: dashboard.stats.pending_reviews, icon: "\u{23F3}", accent: "yellow" }
            }

            section { class: "mb-12",
                h2 { class: "text-3xl font-bold text-pink-400 mb-6 font-mono", "AVAILABLE TRACKS" }
                div { class: "grid gap-6 md:grid-cols-2 lg:grid-cols-3",
                    for track in dashboard.tracks.iter() {
                        Card { key: "{track.id}", class: "border-purple-400 shadow-purple-500/30",
                            h3 { class: "text-xl font-bold text-purple-300 mb-2 font-mono", "{track.name}" }
                            p { class: "text-cyan-200 mb-4", "{track.description}" }
                            Link {
                                to: Route::About {},
                                class: "inline-block bg-gradient-to-r from-pink-500 to-purple-600 text-white px-6 py-3 rounded-lg font-mono text-sm uppercase tracking-wide",
                                "ACCESS TERMINAL \u{2192}"
                            }
                        }
                    }
                }
            }

            section {
                h2 { class: "text-3xl font-bold text-green-400 mb-6 font-mono", "RECENT UPLOADS" }
                div { class: "bg-gray-800 rounded-xl border-2 border-green-400 shadow-lg shadow-green-500/20",
                    if dashboard.submissions.is_empty() {
                        p { class: "p-6 text-center text-gray-400 font-mono", "No submissions yet" }
                    }
                    for submission in dashboard.submissions.iter() {
                        div { key: "{submission.id}", class: "p-6 border-b border-green-900/50 last:border-b-0",
                            div { class: "flex justify-between items-center",
                                div {
                                    h3 { class: "font-bold text-green-300", "UPLOAD #{submission.id}" }
                                    p { class: "text-cyan-300 text-sm mt-1",
                                        "TRACK {submission.track_id} \u{2022} "
                                        {submission_date_label(submission)}
                                    }
                                }
                                Badge {
                                    text: submission.status.to_uppercase(),
                                    color_class: status_badge_class(submission).to_string(),
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn StatCard(title: String, value: usize, icon: String, accent: String) -> Element {
    let (border, text) = match accent.as_str() {
        "cyan" => ("border-cyan-400", "text-cyan-400"),
        "green" => ("border-green-400", "text-green-400"),
        _ => ("border-yellow-400", "text-yellow-400"),
    };

    rsx! {
        Card { class: "{border}",
            div { class: "flex justify-between items-center",
                div {
                    p { class: "{text} mb-2 font-mono", "{title}" }
                    p { class: "text-4xl font-bold {text}", "{value}" }
                }
                div { class: "w-12 h-12 bg-gray-900/50 rounded-lg flex items-center justify-center",
                    span { class: "text-2xl", "{icon}" }
                }
            }
        }
    }
}
