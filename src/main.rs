//! Datathon Portal - Dioxus web client
//!
//! Public site for the D.I.C.E. datathon: event info, individual/team
//! registration, login and a live tracks dashboard backed by the event API.
//!
//! Native builds can also run `--server`, which serves the built bundle and
//! proxies `/api/*` to the backend.

mod api;
mod components;
mod config;
mod models;
mod routes;
mod state;

#[cfg(not(target_arch = "wasm32"))]
mod server;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod test_support;

use dioxus::prelude::*;

use api::ApiClient;
use components::{common::Notification, Footer, Header};
use config::ClientConfig;
use routes::Route;
use state::{SessionContext, SessionStore};

fn main() {
    // On wasm, just run the app
    #[cfg(target_arch = "wasm32")]
    {
        dioxus::launch(App);
    }

    // On native, handle server vs app mode
    #[cfg(not(target_arch = "wasm32"))]
    {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer())
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("datathon_portal=info")),
            )
            .init();

        // Load environment variables
        dotenvy::dotenv().ok();

        let args: Vec<String> = std::env::args().collect();

        if args.iter().any(|a| a == "--server") {
            if let Err(e) = run_server() {
                tracing::error!("Server error: {:#}", e);
                std::process::exit(1);
            }
        } else {
            dioxus::launch(App);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn run_server() -> anyhow::Result<()> {
    let config = config::ServerConfig::from_env()?;
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(server::run_server(config))
}

#[component]
fn App() -> Element {
    let config = use_context_provider(ClientConfig::load);
    let client = use_context_provider(|| ApiClient::new(&config.api_url));
    let session = use_context_provider(|| SessionContext::new(SessionStore::platform(), config.session_trust));

    // A restored session authorizes API calls from the first render on.
    use_hook(|| {
        if let Some(restored) = session.peek() {
            client.set_token(Some(restored.access_token));
        }
    });

    rsx! {
        // Global styles
        style { {include_str!("../assets/styles.css")} }

        // Notification toast
        Notification {}

        Router::<Route> {}
    }
}

/// Layout component shared by every route
#[component]
pub fn SiteLayout() -> Element {
    rsx! {
        div { class: "flex flex-col min-h-screen site-background",
            Header {}
            main { class: "flex-grow p-5",
                Outlet::<Route> {}
            }
            Footer {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_renders_home() {
        let mut dom = VirtualDom::new(App);
        let mutations = dom.rebuild_to_vec();
        assert!(!mutations.edits.is_empty());
    }
}
