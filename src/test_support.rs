//! Helpers for tests that need a live HTTP peer or a running VirtualDom.

use axum::Router;
use dioxus::prelude::*;
use std::time::Duration;
use tokio::net::TcpListener;

/// Serve `router` on an ephemeral local port and return its base URL.
pub async fn spawn_stub(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// A base URL on which nothing is listening.
pub async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

/// Poll `dom` and re-render until `done` holds. Spawned tasks only make
/// progress while this runs.
pub async fn run_until(dom: &mut VirtualDom, done: impl Fn() -> bool) {
    let drive = async {
        while !done() {
            dom.wait_for_work().await;
            let _ = dom.render_immediate_to_vec();
        }
    };
    tokio::time::timeout(Duration::from_secs(5), drive)
        .await
        .expect("virtual dom did not settle");
}
