//! Public event data shown on the dashboard.

use crate::api::{ApiClient, ApiError};
use crate::models::{Submission, Track};

pub async fn get_tracks(client: &ApiClient) -> Result<Vec<Track>, ApiError> {
    client.get("/api/tracks", "Tracks fetch").await
}

pub async fn get_submissions(client: &ApiClient) -> Result<Vec<Submission>, ApiError> {
    client.get("/api/submissions", "Submissions fetch").await
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::test_support::spawn_stub;
    use axum::{routing::get, Json, Router};
    use serde_json::json;

    #[tokio::test]
    async fn test_fetch_tracks_and_submissions() {
        let router = Router::new()
            .route(
                "/api/tracks",
                get(|| async {
                    Json(json!([
                        {"id": 1, "name": "Health", "description": "Anonymized insights", "rules": null},
                        {"id": 2, "name": "Agriculture", "description": "Crop yields"}
                    ]))
                }),
            )
            .route(
                "/api/submissions",
                get(|| async {
                    Json(json!([
                        {"id": 10, "user_id": 3, "track_id": 1, "status": "Pending", "submission_date": "2025-06-02T09:00:00"}
                    ]))
                }),
            );
        let base = spawn_stub(router).await;
        let client = ApiClient::new(&base);

        let (tracks, submissions) = futures::join!(get_tracks(&client), get_submissions(&client));
        let tracks = tracks.unwrap();
        let submissions = submissions.unwrap();

        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[1].rules, None);
        assert_eq!(submissions[0].track_id, 1);
        assert!(submissions[0].is_pending());
    }
}
