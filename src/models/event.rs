use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

pub const PENDING_STATUS: &str = "Pending";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub rules: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    pub track_id: i64,
    pub status: String,
    /// ISO-8601, with or without an offset.
    #[serde(default)]
    pub submission_date: Option<String>,
}

impl Submission {
    pub fn is_pending(&self) -> bool {
        self.status == PENDING_STATUS
    }

    pub fn submitted_on(&self) -> Option<NaiveDate> {
        let raw = self.submission_date.as_deref()?;
        DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.date_naive())
            .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
            .ok()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_tracks: usize,
    pub active_submissions: usize,
    pub pending_reviews: usize,
}

impl DashboardStats {
    pub fn from_lists(tracks: &[Track], submissions: &[Submission]) -> Self {
        DashboardStats {
            total_tracks: tracks.len(),
            active_submissions: submissions.len(),
            pending_reviews: submissions.iter().filter(|s| s.is_pending()).count(),
        }
    }
}
