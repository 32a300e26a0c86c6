use serde::{Deserialize, Serialize};
use crate::models::domain::MatchNotification;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// Returned by the single-request endpoint when nothing clears the threshold
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoMatchResponse {
    pub message: String,
}

impl Default for NoMatchResponse {
    fn default() -> Self {
        Self {
            message: "No suitable match found".to_string(),
        }
    }
}

/// Notification hook response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HookResponse {
    pub notified: bool,
    pub notification: Option<MatchNotification>,
}
