use serde::{Deserialize, Serialize};

// Request payload for access code verification.
#[derive(Debug, Default, Deserialize)]
pub struct VerifyCodeRequest {
    #[serde(default)]
    pub code: Option<String>,
}

// Successful verification: the client keeps `token` for later calls.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyCodeAccepted {
    pub valid: bool,
    pub guest_name: String,
    pub token: String,
}

// Rejected verification, sent with 200 or 400 depending on the cause.
#[derive(Debug, Serialize)]
pub struct VerifyCodeRejected {
    pub valid: bool,
    pub message: String,
}

// Response payload for the guest-facing details fragment.
#[derive(Debug, Serialize)]
pub struct DetailsResponse {
    pub html: String,
}

// Response payload for logout.
#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub active_sessions: usize,
}

// Error envelope for authenticated endpoints.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
