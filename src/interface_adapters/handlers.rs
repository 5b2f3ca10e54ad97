use crate::domain::errors::AuthError;
use crate::interface_adapters::presentation::render_details;
use crate::interface_adapters::protocol::{
    DetailsResponse, ErrorResponse, HealthResponse, LogoutResponse, VerifyCodeAccepted,
    VerifyCodeRejected, VerifyCodeRequest,
};
use crate::interface_adapters::state::{AppState, RandomTokenGenerator, SystemClock};
use crate::use_cases::event_details::EventDetailsUseCase;
use crate::use_cases::health::HealthUseCase;
use crate::use_cases::logout::LogoutUseCase;
use crate::use_cases::verify_code::VerifyCodeUseCase;
use crate::use_cases::verify_token::VerifyTokenUseCase;
use axum::extract::rejection::JsonRejection;
use axum::http::{header::AUTHORIZATION, HeaderMap};
use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, SecondsFormat, Utc};
use tracing::{debug, error, info};

// Handler for exchanging an access code for a session token.
#[tracing::instrument(name = "verify_code", skip_all)]
pub async fn verify_code(
    State(state): State<AppState>,
    payload: Result<Json<VerifyCodeRequest>, JsonRejection>,
) -> Result<Json<VerifyCodeAccepted>, (StatusCode, Json<VerifyCodeRejected>)> {
    // An unreadable body is treated the same as a missing code.
    let payload = match payload {
        Ok(Json(payload)) => payload,
        Err(rejection) => {
            debug!(error = %rejection, "unreadable verify payload");
            VerifyCodeRequest::default()
        }
    };

    let use_case = VerifyCodeUseCase {
        clock: SystemClock,
        store: state.session_store(),
        registry: state.registry.clone(),
        tokens: RandomTokenGenerator,
        ttl_seconds: state.session_ttl_seconds,
    };

    let result = use_case
        .execute(payload.code)
        .await
        .map_err(map_verify_error)?;

    info!(
        guest = %result.guest_name,
        role = result.role.as_str(),
        token_prefix = token_prefix(&result.token),
        "new session"
    );

    Ok(Json(VerifyCodeAccepted {
        valid: true,
        guest_name: result.guest_name,
        token: result.token,
    }))
}

// Handler for the role-filtered event details fragment.
#[tracing::instrument(name = "event_details", skip_all)]
pub async fn event_details(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<DetailsResponse>, (StatusCode, Json<ErrorResponse>)> {
    let use_case = EventDetailsUseCase {
        verify: VerifyTokenUseCase {
            clock: SystemClock,
            store: state.session_store(),
        },
        schedule: state.schedule.clone(),
    };

    let details = use_case
        .execute(bearer_token(&headers))
        .await
        .map_err(map_details_error)?;

    info!(
        guest = %details.session.guest_name,
        role = details.session.role.as_str(),
        visible = details.schedule.len(),
        total = details.total_entries,
        "valid access"
    );

    Ok(Json(DetailsResponse {
        html: render_details(&state.event, &details),
    }))
}

// Handler for ending a session; succeeds whether or not the token was live.
#[tracing::instrument(name = "logout", skip_all)]
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Json<LogoutResponse> {
    let use_case = LogoutUseCase {
        store: state.session_store(),
    };

    match use_case.execute(bearer_token(&headers)).await {
        Ok(result) => {
            if let Some(session) = result.ended {
                info!(
                    guest = %session.guest_name,
                    role = session.role.as_str(),
                    "session ended"
                );
            }
        }
        Err(err) => error!(error = %err, "failed to end session"),
    }

    Json(LogoutResponse {
        success: true,
        message: "Logged out successfully".to_string(),
    })
}

pub async fn health(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<ErrorResponse>)> {
    let use_case = HealthUseCase {
        clock: SystemClock,
        store: state.session_store(),
    };

    let report = use_case.execute().await.map_err(|err| {
        error!(error = %err, "health check failed");
        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal Server Error",
            "storage error",
        )
    })?;

    let timestamp = i64::try_from(report.checked_at)
        .ok()
        .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
        .unwrap_or_default()
        .to_rfc3339_opts(SecondsFormat::Millis, true);

    Ok(Json(HealthResponse {
        status: "Server is running".to_string(),
        timestamp,
        active_sessions: report.active_sessions,
    }))
}

// Accepts both a raw token and the `Bearer <token>` form.
fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ").unwrap_or(value);
    Some(token.to_string())
}

// Only a short prefix of a token ever reaches the logs.
fn token_prefix(token: &str) -> &str {
    token.get(..8).unwrap_or(token)
}

// Helper to build a JSON error response.
fn error_response(
    status: StatusCode,
    error: &str,
    message: &str,
) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
            message: message.to_string(),
        }),
    )
}

fn rejected(status: StatusCode, message: &str) -> (StatusCode, Json<VerifyCodeRejected>) {
    (
        status,
        Json(VerifyCodeRejected {
            valid: false,
            message: message.to_string(),
        }),
    )
}

// An unknown code is a 200 with `valid: false`; clients branch on the body.
fn map_verify_error(err: AuthError) -> (StatusCode, Json<VerifyCodeRejected>) {
    match err {
        AuthError::CodeRequired => rejected(StatusCode::BAD_REQUEST, "Access code is required"),
        AuthError::InvalidCode => rejected(StatusCode::OK, "Invalid access code"),
        AuthError::StorageFailure
        | AuthError::MissingToken
        | AuthError::InvalidToken
        | AuthError::SessionExpired => {
            error!(error = %err, "error verifying code");
            rejected(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Server error during verification",
            )
        }
    }
}

fn map_details_error(err: AuthError) -> (StatusCode, Json<ErrorResponse>) {
    match err {
        AuthError::MissingToken => error_response(
            StatusCode::UNAUTHORIZED,
            "Unauthorized",
            "No authentication token provided",
        ),
        AuthError::InvalidToken => error_response(
            StatusCode::UNAUTHORIZED,
            "Unauthorized",
            "Invalid or expired token",
        ),
        AuthError::SessionExpired => error_response(
            StatusCode::UNAUTHORIZED,
            "Unauthorized",
            "Session expired. Please login again.",
        ),
        AuthError::StorageFailure | AuthError::CodeRequired | AuthError::InvalidCode => {
            error!(error = %err, "error loading event details");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error",
                "storage error",
            )
        }
    }
}
