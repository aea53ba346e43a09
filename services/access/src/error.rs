use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use gatepass_auth_types::phone::InvalidPhoneFormat;

/// Access service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum AccessServiceError {
    #[error("invalid phone number format")]
    InvalidPhoneFormat,
    #[error("number not registered — contact estate administration")]
    PhoneNotRegistered,
    #[error("no active verification challenge — request a new code")]
    NoActiveChallenge,
    #[error("incorrect verification code")]
    InvalidCode,
    #[error("too many verification attempts — request a new code")]
    TooManyAttempts,
    #[error("resident not found")]
    ResidentNotFound,
    #[error("a resident with this phone already exists")]
    ResidentAlreadyExists,
    #[error("failed to send verification code — try again")]
    DispatchFailed,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl From<InvalidPhoneFormat> for AccessServiceError {
    fn from(_: InvalidPhoneFormat) -> Self {
        Self::InvalidPhoneFormat
    }
}

impl AccessServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidPhoneFormat => "INVALID_PHONE_FORMAT",
            Self::PhoneNotRegistered => "PHONE_NOT_REGISTERED",
            Self::NoActiveChallenge => "NO_ACTIVE_CHALLENGE",
            Self::InvalidCode => "INVALID_CODE",
            Self::TooManyAttempts => "TOO_MANY_ATTEMPTS",
            Self::ResidentNotFound => "RESIDENT_NOT_FOUND",
            Self::ResidentAlreadyExists => "RESIDENT_ALREADY_EXISTS",
            Self::DispatchFailed => "DISPATCH_FAILED",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for AccessServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::InvalidPhoneFormat => StatusCode::BAD_REQUEST,
            Self::PhoneNotRegistered => StatusCode::FORBIDDEN,
            Self::NoActiveChallenge | Self::ResidentNotFound => StatusCode::NOT_FOUND,
            Self::InvalidCode => StatusCode::UNAUTHORIZED,
            Self::TooManyAttempts => StatusCode::TOO_MANY_REQUESTS,
            Self::ResidentAlreadyExists => StatusCode::CONFLICT,
            Self::DispatchFailed | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 500s only — tower-http TraceLayer already records method/uri/status for all
        // requests. 4xx are expected client errors; logging them here would be noise.
        // Internal errors need the anyhow chain logged so the root cause is traceable.
        // (Dispatch failures are logged with provider context at the sender.)
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
