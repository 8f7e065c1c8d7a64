use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;

/// JSON error body returned when an `AppError` escapes a handler.
#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Application error taxonomy.
///
/// The three authentication failures (`MissingToken`, the invalid-token
/// family, `RefreshDenied`) are deliberately indistinguishable to end users;
/// callers render a uniform unauthorized outcome and only the internal code
/// differs for logging and audit.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing authentication token")]
    MissingToken,
    #[error("Malformed authentication token")]
    MalformedToken,
    #[error("Token signature mismatch")]
    SignatureMismatch,
    #[error("Token expired")]
    ExpiredToken,
    #[error("Upstream authorization no longer valid")]
    RefreshDenied,
    #[error("Token signing failed: {detail}")]
    Signing { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
}

impl AppError {
    /// Stable internal code for logs and audit trails.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::MissingToken => "AUTH_MISSING_TOKEN",
            AppError::MalformedToken => "AUTH_MALFORMED_TOKEN",
            AppError::SignatureMismatch => "AUTH_SIGNATURE_MISMATCH",
            AppError::ExpiredToken => "AUTH_EXPIRED_TOKEN",
            AppError::RefreshDenied => "AUTH_REFRESH_DENIED",
            AppError::Signing { .. } => "SIGNING_FAILURE",
            AppError::Config { .. } => "CONFIG_ERROR",
            AppError::Internal { .. } => "INTERNAL",
        }
    }

    /// True for every failure that means "the caller is not authenticated",
    /// regardless of which check tripped.
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            AppError::MissingToken
                | AppError::MalformedToken
                | AppError::SignatureMismatch
                | AppError::ExpiredToken
                | AppError::RefreshDenied
        )
    }

    /// Translation key for the user-facing message.
    ///
    /// Invalid-token failures on the reissuance path get their own key; the
    /// protected-handler path always uses the missing-authentication key so
    /// the response does not disclose which check failed.
    pub fn message_key(&self) -> &'static str {
        match self {
            AppError::MalformedToken | AppError::SignatureMismatch | AppError::ExpiredToken => {
                "errors.authentication.invalid_token"
            }
            _ => "errors.authentication.missing_authentication",
        }
    }

    pub fn status(&self) -> StatusCode {
        if self.is_unauthorized() {
            StatusCode::UNAUTHORIZED
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    pub fn signing(detail: String) -> Self {
        Self::Signing { detail }
    }

    pub fn config(detail: String) -> Self {
        Self::Config { detail }
    }

    pub fn internal(detail: String) -> Self {
        Self::Internal { detail }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status()).json(ErrorBody {
            error: self.to_string(),
        })
    }
}
