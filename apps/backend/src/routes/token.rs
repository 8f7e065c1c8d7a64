//! Token reissuance endpoint.
//!
//! Exchanges a long-lived session credential for a short-lived token scoped
//! to a single follow-up privileged call. Extraction and verification mirror
//! the auth middleware; no refresh step runs here.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use actix_web::{web, HttpRequest, HttpResponse};
use serde::Serialize;

use crate::auth::extractor::query_param;
use crate::auth::jwt::{mint_token, verify_token};
use crate::services::translation::DEFAULT_LANG;
use crate::state::app_state::AppState;

/// Lifetime of reissued tokens.
const REISSUED_TOKEN_TTL: Duration = Duration::from_secs(5 * 60);

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
    /// Expiry as seconds since epoch
    pub expires_at: i64,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

async fn issue_token(req: HttpRequest, state: web::Data<AppState>) -> HttpResponse {
    let lang =
        query_param(req.uri().query(), "lang").unwrap_or_else(|| DEFAULT_LANG.to_string());

    let token = match state.extractor.extract(req.headers(), req.uri().query()) {
        Ok(token) => token,
        Err(err) => {
            return HttpResponse::Unauthorized().json(ErrorResponse {
                error: state.translator.translate(&lang, err.message_key()),
            });
        }
    };

    let claims = match verify_token(&token, &state.security) {
        Ok(claims) => claims,
        Err(err) => {
            tracing::info!(code = err.code(), "token reissuance rejected");
            return HttpResponse::Unauthorized().json(ErrorResponse {
                error: state.translator.translate(&lang, err.message_key()),
            });
        }
    };

    let expires_at = SystemTime::now() + REISSUED_TOKEN_TTL;
    let reissued = match mint_token(claims.user(), claims.team(), expires_at, &state.security) {
        Ok(token) => token,
        Err(err) => {
            // A signing failure means server misconfiguration, not caller fault.
            tracing::error!(code = err.code(), error = %err, "token reissuance failed");
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to generate authorization token".to_string(),
            });
        }
    };

    let expires_at_secs = expires_at
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or_default();

    tracing::info!(
        user = %claims.user(),
        team = %claims.team(),
        expires_at = expires_at_secs,
        "reissued short-lived token"
    );

    HttpResponse::Ok().json(TokenResponse {
        token: reissued,
        expires_at: expires_at_secs,
    })
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/token").route(web::get().to(issue_token)));
}
