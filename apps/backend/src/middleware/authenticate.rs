//! Authentication middleware guarding protected handlers.
//!
//! Per request: extract the raw credential, verify its signature and expiry,
//! let the configured refresher re-confirm upstream authorization if needed,
//! then store the verified claims in request extensions and continue. Any
//! failure short-circuits with a 200 "unauthorized" view carrying a localized
//! message, so the embedding frame always gets something renderable.
//!
//! Extraction and refresh strategies are fixed at construction; the request
//! path itself has no branching over transports.

use std::rc::Rc;
use std::sync::Arc;

use actix_web::body::{BoxBody, MessageBody};
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{web, HttpMessage, HttpResponse};
use futures_util::future::{ready, LocalBoxFuture, Ready};

use crate::auth::extractor::{query_param, CompositeExtractor, TokenExtractor};
use crate::auth::jwt::verify_token;
use crate::auth::refresher::{NoopRefresher, TokenRefresher};
use crate::error::AppError;
use crate::services::translation::DEFAULT_LANG;
use crate::state::app_state::AppState;
use crate::views;

/// Every rejection renders with the same message key; the response must not
/// disclose which check failed.
const UNIFORM_MESSAGE_KEY: &str = "errors.authentication.missing_authentication";

pub struct Authenticate {
    extractor: Arc<dyn TokenExtractor>,
    refresher: Arc<dyn TokenRefresher>,
}

impl Authenticate {
    pub fn new(extractor: Arc<dyn TokenExtractor>, refresher: Arc<dyn TokenRefresher>) -> Self {
        Self {
            extractor,
            refresher,
        }
    }

    /// Platform-signature extraction with no authorization re-confirmation.
    pub fn platform_default() -> Self {
        Self::new(
            Arc::new(CompositeExtractor::platform_signature()),
            Arc::new(NoopRefresher),
        )
    }
}

impl<S, B> Transform<S, ServiceRequest> for Authenticate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = AuthenticateMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthenticateMiddleware {
            service: Rc::new(service),
            extractor: Arc::clone(&self.extractor),
            refresher: Arc::clone(&self.refresher),
        }))
    }
}

pub struct AuthenticateMiddleware<S> {
    service: Rc<S>,
    extractor: Arc<dyn TokenExtractor>,
    refresher: Arc<dyn TokenRefresher>,
}

impl<S, B> Service<ServiceRequest> for AuthenticateMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let extractor = Arc::clone(&self.extractor);
        let refresher = Arc::clone(&self.refresher);

        Box::pin(async move {
            let state = match req.app_data::<web::Data<AppState>>().cloned() {
                Some(state) => state,
                None => {
                    return Err(actix_web::error::ErrorInternalServerError(
                        "AppState not available",
                    ));
                }
            };

            let lang = query_param(req.uri().query(), "lang")
                .unwrap_or_else(|| DEFAULT_LANG.to_string());

            let token = match extractor.extract(req.headers(), req.uri().query()) {
                Ok(token) => token,
                Err(err) => return Ok(reject(req, &state, &lang, &err)),
            };

            // Raw credentials stay out of the logs; a short prefix is enough
            // to correlate entries for one token.
            tracing::info!(token = %fingerprint(&token), "authenticating request");

            let claims = match verify_token(&token, &state.security) {
                Ok(claims) => claims,
                Err(err) => return Ok(reject(req, &state, &lang, &err)),
            };

            if let Err(err) = refresher.maybe_refresh(&claims).await {
                return Ok(reject(req, &state, &lang, &err));
            }

            tracing::info!(
                user = %claims.user(),
                team = %claims.team(),
                "authenticated request"
            );

            req.extensions_mut().insert(claims);

            let res = service.call(req).await?;
            Ok(res.map_into_boxed_body())
        })
    }
}

fn reject(
    req: ServiceRequest,
    state: &web::Data<AppState>,
    lang: &str,
    err: &AppError,
) -> ServiceResponse<BoxBody> {
    tracing::info!(code = err.code(), lang, "rejected unauthenticated request");

    let message = state.translator.translate(lang, UNIFORM_MESSAGE_KEY);
    let response = HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(views::unauthorized_page(lang, &message));

    req.into_response(response)
}

fn fingerprint(token: &str) -> String {
    let prefix: String = token.chars().take(8).collect();
    format!("{prefix}...")
}
