use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use serde::Serialize;

use crate::auth::claims::TokenClaims;
use crate::error::AppError;

/// Verified identity for the current request.
///
/// Reads the claims that the [`Authenticate`](crate::middleware::Authenticate)
/// middleware stored in request extensions; handlers reached without that
/// middleware get a 401.
#[derive(Debug, Serialize, Clone)]
pub struct CurrentIdentity {
    pub user: String,
    pub team: String,
}

impl FromRequest for CurrentIdentity {
    type Error = AppError;
    type Future = std::future::Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let claims = req.extensions().get::<TokenClaims>().cloned();

        std::future::ready(match claims {
            Some(claims) => Ok(CurrentIdentity {
                user: claims.user().to_string(),
                team: claims.team().to_string(),
            }),
            None => Err(AppError::MissingToken),
        })
    }
}
