use actix_web::{web, HttpResponse, Result};
use serde::Serialize;

use crate::error::AppError;
use crate::extractors::CurrentIdentity;

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user: String,
    pub team: String,
}

/// Protected endpoint that returns the caller's verified identity.
async fn me(identity: CurrentIdentity) -> Result<HttpResponse, AppError> {
    let response = MeResponse {
        user: identity.user,
        team: identity.team,
    };

    Ok(HttpResponse::Ok().json(response))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/me").route(web::get().to(me)));
}
