use actix_web::web;

use crate::middleware::Authenticate;

pub mod health;
pub mod private;
pub mod token;

/// Configure application routes for tests and non-HttpServer contexts.
///
/// Protected routes are wrapped with the default authenticate middleware
/// (platform-signature extraction, no refresh). In production, `main.rs`
/// wires the same scopes with strategies built from the environment.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Liveness: /health
    health::configure_routes(cfg);

    // Token reissuance: /api/auth/token
    cfg.service(web::scope("/api/auth").configure(token::configure_routes));

    // Protected routes: /api/private/**
    cfg.service(
        web::scope("/api/private")
            .wrap(Authenticate::platform_default())
            .configure(private::configure_routes),
    );
}
