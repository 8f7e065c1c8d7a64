use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, App, HttpServer};
use backend::auth::extractor::CompositeExtractor;
use backend::auth::refresher::{NoopRefresher, StoreBackedRefresher, TokenRefresher};
use backend::middleware::{Authenticate, RequestTrace};
use backend::routes;
use backend::services::authorization::HttpAuthorizationStore;
use backend::state::app_state::AppState;
use backend::state::security_config::SecurityConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    backend::telemetry::init_tracing();

    // Environment variables must be set by the runtime environment:
    // - Docker: Set via docker-compose env_file or docker run --env-file
    // - Local dev: Source env files manually (e.g., set -a; . ./.env; set +a)
    let host = std::env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("BACKEND_PORT")
        .unwrap_or_else(|_| "3001".to_string())
        .parse::<u16>()
        .unwrap_or_else(|_| {
            eprintln!("BACKEND_PORT must be a valid port number");
            std::process::exit(1);
        });

    let security = match SecurityConfig::from_env() {
        Ok(security) => security,
        Err(e) => {
            eprintln!("Failed to load security config: {e}");
            std::process::exit(1);
        }
    };

    // Upstream authorization re-confirmation is only enabled when a store
    // endpoint is configured; without one, verified tokens pass as-is.
    let refresher: Arc<dyn TokenRefresher> = match std::env::var("AUTHZ_STORE_URL") {
        Ok(url) => {
            let timeout_secs = std::env::var("AUTHZ_LOOKUP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(5);
            tracing::info!(store_url = %url, "authorization-backed refresh enabled");
            Arc::new(
                StoreBackedRefresher::new(Arc::new(HttpAuthorizationStore::new(url)))
                    .with_lookup_timeout(Duration::from_secs(timeout_secs)),
            )
        }
        Err(_) => Arc::new(NoopRefresher),
    };

    let app_state = AppState::with_defaults(security);
    let data = web::Data::new(app_state);

    tracing::info!(host = %host, port, "starting add-on backend");

    HttpServer::new(move || {
        let authenticate = Authenticate::new(
            Arc::new(CompositeExtractor::platform_signature()),
            Arc::clone(&refresher),
        );

        App::new()
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::health::configure_routes)
            .service(web::scope("/api/auth").configure(routes::token::configure_routes))
            .service(
                web::scope("/api/private")
                    .wrap(authenticate)
                    .configure(routes::private::configure_routes),
            )
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
