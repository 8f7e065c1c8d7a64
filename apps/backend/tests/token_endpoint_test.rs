mod common;

use std::time::{SystemTime, UNIX_EPOCH};

use actix_web::{test, web, App};
use backend::routes;
use backend::{verify_token, AppState, PLATFORM_SIGNATURE_HEADER};
use common::token_expiring_in;
use serde_json::Value;

fn now_secs() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs() as i64
}

#[actix_web::test]
async fn reissues_short_lived_token_for_same_identity() {
    let state = AppState::for_tests();
    let session_token = token_expiring_in(&state, "u1", "t1", 24 * 60 * 60);

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state.clone()))
            .service(web::scope("/api/auth").configure(routes::token::configure_routes)),
    )
    .await;

    let before = now_secs();
    let req = test::TestRequest::get()
        .uri("/api/auth/token")
        .insert_header((PLATFORM_SIGNATURE_HEADER, session_token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let after = now_secs();

    assert!(resp.status().is_success());
    let body: Value = test::read_body_json(resp).await;

    let expires_at = body["expires_at"].as_i64().unwrap();
    // 5-minute lifetime, allowing a second of clock travel either way
    assert!(expires_at >= before + 5 * 60 - 1);
    assert!(expires_at <= after + 5 * 60 + 1);

    let reissued = body["token"].as_str().unwrap();
    let claims = verify_token(reissued, &state.security).unwrap();
    assert_eq!(claims.user(), "u1");
    assert_eq!(claims.team(), "t1");
    assert_eq!(claims.expires_at(), expires_at);
}

#[actix_web::test]
async fn reissuance_accepts_query_parameter_transport() {
    let state = AppState::for_tests();
    let session_token = token_expiring_in(&state, "u2", "t2", 60 * 60);

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state.clone()))
            .service(web::scope("/api/auth").configure(routes::token::configure_routes)),
    )
    .await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/auth/token?token={session_token}"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
    let body: Value = test::read_body_json(resp).await;
    let claims = verify_token(body["token"].as_str().unwrap(), &state.security).unwrap();
    assert_eq!(claims.user(), "u2");
    assert_eq!(claims.team(), "t2");
}

#[actix_web::test]
async fn missing_credential_yields_401_with_localized_error() {
    let state = AppState::for_tests();
    let expected = state
        .translator
        .translate("en", "errors.authentication.missing_authentication");

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .service(web::scope("/api/auth").configure(routes::token::configure_routes)),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/auth/token").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 401);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], expected);
}

#[actix_web::test]
async fn invalid_credential_yields_401_with_invalid_token_error() {
    let state = AppState::for_tests();
    let expected = state
        .translator
        .translate("en", "errors.authentication.invalid_token");

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .service(web::scope("/api/auth").configure(routes::token::configure_routes)),
    )
    .await;

    for token in ["garbage", "a.b.c"] {
        let req = test::TestRequest::get()
            .uri("/api/auth/token")
            .insert_header((PLATFORM_SIGNATURE_HEADER, token))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status().as_u16(), 401);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], expected);
    }
}

#[actix_web::test]
async fn expired_session_token_cannot_be_exchanged() {
    let state = AppState::for_tests();
    let stale = token_expiring_in(&state, "u1", "t1", -60);

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .service(web::scope("/api/auth").configure(routes::token::configure_routes)),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/auth/token")
        .insert_header((PLATFORM_SIGNATURE_HEADER, stale))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 401);
}
