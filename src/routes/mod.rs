//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//!
//! # Route Groups
//!
//! | 스코프 | 인증 | 엔드포인트 |
//! |--------|------|------------|
//! | `/health` | 불필요 | 헬스체크 |
//! | `/api/v1/auth` | 불필요 | 회원가입, 로그인 |
//! | `/api/v1/users` | Bearer 토큰 | 사용자 조회/수정/삭제, 주소/전화번호 |
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new()
//!     .app_data(user_service.clone())
//!     .configure(|cfg| configure_all_routes(cfg, tokens.clone()));
//! ```

use std::sync::Arc;
use crate::handlers;
use crate::middlewares::AuthMiddleware;
use crate::services::auth::TokenProvider;
use actix_web::web;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// `tokens`는 보호된 스코프의 인증 미들웨어가 토큰 검증에 사용합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig, tokens: Arc<dyn TokenProvider>) {
    cfg.service(health_check);

    configure_auth_routes(cfg);
    configure_user_routes(cfg, tokens);
}

/// 인증 관련 라우트를 설정합니다
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/auth/login \
///   -H "Content-Type: application/json" \
///   -d '{"email":"user@example.com","password":"password123"}'
/// ```
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/auth")
            .service(handlers::auth::register)
            .service(handlers::auth::login)
    );
}

/// 사용자 관련 라우트를 설정합니다 (모두 Bearer 토큰 필요)
fn configure_user_routes(cfg: &mut web::ServiceConfig, tokens: Arc<dyn TokenProvider>) {
    cfg.service(
        web::scope("/api/v1/users")
            .wrap(AuthMiddleware::required(tokens))
            .service(handlers::users::find_user)
            .service(handlers::users::update_user)
            .service(handlers::users::create_address)
            .service(handlers::users::update_address)
            .service(handlers::users::create_phone)
            .service(handlers::users::update_phone)
            .service(handlers::users::delete_user)
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "user_account_service",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00Z"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "user_account_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;
    use crate::{
        domain::dto::users::{AddressDto, UserDto},
        repositories::InMemoryStore,
        services::{
            auth::{BcryptPasswordHasher, TokenService},
            users::UserService,
        },
    };

    fn app_parts() -> (web::Data<UserService>, Arc<TokenService>) {
        let store = Arc::new(InMemoryStore::new());
        let tokens = Arc::new(TokenService::new("test-secret", 1));
        let service = UserService::new(
            store.clone(),
            store.clone(),
            store,
            Arc::new(BcryptPasswordHasher::new(4)),
            tokens.clone(),
        );

        (web::Data::new(service), tokens)
    }

    macro_rules! init_app {
        ($service:expr, $tokens:expr) => {
            test::init_service(
                App::new()
                    .app_data($service.clone())
                    .configure(|cfg| configure_all_routes(cfg, $tokens.clone())),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_health_check() {
        let (service, tokens) = app_parts();
        let app = init_app!(service, tokens);

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "healthy");
    }

    #[actix_web::test]
    async fn test_register_login_and_manage_account() {
        let (service, tokens) = app_parts();
        let app = init_app!(service, tokens);

        // 회원가입
        let req = test::TestRequest::post()
            .uri("/api/v1/auth/register")
            .set_json(serde_json::json!({
                "name": "Ana",
                "email": "ana@x.com",
                "password": "secret",
                "addresses": [{ "street": "Rua A", "city": "Curitiba" }]
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let registered: Value = test::read_body_json(resp).await;
        assert!(registered.get("password").is_none());
        assert_eq!(registered["addresses"][0]["city"], "Curitiba");

        // 중복 회원가입
        let req = test::TestRequest::post()
            .uri("/api/v1/auth/register")
            .set_json(serde_json::json!({ "email": "ana@x.com", "password": "other" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);
        let conflict: Value = test::read_body_json(resp).await;
        assert_eq!(conflict["email"], "ana@x.com");

        // 로그인
        let req = test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(serde_json::json!({ "email": "ana@x.com", "password": "secret" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let token: Value = test::read_body_json(resp).await;
        let bearer = format!("Bearer {}", token["access_token"].as_str().unwrap());

        // 조회
        let req = test::TestRequest::get()
            .uri("/api/v1/users?email=ana@x.com")
            .insert_header(("Authorization", bearer.clone()))
            .to_request();
        let found: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(found["name"], "Ana");

        // 본인 정보 수정
        let req = test::TestRequest::put()
            .uri("/api/v1/users")
            .insert_header(("Authorization", bearer.clone()))
            .set_json(serde_json::json!({ "name": "Ana Maria" }))
            .to_request();
        let updated: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(updated["name"], "Ana Maria");
        assert_eq!(updated["email"], "ana@x.com");

        // 주소 수정
        let address_id = registered["addresses"][0]["id"].as_str().unwrap();
        let req = test::TestRequest::put()
            .uri(&format!("/api/v1/users/addresses/{}", address_id))
            .insert_header(("Authorization", bearer.clone()))
            .set_json(serde_json::json!({ "number": 200 }))
            .to_request();
        let address: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(address["number"], 200);
        assert_eq!(address["city"], "Curitiba");

        // 전화번호 추가
        let req = test::TestRequest::post()
            .uri("/api/v1/users/phones")
            .insert_header(("Authorization", bearer.clone()))
            .set_json(serde_json::json!({ "area_code": "41", "number": "99999-0000" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        // 삭제
        let req = test::TestRequest::delete()
            .uri("/api/v1/users/ana@x.com")
            .insert_header(("Authorization", bearer.clone()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::get()
            .uri("/api/v1/users?email=ana@x.com")
            .insert_header(("Authorization", bearer))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_protected_routes_require_token() {
        let (service, tokens) = app_parts();
        let app = init_app!(service, tokens);

        let req = test::TestRequest::get()
            .uri("/api/v1/users?email=ana@x.com")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_invalid_registration_payload_is_bad_request() {
        let (service, tokens) = app_parts();
        let app = init_app!(service, tokens);

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/register")
            .set_json(serde_json::json!({ "email": "not-an-email", "password": "secret" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_deleting_another_account_is_forbidden() {
        let (service, tokens) = app_parts();
        let app = init_app!(service, tokens);

        for email in ["ana@x.com", "bia@x.com"] {
            service
                .register(UserDto {
                    email: Some(email.to_string()),
                    password: Some("secret".to_string()),
                    ..Default::default()
                })
                .await
                .unwrap();
        }

        let bia_bearer = tokens.issue("bia@x.com").unwrap().authorization_header();
        let req = test::TestRequest::delete()
            .uri("/api/v1/users/ana@x.com")
            .insert_header(("Authorization", bia_bearer))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        assert!(service.email_exists("ana@x.com").await.unwrap());
    }

    #[actix_web::test]
    async fn test_foreign_address_update_is_forbidden() {
        let (service, tokens) = app_parts();
        let app = init_app!(service, tokens);

        let ana = service
            .register(UserDto {
                email: Some("ana@x.com".to_string()),
                password: Some("secret".to_string()),
                addresses: vec![AddressDto::default()],
                ..Default::default()
            })
            .await
            .unwrap();
        service
            .register(UserDto {
                email: Some("bia@x.com".to_string()),
                password: Some("secret".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        let bia_bearer = tokens.issue("bia@x.com").unwrap().authorization_header();
        let address_id = ana.addresses[0].id.clone().unwrap();

        let req = test::TestRequest::put()
            .uri(&format!("/api/v1/users/addresses/{}", address_id))
            .insert_header(("Authorization", bia_bearer))
            .set_json(serde_json::json!({ "city": "Elsewhere" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }
}
