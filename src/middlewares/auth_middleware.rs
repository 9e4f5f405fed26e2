//! JWT 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 JWT 토큰을 검증하고 호출자 정보를 추출합니다.

use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::middlewares::auth_inner::AuthMiddlewareService;
use crate::services::auth::TokenProvider;

/// JWT 인증 미들웨어
///
/// 적용된 스코프의 모든 요청에 유효한 Bearer 토큰을 요구합니다.
pub struct AuthMiddleware {
    tokens: Arc<dyn TokenProvider>,
}

impl AuthMiddleware {
    /// 필수 인증 미들웨어 생성
    pub fn required(tokens: Arc<dyn TokenProvider>) -> Self {
        Self { tokens }
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            tokens: self.tokens.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App, HttpResponse};
    use crate::domain::models::auth::AuthenticatedUser;
    use crate::services::auth::TokenService;

    async fn whoami(user: AuthenticatedUser) -> HttpResponse {
        HttpResponse::Ok().body(user.email)
    }

    fn tokens() -> Arc<TokenService> {
        Arc::new(TokenService::new("test-secret", 1))
    }

    #[actix_web::test]
    async fn test_valid_token_passes_caller_to_handler() {
        let tokens = tokens();
        let bearer = tokens.issue("ana@x.com").unwrap().authorization_header();
        let app = test::init_service(
            App::new().service(
                web::scope("/protected")
                    .wrap(AuthMiddleware::required(tokens))
                    .route("/me", web::get().to(whoami)),
            ),
        ).await;

        let req = test::TestRequest::get()
            .uri("/protected/me")
            .insert_header(("Authorization", bearer))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        assert_eq!(body, "ana@x.com");
    }

    #[actix_web::test]
    async fn test_missing_or_invalid_token_is_unauthorized() {
        let app = test::init_service(
            App::new().service(
                web::scope("/protected")
                    .wrap(AuthMiddleware::required(tokens()))
                    .route("/me", web::get().to(whoami)),
            ),
        ).await;

        let missing = test::TestRequest::get().uri("/protected/me").to_request();
        let resp = test::call_service(&app, missing).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let forged = TokenService::new("other-secret", 1)
            .issue("ana@x.com")
            .unwrap()
            .authorization_header();
        let req = test::TestRequest::get()
            .uri("/protected/me")
            .insert_header(("Authorization", forged))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
