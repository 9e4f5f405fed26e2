//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 핸들러는 요청 본문을 `validator`로 검증한 뒤 [`UserService`](crate::services::users::UserService)에
//! 위임하고, 서비스의 `AppError`는 `?`로 그대로 HTTP 응답이 됩니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                     ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 모듈 구성
//!
//! - **`auth`**: 회원가입 (`POST /auth/register`), 로그인 (`POST /auth/login`)
//! - **`users`**: 사용자 조회/수정/삭제, 주소와 전화번호 추가/수정 (Bearer 토큰 필요)
//!
//! ## 의존성 주입
//!
//! `UserService`는 `main`에서 한 번 생성되어 `web::Data`로 등록됩니다.
//!
//! ```rust,ignore
//! #[get("")]
//! pub async fn find_user(
//!     service: web::Data<UserService>,
//!     query: web::Query<EmailQuery>,
//! ) -> Result<HttpResponse, AppError> {
//!     let user = service.find_by_email(&query.email).await?;
//!     Ok(HttpResponse::Ok().json(user))
//! }
//! ```

use actix_web::{http::header::AUTHORIZATION, HttpRequest};
use validator::Validate;
use crate::core::errors::{AppError, AppResult};

pub mod users;
pub mod auth;

/// 요청의 `Authorization` 헤더 값 (`Bearer {token}`)
pub(crate) fn authorization_header(req: &HttpRequest) -> AppResult<&str> {
    req.headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::AuthenticationError("Authorization 헤더가 없습니다".to_string()))
}

/// `validator` 검증 실패를 `ValidationError`로 변환
pub(crate) fn validate<T: Validate>(payload: &T) -> AppResult<()> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))
}
