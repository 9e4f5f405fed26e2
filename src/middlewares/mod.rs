//! 미들웨어 모듈
//!
//! ActixWeb 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - `Authorization: Bearer {token}` 헤더 추출 및 JWT 검증
//! - 검증에 실패하면 401 JSON 응답으로 요청 종료
//! - 성공 시 [`AuthenticatedUser`](crate::domain::models::auth::AuthenticatedUser)를 request extension에 저장
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//! use crate::middlewares::AuthMiddleware;
//!
//! App::new()
//!     .service(
//!         web::scope("/api/v1/users")
//!             .wrap(AuthMiddleware::required(tokens.clone()))
//!             .service(find_user)
//!     )
//! ```

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
