//! 인증 및 보안 서비스 모듈
//!
//! 비밀번호 해싱과 JWT 토큰 발급/검증을 담당합니다.
//! 사용자 서비스는 두 기능을 trait으로만 참조하므로 테스트에서 쉽게 교체할 수 있습니다.
//!
//! # Features
//!
//! - [`PasswordHasher`] / [`BcryptPasswordHasher`] - bcrypt 기반 단방향 해싱
//! - [`TokenProvider`] / [`TokenService`] - HMAC-SHA256 서명 JWT
//! - [`extract_bearer_token`] - `Authorization` 헤더 값에서 토큰 추출
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{TokenProvider, TokenService};
//!
//! let tokens = TokenService::from_config()?;
//! let pair = tokens.issue("user@example.com")?;
//! let email = tokens.extract_email(&pair.access_token)?;
//! ```

pub mod password_service;
pub mod token_service;

pub use password_service::*;
pub use token_service::*;
