//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 본문/쿼리를 구조화된 Rust 타입으로 변환하고,
//! `validator` 크레이트로 형식 규칙을 검증합니다.
//! 검증 실패는 핸들러에서 `AppError::ValidationError`(400)로 변환됩니다.

pub mod auth_request;

pub use auth_request::{LoginRequest, EmailQuery};
