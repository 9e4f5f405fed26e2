//! # Data Transfer Objects
//!
//! HTTP 경계에서 주고받는 데이터 구조체들입니다.
//! 엔티티와의 상호 변환은 [`crate::services::users::converter`]가 담당합니다.

pub mod users;

pub use users::*;
