//! # Domain Models
//!
//! 영속화되지 않는 인증 관련 값 객체들입니다.
//!
//! - [`auth`] - 토큰에서 추출된 호출자 정보
//! - [`token`] - JWT 클레임과 로그인 응답 토큰

pub mod auth;
pub mod token;

pub use auth::*;
pub use token::*;
