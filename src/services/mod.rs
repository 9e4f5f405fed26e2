//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 모든 서비스는 의존성을 생성자로 주입받으며 `main`에서 한 번 조립됩니다.
//!
//! - [`users`] - 사용자 계정, 주소, 전화번호 관리
//! - [`auth`] - 비밀번호 해싱, JWT 토큰 발급/검증

pub mod users;
pub mod auth;
