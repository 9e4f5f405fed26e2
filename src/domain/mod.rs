//! # Domain Layer Module
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← 영속화되는 엔티티 (User, Address, Phone)
//! ├── dto/          ← HTTP 경계의 데이터 전송 객체
//! └── models/       ← 토큰 클레임, 인증된 호출자 등 값 객체
//! ```

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::users::{User, Address, Phone};
pub use dto::*;
pub use models::*;
