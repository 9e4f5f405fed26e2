//! 사용자 관리 서비스 모듈
//!
//! - [`user_service`] - 사용자 계정 비즈니스 로직 ([`UserService`])
//! - [`converter`] - DTO와 엔티티 간 변환 및 부분 수정 병합
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::InMemoryStore;
//! use crate::services::{auth::{BcryptPasswordHasher, TokenService}, users::UserService};
//!
//! let store = Arc::new(InMemoryStore::new());
//! let service = UserService::new(
//!     store.clone(), store.clone(), store,
//!     Arc::new(BcryptPasswordHasher::from_config()),
//!     Arc::new(TokenService::from_config()?),
//! );
//! let registered = service.register(dto).await?;
//! ```

pub mod user_service;
pub mod converter;

pub use user_service::UserService;
