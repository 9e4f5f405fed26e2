//! 사용자 계정 서비스 백엔드
//!
//! 사용자 계정과 그에 딸린 주소/전화번호를 관리하는 REST API 서비스입니다.
//! 비밀번호는 bcrypt로 해싱되어 저장되고, 호출자는 JWT Bearer 토큰으로 식별됩니다.
//!
//! # Features
//!
//! - **사용자 관리**: 회원가입, 이메일 조회, 부분 수정, 삭제
//! - **주소/전화번호**: 호출자 소유 항목 추가 및 부분 수정 (소유자 검증)
//! - **JWT 인증**: 이메일/비밀번호 로그인, 보호된 라우트용 인증 미들웨어
//! - **생성자 주입**: 저장소, 해셔, 토큰 발급기를 trait 객체로 주입
//! - **MongoDB / 인메모리**: `STORAGE_BACKEND`로 저장소 선택
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트 + AuthMiddleware
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 검증/응답 변환
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← UserService, Converter, 해셔, 토큰
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserStore / AddressStore / PhoneStore
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB | Memory│ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use user_account_service::repositories::InMemoryStore;
//! use user_account_service::services::auth::{BcryptPasswordHasher, TokenService};
//! use user_account_service::services::users::UserService;
//!
//! let store = Arc::new(InMemoryStore::new());
//! let service = UserService::new(
//!     store.clone(), store.clone(), store,
//!     Arc::new(BcryptPasswordHasher::new(4)),
//!     Arc::new(TokenService::new("secret", 1)),
//! );
//!
//! let user = service.register(dto).await?;
//! let tokens = service.login("user@example.com", "secret").await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;
pub mod middlewares;
