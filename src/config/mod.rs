//! # Configuration Module
//!
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//! `main`에서 `PROFILE`에 따라 `.env.dev` / `.env.prod` / `.env` 파일을 먼저 로드한 뒤
//! 각 설정 구조체의 연관 함수로 값을 읽습니다.
//!
//! - [`data_config`] - 환경, 서버, 데이터베이스, 저장소 백엔드, bcrypt 설정
//! - [`auth_config`] - JWT 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # 저장소
//! export STORAGE_BACKEND="mongo"          # mongo | memory
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="user_accounts"
//!
//! # 보안
//! export ENVIRONMENT="production"         # development, test, staging, production
//! export BCRYPT_COST="12"                 # 4-15 범위
//! export JWT_SECRET="your-super-secret-key"
//! export JWT_EXPIRATION_HOURS="1"
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
