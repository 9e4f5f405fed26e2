//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스 계층은 [`UserStore`], [`AddressStore`], [`PhoneStore`] trait에만 의존하며,
//! 실제 구현은 애플리케이션 시작 시점에 생성자로 주입됩니다.
//!
//! # 구현체
//!
//! | 구현체 | 저장소 | 용도 |
//! |--------|--------|------|
//! | [`MongoUserRepository`] 외 2종 | MongoDB (`users`, `addresses`, `phones`) | 운영 환경 |
//! | [`InMemoryStore`] | 프로세스 메모리 | 테스트, 로컬 실행 (`STORAGE_BACKEND=memory`) |
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::{InMemoryStore, UserStore};
//!
//! let store = Arc::new(InMemoryStore::new());
//! let exists = store.exists_by_email("user@example.com").await?;
//! ```

pub mod users;
pub mod memory;

pub use users::{
    AddressStore, PhoneStore, UserStore,
    MongoAddressRepository, MongoPhoneRepository, MongoUserRepository,
};
pub use memory::InMemoryStore;
