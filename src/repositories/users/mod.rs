//! 사용자 데이터 액세스 계층
//!
//! - [`stores`] - 서비스 계층이 의존하는 저장소 trait
//! - [`user_repo`] - `users` 컬렉션 (주소/전화번호 연쇄 저장 및 조회 포함)
//! - [`address_repo`] - `addresses` 컬렉션
//! - [`phone_repo`] - `phones` 컬렉션

pub mod stores;
pub mod user_repo;
pub mod address_repo;
pub mod phone_repo;

pub use stores::{AddressStore, PhoneStore, UserStore};
pub use user_repo::MongoUserRepository;
pub use address_repo::MongoAddressRepository;
pub use phone_repo::MongoPhoneRepository;

/// 사용자 문서 컬렉션
pub const USERS_COLLECTION: &str = "users";
/// 주소 문서 컬렉션 (`user_id`로 사용자 참조)
pub const ADDRESSES_COLLECTION: &str = "addresses";
/// 전화번호 문서 컬렉션 (`user_id`로 사용자 참조)
pub const PHONES_COLLECTION: &str = "phones";
