//! # Domain Entities Module
//!
//! 저장소에 영속화되는 도메인 엔티티들을 정의합니다.
//! MongoDB 문서와 직접 매핑되며, `_id` 필드는 `ObjectId`로 저장소가 할당합니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! entities/
//! ├── mod.rs
//! └── users/
//!     ├── user.rs     ← User 엔티티 (users 컬렉션)
//!     ├── address.rs  ← Address 엔티티 (addresses 컬렉션)
//!     └── phone.rs    ← Phone 엔티티 (phones 컬렉션)
//! ```
//!
//! ## 주의사항
//!
//! - **ID 참조**: 자식 엔티티는 소유 사용자를 `user_id`로 참조합니다
//! - **연쇄 삭제 없음**: 사용자 삭제 시 주소/전화번호 문서는 남습니다

pub mod users;
