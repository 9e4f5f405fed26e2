//! Users Entity Module
//!
//! 사용자 도메인의 엔티티들을 정의하는 모듈입니다.
//!
//! ```text
//! User ──┬── Address (0..n, user_id 참조)
//!        └── Phone   (0..n, user_id 참조)
//! ```
//!
//! 사용자는 자신의 주소/전화번호 목록을 독점적으로 소유하며,
//! 주소와 전화번호는 여러 사용자 간에 공유되지 않습니다.

pub mod user;
pub mod address;
pub mod phone;

pub use user::User;
pub use address::Address;
pub use phone::Phone;
