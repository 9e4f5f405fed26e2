//! # 사용자 DTO 모듈
//!
//! - [`user_dto`] - 사용자/주소/전화번호 전송 객체 (요청과 응답 공용)
//! - [`request`] - 로그인, 조회 쿼리 등 요청 전용 객체

pub mod user_dto;
pub mod request;

pub use user_dto::{UserDto, AddressDto, PhoneDto};
pub use request::*;
