//! 사용자/주소/전화번호 전송 객체
//!
//! 엔티티를 그대로 반영하되 모든 필드가 선택적이어서 부분 수정 요청에도 사용됩니다.
//! `None`은 "값이 제공되지 않음"을 의미하며, 병합 시 기존 값이 유지됩니다.
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 사용자 DTO
///
/// `password`는 쓰기 전용입니다. 요청에서는 역직렬화되지만 응답 JSON에는
/// 절대 포함되지 않습니다 (해시 값도 노출하지 않음).
/// 주소/전화번호 목록이 요청에 없으면 빈 목록으로 취급합니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct UserDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "이름은 1-100자 사이여야 합니다"))]
    pub name: Option<String>,

    #[serde(default)]
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: Option<String>,

    #[serde(default, skip_serializing)]
    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: Option<String>,

    #[serde(default)]
    #[validate(nested)]
    pub addresses: Vec<AddressDto>,

    #[serde(default)]
    #[validate(nested)]
    pub phones: Vec<PhoneDto>,
}

/// 주소 DTO
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct AddressDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    #[validate(length(max = 200, message = "도로명은 200자 이하여야 합니다"))]
    pub street: Option<String>,
    #[serde(default)]
    #[validate(range(min = 0, message = "번지는 0 이상이어야 합니다"))]
    pub number: Option<i64>,
    #[serde(default)]
    #[validate(length(max = 100, message = "도시명은 100자 이하여야 합니다"))]
    pub city: Option<String>,
    #[serde(default)]
    #[validate(length(max = 100, message = "주/도 이름은 100자 이하여야 합니다"))]
    pub state: Option<String>,
    #[serde(default)]
    #[validate(length(max = 200, message = "상세 주소는 200자 이하여야 합니다"))]
    pub complement: Option<String>,
    #[serde(default)]
    #[validate(length(max = 20, message = "우편번호는 20자 이하여야 합니다"))]
    pub postal_code: Option<String>,
}

/// 전화번호 DTO
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct PhoneDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    #[validate(length(min = 1, max = 5, message = "지역번호는 1-5자 사이여야 합니다"))]
    pub area_code: Option<String>,
    #[serde(default)]
    #[validate(length(min = 1, max = 20, message = "전화번호는 1-20자 사이여야 합니다"))]
    pub number: Option<String>,
}
