//! User Entity Implementation
//!
//! 사용자 계정 엔티티입니다. 주소와 전화번호 목록을 소유하며,
//! MongoDB `users` 컬렉션 문서와 매핑됩니다.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use super::{Address, Phone};

/// 사용자 엔티티
///
/// 스칼라 필드는 모두 `Option`으로, 변환기에서 부재한 값을 그대로 전달할 수 있습니다.
/// 필수 여부(이메일, 비밀번호)는 등록 시 서비스 계층에서 검사합니다.
///
/// `addresses`/`phones`는 별도 컬렉션(`addresses`, `phones`)에 `user_id`로 연결되어
/// 저장되므로 사용자 문서에는 직렬화되지 않고, 저장소가 조회 시 채워 넣습니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이름
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// 사용자 이메일 (unique)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// bcrypt 해시된 비밀번호 (평문은 절대 저장하지 않음)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// 소유한 주소 목록 (등록 순서 유지)
    #[serde(skip)]
    pub addresses: Vec<Address>,
    /// 소유한 전화번호 목록 (등록 순서 유지)
    #[serde(skip)]
    pub phones: Vec<Phone>,
}

impl User {
    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}
