use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// 주소 엔티티
///
/// 정확히 한 명의 사용자에게 속하며, 생성 시점에 소유자의 ID가 `user_id`로 기록됩니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complement: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    /// 소유 사용자 ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<ObjectId>,
}

impl Address {
    /// 주어진 사용자가 이 주소의 소유자인지 확인
    pub fn is_owned_by(&self, user_id: &ObjectId) -> bool {
        self.user_id.as_ref() == Some(user_id)
    }
}
