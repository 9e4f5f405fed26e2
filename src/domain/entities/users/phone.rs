use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// 전화번호 엔티티
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Phone {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 지역 번호
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    /// 소유 사용자 ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<ObjectId>,
}

impl Phone {
    /// 주어진 사용자가 이 전화번호의 소유자인지 확인
    pub fn is_owned_by(&self, user_id: &ObjectId) -> bool {
        self.user_id.as_ref() == Some(user_id)
    }
}
