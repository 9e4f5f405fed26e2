//! # 저장소 포트
//!
//! 사용자 서비스가 필요로 하는 최소한의 저장소 연산입니다.
//! 모든 구현체는 여러 요청에서 동시에 사용되므로 `Send + Sync`여야 합니다.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use crate::{
    core::errors::AppResult,
    domain::entities::users::{Address, Phone, User},
};

/// 사용자 저장소
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 이메일로 사용자를 조회합니다. 주소와 전화번호 목록이 채워진 상태로 반환됩니다.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// 해당 이메일의 사용자가 존재하는지 확인합니다.
    async fn exists_by_email(&self, email: &str) -> AppResult<bool>;

    /// 사용자를 저장합니다.
    ///
    /// - ID가 없으면 새로 할당하고, 있으면 기존 문서를 교체합니다.
    /// - ID가 없는 주소/전화번호는 새로 할당된 ID와 함께 연쇄 저장됩니다.
    /// - 다른 사용자가 이미 같은 이메일을 사용 중이면 `EmailConflict`를 반환합니다.
    async fn save(&self, user: User) -> AppResult<User>;

    /// 이메일로 사용자를 삭제합니다. 대상이 없어도 성공합니다.
    async fn delete_by_email(&self, email: &str) -> AppResult<()>;
}

/// 주소 저장소
#[async_trait]
pub trait AddressStore: Send + Sync {
    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Address>>;

    /// 주소를 저장합니다. ID가 없으면 새로 할당합니다.
    async fn save(&self, address: Address) -> AppResult<Address>;
}

/// 전화번호 저장소
#[async_trait]
pub trait PhoneStore: Send + Sync {
    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Phone>>;

    /// 전화번호를 저장합니다. ID가 없으면 새로 할당합니다.
    async fn save(&self, phone: Phone) -> AppResult<Phone>;
}
