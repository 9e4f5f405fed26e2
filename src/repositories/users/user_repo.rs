//! # 사용자 리포지토리 구현
//!
//! MongoDB `users` 컬렉션에 대한 [`UserStore`] 구현입니다.
//! 주소와 전화번호는 각자의 컬렉션에 `user_id`로 연결되어 저장되며,
//! 이 리포지토리가 사용자 저장 시 연쇄 저장하고 조회 시 함께 채워 넣습니다.
//!
//! ## 특징
//!
//! - **이메일 유니크성**: `email_unique` 인덱스의 중복 키 에러(11000)를 `EmailConflict`로 변환
//! - **자식 문서 연쇄 저장**: ID가 없는 주소/전화번호는 저장 시 새 ID 할당
//! - **등록 순서 유지**: 자식 문서는 `_id` 오름차순으로 조회

use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::debug;
use mongodb::{
    bson::{doc, oid::ObjectId},
    error::{ErrorKind, WriteFailure},
    options::IndexOptions,
    Collection, IndexModel,
};
use serde::{de::DeserializeOwned, Serialize};
use crate::{
    core::errors::{AppError, AppResult},
    db::Database,
    domain::entities::users::{Address, Phone, User},
};
use super::{stores::UserStore, ADDRESSES_COLLECTION, PHONES_COLLECTION, USERS_COLLECTION};

/// MongoDB 중복 키 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// MongoDB 사용자 리포지토리
///
/// ## 저장 구조
///
/// | 컬렉션 | 인덱스 |
/// |--------|--------|
/// | `users` | `email` (unique) |
/// | `addresses` | `user_id` |
/// | `phones` | `user_id` |
pub struct MongoUserRepository {
    db: Arc<Database>,
}

impl MongoUserRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn users(&self) -> Collection<User> {
        self.db.collection::<User>(USERS_COLLECTION)
    }

    fn addresses(&self) -> Collection<Address> {
        self.db.collection::<Address>(ADDRESSES_COLLECTION)
    }

    fn phones(&self) -> Collection<Phone> {
        self.db.collection::<Phone>(PHONES_COLLECTION)
    }

    /// 사용자 ID로 연결된 자식 문서들을 등록 순서대로 조회
    async fn find_children<T>(collection: Collection<T>, user_id: ObjectId) -> AppResult<Vec<T>>
    where
        T: DeserializeOwned + Send + Sync,
    {
        collection
            .find(doc! { "user_id": user_id })
            .sort(doc! { "_id": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// ID 기준 upsert (ID가 없으면 저장 전에 할당)
    async fn upsert<T>(collection: &Collection<T>, id: ObjectId, document: &T) -> AppResult<()>
    where
        T: Serialize + Send + Sync,
    {
        collection
            .replace_one(doc! { "_id": id }, document)
            .upsert(true)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 애플리케이션 초기화 시점에 한 번 실행합니다.
    ///
    /// 1. `users.email` 유니크 인덱스 (`email_unique`)
    /// 2. `addresses.user_id` 인덱스 (`address_user_id`)
    /// 3. `phones.user_id` 인덱스 (`phone_user_id`)
    ///
    /// 이미 중복된 이메일이 저장되어 있으면 유니크 인덱스 생성이 실패합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        self.users()
            .create_index(email_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let address_owner_index = IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .options(IndexOptions::builder()
                .name("address_user_id".to_string())
                .build())
            .build();

        self.addresses()
            .create_index(address_owner_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let phone_owner_index = IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .options(IndexOptions::builder()
                .name("phone_user_id".to_string())
                .build())
            .build();

        self.phones()
            .create_index(phone_owner_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

/// 사용자 문서 쓰기 에러 변환
///
/// 이메일 유니크 인덱스 위반은 `EmailConflict`로, 그 외는 `DatabaseError`로 변환합니다.
fn map_user_write_error(error: mongodb::error::Error, email: Option<&str>) -> AppError {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error))
            if write_error.code == DUPLICATE_KEY_CODE =>
        {
            AppError::email_conflict(email.unwrap_or_default())
        }
        _ => AppError::DatabaseError(error.to_string()),
    }
}

#[async_trait]
impl UserStore for MongoUserRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let user = self.users()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let Some(mut user) = user else {
            return Ok(None);
        };

        if let Some(user_id) = user.id {
            user.addresses = Self::find_children(self.addresses(), user_id).await?;
            user.phones = Self::find_children(self.phones(), user_id).await?;
        }

        Ok(Some(user))
    }

    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        let count = self.users()
            .count_documents(doc! { "email": email })
            .limit(1)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(count > 0)
    }

    async fn save(&self, mut user: User) -> AppResult<User> {
        let user_id = *user.id.get_or_insert_with(ObjectId::new);

        self.users()
            .replace_one(doc! { "_id": user_id }, &user)
            .upsert(true)
            .await
            .map_err(|e| map_user_write_error(e, user.email.as_deref()))?;

        let addresses = self.addresses();
        for address in user.addresses.iter_mut() {
            let address_id = *address.id.get_or_insert_with(ObjectId::new);
            address.user_id = Some(user_id);
            Self::upsert(&addresses, address_id, &*address).await?;
        }

        let phones = self.phones();
        for phone in user.phones.iter_mut() {
            let phone_id = *phone.id.get_or_insert_with(ObjectId::new);
            phone.user_id = Some(user_id);
            Self::upsert(&phones, phone_id, &*phone).await?;
        }

        debug!(
            "사용자 저장 완료: {} (주소 {}개, 전화번호 {}개)",
            user_id,
            user.addresses.len(),
            user.phones.len()
        );

        Ok(user)
    }

    async fn delete_by_email(&self, email: &str) -> AppResult<()> {
        let result = self.users()
            .delete_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        debug!("사용자 삭제: {} (삭제된 문서 {}개)", email, result.deleted_count);

        Ok(())
    }
}
