//! MongoDB `phones` 컬렉션 리포지토리

use std::sync::Arc;
use async_trait::async_trait;
use mongodb::{bson::{doc, oid::ObjectId}, Collection};
use crate::{
    core::errors::{AppError, AppResult},
    db::Database,
    domain::entities::users::Phone,
};
use super::{stores::PhoneStore, PHONES_COLLECTION};

pub struct MongoPhoneRepository {
    db: Arc<Database>,
}

impl MongoPhoneRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Phone> {
        self.db.collection::<Phone>(PHONES_COLLECTION)
    }
}

#[async_trait]
impl PhoneStore for MongoPhoneRepository {
    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Phone>> {
        self.collection()
            .find_one(doc! { "_id": *id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn save(&self, mut phone: Phone) -> AppResult<Phone> {
        let id = *phone.id.get_or_insert_with(ObjectId::new);

        self.collection()
            .replace_one(doc! { "_id": id }, &phone)
            .upsert(true)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(phone)
    }
}
