//! MongoDB `addresses` 컬렉션 리포지토리

use std::sync::Arc;
use async_trait::async_trait;
use mongodb::{bson::{doc, oid::ObjectId}, Collection};
use crate::{
    core::errors::{AppError, AppResult},
    db::Database,
    domain::entities::users::Address,
};
use super::{stores::AddressStore, ADDRESSES_COLLECTION};

pub struct MongoAddressRepository {
    db: Arc<Database>,
}

impl MongoAddressRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Address> {
        self.db.collection::<Address>(ADDRESSES_COLLECTION)
    }
}

#[async_trait]
impl AddressStore for MongoAddressRepository {
    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Address>> {
        self.collection()
            .find_one(doc! { "_id": *id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn save(&self, mut address: Address) -> AppResult<Address> {
        let id = *address.id.get_or_insert_with(ObjectId::new);

        self.collection()
            .replace_one(doc! { "_id": id }, &address)
            .upsert(true)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(address)
    }
}
