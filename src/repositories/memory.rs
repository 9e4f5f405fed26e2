//! # 인메모리 저장소
//!
//! [`UserStore`], [`AddressStore`], [`PhoneStore`]를 하나의 구조체로 구현한 저장소입니다.
//! MongoDB 리포지토리와 동일한 규칙(이메일 유니크성, 자식 연쇄 저장, 등록 순서 유지)을 따르며,
//! 테스트와 `STORAGE_BACKEND=memory` 로컬 실행에 사용됩니다.
//!
//! 사용자 문서와 자식 문서는 MongoDB와 같이 분리 저장되고 `user_id`로 연결됩니다.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use crate::{
    core::errors::{AppError, AppResult},
    domain::entities::users::{Address, Phone, User},
};
use super::users::{AddressStore, PhoneStore, UserStore};

#[derive(Default)]
struct MemoryState {
    /// 자식 목록을 제외한 사용자 문서
    users: HashMap<ObjectId, User>,
    /// 삽입 순서가 곧 등록 순서
    addresses: Vec<Address>,
    phones: Vec<Phone>,
}

impl MemoryState {
    fn user_id_by_email(&self, email: &str) -> Option<ObjectId> {
        self.users
            .iter()
            .find(|(_, user)| user.email.as_deref() == Some(email))
            .map(|(id, _)| *id)
    }

    fn upsert_address(&mut self, address: Address) {
        match self.addresses.iter_mut().find(|stored| stored.id == address.id) {
            Some(stored) => *stored = address,
            None => self.addresses.push(address),
        }
    }

    fn upsert_phone(&mut self, phone: Phone) {
        match self.phones.iter_mut().find(|stored| stored.id == phone.id) {
            Some(stored) => *stored = phone,
            None => self.phones.push(phone),
        }
    }
}

/// 인메모리 저장소
#[derive(Default)]
pub struct InMemoryStore {
    state: RwLock<MemoryState>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, MemoryState>> {
        self.state
            .read()
            .map_err(|_| AppError::InternalError("Failed to acquire lock".to_string()))
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, MemoryState>> {
        self.state
            .write()
            .map_err(|_| AppError::InternalError("Failed to acquire lock".to_string()))
    }
}

#[async_trait]
impl UserStore for InMemoryStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let state = self.read()?;

        let Some(user_id) = state.user_id_by_email(email) else {
            return Ok(None);
        };

        let user = state.users.get(&user_id).cloned().map(|mut user| {
            user.addresses = state
                .addresses
                .iter()
                .filter(|address| address.is_owned_by(&user_id))
                .cloned()
                .collect();
            user.phones = state
                .phones
                .iter()
                .filter(|phone| phone.is_owned_by(&user_id))
                .cloned()
                .collect();
            user
        });

        Ok(user)
    }

    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        Ok(self.read()?.user_id_by_email(email).is_some())
    }

    async fn save(&self, mut user: User) -> AppResult<User> {
        let mut state = self.write()?;
        let user_id = *user.id.get_or_insert_with(ObjectId::new);

        if let Some(email) = user.email.as_deref() {
            if let Some(owner) = state.user_id_by_email(email) {
                if owner != user_id {
                    return Err(AppError::email_conflict(email));
                }
            }
        }

        for address in user.addresses.iter_mut() {
            address.id.get_or_insert_with(ObjectId::new);
            address.user_id = Some(user_id);
            state.upsert_address(address.clone());
        }

        for phone in user.phones.iter_mut() {
            phone.id.get_or_insert_with(ObjectId::new);
            phone.user_id = Some(user_id);
            state.upsert_phone(phone.clone());
        }

        let document = User {
            addresses: Vec::new(),
            phones: Vec::new(),
            ..user.clone()
        };
        state.users.insert(user_id, document);

        Ok(user)
    }

    async fn delete_by_email(&self, email: &str) -> AppResult<()> {
        let mut state = self.write()?;

        if let Some(user_id) = state.user_id_by_email(email) {
            state.users.remove(&user_id);
        }

        Ok(())
    }
}

#[async_trait]
impl AddressStore for InMemoryStore {
    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Address>> {
        let state = self.read()?;
        Ok(state.addresses.iter().find(|address| address.id.as_ref() == Some(id)).cloned())
    }

    async fn save(&self, mut address: Address) -> AppResult<Address> {
        let mut state = self.write()?;
        address.id.get_or_insert_with(ObjectId::new);
        state.upsert_address(address.clone());
        Ok(address)
    }
}

#[async_trait]
impl PhoneStore for InMemoryStore {
    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Phone>> {
        let state = self.read()?;
        Ok(state.phones.iter().find(|phone| phone.id.as_ref() == Some(id)).cloned())
    }

    async fn save(&self, mut phone: Phone) -> AppResult<Phone> {
        let mut state = self.write()?;
        phone.id.get_or_insert_with(ObjectId::new);
        state.upsert_phone(phone.clone());
        Ok(phone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(email: &str) -> User {
        User {
            name: Some("Ana".to_string()),
            email: Some(email.to_string()),
            password: Some("hash".to_string()),
            addresses: vec![Address {
                street: Some("Rua A".to_string()),
                ..Default::default()
            }],
            phones: vec![
                Phone { number: Some("1111".to_string()), ..Default::default() },
                Phone { number: Some("2222".to_string()), ..Default::default() },
            ],
            ..Default::default()
        }
    }

    #[actix_web::test]
    async fn test_save_assigns_ids_and_cascades_children() {
        let store = InMemoryStore::new();

        let saved = UserStore::save(&store, new_user("ana@x.com")).await.unwrap();
        let user_id = saved.id.unwrap();

        assert!(saved.addresses.iter().all(|a| a.id.is_some() && a.is_owned_by(&user_id)));
        assert!(saved.phones.iter().all(|p| p.id.is_some() && p.is_owned_by(&user_id)));

        let loaded = store.find_by_email("ana@x.com").await.unwrap().unwrap();
        assert_eq!(loaded, saved);
        assert_eq!(loaded.phones[0].number.as_deref(), Some("1111"));
        assert_eq!(loaded.phones[1].number.as_deref(), Some("2222"));
    }

    #[actix_web::test]
    async fn test_save_rejects_duplicate_email() {
        let store = InMemoryStore::new();
        UserStore::save(&store, new_user("ana@x.com")).await.unwrap();

        let result = UserStore::save(&store, new_user("ana@x.com")).await;

        match result {
            Err(AppError::EmailConflict { email }) => assert_eq!(email, "ana@x.com"),
            other => panic!("Expected EmailConflict, got {:?}", other),
        }
    }

    #[actix_web::test]
    async fn test_resave_does_not_duplicate_children() {
        let store = InMemoryStore::new();
        let saved = UserStore::save(&store, new_user("ana@x.com")).await.unwrap();

        let resaved = UserStore::save(&store, saved.clone()).await.unwrap();
        assert_eq!(resaved, saved);

        let loaded = store.find_by_email("ana@x.com").await.unwrap().unwrap();
        assert_eq!(loaded.addresses.len(), 1);
        assert_eq!(loaded.phones.len(), 2);
    }

    #[actix_web::test]
    async fn test_child_saved_through_own_store_appears_on_owner() {
        let store = InMemoryStore::new();
        let saved = UserStore::save(&store, new_user("ana@x.com")).await.unwrap();
        let user_id = saved.id.unwrap();

        let address = AddressStore::save(&store, Address {
            city: Some("Curitiba".to_string()),
            user_id: Some(user_id),
            ..Default::default()
        }).await.unwrap();

        let found = AddressStore::find_by_id(&store, &address.id.unwrap()).await.unwrap();
        assert_eq!(found, Some(address));

        let loaded = store.find_by_email("ana@x.com").await.unwrap().unwrap();
        assert_eq!(loaded.addresses.len(), 2);
        assert_eq!(loaded.addresses[1].city.as_deref(), Some("Curitiba"));
    }

    #[actix_web::test]
    async fn test_delete_by_email_is_idempotent() {
        let store = InMemoryStore::new();
        UserStore::save(&store, new_user("ana@x.com")).await.unwrap();

        store.delete_by_email("ana@x.com").await.unwrap();
        store.delete_by_email("ana@x.com").await.unwrap();

        assert!(!store.exists_by_email("ana@x.com").await.unwrap());
        assert!(store.find_by_email("ana@x.com").await.unwrap().is_none());
    }
}
