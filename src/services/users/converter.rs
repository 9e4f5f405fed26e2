//! # DTO ↔ 엔티티 변환기
//!
//! 부수 효과가 없는 순수 매핑 함수들입니다. 에러 조건이 없으며,
//! 부재한 필드(`None`)는 그대로 전달됩니다.
//!
//! ## 변환 규칙
//!
//! | 방향 | 함수 | 비고 |
//! |------|------|------|
//! | DTO → 엔티티 | [`to_entity`] (`From<UserDto> for User`) | 주소/전화번호 목록은 항목별 변환 |
//! | 엔티티 → DTO | [`to_dto`] (`From<User> for UserDto`) | ID는 16진수 문자열로 변환 |
//! | 부분 수정 | [`merge_user`], [`merge_address`], [`merge_phone`] | 제공된 값만 덮어씀 |
//! | 자식 생성 | [`address_for_owner`], [`phone_for_owner`] | 소유 사용자 ID 기록 |
//!
//! DTO에서 들어온 ID는 엔티티로 복사하지 않습니다. ID는 항상 저장소가 할당하거나
//! 기존 엔티티에서 유지됩니다.

use mongodb::bson::oid::ObjectId;
use crate::domain::{Address, AddressDto, Phone, PhoneDto, User, UserDto};

impl From<UserDto> for User {
    fn from(dto: UserDto) -> Self {
        Self {
            id: None,
            name: dto.name,
            email: dto.email,
            password: dto.password,
            addresses: dto.addresses.into_iter().map(Address::from).collect(),
            phones: dto.phones.into_iter().map(Phone::from).collect(),
        }
    }
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        let User {
            id,
            name,
            email,
            password,
            addresses,
            phones,
        } = user;

        Self {
            id: id.map(|id| id.to_hex()),
            name,
            email,
            password,
            addresses: addresses.into_iter().map(AddressDto::from).collect(),
            phones: phones.into_iter().map(PhoneDto::from).collect(),
        }
    }
}

impl From<AddressDto> for Address {
    fn from(dto: AddressDto) -> Self {
        Self {
            id: None,
            street: dto.street,
            number: dto.number,
            city: dto.city,
            state: dto.state,
            complement: dto.complement,
            postal_code: dto.postal_code,
            user_id: None,
        }
    }
}

impl From<Address> for AddressDto {
    fn from(address: Address) -> Self {
        Self {
            id: address.id.map(|id| id.to_hex()),
            street: address.street,
            number: address.number,
            city: address.city,
            state: address.state,
            complement: address.complement,
            postal_code: address.postal_code,
        }
    }
}

impl From<PhoneDto> for Phone {
    fn from(dto: PhoneDto) -> Self {
        Self {
            id: None,
            area_code: dto.area_code,
            number: dto.number,
            user_id: None,
        }
    }
}

impl From<Phone> for PhoneDto {
    fn from(phone: Phone) -> Self {
        Self {
            id: phone.id.map(|id| id.to_hex()),
            area_code: phone.area_code,
            number: phone.number,
        }
    }
}

/// 회원가입 DTO를 저장 전 엔티티로 변환
pub fn to_entity(dto: UserDto) -> User {
    User::from(dto)
}

/// 저장된 엔티티를 응답 DTO로 변환
pub fn to_dto(user: User) -> UserDto {
    UserDto::from(user)
}

/// 제공된 문자열이 있고 비어 있지 않으면 그 값을, 아니면 기존 값을 사용
fn coalesce(incoming: Option<String>, current: Option<String>) -> Option<String> {
    incoming
        .filter(|value| !value.trim().is_empty())
        .or(current)
}

/// 사용자 부분 수정 병합
///
/// 스칼라 필드마다 DTO 값이 있으면 덮어쓰고 없으면 기존 값을 유지합니다.
/// ID와 주소/전화번호 목록은 항상 기존 엔티티의 것을 유지합니다.
pub fn merge_user(dto: UserDto, existing: User) -> User {
    User {
        id: existing.id,
        name: coalesce(dto.name, existing.name),
        email: coalesce(dto.email, existing.email),
        password: coalesce(dto.password, existing.password),
        addresses: existing.addresses,
        phones: existing.phones,
    }
}

/// 주소 부분 수정 병합 (ID와 소유자는 기존 값 유지)
pub fn merge_address(dto: AddressDto, existing: Address) -> Address {
    Address {
        id: existing.id,
        street: coalesce(dto.street, existing.street),
        number: dto.number.or(existing.number),
        city: coalesce(dto.city, existing.city),
        state: coalesce(dto.state, existing.state),
        complement: coalesce(dto.complement, existing.complement),
        postal_code: coalesce(dto.postal_code, existing.postal_code),
        user_id: existing.user_id,
    }
}

/// 전화번호 부분 수정 병합 (ID와 소유자는 기존 값 유지)
pub fn merge_phone(dto: PhoneDto, existing: Phone) -> Phone {
    Phone {
        id: existing.id,
        area_code: coalesce(dto.area_code, existing.area_code),
        number: coalesce(dto.number, existing.number),
        user_id: existing.user_id,
    }
}

/// 소유 사용자 ID가 기록된 새 주소 엔티티 생성
pub fn address_for_owner(dto: AddressDto, user_id: ObjectId) -> Address {
    Address {
        user_id: Some(user_id),
        ..Address::from(dto)
    }
}

/// 소유 사용자 ID가 기록된 새 전화번호 엔티티 생성
pub fn phone_for_owner(dto: PhoneDto, user_id: ObjectId) -> Phone {
    Phone {
        user_id: Some(user_id),
        ..Phone::from(dto)
    }
}
