//! # 사용자 계정 서비스 구현
//!
//! 사용자 등록, 조회, 수정, 삭제와 주소/전화번호 관리를 담당하는 비즈니스 로직입니다.
//! 저장소, 비밀번호 해셔, 토큰 발급기는 모두 생성자로 주입되는 trait 객체이며,
//! 서비스 자체는 가변 상태를 갖지 않습니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                        UserService                        │
//! │                                                           │
//! │  register / login / find / delete / update_user           │
//! │  create_address / update_address                          │
//! │  create_phone / update_phone                              │
//! └───────────────────────────────────────────────────────────┘
//!        │                │                 │
//!        ▼                ▼                 ▼
//!  ┌───────────┐   ┌──────────────┐   ┌───────────────┐
//!  │ UserStore │   │PasswordHasher│   │ TokenProvider │
//!  │AddressStore│  └──────────────┘   └───────────────┘
//!  │ PhoneStore│
//!  └───────────┘
//! ```
//!
//! ## 호출자 식별
//!
//! 수정/생성 연산은 `Authorization` 헤더 값(`Bearer {token}`)을 받아 토큰의 이메일로
//! 호출자를 식별합니다. 주소/전화번호 수정은 대상의 소유자가 호출자일 때만 허용됩니다.

use std::sync::Arc;
use std::time::Instant;
use log::{debug, info, warn};
use mongodb::bson::oid::ObjectId;
use crate::{
    core::errors::{AppError, AppResult},
    domain::{
        dto::users::{AddressDto, PhoneDto, UserDto},
        entities::users::User,
        models::token::TokenPair,
    },
    repositories::{AddressStore, PhoneStore, UserStore},
    services::auth::{extract_bearer_token, PasswordHasher, TokenProvider},
};
use super::converter::{
    address_for_owner, merge_address, merge_phone, merge_user, phone_for_owner, to_dto,
    to_entity,
};

/// 로그인 실패 메시지 (이메일 존재 여부를 노출하지 않음)
const INVALID_CREDENTIALS: &str = "이메일 또는 비밀번호가 올바르지 않습니다";

/// 사용자 계정 비즈니스 로직 서비스
///
/// ## 에러 처리
///
/// - **ValidationError**: 필수 필드 누락, 잘못된 ID 형식
/// - **EmailConflict**: 이미 등록된 이메일
/// - **NotFound**: 사용자/주소/전화번호 없음
/// - **AuthenticationError**: 헤더/토큰 오류, 로그인 실패
/// - **AuthorizationError**: 다른 사용자의 주소/전화번호 수정 시도
pub struct UserService {
    users: Arc<dyn UserStore>,
    addresses: Arc<dyn AddressStore>,
    phones: Arc<dyn PhoneStore>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenProvider>,
}

impl UserService {
    pub fn new(
        users: Arc<dyn UserStore>,
        addresses: Arc<dyn AddressStore>,
        phones: Arc<dyn PhoneStore>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            users,
            addresses,
            phones,
            hasher,
            tokens,
        }
    }

    /// 새 사용자 등록
    ///
    /// 이메일과 비밀번호는 필수입니다. 중복 확인 후 비밀번호를 해싱하여 저장하고,
    /// 저장소가 할당한 ID가 포함된 결과를 반환합니다. 요청에 포함된 주소/전화번호도
    /// 함께 저장됩니다.
    ///
    /// # Errors
    ///
    /// * `ValidationError` - 이메일 또는 비밀번호 누락
    /// * `EmailConflict` - 이미 등록된 이메일
    pub async fn register(&self, mut dto: UserDto) -> AppResult<UserDto> {
        let start_time = Instant::now();

        let email = required(dto.email.as_deref(), "이메일은 필수입니다")?.to_string();
        let plain = required(dto.password.as_deref(), "비밀번호는 필수입니다")?;

        self.ensure_email_available(&email).await?;

        let hash_start = Instant::now();
        let hashed = self.hasher.hash(plain)?;
        debug!("Password hashing took: {:?}", hash_start.elapsed());

        dto.password = Some(hashed);
        let saved = self.users.save(to_entity(dto)).await?;

        info!("사용자 등록 완료: {} ({})", email, saved.id_string().unwrap_or_default());
        debug!("Total user registration took: {:?}", start_time.elapsed());

        Ok(to_dto(saved))
    }

    /// 이메일 등록 여부 확인
    pub async fn email_exists(&self, email: &str) -> AppResult<bool> {
        self.users.exists_by_email(email).await
    }

    /// 이메일이 이미 등록되어 있으면 `EmailConflict`를 반환합니다.
    pub async fn ensure_email_available(&self, email: &str) -> AppResult<()> {
        if self.email_exists(email).await? {
            warn!("이미 등록된 이메일로 등록 시도: {}", email);
            return Err(AppError::email_conflict(email));
        }

        Ok(())
    }

    /// 이메일로 사용자 조회
    pub async fn find_by_email(&self, email: &str) -> AppResult<UserDto> {
        self.load_user(email).await.map(to_dto)
    }

    /// 이메일로 사용자 삭제 (대상이 없어도 성공)
    pub async fn delete_by_email(&self, email: &str) -> AppResult<()> {
        self.users.delete_by_email(email).await?;
        info!("사용자 삭제: {}", email);
        Ok(())
    }

    /// 호출자 본인 계정 삭제
    ///
    /// # Errors
    ///
    /// * `AuthorizationError` - 호출자와 삭제 대상 이메일이 다름
    pub async fn delete_own_account(&self, caller_email: &str, email: &str) -> AppResult<()> {
        if caller_email != email {
            warn!("다른 사용자 삭제 시도: {} -> {}", caller_email, email);
            return Err(AppError::AuthorizationError(
                "본인 계정만 삭제할 수 있습니다".to_string(),
            ));
        }

        self.delete_by_email(email).await
    }

    /// 호출자 본인의 사용자 정보 부분 수정
    ///
    /// 제공된 필드만 변경되며, 새 비밀번호가 있으면 해싱 후 저장합니다.
    /// 주소/전화번호 목록은 이 연산으로 변경되지 않습니다.
    pub async fn update_user(&self, bearer: &str, mut dto: UserDto) -> AppResult<UserDto> {
        let email = self.caller_email(bearer)?;

        dto.password = match dto.password.take().filter(|p| !p.trim().is_empty()) {
            Some(plain) => Some(self.hasher.hash(&plain)?),
            None => None,
        };

        let existing = self.load_user(&email).await?;
        let saved = self.users.save(merge_user(dto, existing)).await?;

        info!("사용자 정보 수정: {}", email);

        Ok(to_dto(saved))
    }

    /// 호출자 소유의 주소 부분 수정
    ///
    /// # Errors
    ///
    /// * `ValidationError` - 잘못된 주소 ID 형식
    /// * `NotFound` - 호출자 또는 주소 없음
    /// * `AuthorizationError` - 다른 사용자의 주소
    pub async fn update_address(&self, bearer: &str, id: &str, dto: AddressDto) -> AppResult<AddressDto> {
        let caller_id = self.caller_id(bearer).await?;
        let address_id = parse_object_id(id)?;

        let existing = self.addresses
            .find_by_id(&address_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("주소를 찾을 수 없습니다: {}", id)))?;

        if !existing.is_owned_by(&caller_id) {
            warn!("다른 사용자의 주소 수정 시도: {} (호출자 {})", id, caller_id);
            return Err(AppError::AuthorizationError(
                "본인 소유의 주소만 수정할 수 있습니다".to_string(),
            ));
        }

        let saved = self.addresses.save(merge_address(dto, existing)).await?;

        info!("주소 수정: {}", id);

        Ok(AddressDto::from(saved))
    }

    /// 호출자 소유의 전화번호 부분 수정
    pub async fn update_phone(&self, bearer: &str, id: &str, dto: PhoneDto) -> AppResult<PhoneDto> {
        let caller_id = self.caller_id(bearer).await?;
        let phone_id = parse_object_id(id)?;

        let existing = self.phones
            .find_by_id(&phone_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("전화번호를 찾을 수 없습니다: {}", id)))?;

        if !existing.is_owned_by(&caller_id) {
            warn!("다른 사용자의 전화번호 수정 시도: {} (호출자 {})", id, caller_id);
            return Err(AppError::AuthorizationError(
                "본인 소유의 전화번호만 수정할 수 있습니다".to_string(),
            ));
        }

        let saved = self.phones.save(merge_phone(dto, existing)).await?;

        info!("전화번호 수정: {}", id);

        Ok(PhoneDto::from(saved))
    }

    /// 호출자에게 새 주소 추가
    pub async fn create_address(&self, bearer: &str, dto: AddressDto) -> AppResult<AddressDto> {
        let caller_id = self.caller_id(bearer).await?;

        let saved = self.addresses.save(address_for_owner(dto, caller_id)).await?;

        info!("주소 추가: 사용자 {}", caller_id);

        Ok(AddressDto::from(saved))
    }

    /// 호출자에게 새 전화번호 추가
    pub async fn create_phone(&self, bearer: &str, dto: PhoneDto) -> AppResult<PhoneDto> {
        let caller_id = self.caller_id(bearer).await?;

        let saved = self.phones.save(phone_for_owner(dto, caller_id)).await?;

        info!("전화번호 추가: 사용자 {}", caller_id);

        Ok(PhoneDto::from(saved))
    }

    /// 이메일/비밀번호 로그인
    ///
    /// 존재하지 않는 이메일과 잘못된 비밀번호는 같은 메시지의
    /// `AuthenticationError`로 처리됩니다.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<TokenPair> {
        let start_time = Instant::now();

        let user = self.users.find_by_email(email).await?;
        let hashed = user.as_ref().and_then(|user| user.password.as_deref());

        let verified = match hashed {
            Some(hashed) => self.hasher.verify(password, hashed)?,
            None => false,
        };

        debug!("Password verification took: {:?}", start_time.elapsed());

        if !verified {
            warn!("로그인 실패: {}", email);
            return Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()));
        }

        info!("로그인 성공: {}", email);

        self.tokens.issue(email)
    }

    async fn load_user(&self, email: &str) -> AppResult<User> {
        self.users
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("사용자를 찾을 수 없습니다: {}", email)))
    }

    /// `Authorization` 헤더 값에서 호출자 이메일 추출
    fn caller_email(&self, bearer: &str) -> AppResult<String> {
        let token = extract_bearer_token(bearer)?;
        self.tokens.extract_email(token)
    }

    /// `Authorization` 헤더 값에서 호출자 사용자 ID 확인
    async fn caller_id(&self, bearer: &str) -> AppResult<ObjectId> {
        let email = self.caller_email(bearer)?;
        let caller = self.load_user(&email).await?;

        caller
            .id
            .ok_or_else(|| AppError::InternalError(format!("저장된 사용자에 ID가 없습니다: {}", email)))
    }
}

fn required<'a>(value: Option<&'a str>, message: &str) -> AppResult<&'a str> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| AppError::ValidationError(message.to_string()))
}

fn parse_object_id(id: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(id)
        .map_err(|_| AppError::ValidationError(format!("유효하지 않은 ID 형식입니다: {}", id)))
}
