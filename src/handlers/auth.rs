//! Authentication HTTP Handlers
//!
//! 회원가입과 이메일/비밀번호 로그인 엔드포인트입니다. 두 엔드포인트 모두 인증 없이 접근합니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/auth/register` | 새 사용자 등록 | 201 Created |
//! | `POST` | `/auth/login` | 액세스 토큰 발급 | 200 OK |
use actix_web::{post, web, HttpResponse};
use crate::{
    core::errors::AppError,
    domain::dto::users::{LoginRequest, UserDto},
    services::users::UserService,
};
use super::validate;

/// 회원가입 핸들러
///
/// # 요청 본문
///
/// ```json
/// {
///   "name": "Ana",
///   "email": "ana@example.com",
///   "password": "secret",
///   "addresses": [{ "street": "Rua A", "city": "Curitiba" }],
///   "phones": [{ "area_code": "41", "number": "99999-0000" }]
/// }
/// ```
///
/// 응답의 `password` 필드는 항상 생략됩니다. 이미 등록된 이메일이면 409와 함께
/// `{"error": "...", "email": "ana@example.com"}`를 반환합니다.
#[post("/register")]
pub async fn register(
    service: web::Data<UserService>,
    payload: web::Json<UserDto>,
) -> Result<HttpResponse, AppError> {
    validate(&*payload)?;

    let user = service.register(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(user))
}

/// 로컬 로그인 핸들러
///
/// 성공 시 `{"access_token", "token_type": "Bearer", "expires_in"}`를 반환합니다.
#[post("/login")]
pub async fn login(
    service: web::Data<UserService>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    validate(&*payload)?;

    let token_pair = service.login(&payload.email, &payload.password).await?;

    Ok(HttpResponse::Ok().json(token_pair))
}
