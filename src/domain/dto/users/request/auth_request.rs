//! 인증/조회 요청관련 DTO
//!
//! 로그인 요청 본문과 이메일 조회 쿼리 파라미터를 매핑합니다.
use serde::Deserialize;
use validator::Validate;

/// 로그인 요청 구조체
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

/// 이메일 조회 쿼리 파라미터 (`?email=...`)
#[derive(Debug, Deserialize, Validate)]
pub struct EmailQuery {
    #[validate(length(min = 1, message = "이메일이 필요합니다"))]
    pub email: String,
}
