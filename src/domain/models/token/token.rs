//! JWT 인증 토큰 구조체
//!
//! RFC 7519 표준 클레임과 로그인 응답으로 전달되는 토큰 정보를 정의합니다.
use serde::{Deserialize, Serialize};

/// JWT 토큰의 클레임(Payload) 구조체
///
/// - `sub`: 토큰의 주체 (사용자 이메일)
/// - `jti`: 토큰 고유 ID (UUID v4)
/// - `iat`: 토큰 발급 시간 (Unix timestamp)
/// - `exp`: 토큰 만료 시간 (Unix timestamp)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 토큰의 주체 (사용자 이메일)
    pub sub: String,
    pub jti: String,
    pub iat: i64,
    pub exp: i64,
}

/// 로그인 성공 시 클라이언트에게 전달되는 토큰 정보
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    /// 액세스 토큰 (스킴 접두사 제외)
    pub access_token: String,
    /// 항상 "Bearer"
    pub token_type: String,
    /// 액세스 토큰 만료 시간 (초)
    pub expires_in: i64,
}

impl TokenPair {
    pub fn bearer(access_token: String, expires_in: i64) -> Self {
        Self {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in,
        }
    }

    /// `Authorization` 헤더에 그대로 넣을 수 있는 값 (`Bearer {token}`)
    pub fn authorization_header(&self) -> String {
        format!("{} {}", self.token_type, self.access_token)
    }
}
