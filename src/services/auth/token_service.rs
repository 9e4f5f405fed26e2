//! JWT 토큰 관리 서비스 구현
//!
//! HMAC-SHA256으로 서명된 액세스 토큰을 발급하고 검증합니다.
//! 토큰의 `sub` 클레임에는 사용자 이메일이 들어가며, 요청의 호출자 식별에 사용됩니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;
use crate::{
    config::{JwtConfig, BEARER_PREFIX},
    core::errors::{AppError, AppResult},
    domain::models::token::{TokenClaims, TokenPair},
};

/// 토큰 발급 및 호출자 식별
pub trait TokenProvider: Send + Sync {
    /// 주어진 이메일을 주체로 하는 액세스 토큰을 발급합니다.
    fn issue(&self, email: &str) -> AppResult<TokenPair>;

    /// 토큰(스킴 접두사 제외)을 검증하고 주체 이메일을 반환합니다.
    ///
    /// 만료, 서명 불일치, 형식 오류는 모두 `AuthenticationError`입니다.
    fn extract_email(&self, token: &str) -> AppResult<String>;
}

/// JWT 토큰 관리 서비스
#[derive(Clone)]
pub struct TokenService {
    secret: String,
    expiration_hours: i64,
}

impl TokenService {
    pub fn new(secret: impl Into<String>, expiration_hours: i64) -> Self {
        Self {
            secret: secret.into(),
            expiration_hours,
        }
    }

    /// `JWT_SECRET`, `JWT_EXPIRATION_HOURS` 환경 변수로 생성
    ///
    /// 운영 환경에서 `JWT_SECRET`이 없으면 실패합니다.
    pub fn from_config() -> AppResult<Self> {
        Ok(Self::new(JwtConfig::secret()?, JwtConfig::expiration_hours()))
    }

    /// JWT 토큰 검증 및 클레임 추출
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 토큰 만료, 잘못된 형식/서명
    pub fn verify_token(&self, token: &str) -> AppResult<TokenClaims> {
        let decoding_key = DecodingKey::from_secret(self.secret.as_ref());
        let validation = Validation::default();

        decode::<TokenClaims>(token, &decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
                }
                ErrorKind::InvalidSignature => {
                    AppError::AuthenticationError("토큰 서명이 올바르지 않습니다".to_string())
                }
                _ => AppError::AuthenticationError(format!("유효하지 않은 토큰입니다: {}", e)),
            })
    }
}

impl TokenProvider for TokenService {
    fn issue(&self, email: &str) -> AppResult<TokenPair> {
        let now = Utc::now();
        let expiration = now + Duration::hours(self.expiration_hours);

        let claims = TokenClaims {
            sub: email.to_string(),
            jti: Uuid::new_v4().to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        let encoding_key = EncodingKey::from_secret(self.secret.as_ref());
        let access_token = encode(&Header::default(), &claims, &encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))?;

        Ok(TokenPair::bearer(access_token, self.expiration_hours * 3600))
    }

    fn extract_email(&self, token: &str) -> AppResult<String> {
        Ok(self.verify_token(token)?.sub)
    }
}

/// Bearer 토큰에서 실제 토큰 부분 추출
///
/// HTTP Authorization 헤더의 "Bearer {token}" 형식에서 토큰 부분만을 추출합니다.
/// 접두사가 없거나 토큰이 비어 있으면 `AuthenticationError`를 반환합니다.
///
/// ```rust,ignore
/// let token = extract_bearer_token("Bearer eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")?;
/// ```
pub fn extract_bearer_token(auth_header: &str) -> AppResult<&str> {
    match auth_header.strip_prefix(BEARER_PREFIX) {
        Some(token) if !token.trim().is_empty() => Ok(token.trim()),
        _ => Err(AppError::AuthenticationError(
            "유효하지 않은 인증 헤더 형식입니다".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new("test-secret", 1)
    }

    #[test]
    fn test_issue_and_extract_email() {
        let tokens = service();

        let pair = tokens.issue("ana@x.com").unwrap();

        assert_eq!(pair.token_type, "Bearer");
        assert_eq!(pair.expires_in, 3600);
        assert_eq!(tokens.extract_email(&pair.access_token).unwrap(), "ana@x.com");
    }

    #[test]
    fn test_each_token_has_unique_jti() {
        let tokens = service();

        let first = tokens.verify_token(&tokens.issue("ana@x.com").unwrap().access_token).unwrap();
        let second = tokens.verify_token(&tokens.issue("ana@x.com").unwrap().access_token).unwrap();

        assert_ne!(first.jti, second.jti);
    }

    #[test]
    fn test_token_signed_with_other_secret_is_rejected() {
        let pair = TokenService::new("other-secret", 1).issue("ana@x.com").unwrap();

        let result = service().extract_email(&pair.access_token);

        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        // 기본 검증의 leeway(60초)보다 충분히 과거
        let pair = TokenService::new("test-secret", -1).issue("ana@x.com").unwrap();

        let result = service().extract_email(&pair.access_token);

        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        let result = service().extract_email("not.a.jwt");

        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_extract_bearer_token() {
        assert_eq!(extract_bearer_token("Bearer abc.def.ghi").unwrap(), "abc.def.ghi");
        assert!(extract_bearer_token("abc.def.ghi").is_err());
        assert!(extract_bearer_token("Basic dXNlcjpwYXNz").is_err());
        assert!(extract_bearer_token("Bearer ").is_err());
        assert!(extract_bearer_token("").is_err());
    }
}
