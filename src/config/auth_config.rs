//! # Authentication Configuration Module
//!
//! JWT 베어러 토큰 발급/검증에 필요한 설정을 관리합니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_EXPIRATION_HOURS="1"
//! ```
//!
//! 운영 환경(`ENVIRONMENT=production`, 기본값)에서는 `JWT_SECRET`이 반드시 설정되어
//! 있어야 하며, 없으면 서버가 시작되지 않습니다.

use std::env;
use crate::config::Environment;
use crate::core::errors::{AppError, AppResult};

/// 인증 헤더에서 사용하는 스킴 접두사 (공백 포함 7자)
pub const BEARER_PREFIX: &str = "Bearer ";

/// 개발/테스트 환경에서 `JWT_SECRET`이 없을 때 사용하는 서명 키
const DEV_FALLBACK_SECRET: &str = "your-secret-key";

pub struct JwtConfig;

impl JwtConfig {
    /// 토큰 서명 키
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 운영 환경에서 `JWT_SECRET` 미설정
    pub fn secret() -> AppResult<String> {
        Self::secret_for_env(&Environment::current(), env::var("JWT_SECRET").ok())
    }

    pub fn secret_for_env(environment: &Environment, configured: Option<String>) -> AppResult<String> {
        match configured.filter(|secret| !secret.trim().is_empty()) {
            Some(secret) => Ok(secret),
            None if *environment == Environment::Production => Err(AppError::InternalError(
                "JWT_SECRET must be set in production".to_string(),
            )),
            None => {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                Ok(DEV_FALLBACK_SECRET.to_string())
            }
        }
    }

    /// 액세스 토큰 만료 시간 (시간 단위, 기본값 1)
    pub fn expiration_hours() -> i64 {
        env::var("JWT_EXPIRATION_HOURS")
            .ok()
            .and_then(|value| value.parse().ok())
            .filter(|hours: &i64| *hours > 0)
            .unwrap_or(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_prefix_is_seven_chars() {
        assert_eq!(BEARER_PREFIX.len(), 7);
    }

    #[test]
    fn test_missing_secret_fails_in_production() {
        let result = JwtConfig::secret_for_env(&Environment::Production, None);
        assert!(matches!(result, Err(AppError::InternalError(_))));

        let blank = JwtConfig::secret_for_env(&Environment::Production, Some("  ".to_string()));
        assert!(blank.is_err());
    }

    #[test]
    fn test_missing_secret_falls_back_outside_production() {
        let secret = JwtConfig::secret_for_env(&Environment::Development, None).unwrap();
        assert_eq!(secret, DEV_FALLBACK_SECRET);

        let configured = JwtConfig::secret_for_env(
            &Environment::Production,
            Some("prod-secret".to_string()),
        ).unwrap();
        assert_eq!(configured, "prod-secret");
    }

    #[test]
    fn test_expiration_default_is_positive() {
        assert!(JwtConfig::expiration_hours() > 0);
    }
}
