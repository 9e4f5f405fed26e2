//! 비밀번호 해싱 서비스
//!
//! bcrypt 해시 문자열에는 salt와 cost가 포함되므로 검증 시 별도 설정이 필요 없습니다.

use crate::{
    config::PasswordConfig,
    core::errors::{AppResult, ErrorContext},
};

/// 비밀번호 단방향 해셔
pub trait PasswordHasher: Send + Sync {
    /// 평문 비밀번호를 해싱합니다.
    fn hash(&self, plain: &str) -> AppResult<String>;

    /// 평문 비밀번호가 저장된 해시와 일치하는지 확인합니다.
    fn verify(&self, plain: &str, hashed: &str) -> AppResult<bool>;
}

/// bcrypt 해셔
#[derive(Debug, Clone)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// `BCRYPT_COST` 또는 실행 환경 기본값을 사용합니다.
    pub fn from_config() -> Self {
        Self::new(PasswordConfig::bcrypt_cost())
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, plain: &str) -> AppResult<String> {
        bcrypt::hash(plain, self.cost).context("비밀번호 해싱 실패")
    }

    fn verify(&self, plain: &str, hashed: &str) -> AppResult<bool> {
        bcrypt::verify(plain, hashed).context("비밀번호 검증 실패")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = BcryptPasswordHasher::new(4);

        let hashed = hasher.hash("s3cret").unwrap();

        assert_ne!(hashed, "s3cret");
        assert!(hasher.verify("s3cret", &hashed).unwrap());
        assert!(!hasher.verify("wrong", &hashed).unwrap());
    }

    #[test]
    fn test_same_password_hashes_differently() {
        let hasher = BcryptPasswordHasher::new(4);

        let first = hasher.hash("s3cret").unwrap();
        let second = hasher.hash("s3cret").unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_verify_against_malformed_hash_is_error() {
        let hasher = BcryptPasswordHasher::new(4);

        assert!(hasher.verify("s3cret", "not-a-bcrypt-hash").is_err());
    }
}
