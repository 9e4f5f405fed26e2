//! # Application Error Handling System
//!
//! 계정 서비스 전역에서 사용하는 에러 타입입니다.
//! `thiserror`로 `Error` trait을 구현하고, `actix_web::ResponseError`를 구현하여
//! 핸들러에서 `?`로 전파된 에러가 그대로 HTTP 응답으로 변환됩니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 입력값 검증 실패, 잘못된 ID 형식 |
//! | `AuthenticationError` | 401 Unauthorized | 토큰 누락/만료, 로그인 실패 |
//! | `AuthorizationError` | 403 Forbidden | 다른 사용자의 주소/전화번호 수정 시도 |
//! | `NotFound` | 404 Not Found | 이메일 또는 ID로 조회 실패 |
//! | `EmailConflict` | 409 Conflict | 이미 등록된 이메일 |
//! | `DatabaseError` | 500 Internal Server Error | MongoDB 오류 |
//! | `InternalError` | 500 Internal Server Error | 해싱/토큰 생성 실패 등 |
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! let user = store.find_by_email(email).await?
//!     .ok_or_else(|| AppError::NotFound(format!("이메일을 찾을 수 없습니다: {}", email)))?;
//! ```

use actix_web::http::StatusCode;
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 모든 변형은 요청 단위로 종결되며, 서비스 계층에서 복구하지 않고
/// 경계(핸들러)까지 그대로 전파됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (400)
    ///
    /// 필수 필드 누락, `validator` 검증 실패, 잘못된 ObjectId 형식 등
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 이메일 중복 에러 (409)
    ///
    /// 충돌한 이메일을 메시지 문자열이 아닌 구조화된 필드로 보관합니다.
    /// 응답 JSON에도 `email` 필드로 포함됩니다.
    #[error("Conflict error: email already registered ({email})")]
    EmailConflict { email: String },

    /// 인증 실패 에러 (401)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 권한 부족 에러 (403)
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 내부 서버 에러 (500)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 충돌한 이메일로 `EmailConflict`를 생성합니다.
    pub fn email_conflict(email: impl Into<String>) -> Self {
        AppError::EmailConflict { email: email.into() }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::EmailConflict { .. } => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 모든 에러 응답은 `{"error": "..."}` 형식이며, 이메일 충돌의 경우
    /// `email` 필드가 추가됩니다. 5xx 에러는 내부 메시지를 로그에만 남깁니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        let body = match self {
            AppError::EmailConflict { email } => serde_json::json!({
                "error": self.to_string(),
                "email": email,
            }),
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                log::error!("{}", self);
                serde_json::json!({ "error": "Internal server error" })
            }
            _ => serde_json::json!({ "error": self.to_string() }),
        };

        actix_web::HttpResponse::build(status).json(body)
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// let hashed = bcrypt::hash(password, cost).context("비밀번호 해싱 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
