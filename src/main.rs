//! 사용자 계정 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 서비스를 초기화합니다.
//! `STORAGE_BACKEND`에 따라 MongoDB 또는 인메모리 저장소를 선택하고,
//! 저장소/해셔/토큰 발급기를 `UserService`에 생성자로 주입합니다.

use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use user_account_service::config::{ServerConfig, StorageBackend};
use user_account_service::db::Database;
use user_account_service::repositories::{
    AddressStore, InMemoryStore, MongoAddressRepository, MongoPhoneRepository,
    MongoUserRepository, PhoneStore, UserStore,
};
use user_account_service::routes::configure_all_routes;
use user_account_service::services::auth::{BcryptPasswordHasher, TokenProvider, TokenService};
use user_account_service::services::users::UserService;

/// 저장소 trait 객체 묶음
type Stores = (Arc<dyn UserStore>, Arc<dyn AddressStore>, Arc<dyn PhoneStore>);

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 사용자 계정 서비스 시작중...");

    let (users, addresses, phones) = initialize_stores().await?;

    let tokens: Arc<dyn TokenProvider> = Arc::new(TokenService::from_config().map_err(|e| {
        error!("토큰 서비스 초기화 실패: {}", e);
        std::io::Error::other(e.to_string())
    })?);
    let hasher = Arc::new(BcryptPasswordHasher::from_config());
    let user_service = web::Data::new(UserService::new(
        users,
        addresses,
        phones,
        hasher,
        tokens.clone(),
    ));

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(user_service, tokens).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
/// 바인딩 주소는 `HOST`, `PORT` 환경 변수로 지정합니다 (기본값 `127.0.0.1:8080`).
async fn start_http_server(
    user_service: web::Data<UserService>,
    tokens: Arc<dyn TokenProvider>,
) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API: http://{}/api/v1", bind_address);

    HttpServer::new(move || {
        let tokens = tokens.clone();

        App::new()
            .app_data(user_service.clone())
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(|cfg| configure_all_routes(cfg, tokens))
    })
        .bind(bind_address)?
        .workers(4) // 워커 스레드 수
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => {
            if let Err(e) = dotenv::from_filename(".env.prod") {
                eprintln!(".env.prod 파일 로드 실패: {}", e);
            }
        }
        "dev" => {
            if let Err(e) = dotenv::from_filename(".env.dev") {
                eprintln!(".env.dev 파일 로드 실패: {}", e);
            }
        }
        _ => {
            dotenv().ok();
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
///
/// ```bash
/// RUST_LOG=user_account_service::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
    info!("Current profile: {}", std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string()));
}

/// 저장소를 초기화합니다
///
/// `STORAGE_BACKEND=memory`이면 프로세스 메모리 저장소를, 그 외에는 MongoDB에 연결하고
/// 인덱스를 생성합니다. MongoDB 연결 실패는 시작 실패로 처리됩니다.
async fn initialize_stores() -> std::io::Result<Stores> {
    match StorageBackend::current() {
        StorageBackend::Memory => {
            warn!("⚠️ 인메모리 저장소 사용: 프로세스 종료 시 데이터가 사라집니다");
            let store = Arc::new(InMemoryStore::new());
            let stores: Stores = (store.clone(), store.clone(), store);
            Ok(stores)
        }
        StorageBackend::Mongo => {
            info!("📡 데이터베이스 연결 중...");

            let database = Arc::new(Database::new().await.map_err(|e| {
                error!("데이터베이스 연결 실패: {}", e);
                std::io::Error::other(e.to_string())
            })?);

            let users = MongoUserRepository::new(database.clone());
            users.create_indexes().await.map_err(|e| {
                error!("인덱스 생성 실패: {}", e);
                std::io::Error::other(e.to_string())
            })?;

            info!("✅ MongoDB 인덱스 준비 완료");

            let stores: Stores = (
                Arc::new(users),
                Arc::new(MongoAddressRepository::new(database.clone())),
                Arc::new(MongoPhoneRepository::new(database)),
            );
            Ok(stores)
        }
    }
}

/// CORS 설정을 구성합니다
///
/// # Allowed Origins
///
/// * `http://localhost:3000` - 프론트엔드 개발 서버
/// * `http://localhost:8080` - 자체 서버
/// * `127.0.0.1` 동등한 주소들
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(3600)
}
