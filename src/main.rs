use std::process::ExitCode;

use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use inspection_service_backend::bootstrap;
use inspection_service_backend::config::{Environment, RegistryConfig};
use inspection_service_backend::services::{BillService, ContainerService, CuttingTestService};

fn main() -> ExitCode {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 검수 서비스 시작중... (environment: {:?})", Environment::current());

    let config = RegistryConfig::from_env();
    info!("Registry 설정 로드됨: {:?}", config);

    // 배선 결함은 복구하지 않고 시작을 중단
    let registry = match bootstrap::init_with(&config) {
        Ok(registry) => registry,
        Err(e) => {
            error!("서비스 레지스트리 초기화 실패: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let wired = registry
        .resolve::<BillService>()
        .and(registry.resolve::<ContainerService>())
        .and(registry.resolve::<CuttingTestService>());

    match wired {
        Ok(_) => {
            info!("✅ 모든 서비스가 성공적으로 배선되었습니다! {:?}", registry);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("서비스 배선 실패: {}", e);
            ExitCode::FAILURE
        }
    }
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

    // 로거 초기화 전이므로 결과는 eprintln으로 남김
    let loaded = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ".env.prod"),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ".env.dev"),
        _ => dotenv().map(|_| ".env"),
    };

    match loaded {
        Ok(file) => eprintln!("Current profile: {} ({} 파일 로드 됨)", profile, file),
        Err(e) => eprintln!("Current profile: {} (env 파일 로드 실패: {})", profile, e),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info")
///
/// ```bash
/// RUST_LOG=inspection_service_backend::core=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
}
