//! 실행 환경 및 레지스트리 설정 관리 모듈
//!
//! 실행 환경과 컴포지션 레지스트리의 시작 동작을 환경 변수로부터 읽어옵니다.

use std::env;

use log::warn;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    /// `ENVIRONMENT` 환경 변수로 현재 환경을 결정합니다. 기본값은 `Production`입니다.
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 컴포지션 레지스트리 시작 설정
///
/// # Environment Variables
///
/// * `REGISTRY_EAGER_INIT` - 시작 시 모든 컴포넌트를 미리 생성 (기본값: 운영 환경에서 true)
/// * `REGISTRY_PRINT_SUMMARY` - 초기화 요약을 터미널에 출력 (기본값: true)
#[derive(Debug, Clone, PartialEq)]
pub struct RegistryConfig {
    pub eager_init: bool,
    pub print_summary: bool,
}

impl RegistryConfig {
    pub fn from_env() -> Self {
        let environment = Environment::current();
        let defaults = Self::for_env(&environment);

        Self {
            eager_init: read_flag("REGISTRY_EAGER_INIT", defaults.eager_init),
            print_summary: read_flag("REGISTRY_PRINT_SUMMARY", defaults.print_summary),
        }
    }

    /// 환경별 기본값
    ///
    /// 개발/테스트 환경에서는 지연 생성을 유지하고, 스테이징/운영에서는
    /// 시작 시점에 배선 결함을 드러내도록 미리 생성합니다.
    pub fn for_env(env: &Environment) -> Self {
        match env {
            Environment::Development | Environment::Test => Self {
                eager_init: false,
                print_summary: true,
            },
            Environment::Staging | Environment::Production => Self {
                eager_init: true,
                print_summary: true,
            },
        }
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self::for_env(&Environment::Production)
    }
}

fn read_flag(key: &str, default: bool) -> bool {
    match env::var(key) {
        Ok(value) => parse_flag(&value).unwrap_or_else(|| {
            warn!("{} 파싱 실패: {}. 기본값 {} 사용", key, value, default);
            default
        }),
        Err(_) => default,
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
