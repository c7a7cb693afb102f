//! # Configuration Module
//!
//! 검수 백엔드의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 레지스트리 시작 설정
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{Environment, RegistryConfig};
//!
//! let env = Environment::current();
//! let config = RegistryConfig::from_env();
//! if config.eager_init {
//!     registry.initialize_all()?;
//! }
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! export PROFILE="dev"                 # .env.dev / .env.prod 선택
//! export ENVIRONMENT="development"     # development, test, staging, production
//! export REGISTRY_EAGER_INIT="false"
//! export REGISTRY_PRINT_SUMMARY="true"
//! ```

pub mod data_config;

pub use data_config::*;
