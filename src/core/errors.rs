//! # Application Error Handling System
//!
//! 검수 서비스 백엔드의 통합 에러 타입을 정의합니다.
//! 레지스트리 배선 에러([`RegistryError`])와 도메인 계층 에러([`AppError`])를
//! `thiserror` 기반 열거형으로 분리하여 관리합니다.
//!
//! ## 에러 분류
//!
//! | 계층 | 타입 | 복구 가능 여부 |
//! |------|------|----------------|
//! | 컴포지션 루트 | `RegistryError` | 불가 (시작 중단) |
//! | 도메인 서비스 | `AppError` | 호출자가 판단 |
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! fn find(&self, id: Uuid) -> AppResult<Bill> {
//!     self.repo
//!         .find_by_id(id)
//!         .ok_or_else(|| AppError::NotFound(format!("Bill {} not found", id)))
//! }
//! ```

use thiserror::Error;

/// 컴포지션 레지스트리 배선 에러
///
/// 두 변형 모두 정적인 배선 결함을 의미하므로 재시도하지 않고
/// 즉시 호출자에게 전파되어 애플리케이션 시작을 중단시켜야 합니다.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// `register` 없이 `resolve`가 호출됨
    #[error("Unregistered type: {type_name}. Register it in the composition root before resolving")]
    UnregisteredType { type_name: &'static str },

    /// 팩토리 그래프에 순환이 존재함
    ///
    /// `path`는 순환을 구성하는 전체 해석 경로입니다 (예: `A -> B -> A`).
    #[error("Cyclic dependency detected: {path}")]
    CyclicDependency { path: String },

    /// 캐시된 인스턴스의 타입이 요청 타입과 다름
    ///
    /// 키가 `TypeId`이므로 정상적인 사용에서는 발생하지 않습니다.
    #[error("Type mismatch for registered type: {type_name}")]
    TypeMismatch { type_name: &'static str },
}

impl RegistryError {
    pub fn unregistered(type_name: &'static str) -> Self {
        RegistryError::UnregisteredType { type_name }
    }

    /// 해석 경로와 재진입한 타입 이름으로 순환 에러를 만듭니다.
    pub fn cycle(chain: &[&str], reentered: &str) -> Self {
        let mut path: Vec<&str> = chain.to_vec();
        path.push(reentered);
        RegistryError::CyclicDependency {
            path: path.join(" -> "),
        }
    }
}

/// 도메인 계층 전역 에러 타입
///
/// Bill / Container / CuttingTest 서비스가 반환하는 에러입니다.
/// 레지스트리 에러는 `#[from]`으로 자동 변환됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러
    ///
    /// # 발생 시나리오
    /// - 동일한 선하증권 번호로 Bill 생성
    /// - 동일한 컨테이너 번호로 Container 생성
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 배선 에러
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    /// 내부 에러
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::ValidationError(errors.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// 에러에 컨텍스트 메시지를 덧붙여 [`AppError::InternalError`]로 변환합니다.
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
