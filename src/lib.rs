//! 검수 서비스 백엔드 코어
//!
//! 선하증권(Bill), 컨테이너(Container), 컷팅 테스트(CuttingTest) 계층을
//! 싱글톤 컴포지션 레지스트리로 배선하는 백엔드 코어입니다.
//!
//! # Features
//!
//! - **컴포지션 레지스트리**: 타입별 단일 인스턴스 지연 생성, 순환 참조 감지
//! - **명시적 컴포지션 루트**: 전역 상태 없이 `bootstrap::init`에서 모든 배선 수행
//! - **계층 구조**: repository → query → service
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │    bootstrap    │ ← register 호출 (컴포지션 루트)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ ServiceRegistry │ ← resolve::<T>() 로 싱글톤 제공
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 검증, 중복 확인, 참조 무결성
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     Queries     │ ← 읽기 전용 조회
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 인메모리 저장소
//! └─────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use inspection_service_backend::bootstrap;
//! use inspection_service_backend::services::BillService;
//!
//! let registry = bootstrap::init();
//! let bills = registry.resolve::<BillService>().unwrap();
//! let again = registry.resolve::<BillService>().unwrap();
//! assert!(std::sync::Arc::ptr_eq(&bills, &again));
//! ```

pub mod bootstrap;
pub mod config;
pub mod core;
pub mod domain;
pub mod queries;
pub mod repositories;
pub mod services;
pub mod utils;
