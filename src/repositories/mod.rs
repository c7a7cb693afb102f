//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 각 리포지토리는 트레이트(`dyn BillRepository` 등)로 레지스트리에 등록되며,
//! 기본 구현은 프로세스 메모리 안의 [`memory::MemoryTable`]을 사용합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::bills::BillRepository;
//!
//! let bill_repo = registry.resolve::<dyn BillRepository>()?;
//! let bills = bill_repo.find_all();
//! ```

pub mod bills;
pub mod containers;
pub mod cutting_tests;
pub mod memory;
