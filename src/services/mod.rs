//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 리포지토리(쓰기)와 쿼리(읽기/관계 검증)를 주입받아
//! 생성 요청의 검증, 중복 확인, 참조 무결성 확인을 수행합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::BillService;
//!
//! let bill_service = registry.resolve::<BillService>()?;
//! let bill = bill_service.create(request)?;
//! ```

pub mod bill_service;
pub mod container_service;
pub mod cutting_test_service;

pub use bill_service::BillService;
pub use container_service::ContainerService;
pub use cutting_test_service::CuttingTestService;
