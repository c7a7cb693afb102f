//! # Core Framework Module
//!
//! 검수 백엔드의 핵심 프레임워크 기능을 제공하는 모듈입니다.
//!
//! ## 모듈 구성
//!
//! ### [`registry`] - 컴포지션 레지스트리
//! - **ServiceRegistry**: 타입별 싱글톤을 지연 생성하고 캐시하는 컨테이너
//! - **Resolver**: 팩토리에 주입되어 의존성을 해석하는 핸들
//! - **순환 감지**: 생성 소유/대기 관계 기반 `CyclicDependency` 보고 (스레드 간 순환 포함)
//!
//! ### [`errors`] - 통합 에러 처리
//! - **RegistryError**: 배선 결함 (`UnregisteredType`, `CyclicDependency`)
//! - **AppError**: 도메인 서비스 에러
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::registry::ServiceRegistry;
//!
//! let registry = ServiceRegistry::new();
//! registry.register::<dyn BillRepository, _>(|_| {
//!     Ok(Arc::new(InMemoryBillRepository::new()) as Arc<dyn BillRepository>)
//! });
//! registry.register(|r| Ok(Arc::new(BillQuery::new(r.resolve::<dyn BillRepository>()?))));
//!
//! let bill_query = registry.resolve::<BillQuery>()?;
//! ```
//!
//! ## 트러블슈팅
//!
//! ### 순환 참조 감지
//! ```text
//! Cyclic dependency detected: BillService -> BillQuery -> BillService
//! ```
//! **해결**: 계층 구조를 repository → query → service 단방향으로 재설계
//!
//! ### 미등록 타입 에러
//! ```text
//! Unregistered type: ...::ContainerQuery. Register it in the composition root before resolving
//! ```
//! **해결**: `bootstrap::init`에 `register` 호출 추가

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;
