//! 조회 전용 계층
//!
//! 리포지토리 위에서 읽기 연산만 제공하는 쿼리 싱글톤들입니다.
//! 서비스 계층은 존재 여부 확인과 관계 검증에 쿼리를 사용합니다.

pub mod bill_query;
pub mod container_query;
pub mod cutting_test_query;

pub use bill_query::BillQuery;
pub use container_query::ContainerQuery;
pub use cutting_test_query::CuttingTestQuery;
