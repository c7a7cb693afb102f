//! 생성 요청 DTO
//!
//! 서비스 계층으로 들어오는 입력 데이터 구조와 `validator` 기반 검증 규칙을 정의합니다.

pub mod bill_request;
pub mod container_request;
pub mod cutting_test_request;

pub use bill_request::CreateBillRequest;
pub use container_request::CreateContainerRequest;
pub use cutting_test_request::CreateCuttingTestRequest;
