//! 컷팅 테스트 엔티티 모듈
//!
//! 컨테이너 샘플에서 채취한 원두를 절단하여 품질 결함을 판정한 결과입니다.


pub use cutting_test::CuttingTest;
