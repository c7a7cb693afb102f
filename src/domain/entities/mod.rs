//! # Domain Entities
//!
//! 검수 도메인의 핵심 엔티티를 정의합니다.
//!
//! ```text
//! Bill 1 ── * Container 1 ── * CuttingTest
//! ```

pub mod bills;
pub mod containers;
pub mod cutting_tests;

pub use bills::Bill;
pub use containers::Container;
pub use cutting_tests::CuttingTest;
