//! CuttingTest 데이터 액세스 계층

pub mod cutting_test_repo;

pub use cutting_test_repo::{CuttingTestRepository, InMemoryCuttingTestRepository};
