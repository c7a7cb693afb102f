//! Bill 데이터 액세스 계층

pub mod bill_repo;

pub use bill_repo::{BillRepository, InMemoryBillRepository};
