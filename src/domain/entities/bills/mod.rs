//! 선하증권(Bill of Lading) 엔티티 모듈

pub mod bill;

pub use bill::Bill;
