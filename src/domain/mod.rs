//! # Domain Layer
//!
//! 검수 도메인의 엔티티와 요청 DTO를 제공합니다.
//!
//! - [`entities`] - Bill, Container, CuttingTest
//! - [`dto`] - 생성 요청 및 검증 규칙

pub mod dto;
pub mod entities;
