//! # Data Transfer Objects
//!
//! 외부 입력을 서비스 계층으로 전달하는 요청 구조체들입니다.
//! 모든 요청은 `validator::Validate`를 구현하며, 서비스는 저장 전에 반드시 검증합니다.

pub mod requests;
