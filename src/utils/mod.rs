//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`display_terminal`] - 시작 과정 터미널 출력 포맷팅 함수들

pub mod display_terminal;
