//! 컨테이너 엔티티 모듈

pub mod container;

pub use container::Container;
