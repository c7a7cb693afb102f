//! Container 데이터 액세스 계층

pub mod container_repo;

pub use container_repo::{ContainerRepository, InMemoryContainerRepository};
