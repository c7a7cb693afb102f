//! # Container 리포지토리 구현

use log::debug;
use uuid::Uuid;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::Container;
use crate::repositories::memory::{MemoryTable, Record};

pub trait ContainerRepository: Send + Sync {
    /// 새 컨테이너를 저장합니다. 같은 번호가 있으면 `ConflictError`
    fn create(&self, container: Container) -> AppResult<Container>;

    fn find_by_id(&self, id: Uuid) -> Option<Container>;

    fn find_by_container_number(&self, container_number: &str) -> Option<Container>;

    /// 특정 Bill에 속한 컨테이너 목록
    fn find_by_bill(&self, bill_id: Uuid) -> Vec<Container>;
}

impl Record for Container {
    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Default)]
pub struct InMemoryContainerRepository {
    table: MemoryTable<Container>,
}

impl InMemoryContainerRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContainerRepository for InMemoryContainerRepository {
    fn create(&self, container: Container) -> AppResult<Container> {
        debug!("Saving container {}", container.container_number);
        self.table
            .insert_unique(container, |existing, new| {
                existing
                    .container_number
                    .eq_ignore_ascii_case(&new.container_number)
            })
            .map_err(|existing| {
                AppError::ConflictError(format!(
                    "이미 등록된 컨테이너 번호입니다: {}",
                    existing.container_number
                ))
            })
    }

    fn find_by_id(&self, id: Uuid) -> Option<Container> {
        self.table.get(id)
    }

    fn find_by_container_number(&self, container_number: &str) -> Option<Container> {
        self.table
            .find_first(|container| container.container_number.eq_ignore_ascii_case(container_number))
    }

    fn find_by_bill(&self, bill_id: Uuid) -> Vec<Container> {
        let mut containers = self.table.filter(|container| container.bill_id == bill_id);
        containers.sort_by(|a, b| a.container_number.cmp(&b.container_number));
        containers
    }
}
