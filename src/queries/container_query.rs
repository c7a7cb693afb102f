//! Container 조회

use std::sync::Arc;

use uuid::Uuid;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::Container;
use crate::repositories::containers::ContainerRepository;

pub struct ContainerQuery {
    repo: Arc<dyn ContainerRepository>,
}

impl ContainerQuery {
    pub fn new(repo: Arc<dyn ContainerRepository>) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &Arc<dyn ContainerRepository> {
        &self.repo
    }

    pub fn get(&self, id: Uuid) -> AppResult<Container> {
        self.repo
            .find_by_id(id)
            .ok_or_else(|| AppError::NotFound(format!("Container {} not found", id)))
    }

    pub fn exists(&self, id: Uuid) -> bool {
        self.repo.find_by_id(id).is_some()
    }

    pub fn find_by_number(&self, container_number: &str) -> Option<Container> {
        self.repo.find_by_container_number(container_number.trim())
    }

    pub fn list_by_bill(&self, bill_id: Uuid) -> Vec<Container> {
        self.repo.find_by_bill(bill_id)
    }

    /// Bill 단위 총 순중량 (kg)
    pub fn total_net_weight_kg(&self, bill_id: Uuid) -> f64 {
        self.repo
            .find_by_bill(bill_id)
            .iter()
            .map(|container| container.net_weight_kg)
            .sum()
    }
}
