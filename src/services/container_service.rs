//! # Container 서비스
//!
//! 컨테이너는 반드시 존재하는 Bill에 속해야 하며, 컨테이너 번호는 유일해야 합니다.

use std::sync::Arc;

use log::info;
use uuid::Uuid;
use validator::Validate;

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::requests::CreateContainerRequest;
use crate::domain::entities::Container;
use crate::queries::{BillQuery, ContainerQuery};
use crate::repositories::containers::ContainerRepository;

pub struct ContainerService {
    repo: Arc<dyn ContainerRepository>,
    query: Arc<ContainerQuery>,
    bill_query: Arc<BillQuery>,
}

impl ContainerService {
    pub fn new(
        repo: Arc<dyn ContainerRepository>,
        query: Arc<ContainerQuery>,
        bill_query: Arc<BillQuery>,
    ) -> Self {
        Self {
            repo,
            query,
            bill_query,
        }
    }

    pub fn create(&self, request: CreateContainerRequest) -> AppResult<Container> {
        request.validate()?;

        if !self.bill_query.exists(request.bill_id) {
            return Err(AppError::NotFound(format!("Bill {} not found", request.bill_id)));
        }

        // 빠른 거절. 유일성은 리포지토리의 원자적 삽입이 보장
        if self.query.find_by_number(&request.container_number).is_some() {
            return Err(AppError::ConflictError(format!(
                "이미 등록된 컨테이너 번호입니다: {}",
                request.container_number.trim()
            )));
        }

        let container = self.repo.create(Container::from(request))?;
        info!(
            "Container created: {} on bill {}",
            container.container_number, container.bill_id
        );
        Ok(container)
    }

    /// Bill에 속한 컨테이너 목록. Bill이 없으면 `NotFound`
    pub fn list_for_bill(&self, bill_id: Uuid) -> AppResult<Vec<Container>> {
        self.bill_query.get(bill_id)?;
        Ok(self.query.list_by_bill(bill_id))
    }
}
