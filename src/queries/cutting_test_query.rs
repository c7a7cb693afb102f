//! CuttingTest 조회

use std::sync::Arc;

use uuid::Uuid;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::CuttingTest;
use crate::repositories::cutting_tests::CuttingTestRepository;

pub struct CuttingTestQuery {
    repo: Arc<dyn CuttingTestRepository>,
}

impl CuttingTestQuery {
    pub fn new(repo: Arc<dyn CuttingTestRepository>) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &Arc<dyn CuttingTestRepository> {
        &self.repo
    }

    pub fn get(&self, id: Uuid) -> AppResult<CuttingTest> {
        self.repo
            .find_by_id(id)
            .ok_or_else(|| AppError::NotFound(format!("Cutting test {} not found", id)))
    }

    pub fn list_by_container(&self, container_id: Uuid) -> Vec<CuttingTest> {
        self.repo.find_by_container(container_id)
    }

    pub fn latest_for_container(&self, container_id: Uuid) -> Option<CuttingTest> {
        self.repo.find_by_container(container_id).pop()
    }

    /// 컨테이너의 평균 결함 비율 (%). 테스트가 없으면 `None`
    pub fn average_defect_rate(&self, container_id: Uuid) -> Option<f64> {
        let tests = self.repo.find_by_container(container_id);
        if tests.is_empty() {
            return None;
        }
        let total: f64 = tests.iter().map(CuttingTest::defect_rate).sum();
        Some(total / tests.len() as f64)
    }
}
