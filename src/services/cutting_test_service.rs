//! # CuttingTest 서비스

use std::sync::Arc;

use log::{info, warn};
use uuid::Uuid;
use validator::Validate;

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::requests::CreateCuttingTestRequest;
use crate::domain::entities::CuttingTest;
use crate::queries::{ContainerQuery, CuttingTestQuery};
use crate::repositories::cutting_tests::CuttingTestRepository;

/// 이 비율(%)을 넘는 결함은 경고 로그를 남김
const DEFECT_WARNING_PERCENT: f64 = 8.0;

pub struct CuttingTestService {
    repo: Arc<dyn CuttingTestRepository>,
    query: Arc<CuttingTestQuery>,
    container_query: Arc<ContainerQuery>,
}

impl CuttingTestService {
    pub fn new(
        repo: Arc<dyn CuttingTestRepository>,
        query: Arc<CuttingTestQuery>,
        container_query: Arc<ContainerQuery>,
    ) -> Self {
        Self {
            repo,
            query,
            container_query,
        }
    }

    pub fn record(&self, request: CreateCuttingTestRequest) -> AppResult<CuttingTest> {
        request.validate()?;

        if !self.container_query.exists(request.container_id) {
            return Err(AppError::NotFound(format!(
                "Container {} not found",
                request.container_id
            )));
        }

        let cutting_test = self.repo.save(CuttingTest::from(request));
        let defect_rate = cutting_test.defect_rate();
        if defect_rate > DEFECT_WARNING_PERCENT {
            warn!(
                "Cutting test {} on container {} has defect rate {:.1}%",
                cutting_test.id, cutting_test.container_id, defect_rate
            );
        } else {
            info!("Cutting test recorded: {}", cutting_test.id);
        }
        Ok(cutting_test)
    }

    pub fn history(&self, container_id: Uuid) -> AppResult<Vec<CuttingTest>> {
        self.container_query.get(container_id)?;
        Ok(self.query.list_by_container(container_id))
    }
}
