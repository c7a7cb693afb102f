//! CuttingTest 생성 요청 DTO

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_counts_within_sample"))]
pub struct CreateCuttingTestRequest {
    pub container_id: Uuid,

    #[validate(range(min = 1, max = 1000, message = "샘플 수는 1-1000 사이여야 합니다"))]
    pub sample_count: u32,

    pub good_count: u32,

    pub mouldy_count: u32,

    pub slaty_count: u32,

    #[validate(range(min = 0.0, max = 100.0, message = "수분율은 0-100 사이여야 합니다"))]
    pub moisture_percent: f64,
}

fn validate_counts_within_sample(req: &CreateCuttingTestRequest) -> Result<(), ValidationError> {
    let counted = u64::from(req.good_count) + u64::from(req.mouldy_count) + u64::from(req.slaty_count);
    if counted > u64::from(req.sample_count) {
        return Err(ValidationError::new("counts_exceed_sample")
            .with_message("판정 개수의 합이 샘플 수를 초과합니다".into()));
    }
    Ok(())
}
