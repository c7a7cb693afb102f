//! Bill Entity Implementation
//!
//! 선적 단위의 선하증권 엔티티입니다. 하나의 Bill에 여러 컨테이너가 속합니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::dto::requests::CreateBillRequest;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub id: Uuid,
    pub bill_number: String,
    pub vessel: String,
    pub port_of_loading: String,
    pub created_at: DateTime<Utc>,
}

impl Bill {
    pub fn new(bill_number: String, vessel: String, port_of_loading: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            bill_number,
            vessel,
            port_of_loading,
            created_at: Utc::now(),
        }
    }
}

impl From<CreateBillRequest> for Bill {
    fn from(request: CreateBillRequest) -> Self {
        Self::new(
            request.bill_number.trim().to_uppercase(),
            request.vessel.trim().to_string(),
            request.port_of_loading.trim().to_string(),
        )
    }
}
