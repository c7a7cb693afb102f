//! Container Entity Implementation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::dto::requests::CreateContainerRequest;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Container {
    pub id: Uuid,
    pub bill_id: Uuid,
    pub container_number: String,
    pub bag_count: u32,
    pub net_weight_kg: f64,
    pub created_at: DateTime<Utc>,
}

impl Container {
    pub fn new(bill_id: Uuid, container_number: String, bag_count: u32, net_weight_kg: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            bill_id,
            container_number,
            bag_count,
            net_weight_kg,
            created_at: Utc::now(),
        }
    }

    /// 포대당 평균 순중량 (kg)
    pub fn average_bag_weight_kg(&self) -> Option<f64> {
        (self.bag_count > 0).then(|| self.net_weight_kg / f64::from(self.bag_count))
    }
}

impl From<CreateContainerRequest> for Container {
    fn from(request: CreateContainerRequest) -> Self {
        Self::new(
            request.bill_id,
            request.container_number.trim().to_uppercase(),
            request.bag_count,
            request.net_weight_kg,
        )
    }
}
