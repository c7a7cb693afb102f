//! Container 생성 요청 DTO

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateContainerRequest {
    pub bill_id: Uuid,

    /// ISO 6346 형식 (소유자 코드 4자 + 숫자 7자리)
    #[validate(custom(function = "validate_container_number"))]
    pub container_number: String,

    #[validate(range(min = 1, message = "포대 수는 1 이상이어야 합니다"))]
    pub bag_count: u32,

    #[validate(range(exclusive_min = 0.0, message = "순중량은 0보다 커야 합니다"))]
    pub net_weight_kg: f64,
}

fn validate_container_number(container_number: &str) -> Result<(), ValidationError> {
    let normalized = container_number.trim();
    let well_formed = normalized.is_ascii()
        && normalized.len() == 11
        && normalized[..4].chars().all(|c| c.is_ascii_alphabetic())
        && normalized[4..].chars().all(|c| c.is_ascii_digit());

    if !well_formed {
        return Err(ValidationError::new("invalid_container_number")
            .with_message("컨테이너 번호는 영문 4자와 숫자 7자리여야 합니다".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(container_number: &str, bag_count: u32) -> CreateContainerRequest {
        CreateContainerRequest {
            bill_id: Uuid::new_v4(),
            container_number: container_number.to_string(),
            bag_count,
            net_weight_kg: 20_000.0,
        }
    }

    #[test]
    fn test_container_number_format() {
        assert!(request("MSKU7654321", 300).validate().is_ok());
        assert!(request("msku7654321", 300).validate().is_ok());
        assert!(request("MSK7654321", 300).validate().is_err());
        assert!(request("MSKU76543X1", 300).validate().is_err());
        assert!(request("한글U7654321", 300).validate().is_err());
    }

    #[test]
    fn test_bag_count_must_be_positive() {
        assert!(request("MSKU7654321", 0).validate().is_err());
    }
}
