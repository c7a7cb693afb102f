//! Bill 생성 요청 DTO

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBillRequest {
    #[validate(custom(function = "validate_bill_number"))]
    pub bill_number: String,

    #[validate(length(max = 100, message = "선박명은 100자 이하여야 합니다"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub vessel: String,

    #[validate(length(max = 100, message = "선적항은 100자 이하여야 합니다"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub port_of_loading: String,
}

/// 저장되는 값(앞뒤 공백 제거 후)을 기준으로 검사합니다.
fn validate_bill_number(bill_number: &str) -> Result<(), ValidationError> {
    let trimmed = bill_number.trim();

    if !(4..=32).contains(&trimmed.chars().count()) {
        return Err(ValidationError::new("bill_number_length")
            .with_message("선하증권 번호는 4-32자 사이여야 합니다".into()));
    }

    if !trimmed.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(ValidationError::new("invalid_bill_number")
            .with_message("선하증권 번호는 영문, 숫자, 하이픈만 사용 가능합니다".into()));
    }
    Ok(())
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("공백만으로 된 값은 허용되지 않습니다".into()));
    }
    Ok(())
}
