//! # Bill 서비스
//!
//! 선하증권 등록을 담당합니다. 선하증권 번호는 대소문자 구분 없이 유일해야 합니다.

use std::sync::Arc;

use log::info;
use validator::Validate;

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::requests::CreateBillRequest;
use crate::domain::entities::Bill;
use crate::queries::BillQuery;
use crate::repositories::bills::BillRepository;

pub struct BillService {
    repo: Arc<dyn BillRepository>,
    query: Arc<BillQuery>,
}

impl BillService {
    pub fn new(repo: Arc<dyn BillRepository>, query: Arc<BillQuery>) -> Self {
        Self { repo, query }
    }

    pub fn create(&self, request: CreateBillRequest) -> AppResult<Bill> {
        request.validate()?;

        // 빠른 거절. 유일성은 리포지토리의 원자적 삽입이 보장
        if self.query.find_by_number(&request.bill_number).is_some() {
            return Err(AppError::ConflictError(format!(
                "이미 등록된 선하증권 번호입니다: {}",
                request.bill_number.trim()
            )));
        }

        let bill = self.repo.create(Bill::from(request))?;
        info!("Bill created: {} ({})", bill.bill_number, bill.id);
        Ok(bill)
    }
}
