//! Bill 조회

use std::sync::Arc;

use uuid::Uuid;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::Bill;
use crate::repositories::bills::BillRepository;

pub struct BillQuery {
    repo: Arc<dyn BillRepository>,
}

impl BillQuery {
    pub fn new(repo: Arc<dyn BillRepository>) -> Self {
        Self { repo }
    }

    /// 주입된 리포지토리 핸들
    pub fn repository(&self) -> &Arc<dyn BillRepository> {
        &self.repo
    }

    pub fn get(&self, id: Uuid) -> AppResult<Bill> {
        self.repo
            .find_by_id(id)
            .ok_or_else(|| AppError::NotFound(format!("Bill {} not found", id)))
    }

    pub fn exists(&self, id: Uuid) -> bool {
        self.repo.find_by_id(id).is_some()
    }

    pub fn find_by_number(&self, bill_number: &str) -> Option<Bill> {
        self.repo.find_by_bill_number(bill_number.trim())
    }

    pub fn list(&self) -> Vec<Bill> {
        self.repo.find_all()
    }
}
