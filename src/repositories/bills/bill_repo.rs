//! # Bill 리포지토리 구현

use log::debug;
use uuid::Uuid;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::Bill;
use crate::repositories::memory::{MemoryTable, Record};

pub trait BillRepository: Send + Sync {
    /// 새 Bill을 저장합니다. 같은 번호(대소문자 무시)가 있으면 `ConflictError`
    fn create(&self, bill: Bill) -> AppResult<Bill>;

    fn find_by_id(&self, id: Uuid) -> Option<Bill>;

    fn find_by_bill_number(&self, bill_number: &str) -> Option<Bill>;

    fn find_all(&self) -> Vec<Bill>;
}

impl Record for Bill {
    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Default)]
pub struct InMemoryBillRepository {
    table: MemoryTable<Bill>,
}

impl InMemoryBillRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BillRepository for InMemoryBillRepository {
    fn create(&self, bill: Bill) -> AppResult<Bill> {
        debug!("Saving bill {}", bill.bill_number);
        self.table
            .insert_unique(bill, |existing, new| {
                existing.bill_number.eq_ignore_ascii_case(&new.bill_number)
            })
            .map_err(|existing| {
                AppError::ConflictError(format!(
                    "이미 등록된 선하증권 번호입니다: {}",
                    existing.bill_number
                ))
            })
    }

    fn find_by_id(&self, id: Uuid) -> Option<Bill> {
        self.table.get(id)
    }

    fn find_by_bill_number(&self, bill_number: &str) -> Option<Bill> {
        self.table
            .find_first(|bill| bill.bill_number.eq_ignore_ascii_case(bill_number))
    }

    fn find_all(&self) -> Vec<Bill> {
        let mut bills = self.table.filter(|_| true);
        bills.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        bills
    }
}
