//! # CuttingTest 리포지토리 구현

use uuid::Uuid;

use crate::domain::entities::CuttingTest;
use crate::repositories::memory::{MemoryTable, Record};

pub trait CuttingTestRepository: Send + Sync {
    fn save(&self, cutting_test: CuttingTest) -> CuttingTest;

    fn find_by_id(&self, id: Uuid) -> Option<CuttingTest>;

    /// 특정 컨테이너의 테스트 목록 (오래된 순)
    fn find_by_container(&self, container_id: Uuid) -> Vec<CuttingTest>;
}

impl Record for CuttingTest {
    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Default)]
pub struct InMemoryCuttingTestRepository {
    table: MemoryTable<CuttingTest>,
}

impl InMemoryCuttingTestRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CuttingTestRepository for InMemoryCuttingTestRepository {
    fn save(&self, cutting_test: CuttingTest) -> CuttingTest {
        self.table.upsert(cutting_test)
    }

    fn find_by_id(&self, id: Uuid) -> Option<CuttingTest> {
        self.table.get(id)
    }

    fn find_by_container(&self, container_id: Uuid) -> Vec<CuttingTest> {
        let mut tests = self.table.filter(|test| test.container_id == container_id);
        tests.sort_by(|a, b| a.tested_at.cmp(&b.tested_at));
        tests
    }
}
