//! 인메모리 테이블
//!
//! `Uuid` 키 기반의 스레드 안전 저장소입니다. 모든 인메모리 리포지토리가 공유합니다.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use uuid::Uuid;

/// 저장 가능한 레코드
pub trait Record: Clone + Send + Sync {
    fn id(&self) -> Uuid;
}

pub struct MemoryTable<T: Record> {
    rows: RwLock<HashMap<Uuid, T>>,
}

impl<T: Record> MemoryTable<T> {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
        }
    }

    /// 같은 id가 있으면 덮어씁니다.
    pub fn upsert(&self, record: T) -> T {
        let mut rows = self.rows.write().unwrap_or_else(PoisonError::into_inner);
        rows.insert(record.id(), record.clone());
        record
    }

    /// 충돌하는 레코드가 없을 때만 삽입합니다.
    ///
    /// 검사와 삽입이 하나의 쓰기 잠금 안에서 이루어집니다.
    /// 같은 id이거나 `conflicts`가 참인 레코드가 있으면 그 레코드를 `Err`로 돌려줍니다.
    pub fn insert_unique<P>(&self, record: T, conflicts: P) -> Result<T, T>
    where
        P: Fn(&T, &T) -> bool,
    {
        let mut rows = self.rows.write().unwrap_or_else(PoisonError::into_inner);

        let existing = rows
            .get(&record.id())
            .or_else(|| rows.values().find(|row| conflicts(row, &record)));
        if let Some(existing) = existing {
            return Err(existing.clone());
        }

        rows.insert(record.id(), record.clone());
        Ok(record)
    }

    pub fn get(&self, id: Uuid) -> Option<T> {
        let rows = self.rows.read().unwrap_or_else(PoisonError::into_inner);
        rows.get(&id).cloned()
    }

    pub fn find_first<P>(&self, predicate: P) -> Option<T>
    where
        P: Fn(&T) -> bool,
    {
        let rows = self.rows.read().unwrap_or_else(PoisonError::into_inner);
        rows.values().find(|row| predicate(*row)).cloned()
    }

    pub fn filter<P>(&self, predicate: P) -> Vec<T>
    where
        P: Fn(&T) -> bool,
    {
        let rows = self.rows.read().unwrap_or_else(PoisonError::into_inner);
        rows.values().filter(|row| predicate(*row)).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.rows.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Record> Default for MemoryTable<T> {
    fn default() -> Self {
        Self::new()
    }
}
