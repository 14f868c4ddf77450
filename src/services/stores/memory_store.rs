use std::sync::Arc;
use async_trait::async_trait;
use dashmap::DashMap;
use crate::errors::{DetectiveError, DetectiveResult};
use crate::structs::analysis_result::AnalysisResult;
use crate::traits::analysis_store::AnalysisStore;

/// In-process store for local runs and tests. Contents are lost on exit.
#[derive(Clone, Default)]
pub struct MemoryAnalysisStore {
    records: Arc<DashMap<String, AnalysisResult>>,
}

impl MemoryAnalysisStore {
    pub fn new() -> Self {
        Self {
            records: Arc::new(DashMap::new()),
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl AnalysisStore for MemoryAnalysisStore {
    async fn insert(&self, record: &AnalysisResult) -> DetectiveResult<()> {
        self.records.insert(record.id.clone(), record.clone());
        log::debug!("💾 Stored analysis {} in memory", record.id);
        Ok(())
    }

    async fn list_recent(&self, limit: u32) -> DetectiveResult<Vec<AnalysisResult>> {
        let mut records: Vec<AnalysisResult> = self.records
            .iter()
            .map(|entry| entry.value().clone())
            .collect();

        records.sort_by(|a, b| b.upload_time.cmp(&a.upload_time));
        records.truncate(limit as usize);

        Ok(records)
    }

    async fn get_by_id(&self, id: &str) -> DetectiveResult<AnalysisResult> {
        self.records
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| DetectiveError::not_found("Analysis not found"))
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use proptest::prelude::*;

    fn record(id: &str, minutes: i64) -> AnalysisResult {
        AnalysisResult {
            id: id.to_string(),
            filename: format!("{}.jpg", id),
            upload_time: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::minutes(minutes),
            total_defects: 0,
            defects_found: vec![],
            analysis_complete: true,
            image_base64: None,
        }
    }

    #[tokio::test]
    async fn lists_newest_first_within_limit() {
        let store = MemoryAnalysisStore::new();
        for (id, minutes) in [("old", 1), ("newest", 30), ("middle", 10)] {
            store.insert(&record(id, minutes)).await.unwrap();
        }

        let listed = store.list_recent(2).await.unwrap();
        let ids: Vec<&str> = listed.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["newest", "middle"]);
    }

    #[tokio::test]
    async fn zero_limit_returns_nothing() {
        let store = MemoryAnalysisStore::new();
        store.insert(&record("a", 1)).await.unwrap();
        assert!(store.list_recent(0).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let store = MemoryAnalysisStore::new();
        let error = store.get_by_id("missing").await.unwrap_err();
        assert!(matches!(error, DetectiveError::NotFound(_)));
    }

    #[tokio::test]
    async fn get_returns_inserted_record() {
        let store = MemoryAnalysisStore::new();
        let original = record("abc", 5);
        store.insert(&original).await.unwrap();
        assert_eq!(store.get_by_id("abc").await.unwrap(), original);
        assert_eq!(store.len(), 1);
    }

    proptest! {
        #[test]
        fn history_is_bounded_and_ordered(
            offsets in proptest::collection::vec(0i64..10_000, 0..40),
            limit in 0u32..50,
        ) {
            let store = MemoryAnalysisStore::new();
            let listed = tokio_test::block_on(async {
                for (index, minutes) in offsets.iter().enumerate() {
                    store.insert(&record(&format!("r{}", index), *minutes)).await.unwrap();
                }
                store.list_recent(limit).await.unwrap()
            });

            prop_assert!(listed.len() <= limit as usize);
            prop_assert_eq!(listed.len(), offsets.len().min(limit as usize));
            for pair in listed.windows(2) {
                prop_assert!(pair[0].upload_time >= pair[1].upload_time);
            }
        }
    }
}
