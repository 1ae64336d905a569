use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::{
    common::entities::app_errors::CoreError,
    nutrition::{entities::NutritionRecord, ports::NutritionCacheRepository},
};

/// Process-local nutrition cache. Entries live for the process lifetime;
/// rows change rarely enough that staleness is acceptable, and callers
/// already treat every cache outcome as advisory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryNutritionCache {
    entries: Arc<RwLock<HashMap<String, NutritionRecord>>>,
}

impl NutritionCacheRepository for InMemoryNutritionCache {
    async fn get(&self, key: String) -> Result<Option<NutritionRecord>, CoreError> {
        Ok(self.entries.read().await.get(&key).cloned())
    }

    async fn set(&self, key: String, record: NutritionRecord) -> Result<(), CoreError> {
        self.entries.write().await.insert(key, record);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn round_trips_records() {
        let cache = InMemoryNutritionCache::default();
        assert_eq!(cache.get("oats".into()).await.unwrap(), None);

        let record = NutritionRecord::empty("5000");
        cache.set("oats".into(), record.clone()).await.unwrap();
        assert_eq!(cache.get("oats".into()).await.unwrap(), Some(record));
    }
}
