use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use super::{Keyed, Store, StoreError};

/// A keyed in-memory store with a uniqueness constraint on [`Keyed::key`].
///
/// A batch is checked in full before anything is written, so a rejected batch
/// leaves the store as it was. Clones share the same rows.
#[derive(Clone)]
pub struct InMemoryStore<T> {
    rows: Arc<RwLock<HashMap<String, T>>>,
}

impl<T> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> InMemoryStore<T> {
    pub fn new() -> Self {
        InMemoryStore {
            rows: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        let rows = self
            .rows
            .read()
            .map_err(|_| StoreError::LockPoisoned("read"))?;
        Ok(rows.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }

    pub fn contains(&self, key: &str) -> Result<bool, StoreError> {
        let rows = self
            .rows
            .read()
            .map_err(|_| StoreError::LockPoisoned("read"))?;
        Ok(rows.contains_key(key))
    }
}

impl<T: Clone> InMemoryStore<T> {
    pub fn get(&self, key: &str) -> Result<Option<T>, StoreError> {
        let rows = self
            .rows
            .read()
            .map_err(|_| StoreError::LockPoisoned("read"))?;
        Ok(rows.get(key).cloned())
    }
}

impl<T> Store for InMemoryStore<T>
where
    T: Keyed + Clone + Send + Sync,
{
    type Record = T;

    fn apply(&self, records: &[T]) -> Result<(), StoreError> {
        let mut rows = self
            .rows
            .write()
            .map_err(|_| StoreError::LockPoisoned("write"))?;

        let mut batch = HashSet::with_capacity(records.len());
        for record in records {
            let key = record.key();
            if rows.contains_key(&key) || !batch.insert(key.clone()) {
                return Err(StoreError::IntegrityViolation { key });
            }
        }

        for record in records {
            rows.insert(record.key(), record.clone());
        }
        Ok(())
    }
}
