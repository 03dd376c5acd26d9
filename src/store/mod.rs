//! Transactional store - the durable side a [`Session`](crate::session::Session) commits to.

mod error;
mod in_memory;

pub use error::StoreError;
pub use in_memory::InMemoryStore;

/// Records that carry a unique key.
pub trait Keyed {
    fn key(&self) -> String;
}

/// A store that applies batches of records atomically.
pub trait Store: Send + Sync {
    type Record: Clone + Send;

    /// Apply every record, or none of them.
    fn apply(&self, records: &[Self::Record]) -> Result<(), StoreError>;
}

impl<S: Store + ?Sized> Store for std::sync::Arc<S> {
    type Record = S::Record;

    fn apply(&self, records: &[Self::Record]) -> Result<(), StoreError> {
        (**self).apply(records)
    }
}
