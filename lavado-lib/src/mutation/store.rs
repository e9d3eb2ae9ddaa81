//! Remote store abstraction.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::model::Entity;

/// The remote mutation layer for one entity kind.
///
/// Implementations own transport, retries and caching; the flow only sees
/// the outcome.
#[async_trait]
pub trait EntityStore<E>: Send + Sync
where
    E: Entity + Send + Sync,
    E::Key: Send + Sync,
{
    /// Create a record. Returns it as stored (with its assigned key).
    async fn create(&self, record: &E) -> Result<E, StoreError>;

    /// Replace an existing record. Returns it as stored.
    async fn update(&self, record: &E) -> Result<E, StoreError>;

    /// Delete a record by key.
    async fn delete(&self, key: &E::Key) -> Result<(), StoreError>;
}
