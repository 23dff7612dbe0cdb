use crate::framework::{Entity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the read and delete operations.
///
/// This trait reduces boilerplate by providing default implementations for
/// `get`, `delete` and `list`; clients only add the operations whose payload
/// needs resource-specific handling.
#[async_trait]
pub trait ActorClient<T: Entity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<FrameworkError> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Fetch a record by id.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        Ok(self.inner().get(id).await?)
    }

    /// Delete a record by id. Returns the removed record, `None` if there was none.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        Ok(self.inner().delete(id).await?)
    }

    /// All records in insertion order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        Ok(self.inner().list().await?)
    }
}
