use tracing::{debug, info, instrument};
use crate::model::{Order, OrderDraft};
use crate::order_actor::OrderError;
use crate::framework::ResourceClient;
use async_trait::async_trait;
use crate::clients::actor_client::ActorClient;

/// Client for interacting with the Order actor.
///
/// Drafts are expected to come out of the form validator; the store itself
/// does not re-check them.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, draft))]
    pub async fn create_order(&self, draft: OrderDraft) -> Result<Order, OrderError> {
        debug!(?draft, "create_order called");
        let order = self.inner.create(draft).await?;
        info!(order_id = order.id, "Order created");
        Ok(order)
    }

    /// Replaces the fields of order `id`.
    ///
    /// An unknown id is not an error: nothing changes and `Ok(None)` comes back.
    #[instrument(skip(self, draft))]
    pub async fn update_order(&self, id: u64, draft: OrderDraft) -> Result<Option<Order>, OrderError> {
        debug!(?draft, "update_order called");
        Ok(self.inner.update(id, draft).await?)
    }

    /// Fetches order `id`, failing with [`OrderError::NotFound`] when it does not exist.
    pub async fn require(&self, id: u64) -> Result<Order, OrderError> {
        self.get(id).await?.ok_or(OrderError::NotFound(id))
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockClient;
    use crate::framework::FrameworkError;

    #[tokio::test]
    async fn test_require_maps_missing_order_to_not_found() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_get(3).return_ok(None);

        let client = OrderClient::new(mock.client());
        assert_eq!(client.require(3).await, Err(OrderError::NotFound(3)));

        mock.verify();
    }

    #[tokio::test]
    async fn test_framework_errors_become_communication_errors() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_list().return_err(FrameworkError::ActorClosed);

        let client = OrderClient::new(mock.client());
        let result = client.list().await;
        assert_eq!(result, Err(OrderError::ActorCommunicationError("Actor closed".into())));

        mock.verify();
    }
}
