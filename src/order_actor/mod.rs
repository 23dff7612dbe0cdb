//! Order-specific resource logic and entity implementation.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::OrderClient;
use crate::framework::{FrameworkError, ResourceActor, ResourceStore};
use crate::model::Order;

/// Creates a new Order actor, seeded with `orders`, and its client.
///
/// # Errors
/// [`FrameworkError::DuplicateId`] if two seed orders share an id.
pub fn new(buffer_size: usize, orders: Vec<Order>) -> Result<(ResourceActor<Order>, OrderClient), FrameworkError> {
    let store = ResourceStore::from_records(orders)?;
    let (actor, generic_client) = ResourceActor::new(buffer_size, store);
    let client = OrderClient::new(generic_client);

    Ok((actor, client))
}
