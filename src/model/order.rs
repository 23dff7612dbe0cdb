use serde::{Deserialize, Serialize};

/// A committed order row.
///
/// # Resource Framework
/// This struct implements the [`Entity`](crate::framework::Entity) trait,
/// allowing it to be managed by a [`ResourceStore`](crate::framework::ResourceStore).
///
/// See [`impl Entity for Order`](#impl-Entity-for-Order) for details on:
/// - Creation parameters ([`OrderDraft`])
/// - Update parameters (also [`OrderDraft`]: every field except `id` is replaced)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Assigned by the store, never by the caller.
    pub id: u64,
    pub product: String,
    pub price: f64,
    pub quantity: u32,
}

impl Order {
    /// Creates a new Order instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier
    /// * `product` - Product name
    /// * `price` - Unit price
    /// * `quantity` - Number of units
    pub fn new(id: u64, product: impl Into<String>, price: f64, quantity: u32) -> Self {
        Self {
            id,
            product: product.into(),
            price,
            quantity,
        }
    }

    /// Commits a draft under the given id.
    pub fn from_draft(id: u64, draft: OrderDraft) -> Self {
        Self::new(id, draft.product, draft.price, draft.quantity)
    }
}

/// An order that passed validation but has not been given an id yet.
///
/// Produced by [`validate`](crate::order_form::validate) and consumed by the store,
/// both as the create payload and as the update patch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDraft {
    pub product: String,
    pub price: f64,
    pub quantity: u32,
}
