//! Entity trait implementation for the Order domain type.
//!
//! This module contains the [`Entity`] trait implementation
//! that enables [`Order`] to be managed by the generic [`crate::framework::ResourceStore`].

use crate::framework::Entity;
use crate::model::{Order, OrderDraft};

impl Entity for Order {
    type Id = u64;
    type CreateParams = OrderDraft;
    type UpdateParams = OrderDraft;

    fn id(&self) -> &u64 {
        &self.id
    }

    /// Creates a new Order from a validated draft.
    fn from_create_params(id: u64, params: OrderDraft) -> Self {
        Self::from_draft(id, params)
    }

    /// Replaces product, price and quantity. The id is kept.
    fn on_update(&mut self, update: OrderDraft) {
        self.product = update.product;
        self.price = update.price;
        self.quantity = update.quantity;
    }

    /// Seeded rows must satisfy what the form would have enforced.
    fn check(&self) -> Result<(), String> {
        if self.product.trim().is_empty() {
            return Err("product is blank".to_string());
        }
        if !(self.price.is_finite() && self.price > 0.0) {
            return Err(format!("price {} is not a positive number", self.price));
        }
        if self.quantity == 0 {
            return Err("quantity is zero".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_replaces_every_field_but_id() {
        let mut order = Order::new(1, "Fan", 100.0, 1);
        order.on_update(OrderDraft { product: "Heater".into(), price: 80.5, quantity: 2 });
        assert_eq!(order, Order::new(1, "Heater", 80.5, 2));
    }

    #[test]
    fn test_check_accepts_a_valid_row() {
        assert_eq!(Order::new(1, "Fan", 100.0, 1).check(), Ok(()));
    }

    #[test]
    fn test_check_rejects_rows_the_form_would_reject() {
        assert!(Order::new(1, "   ", 100.0, 1).check().is_err());
        assert!(Order::new(2, "Fan", -5.0, 1).check().is_err());
        assert!(Order::new(3, "Fan", 0.0, 1).check().is_err());
        assert!(Order::new(4, "Fan", f64::NAN, 1).check().is_err());
        assert!(Order::new(5, "Fan", f64::INFINITY, 1).check().is_err());
        assert!(Order::new(6, "Fan", 100.0, 0).check().is_err());
    }
}
