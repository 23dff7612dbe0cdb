//! Turns the raw text of the order form into an [`OrderDraft`].
//!
//! Every field is checked on its own and all failures are reported together, so the
//! form can mark each offending input at once. Numbers are read from the trimmed text
//! with Rust's float grammar (`"19.9"`, `"1e3"`, `"+4"`); anything that is not finite
//! is rejected.

use tracing::debug;

use crate::model::OrderDraft;

use super::error::{Field, FieldError, ValidationErrors};

/// The three inputs exactly as the user typed them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderFormInput {
    pub product: String,
    pub price: String,
    pub quantity: String,
}

impl OrderFormInput {
    pub fn new(product: impl Into<String>, price: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            product: product.into(),
            price: price.into(),
            quantity: quantity.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Product => &self.product,
            Field::Price => &self.price,
            Field::Quantity => &self.quantity,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Product => &mut self.product,
            Field::Price => &mut self.price,
            Field::Quantity => &mut self.quantity,
        };
        *slot = value.into();
    }
}

/// Validates one submission.
///
/// On success the draft carries the trimmed product, the parsed price and the
/// quantity as an integer. On failure every rejected field is in the error map.
pub fn validate(input: &OrderFormInput) -> Result<OrderDraft, ValidationErrors> {
    let product = validate_product(&input.product);
    let price = validate_price(&input.price);
    let quantity = validate_quantity(&input.quantity);

    match (product, price, quantity) {
        (Ok(product), Ok(price), Ok(quantity)) => Ok(OrderDraft { product, price, quantity }),
        (product, price, quantity) => {
            let mut errors = ValidationErrors::new();
            let results = [product.err(), price.err(), quantity.err()];
            for (field, result) in Field::ALL.into_iter().zip(results) {
                if let Some(error) = result {
                    errors.insert(field, error);
                }
            }
            debug!(%errors, "Order form rejected");
            Err(errors)
        }
    }
}

fn validate_product(raw: &str) -> Result<String, FieldError> {
    let product = raw.trim();
    if product.is_empty() {
        return Err(FieldError::Required(Field::Product));
    }
    Ok(product.to_string())
}

fn validate_price(raw: &str) -> Result<f64, FieldError> {
    let price = required_number(raw, Field::Price)?.ok_or(FieldError::InvalidPositiveNumber)?;
    if price <= 0.0 {
        return Err(FieldError::InvalidPositiveNumber);
    }
    Ok(price)
}

fn validate_quantity(raw: &str) -> Result<u32, FieldError> {
    let quantity = required_number(raw, Field::Quantity)?.ok_or(FieldError::InvalidPositiveInteger)?;
    if quantity <= 0.0 || quantity.fract() != 0.0 || quantity > f64::from(u32::MAX) {
        return Err(FieldError::InvalidPositiveInteger);
    }
    // Integral and within range, so the cast is exact.
    Ok(quantity as u32)
}

/// `Err(Required)` for blank input, `Ok(None)` when the text is not a finite number.
fn required_number(raw: &str, field: Field) -> Result<Option<f64>, FieldError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(FieldError::Required(field));
    }
    Ok(text.parse::<f64>().ok().filter(|value| value.is_finite()))
}
