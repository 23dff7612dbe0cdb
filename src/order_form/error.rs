//! Error types for the order form.

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

/// One of the three inputs of the order form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Product,
    Price,
    Quantity,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Product, Field::Price, Field::Quantity];
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Product => "Product",
            Field::Price => "Price",
            Field::Quantity => "Quantity",
        })
    }
}

/// Why a single field was rejected. The `Display` output is the inline message.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum FieldError {
    /// The field was left blank (empty or whitespace only).
    #[error("{0} is required")]
    Required(Field),

    /// The price is not a number, or not greater than zero.
    #[error("Enter a valid price greater than zero")]
    InvalidPositiveNumber,

    /// The quantity is not a whole number greater than zero.
    #[error("Enter a valid quantity (a whole number greater than zero)")]
    InvalidPositiveInteger,
}

/// Field-level errors from one validation pass, keyed and ordered by [`Field`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("invalid order: {}", summarize(.0))]
pub struct ValidationErrors(BTreeMap<Field, FieldError>);

fn summarize(errors: &BTreeMap<Field, FieldError>) -> String {
    errors
        .iter()
        .map(|(field, error)| format!("{}: {error}", field.to_string().to_lowercase()))
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, error: FieldError) {
        self.0.insert(field, error);
    }

    /// Clears the error of one field, e.g. when the user edits it.
    pub fn remove(&mut self, field: Field) -> Option<FieldError> {
        self.0.remove(&field)
    }

    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.0.get(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, Field, FieldError> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = (&'a Field, &'a FieldError);
    type IntoIter = btree_map::Iter<'a, Field, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Errors raised by the form state machine.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FormError {
    /// Submit arrived while the form was closed.
    #[error("order form is not open")]
    NotOpen,

    /// The input did not validate. The form stays open with these errors.
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_message_names_the_field() {
        assert_eq!(FieldError::Required(Field::Quantity).to_string(), "Quantity is required");
    }

    #[test]
    fn test_errors_display_in_field_order() {
        let mut errors = ValidationErrors::new();
        errors.insert(Field::Quantity, FieldError::InvalidPositiveInteger);
        errors.insert(Field::Product, FieldError::Required(Field::Product));

        assert_eq!(
            errors.to_string(),
            "invalid order: product: Product is required; \
             quantity: Enter a valid quantity (a whole number greater than zero)"
        );
    }
}
