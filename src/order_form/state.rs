//! Open/closed state of the order modal.

use tracing::debug;

use crate::model::{Order, OrderDraft};

use super::error::{Field, FormError, ValidationErrors};
use super::validator::{validate, OrderFormInput};

/// What a save of the open form will do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    /// Opened with "new": saving creates an order.
    New,
    /// Opened with "edit" on an existing row: saving replaces that order's fields.
    Edit(u64),
}

/// A validated save, ready for the store.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Create(OrderDraft),
    Update(u64, OrderDraft),
}

#[derive(Debug, Clone, Default, PartialEq)]
enum FormState {
    #[default]
    Closed,
    Open {
        mode: FormMode,
        input: OrderFormInput,
        errors: ValidationErrors,
    },
}

/// The order modal: three raw text fields, their inline errors, and whether it is shown.
///
/// ```text
/// Closed --open_new--> Open(New, empty)
/// Closed --open_edit-> Open(Edit(id), prefilled)
/// Open   --submit----> Open (invalid, errors shown) | Submission (caller closes after saving)
/// Open   --close-----> Closed (fields discarded)
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderForm {
    state: FormState,
}

impl OrderForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the form empty, for a new order.
    pub fn open_new(&mut self) {
        self.open(FormMode::New, OrderFormInput::default());
    }

    /// Opens the form prefilled with an existing order's values.
    pub fn open_edit(&mut self, order: &Order) {
        let input = OrderFormInput::new(
            order.product.clone(),
            order.price.to_string(),
            order.quantity.to_string(),
        );
        self.open(FormMode::Edit(order.id), input);
    }

    fn open(&mut self, mode: FormMode, input: OrderFormInput) {
        debug!(?mode, "Order form opened");
        self.state = FormState::Open {
            mode,
            input,
            errors: ValidationErrors::new(),
        };
    }

    /// Discards the fields and closes the form. Closing a closed form does nothing.
    pub fn close(&mut self) {
        if self.is_open() {
            debug!("Order form closed");
        }
        self.state = FormState::Closed;
    }

    /// Replaces one raw field and clears its pending error. Ignored while closed.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        if let FormState::Open { input, errors, .. } = &mut self.state {
            input.set(field, value);
            errors.remove(field);
        }
    }

    /// Validates the fields.
    ///
    /// On success the form is left open; the caller closes it once the store has
    /// taken the submission. On failure the errors are kept for display and returned.
    pub fn submit(&mut self) -> Result<Submission, FormError> {
        let FormState::Open { mode, input, errors } = &mut self.state else {
            return Err(FormError::NotOpen);
        };
        match validate(input) {
            Ok(draft) => {
                *errors = ValidationErrors::new();
                Ok(match *mode {
                    FormMode::New => Submission::Create(draft),
                    FormMode::Edit(id) => Submission::Update(id, draft),
                })
            }
            Err(rejected) => {
                *errors = rejected.clone();
                Err(FormError::Invalid(rejected))
            }
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, FormState::Open { .. })
    }

    pub fn mode(&self) -> Option<FormMode> {
        match &self.state {
            FormState::Open { mode, .. } => Some(*mode),
            FormState::Closed => None,
        }
    }

    /// Modal heading for the current mode.
    pub fn title(&self) -> Option<&'static str> {
        self.mode().map(|mode| match mode {
            FormMode::New => "New order",
            FormMode::Edit(_) => "Edit order",
        })
    }

    pub fn input(&self) -> Option<&OrderFormInput> {
        match &self.state {
            FormState::Open { input, .. } => Some(input),
            FormState::Closed => None,
        }
    }

    /// Current text of one field, `None` while closed.
    pub fn field(&self, field: Field) -> Option<&str> {
        self.input().map(|input| input.get(field))
    }

    pub fn errors(&self) -> Option<&ValidationErrors> {
        match &self.state {
            FormState::Open { errors, .. } => Some(errors),
            FormState::Closed => None,
        }
    }
}
