//! The order modal: validation of raw input and the open/closed form state.
//!
//! - [`validate`] is a pure function from three raw strings to an
//!   [`OrderDraft`](crate::model::OrderDraft) or a set of [`FieldError`]s.
//! - [`OrderForm`] holds the fields while the modal is shown and runs the
//!   validator on submit. It never touches the store.

pub mod error;
pub mod state;
pub mod validator;

pub use error::*;
pub use state::*;
pub use validator::*;
