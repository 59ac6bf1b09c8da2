//! Form domain layer
//!
//! Field values plus the registration form controller that owns them.

mod field;
mod form_state;

pub use field::{FieldValue, FormField};
pub use form_state::{
    FieldValues, FormError, FormPhase, RegistrationForm, SubmitOutcome, DEFAULT_CONFIRMATION,
};
