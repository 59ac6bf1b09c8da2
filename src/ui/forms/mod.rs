//! Form rendering module
//!
//! - `field_renderer`: boxed field rendering with inline error text
//! - `registration_form`: the project registration screen

mod field_renderer;
mod registration_form;

pub use registration_form::draw;
