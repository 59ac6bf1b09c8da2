//! Project registration form with category-dependent validation
//!
//! The form domain lives in [`state`]: the field registry, the registration
//! form controller, validation rules and the accepted payload. [`app`] and
//! [`ui`] wrap it in a terminal front end and [`sink`] receives accepted
//! registrations. [`logging`] keeps log output in a file while the terminal
//! is in use.

pub mod app;
pub mod config;
pub mod logging;
pub mod sink;
pub mod state;
pub mod ui;
