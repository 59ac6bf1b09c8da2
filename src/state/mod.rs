//! Application state module

mod app_state;
mod forms;
mod payload;
mod registry;
mod validation;

pub use app_state::*;
pub use forms::*;
pub use payload::*;
pub use registry::*;
pub use validation::*;
