//! Domain models for the calendar layout engine.

mod appointment;
mod layout;

pub use appointment::*;
pub use layout::*;
