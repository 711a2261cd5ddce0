//! Export of computed layouts as JSON and CSV.

mod layout;

pub use layout::*;
