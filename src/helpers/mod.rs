//! Helper functions for page templates

mod date;

pub use date::*;
