//! Content module - loads and converts posts

pub mod loader;
mod markdown;
mod post;
mod record;

pub use loader::PostLoader;
pub use markdown::MarkdownRenderer;
pub use post::{estimate_reading_time, Post};
pub use record::{parse_date_string, PostRecord};
