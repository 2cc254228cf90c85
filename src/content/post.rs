//! Post model

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;

/// A blog post loaded from one YAML file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Post {
    /// Slug (output filename stem, unique per run)
    pub slug: String,

    /// Post title
    pub title: String,

    /// Publication date
    pub date: DateTime<Utc>,

    /// Author display name
    pub author: String,

    /// One-paragraph summary shown on the listing card
    pub summary: String,

    /// Raw markdown content
    pub content: String,

    /// Post tags
    pub tags: Vec<String>,

    /// Reading time in minutes, as written or estimated
    pub reading_time: f64,

    /// Source file the post was loaded from
    pub source: PathBuf,
}

impl Post {
    /// Output filename for the post's detail page
    pub fn file_name(&self) -> String {
        format!("{}.html", self.slug)
    }
}

/// Estimate reading time in minutes from a markdown body
pub fn estimate_reading_time(markdown: &str, words_per_minute: u32) -> f64 {
    let words = markdown.split_whitespace().count() as u32;
    let wpm = words_per_minute.max(1);
    f64::from(words.div_ceil(wpm).max(1))
}
