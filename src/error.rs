//! Error types for loading posts and writing pages

use std::path::PathBuf;

use thiserror::Error;

/// Failures while discovering, parsing or validating post files.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to create posts directory {path:?}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read posts directory {path:?}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to read post file {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse post file {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Post file {path:?} must contain a key/value mapping")]
    NotAMapping { path: PathBuf },

    #[error("Post file {path:?} has an unrecognized date: {value:?}")]
    InvalidDate { path: PathBuf, value: String },

    #[error("Post file {path:?} has a slug that is not URL-safe: {slug:?}")]
    InvalidSlug { path: PathBuf, slug: String },

    #[error("Post file {path:?} uses slug {slug:?}, which is reserved for the listing page")]
    ReservedSlug { path: PathBuf, slug: String },

    #[error("Slug {slug:?} from {path:?} is already used by {first:?}")]
    DuplicateSlug {
        slug: String,
        first: PathBuf,
        path: PathBuf,
    },
}

/// Failures while writing generated pages.
#[derive(Error, Debug)]
pub enum FsError {
    #[error("Failed to create output directory {path:?}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Page write task did not finish")]
    Join(#[from] tokio::task::JoinError),
}

/// Anything that aborts a generation run.
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Fs(#[from] FsError),

    #[error("Failed to render {page}")]
    Render {
        page: String,
        #[source]
        source: tera::Error,
    },
}
