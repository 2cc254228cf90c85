//! articles-gen: static generator for the articles section of the site
//!
//! Reads one YAML file per post from the content directory and renders a
//! listing page plus one detail page per post, all wrapped in the shared
//! site layout.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod helpers;
pub mod templates;

use anyhow::Result;
use std::path::{Path, PathBuf};

pub use error::{FsError, GenerateError, LoadError};

/// The site being generated
#[derive(Debug, Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Directory holding the post YAML files
    pub posts_dir: PathBuf,
    /// Output directory for generated pages
    pub output_dir: PathBuf,
}

impl Site {
    /// Create a site from a base directory, reading `_config.yml` if present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create a site with an explicit configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let posts_dir = base_dir.join(&config.posts_dir);
        let output_dir = base_dir.join(&config.output_dir);

        Self {
            config,
            base_dir,
            posts_dir,
            output_dir,
        }
    }

    /// Generate the listing and detail pages, returning the post count
    pub async fn generate(&self) -> Result<usize, GenerateError> {
        commands::generate::run(self).await
    }
}
