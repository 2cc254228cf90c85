//! Site configuration (_config.yml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration, shared read-only by every rendered page
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Head metadata
    pub title_suffix: String,
    pub description: String,

    // Navigation
    pub nav_links: Vec<NavLink>,
    pub cta: CallToAction,
    /// Nav label marked active on article pages
    pub active_label: String,

    // Footer
    pub footer_description: String,
    pub contact_email: String,
    pub copyright: String,

    #[serde(default)]
    pub assets: AssetPaths,
    #[serde(default)]
    pub listing: ListingCopy,

    // URL
    pub articles_base: String,

    // Directory
    pub posts_dir: String,
    pub output_dir: String,

    // Writing
    pub words_per_minute: u32,
    pub highlight_code: bool,
    pub highlight_theme: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title_suffix: "Projxon AI".to_string(),
            description: "Projxon AI — quietly building local-first intelligence.".to_string(),

            nav_links: vec![
                NavLink::new("/", "Home"),
                NavLink::new("/solutions.html", "Vision"),
                NavLink::new("/about.html", "About"),
                NavLink::new("/team.html", "Team"),
                NavLink::new("/articles/index.html", "Articles"),
                NavLink::new("/contact.html", "Contact"),
            ],
            cta: CallToAction::default(),
            active_label: "Articles".to_string(),

            footer_description: "Building a local-first AI companion with a tiny, ambitious team. No hype—just thoughtful work.".to_string(),
            contact_email: "support@projxon.ai".to_string(),
            copyright: "&copy; 2025 Projxon AI. All rights reserved.".to_string(),

            assets: AssetPaths::default(),
            listing: ListingCopy::default(),

            articles_base: "/articles".to_string(),

            posts_dir: "content/posts".to_string(),
            output_dir: "articles".to_string(),

            words_per_minute: 200,
            highlight_code: false,
            highlight_theme: "base16-ocean.dark".to_string(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
        let config: SiteConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {:?}", path))?;
        Ok(config)
    }

    /// URL of a post's detail page
    pub fn article_url(&self, slug: &str) -> String {
        format!("{}/{}.html", self.articles_base.trim_end_matches('/'), slug)
    }
}

/// A single navigation entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub href: String,
    pub label: String,
}

impl NavLink {
    pub fn new(href: &str, label: &str) -> Self {
        Self {
            href: href.to_string(),
            label: label.to_string(),
        }
    }
}

/// Call-to-action button shown in the nav bar and mobile menu
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CallToAction {
    pub href: String,
    pub label: String,
}

impl Default for CallToAction {
    fn default() -> Self {
        Self {
            href: "mailto:support@projxon.ai".to_string(),
            label: "Join waitlist".to_string(),
        }
    }
}

/// Absolute paths of the static assets every page references
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetPaths {
    pub stylesheet: String,
    pub script: String,
    pub icon: String,
    pub logo_dark: String,
    pub logo_light: String,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            stylesheet: "/css/style.css".to_string(),
            script: "/js/main.js".to_string(),
            icon: "/static/assets/images/logo/icon.svg".to_string(),
            logo_dark: "/static/assets/images/logo/wordmark_dark.svg".to_string(),
            logo_light: "/static/assets/images/logo/wordmark_light.svg".to_string(),
        }
    }
}

/// Fixed copy for the listing page header
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingCopy {
    pub badge: String,
    pub heading: String,
    pub intro: String,
}

impl Default for ListingCopy {
    fn default() -> Self {
        Self {
            badge: "Articles".to_string(),
            heading: "Notes from the Projxon team".to_string(),
            intro: "Occasional updates about what we're building, why local matters, and how we design for calm.".to_string(),
        }
    }
}
