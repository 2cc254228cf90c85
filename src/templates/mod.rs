//! Built-in site templates using the Tera template engine
//!
//! The layout shell, nav, footer and article pages are embedded in the
//! binary. Autoescaping is off: title, summary, author and tag values are
//! authored in-house and may carry inline HTML, so they are interpolated
//! as written. Only the markdown body goes through a converter.

use std::collections::HashMap;
use tera::{Context, Tera};

use crate::config::SiteConfig;
use crate::content::{MarkdownRenderer, Post};
use crate::helpers::{format_date, format_minutes};

/// Body class used unless a page asks for another style
pub const DEFAULT_BODY_CLASS: &str = "page page--light";

/// Parameters for wrapping a body in the layout shell
#[derive(Debug, Clone, Copy)]
pub struct Layout<'a> {
    pub title: &'a str,
    pub body: &'a str,
    pub active_nav: &'a str,
    pub body_class: &'a str,
}

impl<'a> Layout<'a> {
    pub fn new(title: &'a str, body: &'a str) -> Self {
        Self {
            title,
            body,
            active_nav: "",
            body_class: DEFAULT_BODY_CLASS,
        }
    }

    /// Mark the nav link with this exact label as active
    pub fn active(mut self, label: &'a str) -> Self {
        self.active_nav = label;
        self
    }

    pub fn body_class(mut self, class: &'a str) -> Self {
        self.body_class = class;
        self
    }
}

/// Template renderer for the articles section
pub struct TemplateRenderer {
    tera: Tera,
    config: SiteConfig,
    markdown: MarkdownRenderer,
}

impl TemplateRenderer {
    /// Create a renderer with all templates loaded
    pub fn new(config: SiteConfig) -> tera::Result<Self> {
        let mut tera = Tera::default();

        // Trusted content, see module docs
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("projxon/layout.html")),
            ("listing.html", include_str!("projxon/listing.html")),
            ("detail.html", include_str!("projxon/detail.html")),
            // Partials
            (
                "partials/nav.html",
                include_str!("projxon/partials/nav.html"),
            ),
            (
                "partials/footer.html",
                include_str!("projxon/partials/footer.html"),
            ),
            (
                "partials/card.html",
                include_str!("projxon/partials/card.html"),
            ),
        ])?;

        tera.register_filter("display_date", display_date_filter);
        tera.register_filter("minutes", minutes_filter);

        let markdown = MarkdownRenderer::from_config(&config);
        Ok(Self {
            tera,
            config,
            markdown,
        })
    }

    /// Context shared by every page
    fn base_context(&self, layout: &Layout) -> Context {
        let mut context = Context::new();
        context.insert("site", &self.config);
        context.insert(
            "articles_base",
            self.config.articles_base.trim_end_matches('/'),
        );
        context.insert("page_title", layout.title);
        context.insert("body", layout.body);
        context.insert("active_nav", layout.active_nav);
        context.insert("body_class", layout.body_class);
        context
    }

    /// Wrap arbitrary body HTML in the layout shell
    pub fn layout(&self, layout: &Layout) -> tera::Result<String> {
        self.tera.render("layout.html", &self.base_context(layout))
    }

    /// Navigation bar plus the mobile menu
    pub fn nav(&self, active: &str) -> tera::Result<String> {
        let layout = Layout::new("", "").active(active);
        self.tera
            .render("partials/nav.html", &self.base_context(&layout))
    }

    /// Site footer
    pub fn footer(&self) -> tera::Result<String> {
        let layout = Layout::new("", "");
        self.tera
            .render("partials/footer.html", &self.base_context(&layout))
    }

    /// Listing page with one card per post, in the order given
    pub fn listing(&self, posts: &[Post]) -> tera::Result<String> {
        let layout = Layout::new("Articles", "").active(&self.config.active_label);
        let mut context = self.base_context(&layout);
        context.insert("posts", posts);
        self.tera.render("listing.html", &context)
    }

    /// Full article page for one post
    pub fn detail(&self, post: &Post) -> tera::Result<String> {
        let layout = Layout::new(&post.title, "").active(&self.config.active_label);
        let mut context = self.base_context(&layout);
        context.insert("post", post);
        context.insert("content", &self.markdown.render(&post.content));
        self.tera.render("detail.html", &context)
    }
}

/// Tera filter: RFC 3339 timestamp to "Jan 5, 2025"
fn display_date_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("display_date", "value", String, value);
    let date = chrono::DateTime::parse_from_rfc3339(&s)
        .map_err(|e| tera::Error::msg(format!("display_date: {:?}: {}", s, e)))?;
    Ok(tera::Value::String(format_date(&date)))
}

/// Tera filter: reading time without a trailing ".0"
fn minutes_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let minutes = tera::try_get_value!("minutes", "value", f64, value);
    Ok(tera::Value::String(format_minutes(minutes)))
}
