//! Generate the articles pages

use std::path::PathBuf;
use tokio::task::JoinSet;

use crate::content::PostLoader;
use crate::error::{FsError, GenerateError};
use crate::templates::TemplateRenderer;
use crate::Site;

/// Load posts, then write `index.html` and one `<slug>.html` per post
///
/// Nothing is written unless every post loads. Detail pages are written
/// concurrently; the first failed write aborts the rest.
pub async fn run(site: &Site) -> Result<usize, GenerateError> {
    let start = std::time::Instant::now();

    let posts = PostLoader::new(&site.posts_dir)
        .words_per_minute(site.config.words_per_minute)
        .load()?;

    tokio::fs::create_dir_all(&site.output_dir)
        .await
        .map_err(|source| FsError::CreateDir {
            path: site.output_dir.clone(),
            source,
        })?;

    let renderer =
        TemplateRenderer::new(site.config.clone()).map_err(|source| GenerateError::Render {
            page: "templates".to_string(),
            source,
        })?;

    let listing = renderer
        .listing(&posts)
        .map_err(|source| GenerateError::Render {
            page: "index.html".to_string(),
            source,
        })?;
    write_page(site.output_dir.join("index.html"), listing).await?;

    let mut writes = JoinSet::new();
    for post in &posts {
        let file_name = post.file_name();
        let html = renderer
            .detail(post)
            .map_err(|source| GenerateError::Render {
                page: file_name.clone(),
                source,
            })?;
        writes.spawn(write_page(site.output_dir.join(file_name), html));
    }

    while let Some(joined) = writes.join_next().await {
        if let Err(e) = joined.map_err(FsError::from).and_then(|written| written) {
            writes.abort_all();
            return Err(e.into());
        }
    }

    let duration = start.elapsed();
    tracing::info!(
        "Generated {} article page(s) in {:.2}s",
        posts.len(),
        duration.as_secs_f64()
    );

    Ok(posts.len())
}

/// Write one rendered page
async fn write_page(path: PathBuf, html: String) -> Result<(), FsError> {
    tokio::fs::write(&path, html)
        .await
        .map_err(|source| FsError::Write {
            path: path.clone(),
            source,
        })?;
    tracing::debug!("Generated: {:?}", path);
    Ok(())
}
