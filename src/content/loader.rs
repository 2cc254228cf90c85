//! Content loader - loads posts from the posts directory

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::post::estimate_reading_time;
use super::record::PostRecord;
use super::Post;
use crate::error::LoadError;

lazy_static! {
    static ref SLUG_RE: Regex = Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]*$").unwrap();
}

/// Slugs whose page name is taken by the listing page
const RESERVED_SLUGS: &[&str] = &["index"];

/// Loads posts from a single flat directory of YAML files
pub struct PostLoader {
    posts_dir: PathBuf,
    words_per_minute: u32,
}

impl PostLoader {
    /// Create a new post loader
    pub fn new<P: Into<PathBuf>>(posts_dir: P) -> Self {
        Self {
            posts_dir: posts_dir.into(),
            words_per_minute: 200,
        }
    }

    /// Reading speed used when a post has no `readingTime`
    pub fn words_per_minute(mut self, wpm: u32) -> Self {
        self.words_per_minute = wpm;
        self
    }

    /// Load all posts, newest first
    pub fn load(&self) -> Result<Vec<Post>, LoadError> {
        fs::create_dir_all(&self.posts_dir).map_err(|source| LoadError::CreateDir {
            path: self.posts_dir.clone(),
            source,
        })?;

        let mut posts: Vec<Post> = Vec::new();
        let mut seen: HashMap<String, PathBuf> = HashMap::new();

        for entry in WalkDir::new(&self.posts_dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|source| LoadError::ReadDir {
                path: self.posts_dir.clone(),
                source,
            })?;
            let path = entry.path();

            if !entry.file_type().is_file() || !is_yaml_file(path) {
                tracing::debug!("Skipping {:?}", path);
                continue;
            }

            let post = self.load_post(path)?;
            if let Some(first) = seen.get(&post.slug) {
                return Err(LoadError::DuplicateSlug {
                    slug: post.slug,
                    first: first.clone(),
                    path: path.to_path_buf(),
                });
            }
            seen.insert(post.slug.clone(), path.to_path_buf());

            tracing::debug!("Loaded post {:?} from {:?}", post.slug, path);
            posts.push(post);
        }

        // Stable: equal dates keep directory order
        posts.sort_by(|a, b| b.date.cmp(&a.date));

        tracing::info!("Loaded {} posts from {:?}", posts.len(), self.posts_dir);
        Ok(posts)
    }

    /// Load a single post from a file
    fn load_post(&self, path: &Path) -> Result<Post, LoadError> {
        let raw = fs::read_to_string(path).map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let value: serde_yaml::Value =
            serde_yaml::from_str(&raw).map_err(|source| LoadError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        if !value.is_mapping() {
            return Err(LoadError::NotAMapping {
                path: path.to_path_buf(),
            });
        }
        let record: PostRecord =
            serde_yaml::from_value(value).map_err(|source| LoadError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let date = record.parse_date().ok_or_else(|| LoadError::InvalidDate {
            path: path.to_path_buf(),
            value: record.date.clone(),
        })?;

        let slug = match record.explicit_slug() {
            Some(slug) => slug.to_string(),
            None => file_stem(path),
        };
        if !SLUG_RE.is_match(&slug) {
            return Err(LoadError::InvalidSlug {
                path: path.to_path_buf(),
                slug,
            });
        }
        if RESERVED_SLUGS.contains(&slug.as_str()) {
            return Err(LoadError::ReservedSlug {
                path: path.to_path_buf(),
                slug,
            });
        }

        let reading_time = record
            .reading_time
            .unwrap_or_else(|| estimate_reading_time(&record.content, self.words_per_minute));

        Ok(Post {
            slug,
            title: record.title,
            date,
            author: record.author,
            summary: record.summary,
            content: record.content,
            tags: record.tags,
            reading_time,
            source: path.to_path_buf(),
        })
    }
}

/// Check if a file is a YAML document
fn is_yaml_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "yaml" || e == "yml")
        .unwrap_or(false)
}

/// Filename with its extension stripped
fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_post(dir: &Path, name: &str, extra: &str, date: &str) {
        let body = format!(
            "{extra}title: Post {name}\ndate: {date}\nauthor: Ada\nsummary: About {name}\ncontent: |\n  Hello from {name}.\n"
        );
        fs::write(dir.join(name), body).unwrap();
    }

    #[test]
    fn test_missing_dir_is_created_and_empty() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("content").join("posts");
        let posts = PostLoader::new(&dir).load().unwrap();
        assert!(posts.is_empty());
        assert!(dir.is_dir());
    }

    #[test]
    fn test_only_yaml_files_are_loaded() {
        let tmp = TempDir::new().unwrap();
        write_post(tmp.path(), "a.yaml", "", "2025-01-01");
        write_post(tmp.path(), "b.yml", "", "2025-01-02");
        fs::write(tmp.path().join("notes.md"), "# not a post").unwrap();
        fs::write(tmp.path().join("c.yaml.bak"), "title: [").unwrap();
        fs::create_dir(tmp.path().join("drafts.yaml")).unwrap();

        let posts = PostLoader::new(tmp.path()).load().unwrap();
        let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["b", "a"]);
    }

    #[test]
    fn test_slug_from_field_or_filename() {
        let tmp = TempDir::new().unwrap();
        write_post(tmp.path(), "first-post.yaml", "", "2025-01-01");
        write_post(tmp.path(), "second.yaml", "slug: custom-slug\n", "2025-01-02");

        let posts = PostLoader::new(tmp.path()).load().unwrap();
        assert_eq!(posts[0].slug, "custom-slug");
        assert_eq!(posts[1].slug, "first-post");
        assert_eq!(posts[1].file_name(), "first-post.html");
    }

    #[test]
    fn test_sorted_newest_first_and_stable() {
        let tmp = TempDir::new().unwrap();
        write_post(tmp.path(), "a.yaml", "", "2025-01-05");
        write_post(tmp.path(), "b.yaml", "", "2025-03-01");
        write_post(tmp.path(), "c.yaml", "", "2025-01-05");
        write_post(tmp.path(), "d.yaml", "", "2024-12-31");

        let posts = PostLoader::new(tmp.path()).load().unwrap();
        let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["b", "a", "c", "d"]);
    }

    #[test]
    fn test_reading_time_explicit_or_estimated() {
        let tmp = TempDir::new().unwrap();
        write_post(tmp.path(), "a.yaml", "readingTime: 7\n", "2025-01-02");
        write_post(tmp.path(), "b.yaml", "", "2025-01-01");

        let posts = PostLoader::new(tmp.path()).load().unwrap();
        assert_eq!(posts[0].reading_time, 7.0);
        assert_eq!(posts[1].reading_time, 1.0);
    }

    #[test]
    fn test_malformed_yaml_names_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("broken.yaml"), "title: [unclosed\n").unwrap();

        let err = PostLoader::new(tmp.path()).load().unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
        assert!(err.to_string().contains("broken.yaml"));
    }

    #[test]
    fn test_non_mapping_document() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("list.yaml"), "- one\n- two\n").unwrap();

        let err = PostLoader::new(tmp.path()).load().unwrap_err();
        assert!(matches!(err, LoadError::NotAMapping { .. }));
    }

    #[test]
    fn test_missing_field_is_parse_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("thin.yaml"), "title: Only a title\n").unwrap();

        let err = PostLoader::new(tmp.path()).load().unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn test_invalid_date() {
        let tmp = TempDir::new().unwrap();
        write_post(tmp.path(), "a.yaml", "", "someday");

        let err = PostLoader::new(tmp.path()).load().unwrap_err();
        assert!(matches!(err, LoadError::InvalidDate { .. }));
    }

    #[test]
    fn test_duplicate_slug_is_rejected() {
        let tmp = TempDir::new().unwrap();
        write_post(tmp.path(), "a.yaml", "slug: shared\n", "2025-01-01");
        write_post(tmp.path(), "b.yaml", "slug: shared\n", "2025-01-02");

        let err = PostLoader::new(tmp.path()).load().unwrap_err();
        match err {
            LoadError::DuplicateSlug { slug, first, path } => {
                assert_eq!(slug, "shared");
                assert!(first.ends_with("a.yaml"));
                assert!(path.ends_with("b.yaml"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_fractional_reading_time_is_kept() {
        let tmp = TempDir::new().unwrap();
        write_post(tmp.path(), "a.yaml", "readingTime: 4.5\n", "2025-01-02");

        let posts = PostLoader::new(tmp.path()).load().unwrap();
        assert_eq!(posts[0].reading_time, 4.5);
    }

    #[test]
    fn test_index_slug_from_filename_is_reserved() {
        let tmp = TempDir::new().unwrap();
        write_post(tmp.path(), "index.yaml", "", "2025-01-01");

        let err = PostLoader::new(tmp.path()).load().unwrap_err();
        match err {
            LoadError::ReservedSlug { slug, path } => {
                assert_eq!(slug, "index");
                assert!(path.ends_with("index.yaml"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_index_slug_from_field_is_reserved() {
        let tmp = TempDir::new().unwrap();
        write_post(tmp.path(), "welcome.yaml", "slug: index\n", "2025-01-01");

        let err = PostLoader::new(tmp.path()).load().unwrap_err();
        assert!(matches!(err, LoadError::ReservedSlug { .. }));
    }

    #[test]
    fn test_unsafe_slug_is_rejected() {
        let tmp = TempDir::new().unwrap();
        write_post(tmp.path(), "a.yaml", "slug: ../escape\n", "2025-01-01");

        let err = PostLoader::new(tmp.path()).load().unwrap_err();
        assert!(matches!(err, LoadError::InvalidSlug { .. }));
    }
}
