//! Content collection and validation.
//!
//! Walks the collection subdirectories of the content directory, parses each
//! file's front matter, and validates the record against its collection
//! schema. What happens to an invalid entry is the build pipeline's call:
//! strict mode fails the collection pass, lenient mode skips the entry with a
//! logged warning.

use std::{
    fs,
    path::{Path, PathBuf},
};

use folio_core::{
    BlogEntry, Collection, Config, CoreError, Entry, ProjectEntry, SchemaValidationError,
    frontmatter, validate_entry,
};
use rayon::prelude::*;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Content collection errors.
#[derive(Debug, Error)]
pub enum CollectorError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Front matter could not be parsed.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An entry failed schema validation.
    #[error("invalid entry at {path}: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: SchemaValidationError,
    },
}

/// Result type for collector operations.
pub type Result<T> = std::result::Result<T, CollectorError>;

/// A validated content document: slug, typed entry, and the body below the
/// front matter.
#[derive(Debug, Clone)]
pub struct Document<T> {
    /// URL slug derived from the file path within its collection.
    pub slug: String,

    /// Validated front matter record.
    pub entry: T,

    /// Raw body content.
    pub body: String,
}

/// Collected site content.
#[derive(Debug, Default)]
pub struct SiteContent {
    /// Validated `projects` entries.
    pub projects: Vec<Document<ProjectEntry>>,

    /// Validated `blog` entries.
    pub posts: Vec<Document<BlogEntry>>,

    /// Entries skipped in lenient mode.
    pub skipped: usize,
}

impl SiteContent {
    /// Total number of validated documents.
    pub fn len(&self) -> usize {
        self.projects.len() + self.posts.len()
    }

    /// Whether no documents were collected.
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty() && self.posts.is_empty()
    }

    /// Projects sorted by publication date, newest first.
    pub fn projects_by_date(&self) -> Vec<&Document<ProjectEntry>> {
        let mut projects: Vec<_> = self.projects.iter().collect();
        projects.sort_by(|a, b| {
            b.entry
                .pub_date
                .cmp(&a.entry.pub_date)
                .then_with(|| a.entry.title.cmp(&b.entry.title))
        });
        projects
    }

    /// Featured projects, newest first.
    pub fn featured_projects(&self) -> Vec<&Document<ProjectEntry>> {
        self.projects_by_date()
            .into_iter()
            .filter(|doc| doc.entry.featured)
            .collect()
    }

    /// Posts ordered by their date string, newest first.
    ///
    /// The blog schema keeps `date` as a plain string, so ordering is
    /// lexicographic; ISO-formatted dates sort chronologically.
    pub fn posts_by_date(&self) -> Vec<&Document<BlogEntry>> {
        let mut posts: Vec<_> = self.posts.iter().collect();
        posts.sort_by(|a, b| {
            b.entry
                .date
                .cmp(&a.entry.date)
                .then_with(|| a.entry.title.cmp(&b.entry.title))
        });
        posts
    }
}

/// Content collector that walks collection directories and validates files.
#[derive(Debug)]
pub struct ContentCollector {
    config: Config,
    content_dir: PathBuf,
}

impl ContentCollector {
    /// Create a new content collector.
    #[must_use]
    pub fn new(config: Config, content_dir: impl Into<PathBuf>) -> Self {
        Self {
            config,
            content_dir: content_dir.into(),
        }
    }

    /// Collect and validate all content.
    ///
    /// Entries validate in parallel; each validation is independent and
    /// stateless, so no ordering between them matters.
    pub fn collect(&self) -> Result<SiteContent> {
        info!(dir = %self.content_dir.display(), "collecting content");

        let mut content = SiteContent::default();

        for collection in Collection::all() {
            let dir = self.content_dir.join(collection.name());
            let files = find_content_files(&dir)?;
            info!(
                collection = collection.name(),
                count = files.len(),
                "found content files"
            );

            let results: Vec<_> = files
                .par_iter()
                .map(|path| self.load_file(collection, &dir, path))
                .collect();

            for result in results {
                match result {
                    Ok((slug, Entry::Project(entry), body)) => {
                        content.projects.push(Document { slug, entry, body });
                    }
                    Ok((slug, Entry::Blog(entry), body)) => {
                        content.posts.push(Document { slug, entry, body });
                    }
                    Err(e) if self.config.build.strict => return Err(e),
                    Err(e) => {
                        warn!(error = %e, "skipping invalid entry");
                        content.skipped += 1;
                    }
                }
            }
        }

        info!(
            projects = content.projects.len(),
            posts = content.posts.len(),
            skipped = content.skipped,
            "content collection complete"
        );

        Ok(content)
    }

    /// Load and validate a single content file.
    fn load_file(
        &self,
        collection: Collection,
        collection_dir: &Path,
        path: &Path,
    ) -> Result<(String, Entry, String)> {
        debug!(path = %path.display(), "validating file");

        let raw = fs::read_to_string(path)?;
        let (record, body) = frontmatter::parse_raw(&raw, path)?;

        let entry = validate_entry(collection, &record).map_err(|source| {
            CollectorError::Invalid {
                path: path.to_path_buf(),
                source,
            }
        })?;

        let relative = path.strip_prefix(collection_dir).unwrap_or(path);
        Ok((slug_for(relative), entry, body))
    }
}

/// Derive a slug from a path relative to its collection directory.
///
/// `hello.md` and `hello/index.md` both map to `hello`.
fn slug_for(relative: &Path) -> String {
    let parent = relative.parent().unwrap_or(Path::new(""));
    let stem = relative
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    let slug = if stem == "index" {
        parent.to_string_lossy().to_string()
    } else if parent.as_os_str().is_empty() {
        stem
    } else {
        format!("{}/{}", parent.display(), stem)
    };

    slug.trim_matches('/').to_string()
}

/// Find all content files under a collection directory.
///
/// A missing directory yields an empty list; a site does not have to use
/// every collection.
pub fn find_content_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    walk_dir(dir, &mut files)?;
    files.sort();
    Ok(files)
}

/// Recursively walk a directory for content files.
fn walk_dir(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    if !dir.exists() {
        return Ok(());
    }

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            // Skip hidden directories
            if path
                .file_name()
                .is_some_and(|n| n.to_string_lossy().starts_with('.'))
            {
                continue;
            }
            walk_dir(&path, files)?;
        } else if path.is_file()
            && path
                .extension()
                .is_some_and(|ext| matches!(ext.to_string_lossy().as_ref(), "md" | "mdx"))
        {
            files.push(path);
        }
    }

    Ok(())
}
