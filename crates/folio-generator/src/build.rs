//! Build orchestration.
//!
//! Collects and validates content, then writes the build artifacts the
//! external rendering layer consumes: `manifest.json` with the validated
//! entries and `theme.css` with the resolved token table.

use std::{
    fs,
    path::PathBuf,
    time::Instant,
};

use folio_core::{BlogEntry, Config, CoreError, ProjectEntry, Theme, config::SiteConfig};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::collector::{CollectorError, ContentCollector, SiteContent};

/// Build errors.
#[derive(Debug, Error)]
pub enum BuildError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Collector error.
    #[error("collector error: {0}")]
    Collector(#[from] CollectorError),

    /// Core error (theme resolution).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Manifest serialization error.
    #[error("manifest error: {0}")]
    Manifest(#[from] serde_json::Error),
}

/// Result type for build operations.
pub type Result<T> = std::result::Result<T, BuildError>;

/// Build statistics.
#[derive(Debug, Clone, Default)]
pub struct BuildStats {
    /// Number of validated projects.
    pub projects: usize,

    /// Number of validated posts.
    pub posts: usize,

    /// Number of entries skipped in lenient mode.
    pub skipped: usize,

    /// Build duration in milliseconds.
    pub duration_ms: u64,
}

/// One document in the content manifest.
#[derive(Debug, Serialize)]
struct ManifestDoc<T> {
    slug: String,
    url: String,
    #[serde(flatten)]
    entry: T,
}

/// The content manifest written for the rendering layer.
#[derive(Debug, Serialize)]
struct Manifest<'a> {
    site: &'a SiteConfig,
    theme: &'a str,
    projects: Vec<ManifestDoc<&'a ProjectEntry>>,
    posts: Vec<ManifestDoc<&'a BlogEntry>>,
}

impl<'a> Manifest<'a> {
    fn new(config: &'a Config, content: &'a SiteContent) -> Self {
        let projects = content
            .projects_by_date()
            .into_iter()
            .map(|doc| ManifestDoc {
                slug: doc.slug.clone(),
                url: config.url_for(&format!("projects/{}", doc.slug)),
                entry: &doc.entry,
            })
            .collect();

        let posts = content
            .posts_by_date()
            .into_iter()
            .map(|doc| ManifestDoc {
                slug: doc.slug.clone(),
                url: config.url_for(&format!("blog/{}", doc.slug)),
                entry: &doc.entry,
            })
            .collect();

        Self {
            site: &config.site,
            theme: &config.theme.name,
            projects,
            posts,
        }
    }
}

/// Site builder that orchestrates the build process.
#[derive(Debug)]
pub struct Builder {
    config: Config,
    content_dir: PathBuf,
    output_dir: PathBuf,
}

impl Builder {
    /// Create a new builder.
    #[must_use]
    pub fn new(
        config: Config,
        content_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            config,
            content_dir: content_dir.into(),
            output_dir: output_dir.into(),
        }
    }

    /// Execute the full build process.
    pub fn build(&self) -> Result<BuildStats> {
        let start = Instant::now();

        info!(
            content = %self.content_dir.display(),
            output = %self.output_dir.display(),
            strict = self.config.build.strict,
            "starting build"
        );

        // 1. Clean output directory
        self.clean_output()?;

        // 2. Collect and validate content
        let collector = ContentCollector::new(self.config.clone(), &self.content_dir);
        let content = collector.collect()?;

        // 3. Write content manifest
        self.write_manifest(&content)?;

        // 4. Write theme stylesheet
        self.write_theme()?;

        let stats = BuildStats {
            projects: content.projects.len(),
            posts: content.posts.len(),
            skipped: content.skipped,
            duration_ms: start.elapsed().as_millis() as u64,
        };

        info!(
            projects = stats.projects,
            posts = stats.posts,
            skipped = stats.skipped,
            duration_ms = stats.duration_ms,
            "build complete"
        );

        Ok(stats)
    }

    /// Clean the output directory.
    fn clean_output(&self) -> Result<()> {
        if self.output_dir.exists() {
            debug!(dir = %self.output_dir.display(), "cleaning output directory");
            fs::remove_dir_all(&self.output_dir)?;
        }
        fs::create_dir_all(&self.output_dir)?;
        Ok(())
    }

    /// Write the content manifest.
    fn write_manifest(&self, content: &SiteContent) -> Result<()> {
        let manifest = Manifest::new(&self.config, content);
        let json = serde_json::to_string_pretty(&manifest)?;

        let path = self.output_dir.join("manifest.json");
        fs::write(&path, json)?;

        info!(path = %path.display(), "wrote content manifest");
        Ok(())
    }

    /// Write the resolved theme token table as CSS custom properties.
    fn write_theme(&self) -> Result<()> {
        let theme = Theme::resolve(&self.config.theme)?;

        let path = self.output_dir.join("theme.css");
        fs::write(&path, theme.css_variables())?;

        info!(path = %path.display(), theme = %theme.name, "wrote theme stylesheet");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use folio_core::config::{BuildConfig, ContentConfig, ThemeConfig};
    use tempfile::TempDir;

    use super::*;

    fn test_config() -> Config {
        Config {
            site: SiteConfig {
                title: "Test Site".to_string(),
                host: "https://example.com".to_string(),
                base_path: "/portfolio".to_string(),
                description: None,
                author: None,
            },
            build: BuildConfig::default(),
            content: ContentConfig::default(),
            theme: ThemeConfig {
                name: "midnight".to_string(),
                overrides: BTreeMap::new(),
            },
        }
    }

    #[test]
    fn test_build_empty_site() {
        let content_dir = TempDir::new().unwrap();
        let output_dir = TempDir::new().unwrap();

        let builder = Builder::new(test_config(), content_dir.path(), output_dir.path());
        let stats = builder.build().unwrap();

        assert_eq!(stats.projects, 0);
        assert_eq!(stats.posts, 0);
        assert!(output_dir.path().join("manifest.json").exists());
        assert!(output_dir.path().join("theme.css").exists());
    }

    #[test]
    fn test_build_with_content() {
        let content_dir = TempDir::new().unwrap();
        let output_dir = TempDir::new().unwrap();

        let projects = content_dir.path().join("projects");
        fs::create_dir_all(&projects).unwrap();
        fs::write(
            projects.join("dashboard.md"),
            r#"---
title: "Terminal Dashboard"
description: "A tui dashboard"
pubDate: "2024-01-15"
tags: [rust]
---

Body.
"#,
        )
        .unwrap();

        let builder = Builder::new(test_config(), content_dir.path(), output_dir.path());
        let stats = builder.build().unwrap();

        assert_eq!(stats.projects, 1);

        let manifest = fs::read_to_string(output_dir.path().join("manifest.json")).unwrap();
        assert!(manifest.contains("\"Terminal Dashboard\""));
        assert!(manifest.contains("\"pubDate\""));
        assert!(
            manifest.contains("https://example.com/portfolio/projects/dashboard"),
            "manifest should carry the deployed URL"
        );

        let css = fs::read_to_string(output_dir.path().join("theme.css")).unwrap();
        assert!(css.contains("--background: 222 47% 11%;"));
    }

    #[test]
    fn test_build_strict_fails_on_invalid_entry() {
        let content_dir = TempDir::new().unwrap();
        let output_dir = TempDir::new().unwrap();

        let blog = content_dir.path().join("blog");
        fs::create_dir_all(&blog).unwrap();
        fs::write(
            blog.join("bad.md"),
            "---\ntitle: \"No excerpt\"\ndate: \"2024-06-01\"\nauthor: a\ncategory: notes\ntags: []\n---\n",
        )
        .unwrap();

        let mut config = test_config();
        config.build.strict = true;

        let builder = Builder::new(config, content_dir.path(), output_dir.path());
        let err = builder.build().expect_err("should fail");
        assert!(err.to_string().contains("excerpt"));
    }

    #[test]
    fn test_build_lenient_counts_skipped() {
        let content_dir = TempDir::new().unwrap();
        let output_dir = TempDir::new().unwrap();

        let blog = content_dir.path().join("blog");
        fs::create_dir_all(&blog).unwrap();
        fs::write(
            blog.join("bad.md"),
            "---\ntitle: \"No excerpt\"\ndate: \"2024-06-01\"\nauthor: a\ncategory: notes\ntags: []\n---\n",
        )
        .unwrap();

        let builder = Builder::new(test_config(), content_dir.path(), output_dir.path());
        let stats = builder.build().unwrap();

        assert_eq!(stats.posts, 0);
        assert_eq!(stats.skipped, 1);
    }

    #[test]
    fn test_build_stats_default() {
        let stats = BuildStats::default();
        assert_eq!(stats.projects, 0);
        assert_eq!(stats.duration_ms, 0);
    }
}
