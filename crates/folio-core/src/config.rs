//! Site configuration management.

use std::{collections::BTreeMap, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    error::{CoreError, Result},
    theme::Theme,
};

/// Main configuration structure for Folio.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Site-wide settings.
    pub site: SiteConfig,

    /// Build settings.
    #[serde(default)]
    pub build: BuildConfig,

    /// Content settings.
    #[serde(default)]
    pub content: ContentConfig,

    /// Theme selection.
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// Site-wide configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site title.
    pub title: String,

    /// Host the site is deployed to (e.g., "https://example.github.io").
    pub host: String,

    /// Base path under the host (e.g., "/portfolio"). One parameter covers
    /// every deployment instead of per-deployment config copies.
    #[serde(default = "default_base_path")]
    pub base_path: String,

    /// Site description for meta tags.
    #[serde(default)]
    pub description: Option<String>,

    /// Site author name.
    #[serde(default)]
    pub author: Option<String>,
}

/// Build configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Output directory for generated artifacts.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Strict mode: one invalid entry fails the whole build. Lenient mode
    /// skips invalid entries with a logged warning.
    #[serde(default)]
    pub strict: bool,
}

/// Content configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Directory holding the collection subdirectories.
    #[serde(default = "default_content_dir")]
    pub dir: String,
}

/// Theme selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Built-in palette name.
    #[serde(default = "default_theme")]
    pub name: String,

    /// Per-token overrides, token name to HSL value ("222 47% 11%").
    #[serde(default)]
    pub overrides: BTreeMap<String, String>,
}

// Default value functions
fn default_base_path() -> String {
    "/".to_string()
}

fn default_output_dir() -> String {
    "public".to_string()
}

fn default_content_dir() -> String {
    "content".to_string()
}

fn default_theme() -> String {
    "midnight".to_string()
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            strict: false,
        }
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            dir: default_content_dir(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: default_theme(),
            overrides: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration using the config crate for env overrides.
    ///
    /// Environment variables use the `FOLIO` prefix, e.g.
    /// `FOLIO__SITE__BASE_PATH=/staging`.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix("FOLIO").separator("__"))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if self.site.title.is_empty() {
            return Err(CoreError::config("site.title cannot be empty"));
        }

        if self.site.host.is_empty() {
            return Err(CoreError::config("site.host cannot be empty"));
        }

        if !self.site.base_path.starts_with('/') {
            return Err(CoreError::config(
                "site.base_path must start with a slash",
            ));
        }

        if self.site.host.ends_with('/') {
            tracing::warn!("site.host should not have a trailing slash");
        }

        // Resolving the theme catches unknown palette names and malformed
        // override values before any build work starts.
        Theme::resolve(&self.theme)?;

        Ok(())
    }

    /// Get the full URL for a site-relative path.
    pub fn url_for(&self, path: &str) -> String {
        let host = self.site.host.trim_end_matches('/');
        let base = self.site.base_path.trim_matches('/');
        let path = path.trim_start_matches('/');

        if base.is_empty() {
            format!("{host}/{path}")
        } else if path.is_empty() {
            format!("{host}/{base}")
        } else {
            format!("{host}/{base}/{path}")
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn create_test_config() -> String {
        r#"
[site]
title = "Kabir's Portfolio"
host = "https://kabir.github.io"
base_path = "/portfolio"
author = "Kabir"

[build]
output_dir = "dist"
strict = true

[content]
dir = "site-content"

[theme]
name = "midnight"

[theme.overrides]
primary = "210 90% 60%"
"#
        .to_string()
    }

    #[test]
    fn test_load_config() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&config_path).expect("create file");
        file.write_all(create_test_config().as_bytes())
            .expect("write");

        let config = Config::load(&config_path).expect("load config");

        assert_eq!(config.site.title, "Kabir's Portfolio");
        assert_eq!(config.site.host, "https://kabir.github.io");
        assert_eq!(config.site.base_path, "/portfolio");
        assert_eq!(config.build.output_dir, "dist");
        assert!(config.build.strict);
        assert_eq!(config.content.dir, "site-content");
        assert_eq!(config.theme.name, "midnight");
        assert_eq!(
            config.theme.overrides.get("primary").map(String::as_str),
            Some("210 90% 60%")
        );
    }

    #[test]
    fn test_config_defaults() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("config.toml");
        let minimal_config = r#"
[site]
title = "Minimal Site"
host = "https://example.com"
"#;
        std::fs::write(&config_path, minimal_config).expect("write");

        let config = Config::load(&config_path).expect("load config");

        assert_eq!(config.site.base_path, "/");
        assert_eq!(config.build.output_dir, "public");
        assert!(!config.build.strict);
        assert_eq!(config.content.dir, "content");
        assert_eq!(config.theme.name, "midnight");
    }

    #[test]
    fn test_url_for() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("config.toml");
        let config_content = r#"
[site]
title = "Test"
host = "https://example.com"
base_path = "/portfolio"
"#;
        std::fs::write(&config_path, config_content).expect("write");

        let config = Config::load(&config_path).expect("load config");

        assert_eq!(
            config.url_for("/projects/dashboard"),
            "https://example.com/portfolio/projects/dashboard"
        );
        assert_eq!(
            config.url_for("projects/dashboard"),
            "https://example.com/portfolio/projects/dashboard"
        );
        assert_eq!(config.url_for(""), "https://example.com/portfolio");
    }

    #[test]
    fn test_url_for_root_base_path() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("config.toml");
        let config_content = r#"
[site]
title = "Test"
host = "https://example.com"
"#;
        std::fs::write(&config_path, config_content).expect("write");

        let config = Config::load(&config_path).expect("load config");

        assert_eq!(config.url_for("/blog/hello"), "https://example.com/blog/hello");
    }

    #[test]
    fn test_config_validation_empty_title() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("config.toml");
        let config_content = r#"
[site]
title = ""
host = "https://example.com"
"#;
        std::fs::write(&config_path, config_content).expect("write");

        let result = Config::load(&config_path);
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("title cannot be empty")
        );
    }

    #[test]
    fn test_config_validation_relative_base_path() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("config.toml");
        let config_content = r#"
[site]
title = "Test"
host = "https://example.com"
base_path = "portfolio"
"#;
        std::fs::write(&config_path, config_content).expect("write");

        let result = Config::load(&config_path);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("base_path"));
    }

    #[test]
    fn test_config_validation_unknown_theme() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("config.toml");
        let config_content = r#"
[site]
title = "Test"
host = "https://example.com"

[theme]
name = "neon"
"#;
        std::fs::write(&config_path, config_content).expect("write");

        let result = Config::load(&config_path);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("neon"));
    }

    #[test]
    fn test_config_not_found() {
        let result = Config::load(Path::new("/nonexistent/config.toml"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not found"));
    }
}
