//! Front matter parsing for content files.
//!
//! A content file starts with an optional metadata header, delimited by `---`
//! (YAML) or `+++` (TOML). The header parses into a raw, untyped record; the
//! collection schemas decide what that record must contain.

use std::path::Path;

use serde_yaml::Value;

use crate::error::{CoreError, Result};

/// Delimiter types for front matter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontmatterFormat {
    /// YAML front matter delimited by `---`.
    Yaml,
    /// TOML front matter delimited by `+++`.
    Toml,
}

impl FrontmatterFormat {
    /// Get the delimiter string for this format.
    pub fn delimiter(&self) -> &'static str {
        match self {
            Self::Yaml => "---",
            Self::Toml => "+++",
        }
    }
}

/// Split content into front matter and body.
pub fn split_front_matter(content: &str) -> Option<(FrontmatterFormat, &str, &str)> {
    let content = content.trim_start();

    // Detect format based on opening delimiter
    let format = if content.starts_with("---") {
        FrontmatterFormat::Yaml
    } else if content.starts_with("+++") {
        FrontmatterFormat::Toml
    } else {
        return None;
    };

    let delimiter = format.delimiter();

    // Find the closing delimiter
    let after_first = &content[delimiter.len()..];
    let closing_pos = after_first.find(delimiter)?;

    let front_matter = after_first[..closing_pos].trim();
    let body = after_first[closing_pos + delimiter.len()..].trim_start();

    Some((format, front_matter, body))
}

/// Parse a content file into its raw front matter record and body.
///
/// A file without a front matter header yields an empty record; validation
/// then reports every required field of the collection as absent.
pub fn parse_raw(content: &str, path: &Path) -> Result<(Value, String)> {
    let Some((format, header, body)) = split_front_matter(content) else {
        return Ok((
            Value::Mapping(serde_yaml::Mapping::new()),
            content.to_string(),
        ));
    };

    let record: Value = match format {
        FrontmatterFormat::Yaml => serde_yaml::from_str(header)
            .map_err(|e| CoreError::frontmatter(path, e.to_string()))?,
        FrontmatterFormat::Toml => toml::from_str(header)
            .map_err(|e| CoreError::frontmatter(path, e.to_string()))?,
    };

    Ok((record, body.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_yaml_front_matter() {
        let content = r#"---
title: "Hello World"
pubDate: 2024-01-14
---

This is the body content."#;

        let (format, header, body) = split_front_matter(content).expect("split");
        assert_eq!(format, FrontmatterFormat::Yaml);
        assert!(header.contains("title:"));
        assert!(body.starts_with("This is the body"));
    }

    #[test]
    fn test_split_toml_front_matter() {
        let content = r#"+++
title = "Hello World"
date = "2024-01-14"
+++

This is the body content."#;

        let (format, header, body) = split_front_matter(content).expect("split");
        assert_eq!(format, FrontmatterFormat::Toml);
        assert!(header.contains("title ="));
        assert!(body.starts_with("This is the body"));
    }

    #[test]
    fn test_no_front_matter() {
        let content = "Just some content without front matter.";
        assert!(split_front_matter(content).is_none());
    }

    #[test]
    fn test_parse_raw_yaml() {
        let content = r#"---
title: "Test Post"
tags:
  - rust
  - test
---

Content here."#;

        let (record, body) = parse_raw(content, Path::new("test.md")).expect("parse");

        let mapping = record.as_mapping().expect("mapping");
        assert_eq!(mapping.get("title").and_then(Value::as_str), Some("Test Post"));
        assert_eq!(
            mapping.get("tags").and_then(Value::as_sequence).map(Vec::len),
            Some(2)
        );
        assert_eq!(body, "Content here.");
    }

    #[test]
    fn test_parse_raw_toml() {
        let content = r#"+++
title = "Test Post"
featured = true
tags = ["rust"]
+++

Content here."#;

        let (record, body) = parse_raw(content, Path::new("test.md")).expect("parse");

        let mapping = record.as_mapping().expect("mapping");
        assert_eq!(mapping.get("featured").and_then(Value::as_bool), Some(true));
        assert_eq!(body, "Content here.");
    }

    #[test]
    fn test_parse_raw_without_header() {
        let content = "Body only.";
        let (record, body) = parse_raw(content, Path::new("test.md")).expect("parse");

        assert!(record.as_mapping().expect("mapping").is_empty());
        assert_eq!(body, "Body only.");
    }

    #[test]
    fn test_parse_raw_invalid_yaml() {
        let content = "---\ntitle: [unclosed\n---\n\nBody";
        let result = parse_raw(content, Path::new("test.md"));
        assert!(result.is_err());
    }
}
