//! Folio Core Library
//!
//! Content collections, schema validation, configuration, and theme tokens
//! for the Folio site content pipeline.

pub mod collections;
pub mod config;
pub mod entry;
pub mod error;
pub mod frontmatter;
pub mod schema;
pub mod theme;

pub use collections::{BLOG, Collection, Entry, PROJECTS, validate_entry, validate_named};
pub use config::Config;
pub use entry::{BlogEntry, ProjectEntry};
pub use error::{CoreError, Result};
pub use frontmatter::{FrontmatterFormat, parse_raw, split_front_matter};
pub use schema::{FieldIssue, FieldKind, FieldSpec, Schema, SchemaValidationError, parse_date};
pub use theme::{Hsl, Theme};
