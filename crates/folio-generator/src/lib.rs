//! Folio Generator
//!
//! Content collection and build pipeline: walks the content directory,
//! validates every entry against its collection schema, and emits the
//! content manifest and theme stylesheet.

pub mod build;
pub mod collector;

pub use build::{BuildError, BuildStats, Builder};
pub use collector::{CollectorError, ContentCollector, Document, SiteContent, find_content_files};
