//! Content collection registry.
//!
//! Two collections are registered: `projects` and `blog`. Each pairs a
//! declarative schema table with a typed entry record. [`validate_entry`] is
//! the single entry point mapping a raw front matter record to a validated
//! entry or a [`SchemaValidationError`].

use serde_yaml::{Mapping, Value};

use crate::{
    entry::{BlogEntry, ProjectEntry},
    error::{CoreError, Result},
    schema::{FieldIssue, FieldKind, FieldSpec, Schema, SchemaValidationError, describe},
};

/// Schema table for the `projects` collection.
pub const PROJECTS: Schema = Schema {
    collection: "projects",
    fields: &[
        FieldSpec {
            name: "title",
            kind: FieldKind::Str,
            required: true,
        },
        FieldSpec {
            name: "description",
            kind: FieldKind::Str,
            required: true,
        },
        FieldSpec {
            name: "pubDate",
            kind: FieldKind::Date,
            required: true,
        },
        FieldSpec {
            name: "updatedDate",
            kind: FieldKind::Date,
            required: false,
        },
        FieldSpec {
            name: "heroImage",
            kind: FieldKind::Str,
            required: false,
        },
        FieldSpec {
            name: "tags",
            kind: FieldKind::StringList,
            required: true,
        },
        FieldSpec {
            name: "repoUrl",
            kind: FieldKind::Str,
            required: false,
        },
        FieldSpec {
            name: "liveUrl",
            kind: FieldKind::Str,
            required: false,
        },
        FieldSpec {
            name: "featured",
            kind: FieldKind::Bool,
            required: false,
        },
    ],
};

/// Schema table for the `blog` collection.
///
/// `date` is a plain string by design; it is never coerced to a date value.
pub const BLOG: Schema = Schema {
    collection: "blog",
    fields: &[
        FieldSpec {
            name: "title",
            kind: FieldKind::Str,
            required: true,
        },
        FieldSpec {
            name: "excerpt",
            kind: FieldKind::Str,
            required: true,
        },
        FieldSpec {
            name: "date",
            kind: FieldKind::Str,
            required: true,
        },
        FieldSpec {
            name: "author",
            kind: FieldKind::Str,
            required: true,
        },
        FieldSpec {
            name: "featured",
            kind: FieldKind::Bool,
            required: false,
        },
        FieldSpec {
            name: "image",
            kind: FieldKind::Str,
            required: false,
        },
        FieldSpec {
            name: "category",
            kind: FieldKind::Str,
            required: true,
        },
        FieldSpec {
            name: "tags",
            kind: FieldKind::StringList,
            required: true,
        },
    ],
};

/// A registered content collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    /// Portfolio projects.
    Projects,
    /// Blog posts.
    Blog,
}

impl Collection {
    /// All registered collections.
    pub fn all() -> [Collection; 2] {
        [Self::Projects, Self::Blog]
    }

    /// Resolve a collection by its registered name.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "projects" => Ok(Self::Projects),
            "blog" => Ok(Self::Blog),
            other => Err(CoreError::UnknownCollection(other.to_string())),
        }
    }

    /// The name the collection is registered under.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Projects => "projects",
            Self::Blog => "blog",
        }
    }

    /// The schema table for this collection.
    pub fn schema(&self) -> &'static Schema {
        match self {
            Self::Projects => &PROJECTS,
            Self::Blog => &BLOG,
        }
    }
}

/// A validated entry from either collection.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    /// A `projects` entry.
    Project(ProjectEntry),
    /// A `blog` entry.
    Blog(BlogEntry),
}

impl Entry {
    /// Entry title.
    pub fn title(&self) -> &str {
        match self {
            Self::Project(entry) => &entry.title,
            Self::Blog(entry) => &entry.title,
        }
    }

    /// Entry tags.
    pub fn tags(&self) -> &[String] {
        match self {
            Self::Project(entry) => &entry.tags,
            Self::Blog(entry) => &entry.tags,
        }
    }

    /// Whether the entry is featured.
    pub fn featured(&self) -> bool {
        match self {
            Self::Project(entry) => entry.featured,
            Self::Blog(entry) => entry.featured,
        }
    }
}

/// Validate a raw front matter record against a collection schema.
///
/// Pure function of its inputs. On success the typed entry is returned with
/// optional fields defaulted; on failure the error enumerates every
/// offending field. The caller decides whether a failure aborts the build or
/// skips the entry.
pub fn validate_entry(
    collection: Collection,
    record: &Value,
) -> std::result::Result<Entry, SchemaValidationError> {
    let schema = collection.schema();

    let Some(mapping) = record.as_mapping() else {
        return Err(SchemaValidationError {
            collection: schema.collection,
            issues: vec![FieldIssue {
                field: "<record>".to_string(),
                expected: "a mapping of field names to values".to_string(),
                actual: describe(record),
            }],
        });
    };

    // Explicit nulls count as absent; non-string keys cannot name a field.
    let cleaned: Mapping = mapping
        .iter()
        .filter(|(key, value)| key.is_string() && !value.is_null())
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    schema.check(&cleaned)?;

    // The structural check passed, so typed construction cannot fail; a
    // mismatch here would be a schema table bug and is still surfaced as
    // data rather than a panic.
    let constructed = match collection {
        Collection::Projects => {
            serde_yaml::from_value(Value::Mapping(cleaned)).map(Entry::Project)
        }
        Collection::Blog => serde_yaml::from_value(Value::Mapping(cleaned)).map(Entry::Blog),
    };

    constructed.map_err(|e| SchemaValidationError {
        collection: schema.collection,
        issues: vec![FieldIssue {
            field: "<record>".to_string(),
            expected: "a record matching the collection schema".to_string(),
            actual: e.to_string(),
        }],
    })
}

/// Validate a record against the schema registered under `name`.
///
/// Like [`validate_entry`], but resolves the collection by name first, so an
/// unregistered name and a schema violation both surface through [`CoreError`].
pub fn validate_named(name: &str, record: &Value) -> Result<Entry> {
    let collection = Collection::from_name(name)?;
    Ok(validate_entry(collection, record)?)
}
