//! Typed content entry records.
//!
//! These are the records produced by validation. They are never mutated after
//! creation; the build pipeline owns them for the duration of a build.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Validated front matter for a portfolio project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEntry {
    /// Project title.
    pub title: String,

    /// Short description for cards and meta tags.
    pub description: String,

    /// Publication date, coerced from an ISO-formatted string.
    #[serde(deserialize_with = "coerce::date")]
    pub pub_date: DateTime<Utc>,

    /// Last updated date.
    #[serde(default, deserialize_with = "coerce::opt_date")]
    pub updated_date: Option<DateTime<Utc>>,

    /// Hero image path or URL.
    #[serde(default)]
    pub hero_image: Option<String>,

    /// Tags, in input order. May be empty.
    pub tags: Vec<String>,

    /// Source repository URL.
    #[serde(default)]
    pub repo_url: Option<String>,

    /// Live deployment URL.
    #[serde(default)]
    pub live_url: Option<String>,

    /// Whether the project is featured on the landing page.
    #[serde(default)]
    pub featured: bool,
}

/// Validated front matter for a blog post.
///
/// `date` stays a plain string: the blog schema never coerces it to a date
/// value, unlike `pubDate` on projects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogEntry {
    /// Post title.
    pub title: String,

    /// Short excerpt for listings.
    pub excerpt: String,

    /// Publication date as written in the front matter.
    pub date: String,

    /// Post author.
    pub author: String,

    /// Whether the post is featured.
    #[serde(default)]
    pub featured: bool,

    /// Cover image path or URL.
    #[serde(default)]
    pub image: Option<String>,

    /// Post category.
    pub category: String,

    /// Tags, in input order. May be empty.
    pub tags: Vec<String>,
}

/// Serde adapters applying date coercion to the two date-typed fields.
mod coerce {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, de};

    use crate::schema::parse_date;

    pub(super) fn date<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_date(&raw)
            .ok_or_else(|| de::Error::custom(format!("non-coercible date: {raw:?}")))
    }

    pub(super) fn opt_date<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => parse_date(&raw)
                .map(Some)
                .ok_or_else(|| de::Error::custom(format!("non-coercible date: {raw:?}"))),
            None => Ok(None),
        }
    }
}
