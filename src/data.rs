use chrono::{DateTime, Utc};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::dates::lenient_timestamp;

pub use crate::types::{CategoryId, RecordId, Tag};

/// Canonical content record supplied by the corpus provider.
///
/// Fields outside the ones below (display fields such as `description` or
/// `cover`) are ignored on deserialization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContentRecord {
    /// Stable record identifier, unique across the corpus.
    pub id: RecordId,
    /// Free-text title in any script mix (only used for tokenization).
    pub title: String,
    /// Tag set; duplicates collapse on insertion.
    #[serde(default)]
    pub tags: IndexSet<Tag>,
    /// Optional category; `None` and `Some("")` both mean uncategorized.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryId>,
    /// Publish time; `None` when the source timestamp was missing or unparsable.
    #[serde(default, with = "lenient_timestamp")]
    pub published_at: Option<DateTime<Utc>>,
    /// Access-gated content that must never be recommended.
    #[serde(default)]
    pub restricted: bool,
    /// Pinned records lead feed ordering; scoring ignores this flag.
    #[serde(default)]
    pub pinned: bool,
}

impl ContentRecord {
    /// Create an untagged, uncategorized, undated record.
    pub fn new(id: impl Into<RecordId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            tags: IndexSet::new(),
            category: None,
            published_at: None,
            restricted: false,
            pinned: false,
        }
    }

    /// Replace the tag set.
    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Tag>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Set the category.
    pub fn with_category(mut self, category: impl Into<CategoryId>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the publish time.
    pub fn with_published_at(mut self, published_at: DateTime<Utc>) -> Self {
        self.published_at = Some(published_at);
        self
    }

    /// Mark the record as access-gated.
    pub fn restricted(mut self) -> Self {
        self.restricted = true;
        self
    }

    /// Mark the record as pinned in feed ordering.
    pub fn pinned(mut self) -> Self {
        self.pinned = true;
        self
    }

    /// Category label, or `None` when absent or empty.
    pub fn category_label(&self) -> Option<&str> {
        self.category.as_deref().filter(|label| !label.is_empty())
    }
}

/// A candidate paired with its sub-scores for one ranking call.
#[derive(Clone, Copy, Debug)]
pub struct ScoredCandidate<'a> {
    /// Candidate record; never modified by scoring.
    pub record: &'a ContentRecord,
    /// Tag Jaccard similarity scaled to `0..=100`.
    pub tag_match: f64,
    /// Title-token Jaccard similarity scaled to `0..=100`.
    pub title_similarity: f64,
    /// Half-life decayed freshness; above 30 for future-dated records.
    pub freshness: f64,
    /// Either 0 or the fixed category bonus.
    pub category_bonus: f64,
}

impl ScoredCandidate<'_> {
    /// Sum of all four sub-scores.
    pub fn total(&self) -> f64 {
        self.tag_match + self.title_similarity + self.freshness + self.category_bonus
    }

    /// Narrow score used to order candidates without tag overlap.
    pub fn fallback_score(&self) -> f64 {
        self.freshness + self.category_bonus
    }

    /// True when the candidate shares at least one tag with the reference.
    pub fn is_tag_matched(&self) -> bool {
        self.tag_match > 0.0
    }

    /// Id of the candidate record.
    pub fn id(&self) -> &RecordId {
        &self.record.id
    }
}
