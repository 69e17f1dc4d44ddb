use std::f64::consts::LN_2;
use std::hash::Hash;

use chrono::{DateTime, Utc};
use indexmap::IndexSet;

use crate::constants::scoring::{
    CATEGORY_BONUS, FRESHNESS_HALF_LIFE_DAYS, FRESHNESS_MAX, TAG_MATCH_SCALE,
    TITLE_SIMILARITY_SCALE,
};
use crate::data::{ContentRecord, ScoredCandidate};
use crate::dates::elapsed_days;
use crate::text::{TokenSet, tokenize};

/// Jaccard similarity `|A ∩ B| / |A ∪ B|`, defined as `0.0` for an empty union.
pub fn jaccard<T: Hash + Eq>(a: &IndexSet<T>, b: &IndexSet<T>) -> f64 {
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;
    if union == 0 {
        return 0.0;
    }
    intersection as f64 / union as f64
}

/// Tag overlap scaled to `0..=100`.
pub fn tag_match_score(reference: &ContentRecord, candidate: &ContentRecord) -> f64 {
    jaccard(&reference.tags, &candidate.tags) * TAG_MATCH_SCALE
}

/// Title-token overlap scaled to `0..=100`.
pub fn title_similarity_score(reference_tokens: &TokenSet, candidate_title: &str) -> f64 {
    jaccard(reference_tokens, &tokenize(candidate_title)) * TITLE_SIMILARITY_SCALE
}

/// Exponential decay with a 180-day half-life, 30 at `now`.
///
/// Unclamped: future-dated records score above 30. A missing timestamp is
/// treated as infinitely old and scores 0.
pub fn freshness_score(published_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> f64 {
    let Some(published_at) = published_at else {
        return 0.0;
    };
    let days = elapsed_days(now, published_at);
    FRESHNESS_MAX * (-LN_2 * days / FRESHNESS_HALF_LIFE_DAYS).exp()
}

/// Fixed bonus when both records carry the same non-empty category (case-sensitive).
pub fn category_bonus(reference: &ContentRecord, candidate: &ContentRecord) -> f64 {
    match (reference.category_label(), candidate.category_label()) {
        (Some(left), Some(right)) if left == right => CATEGORY_BONUS,
        _ => 0.0,
    }
}

/// Score `candidate` against `reference`.
pub fn score<'a>(
    reference: &ContentRecord,
    candidate: &'a ContentRecord,
    now: DateTime<Utc>,
) -> ScoredCandidate<'a> {
    score_with_tokens(reference, &tokenize(&reference.title), candidate, now)
}

/// Score `candidate` using a pre-tokenized reference title.
pub fn score_with_tokens<'a>(
    reference: &ContentRecord,
    reference_tokens: &TokenSet,
    candidate: &'a ContentRecord,
    now: DateTime<Utc>,
) -> ScoredCandidate<'a> {
    ScoredCandidate {
        record: candidate,
        tag_match: tag_match_score(reference, candidate),
        title_similarity: title_similarity_score(reference_tokens, &candidate.title),
        freshness: freshness_score(candidate.published_at, now),
        category_bonus: category_bonus(reference, candidate),
    }
}
