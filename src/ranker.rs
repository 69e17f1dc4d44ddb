//! Candidate ranking and two-tier related-record selection.
//!
//! Selection order:
//! 1. Drop the reference itself and restricted records, then score the rest.
//! 2. Stable-sort by total score, descending (ties keep corpus order).
//! 3. Take tag-matched candidates in that order.
//! 4. Top up with candidates lacking tag overlap, ordered by freshness plus
//!    category bonus.

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use tracing::debug;

use crate::config::RankerConfig;
use crate::data::{ContentRecord, ScoredCandidate};
use crate::similarity::score_with_tokens;
use crate::text::tokenize;
use crate::types::RecordId;

/// Related-record ranker. Stateless between calls.
#[derive(Clone, Debug, Default)]
pub struct Ranker {
    config: RankerConfig,
}

impl Ranker {
    /// Create a ranker with `config`.
    pub fn new(config: RankerConfig) -> Self {
        Self { config }
    }

    /// Score every eligible candidate and order by total score, descending.
    ///
    /// The reference (matched by id) and restricted records are removed before
    /// scoring. Equal totals keep their corpus order.
    pub fn rank<'a>(
        &self,
        reference: &ContentRecord,
        corpus: &'a [ContentRecord],
        now: DateTime<Utc>,
    ) -> Vec<ScoredCandidate<'a>> {
        let candidates: Vec<&'a ContentRecord> = corpus
            .iter()
            .filter(|candidate| candidate.id != reference.id && !candidate.restricted)
            .collect();
        let reference_tokens = tokenize(&reference.title);
        let parallel = candidates.len() >= self.config.parallel_threshold;

        // Indexed collect keeps corpus order, so the stable sort below sees the
        // same input regardless of which path ran.
        let mut scored: Vec<ScoredCandidate<'a>> = if parallel {
            candidates
                .par_iter()
                .map(|&candidate| {
                    score_with_tokens(reference, &reference_tokens, candidate, now)
                })
                .collect()
        } else {
            candidates
                .iter()
                .map(|&candidate| {
                    score_with_tokens(reference, &reference_tokens, candidate, now)
                })
                .collect()
        };
        scored.sort_by(|left, right| right.total().total_cmp(&left.total()));

        debug!(
            reference_id = %reference.id,
            corpus_len = corpus.len(),
            candidates = scored.len(),
            parallel,
            "scored related candidates"
        );
        scored
    }

    /// Select up to `max_count` related candidates with their scores.
    pub fn select<'a>(
        &self,
        reference: &ContentRecord,
        corpus: &'a [ContentRecord],
        now: DateTime<Utc>,
    ) -> Vec<ScoredCandidate<'a>> {
        let max_count = self.config.max_count;
        let ranked = self.rank(reference, corpus, now);
        let (tag_matched, mut fallback): (Vec<_>, Vec<_>) = ranked
            .into_iter()
            .partition(|candidate| candidate.is_tag_matched());
        let tag_matched_pool = tag_matched.len();
        let fallback_pool = fallback.len();

        let mut selected: Vec<ScoredCandidate<'a>> =
            tag_matched.into_iter().take(max_count).collect();
        let remaining = max_count - selected.len();
        if remaining > 0 {
            fallback.sort_by(|left, right| {
                right
                    .fallback_score()
                    .total_cmp(&left.fallback_score())
            });
            selected.extend(fallback.into_iter().take(remaining));
        }

        debug!(
            reference_id = %reference.id,
            max_count,
            tag_matched_pool,
            fallback_pool,
            selected = selected.len(),
            "selected related records"
        );
        selected
    }

    /// Ids of the selected related records, in selection order.
    pub fn related_ids(
        &self,
        reference: &ContentRecord,
        corpus: &[ContentRecord],
        now: DateTime<Utc>,
    ) -> Vec<RecordId> {
        self.select(reference, corpus, now)
            .into_iter()
            .map(|candidate| candidate.record.id.clone())
            .collect()
    }
}

/// Ids of up to `max_count` records related to `reference`, using default
/// ranker settings otherwise.
pub fn select_related(
    reference: &ContentRecord,
    corpus: &[ContentRecord],
    max_count: usize,
    now: DateTime<Utc>,
) -> Vec<RecordId> {
    Ranker::new(RankerConfig::with_max_count(max_count)).related_ids(reference, corpus, now)
}
