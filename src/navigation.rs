//! Feed ordering and neighbour lookup for previous/next links.
//!
//! Independent of ranking: the ranker neither needs nor produces this order.

use std::cmp::Ordering;

use crate::data::ContentRecord;

/// Neighbours of a record within a feed-ordered slice.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Siblings<'a> {
    /// Entry immediately before the record (newer, or pinned).
    pub newer: Option<&'a ContentRecord>,
    /// Entry immediately after the record (older).
    pub older: Option<&'a ContentRecord>,
}

/// Order records for a feed: pinned first, then newest first.
///
/// Records without a publish time sort after dated ones within their pinned
/// group. Ties keep corpus order.
pub fn feed_order(corpus: &[ContentRecord]) -> Vec<&ContentRecord> {
    let mut ordered: Vec<&ContentRecord> = corpus.iter().collect();
    ordered.sort_by(|left, right| compare_feed(left, right));
    ordered
}

fn compare_feed(left: &ContentRecord, right: &ContentRecord) -> Ordering {
    right
        .pinned
        .cmp(&left.pinned)
        .then_with(|| match (left.published_at, right.published_at) {
            (Some(l), Some(r)) => r.cmp(&l),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
}

/// Find the neighbours of `id` in an already feed-ordered slice.
///
/// Returns `None` when `id` is not present.
pub fn siblings<'a>(ordered: &[&'a ContentRecord], id: &str) -> Option<Siblings<'a>> {
    let idx = ordered.iter().position(|record| record.id == id)?;
    Some(Siblings {
        newer: idx.checked_sub(1).map(|prev| ordered[prev]),
        older: ordered.get(idx + 1).copied(),
    })
}
