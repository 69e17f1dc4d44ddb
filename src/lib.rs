#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Command-line runners shared by the shipped binaries.
pub mod apps;
/// Ranker configuration.
pub mod config;
/// Centralized scoring, ranking, and parsing constants.
pub mod constants;
/// Corpus loading and lookup.
pub mod corpus;
/// Content records and scored candidates.
pub mod data;
/// Publish-time parsing and elapsed-time helpers.
pub mod dates;
/// Feed ordering and previous/next neighbours.
pub mod navigation;
/// Related-record ranking and selection.
pub mod ranker;
/// Pairwise similarity sub-scores.
pub mod similarity;
/// Title tokenization.
pub mod text;
/// Shared type aliases.
pub mod types;

mod errors;

pub use config::RankerConfig;
pub use corpus::{find_record, load_corpus, parse_corpus};
pub use data::{ContentRecord, ScoredCandidate};
pub use errors::RelatedError;
pub use navigation::{Siblings, feed_order, siblings};
pub use ranker::{Ranker, select_related};
pub use similarity::{jaccard, score};
pub use text::{TokenSet, tokenize};
pub use types::{CategoryId, RecordId, Tag, Token};
