use std::io;

use thiserror::Error;

use crate::types::RecordId;

/// Error type for corpus loading, configuration, and CLI failures.
///
/// Ranking itself never fails; these only surface at the edges.
#[derive(Debug, Error)]
pub enum RelatedError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("malformed JSON input: {0}")]
    Json(#[from] serde_json::Error),
    #[error("corpus contains duplicate record id '{0}'")]
    DuplicateRecord(RecordId),
    #[error("record '{0}' is not present in the corpus")]
    UnknownRecord(RecordId),
}
