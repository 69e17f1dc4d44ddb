//! JSON corpus loading, standing in for the external corpus provider.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::data::ContentRecord;
use crate::errors::RelatedError;

/// Parse a JSON array of records and check id uniqueness.
///
/// Records with missing or unparsable publish times are kept (they score as
/// maximally old) and logged once each.
pub fn parse_corpus(raw: &str) -> Result<Vec<ContentRecord>, RelatedError> {
    let records: Vec<ContentRecord> = serde_json::from_str(raw)?;
    ensure_unique_ids(&records)?;
    for record in records.iter().filter(|record| record.published_at.is_none()) {
        warn!(
            record_id = %record.id,
            "record has no parsable publish time; treating it as maximally old"
        );
    }
    Ok(records)
}

/// Read and parse a JSON corpus file.
pub fn load_corpus(path: impl AsRef<Path>) -> Result<Vec<ContentRecord>, RelatedError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)?;
    let records = parse_corpus(&raw)?;
    debug!(
        path = %path.display(),
        bytes = raw.len(),
        records = records.len(),
        "loaded corpus"
    );
    Ok(records)
}

/// Fail on the first id that appears more than once.
pub fn ensure_unique_ids(records: &[ContentRecord]) -> Result<(), RelatedError> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id.as_str()) {
            return Err(RelatedError::DuplicateRecord(record.id.clone()));
        }
    }
    Ok(())
}

/// Look up a record by id.
pub fn find_record<'a>(
    corpus: &'a [ContentRecord],
    id: &str,
) -> Result<&'a ContentRecord, RelatedError> {
    corpus
        .iter()
        .find(|record| record.id == id)
        .ok_or_else(|| RelatedError::UnknownRecord(id.to_string()))
}
