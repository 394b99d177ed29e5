use crate::domain::model::DomainRecord;
use crate::utils::error::{Result, TrackerError};

/// Records whose name or owner contains `term`, ignoring case, in input order.
///
/// An absent term is a caller error; an empty term matches every record.
pub fn search<'a>(
    records: &'a [DomainRecord],
    term: Option<&str>,
) -> Result<Vec<&'a DomainRecord>> {
    let Some(term) = term else {
        tracing::warn!("search rejected: no term supplied");
        return Err(TrackerError::invalid_argument("Search term cannot be null."));
    };

    let needle = term.to_lowercase();
    let matches: Vec<&DomainRecord> = records
        .iter()
        .filter(|record| {
            contains_ignore_case(record.name(), &needle)
                || contains_ignore_case(record.owner(), &needle)
        })
        .collect();

    tracing::debug!(term, matched = matches.len(), scanned = records.len(), "search finished");
    Ok(matches)
}

fn contains_ignore_case(haystack: &str, lowered_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowered_needle)
}
