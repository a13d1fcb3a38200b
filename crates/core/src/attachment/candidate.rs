//! Candidate filtering for bulk attachment creation.

use chrono::{DateTime, NaiveDate, Utc};

use super::types::{NewAttachment, PdfCandidate};

/// Parse a submitted upload date.
///
/// Accepts RFC 3339 timestamps and plain `YYYY-MM-DD` dates (midnight UTC).
#[must_use]
pub fn parse_upload_date(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

impl NewAttachment {
    /// Validate a candidate.
    ///
    /// Returns `None` unless both `file_path` and `file_name` are present and
    /// non-empty. A missing or unparseable upload date falls back to `now`.
    #[must_use]
    pub fn from_candidate(candidate: PdfCandidate, now: DateTime<Utc>) -> Option<Self> {
        let file_path = candidate.file_path.filter(|s| !s.is_empty())?;
        let file_name = candidate.file_name.filter(|s| !s.is_empty())?;
        let upload_date = candidate
            .upload_date
            .as_deref()
            .and_then(parse_upload_date)
            .unwrap_or(now);

        Some(Self {
            file_path,
            file_name,
            file_size: candidate.file_size.filter(|size| *size >= 0),
            upload_date,
        })
    }
}

/// Keep the valid candidates of a batch, preserving order.
///
/// Invalid entries are dropped silently.
#[must_use]
pub fn filter_candidates(candidates: Vec<PdfCandidate>, now: DateTime<Utc>) -> Vec<NewAttachment> {
    candidates
        .into_iter()
        .filter_map(|c| NewAttachment::from_candidate(c, now))
        .collect()
}
