use chrono::{DateTime, Utc};

use crate::models::{ApplicationRecord, FilterConfig};

// Order-preserving pass over the record set: a record survives only if it
// matches every selector not set to "all". Returns references into the
// input; nothing is copied or reordered.
pub fn apply<'a>(
    records: &'a [ApplicationRecord],
    filters: &FilterConfig,
    now: DateTime<Utc>,
) -> Vec<&'a ApplicationRecord> {
    let cutoff = filters.date_range.cutoff(now);
    records
        .iter()
        .filter(|record| matches(record, filters, cutoff))
        .collect()
}

fn matches(
    record: &ApplicationRecord,
    filters: &FilterConfig,
    cutoff: Option<DateTime<Utc>>,
) -> bool {
    if let Some(status) = filters.status {
        if record.status != status {
            return false;
        }
    }
    if let Some(job_type) = filters.job_type {
        if record.job_type != job_type {
            return false;
        }
    }
    if let Some(source) = filters.source {
        if record.source != source {
            return false;
        }
    }
    if let Some(cutoff) = cutoff {
        // Inclusive boundary: applying exactly N days before the evaluation
        // instant still counts.
        if record.applied_instant() < cutoff {
            return false;
        }
    }
    true
}
