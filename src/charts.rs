use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::Serialize;

use crate::format::display_date;
use crate::models::{ApplicationRecord, ChartBucket};

pub fn status_distribution(records: &[&ApplicationRecord]) -> Vec<ChartBucket> {
    tally(records.iter().map(|r| r.status.label()))
}

pub fn source_distribution(records: &[&ApplicationRecord]) -> Vec<ChartBucket> {
    tally(records.iter().map(|r| r.source.label()))
}

pub fn job_type_distribution(records: &[&ApplicationRecord]) -> Vec<ChartBucket> {
    tally(records.iter().map(|r| r.job_type.label()))
}

// Buckets come out in first-encounter order. The category domains are tiny,
// so a linear scan beats hashing here.
fn tally<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<ChartBucket> {
    let mut buckets: Vec<ChartBucket> = Vec::new();
    for label in labels {
        match buckets.iter_mut().find(|b| b.label == label) {
            Some(bucket) => bucket.count += 1,
            None => buckets.push(ChartBucket {
                label: label.to_string(),
                count: 1,
            }),
        }
    }
    buckets
}

// Trailing-30-day series. Records are grouped by the display form of their
// applied date and the groups are sorted by the underlying date value, not
// the label text.
pub fn applications_over_time(
    records: &[&ApplicationRecord],
    now: DateTime<Utc>,
) -> Vec<ChartBucket> {
    let window_start = now - Duration::days(30);
    let mut buckets: Vec<(NaiveDate, ChartBucket)> = Vec::new();
    for record in records {
        if record.applied_instant() < window_start {
            continue;
        }
        let label = display_date(record.applied_date);
        match buckets.iter_mut().find(|(_, b)| b.label == label) {
            Some((_, bucket)) => bucket.count += 1,
            None => buckets.push((record.applied_date, ChartBucket { label, count: 1 })),
        }
    }
    buckets.sort_by_key(|(date, _)| *date);
    buckets.into_iter().map(|(_, bucket)| bucket).collect()
}

// The four series the dashboard renders, bundled for the output layer.
#[derive(Debug, Clone, Serialize)]
pub struct ChartReport {
    pub status: Vec<ChartBucket>,
    pub sources: Vec<ChartBucket>,
    pub job_types: Vec<ChartBucket>,
    pub over_time: Vec<ChartBucket>,
}

impl ChartReport {
    pub fn build(records: &[&ApplicationRecord], now: DateTime<Utc>) -> Self {
        Self {
            status: status_distribution(records),
            sources: source_distribution(records),
            job_types: job_type_distribution(records),
            over_time: applications_over_time(records, now),
        }
    }
}
