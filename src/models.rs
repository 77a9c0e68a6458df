use anyhow::anyhow;
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// --- Categorical enums ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Applied,
    Interviewing,
    Offer,
    Rejected,
    Withdrawn,
    Pending,
}

impl Status {
    pub const ALL: [Status; 6] = [
        Status::Applied,
        Status::Interviewing,
        Status::Offer,
        Status::Rejected,
        Status::Withdrawn,
        Status::Pending,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Applied => "applied",
            Status::Interviewing => "interviewing",
            Status::Offer => "offer",
            Status::Rejected => "rejected",
            Status::Withdrawn => "withdrawn",
            Status::Pending => "pending",
        }
    }

    // Chart label: status name with the first letter capitalized.
    pub fn label(&self) -> &'static str {
        match self {
            Status::Applied => "Applied",
            Status::Interviewing => "Interviewing",
            Status::Offer => "Offer",
            Status::Rejected => "Rejected",
            Status::Withdrawn => "Withdrawn",
            Status::Pending => "Pending",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad, not write_str, so width specs in table rows apply
        f.pad(self.as_str())
    }
}

impl FromStr for Status {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "applied" => Ok(Status::Applied),
            "interviewing" => Ok(Status::Interviewing),
            "offer" => Ok(Status::Offer),
            "rejected" => Ok(Status::Rejected),
            "withdrawn" => Ok(Status::Withdrawn),
            "pending" => Ok(Status::Pending),
            other => Err(anyhow!(
                "Unknown status '{}'. Available: applied, interviewing, offer, rejected, \
                 withdrawn, pending",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobType {
    FullTime,
    PartTime,
    Contract,
    Internship,
    Freelance,
}

impl JobType {
    pub const ALL: [JobType; 5] = [
        JobType::FullTime,
        JobType::PartTime,
        JobType::Contract,
        JobType::Internship,
        JobType::Freelance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::FullTime => "full-time",
            JobType::PartTime => "part-time",
            JobType::Contract => "contract",
            JobType::Internship => "internship",
            JobType::Freelance => "freelance",
        }
    }

    // Chart label: hyphens become spaces, each word capitalized.
    pub fn label(&self) -> &'static str {
        match self {
            JobType::FullTime => "Full Time",
            JobType::PartTime => "Part Time",
            JobType::Contract => "Contract",
            JobType::Internship => "Internship",
            JobType::Freelance => "Freelance",
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for JobType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "full-time" => Ok(JobType::FullTime),
            "part-time" => Ok(JobType::PartTime),
            "contract" => Ok(JobType::Contract),
            "internship" => Ok(JobType::Internship),
            "freelance" => Ok(JobType::Freelance),
            other => Err(anyhow!(
                "Unknown job type '{}'. Available: full-time, part-time, contract, \
                 internship, freelance",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Source {
    Linkedin,
    Indeed,
    CompanyWebsite,
    Referral,
    Glassdoor,
    Other,
}

impl Source {
    pub const ALL: [Source; 6] = [
        Source::Linkedin,
        Source::Indeed,
        Source::CompanyWebsite,
        Source::Referral,
        Source::Glassdoor,
        Source::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Linkedin => "linkedin",
            Source::Indeed => "indeed",
            Source::CompanyWebsite => "company-website",
            Source::Referral => "referral",
            Source::Glassdoor => "glassdoor",
            Source::Other => "other",
        }
    }

    // Same transform as job types: hyphens to spaces, words capitalized.
    pub fn label(&self) -> &'static str {
        match self {
            Source::Linkedin => "Linkedin",
            Source::Indeed => "Indeed",
            Source::CompanyWebsite => "Company Website",
            Source::Referral => "Referral",
            Source::Glassdoor => "Glassdoor",
            Source::Other => "Other",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Source {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "linkedin" => Ok(Source::Linkedin),
            "indeed" => Ok(Source::Indeed),
            "company-website" => Ok(Source::CompanyWebsite),
            "referral" => Ok(Source::Referral),
            "glassdoor" => Ok(Source::Glassdoor),
            "other" => Ok(Source::Other),
            other => Err(anyhow!(
                "Unknown source '{}'. Available: linkedin, indeed, company-website, \
                 referral, glassdoor, other",
                other
            )),
        }
    }
}

// --- Date range selector ---

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateRange {
    #[default]
    All,
    Last7Days,
    Last30Days,
    Last90Days,
}

impl DateRange {
    pub const ALL_RANGES: [DateRange; 4] = [
        DateRange::All,
        DateRange::Last7Days,
        DateRange::Last30Days,
        DateRange::Last90Days,
    ];

    pub fn days(&self) -> Option<i64> {
        match self {
            DateRange::All => None,
            DateRange::Last7Days => Some(7),
            DateRange::Last30Days => Some(30),
            DateRange::Last90Days => Some(90),
        }
    }

    // Earliest instant that still satisfies the range, measured back from
    // the evaluation instant itself rather than from a day boundary.
    pub fn cutoff(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.days().map(|n| now - Duration::days(n))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DateRange::All => "all",
            DateRange::Last7Days => "7days",
            DateRange::Last30Days => "30days",
            DateRange::Last90Days => "90days",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DateRange::All => "All Time",
            DateRange::Last7Days => "Last 7 Days",
            DateRange::Last30Days => "Last 30 Days",
            DateRange::Last90Days => "Last 90 Days",
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for DateRange {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(DateRange::All),
            "7days" | "7d" => Ok(DateRange::Last7Days),
            "30days" | "30d" => Ok(DateRange::Last30Days),
            "90days" | "90d" => Ok(DateRange::Last90Days),
            other => Err(anyhow!(
                "Unknown date range '{}'. Available: all, 7days, 30days, 90days",
                other
            )),
        }
    }
}

// --- Records ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    pub id: String,
    pub company: String,
    pub position: String,
    pub status: Status,
    pub applied_date: NaiveDate,
    pub location: String,
    pub salary: Option<u64>,
    pub job_type: JobType,
    pub source: Source,
    pub notes: Option<String>,
    pub last_updated: NaiveDate,
}

impl ApplicationRecord {
    // A date-only value counts as the midnight instant opening that day (UTC).
    pub fn applied_instant(&self) -> DateTime<Utc> {
        self.applied_date.and_time(NaiveTime::MIN).and_utc()
    }
}

// Successor of the highest numeric id in the set. Ids are opaque strings;
// non-numeric ones are skipped rather than rejected.
pub fn next_id(records: &[ApplicationRecord]) -> String {
    let max = records
        .iter()
        .filter_map(|r| r.id.parse::<u64>().ok())
        .max()
        .unwrap_or(0);
    (max + 1).to_string()
}

// --- Filter configuration ---

// One value owns the whole filter state; None means "all" for the three
// categorical selectors, the same shape as optional narrowing arguments
// on a list lookup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterConfig {
    pub status: Option<Status>,
    pub job_type: Option<JobType>,
    pub source: Option<Source>,
    pub date_range: DateRange,
}

impl FilterConfig {
    pub fn active_count(&self) -> usize {
        let mut n = 0;
        if self.status.is_some() {
            n += 1;
        }
        if self.job_type.is_some() {
            n += 1;
        }
        if self.source.is_some() {
            n += 1;
        }
        if self.date_range != DateRange::All {
            n += 1;
        }
        n
    }
}

// --- Derived views ---

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStats {
    pub total_applications: usize,
    pub applications_this_month: usize,
    pub interview_rate: f64,
    pub offer_rate: f64,
    pub average_salary: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartBucket {
    pub label: String,
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(id: &str) -> ApplicationRecord {
        ApplicationRecord {
            id: id.to_string(),
            company: "Acme".to_string(),
            position: "Engineer".to_string(),
            status: Status::Applied,
            applied_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            location: "Remote".to_string(),
            salary: None,
            job_type: JobType::FullTime,
            source: Source::Other,
            notes: None,
            last_updated: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        }
    }

    #[test]
    fn enum_wire_names_round_trip() {
        for status in Status::ALL {
            assert_eq!(status.as_str().parse::<Status>().unwrap(), status);
        }
        for job_type in JobType::ALL {
            assert_eq!(job_type.as_str().parse::<JobType>().unwrap(), job_type);
        }
        for source in Source::ALL {
            assert_eq!(source.as_str().parse::<Source>().unwrap(), source);
        }
        for range in DateRange::ALL_RANGES {
            assert_eq!(range.as_str().parse::<DateRange>().unwrap(), range);
        }
    }

    #[test]
    fn serde_names_match_wire_names() {
        for status in Status::ALL {
            assert_eq!(
                serde_json::to_value(status).unwrap(),
                serde_json::Value::String(status.as_str().to_string())
            );
        }
        for job_type in JobType::ALL {
            assert_eq!(
                serde_json::to_value(job_type).unwrap(),
                serde_json::Value::String(job_type.as_str().to_string())
            );
        }
        for source in Source::ALL {
            assert_eq!(
                serde_json::to_value(source).unwrap(),
                serde_json::Value::String(source.as_str().to_string())
            );
        }
    }

    #[test]
    fn labels_follow_display_transforms() {
        assert_eq!(Status::Interviewing.label(), "Interviewing");
        assert_eq!(JobType::FullTime.label(), "Full Time");
        assert_eq!(Source::CompanyWebsite.label(), "Company Website");
        assert_eq!(Source::Linkedin.label(), "Linkedin");
    }

    #[test]
    fn display_pads_to_format_width() {
        assert_eq!(format!("{:<14}", Status::Applied), "applied       ");
        assert_eq!(format!("{:<10}", JobType::FullTime), "full-time ");
        assert_eq!(format!("{:<16}", Source::CompanyWebsite), "company-website ");
        assert_eq!(format!("{:>8}", DateRange::All), "     all");
    }

    #[test]
    fn unknown_names_are_rejected_with_choices() {
        let err = "ghosted".parse::<Status>().unwrap_err();
        assert!(err.to_string().contains("Unknown status 'ghosted'"));
        assert!(err.to_string().contains("interviewing"));
        let err = "gig".parse::<JobType>().unwrap_err();
        assert!(err.to_string().contains("Unknown job type"));
        let err = "craigslist".parse::<Source>().unwrap_err();
        assert!(err.to_string().contains("Unknown source"));
        let err = "1year".parse::<DateRange>().unwrap_err();
        assert!(err.to_string().contains("Unknown date range"));
    }

    #[test]
    fn date_range_cutoffs() {
        let now = "2024-02-01T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
        assert_eq!(DateRange::All.cutoff(now), None);
        assert_eq!(
            DateRange::Last7Days.cutoff(now),
            Some("2024-01-25T12:00:00Z".parse::<DateTime<Utc>>().unwrap())
        );
        assert_eq!(DateRange::Last90Days.days(), Some(90));
    }

    #[test]
    fn applied_instant_is_midnight_utc() {
        let rec = record("1");
        assert_eq!(
            rec.applied_instant(),
            "2024-01-15T00:00:00Z".parse::<DateTime<Utc>>().unwrap()
        );
    }

    #[test]
    fn next_id_takes_successor_of_highest_numeric() {
        let records = vec![record("1"), record("7"), record("3")];
        assert_eq!(next_id(&records), "8");
        assert_eq!(next_id(&[]), "1");
        // Non-numeric ids are opaque; they are skipped, not parsed.
        let records = vec![record("legacy-a"), record("2")];
        assert_eq!(next_id(&records), "3");
    }

    #[test]
    fn active_filter_count() {
        let mut filters = FilterConfig::default();
        assert_eq!(filters.active_count(), 0);
        filters.status = Some(Status::Offer);
        filters.date_range = DateRange::Last30Days;
        assert_eq!(filters.active_count(), 2);
    }
}
