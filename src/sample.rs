use chrono::NaiveDate;

use crate::models::{ApplicationRecord, JobType, Source, Status};

// Fixed seed list the dashboard starts from. There is no loading mechanism;
// until a real backend exists this is the whole record set.
pub fn sample_applications() -> Vec<ApplicationRecord> {
    vec![
        ApplicationRecord {
            id: "1".to_string(),
            company: "Google".to_string(),
            position: "Software Engineer".to_string(),
            status: Status::Applied,
            applied_date: date(2024, 1, 15),
            location: "Mountain View, CA".to_string(),
            salary: Some(150_000),
            job_type: JobType::FullTime,
            source: Source::Linkedin,
            notes: Some("Applied through LinkedIn".to_string()),
            last_updated: date(2024, 1, 15),
        },
        ApplicationRecord {
            id: "2".to_string(),
            company: "Microsoft".to_string(),
            position: "Frontend Developer".to_string(),
            status: Status::Interviewing,
            applied_date: date(2024, 1, 10),
            location: "Seattle, WA".to_string(),
            salary: Some(140_000),
            job_type: JobType::FullTime,
            source: Source::CompanyWebsite,
            notes: Some("First round interview scheduled".to_string()),
            last_updated: date(2024, 1, 12),
        },
        ApplicationRecord {
            id: "3".to_string(),
            company: "Apple".to_string(),
            position: "iOS Developer".to_string(),
            status: Status::Offer,
            applied_date: date(2024, 1, 5),
            location: "Cupertino, CA".to_string(),
            salary: Some(160_000),
            job_type: JobType::FullTime,
            source: Source::Referral,
            notes: Some("Received offer letter".to_string()),
            last_updated: date(2024, 1, 20),
        },
        ApplicationRecord {
            id: "4".to_string(),
            company: "Amazon".to_string(),
            position: "Backend Engineer".to_string(),
            status: Status::Rejected,
            applied_date: date(2024, 1, 8),
            location: "Seattle, WA".to_string(),
            salary: None,
            job_type: JobType::FullTime,
            source: Source::Indeed,
            notes: Some("Rejected after technical interview".to_string()),
            last_updated: date(2024, 1, 18),
        },
        ApplicationRecord {
            id: "5".to_string(),
            company: "Meta".to_string(),
            position: "React Developer".to_string(),
            status: Status::Applied,
            applied_date: date(2024, 1, 20),
            location: "Menlo Park, CA".to_string(),
            salary: None,
            job_type: JobType::FullTime,
            source: Source::Linkedin,
            notes: Some("Applied for React position".to_string()),
            last_updated: date(2024, 1, 20),
        },
        ApplicationRecord {
            id: "6".to_string(),
            company: "Netflix".to_string(),
            position: "Full Stack Developer".to_string(),
            status: Status::Interviewing,
            applied_date: date(2024, 1, 12),
            location: "Los Gatos, CA".to_string(),
            salary: Some(170_000),
            job_type: JobType::FullTime,
            source: Source::CompanyWebsite,
            notes: Some("Second round interview".to_string()),
            last_updated: date(2024, 1, 19),
        },
        ApplicationRecord {
            id: "7".to_string(),
            company: "Uber".to_string(),
            position: "Mobile Developer".to_string(),
            status: Status::Withdrawn,
            applied_date: date(2024, 1, 3),
            location: "San Francisco, CA".to_string(),
            salary: None,
            job_type: JobType::FullTime,
            source: Source::Glassdoor,
            notes: Some("Withdrew application".to_string()),
            last_updated: date(2024, 1, 15),
        },
        ApplicationRecord {
            id: "8".to_string(),
            company: "Airbnb".to_string(),
            position: "DevOps Engineer".to_string(),
            status: Status::Pending,
            applied_date: date(2024, 1, 25),
            location: "San Francisco, CA".to_string(),
            salary: None,
            job_type: JobType::Contract,
            source: Source::Other,
            notes: Some("Application under review".to_string()),
            last_updated: date(2024, 1, 25),
        },
    ]
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("hard-coded seed date")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_has_eight_records_with_unique_ids() {
        let records = sample_applications();
        assert_eq!(records.len(), 8);
        let ids: HashSet<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids.len(), records.len());
    }

    #[test]
    fn seed_covers_every_status() {
        let records = sample_applications();
        for status in crate::models::Status::ALL {
            assert!(
                records.iter().any(|r| r.status == status),
                "no seed record with status {}",
                status
            );
        }
    }
}
