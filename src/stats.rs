use chrono::{DateTime, Datelike, Utc};

use crate::models::{ApplicationRecord, DashboardStats, Status};

// Rates above these marks render as trending up on the stat cards.
const INTERVIEW_RATE_UP: f64 = 0.15;
const OFFER_RATE_UP: f64 = 0.10;

// Summary statistics over the full record set. These stay independent of
// the active filter configuration; only the charts react to filtering.
pub fn compute(records: &[ApplicationRecord], now: DateTime<Utc>) -> DashboardStats {
    let total_applications = records.len();

    let today = now.date_naive();
    let applications_this_month = records
        .iter()
        .filter(|r| {
            r.applied_date.year() == today.year() && r.applied_date.month() == today.month()
        })
        .count();

    let interviewing = records
        .iter()
        .filter(|r| r.status == Status::Interviewing)
        .count();
    let offers = records.iter().filter(|r| r.status == Status::Offer).count();

    let interview_rate = if total_applications > 0 {
        interviewing as f64 / total_applications as f64
    } else {
        0.0
    };
    let offer_rate = if interviewing > 0 {
        offers as f64 / interviewing as f64
    } else {
        0.0
    };

    let salaries: Vec<u64> = records.iter().filter_map(|r| r.salary).collect();
    let average_salary = if salaries.is_empty() {
        None
    } else {
        Some(salaries.iter().sum::<u64>() as f64 / salaries.len() as f64)
    };

    DashboardStats {
        total_applications,
        applications_this_month,
        interview_rate,
        offer_rate,
        average_salary,
    }
}

impl DashboardStats {
    pub fn interview_trend_up(&self) -> bool {
        self.interview_rate > INTERVIEW_RATE_UP
    }

    pub fn offer_trend_up(&self) -> bool {
        self.offer_rate > OFFER_RATE_UP
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{JobType, Source};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn record(id: &str, status: Status, applied: (i32, u32, u32)) -> ApplicationRecord {
        let date = NaiveDate::from_ymd_opt(applied.0, applied.1, applied.2).unwrap();
        ApplicationRecord {
            id: id.to_string(),
            company: "Acme".to_string(),
            position: "Engineer".to_string(),
            status,
            applied_date: date,
            location: "Remote".to_string(),
            salary: None,
            job_type: JobType::FullTime,
            source: Source::Linkedin,
            notes: None,
            last_updated: date,
        }
    }

    fn eval(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
            .and_utc()
    }

    #[test]
    fn rates_from_a_mixed_set() {
        let records = vec![
            record("1", Status::Applied, (2024, 1, 15)),
            record("2", Status::Interviewing, (2024, 1, 10)),
            record("3", Status::Interviewing, (2024, 1, 12)),
            record("4", Status::Offer, (2024, 1, 5)),
        ];
        let stats = compute(&records, eval(2024, 2, 1));
        assert_eq!(stats.total_applications, 4);
        assert_eq!(stats.interview_rate, 0.5);
        assert_eq!(stats.offer_rate, 0.5);
    }

    #[test]
    fn empty_set_yields_zeros_and_no_salary() {
        let stats = compute(&[], eval(2024, 2, 1));
        assert_eq!(stats.total_applications, 0);
        assert_eq!(stats.applications_this_month, 0);
        assert_eq!(stats.interview_rate, 0.0);
        assert_eq!(stats.offer_rate, 0.0);
        assert_eq!(stats.average_salary, None);
    }

    #[test]
    fn offer_rate_guards_against_no_interviews() {
        // Offers without any interviewing records still divide by zero
        // nowhere; the rate is pinned to 0.
        let records = vec![
            record("1", Status::Offer, (2024, 1, 5)),
            record("2", Status::Applied, (2024, 1, 6)),
        ];
        let stats = compute(&records, eval(2024, 2, 1));
        assert_eq!(stats.offer_rate, 0.0);
    }

    #[test]
    fn average_salary_skips_absent_values() {
        let mut records = vec![
            record("1", Status::Applied, (2024, 1, 5)),
            record("2", Status::Applied, (2024, 1, 6)),
            record("3", Status::Applied, (2024, 1, 7)),
            record("4", Status::Applied, (2024, 1, 8)),
        ];
        records[0].salary = Some(150_000);
        records[1].salary = Some(140_000);
        records[3].salary = Some(160_000);
        let stats = compute(&records, eval(2024, 2, 1));
        assert_eq!(stats.average_salary, Some(150_000.0));
    }

    #[test]
    fn zero_salary_is_present_not_absent() {
        let mut records = vec![
            record("1", Status::Applied, (2024, 1, 5)),
            record("2", Status::Applied, (2024, 1, 6)),
        ];
        records[0].salary = Some(0);
        records[1].salary = Some(100_000);
        let stats = compute(&records, eval(2024, 2, 1));
        assert_eq!(stats.average_salary, Some(50_000.0));
    }

    #[test]
    fn this_month_matches_calendar_month_and_year() {
        let records = vec![
            record("1", Status::Applied, (2024, 1, 2)),
            record("2", Status::Applied, (2024, 1, 31)),
            record("3", Status::Applied, (2023, 1, 15)),
            record("4", Status::Applied, (2024, 2, 1)),
        ];
        let stats = compute(&records, eval(2024, 1, 20));
        assert_eq!(stats.applications_this_month, 2);
    }

    #[test]
    fn trend_marks_use_strict_thresholds() {
        let mut stats = compute(&[], eval(2024, 2, 1));
        stats.interview_rate = 0.15;
        stats.offer_rate = 0.10;
        assert!(!stats.interview_trend_up());
        assert!(!stats.offer_trend_up());
        stats.interview_rate = 0.16;
        stats.offer_rate = 0.11;
        assert!(stats.interview_trend_up());
        assert!(stats.offer_trend_up());
    }
}
