use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;

use crate::models::ApplicationRecord;

// Raw text captured from the add flow. Everything stays a string until
// submission so invalid input can be reported in one pass.
#[derive(Debug, Clone)]
pub struct ApplicationForm {
    pub company: String,
    pub position: String,
    pub location: String,
    pub salary: String,
    pub job_type: String,
    pub source: String,
    pub status: String,
    pub applied_date: String,
    pub notes: String,
}

impl ApplicationForm {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            company: String::new(),
            position: String::new(),
            location: String::new(),
            salary: String::new(),
            // The two selects start unchosen; validate() holds submission
            // until both are picked.
            job_type: String::new(),
            source: String::new(),
            status: "applied".to_string(),
            applied_date: today.format("%Y-%m-%d").to_string(),
            notes: String::new(),
        }
    }

    // Salary and notes are optional; everything else must be present.
    pub fn validate(&self) -> Result<()> {
        let mut missing = Vec::new();
        for (name, value) in [
            ("company", &self.company),
            ("position", &self.position),
            ("location", &self.location),
            ("job type", &self.job_type),
            ("source", &self.source),
            ("status", &self.status),
            ("applied date", &self.applied_date),
        ] {
            if value.trim().is_empty() {
                missing.push(name);
            }
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(anyhow!("Missing required fields: {}", missing.join(", ")))
        }
    }

    pub fn into_record(self, id: String, today: NaiveDate) -> Result<ApplicationRecord> {
        self.validate()?;
        let applied_date = NaiveDate::parse_from_str(self.applied_date.trim(), "%Y-%m-%d")
            .with_context(|| format!("Invalid applied date '{}'", self.applied_date.trim()))?;
        let notes = self.notes.trim();
        Ok(ApplicationRecord {
            id,
            company: self.company.trim().to_string(),
            position: self.position.trim().to_string(),
            status: self.status.trim().parse()?,
            applied_date,
            location: self.location.trim().to_string(),
            // Anything that is not a plain number means no figure was given.
            salary: self.salary.trim().parse().ok(),
            job_type: self.job_type.trim().parse()?,
            source: self.source.trim().parse()?,
            notes: (!notes.is_empty()).then(|| notes.to_string()),
            last_updated: today,
        })
    }
}

pub async fn simulate_save(record: &ApplicationRecord) -> Result<()> {
    // Mimics the latency of a backend round trip.
    tokio::time::sleep(Duration::from_secs(1)).await;
    log::info!(
        "recorded application {}: {} at {}",
        record.id,
        record.position,
        record.company
    );
    // TODO: replace with a real write once a storage backend lands.
    Ok(())
}
