mod charts;
mod filter;
mod form;
mod format;
mod models;
mod sample;
mod stats;
mod tui;

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use clap::{Args, Parser, Subcommand};

use charts::ChartReport;
use form::ApplicationForm;
use models::{ChartBucket, FilterConfig};

#[derive(Parser)]
#[command(name = "jobdash")]
#[command(about = "Job application tracking - dashboard, stats, and charts for your pipeline")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct FilterArgs {
    /// Filter by status (applied, interviewing, offer, rejected, withdrawn, pending)
    #[arg(short, long)]
    status: Option<String>,

    /// Filter by job type (full-time, part-time, contract, internship, freelance)
    #[arg(short = 't', long)]
    job_type: Option<String>,

    /// Filter by source (linkedin, indeed, company-website, referral, glassdoor, other)
    #[arg(long)]
    source: Option<String>,

    /// Restrict to a trailing window (all, 7days, 30days, 90days)
    #[arg(short, long, default_value = "all")]
    range: String,
}

impl FilterArgs {
    fn to_config(&self) -> Result<FilterConfig> {
        Ok(FilterConfig {
            status: self.status.as_deref().map(str::parse).transpose()?,
            job_type: self.job_type.as_deref().map(str::parse).transpose()?,
            source: self.source.as_deref().map(str::parse).transpose()?,
            date_range: self.range.parse()?,
        })
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive dashboard
    Dashboard {
        #[command(flatten)]
        filters: FilterArgs,

        /// Evaluate date windows as of this date (YYYY-MM-DD) instead of now
        #[arg(long)]
        as_of: Option<String>,
    },

    /// List applications
    List {
        #[command(flatten)]
        filters: FilterArgs,

        /// Evaluate date windows as of this date (YYYY-MM-DD) instead of now
        #[arg(long)]
        as_of: Option<String>,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show pipeline statistics (always over the full set)
    Stats {
        /// Evaluate date windows as of this date (YYYY-MM-DD) instead of now
        #[arg(long)]
        as_of: Option<String>,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show chart aggregates for the filtered set
    Charts {
        #[command(flatten)]
        filters: FilterArgs,

        /// Evaluate date windows as of this date (YYYY-MM-DD) instead of now
        #[arg(long)]
        as_of: Option<String>,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Record a new application
    Add {
        /// Position title
        position: String,

        /// Company name
        company: String,

        /// Location (e.g. "Remote" or "Austin, TX")
        #[arg(short, long)]
        location: String,

        /// Applied date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        applied: Option<String>,

        /// Status (applied, interviewing, offer, rejected, withdrawn, pending)
        #[arg(long, default_value = "applied")]
        status: String,

        /// Job type (full-time, part-time, contract, internship, freelance)
        #[arg(short = 't', long, default_value = "full-time")]
        job_type: String,

        /// Source (linkedin, indeed, company-website, referral, glassdoor, other)
        #[arg(long, default_value = "linkedin")]
        source: String,

        /// Salary as a plain number, e.g. 150000
        #[arg(long)]
        salary: Option<String>,

        /// Free-form notes
        #[arg(short, long)]
        notes: Option<String>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let records = sample::sample_applications();
    log::debug!("loaded {} seed applications", records.len());

    match cli.command {
        Commands::Dashboard { filters, as_of } => {
            let filters = filters.to_config()?;
            let as_of = parse_as_of(as_of.as_deref())?;
            tui::run(records, filters, as_of)?;
        }

        Commands::List {
            filters,
            as_of,
            json,
        } => {
            let filters = filters.to_config()?;
            let now = eval_instant(as_of.as_deref())?;
            let shown = filter::apply(&records, &filters, now);
            if json {
                println!("{}", serde_json::to_string_pretty(&shown)?);
            } else if shown.is_empty() {
                println!("No applications match.");
            } else {
                println!(
                    "{:<4} {:<14} {:<26} {:<22} {:<12} {:>10}",
                    "ID", "STATUS", "POSITION", "COMPANY", "APPLIED", "SALARY"
                );
                println!("{}", "-".repeat(94));
                for record in &shown {
                    let salary = match record.salary {
                        Some(v) => format!("${}", format::thousands(v)),
                        None => "-".to_string(),
                    };
                    println!(
                        "{:<4} {:<14} {:<26} {:<22} {:<12} {:>10}",
                        record.id,
                        record.status,
                        format::truncate(&record.position, 24),
                        format::truncate(&record.company, 20),
                        // NaiveDate's Display ignores width specs
                        record.applied_date.to_string(),
                        salary
                    );
                }
                println!("\n{} of {} shown", shown.len(), records.len());
            }
        }

        Commands::Stats { as_of, json } => {
            let now = eval_instant(as_of.as_deref())?;
            let stats = stats::compute(&records, now);
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                let interview_mark = if stats.interview_trend_up() {
                    " (trending up)"
                } else {
                    " (trending down)"
                };
                let offer_mark = if stats.offer_trend_up() {
                    " (trending up)"
                } else {
                    " (trending down)"
                };
                println!("Pipeline:");
                println!("  Total applications: {}", stats.total_applications);
                println!("  This month:         {}", stats.applications_this_month);
                println!(
                    "  Interview rate:     {}{}",
                    format::percent(stats.interview_rate),
                    interview_mark
                );
                println!(
                    "  Offer rate:         {}{}",
                    format::percent(stats.offer_rate),
                    offer_mark
                );
                println!(
                    "  Average salary:     {}",
                    format::currency(stats.average_salary)
                );
            }
        }

        Commands::Charts {
            filters,
            as_of,
            json,
        } => {
            let filters = filters.to_config()?;
            let now = eval_instant(as_of.as_deref())?;
            let shown = filter::apply(&records, &filters, now);
            let report = ChartReport::build(&shown, now);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_chart("Applications by Status", &report.status);
                print_chart("Top Sources", &report.sources);
                print_chart("Job Types", &report.job_types);
                print_chart("Applications Over Time (30 Days)", &report.over_time);
            }
        }

        Commands::Add {
            position,
            company,
            location,
            applied,
            status,
            job_type,
            source,
            salary,
            notes,
        } => {
            let today = Utc::now().date_naive();
            let mut form = ApplicationForm::new(today);
            form.position = position;
            form.company = company;
            form.location = location;
            if let Some(applied) = applied {
                form.applied_date = applied;
            }
            form.status = status;
            form.job_type = job_type;
            form.source = source;
            form.salary = salary.unwrap_or_default();
            form.notes = notes.unwrap_or_default();

            let id = models::next_id(&records);
            let record = form.into_record(id, today)?;

            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_time()
                .build()?;
            runtime.block_on(form::simulate_save(&record))?;

            println!(
                "Recorded application #{}: {} at {}",
                record.id, record.position, record.company
            );
            println!("(in-memory only; nothing is persisted yet)");
        }
    }

    Ok(())
}

fn print_chart(title: &str, buckets: &[ChartBucket]) {
    println!("\n{}:", title);
    if buckets.is_empty() {
        println!("  (no data)");
        return;
    }
    let max = buckets.iter().map(|b| b.count).max().unwrap_or(1);
    for bucket in buckets {
        let width = bucket.count * 30 / max;
        println!(
            "  {:<18} {:<30} {}",
            bucket.label,
            "#".repeat(width),
            bucket.count
        );
    }
}

// An explicit as-of pins every window calculation to midnight UTC of that day,
// which keeps output reproducible for a fixed data set.
fn parse_as_of(raw: Option<&str>) -> Result<Option<DateTime<Utc>>> {
    let Some(raw) = raw else { return Ok(None) };
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .with_context(|| format!("Invalid --as-of date '{}'", raw))?;
    Ok(Some(date.and_time(NaiveTime::MIN).and_utc()))
}

fn eval_instant(raw: Option<&str>) -> Result<DateTime<Utc>> {
    Ok(parse_as_of(raw)?.unwrap_or_else(Utc::now))
}
