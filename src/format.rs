use chrono::{Datelike, NaiveDate};

// Rate formatted the way the stat cards show it: one decimal, percent.
pub fn percent(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}

pub fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn currency(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("${}", thousands(v.round() as u64)),
        None => "N/A".to_string(),
    }
}

// Display form of a date, month/day/year without padding. Also the grouping
// key for the applications-over-time series.
pub fn display_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn percent_keeps_one_decimal() {
        assert_eq!(percent(0.5), "50.0%");
        assert_eq!(percent(0.0), "0.0%");
        assert_eq!(percent(0.256), "25.6%");
    }

    #[test]
    fn thousands_groups_digits() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(1000), "1,000");
        assert_eq!(thousands(150000), "150,000");
        assert_eq!(thousands(1234567), "1,234,567");
    }

    #[test]
    fn currency_handles_absent() {
        assert_eq!(currency(Some(150000.0)), "$150,000");
        assert_eq!(currency(Some(145000.5)), "$145,001");
        assert_eq!(currency(None), "N/A");
    }

    #[test]
    fn display_date_is_unpadded() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(display_date(date), "1/5/2024");
        let date = NaiveDate::from_ymd_opt(2024, 12, 25).unwrap();
        assert_eq!(display_date(date), "12/25/2024");
    }

    #[test]
    fn truncate_is_char_safe() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long position title", 10), "a very ...");
        assert_eq!(truncate("Zürich Büro GmbH", 9), "Zürich...");
    }
}
