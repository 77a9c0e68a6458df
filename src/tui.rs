use anyhow::Result;
use chrono::{DateTime, Utc};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    prelude::*,
    widgets::{BarChart, Block, Borders, Paragraph, Sparkline},
};
use std::io::stdout;

use crate::charts::ChartReport;
use crate::filter;
use crate::format;
use crate::models::{
    ApplicationRecord, ChartBucket, DateRange, FilterConfig, JobType, Source, Status,
};
use crate::stats;

struct AppState {
    records: Vec<ApplicationRecord>,
    filters: FilterConfig,
    as_of: Option<DateTime<Utc>>,
}

impl AppState {
    fn new(
        records: Vec<ApplicationRecord>,
        filters: FilterConfig,
        as_of: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            records,
            filters,
            as_of,
        }
    }

    fn eval_instant(&self) -> DateTime<Utc> {
        self.as_of.unwrap_or_else(Utc::now)
    }

    fn cycle_status(&mut self) {
        self.filters.status = cycle(self.filters.status, &Status::ALL);
    }

    fn cycle_job_type(&mut self) {
        self.filters.job_type = cycle(self.filters.job_type, &JobType::ALL);
    }

    fn cycle_source(&mut self) {
        self.filters.source = cycle(self.filters.source, &Source::ALL);
    }

    fn cycle_range(&mut self) {
        let ranges = DateRange::ALL_RANGES;
        let idx = ranges
            .iter()
            .position(|r| *r == self.filters.date_range)
            .unwrap_or(0);
        self.filters.date_range = ranges[(idx + 1) % ranges.len()];
    }

    fn clear_filters(&mut self) {
        self.filters = FilterConfig::default();
    }
}

// Steps a selector through None -> first -> ... -> last -> None.
fn cycle<T: Copy + PartialEq>(current: Option<T>, all: &[T]) -> Option<T> {
    match current {
        None => all.first().copied(),
        Some(value) => {
            let idx = all.iter().position(|v| *v == value).unwrap_or(all.len() - 1);
            all.get(idx + 1).copied()
        }
    }
}

pub fn run(
    records: Vec<ApplicationRecord>,
    filters: FilterConfig,
    as_of: Option<DateTime<Utc>>,
) -> Result<()> {
    let mut state = AppState::new(records, filters, as_of);

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let result = run_loop(&mut terminal, &mut state);

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    state: &mut AppState,
) -> Result<()> {
    loop {
        terminal.draw(|frame| draw(frame, state))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => break,
                KeyCode::Char('s') => state.cycle_status(),
                KeyCode::Char('t') => state.cycle_job_type(),
                KeyCode::Char('o') => state.cycle_source(),
                KeyCode::Char('d') => state.cycle_range(),
                KeyCode::Char('c') => state.clear_filters(),
                _ => {}
            }
        }
    }
    Ok(())
}

fn draw(frame: &mut Frame, state: &AppState) {
    // Stats always cover the full set; only the charts follow the filters.
    let now = state.eval_instant();
    let stats = stats::compute(&state.records, now);
    let filtered = filter::apply(&state.records, &state.filters, now);
    let report = ChartReport::build(&filtered, now);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(4),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    // Header: title plus the current filter selections
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "Job Application Dashboard",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            filter_summary(&state.filters),
            Style::default().fg(Color::DarkGray),
        )),
    ]);
    frame.render_widget(header, chunks[0]);

    // Stat cards
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(20); 5])
        .split(chunks[1]);

    render_card(
        frame,
        cards[0],
        "Total Applications",
        stats.total_applications.to_string(),
        None,
    );
    render_card(
        frame,
        cards[1],
        "This Month",
        stats.applications_this_month.to_string(),
        None,
    );
    render_card(
        frame,
        cards[2],
        "Interview Rate",
        format::percent(stats.interview_rate),
        Some(stats.interview_trend_up()),
    );
    render_card(
        frame,
        cards[3],
        "Offer Rate",
        format::percent(stats.offer_rate),
        Some(stats.offer_trend_up()),
    );
    render_card(
        frame,
        cards[4],
        "Avg Salary",
        format::currency(stats.average_salary),
        None,
    );

    // Chart grid
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);
    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);
    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    render_bar_chart(
        frame,
        top[0],
        "Applications by Status",
        &report.status,
        Color::Cyan,
    );
    render_sparkline(frame, top[1], &report.over_time);
    render_bar_chart(frame, bottom[0], "Top Sources", &report.sources, Color::Green);
    render_bar_chart(
        frame,
        bottom[1],
        "Job Types",
        &report.job_types,
        Color::Yellow,
    );

    // Footer help
    let help = Paragraph::new(format!(
        " {} of {} shown ({} active)  as of {}  s:status t:type o:source d:range c:clear q:quit",
        filtered.len(),
        state.records.len(),
        state.filters.active_count(),
        now.format("%Y-%m-%d"),
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[3]);
}

fn filter_summary(filters: &FilterConfig) -> String {
    format!(
        "status:{}  type:{}  source:{}  range:{}",
        filters.status.map_or("all", |s| s.as_str()),
        filters.job_type.map_or("all", |t| t.as_str()),
        filters.source.map_or("all", |s| s.as_str()),
        filters.date_range.label(),
    )
}

// Rate cards carry a two-state health mark; the other cards leave the
// trend line blank.
fn trend_note(up: bool) -> (&'static str, Color) {
    if up {
        ("^ trending up", Color::Green)
    } else {
        ("v trending down", Color::Red)
    }
}

fn render_card(frame: &mut Frame, area: Rect, title: &str, value: String, trend: Option<bool>) {
    let mut lines = vec![Line::from(Span::styled(
        value,
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    match trend {
        Some(up) => {
            let (note, color) = trend_note(up);
            lines.push(Line::from(Span::styled(note, Style::default().fg(color))));
        }
        None => lines.push(Line::from("")),
    }
    let card = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", title)),
    );
    frame.render_widget(card, area);
}

fn render_bar_chart(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    buckets: &[ChartBucket],
    color: Color,
) {
    let data: Vec<(&str, u64)> = buckets
        .iter()
        .map(|b| (b.label.as_str(), b.count as u64))
        .collect();
    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", title)),
        )
        .data(data.as_slice())
        .bar_width(9)
        .bar_gap(1)
        .bar_style(Style::default().fg(color));
    frame.render_widget(chart, area);
}

fn render_sparkline(frame: &mut Frame, area: Rect, buckets: &[ChartBucket]) {
    let values: Vec<u64> = buckets.iter().map(|b| b.count as u64).collect();
    let spark = Sparkline::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Applications Over Time (30 Days) "),
        )
        .data(&values)
        .style(Style::default().fg(Color::Magenta));
    frame.render_widget(spark, area);
}
