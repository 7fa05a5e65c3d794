// src/presentation.rs
use std::fmt;

use classify_lines_domain::{Measure, Statistics, StatisticsSet, options::ReportMode};

pub const REPORT_HEADER: &str = "=== Statistics ===";

/// Human-readable statistics report. Empty categories are omitted.
pub struct Report<'a> {
    totals: &'a StatisticsSet,
    mode: ReportMode,
}

impl<'a> Report<'a> {
    pub const fn new(totals: &'a StatisticsSet, mode: ReportMode) -> Self {
        Self { totals, mode }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{REPORT_HEADER}")?;
        for stats in self.totals.iter().filter(|s| !s.is_empty()) {
            match self.mode {
                ReportMode::Short => writeln!(f, "{}: {}", stats.category(), stats.count())?,
                ReportMode::Full => write_full(f, stats)?,
            }
        }
        Ok(())
    }
}

fn write_full(f: &mut fmt::Formatter<'_>, stats: &Statistics) -> fmt::Result {
    writeln!(f, "{}:", stats.category())?;
    writeln!(f, "  count: {}", stats.count())?;
    match stats.measure() {
        Measure::Integer(summary) => {
            write_field(f, "min", summary.min())?;
            write_field(f, "max", summary.max())?;
            writeln!(f, "  sum: {}", summary.sum())?;
        }
        Measure::Float(summary) => {
            write_field(f, "min", summary.min())?;
            write_field(f, "max", summary.max())?;
            writeln!(f, "  sum: {}", summary.sum())?;
        }
        Measure::Text(summary) => {
            write_field(f, "shortest", summary.shortest())?;
            write_field(f, "longest", summary.longest())?;
        }
    }
    write_field(f, "average", stats.average())
}

fn write_field<T: fmt::Display>(f: &mut fmt::Formatter<'_>, name: &str, value: Option<T>) -> fmt::Result {
    match value {
        Some(v) => writeln!(f, "  {name}: {v}"),
        None => Ok(()),
    }
}

pub fn render_report(totals: &StatisticsSet, mode: ReportMode) -> String {
    Report::new(totals, mode).to_string()
}

pub fn print_report(totals: &StatisticsSet, mode: ReportMode) {
    print!("{}", Report::new(totals, mode));
}
