//! Output formatting for solver results

use crate::executor::Report;
use chrono::TimeDelta;
use std::fmt::Write;

/// Output formatter for solver results
pub struct OutputFormatter {
    quiet: bool,
}

impl OutputFormatter {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    pub fn print(&self, report: &Report) {
        print!("{}", self.render(report));
    }

    /// One `Result part{N}: {answer}` line per part, then the timing summary
    /// unless quiet
    pub fn render(&self, report: &Report) -> String {
        let mut out = String::new();
        for result in &report.results {
            let _ = writeln!(out, "Result part{}: {}", result.part, result.answer);
        }
        if self.quiet {
            return out;
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "--- {}/{:02} ---", report.year, report.day);
        let _ = writeln!(out, "Parse time: {}", format_duration(report.parse_time));
        for result in &report.results {
            let _ = writeln!(
                out,
                "Part {} solve time: {}",
                result.part,
                format_duration(result.elapsed)
            );
        }
        let _ = writeln!(
            out,
            "Total time: {}",
            format_duration(report.total_time())
        );
        out
    }
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}
