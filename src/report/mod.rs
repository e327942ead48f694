//! Console rendering of verdicts.
//!
//! Verdicts go to stdout so runs can be captured or diffed; progress and
//! diagnostics go through the logger instead.

use colored::Colorize;

use crate::checks::Verdict;
use crate::RunReport;

/// Prints one verdict: the primary line, then indented secondary notes and
/// warnings.
pub fn render(verdict: &Verdict) {
    if verdict.passed {
        println!("{} {}", "OK:".green().bold(), verdict.message);
    } else {
        println!("{} {}", "**NG:".red().bold(), verdict.message);
    }
    for note in &verdict.secondary {
        println!("    {note}");
    }
    for warning in &verdict.warnings {
        println!("    {} {warning}", "WARNING:".yellow());
    }
}

/// Prints the aggregate result of a run.
pub fn summary(report: &RunReport) {
    let line = format!(
        "{} check{} run in {:.1}s: {} passed, {} failed",
        report.total,
        if report.total == 1 { "" } else { "s" },
        report.elapsed_seconds,
        report.passed,
        report.failed
    );
    if report.failed == 0 {
        println!("{}", line.green());
    } else {
        println!("{}", line.red());
    }
}
