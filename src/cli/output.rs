use colored::*;
use serde::Serialize;

use crate::common::format::{format_count, format_counter, format_path, truncate};
use crate::flatten::FlattenReport;
use crate::raw::{RawFilterReport, ScanCounters};

/// Errors listed before the rest are summarized
const MAX_LISTED_ERRORS: usize = 10;

/// Print the two-pass summary of a RAW filtering run
pub fn print_filter_raw_report(counters: &ScanCounters, report: &RawFilterReport) {
    println!();
    println!("{}  phototidy filter-raw", "📷");
    println!("{}", "─".repeat(60).dimmed());
    println!(
        "  JPEG   total {}  •  camera {}  •  unique {}",
        counters.total_matched.to_string().cyan(),
        counters.prefix_matched.to_string().cyan(),
        counters.unique_names.to_string().cyan(),
    );
    let deleted_label = if report.dry_run { "would trash" } else { "trashed" };
    println!(
        "  RAW    total {}  •  kept {}  •  {} {}  •  failed {}",
        report.total().to_string().cyan(),
        format_counter(report.kept, Color::Green),
        deleted_label,
        format_counter(report.deleted, Color::Yellow),
        format_counter(report.failed, Color::Red),
    );
    println!("{}", "─".repeat(60).dimmed());

    if report.dry_run {
        println!(
            "  {} Dry run — {} would be trashed. No files modified.",
            "ℹ️",
            format_count(report.deleted, "RAW file")
        );
    }

    print_errors(&report.errors);
    println!();
}

/// Print the summary of a flatten run
pub fn print_flatten_report(report: &FlattenReport, detailed: bool) {
    println!();
    println!("{}  phototidy flatten", "🗂️");
    println!("{}", "─".repeat(60).dimmed());
    let moved_label = if report.dry_run { "would move" } else { "moved" };
    println!(
        "  matched {}  •  {} {}  •  failed {}",
        report.matched.to_string().cyan(),
        moved_label,
        format_counter(report.moved, Color::Green),
        format_counter(report.failed, Color::Red),
    );
    println!("{}", "─".repeat(60).dimmed());

    if detailed {
        for planned in &report.moves {
            println!(
                "    {} {} {}",
                truncate(&format_path(&planned.from), 50).dimmed(),
                "→".dimmed(),
                planned
                    .to
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default()
                    .cyan()
            );
        }
    }

    if report.dry_run {
        println!(
            "  {} Dry run — {} would be moved. No files modified.",
            "ℹ️",
            format_count(report.moved, "file")
        );
    }

    print_errors(&report.errors);
    println!();
}

/// Print the RAW filtering summary as one JSON document
pub fn print_filter_raw_json(counters: &ScanCounters, report: &RawFilterReport) {
    #[derive(Serialize)]
    struct Summary<'a> {
        jpeg: &'a ScanCounters,
        raw: &'a RawFilterReport,
    }
    print_json(&Summary { jpeg: counters, raw: report });
}

pub fn print_flatten_json(report: &FlattenReport) {
    print_json(report);
}

/// `total camera unique kept deleted failed`
pub fn print_filter_raw_quiet(counters: &ScanCounters, report: &RawFilterReport) {
    println!(
        "{}  {}  {}  {}  {}  {}",
        counters.total_matched,
        counters.prefix_matched,
        counters.unique_names,
        report.kept,
        report.deleted,
        report.failed
    );
}

/// `matched moved failed`
pub fn print_flatten_quiet(report: &FlattenReport) {
    println!("{}  {}  {}", report.matched, report.moved, report.failed);
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing results: {}", e),
    }
}

fn print_errors(errors: &[String]) {
    if errors.is_empty() {
        return;
    }
    println!();
    println!("  {} {}:", "⚠".yellow(), format_count(errors.len(), "error"));
    for (i, err) in errors.iter().enumerate().take(MAX_LISTED_ERRORS) {
        println!("    {} {}", format!("{}.", i + 1).dimmed(), err.dimmed());
    }
    if errors.len() > MAX_LISTED_ERRORS {
        println!(
            "    ... and {} more",
            (errors.len() - MAX_LISTED_ERRORS).to_string().dimmed()
        );
    }
}
