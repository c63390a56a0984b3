//! Terminal summaries of a batch run.

use crate::processing::{CreateReport, UpdateReport};
use colored::Colorize;
use std::path::Path;

fn print_report_path(path: Option<&Path>) {
    match path {
        Some(p) => println!("{} {}", "Report:".bold(), p.display()),
        None => println!("{}", "No report written".yellow()),
    }
}

pub fn print_create_report(report: &CreateReport) {
    for outcome in &report.outcomes {
        let line = outcome.message();
        match outcome.result {
            Ok(_) => println!("{}", line.green()),
            Err(_) => println!("{}", line.red()),
        }
    }
    println!(
        "#{}# {} of {} hosts created",
        "DONE".on_blue(),
        report.created(),
        report.outcomes.len()
    );
    print_report_path(report.report_path.as_deref());
}

pub fn print_update_report(report: &UpdateReport) {
    for outcome in &report.outcomes {
        let line = outcome.message();
        match outcome.result {
            Ok(_) => println!("{}", line.green()),
            Err(_) => println!("{}", line.red()),
        }
    }
    println!(
        "#{}# {} of {} hosts updated",
        "DONE".on_blue(),
        report.updated(),
        report.outcomes.len()
    );
    print_report_path(Some(&report.report_path));
}
