//! The `growthpath report` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use growthpath_core::analysis::PLAN_OPTIONS;
use growthpath_core::error::ReportError;
use growthpath_core::model::Domain;
use growthpath_report::{html, markdown, FinalReport};

use super::{emit, take_hint, GlobalOpts, Session};

pub fn execute(opts: &GlobalOpts, format: String, out: Option<PathBuf>) -> Result<()> {
    let session = Session::open(opts)?;
    let results = session.store.results()?;
    let report = FinalReport::build(&results).map_err(with_hints)?;

    match format.as_str() {
        "json" => match &out {
            Some(path) => {
                report.save_json(path)?;
                eprintln!("Written to {}", path.display());
            }
            None => println!("{}", serde_json::to_string_pretty(&report)?),
        },
        "markdown" | "md" => emit(&markdown::final_report_markdown(&report), out.as_deref())?,
        "html" => {
            let page = html::generate_final_html(&report);
            match &out {
                Some(path) => {
                    html::write_html(&page, path)?;
                    eprintln!("Written to {}", path.display());
                }
                None => println!("{page}"),
            }
        }
        "text" => {
            if out.is_some() {
                anyhow::bail!("--out needs --format json, markdown or html");
            }
            print_text(&report);
        }
        other => anyhow::bail!("unknown format: {other} (expected text, json, markdown or html)"),
    }
    Ok(())
}

pub(super) fn with_hints(e: ReportError) -> anyhow::Error {
    match &e {
        ReportError::MissingAssessments { missing } => {
            let hints: Vec<String> = missing.iter().map(|d| take_hint(*d)).collect();
            anyhow::anyhow!("{e}; {}", hints.join(", "))
        }
    }
}

fn print_text(report: &FinalReport) {
    let analysis = &report.analysis;
    println!("Your Complete Development Profile\n");
    println!(
        "{} - overall score {}%",
        report.profile.title, analysis.overall_score
    );
    println!("{}\n", report.profile.description);

    let mut table = Table::new();
    table.set_header(vec!["Area", "Average", "Priority"]);
    let order = analysis.development_areas.ordered();
    for domain in Domain::ALL {
        let priority = match order.iter().position(|d| *d == domain) {
            Some(0) => "primary",
            Some(1) => "secondary",
            _ => "maintain",
        };
        table.add_row(vec![
            Cell::new(domain.title()),
            Cell::new(format!("{:.1}%", analysis.averages.get(domain))),
            Cell::new(priority),
        ]);
    }
    println!("{table}");

    print_section("Strengths", &analysis.strengths);
    print_section("Areas for growth", &analysis.weaknesses);
    print_section("Personality insights", &analysis.personality_insights);
    print_section("Memory insights", &analysis.memory_insights);
    print_section("Communication insights", &analysis.communication_insights);
    print_section("Recommendations", &analysis.recommendations);

    println!("\nChoose an improvement plan:");
    for option in &PLAN_OPTIONS {
        let marker = if option.recommended { " (recommended)" } else { "" };
        println!(
            "  {} days - {}{}: {}",
            option.duration.days(),
            option.title,
            marker,
            option.description
        );
    }
    println!("\nRun `growthpath plan create --duration <days>` to start.");
}

fn print_section(heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!("\n{heading}:");
    for item in items {
        println!("  - {item}");
    }
}
