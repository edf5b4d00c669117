//! The `growthpath status` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use growthpath_core::dashboard::Dashboard;

use super::{take_hint, GlobalOpts, Session};

pub fn execute(opts: &GlobalOpts) -> Result<()> {
    let session = Session::open(opts)?;
    let results = session.store.results()?;
    let dashboard = Dashboard::summarize(&results);

    let mut table = Table::new();
    table.set_header(vec!["Assessment", "Time", "Status", "Score"]);
    for card in &dashboard.assessments {
        let (status, score) = match results.domain_average(card.domain) {
            Some(avg) => ("done".to_string(), format!("{avg:.0}%")),
            None => (take_hint(card.domain), "-".to_string()),
        };
        table.add_row(vec![
            Cell::new(card.title),
            Cell::new(format!("~{} min", card.estimated_minutes)),
            Cell::new(status),
            Cell::new(score),
        ]);
    }
    println!("{table}");

    println!(
        "\nCompleted {}/{} ({}%), average score {}%",
        dashboard.completed,
        dashboard.assessments.len(),
        dashboard.completion_percent,
        dashboard.average_score
    );
    println!("{}", dashboard.message);

    if dashboard.report_unlocked {
        println!("Your report is ready: run `growthpath report`.");
    }

    if let Some(plan) = session.store.plan()? {
        let progress = session.store.progress()?;
        let total = plan.total_weeks();
        println!(
            "\nImprovement plan ({} days): {}/{} weeks done ({}%)",
            plan.duration.days(),
            progress.completed_count(),
            total,
            progress.percentage(total)
        );
    }

    Ok(())
}
