//! The `growthpath plan` subcommands.

use std::path::PathBuf;

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};

use growthpath_core::analysis::analyze;
use growthpath_core::error::PlanError;
use growthpath_core::model::{Domain, Phase, PlanData, PlanDuration};
use growthpath_core::plan::{phase_weeks, SUCCESS_TIPS};
use growthpath_report::{html, markdown, PlanReport};

use super::report::with_hints;
use super::{emit, take_hint, GlobalOpts, Session};

pub fn create(opts: &GlobalOpts, duration: Option<u32>, seed: Option<u64>) -> Result<()> {
    let mut session = Session::open(opts)?;
    let days = duration.unwrap_or(session.config.default_plan_duration);
    let duration = PlanDuration::try_from(days)?;

    let results = session.store.results()?;
    let analysis = analyze(&results).map_err(with_hints)?;
    let seed = seed
        .or(session.config.seed)
        .unwrap_or_else(rand::random::<u64>);

    let plan = PlanData::from_analysis(&analysis, duration, seed);
    session
        .store
        .save_plan(&plan)
        .context("failed to save improvement plan")?;
    tracing::info!(%duration, seed, weeks = plan.total_weeks(), "created improvement plan");

    let areas = plan.development_areas;
    println!(
        "Created a {} plan: {} weeks, {} per week.",
        duration,
        plan.total_weeks(),
        duration.time_commitment()
    );
    println!(
        "Focus order: {}, then {}, then {}.",
        areas.primary, areas.secondary, areas.tertiary
    );
    println!("\nRun `growthpath plan show` to see your weekly goals.");
    Ok(())
}

pub fn show(opts: &GlobalOpts, format: String, out: Option<PathBuf>) -> Result<()> {
    let session = Session::open(opts)?;
    let report = load_report(&session)?;

    match format.as_str() {
        "json" => match &out {
            Some(path) => {
                report.save_json(path)?;
                eprintln!("Written to {}", path.display());
            }
            None => println!("{}", serde_json::to_string_pretty(&report)?),
        },
        "markdown" | "md" => emit(&markdown::plan_markdown(&report), out.as_deref())?,
        "html" => {
            let page = html::generate_plan_html(&report);
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

pub fn complete(opts: &GlobalOpts, week: u32) -> Result<()> {
    let mut session = Session::open(opts)?;
    let plan = session
        .store
        .plan()?
        .ok_or(PlanError::NoPlan)
        .context("run `growthpath plan create` first")?;
    let total = plan.total_weeks();

    let mut progress = session.store.progress()?;
    let done = progress.toggle(week, total)?;
    session
        .store
        .save_progress(&progress)
        .context("failed to save plan progress")?;
    tracing::info!(week, done, "updated plan progress");

    let state = if done { "complete" } else { "not complete" };
    println!("Week {week} marked {state}.");
    println!(
        "Progress: {}/{} weeks ({}%), {} remaining.",
        progress.completed_count(),
        total,
        progress.percentage(total),
        progress.remaining(total)
    );
    Ok(())
}

fn load_report(session: &Session) -> Result<PlanReport> {
    let plan = session
        .store
        .plan()?
        .ok_or(PlanError::NoPlan)
        .context("run `growthpath plan create` first")?;
    let personality = session
        .store
        .personality()?
        .with_context(|| {
            format!(
                "the plan needs personality results; {}",
                take_hint(Domain::Personality)
            )
        })?;
    let progress = session.store.progress()?;
    Ok(PlanReport::build(plan, &personality, progress))
}

fn print_text(report: &PlanReport) {
    let plan = &report.plan;
    let total = report.total_weeks();
    println!(
        "Your {} Development Journey (overall score {}%)",
        plan.duration, plan.overall_score
    );
    println!(
        "{} weeks, {} per week, created {}",
        total,
        plan.duration.time_commitment(),
        plan.created_at.format("%Y-%m-%d")
    );
    println!(
        "Progress: {}/{} weeks ({}%)\n",
        report.completed_weeks.completed_count(),
        total,
        report.progress_percent
    );

    for phase in [Phase::Foundation, Phase::Development, Phase::Integration] {
        let weeks = phase_weeks(phase, total);
        if !weeks.is_empty() {
            println!("  {phase}: weeks {}-{}", weeks.start(), weeks.end());
        }
    }
    println!();

    let mut table = Table::new();
    table.set_header(vec!["Week", "Focus", "Phase", "Exercises", "Done"]);
    for goal in &report.weeks {
        let done = if report.completed_weeks.is_complete(goal.week) {
            "yes"
        } else {
            ""
        };
        table.add_row(vec![
            Cell::new(goal.week),
            Cell::new(goal.focus.title()),
            Cell::new(goal.phase),
            Cell::new(goal.exercises.join("\n")),
            Cell::new(done),
        ]);
    }
    println!("{table}");

    println!("\nTips for success:");
    for tip in SUCCESS_TIPS {
        println!("  - {tip}");
    }
    println!("\nMark a week done with `growthpath plan complete --week <n>`.");
}
