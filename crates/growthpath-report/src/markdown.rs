//! Markdown rendering.

use growthpath_core::analysis::PLAN_OPTIONS;
use growthpath_core::model::{Phase, Trait};
use growthpath_core::personality::trait_description;
use growthpath_core::plan::{phase_weeks, SUCCESS_TIPS};
use growthpath_core::speech::{format_duration, Metric};

use crate::document::{FinalReport, PlanReport};

fn bullet_list(md: &mut String, heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    md.push_str(&format!("### {heading}\n\n"));
    for item in items {
        md.push_str(&format!("- {item}\n"));
    }
    md.push('\n');
}

/// Format the final report as markdown.
pub fn final_report_markdown(report: &FinalReport) -> String {
    let analysis = &report.analysis;
    let mut md = String::new();

    md.push_str("# Your Complete Development Profile\n\n");
    md.push_str(&format!(
        "**Overall score:** {}/100 | **Profile:** {}\n\n",
        analysis.overall_score, report.profile.title
    ));
    md.push_str(&format!("{}\n\n", report.profile.description));
    md.push_str(&format!(
        "_Generated {}_\n\n",
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    md.push_str("## Domain Scores\n\n");
    md.push_str("| Domain | Score |\n");
    md.push_str("|--------|-------|\n");
    md.push_str(&format!("| Personality | {:.1} |\n", analysis.averages.personality));
    md.push_str(&format!("| Memory | {:.0} |\n", analysis.averages.memory));
    md.push_str(&format!("| Communication | {:.0} |\n\n", analysis.averages.communication));

    md.push_str("## Personality\n\n");
    md.push_str(&format!(
        "**{}**: {}\n\n",
        report.personality_profile.title, report.personality_profile.description
    ));
    md.push_str("| Trait | Score | Meaning |\n");
    md.push_str("|-------|-------|---------|\n");
    for t in Trait::ALL {
        let score = report.personality.get(t);
        md.push_str(&format!(
            "| {} | {}% | {} |\n",
            t.label(),
            score,
            trait_description(t, score)
        ));
    }
    md.push('\n');

    md.push_str("## Memory\n\n");
    md.push_str(&format!(
        "**{}** ({}%): short-term {}%, long-term {}%, working {}%\n\n",
        report.memory_profile.title,
        report.memory.overall,
        report.memory.short_term,
        report.memory.long_term,
        report.memory.working
    ));

    md.push_str("## Communication\n\n");
    md.push_str(&format!(
        "**{}** ({}%): speech {}%, body language {}%, recording {}\n\n",
        report.communication_profile.title,
        report.speech.overall,
        report.speech.speech_score,
        report.speech.body_language_score,
        format_duration(report.speech.duration)
    ));
    md.push_str("| Metric | Score |\n");
    md.push_str("|--------|-------|\n");
    for metric in Metric::ALL {
        md.push_str(&format!("| {} | {}% |\n", metric.label(), metric.get(&report.speech)));
    }
    md.push('\n');

    md.push_str("## Findings\n\n");
    bullet_list(&mut md, "Strengths", &analysis.strengths);
    bullet_list(&mut md, "Areas for Growth", &analysis.weaknesses);
    bullet_list(&mut md, "Recommendations", &analysis.recommendations);
    bullet_list(&mut md, "Personality Insights", &analysis.personality_insights);
    bullet_list(&mut md, "Memory Insights", &analysis.memory_insights);
    bullet_list(&mut md, "Communication Insights", &analysis.communication_insights);

    let areas = &analysis.development_areas;
    md.push_str("## Development Areas\n\n");
    md.push_str(&format!("1. **Primary:** {}\n", areas.primary.title()));
    md.push_str(&format!("2. **Secondary:** {}\n", areas.secondary.title()));
    md.push_str(&format!("3. **Tertiary:** {}\n\n", areas.tertiary.title()));

    md.push_str("## Plan Options\n\n");
    for option in &PLAN_OPTIONS {
        let marker = if option.recommended { " (recommended)" } else { "" };
        md.push_str(&format!(
            "- **{} days: {}**{}: {}\n",
            option.duration.days(),
            option.title,
            marker,
            option.description
        ));
    }

    md
}

/// Format a plan and its progress as markdown.
pub fn plan_markdown(report: &PlanReport) -> String {
    let plan = &report.plan;
    let total = report.total_weeks();
    let mut md = String::new();

    md.push_str(&format!("# Your {}-Day Development Plan\n\n", plan.duration.days()));
    md.push_str(&format!(
        "**Progress:** {}% | {} of {} weeks completed | {} remaining\n\n",
        report.progress_percent,
        report.completed_weeks.completed_count(),
        total,
        report.completed_weeks.remaining(total)
    ));

    md.push_str("## Development Focus\n\n");
    md.push_str("| Phase | Weeks | Focus |\n");
    md.push_str("|-------|-------|-------|\n");
    let areas = plan.development_areas.ordered();
    for (phase, focus) in [Phase::Foundation, Phase::Development, Phase::Integration]
        .into_iter()
        .zip(areas)
    {
        let weeks = phase_weeks(phase, total);
        if weeks.is_empty() {
            continue;
        }
        md.push_str(&format!(
            "| {} | {}-{} | {} |\n",
            phase,
            weeks.start(),
            weeks.end(),
            focus.title()
        ));
    }
    md.push('\n');

    md.push_str("## Weekly Goals\n\n");
    for goal in &report.weeks {
        let check = if report.completed_weeks.is_complete(goal.week) {
            "x"
        } else {
            " "
        };
        md.push_str(&format!("### [{}] {}\n\n", check, goal.title));
        md.push_str(&format!("{}\n\n", goal.description));
        md.push_str(&format!("_Time commitment: {}_\n\n", goal.time_commitment));
        for exercise in &goal.exercises {
            md.push_str(&format!("- {exercise}\n"));
        }
        md.push('\n');
    }

    md.push_str("## Success Tips\n\n");
    for tip in SUCCESS_TIPS {
        md.push_str(&format!("- {tip}\n"));
    }

    md
}
