//! HTML report generator.
//!
//! Produces self-contained HTML files with all CSS inlined.

use anyhow::{Context, Result};
use std::path::Path;

use growthpath_core::analysis::PLAN_OPTIONS;
use growthpath_core::model::Trait;
use growthpath_core::personality::trait_description;
use growthpath_core::plan::SUCCESS_TIPS;
use growthpath_core::speech::{format_duration, Metric};

use crate::document::{FinalReport, PlanReport};

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

fn open_document(html: &mut String, title: &str) {
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!("<title>{}</title>\n", html_escape(title)));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");
}

fn close_document(html: &mut String, raw: &impl serde::Serialize) {
    html.push_str("<section class=\"raw-data\">\n");
    html.push_str("<details>\n<summary>Raw JSON Data</summary>\n");
    html.push_str("<pre><code>");
    html.push_str(&html_escape(&serde_json::to_string_pretty(raw).unwrap_or_default()));
    html.push_str("</code></pre>\n");
    html.push_str("</details>\n</section>\n");
    html.push_str("</body>\n</html>");
}

fn score_class(score: u8) -> &'static str {
    if score >= 80 {
        "high"
    } else if score >= 60 {
        "mid"
    } else {
        "low"
    }
}

/// Horizontal bar for a 0-100 score.
fn score_bar(label: &str, score: u8) -> String {
    format!(
        "<div class=\"bar-row\"><span class=\"bar-label\">{}</span><div class=\"bar\"><div class=\"fill {}\" style=\"width: {}%\"></div></div><span class=\"bar-value\">{}%</span></div>\n",
        html_escape(label),
        score_class(score),
        score,
        score
    )
}

fn list_section(html: &mut String, heading: &str, class: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    html.push_str(&format!("<div class=\"card {class}\">\n<h3>{}</h3>\n<ul>\n", html_escape(heading)));
    for item in items {
        html.push_str(&format!("<li>{}</li>\n", html_escape(item)));
    }
    html.push_str("</ul>\n</div>\n");
}

/// Generate the final report page.
pub fn generate_final_html(report: &FinalReport) -> String {
    let analysis = &report.analysis;
    let mut html = String::new();
    open_document(&mut html, "growthpath: development profile");

    html.push_str("<header>\n");
    html.push_str("<h1>Your Complete Development Profile</h1>\n");
    html.push_str(&format!(
        "<p class=\"meta\">Generated {}</p>\n",
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    html.push_str("</header>\n");

    html.push_str("<section class=\"overview\">\n");
    html.push_str(&format!(
        "<div class=\"score-circle {}\">{}</div>\n",
        score_class(analysis.overall_score),
        analysis.overall_score
    ));
    html.push_str(&format!(
        "<h2>{}</h2>\n<p>{}</p>\n",
        html_escape(report.profile.title),
        html_escape(report.profile.description)
    ));
    html.push_str(&score_bar("Personality", analysis.averages.personality.round() as u8));
    html.push_str(&score_bar("Memory", report.memory.overall));
    html.push_str(&score_bar("Communication", report.speech.overall));
    html.push_str("</section>\n");

    // Personality
    html.push_str("<section>\n<h2>Personality</h2>\n");
    html.push_str(&format!(
        "<p><strong>{}</strong>: {}</p>\n",
        html_escape(report.personality_profile.title),
        html_escape(report.personality_profile.description)
    ));
    for t in Trait::ALL {
        let score = report.personality.get(t);
        html.push_str(&score_bar(t.label(), score));
        html.push_str(&format!(
            "<p class=\"hint\">{}</p>\n",
            html_escape(trait_description(t, score))
        ));
    }
    html.push_str("</section>\n");

    // Memory
    html.push_str("<section>\n<h2>Memory</h2>\n");
    html.push_str(&format!(
        "<p><strong>{}</strong>: {}</p>\n",
        html_escape(report.memory_profile.title),
        html_escape(report.memory_profile.description)
    ));
    html.push_str(&score_bar("Short-term", report.memory.short_term));
    html.push_str(&score_bar("Long-term", report.memory.long_term));
    html.push_str(&score_bar("Working", report.memory.working));
    html.push_str("</section>\n");

    // Communication
    html.push_str("<section>\n<h2>Communication</h2>\n");
    html.push_str(&format!(
        "<p><strong>{}</strong>: {}</p>\n",
        html_escape(report.communication_profile.title),
        html_escape(report.communication_profile.description)
    ));
    html.push_str(&format!(
        "<p class=\"meta\">Topic: {} | Recording: {}</p>\n",
        html_escape(&report.speech.topic),
        format_duration(report.speech.duration)
    ));
    html.push_str("<table>\n<thead><tr><th>Metric</th><th>Score</th><th>What it measures</th></tr></thead>\n<tbody>\n");
    for metric in Metric::ALL {
        let score = metric.get(&report.speech);
        html.push_str(&format!(
            "<tr><td>{}</td><td class=\"{}\">{}%</td><td>{}</td></tr>\n",
            html_escape(metric.label()),
            score_class(score),
            score,
            html_escape(metric.description())
        ));
    }
    html.push_str("</tbody></table>\n</section>\n");

    // Findings
    html.push_str("<section class=\"findings\">\n<h2>Findings</h2>\n");
    list_section(&mut html, "Strengths", "strengths", &analysis.strengths);
    list_section(&mut html, "Areas for Growth", "weaknesses", &analysis.weaknesses);
    list_section(&mut html, "Recommendations", "recommendations", &analysis.recommendations);
    list_section(&mut html, "Personality Insights", "insights", &analysis.personality_insights);
    list_section(&mut html, "Memory Insights", "insights", &analysis.memory_insights);
    list_section(&mut html, "Communication Insights", "insights", &analysis.communication_insights);
    html.push_str("</section>\n");

    let areas = &analysis.development_areas;
    html.push_str("<section>\n<h2>Development Areas</h2>\n<ol>\n");
    html.push_str(&format!("<li><strong>Primary:</strong> {}</li>\n", areas.primary.title()));
    html.push_str(&format!("<li><strong>Secondary:</strong> {}</li>\n", areas.secondary.title()));
    html.push_str(&format!("<li><strong>Tertiary:</strong> {}</li>\n", areas.tertiary.title()));
    html.push_str("</ol>\n</section>\n");

    html.push_str("<section class=\"plans\">\n<h2>Plan Options</h2>\n");
    for option in &PLAN_OPTIONS {
        let class = if option.recommended { "card recommended" } else { "card" };
        html.push_str(&format!(
            "<div class=\"{}\">\n<h3>{} days: {}</h3>\n<p>{}</p>\n<ul>\n",
            class,
            option.duration.days(),
            html_escape(option.title),
            html_escape(option.description)
        ));
        for feature in option.features {
            html.push_str(&format!("<li>{}</li>\n", html_escape(feature)));
        }
        html.push_str("</ul>\n</div>\n");
    }
    html.push_str("</section>\n");

    close_document(&mut html, report);
    html
}

/// Generate the improvement plan page.
pub fn generate_plan_html(report: &PlanReport) -> String {
    let plan = &report.plan;
    let total = report.total_weeks();
    let mut html = String::new();
    open_document(&mut html, &format!("growthpath: {}-day plan", plan.duration.days()));

    html.push_str("<header>\n");
    html.push_str(&format!(
        "<h1>Your {}-Day Development Plan</h1>\n",
        plan.duration.days()
    ));
    html.push_str(&format!(
        "<p class=\"meta\">Created {} | {} weeks</p>\n",
        plan.created_at.format("%Y-%m-%d"),
        total
    ));
    html.push_str("</header>\n");

    html.push_str("<section class=\"overview\">\n");
    html.push_str(&score_bar("Progress", report.progress_percent));
    html.push_str(&format!(
        "<p>{} weeks completed, {} remaining</p>\n",
        report.completed_weeks.completed_count(),
        report.completed_weeks.remaining(total)
    ));
    html.push_str("</section>\n");

    html.push_str("<section class=\"weeks\">\n<h2>Weekly Development Goals</h2>\n");
    for goal in &report.weeks {
        let done = report.completed_weeks.is_complete(goal.week);
        html.push_str(&format!(
            "<div class=\"card week {}{}\">\n",
            goal.focus,
            if done { " done" } else { "" }
        ));
        html.push_str(&format!(
            "<h3>{}{}</h3>\n<p>{}</p>\n",
            if done { "&#10003; " } else { "" },
            html_escape(&goal.title),
            html_escape(&goal.description)
        ));
        html.push_str(&format!(
            "<p class=\"meta\">{} phase | {}</p>\n<ul>\n",
            goal.phase,
            html_escape(&goal.time_commitment)
        ));
        for exercise in &goal.exercises {
            html.push_str(&format!("<li>{}</li>\n", html_escape(exercise)));
        }
        html.push_str("</ul>\n</div>\n");
    }
    html.push_str("</section>\n");

    html.push_str("<section>\n<h2>Success Tips</h2>\n<ul>\n");
    for tip in SUCCESS_TIPS {
        html.push_str(&format!("<li>{}</li>\n", html_escape(tip)));
    }
    html.push_str("</ul>\n</section>\n");

    close_document(&mut html, report);
    html
}

/// Write a generated page to a file.
pub fn write_html(html: &str, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)
        .with_context(|| format!("failed to write HTML to {}", path.display()))?;
    Ok(())
}

const CSS: &str = r#"
:root { --bg: #fff; --fg: #1a1a1a; --border: #e5e7eb; --high: #dcfce7; --mid: #fef9c3; --low: #fde2e2; --accent: #7c3aed; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #111827; --fg: #f9fafb; --border: #374151; --high: #064e3b; --mid: #713f12; --low: #7f1d1d; }
}
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0 auto; padding: 2rem; max-width: 960px; background: var(--bg); color: var(--fg); }
h1, h2 { margin-top: 2rem; }
.meta, .hint { color: #6b7280; }
.hint { margin: 0 0 0.75rem 0; font-size: 0.9rem; }
.score-circle { width: 6rem; height: 6rem; border-radius: 50%; display: flex; align-items: center; justify-content: center; font-size: 2rem; font-weight: bold; border: 4px solid var(--accent); }
.bar-row { display: flex; align-items: center; gap: 0.75rem; margin: 0.4rem 0; }
.bar-label { width: 10rem; }
.bar { flex: 1; height: 0.75rem; background: var(--border); border-radius: 999px; overflow: hidden; }
.fill { height: 100%; }
.fill.high { background: #22c55e; }
.fill.mid { background: #eab308; }
.fill.low { background: #ef4444; }
.high { background: var(--high); }
.mid { background: var(--mid); }
.low { background: var(--low); }
.card { border: 1px solid var(--border); border-radius: 8px; padding: 1rem 1.5rem; margin: 1rem 0; }
.card.recommended { border-color: var(--accent); }
.card.done { opacity: 0.7; }
.week.personality { border-left: 4px solid #a855f7; }
.week.memory { border-left: 4px solid #3b82f6; }
.week.communication { border-left: 4px solid #22c55e; }
table { border-collapse: collapse; width: 100%; margin: 1rem 0; }
th, td { border: 1px solid var(--border); padding: 0.5rem 1rem; text-align: left; }
th { background: var(--border); }
pre { overflow-x: auto; padding: 1rem; background: var(--border); border-radius: 8px; }
code { font-family: 'JetBrains Mono', 'Fira Code', monospace; font-size: 0.85rem; }
details { margin: 1rem 0; }
summary { cursor: pointer; font-weight: bold; }
"#;
