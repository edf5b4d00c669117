//! The `growthpath results` command and the per-assessment result views.

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};

use growthpath_core::memory::{MemoryInsights, MemoryProfile};
use growthpath_core::model::{Domain, MemoryScore, SpeechScore, TraitScores};
use growthpath_core::personality::{overall_score, trait_description, PersonalityProfile, TraitLevel};
use growthpath_core::speech::{
    format_duration, CommunicationProfile, BODY_LANGUAGE_METRICS, EFFECTIVENESS_METRICS,
    SPEECH_METRICS,
};

use super::{take_hint, GlobalOpts, Session};

pub fn execute(opts: &GlobalOpts, assessment: String) -> Result<()> {
    let domain: Domain = assessment
        .parse()
        .map_err(|e: String| anyhow::anyhow!("{e} (expected personality, memory or speech)"))?;
    let session = Session::open(opts)?;
    let missing = || format!("no {domain} results yet; {}", take_hint(domain));

    match domain {
        Domain::Personality => {
            let scores = session.store.personality()?.with_context(missing)?;
            print_personality(&scores);
        }
        Domain::Memory => {
            let score = session.store.memory()?.with_context(missing)?;
            print_memory(&score);
        }
        Domain::Communication => {
            let score = session.store.speech()?.with_context(missing)?;
            print_speech(&score);
        }
    }
    Ok(())
}

fn print_list(heading: &str, items: &[&str]) {
    if items.is_empty() {
        return;
    }
    println!("\n{heading}:");
    for item in items {
        println!("  - {item}");
    }
}

pub fn print_personality(scores: &TraitScores) {
    let profile = PersonalityProfile::for_scores(scores);
    println!("{} (overall {}%)", profile.title, overall_score(scores));
    println!("{}\n", profile.description);

    let mut table = Table::new();
    table.set_header(vec!["Trait", "Score", "Level", "What it means"]);
    for (t, score) in scores.iter() {
        let level = match TraitLevel::from_score(score) {
            TraitLevel::High => "high",
            TraitLevel::Medium => "medium",
            TraitLevel::Low => "low",
        };
        table.add_row(vec![
            Cell::new(t.label()),
            Cell::new(format!("{score}%")),
            Cell::new(level),
            Cell::new(trait_description(t, score)),
        ]);
    }
    println!("{table}");

    print_list("Strengths", profile.strengths);
    print_list("Challenges", profile.challenges);
}

pub fn print_memory(score: &MemoryScore) {
    let profile = MemoryProfile::for_score(score);
    println!("{} (overall {}%)", profile.title, score.overall);
    println!("{}\n", profile.description);

    let mut table = Table::new();
    table.set_header(vec!["Memory type", "Score"]);
    table.add_row(vec![Cell::new("Short-term"), Cell::new(format!("{}%", score.short_term))]);
    table.add_row(vec![Cell::new("Long-term"), Cell::new(format!("{}%", score.long_term))]);
    table.add_row(vec![Cell::new("Working"), Cell::new(format!("{}%", score.working))]);
    println!("{table}");

    let insights = MemoryInsights::for_score(score);
    print_list("Insights", &insights.insights);
    print_list("Recommendations", &insights.recommendations);
}

pub fn print_speech(score: &SpeechScore) {
    let profile = CommunicationProfile::for_score(score);
    println!("{} (overall {}%)", profile.title, score.overall);
    println!("{}\n", profile.description);
    println!(
        "Speech {}% | Body language {}% | Recording {}",
        score.speech_score,
        score.body_language_score,
        format_duration(score.duration)
    );
    if !score.topic.is_empty() {
        println!("Topic: {}", score.topic);
    }
    println!();

    let groups = [
        ("Speech", &SPEECH_METRICS[..]),
        ("Body language", &BODY_LANGUAGE_METRICS[..]),
        ("Effectiveness", &EFFECTIVENESS_METRICS[..]),
    ];
    let mut table = Table::new();
    table.set_header(vec!["Group", "Metric", "Score", "What it measures"]);
    for (group, metrics) in groups {
        for metric in metrics {
            table.add_row(vec![
                Cell::new(group),
                Cell::new(metric.label()),
                Cell::new(format!("{}%", metric.get(score))),
                Cell::new(metric.description()),
            ]);
        }
    }
    println!("{table}");

    fn as_strs(items: &[String]) -> Vec<&str> {
        items.iter().map(String::as_str).collect::<Vec<_>>()
    }
    print_list("Strengths", &as_strs(&score.strengths));
    print_list("Areas to improve", &as_strs(&score.improvements));
    print_list("Recommendations", &as_strs(&score.recommendations));
}
