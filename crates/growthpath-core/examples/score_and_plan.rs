//! Score and plan example: library usage of growthpath-core without the CLI.
//!
//! Scores a set of personality answers, combines them with memory and speech
//! results into the final analysis, and prints the first weeks of a 90 day
//! improvement plan.
//!
//! ```bash
//! cargo run -p growthpath-core --example score_and_plan
//! ```

use growthpath_core::analysis::{analyze, AssessmentResults};
use growthpath_core::model::{MemoryScore, PlanData, PlanDuration};
use growthpath_core::personality::{score_answers, PersonalityProfile};
use growthpath_core::plan::weekly_goals;
use growthpath_core::speech::analyze_recording;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // One answer per question, 1-5. `None` leaves a question unanswered.
    let answers = [5, 4, 5, 4, 2, 5, 4, 2, 5, 4, 2, 4, 4, 5, 1].map(Some);
    let personality = score_answers(&answers)?;
    let profile = PersonalityProfile::for_scores(&personality);
    println!("Personality: {}", profile.title);
    for (t, score) in personality.iter() {
        println!("  {t}: {score}%");
    }

    // Memory sub-scores as the three games would report them
    let memory = MemoryScore::from_parts(60, 90, 75);
    println!("Memory: {}%", memory.overall);

    // Speech metrics are sampled, so seed the generator for a stable run
    let mut rng = StdRng::seed_from_u64(42);
    let speech = analyze_recording(&mut rng, 0, 45)?;
    println!("Speech: {}% on \"{}\"", speech.overall, speech.topic);

    let results = AssessmentResults {
        personality: Some(personality),
        memory: Some(memory),
        speech: Some(speech),
    };
    let analysis = analyze(&results)?;
    println!(
        "\nOverall: {}% ({})",
        analysis.overall_score,
        analysis.profile().title
    );
    println!("Strengths:");
    for s in &analysis.strengths {
        println!("  + {s}");
    }
    println!("Weaknesses:");
    for w in &analysis.weaknesses {
        println!("  - {w}");
    }

    let plan = PlanData::from_analysis(&analysis, PlanDuration::Balanced, 7);
    let goals = weekly_goals(&plan, &personality);
    println!(
        "\n{} plan: {} weeks, {}",
        plan.duration,
        plan.total_weeks(),
        plan.duration.time_commitment()
    );
    for goal in goals.iter().take(3) {
        println!("Week {} [{}] {}", goal.week, goal.phase, goal.title);
        for exercise in &goal.exercises {
            println!("  * {exercise}");
        }
    }

    Ok(())
}
