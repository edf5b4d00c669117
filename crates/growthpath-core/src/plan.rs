//! Improvement plan generation and progress tracking.
//!
//! A plan is an immutable [`PlanData`] snapshot taken from the final
//! analysis. Weekly goals are not stored; they are regenerated from the
//! snapshot whenever needed. The exercise shuffle is seeded from
//! `PlanData::seed`, so the same snapshot always renders the same weeks.

use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use chrono::Utc;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::FinalAnalysis;
use crate::error::PlanError;
use crate::model::{round_percent, Domain, Phase, PlanData, PlanDuration, Trait, TraitScores, WeeklyGoal};

// ---------------------------------------------------------------------------
// Exercise library
// ---------------------------------------------------------------------------

/// Exercises for a personality week, targeting the given trait.
pub fn personality_exercises(t: Trait) -> &'static [&'static str] {
    match t {
        Trait::Extraversion => &[
            "Practice initiating conversations with 3 new people",
            "Join a group activity or networking event",
            "Lead a team discussion or presentation",
            "Practice active listening in social situations",
        ],
        Trait::Agreeableness => &[
            "Practice saying 'no' to one request this week",
            "Express a different opinion in a group discussion",
            "Set one clear boundary with a colleague or friend",
            "Practice assertive communication techniques",
        ],
        Trait::Conscientiousness => &[
            "Create and follow a detailed daily schedule",
            "Break one large project into smaller, manageable tasks",
            "Use a task management app for one week",
            "Practice the Pomodoro Technique for focused work",
        ],
        Trait::Openness => &[
            "Try a new hobby or activity",
            "Read about a topic outside your expertise",
            "Attend a workshop or online course",
            "Practice brainstorming without judgment",
        ],
        Trait::Neuroticism => &[
            "Practice 10 minutes of daily meditation",
            "Keep a stress journal and identify triggers",
            "Use deep breathing exercises during stressful moments",
            "Practice positive self-talk and reframing",
        ],
    }
}

pub const MEMORY_EXERCISES: [&str; 8] = [
    "Practice the memory palace technique with 10 items",
    "Do 15 minutes of dual n-back training",
    "Memorize a short poem or speech",
    "Practice chunking phone numbers and dates",
    "Use spaced repetition to learn new vocabulary",
    "Play memory games for 20 minutes daily",
    "Practice visualization techniques for remembering names",
    "Create acronyms for lists you need to remember",
];

pub const COMMUNICATION_EXERCISES: [&str; 8] = [
    "Record yourself giving a 2-minute impromptu speech",
    "Practice maintaining eye contact during conversations",
    "Work on eliminating filler words ('um', 'uh')",
    "Practice speaking with varied pace and tone",
    "Join a public speaking group or practice with friends",
    "Practice storytelling with clear beginning, middle, end",
    "Work on confident body posture and gestures",
    "Practice active listening and asking follow-up questions",
];

pub const SUCCESS_TIPS: [&str; 4] = [
    "Set aside dedicated time each day for practice",
    "Track your progress and celebrate small wins",
    "Be patient with yourself - growth takes time",
    "Apply new skills in real-world situations",
];

pub fn week_description(focus: Domain, phase: Phase) -> &'static str {
    match (focus, phase) {
        (Domain::Personality, Phase::Foundation) => "Build awareness of your personality patterns and establish new behavioral habits.",
        (Domain::Personality, Phase::Development) => "Practice new personality-based skills in real-world situations.",
        (Domain::Personality, Phase::Integration) => "Integrate personality insights into your daily interactions and decision-making.",
        (Domain::Memory, Phase::Foundation) => "Establish fundamental memory techniques and cognitive training routines.",
        (Domain::Memory, Phase::Development) => "Advance your memory skills with complex exercises and real-world applications.",
        (Domain::Memory, Phase::Integration) => "Apply advanced memory strategies to professional and personal challenges.",
        (Domain::Communication, Phase::Foundation) => "Develop core speaking and presentation skills through structured practice.",
        (Domain::Communication, Phase::Development) => "Enhance your communication effectiveness in various contexts and audiences.",
        (Domain::Communication, Phase::Integration) => "Master advanced communication techniques and leadership presence.",
    }
}

// ---------------------------------------------------------------------------
// Phases
// ---------------------------------------------------------------------------

/// Last week of the foundation phase: `ceil(total * 0.4)`.
fn foundation_end(total_weeks: u32) -> u32 {
    (total_weeks * 4).div_ceil(10)
}

/// Last week of the development phase: `ceil(total * 0.7)`.
fn development_end(total_weeks: u32) -> u32 {
    (total_weeks * 7).div_ceil(10)
}

pub fn phase_for_week(week: u32, total_weeks: u32) -> Phase {
    if week <= foundation_end(total_weeks) {
        Phase::Foundation
    } else if week <= development_end(total_weeks) {
        Phase::Development
    } else {
        Phase::Integration
    }
}

/// Week range covered by a phase. Empty when the plan is too short to reach it.
pub fn phase_weeks(phase: Phase, total_weeks: u32) -> RangeInclusive<u32> {
    match phase {
        Phase::Foundation => 1..=foundation_end(total_weeks),
        Phase::Development => foundation_end(total_weeks) + 1..=development_end(total_weeks),
        Phase::Integration => development_end(total_weeks) + 1..=total_weeks,
    }
}

fn phase_focus(plan: &PlanData, phase: Phase) -> Domain {
    let areas = &plan.development_areas;
    match phase {
        Phase::Foundation => areas.primary,
        Phase::Development => areas.secondary,
        Phase::Integration => areas.tertiary,
    }
}

// ---------------------------------------------------------------------------
// Plan creation and weekly goals
// ---------------------------------------------------------------------------

impl PlanData {
    /// Snapshot the analysis into a new plan.
    pub fn from_analysis(analysis: &FinalAnalysis, duration: PlanDuration, seed: u64) -> Self {
        let plan = Self {
            id: Uuid::new_v4(),
            duration,
            overall_score: analysis.overall_score,
            strengths: analysis.strengths.clone(),
            weaknesses: analysis.weaknesses.clone(),
            recommendations: analysis.recommendations.clone(),
            development_areas: analysis.development_areas,
            created_at: Utc::now(),
            seed,
        };
        tracing::info!(id = %plan.id, duration = %duration, "created improvement plan");
        plan
    }

    pub fn total_weeks(&self) -> u32 {
        self.duration.total_weeks()
    }
}

/// Expand a plan into its week-by-week goals.
///
/// Personality weeks take the first exercises for the lowest-scoring trait.
/// Memory and communication weeks draw a fresh shuffle of their library
/// from a generator seeded with the plan's seed.
pub fn weekly_goals(plan: &PlanData, personality: &TraitScores) -> Vec<WeeklyGoal> {
    let total_weeks = plan.total_weeks();
    let per_week = plan.duration.exercises_per_week();
    let weakest = personality.weakest();
    let mut rng = StdRng::seed_from_u64(plan.seed);

    (1..=total_weeks)
        .map(|week| {
            let phase = phase_for_week(week, total_weeks);
            let focus = phase_focus(plan, phase);
            let exercises: Vec<String> = match focus {
                Domain::Personality => personality_exercises(weakest)
                    .iter()
                    .take(per_week)
                    .map(|e| e.to_string())
                    .collect(),
                Domain::Memory => shuffled(&MEMORY_EXERCISES, per_week, &mut rng),
                Domain::Communication => shuffled(&COMMUNICATION_EXERCISES, per_week, &mut rng),
            };

            WeeklyGoal {
                week,
                title: format!("Week {week}: {} Development", focus.title()),
                description: week_description(focus, phase).to_string(),
                focus,
                phase,
                exercises,
                time_commitment: plan.duration.time_commitment().to_string(),
            }
        })
        .collect()
}

fn shuffled(library: &[&str], take: usize, rng: &mut StdRng) -> Vec<String> {
    let mut pool: Vec<&str> = library.to_vec();
    pool.shuffle(rng);
    pool.into_iter().take(take).map(str::to_string).collect()
}

// ---------------------------------------------------------------------------
// Progress
// ---------------------------------------------------------------------------

/// Completed week numbers. Serializes as a sorted array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlanProgress {
    completed: BTreeSet<u32>,
}

impl PlanProgress {
    /// Flip a week between done and not done. Returns whether the week is
    /// now complete.
    pub fn toggle(&mut self, week: u32, total_weeks: u32) -> Result<bool, PlanError> {
        if week == 0 || week > total_weeks {
            tracing::warn!(week, total_weeks, "rejected week outside plan");
            return Err(PlanError::WeekOutOfRange {
                week,
                total: total_weeks,
            });
        }
        if self.completed.remove(&week) {
            Ok(false)
        } else {
            self.completed.insert(week);
            Ok(true)
        }
    }

    pub fn is_complete(&self, week: u32) -> bool {
        self.completed.contains(&week)
    }

    pub fn completed_count(&self) -> u32 {
        self.completed.len() as u32
    }

    /// `round(completed / total * 100)`.
    pub fn percentage(&self, total_weeks: u32) -> u8 {
        if total_weeks == 0 {
            return 0;
        }
        round_percent(f64::from(self.completed_count()) / f64::from(total_weeks) * 100.0)
    }

    pub fn remaining(&self, total_weeks: u32) -> u32 {
        total_weeks.saturating_sub(self.completed_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{analyze, AssessmentResults};
    use crate::model::{DevelopmentAreas, MemoryScore};
    use crate::speech::score_from_metrics;

    fn traits(o: u8, c: u8, e: u8, a: u8, n: u8) -> TraitScores {
        TraitScores {
            openness: o,
            conscientiousness: c,
            extraversion: e,
            agreeableness: a,
            neuroticism: n,
        }
    }

    fn plan(duration: PlanDuration, seed: u64) -> PlanData {
        let mut speech = score_from_metrics([80; 11], "topic", 30);
        speech.overall = 50;
        let results = AssessmentResults {
            personality: Some(traits(80, 40, 80, 60, 20)),
            memory: Some(MemoryScore::from_parts(80, 70, 60)),
            speech: Some(speech),
        };
        PlanData::from_analysis(&analyze(&results).unwrap(), duration, seed)
    }

    #[test]
    fn snapshot_copies_the_analysis() {
        let p = plan(PlanDuration::Balanced, 1);
        assert_eq!(p.overall_score, 59);
        assert_eq!(
            p.development_areas,
            DevelopmentAreas {
                primary: Domain::Communication,
                secondary: Domain::Personality,
                tertiary: Domain::Memory,
            }
        );
    }

    #[test]
    fn phase_boundaries_use_ceiling() {
        // 13 weeks: ceil(5.2) = 6, ceil(9.1) = 10.
        assert_eq!(phase_for_week(6, 13), Phase::Foundation);
        assert_eq!(phase_for_week(7, 13), Phase::Development);
        assert_eq!(phase_for_week(10, 13), Phase::Development);
        assert_eq!(phase_for_week(11, 13), Phase::Integration);
        // 7 weeks: ceil(2.8) = 3, ceil(4.9) = 5.
        assert_eq!(phase_weeks(Phase::Foundation, 7), 1..=3);
        assert_eq!(phase_weeks(Phase::Development, 7), 4..=5);
        assert_eq!(phase_weeks(Phase::Integration, 7), 6..=7);
        // 26 weeks: ceil(10.4) = 11, ceil(18.2) = 19.
        assert_eq!(phase_weeks(Phase::Integration, 26), 20..=26);
    }

    #[test]
    fn weekly_goals_follow_development_areas() {
        let p = plan(PlanDuration::Balanced, 3);
        let goals = weekly_goals(&p, &traits(80, 40, 80, 60, 20));
        assert_eq!(goals.len(), 13);
        assert_eq!(goals[0].focus, Domain::Communication);
        assert_eq!(goals[0].title, "Week 1: Communication Development");
        assert_eq!(goals[6].focus, Domain::Personality);
        assert_eq!(goals[12].focus, Domain::Memory);
        assert_eq!(goals[12].phase, Phase::Integration);
        for goal in &goals {
            assert_eq!(goal.exercises.len(), 2);
            assert_eq!(goal.time_commitment, "20-30 minutes, 4-5 times per week");
        }
    }

    #[test]
    fn personality_weeks_target_the_weakest_trait() {
        let p = plan(PlanDuration::Sprint, 3);
        let goals = weekly_goals(&p, &traits(80, 40, 80, 60, 20));
        let personality_week = goals.iter().find(|g| g.focus == Domain::Personality).unwrap();
        // Neuroticism at 20 is the lowest score.
        assert_eq!(
            personality_week.exercises,
            vec![
                "Practice 10 minutes of daily meditation".to_string(),
                "Keep a stress journal and identify triggers".to_string(),
                "Use deep breathing exercises during stressful moments".to_string(),
            ]
        );
    }

    #[test]
    fn tied_weakest_trait_prefers_extraversion() {
        let p = plan(PlanDuration::Balanced, 3);
        let goals = weekly_goals(&p, &traits(50, 50, 50, 50, 50));
        let personality_week = goals.iter().find(|g| g.focus == Domain::Personality).unwrap();
        assert_eq!(
            personality_week.exercises,
            vec![
                "Practice initiating conversations with 3 new people".to_string(),
                "Join a group activity or networking event".to_string(),
            ]
        );
    }

    #[test]
    fn same_seed_same_weeks() {
        let p = plan(PlanDuration::Deep, 42);
        let scores = traits(80, 40, 80, 60, 20);
        assert_eq!(weekly_goals(&p, &scores), weekly_goals(&p, &scores));

        let memory_weeks: Vec<_> = weekly_goals(&p, &scores)
            .into_iter()
            .filter(|g| g.focus == Domain::Memory)
            .collect();
        for goal in memory_weeks {
            assert!(goal.exercises.iter().all(|e| MEMORY_EXERCISES.contains(&e.as_str())));
            assert_ne!(goal.exercises[0], goal.exercises[1]);
        }
    }

    #[test]
    fn toggle_and_percentage() {
        let mut progress = PlanProgress::default();
        assert_eq!(progress.toggle(3, 13), Ok(true));
        assert_eq!(progress.toggle(1, 13), Ok(true));
        assert_eq!(progress.percentage(13), 15);
        assert_eq!(progress.toggle(3, 13), Ok(false));
        assert_eq!(progress.completed_count(), 1);
        assert_eq!(progress.remaining(13), 12);
        assert_eq!(
            progress.toggle(14, 13),
            Err(PlanError::WeekOutOfRange { week: 14, total: 13 })
        );
        assert!(progress.toggle(0, 13).is_err());
    }

    #[test]
    fn progress_serializes_sorted() {
        let mut progress = PlanProgress::default();
        progress.toggle(5, 7).unwrap();
        progress.toggle(2, 7).unwrap();
        assert_eq!(serde_json::to_string(&progress).unwrap(), "[2,5]");
        let back: PlanProgress = serde_json::from_str("[7,1]").unwrap();
        assert!(back.is_complete(7));
        assert!(back.is_complete(1));
        assert_eq!(back.completed_count(), 2);
    }
}
