//! Progress summary across the three assessments.

use serde::Serialize;

use crate::analysis::AssessmentResults;
use crate::model::{round_percent, Domain};

/// A listed assessment and whether it has been taken.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentCard {
    pub domain: Domain,
    pub title: &'static str,
    pub description: &'static str,
    pub estimated_minutes: u32,
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub assessments: Vec<AssessmentCard>,
    pub completed: usize,
    /// Rounded mean of the available domain averages; 0 before any assessment.
    pub average_score: u8,
    pub completion_percent: u8,
    pub message: &'static str,
    pub report_unlocked: bool,
}

impl Dashboard {
    pub fn summarize(results: &AssessmentResults) -> Self {
        let assessments: Vec<AssessmentCard> = Domain::ALL
            .into_iter()
            .map(|domain| card(domain, results.is_complete(domain)))
            .collect();
        let completed = results.completed_count();

        Self {
            assessments,
            completed,
            average_score: average_score(results).unwrap_or(0),
            completion_percent: round_percent(completed as f64 / 3.0 * 100.0),
            message: stage_message(completed),
            report_unlocked: completed == Domain::ALL.len(),
        }
    }
}

fn card(domain: Domain, completed: bool) -> AssessmentCard {
    let (title, description, estimated_minutes) = match domain {
        Domain::Personality => (
            "Big Five Personality Test",
            "Comprehensive personality analysis based on the Big Five model",
            15,
        ),
        Domain::Memory => (
            "Memory Power Assessment",
            "Evaluate your short-term, long-term, and working memory capabilities",
            20,
        ),
        Domain::Communication => (
            "Communication Analysis",
            "Assess your speech patterns and body language through video analysis",
            10,
        ),
    };
    AssessmentCard {
        domain,
        title,
        description,
        estimated_minutes,
        completed,
    }
}

/// Mean of whichever domain averages are available, rounded. `None` when
/// no assessment has been taken.
pub fn average_score(results: &AssessmentResults) -> Option<u8> {
    let available: Vec<f64> = Domain::ALL
        .iter()
        .filter_map(|&d| results.domain_average(d))
        .collect();
    if available.is_empty() {
        return None;
    }
    Some(round_percent(available.iter().sum::<f64>() / available.len() as f64))
}

pub fn stage_message(completed: usize) -> &'static str {
    match completed {
        0 => "Start your first assessment to begin your development journey",
        1 => "Great start! Complete the remaining assessments to unlock your full profile",
        2 => "Almost there! One more assessment to complete your comprehensive analysis",
        _ => "All assessments complete! View your final report and improvement plan",
    }
}
