//! Report documents: everything a renderer needs, gathered in one place.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

use growthpath_core::analysis::{analyze, AssessmentResults, FinalAnalysis, OverallProfile};
use growthpath_core::error::ReportError;
use growthpath_core::memory::MemoryProfile;
use growthpath_core::model::{MemoryScore, PlanData, SpeechScore, TraitScores, WeeklyGoal};
use growthpath_core::personality::PersonalityProfile;
use growthpath_core::plan::{weekly_goals, PlanProgress};
use growthpath_core::speech::CommunicationProfile;

/// The complete development profile.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalReport {
    pub generated_at: DateTime<Utc>,
    pub analysis: FinalAnalysis,
    pub profile: OverallProfile,
    pub personality: TraitScores,
    pub personality_profile: PersonalityProfile,
    pub memory: MemoryScore,
    pub memory_profile: MemoryProfile,
    pub speech: SpeechScore,
    pub communication_profile: CommunicationProfile,
}

impl FinalReport {
    /// Aggregate the stored results. Fails when an assessment is missing.
    pub fn build(results: &AssessmentResults) -> Result<Self, ReportError> {
        let analysis = analyze(results)?;
        let (Some(personality), Some(memory), Some(speech)) =
            (results.personality, results.memory, results.speech.clone())
        else {
            return Err(ReportError::MissingAssessments {
                missing: results.missing(),
            });
        };

        Ok(Self {
            generated_at: Utc::now(),
            profile: analysis.profile(),
            analysis,
            personality_profile: PersonalityProfile::for_scores(&personality),
            personality,
            memory_profile: MemoryProfile::for_score(&memory),
            memory,
            communication_profile: CommunicationProfile::for_score(&speech),
            speech,
        })
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        save_json(self, path)
    }
}

/// A plan with its expanded weeks and the user's progress.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanReport {
    pub plan: PlanData,
    pub weeks: Vec<WeeklyGoal>,
    pub completed_weeks: PlanProgress,
    pub progress_percent: u8,
}

impl PlanReport {
    pub fn build(plan: PlanData, personality: &TraitScores, progress: PlanProgress) -> Self {
        let weeks = weekly_goals(&plan, personality);
        let progress_percent = progress.percentage(plan.total_weeks());
        Self {
            plan,
            weeks,
            completed_weeks: progress,
            progress_percent,
        }
    }

    pub fn total_weeks(&self) -> u32 {
        self.plan.total_weeks()
    }

    pub fn save_json(&self, path: &Path) -> Result<()> {
        save_json(self, path)
    }
}

fn save_json<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize report")?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, json)
        .with_context(|| format!("failed to write report to {}", path.display()))?;
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;
    use growthpath_core::model::Domain;

    #[test]
    fn build_requires_every_assessment() {
        let mut results = results();
        results.speech = None;
        let err = FinalReport::build(&results).unwrap_err();
        assert_eq!(
            err,
            ReportError::MissingAssessments {
                missing: vec![Domain::Communication],
            }
        );
    }

    #[test]
    fn final_report_carries_profiles() {
        let report = final_report();
        assert_eq!(report.analysis.overall_score, 59);
        assert_eq!(report.profile.title, "Developing Talent");
        assert_eq!(report.personality_profile.title, "The Energizer");
        assert_eq!(report.memory_profile.title, "Memory Specialist");
        assert_eq!(report.communication_profile.title, "Communication Builder");
    }

    #[test]
    fn plan_report_progress() {
        let report = plan_report();
        assert_eq!(report.total_weeks(), 7);
        assert_eq!(report.weeks.len(), 7);
        // 1 of 7 weeks
        assert_eq!(report.progress_percent, 14);
    }

    #[test]
    fn save_json_writes_camel_case() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("report.json");
        final_report().save_json(&path).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["analysis"]["overallScore"], 59);
        assert_eq!(json["analysis"]["developmentAreas"]["primary"], "communication");
    }
}
