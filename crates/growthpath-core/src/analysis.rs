//! Final report aggregation across all three assessments.

use serde::Serialize;

use crate::error::ReportError;
use crate::model::{
    round_percent, DevelopmentAreas, Domain, MemoryScore, PlanDuration, SpeechScore, Trait,
    TraitScores,
};

/// Whatever results the store currently holds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssessmentResults {
    pub personality: Option<TraitScores>,
    pub memory: Option<MemoryScore>,
    pub speech: Option<SpeechScore>,
}

impl AssessmentResults {
    pub fn is_complete(&self, domain: Domain) -> bool {
        match domain {
            Domain::Personality => self.personality.is_some(),
            Domain::Memory => self.memory.is_some(),
            Domain::Communication => self.speech.is_some(),
        }
    }

    /// Domains without a stored result, in construction order.
    pub fn missing(&self) -> Vec<Domain> {
        Domain::ALL
            .into_iter()
            .filter(|&d| !self.is_complete(d))
            .collect()
    }

    pub fn completed_count(&self) -> usize {
        Domain::ALL.len() - self.missing().len()
    }

    /// Average for a domain, if its assessment has been taken.
    ///
    /// Personality uses the unrounded mean of the five traits.
    pub fn domain_average(&self, domain: Domain) -> Option<f64> {
        match domain {
            Domain::Personality => self.personality.map(|p| p.average()),
            Domain::Memory => self.memory.map(|m| f64::from(m.overall)),
            Domain::Communication => self.speech.as_ref().map(|s| f64::from(s.overall)),
        }
    }
}

/// Per-domain averages feeding the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DomainAverages {
    pub personality: f64,
    pub memory: f64,
    pub communication: f64,
}

impl DomainAverages {
    pub fn get(&self, domain: Domain) -> f64 {
        match domain {
            Domain::Personality => self.personality,
            Domain::Memory => self.memory,
            Domain::Communication => self.communication,
        }
    }

    /// Domains sorted weakest first. The sort is stable, so ties keep
    /// personality, memory, communication order.
    pub fn development_areas(&self) -> DevelopmentAreas {
        let mut ranked: Vec<(Domain, f64)> = Domain::ALL.iter().map(|&d| (d, self.get(d))).collect();
        ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
        DevelopmentAreas {
            primary: ranked[0].0,
            secondary: ranked[1].0,
            tertiary: ranked[2].0,
        }
    }
}

/// The aggregated report.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalAnalysis {
    pub overall_score: u8,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommendations: Vec<String>,
    pub personality_insights: Vec<String>,
    pub memory_insights: Vec<String>,
    pub communication_insights: Vec<String>,
    pub development_areas: DevelopmentAreas,
    pub averages: DomainAverages,
}

impl FinalAnalysis {
    pub fn profile(&self) -> OverallProfile {
        OverallProfile::for_score(self.overall_score)
    }
}

#[derive(Default)]
struct Findings {
    strengths: Vec<String>,
    weaknesses: Vec<String>,
    recommendations: Vec<String>,
    personality_insights: Vec<String>,
    memory_insights: Vec<String>,
    communication_insights: Vec<String>,
}

impl Findings {
    fn strength(&mut self, text: &str) {
        self.strengths.push(text.to_string());
    }

    fn weakness(&mut self, weakness: &str, recommendation: &str) {
        self.weaknesses.push(weakness.to_string());
        self.recommendations.push(recommendation.to_string());
    }
}

/// Build the final analysis. Every assessment must have been taken.
pub fn analyze(results: &AssessmentResults) -> Result<FinalAnalysis, ReportError> {
    let (Some(personality), Some(memory), Some(speech)) =
        (results.personality.as_ref(), results.memory.as_ref(), results.speech.as_ref())
    else {
        return Err(ReportError::MissingAssessments {
            missing: results.missing(),
        });
    };

    let averages = DomainAverages {
        personality: personality.average(),
        memory: f64::from(memory.overall),
        communication: f64::from(speech.overall),
    };
    let overall_score = round_percent(
        (averages.personality + averages.memory + averages.communication) / 3.0,
    );

    let mut findings = Findings::default();
    personality_findings(personality, &mut findings);
    memory_findings(memory, &mut findings);
    speech_findings(speech, &mut findings);

    let development_areas = averages.development_areas();
    tracing::debug!(
        overall_score,
        primary = %development_areas.primary,
        "aggregated final analysis"
    );

    Ok(FinalAnalysis {
        overall_score,
        strengths: findings.strengths,
        weaknesses: findings.weaknesses,
        recommendations: findings.recommendations,
        personality_insights: findings.personality_insights,
        memory_insights: findings.memory_insights,
        communication_insights: findings.communication_insights,
        development_areas,
        averages,
    })
}

// ---------------------------------------------------------------------------
// Personality
// ---------------------------------------------------------------------------

struct TraitFeedback {
    strength: &'static str,
    insight: &'static str,
    weakness: &'static str,
    recommendation: &'static str,
}

fn trait_feedback(t: Trait) -> TraitFeedback {
    match t {
        Trait::Extraversion => TraitFeedback {
            strength: "Strong social skills and leadership potential",
            insight: "You naturally energize others and thrive in collaborative environments",
            weakness: "May struggle with self-promotion and networking",
            recommendation: "Practice speaking up in meetings and joining professional groups",
        },
        Trait::Agreeableness => TraitFeedback {
            strength: "Excellent interpersonal relationships and empathy",
            insight: "You build trust easily and excel at conflict resolution",
            weakness: "Difficulty with assertiveness and saying no",
            recommendation: "Learn assertiveness techniques and practice setting boundaries",
        },
        Trait::Conscientiousness => TraitFeedback {
            strength: "High reliability and exceptional work ethic",
            insight: "You consistently deliver quality results and meet commitments",
            weakness: "May lack organization and struggle with deadlines",
            recommendation: "Implement time management systems and break large tasks into smaller steps",
        },
        Trait::Openness => TraitFeedback {
            strength: "Creative thinking and adaptability to change",
            insight: "You embrace new ideas and approach problems innovatively",
            weakness: "May resist change and prefer familiar approaches",
            recommendation: "Actively seek new experiences and challenge your assumptions",
        },
        Trait::Neuroticism => TraitFeedback {
            strength: "Emotional stability and stress resilience",
            insight: "You maintain composure under pressure and handle challenges well",
            weakness: "High sensitivity to stress and emotional volatility",
            recommendation: "Practice mindfulness, stress management, and emotional regulation techniques",
        },
    }
}

/// Strong traits score at least 75, weak ones below 50. Neuroticism only
/// counts as strong below 30 and weak above 70 on top of that, so it never
/// qualifies.
fn is_strong(t: Trait, score: u8) -> bool {
    score >= 75 && (t != Trait::Neuroticism || score < 30)
}

fn is_weak(t: Trait, score: u8) -> bool {
    score < 50 && (t != Trait::Neuroticism || score > 70)
}

fn personality_findings(scores: &TraitScores, findings: &mut Findings) {
    for (t, score) in scores.iter().filter(|&(t, s)| is_strong(t, s)) {
        let feedback = trait_feedback(t);
        tracing::debug!(%t, score, "strong trait");
        findings.strength(feedback.strength);
        findings.personality_insights.push(feedback.insight.to_string());
    }
    for (t, score) in scores.iter().filter(|&(t, s)| is_weak(t, s)) {
        let feedback = trait_feedback(t);
        tracing::debug!(%t, score, "weak trait");
        findings.weakness(feedback.weakness, feedback.recommendation);
    }
}

// ---------------------------------------------------------------------------
// Memory and communication
// ---------------------------------------------------------------------------

fn memory_findings(memory: &MemoryScore, findings: &mut Findings) {
    if memory.overall >= 80 {
        findings.strength("Exceptional memory capabilities across all areas");
        findings
            .memory_insights
            .push("Your cognitive processing is highly efficient and well-developed".to_string());
    } else if memory.overall >= 65 {
        findings.strength("Strong foundational memory skills");
        findings
            .memory_insights
            .push("You have solid memory abilities with specific areas of excellence".to_string());
    } else {
        findings.weakness(
            "Memory skills need development and strengthening",
            "Engage in daily memory exercises and use mnemonic techniques",
        );
    }

    if memory.short_term < 60 {
        findings.weakness(
            "Short-term memory retention needs improvement",
            "Practice digit span exercises and chunking techniques",
        );
    }
    if memory.long_term < 60 {
        findings.weakness(
            "Long-term memory consolidation could be enhanced",
            "Use spaced repetition and create meaningful associations",
        );
    }
    if memory.working < 60 {
        findings.weakness(
            "Working memory capacity requires strengthening",
            "Engage in dual n-back training and complex mental tasks",
        );
    }
}

fn speech_findings(speech: &SpeechScore, findings: &mut Findings) {
    if speech.overall >= 80 {
        findings.strength("Excellent communication and presentation skills");
        findings.communication_insights.push(
            "You effectively engage audiences and convey messages with clarity".to_string(),
        );
    } else if speech.overall >= 65 {
        findings.strength("Good communication foundation with room for growth");
        findings
            .communication_insights
            .push("You have solid speaking abilities that can be further refined".to_string());
    } else {
        findings.weakness(
            "Communication skills need significant development",
            "Practice public speaking and record yourself regularly",
        );
    }

    if speech.speech_score < 70 {
        findings.weakness(
            "Speech clarity and delivery need improvement",
            "Work on articulation exercises and pace control",
        );
    }
    if speech.body_language_score < 70 {
        findings.weakness(
            "Body language and non-verbal communication need attention",
            "Practice maintaining eye contact and using purposeful gestures",
        );
    }
}

// ---------------------------------------------------------------------------
// Profile and plan options
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OverallProfile {
    pub title: &'static str,
    pub description: &'static str,
}

impl OverallProfile {
    pub fn for_score(score: u8) -> Self {
        let (title, description) = if score >= 85 {
            ("Exceptional Performer", "You demonstrate exceptional capabilities across personality, memory, and communication. You're well-positioned for leadership roles and complex challenges.")
        } else if score >= 75 {
            ("High Achiever", "You show strong performance across multiple areas with particular strengths that set you apart. You're ready for advanced responsibilities.")
        } else if score >= 65 {
            ("Strong Performer", "You have solid foundational skills with clear areas of strength. With focused development, you can achieve significant growth.")
        } else if score >= 55 {
            ("Developing Talent", "You show good potential with specific areas that need attention. Targeted improvement will unlock your capabilities.")
        } else {
            ("Emerging Potential", "You're at the beginning of your development journey with tremendous potential for growth through dedicated practice.")
        };
        Self { title, description }
    }
}

/// A plan length offered on the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlanOption {
    pub duration: PlanDuration,
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub recommended: bool,
}

pub const PLAN_OPTIONS: [PlanOption; 3] = [
    PlanOption {
        duration: PlanDuration::Sprint,
        title: "Intensive Sprint",
        description: "Fast-track improvement with daily focused exercises",
        features: &["Daily 30-min sessions", "Rapid skill building", "Quick wins focus", "High intensity"],
        recommended: false,
    },
    PlanOption {
        duration: PlanDuration::Balanced,
        title: "Balanced Growth",
        description: "Comprehensive development with sustainable progress",
        features: &["3-4 sessions per week", "Balanced approach", "Habit formation", "Sustainable pace"],
        recommended: true,
    },
    PlanOption {
        duration: PlanDuration::Deep,
        title: "Deep Transformation",
        description: "Thorough development with lasting behavioral change",
        features: &["2-3 sessions per week", "Deep skill integration", "Long-term habits", "Comprehensive growth"],
        recommended: false,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
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

    fn speech_with_overall(overall: u8) -> SpeechScore {
        let mut s = score_from_metrics([80; 11], "topic", 30);
        s.overall = overall;
        s
    }

    fn full(p: TraitScores, memory_overall: u8, speech_overall: u8) -> AssessmentResults {
        AssessmentResults {
            personality: Some(p),
            memory: Some(MemoryScore {
                short_term: 80,
                long_term: 70,
                working: 60,
                overall: memory_overall,
            }),
            speech: Some(speech_with_overall(speech_overall)),
        }
    }

    #[test]
    fn end_to_end_scenario() {
        let results = full(traits(80, 40, 80, 60, 20), 70, 50);
        let analysis = analyze(&results).unwrap();

        assert!((analysis.averages.personality - 56.0).abs() < f64::EPSILON);
        assert_eq!(analysis.overall_score, 59);
        assert_eq!(
            analysis.development_areas,
            DevelopmentAreas {
                primary: Domain::Communication,
                secondary: Domain::Personality,
                tertiary: Domain::Memory,
            }
        );
        assert_eq!(
            analysis.strengths[..2],
            [
                "Strong social skills and leadership potential".to_string(),
                "Creative thinking and adaptability to change".to_string(),
            ]
        );
        assert!(!analysis
            .strengths
            .contains(&"Emotional stability and stress resilience".to_string()));
        assert!(analysis
            .personality_insights
            .iter()
            .all(|i| !i.contains("composure")));
        assert!(analysis
            .weaknesses
            .contains(&"May lack organization and struggle with deadlines".to_string()));
        assert!(analysis
            .weaknesses
            .contains(&"Communication skills need significant development".to_string()));
        assert_eq!(analysis.weaknesses.len(), analysis.recommendations.len());
        assert_eq!(analysis.profile().title, "Developing Talent");
    }

    #[test]
    fn missing_assessments_are_named() {
        let results = AssessmentResults {
            personality: Some(traits(50, 50, 50, 50, 50)),
            ..Default::default()
        };
        assert_eq!(
            analyze(&results),
            Err(ReportError::MissingAssessments {
                missing: vec![Domain::Memory, Domain::Communication],
            })
        );
    }

    #[test]
    fn aggregation_is_idempotent() {
        let results = full(traits(60, 70, 55, 65, 40), 75, 82);
        assert_eq!(analyze(&results).unwrap(), analyze(&results).unwrap());
    }

    #[test]
    fn development_area_ties_keep_construction_order() {
        let averages = DomainAverages {
            personality: 60.0,
            memory: 60.0,
            communication: 60.0,
        };
        assert_eq!(
            averages.development_areas().ordered(),
            [Domain::Personality, Domain::Memory, Domain::Communication]
        );

        let averages = DomainAverages {
            personality: 70.0,
            memory: 50.0,
            communication: 50.0,
        };
        assert_eq!(
            averages.development_areas().ordered(),
            [Domain::Memory, Domain::Communication, Domain::Personality]
        );
    }

    #[test]
    fn neuroticism_adds_no_findings() {
        for n in [0, 20, 45, 80, 100] {
            let analysis = analyze(&full(traits(60, 60, 60, 60, n), 70, 70)).unwrap();
            assert!(analysis.strengths.iter().all(|s| !s.contains("stress")), "n = {n}");
            assert!(analysis.weaknesses.iter().all(|w| !w.contains("stress")), "n = {n}");
            assert!(analysis.personality_insights.is_empty(), "n = {n}");
        }
    }

    #[test]
    fn trait_findings_follow_canonical_order() {
        let analysis = analyze(&full(traits(40, 40, 40, 40, 50), 70, 70)).unwrap();
        assert_eq!(
            analysis.weaknesses[..3],
            [
                "May struggle with self-promotion and networking".to_string(),
                "Difficulty with assertiveness and saying no".to_string(),
                "May lack organization and struggle with deadlines".to_string(),
            ]
        );
        assert_eq!(analysis.weaknesses[3], "May resist change and prefer familiar approaches");
    }

    #[test]
    fn memory_sub_scores_add_targeted_weaknesses() {
        let mut results = full(traits(60, 60, 60, 60, 50), 85, 70);
        results.memory = Some(MemoryScore::from_parts(40, 100, 50));
        let analysis = analyze(&results).unwrap();
        assert!(analysis
            .weaknesses
            .contains(&"Short-term memory retention needs improvement".to_string()));
        assert!(analysis
            .weaknesses
            .contains(&"Working memory capacity requires strengthening".to_string()));
        assert!(!analysis.weaknesses.iter().any(|w| w.starts_with("Long-term")));
    }

    #[test]
    fn profile_tiers() {
        assert_eq!(OverallProfile::for_score(85).title, "Exceptional Performer");
        assert_eq!(OverallProfile::for_score(75).title, "High Achiever");
        assert_eq!(OverallProfile::for_score(65).title, "Strong Performer");
        assert_eq!(OverallProfile::for_score(54).title, "Emerging Potential");
    }

    #[test]
    fn balanced_plan_is_recommended() {
        let recommended: Vec<_> = PLAN_OPTIONS.iter().filter(|o| o.recommended).collect();
        assert_eq!(recommended.len(), 1);
        assert_eq!(recommended[0].duration, PlanDuration::Balanced);
    }
}
