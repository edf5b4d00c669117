//! Core data model types for growthpath.
//!
//! These are the persisted shapes every stage reads and writes: trait
//! scores, memory and speech scores, development areas, and improvement
//! plans. Field names serialize in camelCase so stored entries keep the
//! layout documented for the key-value store.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::PlanError;

/// Round a percentage the way every score in the system is rounded:
/// half away from zero, clamped into `0..=100`.
pub fn round_percent(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, 100.0) as u8
}

/// Arithmetic mean of a slice of scores. Empty input yields 0.0.
pub fn mean(values: &[u8]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().map(|&v| f64::from(v)).sum::<f64>() / values.len() as f64
}

// ---------------------------------------------------------------------------
// Personality
// ---------------------------------------------------------------------------

/// One of the five Big-Five personality dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trait {
    Extraversion,
    Agreeableness,
    Conscientiousness,
    Neuroticism,
    Openness,
}

impl Trait {
    /// All traits, in the canonical order used for listings and tie-breaks.
    pub const ALL: [Trait; 5] = [
        Trait::Extraversion,
        Trait::Agreeableness,
        Trait::Conscientiousness,
        Trait::Neuroticism,
        Trait::Openness,
    ];

    /// Label shown to users. Neuroticism is presented as its inverse.
    pub fn label(self) -> &'static str {
        match self {
            Trait::Openness => "Openness",
            Trait::Conscientiousness => "Conscientiousness",
            Trait::Extraversion => "Extraversion",
            Trait::Agreeableness => "Agreeableness",
            Trait::Neuroticism => "Emotional Stability",
        }
    }
}

impl fmt::Display for Trait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trait::Openness => write!(f, "openness"),
            Trait::Conscientiousness => write!(f, "conscientiousness"),
            Trait::Extraversion => write!(f, "extraversion"),
            Trait::Agreeableness => write!(f, "agreeableness"),
            Trait::Neuroticism => write!(f, "neuroticism"),
        }
    }
}

impl FromStr for Trait {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "openness" => Ok(Trait::Openness),
            "conscientiousness" => Ok(Trait::Conscientiousness),
            "extraversion" => Ok(Trait::Extraversion),
            "agreeableness" => Ok(Trait::Agreeableness),
            "neuroticism" => Ok(Trait::Neuroticism),
            other => Err(format!("unknown trait: {other}")),
        }
    }
}

/// Percentage score (0-100) for each of the five traits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitScores {
    pub extraversion: u8,
    pub agreeableness: u8,
    pub conscientiousness: u8,
    pub neuroticism: u8,
    pub openness: u8,
}

impl TraitScores {
    /// Build trait scores from a per-trait function.
    pub fn from_fn(mut f: impl FnMut(Trait) -> u8) -> Self {
        Self {
            extraversion: f(Trait::Extraversion),
            agreeableness: f(Trait::Agreeableness),
            conscientiousness: f(Trait::Conscientiousness),
            neuroticism: f(Trait::Neuroticism),
            openness: f(Trait::Openness),
        }
    }

    pub fn get(&self, t: Trait) -> u8 {
        match t {
            Trait::Openness => self.openness,
            Trait::Conscientiousness => self.conscientiousness,
            Trait::Extraversion => self.extraversion,
            Trait::Agreeableness => self.agreeableness,
            Trait::Neuroticism => self.neuroticism,
        }
    }

    /// Iterate `(trait, score)` pairs in [`Trait::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Trait, u8)> + '_ {
        Trait::ALL.iter().map(move |&t| (t, self.get(t)))
    }

    /// Unrounded mean of the five trait scores.
    pub fn average(&self) -> f64 {
        let values: Vec<u8> = self.iter().map(|(_, s)| s).collect();
        mean(&values)
    }

    /// The highest-scoring trait. Ties go to the earliest trait in [`Trait::ALL`].
    pub fn dominant(&self) -> Trait {
        self.iter()
            .reduce(|best, cur| if cur.1 > best.1 { cur } else { best })
            .map_or(Trait::Extraversion, |(t, _)| t)
    }

    /// The lowest-scoring trait. Ties go to the earliest trait in [`Trait::ALL`].
    pub fn weakest(&self) -> Trait {
        self.iter()
            .reduce(|worst, cur| if cur.1 < worst.1 { cur } else { worst })
            .map_or(Trait::Extraversion, |(t, _)| t)
    }
}

// ---------------------------------------------------------------------------
// Memory
// ---------------------------------------------------------------------------

/// Result of the three memory mini-games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryScore {
    pub short_term: u8,
    pub long_term: u8,
    pub working: u8,
    pub overall: u8,
}

impl MemoryScore {
    /// Combine the three sub-scores; `overall` is their rounded mean.
    pub fn from_parts(short_term: u8, long_term: u8, working: u8) -> Self {
        let overall = round_percent(mean(&[short_term, long_term, working]));
        Self {
            short_term,
            long_term,
            working,
            overall,
        }
    }
}

// ---------------------------------------------------------------------------
// Speech
// ---------------------------------------------------------------------------

/// Result of a (simulated) speech and body-language analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechScore {
    // Speech delivery
    pub clarity: u8,
    pub pace: u8,
    pub volume: u8,
    pub articulation: u8,
    // Body language
    pub eye_contact: u8,
    pub posture: u8,
    pub gestures: u8,
    pub facial_expression: u8,
    // Communication effectiveness
    pub confidence: u8,
    pub engagement: u8,
    pub structure: u8,
    // Composites
    pub speech_score: u8,
    pub body_language_score: u8,
    pub overall: u8,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub improvements: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
    /// Recording length in seconds.
    #[serde(default)]
    pub duration: u32,
    /// The speaking prompt the user answered.
    #[serde(default)]
    pub topic: String,
}

// ---------------------------------------------------------------------------
// Domains and development areas
// ---------------------------------------------------------------------------

/// One of the three assessed development areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Personality,
    Memory,
    Communication,
}

impl Domain {
    /// All domains in construction order, which is also the tie-break order.
    pub const ALL: [Domain; 3] = [Domain::Personality, Domain::Memory, Domain::Communication];

    /// Capitalized name for titles.
    pub fn title(self) -> &'static str {
        match self {
            Domain::Personality => "Personality",
            Domain::Memory => "Memory",
            Domain::Communication => "Communication",
        }
    }

    /// The assessment a user takes to produce this domain's score.
    pub fn assessment(self) -> &'static str {
        match self {
            Domain::Personality => "personality",
            Domain::Memory => "memory",
            Domain::Communication => "speech",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Domain::Personality => write!(f, "personality"),
            Domain::Memory => write!(f, "memory"),
            Domain::Communication => write!(f, "communication"),
        }
    }
}

impl FromStr for Domain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "personality" => Ok(Domain::Personality),
            "memory" => Ok(Domain::Memory),
            "communication" | "speech" => Ok(Domain::Communication),
            other => Err(format!("unknown domain: {other}")),
        }
    }
}

/// The three domains ranked weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevelopmentAreas {
    pub primary: Domain,
    pub secondary: Domain,
    pub tertiary: Domain,
}

impl DevelopmentAreas {
    pub fn ordered(&self) -> [Domain; 3] {
        [self.primary, self.secondary, self.tertiary]
    }
}

// ---------------------------------------------------------------------------
// Plans
// ---------------------------------------------------------------------------

/// Supported improvement plan lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum PlanDuration {
    /// 45 days.
    Sprint,
    /// 90 days.
    Balanced,
    /// 180 days.
    Deep,
}

impl PlanDuration {
    pub const ALL: [PlanDuration; 3] = [PlanDuration::Sprint, PlanDuration::Balanced, PlanDuration::Deep];

    pub fn days(self) -> u32 {
        match self {
            PlanDuration::Sprint => 45,
            PlanDuration::Balanced => 90,
            PlanDuration::Deep => 180,
        }
    }

    /// `ceil(days / 7)`.
    pub fn total_weeks(self) -> u32 {
        self.days().div_ceil(7)
    }

    /// Exercises assigned to each week.
    pub fn exercises_per_week(self) -> usize {
        match self {
            PlanDuration::Sprint => 3,
            PlanDuration::Balanced | PlanDuration::Deep => 2,
        }
    }

    pub fn time_commitment(self) -> &'static str {
        match self {
            PlanDuration::Sprint => "30-45 minutes daily",
            PlanDuration::Balanced => "20-30 minutes, 4-5 times per week",
            PlanDuration::Deep => "15-25 minutes, 3-4 times per week",
        }
    }
}

impl TryFrom<u32> for PlanDuration {
    type Error = PlanError;

    fn try_from(days: u32) -> Result<Self, Self::Error> {
        match days {
            45 => Ok(PlanDuration::Sprint),
            90 => Ok(PlanDuration::Balanced),
            180 => Ok(PlanDuration::Deep),
            other => Err(PlanError::InvalidDuration(other)),
        }
    }
}

impl From<PlanDuration> for u32 {
    fn from(d: PlanDuration) -> u32 {
        d.days()
    }
}

impl fmt::Display for PlanDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-day", self.days())
    }
}

/// Snapshot taken when the user picks a plan length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanData {
    #[serde(default)]
    pub id: Uuid,
    pub duration: PlanDuration,
    pub overall_score: u8,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
    pub development_areas: DevelopmentAreas,
    pub created_at: DateTime<Utc>,
    /// Seed for the exercise shuffle, so the weeks render the same every time.
    #[serde(default)]
    pub seed: u64,
}

/// Position of a week inside the plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Foundation,
    Development,
    Integration,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Foundation => write!(f, "foundation"),
            Phase::Development => write!(f, "development"),
            Phase::Integration => write!(f, "integration"),
        }
    }
}

/// One week of an improvement plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyGoal {
    pub week: u32,
    pub title: String,
    pub description: String,
    pub focus: Domain,
    pub phase: Phase,
    pub exercises: Vec<String>,
    pub time_commitment: String,
}
