//! Big-Five personality questionnaire and scoring.

use serde::Serialize;

use crate::error::AssessmentError;
use crate::model::{round_percent, Trait, TraitScores};

/// A questionnaire item.
#[derive(Debug, Clone, Copy)]
pub struct Question {
    pub text: &'static str,
    pub measures: Trait,
    /// Reverse-scored items count `6 - answer`.
    pub reverse: bool,
}

const fn q(text: &'static str, measures: Trait, reverse: bool) -> Question {
    Question {
        text,
        measures,
        reverse,
    }
}

/// The fixed 15-item questionnaire, three items per trait.
pub const QUESTIONS: [Question; 15] = [
    q("I see myself as someone who is talkative", Trait::Extraversion, false),
    q("I see myself as someone who tends to find fault with others", Trait::Agreeableness, true),
    q("I see myself as someone who does a thorough job", Trait::Conscientiousness, false),
    q("I see myself as someone who is depressed, blue", Trait::Neuroticism, false),
    q("I see myself as someone who is original, comes up with new ideas", Trait::Openness, false),
    q("I see myself as someone who is reserved", Trait::Extraversion, true),
    q("I see myself as someone who is helpful and unselfish with others", Trait::Agreeableness, false),
    q("I see myself as someone who can be somewhat careless", Trait::Conscientiousness, true),
    q("I see myself as someone who is relaxed, handles stress well", Trait::Neuroticism, true),
    q("I see myself as someone who is curious about many different things", Trait::Openness, false),
    q("I see myself as someone who is full of energy", Trait::Extraversion, false),
    q("I see myself as someone who starts quarrels with others", Trait::Agreeableness, true),
    q("I see myself as someone who is a reliable worker", Trait::Conscientiousness, false),
    q("I see myself as someone who can be tense", Trait::Neuroticism, false),
    q("I see myself as someone who is ingenious, a deep thinker", Trait::Openness, false),
];

/// Likert labels for answers 1 through 5.
pub const SCALE_LABELS: [&str; 5] = [
    "Disagree strongly",
    "Disagree a little",
    "Neither agree nor disagree",
    "Agree a little",
    "Agree strongly",
];

/// Score a full set of answers, one per question in [`QUESTIONS`] order.
///
/// `None` marks an unanswered question; it is left out of both the trait's
/// sum and its count, so a partially answered trait still scales to 0-100.
/// A trait with no answered questions scores 0.
pub fn score_answers(answers: &[Option<u8>]) -> Result<TraitScores, AssessmentError> {
    if answers.len() != QUESTIONS.len() {
        return Err(AssessmentError::WrongAnswerCount {
            expected: QUESTIONS.len(),
            actual: answers.len(),
        });
    }

    let mut sums = [0u32; 5];
    let mut counts = [0u32; 5];

    for (index, (question, answer)) in QUESTIONS.iter().zip(answers).enumerate() {
        let Some(value) = *answer else {
            continue;
        };
        if !(1..=5).contains(&value) {
            tracing::warn!(question = index + 1, value, "rejected out-of-range answer");
            return Err(AssessmentError::InvalidAnswer {
                question: index + 1,
                value,
            });
        }
        let score = if question.reverse { 6 - value } else { value };
        let slot = trait_slot(question.measures);
        sums[slot] += u32::from(score);
        counts[slot] += 1;
    }

    let scores = TraitScores::from_fn(|t| {
        let slot = trait_slot(t);
        if counts[slot] == 0 {
            return 0;
        }
        round_percent(f64::from(sums[slot]) / f64::from(counts[slot] * 5) * 100.0)
    });

    tracing::debug!(?scores, "scored personality questionnaire");
    Ok(scores)
}

fn trait_slot(t: Trait) -> usize {
    match t {
        Trait::Openness => 0,
        Trait::Conscientiousness => 1,
        Trait::Extraversion => 2,
        Trait::Agreeableness => 3,
        Trait::Neuroticism => 4,
    }
}

/// Headline score on the personality results view: `round(sum / 5)`.
pub fn overall_score(scores: &TraitScores) -> u8 {
    round_percent(scores.average())
}

/// Profile selected by the user's dominant trait.
#[derive(Debug, Clone, Serialize)]
pub struct PersonalityProfile {
    pub dominant: Trait,
    pub title: &'static str,
    pub description: &'static str,
    pub strengths: &'static [&'static str],
    pub challenges: &'static [&'static str],
}

impl PersonalityProfile {
    pub fn for_scores(scores: &TraitScores) -> Self {
        Self::for_trait(scores.dominant())
    }

    pub fn for_trait(dominant: Trait) -> Self {
        match dominant {
            Trait::Extraversion => Self {
                dominant,
                title: "The Energizer",
                description: "You thrive in social situations and draw energy from interactions with others. You're likely outgoing, assertive, and comfortable being the center of attention.",
                strengths: &["Natural leadership", "Strong communication", "Motivates others", "Adaptable to change"],
                challenges: &["May dominate conversations", "Can be impulsive", "Might struggle with solitude"],
            },
            Trait::Agreeableness => Self {
                dominant,
                title: "The Harmonizer",
                description: "You prioritize cooperation and maintaining positive relationships. You're naturally empathetic, trusting, and focused on helping others.",
                strengths: &["Excellent team player", "High emotional intelligence", "Conflict resolution", "Builds trust easily"],
                challenges: &["May avoid necessary conflicts", "Can be taken advantage of", "Difficulty saying no"],
            },
            Trait::Conscientiousness => Self {
                dominant,
                title: "The Achiever",
                description: "You're highly organized, disciplined, and goal-oriented. You take responsibilities seriously and consistently deliver high-quality work.",
                strengths: &["Exceptional reliability", "Strong work ethic", "Detail-oriented", "Excellent planning skills"],
                challenges: &["May be overly critical", "Can be inflexible", "Prone to perfectionism"],
            },
            Trait::Neuroticism => Self {
                dominant,
                title: "The Sensitive",
                description: "You experience emotions deeply and are highly attuned to stress and environmental changes. This sensitivity can be both a strength and a challenge.",
                strengths: &["High emotional awareness", "Empathetic to others", "Motivated by improvement", "Attention to potential problems"],
                challenges: &["Stress sensitivity", "May worry excessively", "Emotional volatility"],
            },
            Trait::Openness => Self {
                dominant,
                title: "The Explorer",
                description: "You're curious, creative, and open to new experiences. You enjoy learning, abstract thinking, and exploring unconventional ideas.",
                strengths: &["Creative problem-solving", "Adaptable to change", "Intellectual curiosity", "Innovative thinking"],
                challenges: &["May be seen as impractical", "Can be indecisive", "Might neglect routine tasks"],
            },
        }
    }
}

/// Banding used for per-trait descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraitLevel {
    High,
    Medium,
    Low,
}

impl TraitLevel {
    /// High at 70 and above, medium at 40 and above.
    pub fn from_score(score: u8) -> Self {
        if score >= 70 {
            TraitLevel::High
        } else if score >= 40 {
            TraitLevel::Medium
        } else {
            TraitLevel::Low
        }
    }
}

/// What a trait score means, in a sentence or two.
pub fn trait_description(t: Trait, score: u8) -> &'static str {
    use TraitLevel::*;
    match (t, TraitLevel::from_score(score)) {
        (Trait::Extraversion, High) => "You're outgoing, energetic, and thrive in social situations. You likely enjoy being around people and feel comfortable expressing yourself.",
        (Trait::Extraversion, Medium) => "You balance social interaction with alone time. You can be outgoing when needed but also appreciate quieter moments.",
        (Trait::Extraversion, Low) => "You prefer quieter, more intimate settings and may need time alone to recharge. You think before speaking and value deep conversations.",
        (Trait::Agreeableness, High) => "You're naturally cooperative, trusting, and focused on maintaining harmony. You prioritize others' needs and work well in teams.",
        (Trait::Agreeableness, Medium) => "You balance cooperation with assertiveness. You can be accommodating but also stand up for your beliefs when necessary.",
        (Trait::Agreeableness, Low) => "You're more competitive and skeptical. You prioritize your own interests and aren't afraid to challenge others when needed.",
        (Trait::Conscientiousness, High) => "You're highly organized, disciplined, and reliable. You set goals and work systematically to achieve them with great attention to detail.",
        (Trait::Conscientiousness, Medium) => "You're generally organized and responsible but can be flexible when needed. You balance planning with spontaneity.",
        (Trait::Conscientiousness, Low) => "You prefer flexibility and spontaneity over rigid structure. You may struggle with organization but are adaptable to change.",
        (Trait::Neuroticism, High) => "You experience emotions intensely and may be more sensitive to stress. You're highly aware of potential problems and challenges.",
        (Trait::Neuroticism, Medium) => "You experience normal emotional ups and downs. You can handle stress reasonably well but may occasionally feel overwhelmed.",
        (Trait::Neuroticism, Low) => "You're emotionally stable and resilient. You handle stress well and maintain a calm demeanor in challenging situations.",
        (Trait::Openness, High) => "You're highly creative, curious, and open to new experiences. You enjoy abstract thinking and exploring unconventional ideas.",
        (Trait::Openness, Medium) => "You appreciate both new experiences and familiar routines. You're moderately creative and open to different perspectives.",
        (Trait::Openness, Low) => "You prefer familiar experiences and traditional approaches. You value practical solutions over abstract theories.",
    }
}
