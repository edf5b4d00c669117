//! Simulated speech and body-language analysis.
//!
//! Nothing here listens to the recording. The eleven base metrics are drawn
//! uniformly from fixed ranges; composites and feedback are derived from
//! those draws with fixed rules.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::AssessmentError;
use crate::model::{mean, round_percent, SpeechScore};

/// Recording stops automatically after this many seconds.
pub const MAX_RECORDING_SECONDS: u32 = 60;

/// Countdown before the recording starts.
pub const COUNTDOWN_SECONDS: u32 = 3;

/// Speaking prompts.
pub const TOPICS: [&str; 8] = [
    "Describe your ideal vacation destination and explain why it appeals to you. Include details about the activities, culture, and experiences you would enjoy there.",
    "Talk about a significant challenge you've overcome in your life. Explain the situation, the steps you took to address it, and what you learned from the experience.",
    "Explain a hobby or interest you're passionate about. Describe what drew you to it, how you've developed your skills, and why it's meaningful to you.",
    "Describe someone who has positively influenced your life. Explain their impact on you and specific examples of how they've helped shape who you are today.",
    "Share your thoughts on the importance of continuous learning and personal development. Discuss how you approach learning new skills and staying curious.",
    "Describe your communication style and how you adapt it for different situations. Give examples of how you communicate with friends versus professional settings.",
    "Talk about a time when you had to present or speak in front of others. Describe your preparation, how you felt, and what you learned from the experience.",
    "Explain your perspective on teamwork and collaboration. Describe a successful team experience and what made it work well.",
];

/// The eleven base metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    Clarity,
    Pace,
    Volume,
    Articulation,
    EyeContact,
    Posture,
    Gestures,
    FacialExpression,
    Confidence,
    Engagement,
    Structure,
}

impl Metric {
    pub const ALL: [Metric; 11] = [
        Metric::Clarity,
        Metric::Pace,
        Metric::Volume,
        Metric::Articulation,
        Metric::EyeContact,
        Metric::Posture,
        Metric::Gestures,
        Metric::FacialExpression,
        Metric::Confidence,
        Metric::Engagement,
        Metric::Structure,
    ];

    /// Inclusive range the metric is sampled from.
    pub fn range(self) -> (u8, u8) {
        match self {
            Metric::Clarity => (75, 99),
            Metric::Pace => (80, 99),
            Metric::Volume => (70, 99),
            Metric::Articulation => (75, 99),
            Metric::EyeContact => (65, 99),
            Metric::Posture => (70, 99),
            Metric::Gestures => (75, 99),
            Metric::FacialExpression => (80, 99),
            Metric::Confidence => (80, 99),
            Metric::Engagement => (75, 99),
            Metric::Structure => (70, 99),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Metric::Clarity => "Clarity",
            Metric::Pace => "Pace",
            Metric::Volume => "Volume",
            Metric::Articulation => "Articulation",
            Metric::EyeContact => "Eye Contact",
            Metric::Posture => "Posture",
            Metric::Gestures => "Gestures",
            Metric::FacialExpression => "Facial Expression",
            Metric::Confidence => "Confidence",
            Metric::Engagement => "Engagement",
            Metric::Structure => "Structure",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Metric::Clarity => "How clearly you articulate words and sounds",
            Metric::Pace => "The speed and rhythm of your speech delivery",
            Metric::Volume => "Appropriate volume level and projection",
            Metric::Articulation => "Precision in pronouncing words and syllables",
            Metric::EyeContact => "Maintaining appropriate gaze with the audience",
            Metric::Posture => "Body positioning and stance during speaking",
            Metric::Gestures => "Natural and supportive hand movements",
            Metric::FacialExpression => "Appropriate facial expressions and engagement",
            Metric::Confidence => "Overall confidence and self-assurance in delivery",
            Metric::Engagement => "Ability to connect with and engage the audience",
            Metric::Structure => "Organization and flow of your message",
        }
    }

    pub fn get(self, score: &SpeechScore) -> u8 {
        match self {
            Metric::Clarity => score.clarity,
            Metric::Pace => score.pace,
            Metric::Volume => score.volume,
            Metric::Articulation => score.articulation,
            Metric::EyeContact => score.eye_contact,
            Metric::Posture => score.posture,
            Metric::Gestures => score.gestures,
            Metric::FacialExpression => score.facial_expression,
            Metric::Confidence => score.confidence,
            Metric::Engagement => score.engagement,
            Metric::Structure => score.structure,
        }
    }
}

/// Metrics that make up the speech composite.
pub const SPEECH_METRICS: [Metric; 4] = [Metric::Clarity, Metric::Pace, Metric::Volume, Metric::Articulation];

/// Metrics that make up the body-language composite.
pub const BODY_LANGUAGE_METRICS: [Metric; 4] = [
    Metric::EyeContact,
    Metric::Posture,
    Metric::Gestures,
    Metric::FacialExpression,
];

/// Metrics that feed the overall score directly.
pub const EFFECTIVENESS_METRICS: [Metric; 3] = [Metric::Confidence, Metric::Engagement, Metric::Structure];

/// A metric at or above `strong_at` is a strength; below `weak_below` it needs work.
struct FeedbackRule {
    metric: Metric,
    strong_at: u8,
    weak_below: u8,
    strength: &'static str,
    improvement: &'static str,
}

const FEEDBACK_RULES: [FeedbackRule; 5] = [
    FeedbackRule {
        metric: Metric::Clarity,
        strong_at: 85,
        weak_below: 75,
        strength: "Excellent speech clarity and pronunciation",
        improvement: "Work on speech clarity and pronunciation",
    },
    FeedbackRule {
        metric: Metric::EyeContact,
        strong_at: 80,
        weak_below: 70,
        strength: "Strong eye contact with the camera",
        improvement: "Maintain more consistent eye contact",
    },
    FeedbackRule {
        metric: Metric::Confidence,
        strong_at: 85,
        weak_below: 75,
        strength: "High confidence level in delivery",
        improvement: "Build confidence through practice",
    },
    FeedbackRule {
        metric: Metric::Pace,
        strong_at: 85,
        weak_below: 75,
        strength: "Well-paced speech delivery",
        improvement: "Adjust speaking pace for better comprehension",
    },
    FeedbackRule {
        metric: Metric::Posture,
        strong_at: 80,
        weak_below: 70,
        strength: "Good posture and body positioning",
        improvement: "Improve posture and body positioning",
    },
];

/// Below the threshold, the recommendation applies.
const RECOMMENDATION_RULES: [(Metric, u8, &str); 5] = [
    (Metric::Clarity, 80, "Practice tongue twisters and articulation exercises daily"),
    (Metric::EyeContact, 75, "Practice speaking while looking directly at a camera or mirror"),
    (Metric::Confidence, 80, "Record yourself speaking regularly to build comfort"),
    (Metric::Gestures, 75, "Practice natural hand gestures that support your message"),
    (Metric::Structure, 75, "Use the PREP method: Point, Reason, Example, Point"),
];

/// Draw the eleven base metrics and build a full score.
pub fn analyze_recording<R: Rng + ?Sized>(
    rng: &mut R,
    topic_index: usize,
    duration_secs: u32,
) -> Result<SpeechScore, AssessmentError> {
    let topic = TOPICS.get(topic_index).ok_or(AssessmentError::InvalidTopic {
        index: topic_index,
        available: TOPICS.len(),
    })?;

    let mut draws = [0u8; 11];
    for (slot, metric) in draws.iter_mut().zip(Metric::ALL) {
        let (lo, hi) = metric.range();
        *slot = rng.gen_range(lo..=hi);
    }

    let score = score_from_metrics(draws, topic, duration_secs);
    tracing::debug!(overall = score.overall, topic_index, "analyzed speech recording");
    Ok(score)
}

/// Build a score from base metrics given in [`Metric::ALL`] order.
///
/// The recorded duration is capped at [`MAX_RECORDING_SECONDS`].
pub fn score_from_metrics(metrics: [u8; 11], topic: &str, duration_secs: u32) -> SpeechScore {
    let [clarity, pace, volume, articulation, eye_contact, posture, gestures, facial_expression, confidence, engagement, structure] =
        metrics;

    let speech_score = round_percent(mean(&[clarity, pace, volume, articulation]));
    let body_language_score = round_percent(mean(&[eye_contact, posture, gestures, facial_expression]));
    let overall = round_percent(mean(&[
        speech_score,
        body_language_score,
        confidence,
        engagement,
        structure,
    ]));

    let mut score = SpeechScore {
        clarity,
        pace,
        volume,
        articulation,
        eye_contact,
        posture,
        gestures,
        facial_expression,
        confidence,
        engagement,
        structure,
        speech_score,
        body_language_score,
        overall,
        strengths: Vec::new(),
        improvements: Vec::new(),
        recommendations: Vec::new(),
        duration: duration_secs.min(MAX_RECORDING_SECONDS),
        topic: topic.to_string(),
    };

    for rule in &FEEDBACK_RULES {
        let value = rule.metric.get(&score);
        if value >= rule.strong_at {
            score.strengths.push(rule.strength.to_string());
        } else if value < rule.weak_below {
            score.improvements.push(rule.improvement.to_string());
        }
    }
    for (metric, below, text) in RECOMMENDATION_RULES {
        if metric.get(&score) < below {
            score.recommendations.push(text.to_string());
        }
    }

    score
}

/// Format seconds as `m:ss`.
pub fn format_duration(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Headline for the communication results view.
#[derive(Debug, Clone, Serialize)]
pub struct CommunicationProfile {
    pub title: &'static str,
    pub description: &'static str,
}

impl CommunicationProfile {
    pub fn for_score(score: &SpeechScore) -> Self {
        let (title, description) = if score.overall >= 90 {
            ("Master Communicator", "You demonstrate exceptional communication skills with outstanding speech delivery and compelling body language. You naturally engage audiences and convey messages with remarkable clarity and confidence.")
        } else if score.overall >= 80 {
            ("Skilled Communicator", "You have strong communication abilities with excellent speech quality and effective body language. You connect well with audiences and deliver messages with confidence and clarity.")
        } else if score.overall >= 70 {
            ("Developing Communicator", "You show solid communication fundamentals with good speech delivery and body language awareness. With focused practice, you can enhance your natural communication abilities.")
        } else if score.overall >= 60 {
            ("Emerging Communicator", "You have foundational communication skills with room for growth in both speech delivery and body language. Targeted practice will help you build confidence and effectiveness.")
        } else {
            ("Communication Builder", "You're at the beginning of your communication development journey. With dedicated practice and the right techniques, you can significantly improve your speaking abilities.")
        };
        Self { title, description }
    }
}
