//! Memory mini-games: short-term digit span, long-term word recall, and
//! working-memory arithmetic with letter recall.
//!
//! Each game is a small state machine a front end drives turn by turn.
//! Timers (digit playback, the study countdown) belong to the front end;
//! the sessions only see the user's answers.

use std::collections::HashSet;

use rand::Rng;
use serde::Serialize;

use crate::error::AssessmentError;
use crate::model::{round_percent, MemoryScore};

// ---------------------------------------------------------------------------
// Short-term memory
// ---------------------------------------------------------------------------

/// Rounds in the digit-span game.
pub const SHORT_TERM_ROUNDS: u32 = 5;

/// Milliseconds each digit stays on screen.
pub const DIGIT_INTERVAL_MS: u64 = 1000;

/// Digits shown in `round` (1-based).
pub fn sequence_length(round: u32) -> usize {
    3 + round as usize
}

/// `round(correct / 5 * 100)`.
pub fn short_term_score(correct_rounds: u32) -> u8 {
    round_percent(f64::from(correct_rounds) / f64::from(SHORT_TERM_ROUNDS) * 100.0)
}

/// Outcome of one digit-span round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOutcome {
    pub round: u32,
    pub correct: bool,
    pub expected: Vec<u8>,
    /// Whether that was the last round.
    pub finished: bool,
}

/// Digit-span game: five rounds of growing sequences, all-or-nothing per round.
#[derive(Debug, Clone)]
pub struct ShortTermTest {
    round: u32,
    correct: u32,
    current: Option<Vec<u8>>,
    finished: bool,
}

impl Default for ShortTermTest {
    fn default() -> Self {
        Self::new()
    }
}

impl ShortTermTest {
    pub fn new() -> Self {
        Self {
            round: 1,
            correct: 0,
            current: None,
            finished: false,
        }
    }

    /// The round being played (1-based).
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn correct_rounds(&self) -> u32 {
        self.correct
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// The sequence for the current round, generating it on first call.
    ///
    /// Once generated, a round's sequence does not change.
    pub fn sequence<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<&[u8], AssessmentError> {
        if self.finished {
            return Err(AssessmentError::SessionFinished("short-term"));
        }
        let length = sequence_length(self.round);
        let sequence = self
            .current
            .get_or_insert_with(|| (0..length).map(|_| rng.gen_range(1..=9)).collect());
        Ok(sequence.as_slice())
    }

    /// Check the user's reproduction of the current sequence.
    pub fn submit(&mut self, input: &[u8]) -> Result<RoundOutcome, AssessmentError> {
        if self.finished {
            return Err(AssessmentError::SessionFinished("short-term"));
        }
        let expected = self
            .current
            .take()
            .ok_or(AssessmentError::OutOfOrder("short-term"))?;

        let correct = input == expected.as_slice();
        if correct {
            self.correct += 1;
        }
        let round = self.round;
        tracing::debug!(round, correct, "short-term round complete");

        if self.round >= SHORT_TERM_ROUNDS {
            self.finished = true;
        } else {
            self.round += 1;
        }

        Ok(RoundOutcome {
            round,
            correct,
            expected,
            finished: self.finished,
        })
    }

    pub fn score(&self) -> u8 {
        short_term_score(self.correct)
    }
}

// ---------------------------------------------------------------------------
// Long-term memory
// ---------------------------------------------------------------------------

/// The words to memorize.
pub const WORD_LIST: [&str; 10] = [
    "elephant",
    "guitar",
    "rainbow",
    "telescope",
    "butterfly",
    "mountain",
    "keyboard",
    "sandwich",
    "umbrella",
    "bicycle",
];

/// Length of the study countdown.
pub const STUDY_SECONDS: u64 = 30;

/// What happened to a recalled word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recall {
    Accepted,
    Duplicate,
    NotInList,
    Empty,
}

/// Free-recall game over [`WORD_LIST`].
#[derive(Debug, Clone, Default)]
pub struct LongTermTest {
    recalled: Vec<&'static str>,
    finished: bool,
}

impl LongTermTest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer one recalled word. Matching ignores case and surrounding whitespace.
    pub fn recall(&mut self, input: &str) -> Result<Recall, AssessmentError> {
        if self.finished {
            return Err(AssessmentError::SessionFinished("long-term"));
        }
        let word = input.trim().to_lowercase();
        if word.is_empty() {
            return Ok(Recall::Empty);
        }
        let Some(&listed) = WORD_LIST.iter().find(|w| **w == word) else {
            return Ok(Recall::NotInList);
        };
        if self.recalled.contains(&listed) {
            return Ok(Recall::Duplicate);
        }
        self.recalled.push(listed);
        Ok(Recall::Accepted)
    }

    /// Words recalled so far, in the order given.
    pub fn recalled(&self) -> &[&'static str] {
        &self.recalled
    }

    /// Close recall and return the score.
    pub fn finish(&mut self) -> u8 {
        self.finished = true;
        self.score()
    }

    pub fn score(&self) -> u8 {
        long_term_score(self.recalled.iter().copied())
    }
}

/// `round(unique listed words / 10 * 100)`, ignoring case and duplicates.
pub fn long_term_score<'a>(words: impl IntoIterator<Item = &'a str>) -> u8 {
    let unique: HashSet<String> = words
        .into_iter()
        .map(|w| w.trim().to_lowercase())
        .filter(|w| WORD_LIST.contains(&w.as_str()))
        .collect();
    round_percent(unique.len() as f64 / WORD_LIST.len() as f64 * 100.0)
}

// ---------------------------------------------------------------------------
// Working memory
// ---------------------------------------------------------------------------

/// An arithmetic problem paired with a letter to remember.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Problem {
    pub equation: &'static str,
    pub answer: i64,
    pub letter: char,
}

const fn p(equation: &'static str, answer: i64, letter: char) -> Problem {
    Problem {
        equation,
        answer,
        letter,
    }
}

/// The fixed problem set.
pub static PROBLEMS: [Problem; 8] = [
    p("7 + 5 = ?", 12, 'R'),
    p("15 - 8 = ?", 7, 'M'),
    p("4 × 3 = ?", 12, 'K'),
    p("18 ÷ 2 = ?", 9, 'L'),
    p("9 + 6 = ?", 15, 'P'),
    p("20 - 7 = ?", 13, 'T'),
    p("3 × 4 = ?", 12, 'N'),
    p("16 ÷ 4 = ?", 4, 'S'),
];

/// Solve each problem, remember the letters of the ones solved, then recall
/// those letters in order.
#[derive(Debug, Clone, Default)]
pub struct WorkingMemoryTest {
    index: usize,
    letters: String,
    correct: u32,
    finished: bool,
}

impl WorkingMemoryTest {
    pub fn new() -> Self {
        Self::default()
    }

    /// The problem awaiting an answer, or `None` once recall is due.
    pub fn current_problem(&self) -> Option<&'static Problem> {
        if self.finished {
            return None;
        }
        PROBLEMS.get(self.index)
    }

    /// Whether all problems are answered and the letter recall is due.
    pub fn awaiting_recall(&self) -> bool {
        !self.finished && self.index >= PROBLEMS.len()
    }

    pub fn correct_answers(&self) -> u32 {
        self.correct
    }

    /// Answer the current problem. `None` stands for input that is not a number.
    ///
    /// Returns whether the answer was correct.
    pub fn answer(&mut self, value: Option<i64>) -> Result<bool, AssessmentError> {
        if self.finished {
            return Err(AssessmentError::SessionFinished("working-memory"));
        }
        let problem = self
            .current_problem()
            .ok_or(AssessmentError::OutOfOrder("working-memory"))?;
        let correct = value == Some(problem.answer);
        if correct {
            self.correct += 1;
            self.letters.push(problem.letter);
        }
        self.index += 1;
        Ok(correct)
    }

    /// Score the recalled letters and close the session.
    pub fn finish(&mut self, recalled: &str) -> Result<u8, AssessmentError> {
        if self.finished {
            return Err(AssessmentError::SessionFinished("working-memory"));
        }
        if !self.awaiting_recall() {
            return Err(AssessmentError::OutOfOrder("working-memory"));
        }
        self.finished = true;
        Ok(working_score(&self.letters, recalled))
    }

    /// Letters earned so far.
    pub fn target(&self) -> &str {
        &self.letters
    }
}

/// Position-wise match of `recalled` against `target`, case-insensitive and
/// ignoring whitespace in the recall. Zero letters to recall scores 0.
pub fn working_score(target: &str, recalled: &str) -> u8 {
    let target: Vec<char> = target.to_lowercase().chars().collect();
    if target.is_empty() {
        return 0;
    }
    let recalled: Vec<char> = recalled
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    let matched = target
        .iter()
        .zip(&recalled)
        .filter(|(a, b)| a == b)
        .count();
    round_percent(matched as f64 / target.len() as f64 * 100.0)
}

// ---------------------------------------------------------------------------
// Results view
// ---------------------------------------------------------------------------

/// Headline for the memory results view.
#[derive(Debug, Clone, Serialize)]
pub struct MemoryProfile {
    pub title: &'static str,
    pub description: &'static str,
}

impl MemoryProfile {
    pub fn for_score(score: &MemoryScore) -> Self {
        if score.overall >= 85 {
            Self {
                title: "Memory Champion",
                description: "You have exceptional memory capabilities across all areas. Your cognitive processing is highly efficient and you excel at both storing and retrieving information.",
            }
        } else if score.overall >= 70 {
            Self {
                title: "Memory Specialist",
                description: "You have strong memory abilities with particular strengths in certain areas. Your cognitive performance is above average and well-developed.",
            }
        } else if score.overall >= 55 {
            Self {
                title: "Memory Developer",
                description: "You have solid foundational memory skills with room for improvement. With targeted practice, you can significantly enhance your cognitive abilities.",
            }
        } else {
            Self {
                title: "Memory Builder",
                description: "You're at the beginning of your memory development journey. There's tremendous potential for growth with the right techniques and consistent practice.",
            }
        }
    }
}

/// Per-sub-score insights and the recommendations that go with them.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MemoryInsights {
    pub insights: Vec<&'static str>,
    pub recommendations: Vec<&'static str>,
}

impl MemoryInsights {
    pub fn for_score(score: &MemoryScore) -> Self {
        let mut out = Self::default();

        if score.short_term >= 80 {
            out.insights.push("Excellent short-term memory - you can hold and manipulate information effectively");
        } else if score.short_term >= 60 {
            out.insights.push("Good short-term memory with room for improvement in information retention");
            out.recommendations.push("Practice digit span exercises daily to improve short-term retention");
        } else {
            out.insights.push("Short-term memory needs development - focus on attention and concentration");
            out.recommendations.push("Use chunking techniques to break information into smaller, manageable pieces");
        }

        if score.long_term >= 80 {
            out.insights.push("Strong long-term memory - you excel at encoding and retrieving stored information");
        } else if score.long_term >= 60 {
            out.insights.push("Moderate long-term memory - you can improve information consolidation");
            out.recommendations.push("Use spaced repetition and elaborative rehearsal for better retention");
        } else {
            out.insights.push("Long-term memory requires attention - focus on encoding strategies");
            out.recommendations.push("Create meaningful associations and use mnemonic devices for better recall");
        }

        if score.working >= 80 {
            out.insights.push("Exceptional working memory - you can juggle multiple tasks efficiently");
        } else if score.working >= 60 {
            out.insights.push("Good working memory with potential for enhanced multitasking abilities");
            out.recommendations.push("Practice dual n-back exercises to improve working memory capacity");
        } else {
            out.insights.push("Working memory needs strengthening for better cognitive flexibility");
            out.recommendations.push("Engage in complex mental tasks that require holding multiple pieces of information");
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn play_short_term(answer_correctly: bool) -> ShortTermTest {
        let mut rng = StdRng::seed_from_u64(7);
        let mut test = ShortTermTest::new();
        while !test.is_finished() {
            let mut seq = test.sequence(&mut rng).unwrap().to_vec();
            if !answer_correctly {
                seq.reverse();
                seq.push(0);
            }
            test.submit(&seq).unwrap();
        }
        test
    }

    #[test]
    fn sequences_grow_each_round() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut test = ShortTermTest::new();
        for round in 1..=SHORT_TERM_ROUNDS {
            let seq = test.sequence(&mut rng).unwrap().to_vec();
            assert_eq!(seq.len(), 3 + round as usize);
            assert!(seq.iter().all(|d| (1..=9).contains(d)));
            test.submit(&seq).unwrap();
        }
        assert!(test.is_finished());
    }

    #[test]
    fn sequence_is_fixed_within_a_round() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut test = ShortTermTest::new();
        let first = test.sequence(&mut rng).unwrap().to_vec();
        let again = test.sequence(&mut rng).unwrap().to_vec();
        assert_eq!(first, again);
    }

    #[test]
    fn perfect_short_term_scores_100() {
        assert_eq!(play_short_term(true).score(), 100);
    }

    #[test]
    fn wrong_short_term_scores_0() {
        assert_eq!(play_short_term(false).score(), 0);
    }

    #[test]
    fn short_term_rejects_input_after_finish_and_before_sequence() {
        let mut test = ShortTermTest::new();
        assert_eq!(
            test.submit(&[1, 2, 3, 4]),
            Err(AssessmentError::OutOfOrder("short-term"))
        );
        let mut done = play_short_term(true);
        assert_eq!(
            done.submit(&[1]),
            Err(AssessmentError::SessionFinished("short-term"))
        );
    }

    #[test]
    fn short_term_partial_credit() {
        assert_eq!(short_term_score(3), 60);
    }

    #[test]
    fn all_words_any_case_scores_100() {
        let mut test = LongTermTest::new();
        for word in WORD_LIST.iter().rev() {
            assert_eq!(test.recall(&word.to_uppercase()).unwrap(), Recall::Accepted);
        }
        assert_eq!(test.finish(), 100);
    }

    #[test]
    fn no_words_scores_0() {
        let mut test = LongTermTest::new();
        assert_eq!(test.finish(), 0);
    }

    #[test]
    fn duplicate_and_unknown_words_do_not_count() {
        let mut test = LongTermTest::new();
        assert_eq!(test.recall("Guitar").unwrap(), Recall::Accepted);
        assert_eq!(test.recall(" guitar ").unwrap(), Recall::Duplicate);
        assert_eq!(test.recall("piano").unwrap(), Recall::NotInList);
        assert_eq!(test.recall("   ").unwrap(), Recall::Empty);
        assert_eq!(test.finish(), 10);
        assert!(test.recall("rainbow").is_err());
    }

    #[test]
    fn long_term_score_uses_set_semantics() {
        assert_eq!(long_term_score(["Elephant", "elephant", "ELEPHANT"]), 10);
    }

    #[test]
    fn perfect_working_memory_scores_100() {
        let mut test = WorkingMemoryTest::new();
        while let Some(problem) = test.current_problem() {
            assert!(test.answer(Some(problem.answer)).unwrap());
        }
        assert!(test.awaiting_recall());
        assert_eq!(test.target(), "RMKLPTNS");
        assert_eq!(test.finish("rmklptns").unwrap(), 100);
    }

    #[test]
    fn working_memory_recalls_only_earned_letters() {
        let mut test = WorkingMemoryTest::new();
        for (i, problem) in PROBLEMS.iter().enumerate() {
            let value = if i % 2 == 0 { Some(problem.answer) } else { None };
            test.answer(value).unwrap();
        }
        assert_eq!(test.target(), "RKPN");
        assert_eq!(test.finish("R K X N").unwrap(), 75);
    }

    #[test]
    fn working_memory_with_nothing_earned_scores_0() {
        let mut test = WorkingMemoryTest::new();
        for _ in PROBLEMS.iter() {
            test.answer(Some(-1)).unwrap();
        }
        assert_eq!(test.finish("").unwrap(), 0);
    }

    #[test]
    fn working_memory_recall_before_answers_is_out_of_order() {
        let mut test = WorkingMemoryTest::new();
        assert_eq!(
            test.finish("r"),
            Err(AssessmentError::OutOfOrder("working-memory"))
        );
    }

    #[test]
    fn working_score_ignores_extra_characters() {
        assert_eq!(working_score("RMK", "rmkzz"), 100);
        assert_eq!(working_score("RMK", "r"), 33);
    }

    #[test]
    fn memory_profile_tiers() {
        assert_eq!(MemoryProfile::for_score(&MemoryScore::from_parts(100, 90, 80)).title, "Memory Champion");
        assert_eq!(MemoryProfile::for_score(&MemoryScore::from_parts(70, 70, 70)).title, "Memory Specialist");
        assert_eq!(MemoryProfile::for_score(&MemoryScore::from_parts(60, 50, 60)).title, "Memory Developer");
        assert_eq!(MemoryProfile::for_score(&MemoryScore::from_parts(0, 0, 0)).title, "Memory Builder");
    }

    #[test]
    fn insights_recommend_only_below_80() {
        let strong = MemoryInsights::for_score(&MemoryScore::from_parts(100, 80, 90));
        assert_eq!(strong.insights.len(), 3);
        assert!(strong.recommendations.is_empty());

        let weak = MemoryInsights::for_score(&MemoryScore::from_parts(20, 60, 40));
        assert_eq!(weak.recommendations.len(), 3);
    }
}
