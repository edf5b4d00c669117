//! The `growthpath memory` command: three mini-games played on the terminal.

use std::io::{self, BufRead, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use rand::Rng;

use growthpath_core::memory::{
    LongTermTest, Recall, ShortTermTest, WorkingMemoryTest, SHORT_TERM_ROUNDS, WORD_LIST,
};
use growthpath_core::model::MemoryScore;
use growthpath_store::TimingConfig;

use super::{GlobalOpts, Prompt, Session};

pub async fn execute(opts: &GlobalOpts) -> Result<()> {
    let mut session = Session::open(opts)?;
    let mut rng = session.rng(None);
    let timing = session.config.timing;

    let score = play(&mut Prompt::stdin(), &mut rng, timing).await?;
    session
        .store
        .save_memory(&score)
        .context("failed to save memory results")?;
    tracing::info!(overall = score.overall, "saved memory results");

    println!("\nMemory assessment complete.\n");
    super::results::print_memory(&score);
    Ok(())
}

async fn play<R: BufRead, G: Rng>(
    prompt: &mut Prompt<R>,
    rng: &mut G,
    timing: TimingConfig,
) -> Result<MemoryScore> {
    let short_term = short_term(prompt, rng, timing).await?;
    let long_term = long_term(prompt, timing).await?;
    let working = working(prompt)?;
    Ok(MemoryScore::from_parts(short_term, long_term, working))
}

async fn short_term<R: BufRead, G: Rng>(
    prompt: &mut Prompt<R>,
    rng: &mut G,
    timing: TimingConfig,
) -> Result<u8> {
    println!("== Short-term memory ==");
    println!("Watch the digits, then type them back in order.\n");

    let mut test = ShortTermTest::new();
    while !test.is_finished() {
        let round = test.round();
        let sequence = test.sequence(rng)?.to_vec();
        println!("Round {round}/{SHORT_TERM_ROUNDS}: {} digits", sequence.len());
        show_digits(&sequence, timing.digit_interval_ms).await?;

        let line = prompt.require("Your sequence: ")?;
        let outcome = test.submit(&parse_digits(&line))?;
        if outcome.correct {
            println!("Correct!\n");
        } else {
            let expected: String = outcome.expected.iter().map(|d| d.to_string()).collect();
            println!("Not quite. The sequence was {expected}\n");
        }
    }

    println!(
        "Short-term: {}/{} rounds, score {}%\n",
        test.correct_rounds(),
        SHORT_TERM_ROUNDS,
        test.score()
    );
    Ok(test.score())
}

/// Flash each digit in place, then clear the line.
async fn show_digits(sequence: &[u8], interval_ms: u64) -> Result<()> {
    let mut out = io::stdout();
    for digit in sequence {
        write!(out, "\r  {digit}  ")?;
        out.flush()?;
        tokio::time::sleep(Duration::from_millis(interval_ms)).await;
    }
    write!(out, "\r       \r")?;
    out.flush()?;
    Ok(())
}

/// Digits typed by the user, ignoring spaces. Anything that is not a digit
/// becomes 0, which never appears in a sequence.
fn parse_digits(line: &str) -> Vec<u8> {
    line.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_digit(10).map(|d| d as u8).unwrap_or(0))
        .collect()
}

async fn long_term<R: BufRead>(prompt: &mut Prompt<R>, timing: TimingConfig) -> Result<u8> {
    println!("== Long-term memory ==");
    println!("Study these words:\n");
    for chunk in WORD_LIST.chunks(5) {
        println!("  {}", chunk.join("  "));
    }
    println!();

    for remaining in (1..=timing.study_seconds).rev() {
        print!("\r{remaining:>3}s remaining ");
        io::stdout().flush()?;
        tokio::time::sleep(Duration::from_secs(1)).await;
    }
    // Push the word list off screen before recall.
    print!("\r{}", "\n".repeat(40));

    println!("Type the words you remember, one per line or comma-separated.");
    println!("Enter a blank line when you are done.");

    let mut test = LongTermTest::new();
    while let Some(line) = prompt.ask("> ")? {
        if line.is_empty() {
            break;
        }
        for word in line.split(',') {
            match test.recall(word)? {
                Recall::Accepted | Recall::Empty => {}
                Recall::Duplicate => println!("  already counted: {}", word.trim()),
                Recall::NotInList => println!("  not on the list: {}", word.trim()),
            }
        }
    }

    let score = test.finish();
    println!(
        "Long-term: {}/{} words, score {}%\n",
        test.recalled().len(),
        WORD_LIST.len(),
        score
    );
    Ok(score)
}

fn working<R: BufRead>(prompt: &mut Prompt<R>) -> Result<u8> {
    println!("== Working memory ==");
    println!("Solve each problem and remember its letter.\n");

    let mut test = WorkingMemoryTest::new();
    while let Some(problem) = test.current_problem() {
        let line = prompt.require(&format!(
            "{}   Letter: {}\nAnswer: ",
            problem.equation, problem.letter
        ))?;
        let correct = test.answer(line.parse::<i64>().ok())?;
        println!("{}", if correct { "Correct." } else { "Incorrect." });
    }

    // Hide the letters before recall.
    print!("{}", "\n".repeat(40));
    println!(
        "You solved {} problems correctly.",
        test.correct_answers()
    );
    let recalled = prompt.require("Enter the letters in the order they appeared: ")?;
    let score = test.finish(&recalled)?;
    println!("Working memory: score {score}%");
    Ok(score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn digits_ignore_spaces() {
        assert_eq!(parse_digits("1 2 34"), vec![1, 2, 3, 4]);
        assert_eq!(parse_digits("1a"), vec![1, 0]);
    }

    #[tokio::test]
    async fn scripted_session_scores_each_game() {
        let mut script = String::new();
        // Five wrong short-term rounds.
        script.push_str(&"0\n".repeat(5));
        // All ten words, mixed case, with a duplicate and a stray word.
        script.push_str("ELEPHANT, guitar, rainbow\ntelescope\nbutterfly, mountain\nkeyboard, sandwich, umbrella, bicycle, guitar, pizza\n\n");
        // Every problem right, then the letters.
        script.push_str("12\n7\n12\n9\n15\n13\n12\n4\nR M K L P T N S\n");

        let mut prompt = Prompt {
            input: script.as_bytes(),
        };
        let mut rng = StdRng::seed_from_u64(1);
        let score = play(&mut prompt, &mut rng, TimingConfig::instant())
            .await
            .unwrap();

        assert_eq!(score.short_term, 0);
        assert_eq!(score.long_term, 100);
        assert_eq!(score.working, 100);
        assert_eq!(score.overall, 67);
    }
}
