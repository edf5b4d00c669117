//! The `growthpath personality` command.

use std::io::BufRead;

use anyhow::{Context, Result};

use growthpath_core::personality::{score_answers, QUESTIONS, SCALE_LABELS};

use super::{GlobalOpts, Prompt, Session};

pub fn execute(opts: &GlobalOpts, answers: Option<String>) -> Result<()> {
    let mut session = Session::open(opts)?;

    let answers = match answers {
        Some(list) => parse_answers(&list)?,
        None => ask_questions(&mut Prompt::stdin())?,
    };

    let scores = score_answers(&answers)?;
    session
        .store
        .save_personality(&scores)
        .context("failed to save personality results")?;
    tracing::info!(dominant = %scores.dominant(), "saved personality results");

    println!("\nPersonality assessment complete.\n");
    super::results::print_personality(&scores);
    Ok(())
}

/// Parse `"4,2,-,5,..."`. A `-` or empty entry leaves the question unanswered.
fn parse_answers(list: &str) -> Result<Vec<Option<u8>>> {
    list.split(',')
        .map(str::trim)
        .enumerate()
        .map(|(i, entry)| match entry {
            "" | "-" => Ok(None),
            value => value
                .parse::<u8>()
                .map(Some)
                .with_context(|| format!("answer {} is not a number: {value}", i + 1)),
        })
        .collect()
}

fn ask_questions<R: BufRead>(prompt: &mut Prompt<R>) -> Result<Vec<Option<u8>>> {
    println!("Rate how well each statement describes you:");
    for (i, label) in SCALE_LABELS.iter().enumerate() {
        println!("  {} = {}", i + 1, label);
    }
    println!("Leave a line blank to skip a question.\n");

    let mut answers = Vec::with_capacity(QUESTIONS.len());
    for (i, question) in QUESTIONS.iter().enumerate() {
        loop {
            let line = prompt.require(&format!(
                "({}/{}) {}: ",
                i + 1,
                QUESTIONS.len(),
                question.text
            ))?;
            if line.is_empty() {
                answers.push(None);
                break;
            }
            match line.parse::<u8>() {
                Ok(value) if (1..=5).contains(&value) => {
                    answers.push(Some(value));
                    break;
                }
                _ => println!("Please answer with a number from 1 to 5."),
            }
        }
    }
    Ok(answers)
}
