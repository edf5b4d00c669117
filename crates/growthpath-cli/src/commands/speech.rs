//! The `growthpath speech` command.

use std::future::Future;
use std::io::{self, Write};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use rand::Rng;
use tokio::sync::oneshot;

use growthpath_core::speech::{analyze_recording, format_duration, MAX_RECORDING_SECONDS, TOPICS};

use super::{GlobalOpts, Prompt, Session};

pub async fn execute(
    opts: &GlobalOpts,
    topic: Option<usize>,
    duration: Option<u32>,
    seed: Option<u64>,
) -> Result<()> {
    let mut session = Session::open(opts)?;
    let mut rng = session.rng(seed);

    let index = match topic {
        Some(0) => anyhow::bail!("topics are numbered from 1 to {}", TOPICS.len()),
        Some(n) => n - 1,
        None => rng.gen_range(0..TOPICS.len()),
    };
    let topic_text = TOPICS
        .get(index)
        .with_context(|| format!("topic {} does not exist (1-{})", index + 1, TOPICS.len()))?;

    println!("Topic {}: {}\n", index + 1, topic_text);

    let seconds = match duration {
        Some(seconds) => seconds,
        None => record(session.config.timing.countdown_seconds).await?,
    };

    let score = analyze_recording(&mut rng, index, seconds)?;
    session
        .store
        .save_speech(&score)
        .context("failed to save speech results")?;
    tracing::info!(
        topic = index + 1,
        duration = score.duration,
        overall = score.overall,
        "saved speech results"
    );

    println!(
        "Analyzed {} of speech.\n",
        format_duration(score.duration)
    );
    super::results::print_speech(&score);
    Ok(())
}

/// Count down, then time the user until they press Enter or the recording
/// limit passes.
async fn record(countdown_seconds: u64) -> Result<u32> {
    let mut prompt = Prompt::stdin();
    prompt.require("Press Enter when you are ready to start recording.")?;
    // Release the stdin lock for the reader thread.
    drop(prompt);

    for n in (1..=countdown_seconds).rev() {
        print!("\r{n}...");
        io::stdout().flush()?;
        tokio::time::sleep(Duration::from_secs(1)).await;
    }
    println!(
        "\rRecording. Speak for up to {MAX_RECORDING_SECONDS} seconds, then press Enter to stop."
    );

    let limit = Duration::from_secs(MAX_RECORDING_SECONDS.into());
    match time_until(enter_pressed(), limit).await? {
        Some(elapsed) => {
            let seconds = u32::try_from(elapsed.as_secs()).unwrap_or(u32::MAX);
            Ok(seconds.min(MAX_RECORDING_SECONDS))
        }
        None => {
            println!("Recording stopped automatically at {MAX_RECORDING_SECONDS} seconds.");
            Ok(MAX_RECORDING_SECONDS)
        }
    }
}

/// Resolves once a line (or end of input) arrives on stdin. The read runs on
/// a detached thread since a blocking stdin read cannot be cancelled.
fn enter_pressed() -> impl Future<Output = Result<()>> {
    let (tx, rx) = oneshot::channel();
    std::thread::spawn(move || {
        let mut line = String::new();
        let _ = tx.send(io::stdin().read_line(&mut line));
    });
    async move {
        match rx.await.context("stdin reader stopped")? {
            Ok(0) => anyhow::bail!("input ended before the recording was finished"),
            Ok(_) => Ok(()),
            Err(e) => Err(e).context("failed to read from stdin"),
        }
    }
}

/// Elapsed time until `stop` resolves, or `None` once `limit` passes first.
async fn time_until<F>(stop: F, limit: Duration) -> Result<Option<Duration>>
where
    F: Future<Output = Result<()>>,
{
    let started = Instant::now();
    match tokio::time::timeout(limit, stop).await {
        Ok(stopped) => {
            stopped?;
            Ok(Some(started.elapsed()))
        }
        Err(_) => {
            tracing::debug!(?limit, "recording limit reached");
            Ok(None)
        }
    }
}
