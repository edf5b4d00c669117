pub mod init;
pub mod memory;
pub mod personality;
pub mod plan;
pub mod report;
pub mod reset;
pub mod results;
pub mod speech;
pub mod status;

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use growthpath_core::model::Domain;
use growthpath_core::storage::AssessmentStore;
use growthpath_store::{load_config_from, GrowthpathConfig, JsonFileStore};

/// Flags shared by every subcommand.
pub struct GlobalOpts {
    pub store: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

/// Loaded config plus the opened store.
pub struct Session {
    pub config: GrowthpathConfig,
    pub store: AssessmentStore<JsonFileStore>,
}

impl Session {
    pub fn open(opts: &GlobalOpts) -> Result<Self> {
        let mut config = load_config_from(opts.config.as_deref())?;
        if let Some(store) = &opts.store {
            config.store_path = store.clone();
        }
        let file = JsonFileStore::open(&config.store_path)
            .with_context(|| format!("failed to open store {}", config.store_path.display()))?;
        Ok(Self {
            config,
            store: AssessmentStore::new(file),
        })
    }

    /// A generator seeded from `explicit`, else the configured seed, else entropy.
    pub fn rng(&self, explicit: Option<u64>) -> StdRng {
        match explicit.or(self.config.seed) {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// The command that produces a domain's results.
pub fn take_hint(domain: Domain) -> String {
    format!("run `growthpath {}`", domain.assessment())
}

/// Line-oriented prompting over any reader.
pub struct Prompt<R> {
    input: R,
}

impl Prompt<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self {
            input: io::stdin().lock(),
        }
    }
}

impl<R: BufRead> Prompt<R> {
    /// Print `question` and read one line. `None` at end of input.
    pub fn ask(&mut self, question: &str) -> Result<Option<String>> {
        print!("{question}");
        io::stdout().flush()?;
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read from stdin")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Like [`Prompt::ask`], but end of input is an error.
    pub fn require(&mut self, question: &str) -> Result<String> {
        self.ask(question)?
            .context("input ended before the assessment was finished")
    }
}

/// Print `content`, or write it to `out` when given.
pub fn emit(content: &str, out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, content)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("Written to {}", path.display());
        }
        None => println!("{content}"),
    }
    Ok(())
}
