//! The `growthpath reset` command.

use anyhow::{Context, Result};

use super::{GlobalOpts, Session};

pub fn execute(opts: &GlobalOpts) -> Result<()> {
    let mut session = Session::open(opts)?;
    session.store.reset().context("failed to clear the store")?;
    tracing::info!(path = %session.config.store_path.display(), "cleared store");
    println!(
        "Cleared all results, plans and progress from {}",
        session.config.store_path.display()
    );
    Ok(())
}
