//! The `growthpath init` command.

use anyhow::Result;

use growthpath_store::config::SAMPLE_CONFIG;

pub fn execute() -> Result<()> {
    if std::path::Path::new("growthpath.toml").exists() {
        println!("growthpath.toml already exists, skipping.");
    } else {
        std::fs::write("growthpath.toml", SAMPLE_CONFIG)?;
        println!("Created growthpath.toml");
    }

    println!("\nNext steps:");
    println!("  1. Run: growthpath personality");
    println!("  2. Run: growthpath memory");
    println!("  3. Run: growthpath speech");
    println!("  4. Run: growthpath report");

    Ok(())
}
