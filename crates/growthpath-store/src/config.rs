//! growthpath configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Timers used by the interactive assessments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingConfig {
    /// How long each digit of a short-term sequence is shown.
    #[serde(default = "default_digit_interval")]
    pub digit_interval_ms: u64,
    /// Length of the word-list study countdown.
    #[serde(default = "default_study_seconds")]
    pub study_seconds: u64,
    /// Countdown before a speech recording starts.
    #[serde(default = "default_countdown_seconds")]
    pub countdown_seconds: u64,
}

fn default_digit_interval() -> u64 {
    growthpath_core::memory::DIGIT_INTERVAL_MS
}
fn default_study_seconds() -> u64 {
    growthpath_core::memory::STUDY_SECONDS
}
fn default_countdown_seconds() -> u64 {
    u64::from(growthpath_core::speech::COUNTDOWN_SECONDS)
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            digit_interval_ms: default_digit_interval(),
            study_seconds: default_study_seconds(),
            countdown_seconds: default_countdown_seconds(),
        }
    }
}

impl TimingConfig {
    /// No waiting at all.
    pub fn instant() -> Self {
        Self {
            digit_interval_ms: 0,
            study_seconds: 0,
            countdown_seconds: 0,
        }
    }
}

/// Top-level growthpath configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthpathConfig {
    /// JSON file holding results and plans.
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,
    /// Plan length used when `plan create` is given no duration.
    #[serde(default = "default_plan_duration")]
    pub default_plan_duration: u32,
    /// Fixed seed for every random generator. Unset means a fresh seed per run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(default)]
    pub timing: TimingConfig,
}

fn default_store_path() -> PathBuf {
    PathBuf::from("./growthpath-data.json")
}
fn default_plan_duration() -> u32 {
    90
}

impl Default for GrowthpathConfig {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            default_plan_duration: default_plan_duration(),
            seed: None,
            timing: TimingConfig::default(),
        }
    }
}

/// Starter file written by `growthpath init`.
pub const SAMPLE_CONFIG: &str = r#"# growthpath configuration

# Where assessment results and plans are stored.
store_path = "./growthpath-data.json"

# Plan length in days when none is given: 45, 90 or 180.
default_plan_duration = 90

# Uncomment to make digit sequences, speech metrics and plans reproducible.
# seed = 42

[timing]
digit_interval_ms = 1000
study_seconds = 30
countdown_seconds = 3
"#;

/// Expand `${VAR}` references using `lookup`. Unknown variables expand to "".
/// Substituted values are copied as-is and never expanded again.
fn resolve_env_vars(s: &str, lookup: &impl Fn(&str) -> Option<String>) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(end) = rest[start..].find('}') else {
            break;
        };
        result.push_str(&rest[..start]);
        let var_name = &rest[start + 2..start + end];
        result.push_str(&lookup(var_name).unwrap_or_default());
        rest = &rest[start + end + 1..];
    }
    result.push_str(rest);
    result
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without a path:
/// 1. `growthpath.toml` in the current directory
/// 2. `~/.config/growthpath/config.toml`
///
/// Environment variable overrides: `GROWTHPATH_STORE`, `GROWTHPATH_SEED`,
/// `GROWTHPATH_FAST`.
pub fn load_config_from(path: Option<&Path>) -> Result<GrowthpathConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("growthpath.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|dir| dir.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = parse_config(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!(path = %path.display(), "loaded config");
            config
        }
        None => GrowthpathConfig::default(),
    };

    apply_env_overrides(config, |name| std::env::var(name).ok())
}

pub fn parse_config(content: &str) -> Result<GrowthpathConfig> {
    let config: GrowthpathConfig = toml::from_str(content)?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &GrowthpathConfig) -> Result<()> {
    if !matches!(config.default_plan_duration, 45 | 90 | 180) {
        anyhow::bail!(
            "default_plan_duration must be 45, 90 or 180 (got {})",
            config.default_plan_duration
        );
    }
    Ok(())
}

/// Apply `GROWTHPATH_*` overrides and expand `${VAR}` in the store path.
pub fn apply_env_overrides(
    mut config: GrowthpathConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<GrowthpathConfig> {
    if let Some(store) = lookup("GROWTHPATH_STORE") {
        config.store_path = PathBuf::from(store);
    }

    if let Some(seed) = lookup("GROWTHPATH_SEED") {
        let seed = seed
            .trim()
            .parse::<u64>()
            .with_context(|| format!("GROWTHPATH_SEED is not a number: {seed}"))?;
        config.seed = Some(seed);
    }

    if lookup("GROWTHPATH_FAST").is_some_and(|v| v == "1" || v.eq_ignore_ascii_case("true")) {
        config.timing = TimingConfig::instant();
    }

    let raw = config.store_path.to_string_lossy().into_owned();
    config.store_path = PathBuf::from(resolve_env_vars(&raw, &lookup));

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("growthpath"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn default_config() {
        let config = GrowthpathConfig::default();
        assert_eq!(config.store_path, PathBuf::from("./growthpath-data.json"));
        assert_eq!(config.default_plan_duration, 90);
        assert_eq!(config.timing.digit_interval_ms, 1000);
        assert_eq!(config.timing.study_seconds, 30);
        assert_eq!(config.timing.countdown_seconds, 3);
        assert!(config.seed.is_none());
    }

    #[test]
    fn sample_config_parses_to_defaults() {
        let config = parse_config(SAMPLE_CONFIG).unwrap();
        assert_eq!(config, GrowthpathConfig::default());
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config = parse_config("seed = 7\n[timing]\nstudy_seconds = 5\n").unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.timing.study_seconds, 5);
        assert_eq!(config.timing.digit_interval_ms, 1000);
    }

    #[test]
    fn rejects_unsupported_plan_duration() {
        let err = parse_config("default_plan_duration = 60").unwrap_err();
        assert!(err.to_string().contains("45, 90 or 180"));
    }

    #[test]
    fn env_overrides() {
        let config = apply_env_overrides(
            GrowthpathConfig::default(),
            env(&[
                ("GROWTHPATH_STORE", "/tmp/gp.json"),
                ("GROWTHPATH_SEED", "99"),
                ("GROWTHPATH_FAST", "1"),
            ]),
        )
        .unwrap();
        assert_eq!(config.store_path, PathBuf::from("/tmp/gp.json"));
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.timing, TimingConfig::instant());
    }

    #[test]
    fn bad_seed_is_an_error() {
        let result = apply_env_overrides(
            GrowthpathConfig::default(),
            env(&[("GROWTHPATH_SEED", "abc")]),
        );
        assert!(result.is_err());
    }

    #[test]
    fn store_path_expands_env_vars() {
        let config = GrowthpathConfig {
            store_path: PathBuf::from("${DATA}/growthpath.json"),
            ..Default::default()
        };
        let config = apply_env_overrides(config, env(&[("DATA", "/srv")])).unwrap();
        assert_eq!(config.store_path, PathBuf::from("/srv/growthpath.json"));
    }

    #[test]
    fn self_referencing_env_var_is_expanded_once() {
        let config = GrowthpathConfig {
            store_path: PathBuf::from("${A}/x-${B}.json"),
            ..Default::default()
        };
        let config =
            apply_env_overrides(config, env(&[("A", "${A}"), ("B", "${B")])).unwrap();
        assert_eq!(config.store_path, PathBuf::from("${A}/x-${B.json"));
    }

    #[test]
    fn unknown_and_unterminated_vars() {
        let lookup = env(&[("HOME", "/home/me")]);
        assert_eq!(resolve_env_vars("${NOPE}/a", &lookup), "/a");
        assert_eq!(resolve_env_vars("${HOME}/${HOME", &lookup), "/home/me/${HOME");
        assert_eq!(resolve_env_vars("plain", &lookup), "plain");
    }

    #[test]
    fn load_from_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "default_plan_duration = 45\n").unwrap();
        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.default_plan_duration, 45);

        let missing = dir.path().join("nope.toml");
        let err = load_config_from(Some(&missing)).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }
}
