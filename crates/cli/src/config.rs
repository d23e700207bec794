//! CLI configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use planner_core::Preset;

/// Configuration required to run the planner CLI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliConfig {
    pub data_dir: PathBuf,
    pub subject: Option<String>,
    /// Overrides the data directory's configured default preset.
    pub preset: Option<Preset>,
    pub log_dir: Option<PathBuf>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(Self::DEFAULT_DATA_DIR),
            subject: None,
            preset: None,
            log_dir: None,
        }
    }
}

impl CliConfig {
    pub const DEFAULT_DATA_DIR: &'static str = "data";

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `PLANNER_DATA_DIR` - Data directory (default: `data`)
    /// - `PLANNER_SUBJECT` - Subject to plan for (default: none, lists subjects)
    /// - `PLANNER_PRESET` - `none`, `recommended` or `maximum` (default: from `config.toml`)
    /// - `PLANNER_LOG_DIR` - Also write logs to `planner.log` in this directory
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("PLANNER_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }

        config.subject = env::var("PLANNER_SUBJECT").ok().filter(|s| !s.is_empty());
        config.preset = read_env::<Preset>("PLANNER_PRESET");
        config.log_dir = env::var("PLANNER_LOG_DIR").ok().map(PathBuf::from);

        config
    }

    /// Applies command-line arguments: `[SUBJECT] [PRESET]`.
    pub fn with_args<I>(mut self, args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();

        if let Some(subject) = args.next() {
            self.subject = Some(subject);
        }
        if let Some(preset) = args.next() {
            let preset = preset.parse::<Preset>().map_err(|_| {
                anyhow::anyhow!(
                    "Unknown preset '{}' (expected none, recommended or maximum)",
                    preset
                )
            })?;
            self.preset = Some(preset);
        }
        if let Some(extra) = args.next() {
            anyhow::bail!("Unexpected argument '{}'", extra);
        }

        Ok(self)
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
