use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

pub const DEFAULT_DB_PATH: &str = "DBSNP.GZ";
pub const DEFAULT_RS_PATH: &str = "RSLIST.TXT";

/// How candidate annotations for one identifier are folded together.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReductionMode {
    /// Keep only the genes tied for the best region class.
    #[default]
    Rule,
    /// Keep every gene name seen, last row wins.
    NoRule,
}

impl ReductionMode {
    #[must_use]
    pub fn from_no_rule(no_rule: bool) -> Self {
        if no_rule { Self::NoRule } else { Self::Rule }
    }
}

/// Optional JSON settings file. Every key may be omitted.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ConfigFile {
    pub db: Option<PathBuf>,
    pub rs: Option<PathBuf>,
    pub no_rule: Option<bool>,
}

impl ConfigFile {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;
        Ok(config)
    }
}

/// Settings for a single run, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub db_path: PathBuf,
    pub rs_path: PathBuf,
    pub mode: ReductionMode,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            rs_path: PathBuf::from(DEFAULT_RS_PATH),
            mode: ReductionMode::Rule,
        }
    }
}

impl RunConfig {
    /// Merge command-line values over an optional config file over the defaults.
    ///
    /// `no_rule` is a plain switch, so it can only turn no-rule mode on.
    #[must_use]
    pub fn resolve(
        db: Option<PathBuf>,
        rs: Option<PathBuf>,
        no_rule: bool,
        file: Option<ConfigFile>,
    ) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();
        Self {
            db_path: db.or(file.db).unwrap_or(defaults.db_path),
            rs_path: rs.or(file.rs).unwrap_or(defaults.rs_path),
            mode: ReductionMode::from_no_rule(no_rule || file.no_rule.unwrap_or(false)),
        }
    }

    /// Check that both inputs exist before any work is done.
    ///
    /// Anything that can be opened for reading is accepted, including FIFOs
    /// and `/dev/stdin`. Directories are rejected.
    pub fn validate(&self) -> Result<()> {
        for (name, path) in self.input_paths() {
            if !path.exists() {
                bail!("{name} file not found: {}", path.display());
            }
            if path.is_dir() {
                bail!("{name} path is a directory: {}", path.display());
            }
        }
        Ok(())
    }

    pub fn input_paths(&self) -> impl Iterator<Item = (&str, &Path)> {
        [
            ("dbSNP", self.db_path.as_path()),
            ("rs list", self.rs_path.as_path()),
        ]
        .into_iter()
    }
}
