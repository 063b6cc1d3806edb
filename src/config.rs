use anyhow::{Context, Result};
use std::fmt;
use std::path::PathBuf;

use crate::import::BudgetImporter;
use crate::models::BudgetTable;

pub(crate) const BUDGET_ENV: &str = "SPENDTUI_BUDGET";
const BUDGET_FILE_NAME: &str = "budget.csv";

/// Where the session's budget table comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum BudgetSource {
    File(PathBuf),
    Default,
}

impl BudgetSource {
    /// `--budget` flag, then `SPENDTUI_BUDGET`, then `budget.csv` in the
    /// config directory, then the built-in table.
    pub(crate) fn resolve(flag: Option<&str>) -> Self {
        let env = std::env::var(BUDGET_ENV).ok();
        let config_file = config_budget_path().filter(|p| p.is_file());
        Self::resolve_from(flag, env.as_deref(), config_file)
    }

    pub(crate) fn resolve_from(
        flag: Option<&str>,
        env: Option<&str>,
        config_file: Option<PathBuf>,
    ) -> Self {
        if let Some(path) = flag.or(env).filter(|p| !p.trim().is_empty()) {
            return Self::File(PathBuf::from(shellexpand(path)));
        }
        match config_file {
            Some(path) => Self::File(path),
            None => Self::Default,
        }
    }

    pub(crate) fn load(&self) -> Result<BudgetTable> {
        match self {
            Self::File(path) => BudgetImporter::load(path)
                .with_context(|| format!("Failed to load budget table from {}", path.display())),
            Self::Default => Ok(BudgetTable::default()),
        }
    }
}

impl fmt::Display for BudgetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Default => write!(f, "built-in defaults"),
        }
    }
}

fn config_budget_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "spendtui", "SpendTUI")
        .map(|dirs| dirs.config_dir().join(BUDGET_FILE_NAME))
}

/// Default location for an export when no path is given,
/// e.g. `~/spendtui-summary-2024-05-01.csv`.
pub(crate) fn default_export_path(kind: &str) -> PathBuf {
    let home = directories::UserDirs::new()
        .map(|d| d.home_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));
    let today = chrono::Local::now().format("%Y-%m-%d");
    home.join(format!("spendtui-{kind}-{today}.csv"))
}

pub(crate) fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        format!("{home}/{rest}")
    } else {
        path.to_string()
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
