use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::format::OutputFormat;
use crate::{Error, Result};

pub const DEFAULT_DATABASE: &str = "company.db";
pub const QUIET_ENV: &str = "DESKQUERY_QUIET";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DeskqueryConfig {
    pub database: Option<String>,
    pub format: Option<OutputFormat>,
    /// Skip the chat banner and example list
    pub quiet: Option<bool>,
}

impl DeskqueryConfig {
    /// The file written by `init`
    pub fn starter() -> Self {
        Self {
            database: Some(DEFAULT_DATABASE.to_string()),
            format: Some(OutputFormat::Text),
            quiet: None,
        }
    }

    /// CLI value wins, then the config file, then the default
    pub fn database_path(&self, cli: Option<&Path>) -> PathBuf {
        cli.map(Path::to_path_buf)
            .or_else(|| self.database.as_ref().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE))
    }

    pub fn output_format(&self, cli: Option<OutputFormat>) -> OutputFormat {
        cli.or(self.format).unwrap_or_default()
    }

    /// `DESKQUERY_QUIET` wins over the config file
    pub fn is_quiet(&self) -> bool {
        self.quiet_with(std::env::var(QUIET_ENV).ok().as_deref())
    }

    fn quiet_with(&self, env: Option<&str>) -> bool {
        env.map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .or(self.quiet)
            .unwrap_or(false)
    }
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("deskquery.toml")
}

pub fn load_config(path: Option<&Path>) -> Result<Option<DeskqueryConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: DeskqueryConfig = toml::from_str(&contents)
        .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(Some(config))
}

pub fn write_config(path: &Path, config: &DeskqueryConfig, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(Error::Config(format!(
            "config already exists at {} (use --force to overwrite)",
            path.display()
        )));
    }

    let contents = toml::to_string_pretty(config).map_err(|e| Error::Config(e.to_string()))?;
    std::fs::write(path, contents)?;
    Ok(())
}

pub fn ensure_db_dir(db_path: &Path) -> Result<()> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deskquery.toml");

        write_config(&path, &DeskqueryConfig::starter(), false).unwrap();
        let loaded = load_config(Some(&path)).unwrap().unwrap();
        assert_eq!(loaded, DeskqueryConfig::starter());

        assert!(write_config(&path, &DeskqueryConfig::starter(), false).is_err());
        assert!(write_config(&path, &DeskqueryConfig::starter(), true).is_ok());
    }

    #[test]
    fn test_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(Some(&dir.path().join("nope.toml"))).unwrap().is_none());
    }

    #[test]
    fn test_precedence() {
        let config: DeskqueryConfig = toml::from_str("database = \"hr.db\"\nformat = \"table\"\n").unwrap();

        assert_eq!(config.database_path(None), PathBuf::from("hr.db"));
        assert_eq!(config.database_path(Some(Path::new("x.db"))), PathBuf::from("x.db"));
        assert_eq!(config.output_format(None), OutputFormat::Table);
        assert_eq!(config.output_format(Some(OutputFormat::Json)), OutputFormat::Json);
        assert_eq!(DeskqueryConfig::default().database_path(None), PathBuf::from(DEFAULT_DATABASE));
    }

    #[test]
    fn test_quiet_flag() {
        let config: DeskqueryConfig = toml::from_str("quiet = true\n").unwrap();
        assert!(config.quiet_with(None));
        assert!(!config.quiet_with(Some("0")));
        assert!(DeskqueryConfig::default().quiet_with(Some("TRUE")));
        assert!(!DeskqueryConfig::default().quiet_with(None));
    }

    #[test]
    fn test_ensure_db_dir() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("nested").join("company.db");
        ensure_db_dir(&db).unwrap();
        assert!(db.parent().unwrap().is_dir());
    }
}
