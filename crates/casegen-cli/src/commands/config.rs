//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::Path;

/// Execute config management commands.
pub fn execute_config(
    args: ConfigArgs,
    config: &Config,
    path: &Path,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        ConfigAction::Show => {
            print!("{}", config.to_toml()?);
        }
        ConfigAction::Path => {
            println!("{}", path.display());
        }
        ConfigAction::Init { force } => {
            if path.exists() && !force {
                return Err(CliError::InvalidInput(format!(
                    "{} already exists. Use --force to overwrite",
                    path.display()
                )));
            }
            Config::default().save_to(path)?;
            println!(
                "{}",
                formatter.success(&format!("Wrote default configuration to {}", path.display()))
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use std::fs;

    fn init(force: bool) -> ConfigArgs {
        ConfigArgs {
            action: ConfigAction::Init { force },
        }
    }

    #[test]
    fn test_init_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".casegen").join("config.toml");
        let formatter = Formatter::new(OutputFormat::Table, false);

        execute_config(init(false), &Config::default(), &path, &formatter).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.tracker.project_key, "SCRUM");
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[tracker]\nproject_key = \"QA\"\n").unwrap();
        let formatter = Formatter::new(OutputFormat::Table, false);

        let result = execute_config(init(false), &Config::default(), &path, &formatter);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
        assert_eq!(Config::load_from(&path).unwrap().tracker.project_key, "QA");

        execute_config(init(true), &Config::default(), &path, &formatter).unwrap();
        assert_eq!(Config::load_from(&path).unwrap().tracker.project_key, "SCRUM");
    }
}
