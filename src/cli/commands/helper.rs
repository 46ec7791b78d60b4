use std::path::PathBuf;

use anyhow::{Result, bail};

use super::super::args::CommonArgs;
use crate::config::Config;

/// Audit inputs after applying CLI overrides on top of the config file.
pub struct AuditPaths {
    pub languages_root: PathBuf,
    pub defaults_file: PathBuf,
    pub reference_locale: String,
}

pub fn resolve_audit_paths(config: &Config, common: &CommonArgs) -> AuditPaths {
    AuditPaths {
        languages_root: common
            .languages_root
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.languages_root)),
        defaults_file: common
            .defaults_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.defaults_file)),
        reference_locale: common
            .reference_locale
            .clone()
            .unwrap_or_else(|| config.reference_locale.clone()),
    }
}

/// The deployment destination has no built-in default; it must come from the
/// CLI flag (or its environment variable) or the config file.
pub fn resolve_destination(config: &Config, flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(destination) = flag {
        return Ok(destination);
    }
    if let Some(destination) = &config.destination {
        return Ok(PathBuf::from(destination));
    }

    bail!(
        "No deployment destination configured.\n\
         Hint: set 'destination' in {}, pass --destination, or set DESTINATION_PATH.",
        crate::config::CONFIG_FILE_NAME
    )
}

#[cfg(test)]
mod tests {
    use crate::cli::commands::helper::*;

    #[test]
    fn test_cli_overrides_win_over_config() {
        let config = Config {
            languages_root: "./config-languages".to_string(),
            reference_locale: "en".to_string(),
            ..Default::default()
        };
        let common = CommonArgs {
            reference_locale: Some("de".to_string()),
            languages_root: Some(PathBuf::from("./cli-languages")),
            defaults_file: None,
        };

        let paths = resolve_audit_paths(&config, &common);
        assert_eq!(paths.reference_locale, "de");
        assert_eq!(paths.languages_root, PathBuf::from("./cli-languages"));
        assert_eq!(
            paths.defaults_file,
            PathBuf::from(&config.defaults_file)
        );
    }

    #[test]
    fn test_destination_from_flag() {
        let config = Config::default();
        let destination =
            resolve_destination(&config, Some(PathBuf::from("/srv/www"))).unwrap();
        assert_eq!(destination, PathBuf::from("/srv/www"));
    }

    #[test]
    fn test_destination_from_config() {
        let config = Config {
            destination: Some("/srv/www".to_string()),
            ..Default::default()
        };
        let destination = resolve_destination(&config, None).unwrap();
        assert_eq!(destination, PathBuf::from("/srv/www"));
    }

    #[test]
    fn test_destination_flag_wins_over_config() {
        let config = Config {
            destination: Some("/srv/config".to_string()),
            ..Default::default()
        };
        let destination =
            resolve_destination(&config, Some(PathBuf::from("/srv/flag"))).unwrap();
        assert_eq!(destination, PathBuf::from("/srv/flag"));
    }

    #[test]
    fn test_destination_unconfigured_is_an_error() {
        let config = Config::default();
        assert!(resolve_destination(&config, None).is_err());
    }
}
