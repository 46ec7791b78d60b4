use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".elgrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory holding one `<locale>.json` file per language.
    #[serde(default = "default_languages_root")]
    pub languages_root: String,
    /// Language-agnostic defaults file, audited like a locale.
    #[serde(default = "default_defaults_file")]
    pub defaults_file: String,
    /// Locale whose key set is ground truth for the audit.
    #[serde(default = "default_reference_locale")]
    pub reference_locale: String,
    /// Build output directory the deploy copies from.
    #[serde(default = "default_dist_root")]
    pub dist_root: String,
    /// Deployment directory. No built-in default; may also come from
    /// `--destination` or the `DESTINATION_PATH` environment variable.
    #[serde(default)]
    pub destination: Option<String>,
    /// File name patterns deleted from the destination before copying.
    #[serde(default = "default_stale_patterns")]
    pub stale_patterns: Vec<String>,
    /// Literal substring in the bundle that gets the timestamp prefix.
    #[serde(default = "default_marker")]
    pub marker: String,
}

fn default_languages_root() -> String {
    "./src/localize/languages".to_string()
}

fn default_defaults_file() -> String {
    "./src/localize/defaults.json".to_string()
}

fn default_reference_locale() -> String {
    "en".to_string()
}

fn default_dist_root() -> String {
    "./dist".to_string()
}

fn default_stale_patterns() -> Vec<String> {
    ["*.js", "*.map"].map(String::from).to_vec()
}

fn default_marker() -> String {
    "%c ENERGY LINE GAUGE".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            languages_root: default_languages_root(),
            defaults_file: default_defaults_file(),
            reference_locale: default_reference_locale(),
            dist_root: default_dist_root(),
            destination: None,
            stale_patterns: default_stale_patterns(),
            marker: default_marker(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob patterns in `stalePatterns` are invalid.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.stale_patterns {
            Pattern::new(pattern).with_context(|| {
                format!("Invalid glob pattern in 'stalePatterns': \"{}\"", pattern)
            })?;
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
