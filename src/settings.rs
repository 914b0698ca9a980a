use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Result, anyhow, bail, ensure};
use config::{Config, ConfigError, File};
use serde::Deserialize;

use sift::app::AppOptions;
use sift::app_dirs;
use sift::theme;
use sift::types::CombinationMode;

use crate::cli::CliArgs;

const DEFAULT_ENDPOINT: &str = "http://localhost:5000/search";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
    backend: BackendSection,
    ui: UiSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct BackendSection {
    endpoint: Option<String>,
    timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
    initial_query: Option<String>,
    mode: Option<CombinationMode>,
    theme: Option<String>,
}

/// Effective configuration after merging files, environment, and CLI.
#[derive(Debug)]
pub struct ResolvedConfig {
    pub endpoint: String,
    pub timeout: Duration,
    pub initial_query: String,
    pub mode: CombinationMode,
    pub theme: Option<String>,
}

impl ResolvedConfig {
    pub fn print_summary(&self) {
        println!("Effective configuration:");
        println!("  Endpoint: {}", self.endpoint);
        println!("  Timeout: {}s", self.timeout.as_secs());
        println!("  Mode: {}", self.mode);
        if !self.initial_query.is_empty() {
            println!("  Initial query: {}", self.initial_query);
        }
        println!(
            "  Theme: {}",
            self.theme.as_deref().unwrap_or("(default)")
        );
    }

    /// Translate into launch options, resolving the theme by name.
    pub fn into_options(self) -> Result<AppOptions> {
        let theme = match self.theme.as_deref() {
            None => theme::Theme::default(),
            Some(name) => match theme::by_name(name) {
                Some(theme) => theme,
                None => bail!("unknown theme: {name}"),
            },
        };

        Ok(AppOptions {
            endpoint: self.endpoint,
            timeout: self.timeout,
            initial_query: self.initial_query,
            mode: self.mode,
            theme,
        })
    }
}

pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
    let builder = build_config(cli)?;
    let mut raw: RawConfig = builder
        .try_deserialize()
        .map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
    raw.apply_cli_overrides(cli);
    raw.resolve()
}

fn build_config(cli: &CliArgs) -> Result<Config> {
    let mut builder = Config::builder();

    if !cli.no_config {
        for path in default_config_files() {
            builder = builder.add_source(File::from(path).required(false));
        }
    }

    for path in &cli.config {
        builder = builder.add_source(File::from(path.clone()).required(true));
    }

    builder = builder.add_source(
        config::Environment::with_prefix("sift")
            .separator("__")
            .try_parsing(true),
    );

    builder.build().map_err(|err| match err {
        ConfigError::Frozen => anyhow!("configuration builder is frozen"),
        other => other.into(),
    })
}

fn default_config_files() -> Vec<PathBuf> {
    let mut files = Vec::new();

    if let Ok(dir) = app_dirs::get_config_dir() {
        files.push(dir.join("config.toml"));
    }

    if let Ok(current_dir) = env::current_dir() {
        files.push(current_dir.join(".sift.toml"));
        files.push(current_dir.join("sift.toml"));
    }

    files
}

impl RawConfig {
    fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(endpoint) = cli.endpoint.clone() {
            self.backend.endpoint = Some(endpoint);
        }
        if let Some(timeout) = cli.timeout {
            self.backend.timeout_secs = Some(timeout);
        }
        if let Some(query) = cli.query.clone() {
            self.ui.initial_query = Some(query);
        }
        if let Some(mode) = cli.mode {
            self.ui.mode = Some(mode);
        }
        if let Some(theme) = cli.theme.clone() {
            self.ui.theme = Some(theme);
        }
    }

    fn resolve(self) -> Result<ResolvedConfig> {
        let endpoint = self
            .backend
            .endpoint
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        ensure!(!endpoint.trim().is_empty(), "endpoint must not be empty");

        let timeout_secs = self.backend.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
        ensure!(timeout_secs > 0, "timeout must be greater than zero");

        Ok(ResolvedConfig {
            endpoint,
            timeout: Duration::from_secs(timeout_secs),
            initial_query: self.ui.initial_query.unwrap_or_default(),
            mode: self.ui.mode.unwrap_or_default(),
            theme: self.ui.theme,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;

    fn cli(args: &[&str]) -> CliArgs {
        let mut full = vec!["sift"];
        full.extend_from_slice(args);
        CliArgs::parse_from(full)
    }

    #[test]
    fn defaults_apply_without_config() {
        let resolved = load(&cli(&["--no-config"])).unwrap();
        assert_eq!(resolved.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(resolved.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(resolved.mode, CombinationMode::Conjunctive);
        assert!(resolved.initial_query.is_empty());
    }

    #[test]
    fn config_file_sets_backend_and_ui() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sift.toml");
        fs::write(
            &path,
            r#"
[backend]
endpoint = "http://search.example:9000/search"
timeout_secs = 3

[ui]
mode = "disjunctive"
initial_query = "rust"
"#,
        )
        .unwrap();

        let resolved = load(&cli(&["--no-config", "--config", path.to_str().unwrap()])).unwrap();
        assert_eq!(resolved.endpoint, "http://search.example:9000/search");
        assert_eq!(resolved.timeout, Duration::from_secs(3));
        assert_eq!(resolved.mode, CombinationMode::Disjunctive);
        assert_eq!(resolved.initial_query, "rust");
    }

    #[test]
    fn cli_overrides_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sift.toml");
        fs::write(&path, "[backend]\nendpoint = \"http://file.example/search\"\n").unwrap();

        let resolved = load(&cli(&[
            "--no-config",
            "--config",
            path.to_str().unwrap(),
            "--endpoint",
            "http://cli.example/search",
            "--mode",
            "disjunctive",
        ]))
        .unwrap();
        assert_eq!(resolved.endpoint, "http://cli.example/search");
        assert_eq!(resolved.mode, CombinationMode::Disjunctive);
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let err = load(&cli(&["--no-config", "--timeout", "0"])).unwrap_err();
        assert!(err.to_string().contains("timeout"));
    }

    #[test]
    fn unknown_theme_fails_at_option_resolution() {
        let resolved = load(&cli(&["--no-config", "--theme", "sepia"])).unwrap();
        assert!(resolved.into_options().is_err());
    }
}
