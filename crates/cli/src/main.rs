use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use carte_util::{AppConfig, default_config_path, expand_tilde, load_config_from_path};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Build a restaurant menu from the terminal.
#[derive(Parser, Debug)]
#[command(name = "carte", version, about)]
struct Args {
    /// Config file (defaults to $CARTE_CONFIG_PATH, then the user config dir)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Theme to use: christoffel, nord or ansi256
    #[arg(long, value_name = "NAME")]
    theme: Option<String>,

    /// Currency prefix for prices
    #[arg(long, value_name = "SYMBOL")]
    currency: Option<String>,

    /// Append logs to this file; the TUI owns the terminal so nothing is
    /// logged without it
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(path) = args.log_file.as_deref() {
        init_tracing(&expand_tilde(path))?;
    }

    let config_path = args
        .config
        .as_deref()
        .map(expand_tilde)
        .unwrap_or_else(default_config_path);
    let mut config =
        load_config_from_path(&config_path).with_context(|| format!("loading config from {}", config_path.display()))?;
    apply_overrides(&mut config, &args);
    info!(path = %config_path.display(), theme = ?config.theme, "configuration loaded");

    carte_tui::run(config).await
}

fn init_tracing(log_path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .with_context(|| format!("opening log file {}", log_path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(file)
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn apply_overrides(config: &mut AppConfig, args: &Args) {
    if let Some(theme) = args.theme.as_ref() {
        config.theme = Some(theme.clone());
    }
    if let Some(currency) = args.currency.as_ref() {
        config.currency_symbol = currency.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config_values() {
        let args = Args::parse_from(["carte", "--theme", "nord", "--currency", "$"]);
        let mut config = AppConfig::default();
        apply_overrides(&mut config, &args);

        assert_eq!(config.theme.as_deref(), Some("nord"));
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.title, AppConfig::default().title);
    }

    #[test]
    fn missing_flags_keep_config_values() {
        let args = Args::parse_from(["carte"]);
        let mut config = AppConfig {
            theme: Some("ansi256".to_string()),
            ..AppConfig::default()
        };
        apply_overrides(&mut config, &args);
        assert_eq!(config.theme.as_deref(), Some("ansi256"));
        assert!(args.log_file.is_none());
    }
}
