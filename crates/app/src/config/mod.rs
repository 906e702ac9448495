use clap::Parser;
use serde::Deserialize;

use crate::error::Result;

const DEFAULT_CONFIG_PATH: &str = "config/menucard.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub log_level: String,
    pub confirm_removals: bool,
    pub json: bool,
    pub prompt: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            confirm_removals: true,
            json: false,
            prompt: "> ".to_string(),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "menucard", about = "Manage a restaurant menu from the terminal")]
pub(crate) struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override log level (e.g. debug, info, warn).
    #[arg(long)]
    log_level: Option<String>,
    /// Print every response as a JSON document.
    #[arg(long)]
    json: bool,
    /// Remove dishes by position without asking for confirmation.
    #[arg(long)]
    no_confirm: bool,
}

pub fn load() -> Result<AppConfig> {
    resolve(Args::parse())
}

/// Layers the config file, `MENUCARD_*` environment variables and `args`.
pub(crate) fn resolve(args: Args) -> Result<AppConfig> {
    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(config::Environment::with_prefix("MENUCARD").try_parsing(true));
    let mut settings: AppConfig = builder.build()?.try_deserialize()?;

    if let Some(log_level) = args.log_level {
        settings.log_level = log_level;
    }
    if args.json {
        settings.json = true;
    }
    if args.no_confirm {
        settings.confirm_removals = false;
    }

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["menucard", "--config", "does/not/exist.toml"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let settings = resolve(args(&[])).unwrap();
        assert!(settings.confirm_removals);
        assert!(!settings.json);
        assert_eq!(settings.prompt, "> ");
    }

    #[test]
    fn command_line_overrides_win() {
        let settings = resolve(args(&["--json", "--no-confirm", "--log-level", "debug"])).unwrap();
        assert!(settings.json);
        assert!(!settings.confirm_removals);
        assert_eq!(settings.log_level, "debug");
    }
}
