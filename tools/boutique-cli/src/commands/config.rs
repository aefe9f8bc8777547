//! Configuration management commands.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig, API_URL_ENV, CONFIG_NAMES};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Get { key } => get_config(&key, ctx),
        ConfigCommand::Set { key, value } => set_config(&key, &value, ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    println!("\n[api]");
    ctx.output.kv("base_url", &ctx.config.api.base_url);
    ctx.output
        .kv("timeout_secs", &ctx.config.api.timeout_secs.to_string());
    if std::env::var_os(API_URL_ENV).is_some() {
        ctx.output
            .kv("note", &format!("base_url overridden by {}", API_URL_ENV));
    }

    println!("\n[storage]");
    ctx.output
        .kv("dir", &ctx.storage_dir().display().to_string());
    ctx.output.kv("key", &ctx.config.storage.key);

    println!("\n[log]");
    ctx.output.kv("level", &ctx.config.log.level);

    Ok(())
}

fn get_config(key: &str, ctx: &Context) -> Result<()> {
    let value = get_config_value(&ctx.config, key)?;

    if ctx.output.is_json() {
        ctx.output
            .json(&serde_json::json!({ "key": key, "value": value }));
    } else {
        println!("{}", value);
    }

    Ok(())
}

fn set_config(key: &str, value: &str, ctx: &Context) -> Result<()> {
    let Some(config_path) = ctx.config_path.as_ref() else {
        bail!("No config file found. Run `boutique config init` to create one.");
    };
    let config_path = config_path.to_string_lossy().to_string();

    // Reload from disk so environment overrides are not written back
    let mut config = CliConfig::load(&config_path)?;
    set_config_value(&mut config, key, value)?;
    config.save(&config_path)?;

    ctx.output.success(&format!("Set {} = {}", key, value));

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;

    ctx.output
        .success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let (errors, warnings) = check_config(&ctx.config);

    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}

/// Collect configuration errors and warnings.
fn check_config(config: &CliConfig) -> (Vec<String>, Vec<String>) {
    let mut errors: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    let base_url = config.api.base_url.trim();
    if base_url.is_empty() {
        errors.push("api.base_url is required".to_string());
    } else if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        errors.push(format!("api.base_url '{}' must be an http(s) URL", base_url));
    }

    if config.api.timeout_secs == 0 {
        errors.push("api.timeout_secs must be greater than 0".to_string());
    }

    if config.storage.key.trim().is_empty() {
        errors.push("storage.key is required".to_string());
    }

    if tracing_subscriber::EnvFilter::try_new(&config.log.level).is_err() {
        warnings.push(format!(
            "log.level '{}' is not a valid filter, falling back to 'warn'",
            config.log.level
        ));
    }

    (errors, warnings)
}

fn get_config_value(config: &CliConfig, key: &str) -> Result<String> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["api", "base_url"] => Ok(config.api.base_url.clone()),
        ["api", "timeout_secs"] => Ok(config.api.timeout_secs.to_string()),
        ["storage", "dir"] => Ok(config
            .storage
            .dir
            .as_ref()
            .map(|d| d.display().to_string())
            .unwrap_or_else(|| "null".to_string())),
        ["storage", "key"] => Ok(config.storage.key.clone()),
        ["log", "level"] => Ok(config.log.level.clone()),
        _ => bail!("Unknown config key: {}", key),
    }
}

fn set_config_value(config: &mut CliConfig, key: &str, value: &str) -> Result<()> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["api", "base_url"] => config.api.base_url = value.to_string(),
        ["api", "timeout_secs"] => config.api.timeout_secs = value.parse()?,
        ["storage", "dir"] => config.storage.dir = Some(PathBuf::from(value)),
        ["storage", "key"] => config.storage.key = value.to_string(),
        ["log", "level"] => config.log.level = value.to_string(),
        _ => bail!("Unknown or read-only config key: {}", key),
    }

    Ok(())
}
