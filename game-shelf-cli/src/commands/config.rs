use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::commands::Context;
use crate::error::CliError;

/// Show the effective backend settings and their sources.
pub(crate) fn run_config_show(ctx: &Context) -> Result<(), CliError> {
    let path = game_shelf_client::config_path();
    let (config, sources) = ctx.config()?;

    log::info!(
        "{}",
        "Backend Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    match &path {
        Some(p) if p.exists() => {
            log::info!(
                "  Config file: {} {}",
                p.display().if_supports_color(Stdout, |t| t.cyan()),
                "(exists)".if_supports_color(Stdout, |t| t.green()),
            );
        }
        Some(p) => {
            log::info!(
                "  Config file: {} {}",
                p.display().if_supports_color(Stdout, |t| t.cyan()),
                "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
        None => {
            log::info!(
                "  Config file: {}",
                "could not determine path".if_supports_color(Stdout, |t| t.red()),
            );
        }
    }
    crate::log_blank();

    let fields = [
        ("url", config.base_url.clone(), &sources.base_url),
        (
            "poll_interval_ms",
            config.poll_interval_ms.to_string(),
            &sources.poll_interval_ms,
        ),
        ("timeout_secs", config.timeout_secs.to_string(), &sources.timeout_secs),
    ];

    for (name, value, source) in fields {
        log::info!(
            "  {} {} {}",
            format!("{}:", name).if_supports_color(Stdout, |t| t.cyan()),
            value,
            format!("({})", source).if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    Ok(())
}

/// Print the config file path.
pub(crate) fn run_config_path() -> Result<(), CliError> {
    match game_shelf_client::config_path() {
        Some(path) => log::info!("{}", path.display()),
        None => {
            return Err(CliError::config("Could not determine config directory"));
        }
    }

    Ok(())
}

/// Persist the effective settings (including `--url`) to the config file.
pub(crate) fn run_config_save(ctx: &Context) -> Result<(), CliError> {
    let (config, _) = ctx.config()?;
    let path = game_shelf_client::save_to_file(&config)
        .map_err(|e| CliError::config(format!("Failed to save config: {}", e)))?;

    log::info!(
        "{} Config saved to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        path.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}
