use std::path::PathBuf;

use clap::ArgMatches;
use clap_complete::Shell;
use tracing::{error, info, warn};

use camnode_core::config::CamnodeConfig;
use camnode_core::events;
use camnode_core::{SysfsRegistry, V4l2Ctl};

mod check;
mod list;
mod probe;
mod resolve;

pub(crate) use check::handle_check_command;
pub(crate) use list::handle_list_command;
pub(crate) use probe::handle_probe_command;
pub(crate) use resolve::handle_resolve_command;

/// Load configuration with warning on errors.
///
/// Falls back to defaults if config loading fails, but notifies the user via:
/// - stderr message for immediate visibility
/// - structured log event `cli.config.load_failed` for debugging
fn load_config_with_warning() -> CamnodeConfig {
    match CamnodeConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.camnode/config.toml and ./.camnode/config.toml for syntax errors.",
                e
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            CamnodeConfig::default()
        }
    }
}

/// Load config and apply the CLI overrides present in `matches`.
fn effective_config(matches: &ArgMatches) -> CamnodeConfig {
    let mut config = load_config_with_warning();

    if let Some(tool) = matches.get_one::<String>("tool") {
        config.probe.tool = tool.clone();
    }
    if let Some(root) = matches.get_one::<String>("registry-root") {
        config.registry.root = PathBuf::from(root);
    }
    if let Some(dev_dir) = matches.get_one::<String>("dev-dir") {
        config.registry.dev_dir = PathBuf::from(dev_dir);
    }
    // Threshold flags only exist on some subcommands
    if let Ok(Some(width)) = matches.try_get_one::<u32>("min-width") {
        config.probe.min_width = *width;
    }
    if let Ok(Some(height)) = matches.try_get_one::<u32>("min-height") {
        config.probe.min_height = *height;
    }

    config
}

fn registry_for(config: &CamnodeConfig) -> SysfsRegistry {
    SysfsRegistry::from_config(&config.registry)
}

fn tool_for(config: &CamnodeConfig) -> V4l2Ctl {
    V4l2Ctl::new(config.probe.tool.clone())
}

/// Write a completion script for the requested shell to stdout.
fn handle_completions_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let shell = *matches
        .get_one::<Shell>("shell")
        .ok_or("Shell argument is required")?;

    let mut cmd = crate::app::build_cli();
    let bin_name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, bin_name, &mut std::io::stdout().lock());

    info!(event = "cli.completions_generated", shell = %shell);
    Ok(())
}

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    let result = match matches.subcommand() {
        None => handle_check_command(matches),
        Some(("check", sub_matches)) => handle_check_command(sub_matches),
        Some(("resolve", sub_matches)) => handle_resolve_command(sub_matches),
        Some(("list", sub_matches)) => handle_list_command(sub_matches),
        Some(("probe", sub_matches)) => handle_probe_command(sub_matches),
        Some(("completions", sub_matches)) => handle_completions_command(sub_matches),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    };

    if let Err(e) = &result {
        events::log_app_error(e.as_ref());
    }
    result
}
