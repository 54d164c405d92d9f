use clap::ArgMatches;
use tracing::info;

use camnode_core::events;
use camnode_core::resolve_ops;

use super::resolve::{print_outcome, print_outcomes_json};
use super::{effective_config, registry_for, tool_for};

/// Resolve every name in `[targets] names`.
///
/// Always succeeds: individual failures are printed and the run moves on to
/// the next name.
pub(crate) fn handle_check_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches!(matches.try_get_one::<bool>("json"), Ok(Some(&true)));
    let config = effective_config(matches);
    let names = &config.targets.names;

    info!(event = "cli.check_started", count = names.len());

    let outcomes = resolve_ops::resolve_all(
        names,
        config.probe.min_width,
        config.probe.min_height,
        &registry_for(&config),
        &tool_for(&config),
    );

    if json_output {
        print_outcomes_json(&outcomes)?;
    } else {
        println!("=== Device resolution check ===\n");
        if outcomes.is_empty() {
            println!("No target names configured. Add names under [targets] in ~/.camnode/config.toml.\n");
        }
        for outcome in &outcomes {
            print_outcome(outcome);
        }
        println!("=== Check finished ===");
    }

    let resolved = outcomes.iter().filter(|o| o.result.is_ok()).count();
    events::log_batch_summary("check", resolved, outcomes.len() - resolved);

    Ok(())
}
