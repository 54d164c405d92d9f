use clap::ArgMatches;
use tracing::info;

use camnode_core::TargetOutcome;
use camnode_core::errors::CamnodeError;
use camnode_core::events;
use camnode_core::resolve_ops;

use super::{effective_config, registry_for, tool_for};

#[derive(serde::Serialize)]
struct OutcomeJson<'a> {
    name: &'a str,
    device: Option<String>,
    error: Option<String>,
    error_code: Option<&'static str>,
}

pub(crate) fn handle_resolve_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let names: Vec<String> = matches
        .get_many::<String>("names")
        .ok_or("At least one device name is required")?
        .cloned()
        .collect();
    let json_output = matches.get_flag("json");
    let config = effective_config(matches);

    info!(
        event = "cli.resolve_started",
        count = names.len(),
        min_width = config.probe.min_width,
        min_height = config.probe.min_height
    );

    let outcomes = resolve_ops::resolve_all(
        &names,
        config.probe.min_width,
        config.probe.min_height,
        &registry_for(&config),
        &tool_for(&config),
    );

    if json_output {
        print_outcomes_json(&outcomes)?;
    } else {
        for outcome in &outcomes {
            print_outcome(outcome);
        }
    }

    let resolved = outcomes.iter().filter(|o| o.result.is_ok()).count();
    events::log_batch_summary("resolve", resolved, outcomes.len() - resolved);

    Ok(())
}

/// Print one target's result. Failures are reported, never returned.
pub(super) fn print_outcome(outcome: &TargetOutcome) {
    println!("Resolving device for: {}", outcome.name);
    match &outcome.result {
        Ok(path) => println!("  ✅ Found stream device: {}\n", path.display()),
        Err(e) => println!("  ❌ {}\n", e),
    }
}

pub(super) fn print_outcomes_json(
    outcomes: &[TargetOutcome],
) -> Result<(), Box<dyn std::error::Error>> {
    let rows: Vec<OutcomeJson> = outcomes
        .iter()
        .map(|outcome| match &outcome.result {
            Ok(path) => OutcomeJson {
                name: &outcome.name,
                device: Some(path.display().to_string()),
                error: None,
                error_code: None,
            },
            Err(e) => OutcomeJson {
                name: &outcome.name,
                device: None,
                error: Some(e.to_string()),
                error_code: Some(e.error_code()),
            },
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}
