use std::path::PathBuf;

use clap::ArgMatches;
use tracing::info;

use camnode_core::probe_ops;

use super::{effective_config, tool_for};

pub(crate) fn handle_probe_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let device = matches
        .get_one::<String>("device")
        .map(PathBuf::from)
        .ok_or("Device argument is required")?;
    let json_output = matches.get_flag("json");
    let config = effective_config(matches);

    info!(event = "cli.probe_started", device = %device.display());

    let report = probe_ops::probe_device(
        &tool_for(&config),
        &device,
        config.probe.min_width,
        config.probe.min_height,
    );

    if json_output {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Device: {}", report.device.display());
        if let Some(error) = &report.error {
            println!("  ❌ {}", error);
        } else if report.resolutions.is_empty() {
            println!("  No discrete frame sizes listed");
        } else {
            for res in &report.resolutions {
                let marker = if res.meets(report.min_width, report.min_height) {
                    "*"
                } else {
                    " "
                };
                println!("  {} {}", marker, res);
            }
        }
        println!(
            "Valid stream (>= {}x{}): {}",
            report.min_width,
            report.min_height,
            if report.valid_stream { "yes" } else { "no" }
        );
    }

    info!(
        event = "cli.probe_completed",
        device = %device.display(),
        valid_stream = report.valid_stream
    );

    Ok(())
}
