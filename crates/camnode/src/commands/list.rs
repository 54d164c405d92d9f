use clap::ArgMatches;
use tracing::info;

use camnode_core::registry;

use super::{effective_config, registry_for};
use crate::table::TableFormatter;

pub(crate) fn handle_list_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    let config = effective_config(matches);

    let sysfs = registry_for(&config);

    info!(
        event = "cli.list_started",
        root = %sysfs.root().display(),
        json_output = json_output
    );

    let devices = registry::list_devices(&sysfs);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&devices)?);
    } else if devices.is_empty() {
        println!("No video devices found under {}.", sysfs.root().display());
    } else {
        TableFormatter::new(&devices).print_table(&devices);
    }

    info!(event = "cli.list_completed", count = devices.len());

    Ok(())
}
