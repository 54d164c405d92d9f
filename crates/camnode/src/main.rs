use camnode_core::init_logging;

mod app;
mod commands;
mod table;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let app = app::build_cli();
    let matches = app.get_matches();

    init_logging(matches.get_flag("verbose"));

    commands::run_command(&matches)?;

    Ok(())
}
