use clap::{Arg, ArgAction, Command, value_parser};

fn min_width_arg() -> Arg {
    Arg::new("min-width")
        .long("min-width")
        .value_name("PIXELS")
        .help("Minimum discrete frame width of a streaming node (overrides config, default: 3000)")
        .value_parser(value_parser!(u32).range(1..))
}

fn min_height_arg() -> Arg {
    Arg::new("min-height")
        .long("min-height")
        .value_name("PIXELS")
        .help("Minimum discrete frame height of a streaming node (overrides config, default: 2000)")
        .value_parser(value_parser!(u32).range(1..))
}

fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .help("Output in JSON format")
        .action(ArgAction::SetTrue)
}

pub fn build_cli() -> Command {
    Command::new("camnode")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Find the high-resolution video node of a camera sensor")
        .long_about("camnode matches camera names against /sys/class/video4linux and probes each match with v4l2-ctl. A sensor that exposes several nodes under one name (a metadata node next to the capture node) resolves to the first node that lists a large discrete frame size. Without a subcommand it checks every name in the configured target list.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("tool")
                .long("tool")
                .value_name("PROGRAM")
                .help("Capability tool to run (overrides config, default: v4l2-ctl)")
                .global(true),
        )
        .arg(
            Arg::new("registry-root")
                .long("registry-root")
                .value_name("DIR")
                .help("Device registry directory (overrides config, default: /sys/class/video4linux)")
                .global(true),
        )
        .arg(
            Arg::new("dev-dir")
                .long("dev-dir")
                .value_name("DIR")
                .help("Directory holding device files (overrides config, default: /dev)")
                .global(true),
        )
        .subcommand(
            Command::new("check")
                .about("Resolve every configured target name (default when no subcommand is given)")
                .arg(min_width_arg())
                .arg(min_height_arg())
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("resolve")
                .about("Resolve the streaming device node for one or more camera names")
                .arg(
                    Arg::new("names")
                        .help("Exact device names as reported by the kernel")
                        .required(true)
                        .num_args(1..)
                        .index(1),
                )
                .arg(min_width_arg())
                .arg(min_height_arg())
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("list")
                .about("List video device nodes and their names")
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("probe")
                .about("Show the discrete frame sizes a device advertises")
                .arg(
                    Arg::new("device")
                        .help("Device path, e.g. /dev/video2")
                        .required(true)
                        .index(1),
                )
                .arg(min_width_arg())
                .arg(min_height_arg())
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completion scripts")
                .arg(
                    Arg::new("shell")
                        .help("Target shell")
                        .required(true)
                        .index(1)
                        .value_parser(value_parser!(clap_complete::Shell)),
                ),
        )
}
