use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding extra filter directives, e.g.
/// `CAMNODE_LOG=camnode_core::probe=debug`.
pub const LOG_ENV_VAR: &str = "CAMNODE_LOG";

/// Base directive for both workspace crates (`camnode`, `camnode_core`).
pub fn base_directive(verbose: bool) -> &'static str {
    if verbose { "camnode=info" } else { "camnode=error" }
}

/// Initialize JSON logging on stderr.
///
/// Quiet (errors only) unless `verbose`. Directives from `CAMNODE_LOG`, or
/// `RUST_LOG` when that is unset, are layered on top. Stdout stays reserved
/// for command output.
pub fn init_logging(verbose: bool) {
    let env_filter = match std::env::var(LOG_ENV_VAR) {
        Ok(directives) => EnvFilter::new(directives),
        Err(_) => EnvFilter::from_default_env(),
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(env_filter.add_directive(
            base_directive(verbose)
                .parse()
                .expect("Invalid log directive"),
        ))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::Directive;

    #[test]
    fn test_base_directives_parse() {
        for verbose in [true, false] {
            let parsed: Result<Directive, _> = base_directive(verbose).parse();
            assert!(parsed.is_ok());
        }
    }

    #[test]
    fn test_base_directive_levels() {
        assert_eq!(base_directive(true), "camnode=info");
        assert_eq!(base_directive(false), "camnode=error");
    }
}
