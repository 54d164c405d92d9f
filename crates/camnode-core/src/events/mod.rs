use tracing::{error, info};

pub fn log_app_startup() {
    info!(
        event = "core.app.startup_completed",
        version = env!("CARGO_PKG_VERSION")
    );
}

pub fn log_app_error(error: &dyn std::error::Error) {
    error!(
        event = "core.app.error_occurred",
        error = %error,
        error_type = std::any::type_name_of_val(error)
    );
}

/// Summary of a batch resolution run (`check` or `resolve`).
pub fn log_batch_summary(command: &str, resolved: usize, failed: usize) {
    info!(
        event = "core.resolve.batch_completed",
        command = command,
        resolved = resolved,
        failed = failed
    );
}
