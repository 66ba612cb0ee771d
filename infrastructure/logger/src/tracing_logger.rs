use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

const TARGET: &str = "pantry_expiry";

/// `Logger` adapter that forwards to the `tracing` macros.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: TARGET, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: TARGET, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: TARGET, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: TARGET, "{}", message);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn should_be_usable_as_shared_logger_port() {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);

        logger.info("info without subscriber");
        logger.warn("warn without subscriber");
        logger.error("error without subscriber");
        logger.debug("debug without subscriber");
    }
}
