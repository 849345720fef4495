use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "Flora -- ", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "Flora -- ", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "Flora -- ", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "Flora -- ", "{}", message);
    }
}
