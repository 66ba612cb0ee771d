/// Logging port used by every use case.
///
/// Implemented by the `tracing` adapter in production and mocked in tests.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
