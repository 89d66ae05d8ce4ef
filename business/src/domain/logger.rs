/// Logging port used by every use case.
///
/// Kept free of any backend so the domain can be tested with a mock.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
