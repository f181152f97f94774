/// Produces the placeholder password handed out on email registration
pub trait RecoveryPasswordGenerator: Send + Sync {
    /// Returns a string of exactly `length` characters
    fn generate(&self, length: usize) -> String;
}
