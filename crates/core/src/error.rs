#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A draft failed validation. The message names every offending field.
    #[error("Validation failed: {0}")]
    Validation(String),
}
