use crate::domain::AppError;

/// The CI runner's step facilities: inputs, outputs, environment, masking and status.
pub trait ActionHost {
    /// Raw value of a step input; empty when the input was not provided.
    fn get_input(&self, name: &str) -> String;

    /// Publish a step output.
    fn set_output(&self, name: &str, value: &str) -> Result<(), AppError>;

    /// Export an environment variable to subsequent steps.
    fn export_variable(&self, name: &str, value: &str) -> Result<(), AppError>;

    /// Register a value for redaction in all later log output.
    fn set_secret(&self, value: &str) -> Result<(), AppError>;

    /// Runner-visible debug message.
    fn debug(&self, message: &str);

    /// Runner-visible warning annotation.
    fn warning(&self, message: &str);

    /// Mark the step failed with a message.
    fn set_failed(&self, message: &str);
}
