//! Operation result accumulator.

/// The outcome of a multi-stage operation.
///
/// Threaded through every stage of the backup pipeline: each stage may flip
/// `success` to false and append diagnostics, and a false result stops the
/// stages that follow. Messages keep their append order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationResult {
    /// Overall outcome; starts out success-shaped.
    pub success: bool,
    /// Ordered, append-only diagnostics.
    pub messages: Vec<String>,
}

impl OperationResult {
    /// A fresh, successful, message-free result.
    pub fn new() -> Self {
        Self {
            success: true,
            messages: Vec::new(),
        }
    }

    /// Mark the operation failed and record why.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.success = false;
        self.messages.push(message.into());
    }

    /// Record an informational message without changing the outcome.
    pub fn note(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }
}

impl Default for OperationResult {
    fn default() -> Self {
        Self::new()
    }
}
