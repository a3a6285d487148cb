//! Status and confirmation messages.

use std::fmt;

/// A short success or failure message for operations without richer output.
pub struct OperationStatus {
    message: String,
    success: bool,
}

impl OperationStatus {
    /// A success message.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    /// A failure message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.success {
            write!(f, "✓ {}", self.message)
        } else {
            write!(f, "⚠ {}", self.message)
        }
    }
}
