//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::models::CustomAction;

/// Wrapper type for displaying the result of an add-action operation.
pub struct AddResult {
    /// The newly created action
    pub action: CustomAction,
}

impl AddResult {
    /// Create a new AddResult wrapper.
    pub fn new(action: CustomAction) -> Self {
        Self { action }
    }
}

impl fmt::Display for AddResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Added action with ID: {}", self.action.id)?;
        writeln!(f)?;
        write!(f, "{}", self.action)
    }
}

/// Wrapper type for displaying the result of a delete-action operation.
pub struct DeleteResult {
    /// The removed action, echoed back for confirmation
    pub action: CustomAction,
}

impl DeleteResult {
    /// Create a new DeleteResult wrapper.
    pub fn new(action: CustomAction) -> Self {
        Self { action }
    }
}

impl fmt::Display for DeleteResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Deleted action with ID: {}", self.action.id)?;
        writeln!(f)?;
        write!(f, "{}", self.action)
    }
}
