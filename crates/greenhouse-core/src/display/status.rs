//! Status and confirmation message types for operation feedback.

use std::fmt;

/// Wrapper type for displaying operation confirmation messages, such as the
/// outcome of assigning a task or starting the server.
///
/// Failures are not rendered through this type; they surface as errors.
#[derive(Debug)]
pub struct OperationStatus {
    pub message: String,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Success: {}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_status_display() {
        let success = OperationStatus::success("Task 1:water:2024-01-04 assigned to Bob");
        assert_eq!(
            success.to_string(),
            "Success: Task 1:water:2024-01-04 assigned to Bob\n"
        );
    }
}
