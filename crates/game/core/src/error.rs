//! Common error infrastructure for checkers-core.
//!
//! Domain-specific errors (`MoveError`, `CodecError`) are defined next to the
//! code that raises them. This module provides the classification shared by
//! all of them so callers can tell a rejected move from a corrupted record.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Validation**: invalid input that should be rejected without retry
/// - **Internal**: persisted data contradicts an invariant (a bug upstream)
/// - **Fatal**: the enclosing operation must abort unconditionally
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: move out of turn, non-diagonal move, missed forced capture
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// Examples: stored board with an unknown cell character
    Internal,

    /// Fatal error - state corrupted, cannot continue.
    ///
    /// Examples: dangling link inside the expiry registry
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all checkers errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on who must fix the problem, not on impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// This is useful for error categorization and testing.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
