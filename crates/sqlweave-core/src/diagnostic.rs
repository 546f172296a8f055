//! Dialect limitation reports.
//!
//! Serialization never fails. When a dialect cannot express part of a
//! statement the serializer drops or degrades that part and records a
//! [`Diagnostic`] alongside the generated SQL.

use core::fmt;

use serde::{Deserialize, Serialize};

/// How serious a limitation is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// The SQL is usable but something requested was left out.
    Warning,
    /// The SQL no longer means what the caller asked for.
    Error,
}

/// The limitation that was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// More than one ALTER TABLE clause on a dialect that takes one at a time.
    BatchAlterUnsupported,
    /// Every ALTER TABLE clause was dropped; the statement alters nothing.
    EmptyAlteration,
    /// Column modification is not available.
    ModifyColumnUnsupported,
    /// Adding or dropping constraints via ALTER TABLE is not available.
    ConstraintAlterationUnsupported,
    /// `IF EXISTS` / `IF NOT EXISTS` was requested but is not available.
    IfExistsUnsupported,
    /// RETURNING was requested but is not available.
    ReturningUnsupported,
    /// Enum column types are not available; the column falls back to text.
    EnumUnsupported,
    /// Auto-increment was requested but is not available.
    AutoIncrementUnsupported,
    /// Conflict targets were supplied to a dialect that cannot use them.
    ConflictTargetIgnored,
    /// A conflict condition was supplied to a dialect that cannot use it.
    ConflictConditionIgnored,
    /// A conflict-update predicate was supplied to a dialect that cannot use it.
    ConflictUpdatePredicateIgnored,
    /// `DO UPDATE` without a conflict target.
    MissingConflictTarget,
    /// The dialect has no upsert; the conflict action was dropped.
    ConflictActionDropped,
    /// The dialect has no way to skip conflicting rows.
    ConflictIgnoreUnsupported,
    /// An excluded-row reference appeared where the dialect has none.
    ExcludedUnavailable,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::BatchAlterUnsupported => "batch-alter-unsupported",
            Self::EmptyAlteration => "empty-alteration",
            Self::ModifyColumnUnsupported => "modify-column-unsupported",
            Self::ConstraintAlterationUnsupported => "constraint-alteration-unsupported",
            Self::IfExistsUnsupported => "if-exists-unsupported",
            Self::ReturningUnsupported => "returning-unsupported",
            Self::EnumUnsupported => "enum-unsupported",
            Self::AutoIncrementUnsupported => "auto-increment-unsupported",
            Self::ConflictTargetIgnored => "conflict-target-ignored",
            Self::ConflictConditionIgnored => "conflict-condition-ignored",
            Self::ConflictUpdatePredicateIgnored => "conflict-update-predicate-ignored",
            Self::MissingConflictTarget => "missing-conflict-target",
            Self::ConflictActionDropped => "conflict-action-dropped",
            Self::ConflictIgnoreUnsupported => "conflict-ignore-unsupported",
            Self::ExcludedUnavailable => "excluded-unavailable",
        };
        f.write_str(name)
    }
}

/// One dialect limitation encountered while serializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// What was hit.
    pub kind: DiagnosticKind,
    /// How bad it is.
    pub severity: Severity,
    /// Human readable explanation.
    pub message: String,
}

impl Diagnostic {
    /// Creates a diagnostic.
    #[must_use]
    pub fn new(kind: DiagnosticKind, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity,
            message: message.into(),
        }
    }

    /// Creates a warning.
    #[must_use]
    pub fn warning(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self::new(kind, Severity::Warning, message)
    }

    /// Creates an error.
    #[must_use]
    pub fn error(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self::new(kind, Severity::Error, message)
    }

    /// Returns `true` if this diagnostic makes the statement unusable.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}
