//! Conflict resolution nodes for INSERT.

use super::expression::Expr;
use super::statement::{Assignment, Insert};

/// The update performed when an inserted row conflicts with an existing one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConflictUpdate {
    /// SET list.
    pub assignments: Vec<Assignment>,
    /// Only update when this holds.
    pub predicate: Option<Expr>,
}

/// What to do with a conflicting row.
#[derive(Debug, Clone, PartialEq)]
pub enum ConflictAction {
    /// Skip the row.
    Nothing,
    /// Update the existing row.
    Update(ConflictUpdate),
    /// Caller supplied action, written verbatim after the conflict prefix.
    Custom(Expr),
}

/// `ON CONFLICT ...` / `ON DUPLICATE KEY ...`.
#[derive(Debug, Clone, PartialEq)]
pub struct ConflictClause {
    /// Columns (or expressions) identifying the conflicting unique index.
    pub targets: Vec<Expr>,
    /// Partial-index condition attached to the targets.
    pub condition: Option<Expr>,
    /// The action.
    pub action: ConflictAction,
}

impl ConflictClause {
    /// A clause with no targets.
    #[must_use]
    pub const fn new(action: ConflictAction) -> Self {
        Self {
            targets: Vec::new(),
            condition: None,
            action,
        }
    }

    /// `DO NOTHING` on any conflict.
    #[must_use]
    pub const fn do_nothing() -> Self {
        Self::new(ConflictAction::Nothing)
    }
}

/// An INSERT paired with a conflict clause.
#[derive(Debug, Clone, PartialEq)]
pub struct Upsert {
    /// The insert. Its own `conflict` field is ignored.
    pub insert: Insert,
    /// The conflict clause.
    pub conflict: ConflictClause,
}
