//! Conflict resolution for INSERT.
//!
//! One conceptual operation, "insert, or do something else when the row
//! already exists", has four spellings depending on
//! [`UpsertSyntax`]:
//!
//! | syntax | rendering |
//! |---|---|
//! | `Standard` | `INSERT ... ON CONFLICT (targets) [WHERE c] DO NOTHING \| DO UPDATE SET ... [WHERE p]` |
//! | `Nonspecific` | `INSERT ... AS excluded ON DUPLICATE KEY UPDATE ...` / `INSERT IGNORE ...` |
//! | `NonspecificWithValues` | `INSERT ... ON DUPLICATE KEY UPDATE c = VALUES(c)` / `INSERT IGNORE ...` |
//! | `Unsupported` | plain `INSERT` plus a diagnostic |
//!
//! Whatever a dialect cannot express is dropped and reported, never failed.

use crate::ast::{ConflictAction, ConflictClause, Insert, Upsert};
use crate::diagnostic::{Diagnostic, DiagnosticKind};
use crate::dialect::UpsertSyntax;

use super::query::{write_assignments, write_returning};
use super::Serializer;

/// How a reference to the would-be-inserted row is written.
///
/// Derived once per statement from the dialect's [`UpsertSyntax`]. The
/// INSERT writer and the excluded-column writer both read the same value,
/// so a declared row alias and the references to it always agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExcludedStyle {
    /// `excluded.col`; the engine provides the row.
    ImplicitAlias,
    /// `excluded.col`; the row is declared with `AS excluded` after VALUES.
    DeclaredAlias,
    /// `VALUES(col)`.
    ValuesFunction,
    /// No way to refer to the row.
    Unavailable,
}

impl ExcludedStyle {
    /// Name of the excluded row.
    pub const ALIAS: &'static str = "excluded";

    /// The style matching a dialect's upsert syntax.
    #[must_use]
    pub const fn for_syntax(syntax: UpsertSyntax) -> Self {
        match syntax {
            UpsertSyntax::Standard => Self::ImplicitAlias,
            UpsertSyntax::Nonspecific => Self::DeclaredAlias,
            UpsertSyntax::NonspecificWithValues => Self::ValuesFunction,
            UpsertSyntax::Unsupported => Self::Unavailable,
        }
    }
}

impl Serializer<'_> {
    /// Writes a reference to the excluded row's value for `column`.
    pub fn push_excluded(&mut self, column: &str) {
        match self.excluded_style() {
            ExcludedStyle::ValuesFunction => {
                self.push("VALUES(");
                self.push_identifier(column);
                self.push(")");
            }
            style => {
                if style == ExcludedStyle::Unavailable {
                    let message = format!(
                        "dialect `{}` has no excluded row; `{column}` is written as a row-alias reference",
                        self.dialect().name()
                    );
                    self.report(Diagnostic::warning(
                        DiagnosticKind::ExcludedUnavailable,
                        message,
                    ));
                }
                self.push_identifier(ExcludedStyle::ALIAS);
                self.push(".");
                self.push_identifier(column);
            }
        }
    }
}

/// What the serializer will actually emit for a conflict clause.
enum Resolution<'a> {
    /// `ON CONFLICT ...`.
    Standard(&'a ConflictClause),
    /// `ON DUPLICATE KEY ...`.
    DuplicateKey(&'a ConflictAction),
    /// `INSERT IGNORE`.
    Ignore,
    /// Plain INSERT.
    Dropped,
}

/// Maps a conflict clause onto the dialect, reporting everything that
/// cannot be carried over.
fn resolve<'a>(clause: &'a ConflictClause, s: &mut Serializer<'_>) -> Resolution<'a> {
    let dialect = s.dialect().name();
    match s.dialect().upsert_syntax() {
        UpsertSyntax::Standard => {
            if clause.targets.is_empty() {
                if clause.condition.is_some() {
                    s.report(Diagnostic::warning(
                        DiagnosticKind::ConflictConditionIgnored,
                        "conflict condition requires conflict targets and was dropped",
                    ));
                }
                if matches!(clause.action, ConflictAction::Update(_)) {
                    s.report(Diagnostic::warning(
                        DiagnosticKind::MissingConflictTarget,
                        format!("dialect `{dialect}` usually requires a conflict target for DO UPDATE"),
                    ));
                }
            }
            Resolution::Standard(clause)
        }
        UpsertSyntax::Nonspecific | UpsertSyntax::NonspecificWithValues => {
            if !clause.targets.is_empty() {
                s.report(Diagnostic::warning(
                    DiagnosticKind::ConflictTargetIgnored,
                    format!("dialect `{dialect}` resolves conflicts on any unique key; targets ignored"),
                ));
            }
            if clause.condition.is_some() {
                s.report(Diagnostic::warning(
                    DiagnosticKind::ConflictConditionIgnored,
                    format!("dialect `{dialect}` does not support conflict conditions; condition ignored"),
                ));
            }
            match &clause.action {
                ConflictAction::Nothing => Resolution::Ignore,
                ConflictAction::Update(update) => {
                    if update.predicate.is_some() {
                        s.report(Diagnostic::warning(
                            DiagnosticKind::ConflictUpdatePredicateIgnored,
                            format!("dialect `{dialect}` does not support conditional conflict updates; predicate ignored"),
                        ));
                    }
                    Resolution::DuplicateKey(&clause.action)
                }
                ConflictAction::Custom(_) => Resolution::DuplicateKey(&clause.action),
            }
        }
        UpsertSyntax::Unsupported => {
            if matches!(clause.action, ConflictAction::Nothing) {
                s.report(Diagnostic::error(
                    DiagnosticKind::ConflictIgnoreUnsupported,
                    format!("dialect `{dialect}` cannot skip conflicting rows; a plain INSERT would fail on duplicates"),
                ));
            } else {
                s.report(Diagnostic::warning(
                    DiagnosticKind::ConflictActionDropped,
                    format!("dialect `{dialect}` has no upsert; conflict action dropped"),
                ));
            }
            Resolution::Dropped
        }
    }
}

pub(super) fn write_insert(
    insert: &Insert,
    conflict: Option<&ConflictClause>,
    s: &mut Serializer<'_>,
) {
    let resolution = conflict.map(|clause| resolve(clause, s));

    s.push("INSERT");
    if matches!(resolution, Some(Resolution::Ignore)) {
        s.push(" IGNORE");
    }
    s.push(" INTO ");
    insert.table.serialize(s);
    if !insert.columns.is_empty() {
        s.push(" (");
        s.push_list(&insert.columns, ", ", |s, column| s.push_identifier(column));
        s.push(")");
    }
    if insert.rows.is_empty() {
        s.push(" DEFAULT VALUES");
    } else {
        s.push(" VALUES ");
        s.push_list(&insert.rows, ", ", |s, row| {
            s.push("(");
            s.push_list(row, ", ", |s, value| value.serialize(s));
            s.push(")");
        });
    }

    match resolution {
        Some(Resolution::Standard(clause)) => write_on_conflict(clause, s),
        Some(Resolution::DuplicateKey(action)) => {
            if s.excluded_style() == ExcludedStyle::DeclaredAlias {
                s.push(" AS ");
                s.push_identifier(ExcludedStyle::ALIAS);
            }
            s.push(" ON DUPLICATE KEY ");
            match action {
                ConflictAction::Update(update) => {
                    s.push("UPDATE ");
                    write_assignments(&update.assignments, s);
                }
                ConflictAction::Custom(expr) => expr.serialize(s),
                ConflictAction::Nothing => {}
            }
        }
        Some(Resolution::Ignore | Resolution::Dropped) | None => {}
    }

    write_returning(&insert.returning, s);
}

fn write_on_conflict(clause: &ConflictClause, s: &mut Serializer<'_>) {
    s.push(" ON CONFLICT");
    if !clause.targets.is_empty() {
        s.push(" (");
        s.push_list(&clause.targets, ", ", |s, target| target.serialize(s));
        s.push(")");
        if let Some(condition) = &clause.condition {
            s.push(" WHERE ");
            condition.serialize(s);
        }
    }
    match &clause.action {
        ConflictAction::Nothing => s.push(" DO NOTHING"),
        ConflictAction::Update(update) => {
            s.push(" DO UPDATE SET ");
            write_assignments(&update.assignments, s);
            if let Some(predicate) = &update.predicate {
                s.push(" WHERE ");
                predicate.serialize(s);
            }
        }
        ConflictAction::Custom(expr) => {
            s.push(" ");
            expr.serialize(s);
        }
    }
}

impl Insert {
    /// Writes the INSERT, including its conflict clause, into `serializer`.
    pub fn serialize(&self, s: &mut Serializer<'_>) {
        write_insert(self, self.conflict.as_ref(), s);
    }
}

impl Upsert {
    /// Writes the INSERT with this upsert's conflict clause into `serializer`.
    pub fn serialize(&self, s: &mut Serializer<'_>) {
        write_insert(&self.insert, Some(&self.conflict), s);
    }
}
