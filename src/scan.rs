//! Structural classification of type declarations.
//!
//! This is a pure fold over the snapshot: no visitor state, no shared
//! mutation. Each declaration is matched against the marker patterns in
//! base-list order and lands in at most one of the two output sequences,
//! which both preserve declaration-encounter order.

use tracing::debug;

use crate::model::{Category, Classification, TypeDecl};

/// Classify one declaration by its base list.
///
/// Iterates base entries in declared order and returns on the first entry
/// that is a single-type-argument reference named exactly `ICommand` or
/// `IQuery`. First match wins: a declaration listing both markers is
/// classified solely by whichever appears first, and the remaining entries
/// are never inspected. Entries with any other name or arity are skipped.
///
/// A declaration with no base list, or whose base list contains no match,
/// is [`Classification::Unclassified`].
#[must_use]
pub fn classify(decl: &TypeDecl) -> Classification {
    for base in &decl.bases {
        if base.type_args.len() != 1 {
            continue;
        }
        if base.ident == Category::Command.marker() {
            return Classification::Command;
        }
        if base.ident == Category::Query.marker() {
            return Classification::Query;
        }
    }
    Classification::Unclassified
}

/// The two classified sequences produced by a scan.
#[derive(Debug, Default)]
pub struct Scan<'a> {
    /// Declarations classified as commands, in encounter order.
    pub commands: Vec<&'a TypeDecl>,

    /// Declarations classified as queries, in encounter order.
    pub queries: Vec<&'a TypeDecl>
}

/// Scan the full ordered snapshot into command and query sequences.
///
/// Unclassified declarations are silently skipped; the scanner must
/// tolerate arbitrary unrelated declarations in a real codebase.
#[must_use]
pub fn scan(decls: &[TypeDecl]) -> Scan<'_> {
    decls.iter().fold(Scan::default(), |mut acc, decl| {
        match classify(decl) {
            Classification::Command => {
                debug!(name = %decl.name, "classified as command");
                acc.commands.push(decl);
            }
            Classification::Query => {
                debug!(name = %decl.name, "classified as query");
                acc.queries.push(decl);
            }
            Classification::Unclassified => {}
        }
        acc
    })
}
