//! Metadata extraction for classified declarations.
//!
//! Turns a classified [`TypeDecl`] into the [`EndpointDescriptor`] the
//! template engine renders from.

use tracing::warn;

use crate::model::{Category, EndpointDescriptor, TypeDecl};

/// Build the endpoint descriptor for a classified declaration.
///
/// The result type is recovered by re-scanning the base list, independently
/// of how the declaration was classified, for a marker entry with exactly
/// one type argument. If none is found — a defensive branch that should be
/// unreachable after a successful classification — the result type degrades
/// to the empty string and generation continues.
#[must_use]
pub fn descriptor(decl: &TypeDecl) -> EndpointDescriptor {
    let result_type = lookup_result_type(decl).unwrap_or_else(|| {
        warn!(
            name = %decl.name,
            "no marker base with a single type argument; result type degrades to empty"
        );
        String::new()
    });

    EndpointDescriptor {
        name: decl.name.clone(),
        result_type,
        doc_comment: decl.doc.clone()
    }
}

/// Literal text of the first marker entry's sole type argument.
fn lookup_result_type(decl: &TypeDecl) -> Option<String> {
    decl.bases
        .iter()
        .find(|base| {
            (base.ident == Category::Command.marker()
                || base.ident == Category::Query.marker())
                && base.type_args.len() == 1
        })
        .map(|base| base.type_args[0].clone())
}
