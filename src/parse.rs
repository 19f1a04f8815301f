//! Host parser adapter: builds the compilation snapshot from Rust source.
//!
//! The generator core works on plain [`TypeDecl`] records; this module is
//! the bridge from declaration syntax to that model, built on [`syn`]. It
//! performs structural pattern matching only — no name resolution, no type
//! checking — and tolerates arbitrary unrelated items without failing.
//!
//! Snapshot construction runs two passes over the items:
//!
//! 1. every `struct` and `enum` item declares a type, in encounter order,
//!    with its leading doc text captured verbatim;
//! 2. every trait impl with a simple (unqualified, single-segment) trait
//!    path appends one base entry to the base list of the type it targets,
//!    in impl-encounter order.
//!
//! Qualified trait paths, negative impls and inherent impls are never
//! recorded: they can never match a marker pattern and carry no metadata
//! the generator uses.

use syn::{File, GenericArgument, Item, ItemImpl, PathArguments, Type};

use crate::{
    model::{BaseTypeRef, TypeDecl},
    utils::{docs, tokens}
};

/// Build the snapshot from a single parsed file.
#[must_use]
pub fn snapshot_from_file(file: &File) -> Vec<TypeDecl> {
    snapshot_from_files(std::slice::from_ref(file))
}

/// Build the snapshot from multiple parsed files, preserving file order.
///
/// Declarations and impls may live in different files; the base list of a
/// type collects matching impls from every file, in file-then-item order.
#[must_use]
pub fn snapshot_from_files(files: &[File]) -> Vec<TypeDecl> {
    let mut decls = Vec::new();
    for file in files {
        collect_declarations(file, &mut decls);
    }
    for file in files {
        for item in &file.items {
            if let Item::Impl(item_impl) = item {
                attach_base(item_impl, &mut decls);
            }
        }
    }
    decls
}

/// Parse one source text and build its snapshot.
///
/// # Errors
///
/// Returns the underlying [`syn::Error`] when the source is not valid Rust.
pub fn snapshot_from_source(source: &str) -> syn::Result<Vec<TypeDecl>> {
    let file: File = syn::parse_str(source)?;
    Ok(snapshot_from_file(&file))
}

/// Parse several source texts and build the combined snapshot.
///
/// # Errors
///
/// Returns the first [`syn::Error`] when any source is not valid Rust.
pub fn snapshot_from_sources<'a, I>(sources: I) -> syn::Result<Vec<TypeDecl>>
where
    I: IntoIterator<Item = &'a str>
{
    let files = sources
        .into_iter()
        .map(syn::parse_str)
        .collect::<syn::Result<Vec<File>>>()?;
    Ok(snapshot_from_files(&files))
}

/// First pass: record every struct and enum declaration.
fn collect_declarations(file: &File, decls: &mut Vec<TypeDecl>) {
    for item in &file.items {
        let (name, attrs) = match item {
            Item::Struct(item) => (item.ident.to_string(), &item.attrs),
            Item::Enum(item) => (item.ident.to_string(), &item.attrs),
            _ => continue
        };
        decls.push(TypeDecl {
            name,
            bases: Vec::new(),
            doc: docs::raw_doc_text(attrs)
        });
    }
}

/// Second pass: append one base entry per matching trait impl.
fn attach_base(item: &ItemImpl, decls: &mut [TypeDecl]) {
    let Some((polarity, path, _)) = &item.trait_ else {
        return;
    };
    if polarity.is_some() {
        return;
    }
    if path.leading_colon.is_some() || path.segments.len() != 1 {
        return;
    }

    let segment = &path.segments[0];
    let type_args = match &segment.arguments {
        PathArguments::AngleBracketed(args) => args
            .args
            .iter()
            .filter_map(|arg| match arg {
                GenericArgument::Type(ty) => Some(tokens::type_text(ty)),
                _ => None
            })
            .collect(),
        _ => Vec::new()
    };

    let Some(self_name) = self_type_name(&item.self_ty) else {
        return;
    };
    if let Some(decl) = decls.iter_mut().find(|decl| decl.name == self_name) {
        decl.bases.push(BaseTypeRef {
            ident: segment.ident.to_string(),
            type_args
        });
    }
}

/// Name of the impl's self type, when it is a plain path.
fn self_type_name(ty: &Type) -> Option<String> {
    match ty {
        Type::Path(type_path) if type_path.qself.is_none() => type_path
            .path
            .segments
            .last()
            .map(|segment| segment.ident.to_string()),
        _ => None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn struct_with_marker_impl_builds_base_list() {
        let decls = snapshot_from_source(
            "/// Create order\npub struct CreateOrder { pub id: u32 }\n\
             impl ICommand<String> for CreateOrder {}"
        )
        .unwrap();

        assert_eq!(decls.len(), 1);
        assert_eq!(decls[0].name, "CreateOrder");
        assert_eq!(decls[0].doc, "/// Create order\n");
        assert_eq!(decls[0].bases.len(), 1);
        assert_eq!(decls[0].bases[0].ident, "ICommand");
        assert_eq!(decls[0].bases[0].type_args, ["String"]);
    }

    #[test]
    fn impl_order_defines_base_list_order() {
        let decls = snapshot_from_source(
            "pub struct Ambiguous;\n\
             impl IQuery<u32> for Ambiguous {}\n\
             impl ICommand<String> for Ambiguous {}"
        )
        .unwrap();

        let idents: Vec<&str> =
            decls[0].bases.iter().map(|b| b.ident.as_str()).collect();
        assert_eq!(idents, ["IQuery", "ICommand"]);
    }

    #[test]
    fn qualified_trait_path_is_not_recorded() {
        let decls = snapshot_from_source(
            "pub struct Order;\n\
             impl markers::ICommand<String> for Order {}"
        )
        .unwrap();

        assert!(decls[0].bases.is_empty());
    }

    #[test]
    fn inherent_impl_is_not_recorded() {
        let decls = snapshot_from_source(
            "pub struct Order;\n\
             impl Order { pub fn total(&self) -> u32 { 0 } }"
        )
        .unwrap();

        assert!(decls[0].bases.is_empty());
    }

    #[test]
    fn non_generic_trait_is_recorded_without_arguments() {
        let decls = snapshot_from_source(
            "pub struct Order;\n\
             impl Sentinel for Order {}"
        )
        .unwrap();

        assert_eq!(decls[0].bases.len(), 1);
        assert_eq!(decls[0].bases[0].ident, "Sentinel");
        assert!(decls[0].bases[0].type_args.is_empty());
    }

    #[test]
    fn enum_declares_a_type() {
        let decls = snapshot_from_source(
            "/// Order state change\npub enum ChangeState { Open, Closed }\n\
             impl ICommand<String> for ChangeState {}"
        )
        .unwrap();

        assert_eq!(decls[0].name, "ChangeState");
        assert_eq!(decls[0].bases[0].ident, "ICommand");
    }

    #[test]
    fn impl_for_undeclared_type_is_ignored() {
        let decls = snapshot_from_source(
            "pub struct Order;\n\
             impl ICommand<String> for SomewhereElse {}"
        )
        .unwrap();

        assert_eq!(decls.len(), 1);
        assert!(decls[0].bases.is_empty());
    }

    #[test]
    fn declaration_order_spans_files() {
        let decls = snapshot_from_sources([
            "pub struct First;\nimpl ICommand<String> for First {}",
            "pub struct Second;\nimpl IQuery<u32> for Second {}"
        ])
        .unwrap();

        let names: Vec<&str> =
            decls.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["First", "Second"]);
    }

    #[test]
    fn impl_in_later_file_attaches_to_earlier_declaration() {
        let decls = snapshot_from_sources([
            "pub struct CreateOrder;",
            "impl ICommand<String> for CreateOrder {}"
        ])
        .unwrap();

        assert_eq!(decls[0].bases.len(), 1);
        assert_eq!(decls[0].bases[0].type_args, ["String"]);
    }

    #[test]
    fn generic_argument_text_is_literal() {
        let decls = snapshot_from_source(
            "pub struct ListAllOrders;\n\
             impl IQuery<Vec<Order>> for ListAllOrders {}"
        )
        .unwrap();

        assert_eq!(decls[0].bases[0].type_args, ["Vec<Order>"]);
    }

    #[test]
    fn unrelated_items_are_tolerated() {
        let decls = snapshot_from_source(
            "use std::fmt;\n\
             pub fn helper() {}\n\
             pub trait ICommand<T> {}\n\
             pub struct CreateOrder;\n\
             impl ICommand<String> for CreateOrder {}"
        )
        .unwrap();

        assert_eq!(decls.len(), 1);
        assert_eq!(decls[0].name, "CreateOrder");
    }

    #[test]
    fn invalid_source_is_an_error() {
        assert!(snapshot_from_source("struct {").is_err());
    }
}
