//! Verbatim reconstruction of leading documentation text.
//!
//! In Rust, doc comments (`///`) are stored as `#[doc = "..."]` attributes.
//! The generator copies documentation into its output verbatim so that
//! existing API documentation survives, so this module reconstructs the
//! original `///` lines without trimming or reformatting them.

use syn::Attribute;

/// Reconstruct the raw leading doc text from a declaration's attributes.
///
/// Each `#[doc = "..."]` attribute becomes one `///`-prefixed line,
/// preserving the stored text exactly (including its leading space).
/// Returns the empty string when no doc attributes are present.
#[must_use]
pub fn raw_doc_text(attrs: &[Attribute]) -> String {
    let mut out = String::new();
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("doc")) {
        if let syn::Meta::NameValue(meta) = &attr.meta
            && let syn::Expr::Lit(syn::ExprLit {
                lit: syn::Lit::Str(lit_str),
                ..
            }) = &meta.value
        {
            out.push_str("///");
            out.push_str(&lit_str.value());
            out.push('\n');
        }
    }
    out
}
