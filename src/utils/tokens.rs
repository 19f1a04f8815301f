//! Compact rendering of type tokens to source text.

use proc_macro2::{Delimiter, TokenStream, TokenTree};
use quote::ToTokens;

/// Render a type to its literal source text.
///
/// `TokenStream::to_string` pads every punct (`Vec < Order >`), so this
/// walks the token tree and re-spaces it to read like the declared source
/// (`Vec<Order>`, `HashMap<String, u32>`).
#[must_use]
pub fn type_text(ty: &syn::Type) -> String {
    let mut out = String::new();
    push_tokens(ty.to_token_stream(), &mut out);
    out
}

fn push_tokens(stream: TokenStream, out: &mut String) {
    for token in stream {
        match token {
            TokenTree::Ident(ident) => push_word(&ident.to_string(), out),
            TokenTree::Literal(lit) => push_word(&lit.to_string(), out),
            TokenTree::Punct(punct) => {
                out.push(punct.as_char());
                if punct.as_char() == ',' {
                    out.push(' ');
                }
            }
            TokenTree::Group(group) => {
                let (open, close) = match group.delimiter() {
                    Delimiter::Parenthesis => ("(", ")"),
                    Delimiter::Bracket => ("[", "]"),
                    Delimiter::Brace => ("{", "}"),
                    Delimiter::None => ("", "")
                };
                out.push_str(open);
                push_tokens(group.stream(), out);
                out.push_str(close);
            }
        }
    }
}

/// Append a word, separating it from a preceding word with a single space.
fn push_word(word: &str, out: &mut String) {
    if out
        .chars()
        .next_back()
        .is_some_and(|c| c.is_alphanumeric() || c == '_')
    {
        out.push(' ');
    }
    out.push_str(word);
}
