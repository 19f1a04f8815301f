//! Core data model for a generation pass.
//!
//! Everything here is plain, immutable data: the host parser adapter
//! builds a fresh snapshot per pass, the scanner,
//! extractor and template engine consume it read-only, and all values are
//! discarded once the pass's artifacts have been emitted. No state survives
//! between passes.

/// A read-only view of one declared type in the compilation snapshot.
///
/// Sourced from the host parser; the generator core never mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDecl {
    /// The declared type name (e.g., `CreateOrder`).
    pub name: String,

    /// Declared marker-trait references, in declaration order.
    ///
    /// The order is load-bearing: classification picks the *first* entry
    /// that matches a marker pattern.
    pub bases: Vec<BaseTypeRef>,

    /// Raw leading documentation text, one `///`-prefixed line per doc
    /// attribute, reconstructed verbatim. Empty if the type is undocumented.
    pub doc: String
}

/// One base-list entry: an unqualified trait identifier plus the literal
/// text of its generic type arguments.
///
/// Entries with zero or more than one type argument are representable but
/// never match the marker pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseTypeRef {
    /// The trait identifier (e.g., `ICommand`).
    pub ident: String,

    /// Literal source text of each generic type argument
    /// (e.g., `["Vec<Order>"]`).
    pub type_args: Vec<String>
}

/// Result of structurally matching one declaration against the marker
/// patterns.
///
/// A closed variant: every declaration is exactly one of these, and
/// `Unclassified` declarations are excluded from all further processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// First matching base entry was `ICommand<T>`.
    Command,
    /// First matching base entry was `IQuery<T>`.
    Query,
    /// No base entry matched. Silently skipped, never an error.
    Unclassified
}

/// Everything the template engine needs to render one endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointDescriptor {
    /// The declaration's own type name; doubles as the endpoint payload type.
    pub name: String,

    /// Literal text of the matched marker's sole type argument, or the empty
    /// string if extraction found no matching entry.
    pub result_type: String,

    /// Raw leading documentation text, copied verbatim into the rendered
    /// block.
    pub doc_comment: String
}

/// The two endpoint categories a pass generates, with their fixed
/// per-category constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Request types that cause a side effect (`ICommand<T>`).
    Command,
    /// Read-only request types (`IQuery<T>`).
    Query
}

impl Category {
    /// The marker identifier this category matches, exactly.
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Command => "ICommand",
            Self::Query => "IQuery"
        }
    }

    /// The placeholder token replaced in this category's template.
    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Command => "###Commands###",
            Self::Query => "###Queries###"
        }
    }

    /// Filename suffix used to locate this category's template file
    /// (case-sensitive).
    #[must_use]
    pub const fn template_filename(self) -> &'static str {
        match self {
            Self::Command => "CommandClassTemplate.txt",
            Self::Query => "QueryClassTemplate.txt"
        }
    }

    /// Fixed file name of the artifact this category emits.
    #[must_use]
    pub const fn artifact_name(self) -> &'static str {
        match self {
            Self::Command => "generated_command_endpoints.rs",
            Self::Query => "generated_query_endpoints.rs"
        }
    }
}

/// A finished generated source file, ready for the host to publish.
///
/// One per category per pass, produced even when no declarations were
/// classified into the category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    /// Fixed, category-derived file name.
    pub file_name: String,

    /// Final rendered source text.
    pub source_text: String
}
