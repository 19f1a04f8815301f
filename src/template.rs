//! Template loading and endpoint rendering.
//!
//! Templates are static text scaffolds carrying one placeholder token per
//! category (`###Commands###`, `###Queries###`). Rendering does no
//! templating-language parsing: one fixed-shape block is produced per
//! descriptor, the blocks are concatenated in descriptor order, and the
//! result is substituted for the token with a single literal substring
//! replacement.
//!
//! No escaping is applied to interpolated values. That is the documented
//! contract: documentation or type-argument text containing the placeholder
//! token will corrupt the output, and templates must treat the token as
//! reserved.

use std::{
    fs,
    path::{Path, PathBuf}
};

use convert_case::{Case, Casing};

use crate::{
    error::GeneratorError,
    model::{Category, EndpointDescriptor}
};

/// The host-provided set of auxiliary template files.
///
/// Files are matched by exact, case-sensitive filename suffix and read
/// synchronously on every pass — no caching, no retries.
#[derive(Debug, Clone)]
pub struct TemplateSet {
    files: Vec<PathBuf>
}

impl TemplateSet {
    /// Wrap the auxiliary file paths supplied by the host build.
    #[must_use]
    pub fn new(files: Vec<PathBuf>) -> Self {
        Self { files }
    }

    /// Convenience constructor over a directory's worth of template files.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::TemplateRead`] when the directory cannot
    /// be listed.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, GeneratorError> {
        let dir = dir.as_ref();
        let entries =
            fs::read_dir(dir).map_err(|source| GeneratorError::TemplateRead {
                path: dir.to_path_buf(),
                source
            })?;
        let files = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .collect();
        Ok(Self { files })
    }

    /// Load a template by filename suffix.
    ///
    /// # Errors
    ///
    /// [`GeneratorError::MissingTemplate`] when no path in the set ends
    /// with `filename`; [`GeneratorError::TemplateRead`] when the matched
    /// file cannot be read. Both are fatal to the pass.
    pub fn load(&self, filename: &str) -> Result<String, GeneratorError> {
        let path = self
            .files
            .iter()
            .find(|path| path.to_string_lossy().ends_with(filename))
            .ok_or_else(|| GeneratorError::MissingTemplate {
                file_name: filename.to_string()
            })?;
        fs::read_to_string(path).map_err(|source| {
            GeneratorError::TemplateRead {
                path: path.clone(),
                source
            }
        })
    }
}

/// Render the final source text for one category.
///
/// Blocks are concatenated in descriptor order (which equals declaration
/// encounter order) and substituted for the category's placeholder token
/// once. A template lacking the token is returned unchanged — the endpoints
/// are silently dropped, not an error.
#[must_use]
pub fn render(
    category: Category,
    descriptors: &[EndpointDescriptor],
    template: &str
) -> String {
    let mut blocks = String::new();
    for descriptor in descriptors {
        blocks.push_str(&render_block(category, descriptor));
    }
    template.replacen(category.placeholder(), &blocks, 1)
}

/// One fixed-shape endpoint block.
///
/// The doc comment is inserted verbatim; payload type is the descriptor
/// name, response type is the descriptor result type, and the method name
/// is the snake_case of the descriptor name.
fn render_block(category: Category, descriptor: &EndpointDescriptor) -> String {
    let fn_name = descriptor.name.to_case(Case::Snake);
    let note = match category {
        Category::Command => {
            "Forwards the command to its registered handler and returns the operation status."
        }
        Category::Query => {
            "Forwards the query to its registered handler and returns the requested data."
        }
    };

    format!(
        "\n{doc}    /// Generated endpoint for [`{name}`].\n    ///\n    /// {note}\n    pub async fn {fn_name}(&self, request: {name}) -> {result} {{\n        self.mediator.send(request).await\n    }}\n",
        doc = descriptor.doc_comment,
        name = descriptor.name,
        result = descriptor.result_type
    )
}
