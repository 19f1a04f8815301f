//! Fatal conditions for a generation pass.
//!
//! Only template problems and sink failures abort a pass. Every malformed
//! input shape — ambiguous base lists, declarations without base lists,
//! unmatched marker names — degrades silently to "not classified", and a
//! missing result type degrades to an empty string; neither is surfaced
//! here.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that abort a generation pass before any artifact is registered.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// A required template file is absent from the auxiliary file set.
    #[error("template file `{file_name}` was not found in the template set")]
    MissingTemplate {
        /// The filename suffix that matched no file in the set.
        file_name: String
    },

    /// A template file matched but could not be read.
    #[error("failed to read template `{path}`")]
    TemplateRead {
        /// Path of the matched template file.
        path: PathBuf,
        /// Underlying IO failure.
        #[source]
        source: io::Error
    },

    /// The artifact sink rejected a generated artifact.
    #[error("failed to publish generated artifact `{file_name}`")]
    Emit {
        /// File name of the artifact being published.
        file_name: String,
        /// Underlying IO failure reported by the sink.
        #[source]
        source: io::Error
    }
}
