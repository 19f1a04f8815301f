//! Artifact publishing.
//!
//! Publishing is the host's side effect: the generator core renders text
//! and hands it over through [`ArtifactSink`], it never writes files
//! itself. Hosts pick the sink that matches their build — a directory
//! writer for `build.rs`, an in-memory collector for tests.

use std::{
    fs, io,
    path::PathBuf
};

use crate::model::GeneratedArtifact;

/// Host-side surface that registers generated sources with the toolchain.
pub trait ArtifactSink {
    /// Publish one finished artifact.
    ///
    /// # Errors
    ///
    /// Implementations report their own IO failures; the generator maps
    /// them to [`crate::GeneratorError::Emit`].
    fn add_source(&mut self, artifact: GeneratedArtifact) -> io::Result<()>;
}

/// Sink that writes each artifact into a directory.
///
/// The usual host for a `build.rs` pass, pointed at `OUT_DIR` so the
/// generated files can be pulled in with `include!`.
#[derive(Debug)]
pub struct FsSink {
    out_dir: PathBuf
}

impl FsSink {
    /// Create a sink writing into `out_dir`. The directory must exist.
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into()
        }
    }
}

impl ArtifactSink for FsSink {
    fn add_source(&mut self, artifact: GeneratedArtifact) -> io::Result<()> {
        fs::write(self.out_dir.join(&artifact.file_name), artifact.source_text)
    }
}

/// Collecting sink for tests and in-process hosts.
#[derive(Debug, Default)]
pub struct MemorySink {
    /// Artifacts published so far, in emission order.
    pub artifacts: Vec<GeneratedArtifact>
}

impl ArtifactSink for MemorySink {
    fn add_source(&mut self, artifact: GeneratedArtifact) -> io::Result<()> {
        self.artifacts.push(artifact);
        Ok(())
    }
}
