//! Generation pass orchestration.
//!
//! One pass per host compilation event: scan → extract → render → emit,
//! synchronously and to completion. There is no shared mutable state
//! between passes or between the two category pipelines.

use tracing::info;

use crate::{
    emit::ArtifactSink,
    error::GeneratorError,
    extract,
    model::{Category, EndpointDescriptor, GeneratedArtifact, TypeDecl},
    scan,
    template::{self, TemplateSet}
};

/// Drives one generation pass over a compilation snapshot.
pub struct Generator {
    templates: TemplateSet
}

impl Generator {
    /// Create a generator over the host-provided template set.
    #[must_use]
    pub fn new(templates: TemplateSet) -> Self {
        Self { templates }
    }

    /// Run one pass and publish both artifacts to the sink.
    ///
    /// Both templates are loaded before anything is rendered, so a missing
    /// or unreadable template aborts the pass before any artifact is
    /// registered — the pass produces no output at all. The command
    /// artifact is emitted first, then the query artifact; both are
    /// produced even when their descriptor lists are empty.
    ///
    /// # Errors
    ///
    /// [`GeneratorError::MissingTemplate`] or
    /// [`GeneratorError::TemplateRead`] when a template cannot be obtained;
    /// [`GeneratorError::Emit`] when the sink rejects an artifact.
    pub fn execute(
        &self,
        snapshot: &[TypeDecl],
        sink: &mut dyn ArtifactSink
    ) -> Result<(), GeneratorError> {
        let scan = scan::scan(snapshot);

        let command_template = self
            .templates
            .load(Category::Command.template_filename())?;
        let query_template =
            self.templates.load(Category::Query.template_filename())?;

        emit(Category::Command, &scan.commands, &command_template, sink)?;
        emit(Category::Query, &scan.queries, &query_template, sink)
    }
}

/// Render one category and hand the artifact to the sink.
fn emit(
    category: Category,
    decls: &[&TypeDecl],
    template: &str,
    sink: &mut dyn ArtifactSink
) -> Result<(), GeneratorError> {
    let descriptors: Vec<EndpointDescriptor> =
        decls.iter().map(|decl| extract::descriptor(decl)).collect();
    let source_text = template::render(category, &descriptors, template);
    let file_name = category.artifact_name().to_string();

    info!(
        artifact = %file_name,
        endpoints = descriptors.len(),
        "emitting generated artifact"
    );
    sink.add_source(GeneratedArtifact {
        file_name: file_name.clone(),
        source_text
    })
    .map_err(|source| GeneratorError::Emit { file_name, source })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::{emit::MemorySink, parse::snapshot_from_source};

    fn template_set(dir: &tempfile::TempDir) -> TemplateSet {
        let command = dir.path().join("CommandClassTemplate.txt");
        let query = dir.path().join("QueryClassTemplate.txt");
        fs::write(&command, "// commands\n###Commands###\n").unwrap();
        fs::write(&query, "// queries\n###Queries###\n").unwrap();
        TemplateSet::new(vec![command, query])
    }

    #[test]
    fn pass_emits_exactly_two_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = snapshot_from_source(
            "pub struct CreateOrder;\n\
             impl ICommand<String> for CreateOrder {}"
        )
        .unwrap();

        let mut sink = MemorySink::default();
        Generator::new(template_set(&dir))
            .execute(&snapshot, &mut sink)
            .unwrap();

        let names: Vec<&str> = sink
            .artifacts
            .iter()
            .map(|a| a.file_name.as_str())
            .collect();
        assert_eq!(
            names,
            ["generated_command_endpoints.rs", "generated_query_endpoints.rs"]
        );
    }

    #[test]
    fn empty_snapshot_still_produces_both_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = MemorySink::default();

        Generator::new(template_set(&dir))
            .execute(&[], &mut sink)
            .unwrap();

        assert_eq!(sink.artifacts.len(), 2);
        assert_eq!(sink.artifacts[0].source_text, "// commands\n\n");
        assert_eq!(sink.artifacts[1].source_text, "// queries\n\n");
    }

    #[test]
    fn missing_template_aborts_with_no_output() {
        let dir = tempfile::tempdir().unwrap();
        let command = dir.path().join("CommandClassTemplate.txt");
        fs::write(&command, "###Commands###").unwrap();

        let mut sink = MemorySink::default();
        let err = Generator::new(TemplateSet::new(vec![command]))
            .execute(&[], &mut sink)
            .unwrap_err();

        assert!(matches!(
            err,
            GeneratorError::MissingTemplate { ref file_name }
                if file_name == "QueryClassTemplate.txt"
        ));
        assert!(sink.artifacts.is_empty());
    }
}
