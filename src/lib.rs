#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

//! # endpoint-gen
//!
//! Source generator that scans the structural declarations of a program for
//! message types marked as commands or queries and synthesizes the mediator
//! dispatch endpoints for them, eliminating the hand-written boilerplate
//! that forwards each request object to a mediator and returns its result.
//!
//! A type opts in structurally, through a single-type-argument marker named
//! exactly `ICommand` or `IQuery` in its base list:
//!
//! ```rust,ignore
//! /// Create a new order
//! pub struct CreateOrder {
//!     pub id: u32,
//!     pub customer_id: u32,
//! }
//!
//! impl ICommand<String> for CreateOrder {}
//! ```
//!
//! A generation pass scans the snapshot, extracts one [`EndpointDescriptor`]
//! per classified declaration (name, declared result type, leading doc text
//! verbatim), renders one endpoint block per descriptor into the category's
//! template at its placeholder token (`###Commands###` / `###Queries###`),
//! and publishes the two finished artifacts through an [`ArtifactSink`].
//! Matching is purely structural — no type resolution — and arbitrary
//! unrelated declarations are tolerated silently.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! // build.rs
//! use endpoint_gen::{FsSink, Generator, TemplateSet};
//!
//! fn main() {
//!     let source = std::fs::read_to_string("src/messages.rs").unwrap();
//!     let snapshot = endpoint_gen::snapshot_from_source(&source).unwrap();
//!
//!     let templates = TemplateSet::from_dir("templates").unwrap();
//!     let mut sink = FsSink::new(std::env::var("OUT_DIR").unwrap());
//!     Generator::new(templates)
//!         .execute(&snapshot, &mut sink)
//!         .expect("generation pass failed");
//! }
//! ```
//!
//! The generated files can then be pulled into the crate:
//!
//! ```rust,ignore
//! include!(concat!(env!("OUT_DIR"), "/generated_command_endpoints.rs"));
//! include!(concat!(env!("OUT_DIR"), "/generated_query_endpoints.rs"));
//! ```
//!
//! ## Error model
//!
//! A missing or unreadable template is fatal: the pass aborts before any
//! artifact is registered. A declaration whose result type cannot be
//! extracted degrades to an empty string and generation continues. All
//! other malformed input degrades silently to "not classified".
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events (`debug!` per classification,
//! `info!` per artifact, `warn!` on degraded extraction) and installs no
//! subscriber; hosts choose their own.

mod emit;
mod error;
mod extract;
mod generator;
mod model;
mod parse;
mod scan;
mod template;
mod utils;

pub use emit::{ArtifactSink, FsSink, MemorySink};
pub use error::GeneratorError;
pub use extract::descriptor;
pub use generator::Generator;
pub use model::{
    BaseTypeRef, Category, Classification, EndpointDescriptor,
    GeneratedArtifact, TypeDecl
};
pub use parse::{
    snapshot_from_file, snapshot_from_files, snapshot_from_source,
    snapshot_from_sources
};
pub use scan::{Scan, classify, scan};
pub use template::{TemplateSet, render};
