//! wgsl-fuzz-tools - Shader job manipulation and uniformity graph extraction.
//!
//! Library support for the wgsl-fuzz command-line utilities: reading and
//! rewriting the `shaderText` field of JSON job documents, extracting an
//! embedded GraphViz digraph from WGSL compiler output, and rendering that
//! digraph to an image through an external layout tool.

pub mod digraph;
pub mod job;
pub mod uniformity;

mod error;

pub use error::WgslFuzzError;
