//! Error types for wgsl-fuzz-tools operations.
//!
//! This module provides the main error type [`WgslFuzzError`] which wraps
//! the error conditions that can occur while manipulating shader jobs and
//! generating uniformity graphs.

use std::io;

use thiserror::Error;

/// The main error type for wgsl-fuzz-tools operations.
#[derive(Debug, Error)]
pub enum WgslFuzzError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("job document has no string 'shaderText' field")]
    MissingShaderText,

    #[error(
        "Could not find a digraph in the compiler output. Check that \
         'TINT_DUMP_UNIFORMITY_GRAPH' is set to 1 in \
         'src/tint/lang/wgsl/resolver/uniformity.cc'"
    )]
    NoDigraph,

    #[error("failed to launch '{tool}': {source}")]
    ToolLaunch { tool: String, source: io::Error },

    #[error("'{tool}' exited unsuccessfully (code {code:?})")]
    ToolExit { tool: String, code: Option<i32> },
}

impl WgslFuzzError {
    /// Create a `ToolLaunch` error for the named external tool.
    pub fn tool_launch(tool: impl Into<String>, source: io::Error) -> Self {
        Self::ToolLaunch {
            tool: tool.into(),
            source,
        }
    }
}
