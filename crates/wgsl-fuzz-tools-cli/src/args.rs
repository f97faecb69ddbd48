//! Command-line argument definitions for the wgsl-fuzz utilities.
//!
//! Each binary has its own [`clap::Parser`] structure; all three tools are
//! single-purpose and take positional paths, with one optional output flag
//! on the graph generator.

use std::path::PathBuf;

use clap::Parser;

/// Arguments for `extract-shader-from-job`.
#[derive(Parser, Debug)]
#[command(version, about = "Print the shader text stored in a JSON job file")]
pub struct ExtractArgs {
    /// Path to the job JSON file
    pub job: PathBuf,
}

/// Arguments for `replace-shader-in-job`.
#[derive(Parser, Debug)]
#[command(version, about = "Replace the shader text stored in a JSON job file")]
pub struct ReplaceArgs {
    /// Path to the job JSON file
    pub job: PathBuf,

    /// Path to the shader text file
    pub shader: PathBuf,
}

/// Arguments for `generate-uniformity-graph`.
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Generate the uniformity graph for a WGSL shader using tint"
)]
pub struct GraphArgs {
    /// WGSL shader to be compiled
    pub shader: PathBuf,

    /// Output filename for the PNG image; defaults to the shader name with
    /// a .png extension
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
