//! Compiling a shader and rendering its uniformity graph.
//!
//! The compiler is invoked synchronously and its stdout is scanned for the
//! dumped digraph; rendering hands the digraph text to an external GraphViz
//! layout tool through a temporary file.

use std::env;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

use log::{debug, info};
use tempfile::NamedTempFile;

use crate::WgslFuzzError;

/// Environment variable overriding the WGSL compiler binary.
const TINT_ENV: &str = "WGSL_FUZZ_TINT";

/// Environment variable overriding the GraphViz layout binary.
const DOT_ENV: &str = "WGSL_FUZZ_DOT";

/// Name of the WGSL compiler binary, honoring the override.
fn compiler_tool() -> String {
    env::var(TINT_ENV).unwrap_or_else(|_| "tint".to_string())
}

/// Name of the layout binary, honoring the override.
fn layout_tool() -> String {
    env::var(DOT_ENV).unwrap_or_else(|_| "dot".to_string())
}

/// Run the WGSL compiler on `shader_path` and return its stdout.
///
/// The compiler's exit status is not inspected: the uniformity graph is
/// dumped during resolution and can be present even when compilation
/// ultimately fails. Stderr is captured and discarded.
///
/// # Errors
///
/// Returns [`WgslFuzzError::ToolLaunch`] if the compiler binary cannot be
/// started.
pub fn compile(shader_path: impl AsRef<Path>) -> Result<String, WgslFuzzError> {
    let shader_path = shader_path.as_ref();
    let tool = compiler_tool();
    debug!(tool = tool.as_str(), shader_path:?; "Invoking compiler");

    let output = Command::new(&tool)
        .arg(shader_path)
        .output()
        .map_err(|err| WgslFuzzError::tool_launch(&tool, err))?;

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Render digraph text to a PNG at `output_path`.
///
/// The graph text is written to a named temporary file and handed to the
/// layout tool; the temporary file is removed when this function returns,
/// whether rendering succeeded or not.
///
/// # Errors
///
/// Returns [`WgslFuzzError::ToolLaunch`] if the layout binary cannot be
/// started, and [`WgslFuzzError::ToolExit`] if it exits unsuccessfully.
pub fn render(graph: &str, output_path: impl AsRef<Path>) -> Result<(), WgslFuzzError> {
    let output_path = output_path.as_ref();
    let tool = layout_tool();

    let mut dot_file = NamedTempFile::new()?;
    dot_file.write_all(graph.as_bytes())?;
    dot_file.flush()?;

    debug!(tool = tool.as_str(), output_path:?; "Rendering digraph");

    let status = Command::new(&tool)
        .arg(dot_file.path())
        .arg("-Tpng")
        .arg("-o")
        .arg(output_path)
        .status()
        .map_err(|err| WgslFuzzError::tool_launch(&tool, err))?;

    if !status.success() {
        return Err(WgslFuzzError::ToolExit {
            tool,
            code: status.code(),
        });
    }

    info!(output_path:?; "Uniformity graph rendered");
    Ok(())
}

/// Default image name for a shader: its file name with a `.png` extension,
/// in the current directory.
pub fn default_output_name(shader_path: impl AsRef<Path>) -> PathBuf {
    let name = shader_path
        .as_ref()
        .file_name()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("out"));
    name.with_extension("png")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_name_swaps_the_extension() {
        assert_eq!(
            default_output_name("shader.wgsl"),
            PathBuf::from("shader.png")
        );
    }

    #[test]
    fn default_output_name_drops_directories() {
        assert_eq!(
            default_output_name("jobs/deep/shader.wgsl"),
            PathBuf::from("shader.png")
        );
    }

    #[test]
    fn default_output_name_handles_missing_extension() {
        assert_eq!(default_output_name("shader"), PathBuf::from("shader.png"));
    }
}
