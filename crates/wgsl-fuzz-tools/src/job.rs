//! Reading and rewriting shader job documents.
//!
//! A job is a JSON document describing one fuzzing test case. Only the
//! `shaderText` field is interpreted here; the rest of the document is
//! opaque and passes through unchanged.

use std::fs;
use std::path::Path;

use log::debug;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::WgslFuzzError;

/// Name of the interpreted field in a job document.
const SHADER_TEXT_FIELD: &str = "shaderText";

/// Read and parse a job file.
pub fn read(path: impl AsRef<Path>) -> Result<Value, WgslFuzzError> {
    let path = path.as_ref();
    debug!(path:?; "Reading job file");
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Serialize a job document back to `path` with 4-space indentation.
pub fn write(path: impl AsRef<Path>, job: &Value) -> Result<(), WgslFuzzError> {
    let path = path.as_ref();
    debug!(path:?; "Writing job file");

    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    serde::Serialize::serialize(job, &mut serializer)?;

    fs::write(path, buf)?;
    Ok(())
}

/// The job's shader text.
///
/// # Errors
///
/// Returns [`WgslFuzzError::MissingShaderText`] if the field is absent or is
/// not a string.
pub fn shader_text(job: &Value) -> Result<&str, WgslFuzzError> {
    job.get(SHADER_TEXT_FIELD)
        .and_then(Value::as_str)
        .ok_or(WgslFuzzError::MissingShaderText)
}

/// Overwrite the job's shader text, leaving all other fields untouched.
///
/// # Errors
///
/// Returns [`WgslFuzzError::MissingShaderText`] if the document is not a
/// JSON object.
pub fn set_shader_text(job: &mut Value, text: impl Into<String>) -> Result<(), WgslFuzzError> {
    let object = job.as_object_mut().ok_or(WgslFuzzError::MissingShaderText)?;
    object.insert(SHADER_TEXT_FIELD.to_string(), Value::String(text.into()));
    Ok(())
}
