//! CLI logic for the wgsl-fuzz utilities.
//!
//! One `run_*` function per binary, plus the shared argument-parsing and
//! startup plumbing. The binaries themselves are thin wrappers around these
//! functions.

mod args;

pub use args::{ExtractArgs, GraphArgs, ReplaceArgs};

use std::fs;
use std::process;

use clap::Parser;
use clap::error::ErrorKind;
use log::{debug, error, info};

use wgsl_fuzz_tools::{WgslFuzzError, digraph, job, uniformity};

/// Parse command-line arguments, exiting on failure.
///
/// Usage errors (wrong argument count, unknown flags) print clap's message
/// to standard output and exit with status 1; `--help` and `--version`
/// print and exit 0.
pub fn parse_args<T: Parser>() -> T {
    match T::try_parse() {
        Ok(args) => args,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                let _ = err.print();
                process::exit(0);
            }
            _ => {
                print!("{}", err.render());
                process::exit(1);
            }
        },
    }
}

/// Install the panic hook and logger shared by all binaries.
pub fn init() {
    miette::set_panic_hook();
    env_logger::Builder::from_env(env_logger::Env::default()).init();
}

/// Log `err` and exit with status 1.
pub fn fail(err: &WgslFuzzError) -> ! {
    error!("{err}");
    process::exit(1);
}

/// Print the shader text stored in a job file to stdout.
pub fn run_extract(args: &ExtractArgs) -> Result<(), WgslFuzzError> {
    debug!(args:?; "Extracting shader text");

    let job = job::read(&args.job)?;
    println!("{}", job::shader_text(&job)?);

    Ok(())
}

/// Overwrite the shader text stored in a job file from a shader file.
pub fn run_replace(args: &ReplaceArgs) -> Result<(), WgslFuzzError> {
    debug!(args:?; "Replacing shader text");

    let mut job = job::read(&args.job)?;
    let shader_text = fs::read_to_string(&args.shader)?;
    job::set_shader_text(&mut job, shader_text)?;
    job::write(&args.job, &job)?;

    info!(job:? = args.job; "Shader text replaced");
    Ok(())
}

/// Compile a shader, extract its uniformity digraph, and render it to a PNG.
pub fn run_graph(args: &GraphArgs) -> Result<(), WgslFuzzError> {
    debug!(args:?; "Generating uniformity graph");

    let compiler_output = uniformity::compile(&args.shader)?;

    let graph = digraph::extract(&compiler_output);
    if graph.is_empty() {
        return Err(WgslFuzzError::NoDigraph);
    }

    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| uniformity::default_output_name(&args.shader));

    uniformity::render(&graph, &output_path)
}
