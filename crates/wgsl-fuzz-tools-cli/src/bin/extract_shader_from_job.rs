//! `extract-shader-from-job` entry point.

use wgsl_fuzz_tools_cli::{self as cli, ExtractArgs};

fn main() {
    cli::init();

    let args: ExtractArgs = cli::parse_args();

    if let Err(err) = cli::run_extract(&args) {
        cli::fail(&err);
    }
}
