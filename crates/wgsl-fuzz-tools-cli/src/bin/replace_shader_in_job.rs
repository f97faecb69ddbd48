//! `replace-shader-in-job` entry point.

use wgsl_fuzz_tools_cli::{self as cli, ReplaceArgs};

fn main() {
    cli::init();

    let args: ReplaceArgs = cli::parse_args();

    if let Err(err) = cli::run_replace(&args) {
        cli::fail(&err);
    }
}
