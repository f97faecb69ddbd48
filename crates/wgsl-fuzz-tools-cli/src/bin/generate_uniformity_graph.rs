//! `generate-uniformity-graph` entry point.

use wgsl_fuzz_tools_cli::{self as cli, GraphArgs};

fn main() {
    cli::init();

    let args: GraphArgs = cli::parse_args();

    if let Err(err) = cli::run_graph(&args) {
        cli::fail(&err);
    }
}
