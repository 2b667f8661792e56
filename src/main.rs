//! Binary entrypoint for the convodash terminal dashboard.

use std::process::ExitCode;

use convodash::app;

/// Parse the command line, run one upload/render cycle, and exit.
fn main() -> ExitCode {
    app::run()
}
