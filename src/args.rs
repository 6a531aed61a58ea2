pub mod types;
pub mod validation;

pub use types::{Args, CleanArgs};

use clap::Parser;

/// Parse the command line into validated, resolved arguments.
#[must_use]
pub fn args_checks() -> CleanArgs {
    let args = Args::parse();
    args.resolve()
}
