use std::process::ExitCode;

use clap::Parser;
use mdtodo::cli::{Arguments, ExitStatus};

fn main() -> ExitCode {
    let args = Arguments::parse();

    match mdtodo::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
