use std::process::ExitCode;

use clap::Parser;
use log::error;
use opcode_rekey::args::Args;

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = opcode_rekey::setup_logging(&args.log_path) {
        eprintln!("Error: unable to set up logging: {}", e);
        return ExitCode::FAILURE;
    }

    match opcode_rekey::run(&args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            // Printed outside the log filter so RUST_LOG=off still reports it.
            eprintln!("Error: {}", e);
            if args.log_path.is_some() {
                error!("{}", e);
            }
            ExitCode::FAILURE
        }
    }
}
