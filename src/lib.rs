pub mod args;
pub mod constants;
pub mod converter;
pub mod table;

use converter::{ConvertError, ConvertOptions, ConvertSummary};
use std::io;

use std::path::PathBuf;

use std::io::Write;

pub fn setup_logging(log_path: &Option<PathBuf>) -> Result<(), io::Error> {
    let env = env_logger::Env::default().default_filter_or("info");
    let mut builder = env_logger::Builder::from_env(env);
    builder.format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()));

    // If a path is provided, redirect output to the file
    if let Some(path) = log_path {
        let file = std::fs::File::create(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

/// Converts `args.input` into `args.output`, optionally reading the result
/// back to check it. Logging must already be set up.
pub fn run(args: &args::Args) -> Result<ConvertSummary, ConvertError> {
    let options = ConvertOptions::from(args);
    let summary = converter::convert_file(&args.input, &args.output, &options)?;

    if args.verify {
        table::verify_output(&args.output, summary.distinct_keys)?;
    }

    Ok(summary)
}
