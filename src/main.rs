use modkit_extract_full::argparse::parse_args;
use modkit_extract_full::run;
use modkit_extract_full::utils::{error::AppError, logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = match parse_args(std::env::args_os()) {
        Ok(args) => args,
        Err(AppError::Usage(err)) => err.exit(),
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::from(err.exit_status());
        }
    };
    logging::init();

    match run::extract_full(args.init()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::from(err.exit_status())
        }
    }
}
