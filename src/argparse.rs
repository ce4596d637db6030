pub mod extractfull;

pub use self::extractfull::ExtractFullArgs;

use crate::utils::error::AppError;
use clap::Parser;
use std::ffi::OsString;

/// Parses the raw argument vector, program name first.
///
/// # Errors
/// Returns `AppError::Usage` for missing or malformed flags, and for `--help`/`--version`
pub fn parse_args<I, T>(argv: I) -> Result<ExtractFullArgs, AppError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Ok(ExtractFullArgs::try_parse_from(argv)?)
}
