use crate::utils::{
    error::AppError,
    fspath::ensure_output_directory,
    invocation::{InvocationRequest, execute},
};

use std::process::ExitStatus;
use tracing::info;

/// Runs `modkit extract full` for one modBAM
///
/// # Arguments
/// - `request`: InvocationRequest holding the input, reference and output paths
///
/// # Errors
/// Returns AppError when the output directory cannot be created, modkit cannot be
/// started, or modkit exits unsuccessfully
pub fn extract_full(request: InvocationRequest) -> Result<(), AppError> {
    ensure_output_directory(request.out_tsv())?;

    let cmd = request.build_command();
    let status = execute(&cmd)?;
    check_status(status)?;

    info!("Wrote {}", request.out_tsv().display());
    Ok(())
}

/// Turns a finished child's status into the wrapper's result
pub fn check_status(status: ExitStatus) -> Result<(), AppError> {
    if status.success() {
        return Ok(());
    }
    match status.code() {
        Some(code) => Err(AppError::ToolFailed { code }),
        None => Err(AppError::ToolKilled { signal: terminating_signal(&status) }),
    }
}

#[cfg(unix)]
fn terminating_signal(status: &ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
fn terminating_signal(_status: &ExitStatus) -> Option<i32> {
    None
}
