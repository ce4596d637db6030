use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Exit status used when the external tool cannot be located (shell convention)
pub const EXIT_TOOL_NOT_FOUND: u8 = 127;

/// Exit status used for every failure without a more specific code
pub const EXIT_FAILURE: u8 = 1;

/// Unified error handling type for the application
///
/// Uses thiserror for deriving error handling, providing clear error context information
#[derive(Debug, Error)]
pub enum AppError {
    /// Command line usage error
    #[error("{0}")]
    Usage(#[from] clap::Error),

    /// Output directory could not be created: {path:?}
    #[error("Cannot create output directory {path:?}: {source}")]
    OutputDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// System command not found: {0}
    #[error("System command not found: {0}")]
    ToolNotFound(String),

    /// The tool exists but could not be started
    #[error("Failed to start {tool}: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: io::Error,
    },

    /// modkit ran and exited with a non-zero code
    #[error("modkit extract full failed with exit code {code}")]
    ToolFailed { code: i32 },

    /// modkit was terminated before it could exit
    #[error("modkit extract full was terminated by signal {}", .signal.map_or_else(|| "unknown".to_string(), |s| s.to_string()))]
    ToolKilled { signal: Option<i32> },

    /// Command execution failed: {0}
    #[error("Command execution failed: {0}")]
    CommandError(String),
}

impl AppError {
    /// Process exit status the wrapper should terminate with for this error.
    ///
    /// A failing tool's own exit code is forwarded when it fits in a process status.
    pub fn exit_status(&self) -> u8 {
        match self {
            AppError::Usage(err) => u8::try_from(err.exit_code()).unwrap_or(EXIT_FAILURE),
            AppError::ToolNotFound(_) => EXIT_TOOL_NOT_FOUND,
            AppError::ToolFailed { code } => match u8::try_from(*code) {
                Ok(0) | Err(_) => EXIT_FAILURE,
                Ok(code) => code,
            },
            AppError::ToolKilled { signal: Some(signal) } => u8::try_from(128 + signal)
                .unwrap_or(EXIT_FAILURE),
            _ => EXIT_FAILURE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_tool_failed_display() {
        let app_error = AppError::ToolFailed { code: 17 };
        assert_eq!(
            app_error.to_string(),
            "modkit extract full failed with exit code 17"
        );
    }

    #[test]
    fn test_tool_failed_forwards_code() {
        assert_eq!(AppError::ToolFailed { code: 17 }.exit_status(), 17);
        assert_eq!(AppError::ToolFailed { code: 255 }.exit_status(), 255);
    }

    #[test]
    fn test_tool_failed_out_of_range_code() {
        assert_eq!(AppError::ToolFailed { code: 256 }.exit_status(), EXIT_FAILURE);
        assert_eq!(AppError::ToolFailed { code: -3 }.exit_status(), EXIT_FAILURE);
    }

    #[test]
    fn test_tool_killed() {
        let app_error = AppError::ToolKilled { signal: Some(9) };
        assert_eq!(app_error.exit_status(), 137);
        assert_eq!(
            app_error.to_string(),
            "modkit extract full was terminated by signal 9"
        );
        assert_eq!(AppError::ToolKilled { signal: None }.exit_status(), EXIT_FAILURE);
    }

    #[test]
    fn test_command_not_found_display() {
        let app_error = AppError::ToolNotFound("modkit".to_string());
        assert_eq!(app_error.to_string(), "System command not found: modkit");
        assert_eq!(app_error.exit_status(), EXIT_TOOL_NOT_FOUND);
    }

    #[test]
    fn test_usage_error_status() {
        let err = clap::Error::new(ErrorKind::MissingRequiredArgument);
        assert_eq!(AppError::Usage(err).exit_status(), 2);
        let help = clap::Error::new(ErrorKind::DisplayHelp);
        assert_eq!(AppError::Usage(help).exit_status(), 0);
    }

    #[test]
    fn test_output_directory_display() {
        let app_error = AppError::OutputDirectory {
            path: PathBuf::from("out/dir"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        };
        assert_eq!(
            app_error.to_string(),
            "Cannot create output directory \"out/dir\": permission denied"
        );
        assert_eq!(app_error.exit_status(), EXIT_FAILURE);
    }
}
