use super::error::AppError;

use std::ffi::{OsStr, OsString};
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};
use tracing::info;

/// Executable looked up on `PATH` when no other is configured
pub const DEFAULT_TOOL: &str = "modkit";

/// One `modkit extract full` run, built from the parsed arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationRequest {
    tool: OsString,
    in_bam: PathBuf,
    reference: PathBuf,
    out_tsv: PathBuf,
    cpg: bool,
}

impl InvocationRequest {
    #[inline]
    pub fn new(
        tool: impl Into<OsString>,
        in_bam: impl Into<PathBuf>,
        reference: impl Into<PathBuf>,
        out_tsv: impl Into<PathBuf>,
        cpg: bool,
    ) -> Self {
        Self {
            tool: tool.into(),
            in_bam: in_bam.into(),
            reference: reference.into(),
            out_tsv: out_tsv.into(),
            cpg,
        }
    }

    #[inline]
    pub fn tool(&self) -> &OsStr { &self.tool }

    #[inline]
    pub fn in_bam(&self) -> &Path { self.in_bam.as_path() }

    #[inline]
    pub fn reference(&self) -> &Path { self.reference.as_path() }

    #[inline]
    pub fn out_tsv(&self) -> &Path { self.out_tsv.as_path() }

    #[inline]
    pub fn cpg(&self) -> bool { self.cpg }

    /// Argument vector for the run, program name first.
    ///
    /// `[tool, extract, full, IN_BAM, OUT_TSV, --reference, REF, --mapped-only]`,
    /// followed by `--cpg` when CpG restriction is on.
    pub fn build_command(&self) -> Vec<OsString> {
        let mut cmd: Vec<OsString> = vec![
            self.tool.clone(),
            "extract".into(),
            "full".into(),
            self.in_bam.clone().into_os_string(),
            self.out_tsv.clone().into_os_string(),
            "--reference".into(),
            self.reference.clone().into_os_string(),
            "--mapped-only".into(),
        ];
        if self.cpg {
            cmd.push("--cpg".into());
        }
        cmd
    }
}

/// Space-joined command line as written to the log
pub fn render_command(tokens: &[OsString]) -> String {
    tokens
        .iter()
        .map(|token| token.to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Runs the command with inherited stdio and waits for it to exit.
///
/// # Errors
/// Returns `AppError::ToolNotFound` when the program is not on `PATH`,
/// `AppError::Spawn` for any other launch failure
pub fn execute(tokens: &[OsString]) -> Result<ExitStatus, AppError> {
    let (program, args) = tokens
        .split_first()
        .ok_or_else(|| AppError::CommandError("empty command".to_string()))?;

    info!("Running: {}", render_command(tokens));

    Command::new(program).args(args).status().map_err(|source| {
        let tool = program.to_string_lossy().into_owned();
        match source.kind() {
            io::ErrorKind::NotFound => AppError::ToolNotFound(tool),
            _ => AppError::Spawn { tool, source },
        }
    })
}
