use crate::utils::invocation::{DEFAULT_TOOL, InvocationRequest};

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use clap::Parser;

// Empty path values are rejected by clap's PathBuf parser.
#[derive(Parser, Debug)]
#[command(name = "modkit_extract_full")]
#[command(version)]
#[command(about = "Run `modkit extract full` for a single BAM", long_about = None)]
#[command(next_line_help = true)]
pub struct ExtractFullArgs {
    /// Input modBAM file (with modification tags)
    #[arg(long, required = true, value_name = "BAM")]
    in_bam: PathBuf,

    /// Reference FASTA file
    #[arg(long = "ref", required = true, value_name = "FASTA")]
    reference: PathBuf,

    /// Output TSV path for modkit extract full
    #[arg(long, required = true, value_name = "TSV")]
    out_tsv: PathBuf,

    /// Restrict to CpG context (adds --cpg to modkit extract full)
    #[arg(long)]
    cpg: bool,

    /// modkit executable, looked up on PATH unless it contains a path separator
    #[arg(long, env = "MODKIT", default_value = DEFAULT_TOOL, value_name = "PROGRAM")]
    modkit: OsString,
}

impl ExtractFullArgs {
    #[inline]
    pub fn in_bam(&self) -> &Path { self.in_bam.as_path() }

    #[inline]
    pub fn reference(&self) -> &Path { self.reference.as_path() }

    #[inline]
    pub fn out_tsv(&self) -> &Path { self.out_tsv.as_path() }

    #[inline]
    pub fn cpg(&self) -> bool { self.cpg }

    pub fn init(self) -> InvocationRequest {
        InvocationRequest::new(self.modkit, self.in_bam, self.reference, self.out_tsv, self.cpg)
    }
}
