use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Program-structure index snapshot (JSON).
    #[arg(long, value_name = "PATH")]
    pub index: PathBuf,

    /// Where to write the build artifacts JSON (`-` for stdout).
    #[arg(long, value_name = "PATH")]
    pub emit_artifacts: Option<PathBuf>,

    /// Where to write just the discovered property requests JSON.
    #[arg(long, value_name = "PATH")]
    pub emit_requests: Option<PathBuf>,

    /// Properties file (`key=value`, '#' comments allowed) used as the
    /// live configuration source for process-start validation. Without
    /// it, presence validation is skipped.
    #[arg(long, value_name = "PATH")]
    pub properties: Option<PathBuf>,

    /// Print one-line artifact counts to stderr.
    #[arg(long, default_value_t = false)]
    pub sanity: bool,
}
