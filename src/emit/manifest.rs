use crate::CommonArgs;
use clap::Parser;
use sql_sink::{ManifestSink, SinkSummary};
use std::path::PathBuf;

#[derive(Parser, Clone, Debug)]
pub struct ManifestArgs {
    /// Sector export to read
    #[arg(long, value_name = "FILE")]
    pub input: PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,

    /// JSON manifest to write
    #[arg(long, value_name = "FILE")]
    pub output: PathBuf,
}

/// Generate a JSON manifest of `{id, code, name, sql}` for an external runner.
pub fn run_manifest(args: ManifestArgs) -> anyhow::Result<SinkSummary> {
    let (_, output) = super::transform(&args.common, &args.input)?;
    super::deliver(&args.input, &output, &ManifestSink::new(&args.output))
}
