use crate::CommonArgs;
use clap::Parser;
use sql_sink::{BatchDirSink, SinkSummary, DEFAULT_BATCH_SIZE};
use std::path::PathBuf;

#[derive(Parser, Clone, Debug)]
pub struct BatchesArgs {
    /// Sector export to read
    #[arg(
        long,
        value_name = "FILE",
        required_unless_present = "from_manifest",
        conflicts_with = "from_manifest"
    )]
    pub input: Option<PathBuf>,

    /// Take the statements from a manifest written by `sector-sync manifest`
    #[arg(long, value_name = "FILE")]
    pub from_manifest: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,

    /// Directory for batch_NNN.sql files; stale batch files are removed
    #[arg(long, value_name = "DIR")]
    pub output_dir: PathBuf,

    /// Statements per batch
    #[arg(long, default_value_t = DEFAULT_BATCH_SIZE)]
    pub batch_size: usize,
}

/// Generate one transactional file per fixed-size batch.
pub fn run_batches(args: BatchesArgs) -> anyhow::Result<SinkSummary> {
    let (input, (_, output)) = match (&args.from_manifest, &args.input) {
        (Some(manifest), _) => (manifest, super::from_manifest(&args.common, manifest)?),
        (None, Some(input)) => (input, super::transform(&args.common, input)?),
        (None, None) => anyhow::bail!("Either --input or --from-manifest is required"),
    };

    let sink =
        BatchDirSink::new(&args.output_dir, args.common.dialect).with_batch_size(args.batch_size);

    super::deliver(input, &output, &sink)
}
