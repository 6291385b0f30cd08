use anyhow::Result;
use clap::Parser;
use gtf_download::{run_organism, GzipInflater, HttpFetcher, Outcome, ReleaseConfig};
use std::env;
use tokio::runtime::Builder;

#[derive(Parser, Debug)]
#[clap(about = "Download genome annotations in GTF format")]
struct Args {
    /// Short latin organism name (e.g. hsapiens)
    organism: String,
}

async fn async_run(args: Args) -> Result<()> {
    let cfg = ReleaseConfig::from_env();
    let work_dir = env::current_dir()?;
    let outcome = run_organism(
        &args.organism,
        &cfg,
        &work_dir,
        &HttpFetcher::new(),
        &GzipInflater,
    )
    .await?;
    if let Outcome::Downloaded { unzip_file, .. } = outcome {
        log::info!("annotation ready: {:?}", unzip_file);
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();
    // fetch and decompress run one after the other, no worker threads needed
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_run(args))?;

    Ok(())
}
