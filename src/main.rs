//! sigmine - common-string miner for APK batches
//!
//! Searches for strings shared by the APKs in a directory and removes the
//! strings contained in a whitelist file. Uses the `dexstrings` and
//! `strings` tools to extract strings.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use sigmine::batch::scan_batch;
use sigmine::config::ScanConfig;
use sigmine::filter::{load_whitelist, subtract_whitelist};
use sigmine::report::print_report;

#[derive(Parser)]
#[command(name = "sigmine")]
#[command(version)]
#[command(about = "Find strings shared by a batch of APKs that are not in a whitelist")]
struct Cli {
    /// Dir with the APKs
    #[arg(short, long, value_name = "DIR")]
    dir: PathBuf,

    /// File with strings extracted from benign apps
    #[arg(long, value_name = "FILE", default_value = "whitelist_strings.txt")]
    whitelist: PathBuf,

    /// Print debug messages
    #[arg(long)]
    debug: bool,

    /// Min string size
    #[arg(short = 'l', long = "len", value_name = "SIZE", default_value_t = 5)]
    len: usize,

    /// Print files where each string was found
    #[arg(long)]
    src: bool,

    /// Only get strings from dex files (checks extension)
    #[arg(long)]
    onlydex: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Only initialize logging if --debug or RUST_LOG is set
    if cli.debug || std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(if cli.debug {
                    "sigmine=debug".parse()?
                } else {
                    "sigmine=warn".parse()?
                }),
            )
            .init();
    }

    let config = ScanConfig {
        batch_dir: cli.dir,
        whitelist_path: cli.whitelist,
        min_len: cli.len,
        only_dex: cli.onlydex,
        print_sources: cli.src,
        scratch_base: std::env::temp_dir(),
    };
    config.validate()?;

    let whitelist = if config.whitelist_path.exists() {
        load_whitelist(&config.whitelist_path)?
    } else {
        debug!(
            "Whitelist {} not found, continuing without it",
            config.whitelist_path.display()
        );
        Default::default()
    };

    let outcome = scan_batch(&config)?;
    let candidates = subtract_whitelist(&outcome.common, &whitelist);
    print_report(&candidates, &outcome.index, config.print_sources);

    Ok(())
}
