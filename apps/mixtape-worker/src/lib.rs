mod error;

pub mod job;

pub use error::{Error, Result};
pub use job::{JobReport, run_job};

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
	version = mixtape_cli::VERSION,
	rename_all = "kebab",
	styles = mixtape_cli::styles(),
)]
pub struct Args {
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: std::path::PathBuf,
}

pub async fn run(args: Args) -> color_eyre::Result<()> {
	let config = mixtape_config::load(&args.config)?;
	let filter = EnvFilter::new(config.runtime.log_level.clone());

	tracing_subscriber::fmt().with_env_filter(filter).init();

	let report = job::run_job(&config).await?;

	tracing::info!(
		completed = report.completed,
		failed = report.failed.len(),
		output = %config.job.output_file.display(),
		"Job finished."
	);

	Ok(())
}
