use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = mixtape_worker::Args::parse();
	mixtape_worker::run(args).await
}
