use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = purohit_api::Args::parse();
	purohit_api::run(args).await
}
