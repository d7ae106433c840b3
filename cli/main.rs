//! This module contains the main entrypoint to the exo cli.

use clap::Parser;
use colored::Colorize;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(about = "Explore, predict and classify exoplanets.", disable_help_subcommand = true)]
enum Options {
	#[command(name = "app")]
	App(Box<AppOptions>),
}

#[derive(clap::Args)]
#[command(about = "run the app")]
#[command(long_about = "run the exoplanet prediction web app")]
struct AppOptions {
	#[arg(long, default_value = "0.0.0.0")]
	host: std::net::IpAddr,
	#[arg(long, env = "PORT", default_value = "8080")]
	port: u16,
	/// the base url of the backend used to sign in and to answer chatbot messages
	#[arg(long, env = "API_URL", default_value = "http://127.0.0.1:8000")]
	api_url: String,
	/// how long a batch prediction takes, in milliseconds
	#[arg(long, env = "BATCH_DELAY_MS", default_value = "2000")]
	batch_delay_ms: u64,
	/// how long a training run takes, in milliseconds
	#[arg(long, env = "TRAINING_DELAY_MS", default_value = "3000")]
	training_delay_ms: u64,
}

fn main() {
	let options = Options::parse();
	setup_tracing();
	let result = match options {
		Options::App(options) => cli_app(*options),
	};
	if let Err(error) = result {
		eprintln!("{}: {}", "error".red().bold(), error);
		std::process::exit(1);
	}
}

fn setup_tracing() {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_target(false)
		.init();
}

fn cli_app(options: AppOptions) -> anyhow::Result<()> {
	exo_app::run(exo_app::Options {
		api_url: options.api_url,
		batch_delay: Duration::from_millis(options.batch_delay_ms),
		host: options.host,
		port: options.port,
		training_delay: Duration::from_millis(options.training_delay_ms),
	})
}

#[test]
fn test_app_options() {
	let Options::App(options) = Options::parse_from([
		"exo",
		"app",
		"--host",
		"127.0.0.1",
		"--port",
		"9000",
		"--api-url",
		"http://backend:8000",
		"--batch-delay-ms",
		"1500",
		"--training-delay-ms",
		"2500",
	]);
	assert_eq!(options.host.to_string(), "127.0.0.1");
	assert_eq!(options.port, 9000);
	assert_eq!(options.api_url, "http://backend:8000");
	assert_eq!(options.batch_delay_ms, 1500);
	assert_eq!(options.training_delay_ms, 2500);
}
