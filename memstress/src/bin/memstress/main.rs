//! Memory stress test (`memstress`)

// Modules
mod args;
mod config;

// Imports
use {
	self::{args::Args, config::Config},
	anyhow::Context,
	clap::Parser,
	memstress::report::{Banner, Report, Summary},
	memstress_util::logger,
	std::fs,
};

fn main() -> Result<(), anyhow::Error> {
	// Get arguments
	let args = Args::parse();
	logger::pre_init::debug(format!("Args: {args:?}"));

	// Initialize logging
	logger::init(args.log_file.as_deref(), args.log_file_append);

	// Read the config file, if any
	let config = match &args.config_file {
		Some(config_path) => {
			let config_file = fs::File::open(config_path).context("Unable to open config file")?;
			serde_json::from_reader::<_, Config>(config_file).context("Unable to parse config file")?
		},
		None => Config::default(),
	};
	let config = config.into_bench_config(&args);
	tracing::debug!(?config, "Benchmark config");
	config.validate().context("Invalid configuration")?;

	// Run the benchmark
	println!("{}", Banner(&config));
	let result = memstress::run(&config).context("Unable to run benchmark")?;
	print!("{}", Summary(&result));

	if let Some(output_path) = &args.output_file {
		let output_file = fs::File::create(output_path).context("Unable to create output file")?;
		serde_json::to_writer_pretty(output_file, &Report::new(&config, &result))
			.context("Unable to write to output file")?;
	}

	Ok(())
}
