//! Gauge command line driver.
//!
//! Runs a single operation through the configured dispatch chain and prints
//! the result, or lists what the chain can resolve.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use gauge_invocation::{RawArg, parse_geometry};
use gauge_oracle::{MethodInvocationOperation, Operation, OracleConfig, build_chain};
use gauge_registry::FunctionRegistry;
use tracing::info;

/// Gauge command line arguments.
#[derive(Parser, Debug)]
#[command(name = "gauge")]
#[command(about = "Run geometry operations through a verifying dispatch chain")]
struct Args {
	/// Oracle configuration file (TOML)
	#[arg(short, long, value_name = "PATH", global = true)]
	config: Option<PathBuf>,

	/// Verbose logging
	#[arg(short, long, global = true)]
	verbose: bool,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Invoke an operation on a WKT geometry and print the result
	Invoke {
		/// Operation name
		op: String,
		/// Subject geometry as WKT
		geometry: String,
		/// Operation arguments (numbers, codes or WKT)
		#[arg(allow_hyphen_values = true, trailing_var_arg = true)]
		args: Vec<String>,
	},
	/// Print the declared result type of an operation
	ReturnType {
		/// Operation name
		op: String,
	},
	/// List registered functions and engine methods
	Functions,
}

fn main() -> anyhow::Result<()> {
	let args = Args::parse();

	setup_tracing(args.verbose);

	let config = match &args.config {
		Some(path) => {
			OracleConfig::load(path).with_context(|| format!("loading configuration from {}", path.display()))?
		}
		None => OracleConfig::default(),
	};
	let registry = Arc::new(FunctionRegistry::builtins()?);

	match args.command {
		Command::Invoke { op, geometry, args } => {
			let chain = build_chain(&config, registry);
			let subject = parse_geometry(&geometry).context("parsing subject geometry")?;
			let raw: Vec<RawArg> = args.into_iter().map(RawArg::from).collect();

			info!(op = %op, args = raw.len(), "invoking");
			let result = chain.invoke(&op, &subject, &raw).with_context(|| format!("{op} failed"))?;
			println!("{result}");
		}
		Command::ReturnType { op } => {
			let chain = build_chain(&config, registry);
			println!("{}", chain.return_type(&op)?);
		}
		Command::Functions => {
			println!("registered functions ({}):", registry.label());
			for def in registry.iter() {
				println!("  {:<48} {}", def.signature(), def.description);
			}
			println!("engine methods:");
			for def in MethodInvocationOperation::new().catalog() {
				println!("  {:<48} {}", def.signature(), def.description);
			}
		}
	}

	Ok(())
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_env("GAUGE_LOG").unwrap_or_else(|_| {
		let level = if verbose { "debug" } else { "info" };
		EnvFilter::new(format!(
			"warn,gauge={level},gauge_engine={level},gauge_invocation={level},gauge_registry={level},gauge_oracle={level}"
		))
	});

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();
}
