use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use env_logger::Env;
use log::{LevelFilter, info};
use rs_markov_core::{LanguageModel, ModelConfig};

const DEFAULT_LENGTH: usize = 500;

#[derive(Parser, Debug)]
#[command(author, version, about = "Character-level Markov text generator", long_about = None)]
struct Cli {
	/// Increase verbosity (-v, -vv)
	#[arg(short = 'v', long, global = true, action = ArgAction::Count)]
	verbose: u8,

	/// Decrease verbosity (-q, -qq)
	#[arg(short = 'q', long, global = true, action = ArgAction::Count)]
	quiet: u8,

	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
	/// Train on a corpus and print generated text
	Generate(GenerateArgs),
	/// Train on a corpus and print the learned table
	Dump(DumpArgs),
}

#[derive(Args, Debug)]
struct ModelArgs {
	/// Training text file
	corpus: PathBuf,

	/// Number of preceding characters used as context
	#[arg(short, long, value_name = "N")]
	window: usize,

	/// Seed for reproducible output
	#[arg(long, value_name = "SEED")]
	seed: Option<u64>,
}

impl ModelArgs {
	fn config(&self) -> ModelConfig {
		ModelConfig { window_length: self.window, seed: self.seed }
	}

	fn train(&self) -> Result<LanguageModel> {
		let config = self.config();
		LanguageModel::from_file(&self.corpus, &config)
			.with_context(|| format!("failed to train on {}", self.corpus.display()))
	}
}

#[derive(Args, Debug)]
struct GenerateArgs {
	#[command(flatten)]
	model: ModelArgs,

	/// Text to continue (defaults to a random window of the corpus)
	#[arg(short, long, value_name = "TEXT")]
	initial: Option<String>,

	/// Number of characters to append
	#[arg(short, long, value_name = "COUNT", default_value_t = DEFAULT_LENGTH)]
	length: usize,
}

#[derive(Args, Debug)]
struct DumpArgs {
	#[command(flatten)]
	model: ModelArgs,

	/// Emit JSON instead of the text rendering
	#[arg(long)]
	json: bool,

	/// Pretty-print JSON
	#[arg(long, requires = "json")]
	pretty: bool,
}

fn main() -> Result<()> {
	let cli = Cli::parse();
	init_logging(cli.verbose, cli.quiet);

	match cli.command {
		Commands::Generate(args) => run_generate(args),
		Commands::Dump(args) => run_dump(args),
	}
}

/// Level forced by `-v`/`-q`, if any. Without flags, `RUST_LOG` decides.
fn verbosity_filter(verbose: u8, quiet: u8) -> Option<LevelFilter> {
	match (quiet, verbose) {
		(0, 0) => None,
		(0, 1) => Some(LevelFilter::Debug),
		(0, _) => Some(LevelFilter::Trace),
		(1, _) => Some(LevelFilter::Warn),
		_ => Some(LevelFilter::Error),
	}
}

fn init_logging(verbose: u8, quiet: u8) {
	let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("info"));
	if let Some(level) = verbosity_filter(verbose, quiet) {
		builder.filter_level(level);
	}
	builder.format_target(false);
	let _ = builder.try_init();
}

fn run_generate(args: GenerateArgs) -> Result<()> {
	let mut model = args.model.train()?;

	let initial = match args.initial {
		Some(text) => text,
		None => model
			.random_window()
			.context("corpus is exactly one window long, nothing to start from")?,
	};
	info!("generating {} characters after {initial:?}", args.length);

	let text = model.generate(&initial, args.length);
	println!("{text}");
	Ok(())
}

fn run_dump(args: DumpArgs) -> Result<()> {
	let model = args.model.train()?;

	if args.json {
		let rendered = if args.pretty {
			serde_json::to_string_pretty(model.table())
		} else {
			serde_json::to_string(model.table())
		}
		.context("failed to serialize table")?;
		println!("{rendered}");
	} else {
		print!("{model}");
	}
	Ok(())
}
