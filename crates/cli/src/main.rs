//! `tagbar` binary.
//!
//! Reads a filter bar's tags out of a dashboard URL, or applies tag edits and
//! prints the rewritten URL.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tagbar_panel::codec::Tag;
use tagbar_panel::{FilterBar, PanelOptions, QueryStore, TagAction};

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "tagbar")]
#[command(about = "Decode and edit dashboard filter bar variables")]
struct Args {
	/// Verbose logging
	#[arg(short, long, global = true)]
	verbose: bool,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Print the tags held by a dashboard URL, one per line
	Decode {
		/// Panel options file (JSON, or TOML with a .toml extension)
		#[arg(short, long, value_name = "PATH")]
		config: PathBuf,

		/// Dashboard URL
		#[arg(short, long)]
		url: String,

		/// Print option labels instead of raw keys
		#[arg(long)]
		labels: bool,
	},
	/// Apply tag edits to a dashboard URL and print the result
	Apply {
		/// Panel options file (JSON, or TOML with a .toml extension)
		#[arg(short, long, value_name = "PATH")]
		config: PathBuf,

		/// Dashboard URL
		#[arg(short, long)]
		url: String,

		/// Tag to add
		#[arg(long = "add", value_name = "KEY=VALUE")]
		add: Vec<Tag>,

		/// Tag to remove
		#[arg(long = "remove", value_name = "KEY=VALUE")]
		remove: Vec<Tag>,
	},
}

fn main() -> anyhow::Result<()> {
	let args = Args::parse();

	setup_tracing(args.verbose);

	match args.command {
		Command::Decode { config, url, labels } => {
			let options = load_options(&config)?;
			let store = QueryStore::parse(&url).with_context(|| format!("parsing {url}"))?;
			tracing::debug!(url = %store.url(), "decoding filter bar");
			let bar = FilterBar::load(options, &store);

			if labels {
				for display in bar.displays() {
					println!("{}", display.full);
				}
			} else {
				for tag in bar.tags() {
					println!("{tag}");
				}
			}
		}
		Command::Apply {
			config,
			url,
			add,
			remove,
		} => {
			let options = load_options(&config)?;
			let mut store = QueryStore::parse(&url).with_context(|| format!("parsing {url}"))?;
			let mut bar = FilterBar::load(options, &store);

			let actions = add
				.into_iter()
				.map(TagAction::Add)
				.chain(remove.into_iter().map(TagAction::Remove));
			for action in actions {
				tracing::debug!(?action, "applying");
				let changed = bar.apply(action, &mut store).context("writing dashboard variables")?;
				if !changed {
					tracing::info!("action left the filter bar unchanged");
				}
			}

			println!("{}", store.into_url());
		}
	}

	Ok(())
}

fn load_options(path: &Path) -> anyhow::Result<PanelOptions> {
	PanelOptions::load(path).with_context(|| format!("loading panel options from {}", path.display()))
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("tagbar_panel=debug,tagbar_codec=trace,info")
		} else {
			EnvFilter::new("info")
		}
	});

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.init();
}
