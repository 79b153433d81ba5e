use std::{error::Error, io::Write, str::FromStr};

use clap::Parser;
use log::LevelFilter;
use strum::IntoEnumIterator;

use pocketcube::prelude::*;

mod interactive;

/// Optimal 2x2x2 Pocket Cube solver written in Rust
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
	/// Enter the cube interactively
	/// Entered sequences or scrambles are ignored
	#[arg(short, long, default_value_t = false)]
	interactive: bool,

	/// Use a sequence to apply on the solved cube (turns R, F and B, e.g. "R F' B2")
	#[arg(short, default_value_t = String::new())]
	sequence: String,

	/// Set the cube from a string (the same format as when you output the cube via the "-c"-flag)
	#[arg(long, default_value_t = String::new())]
	set: String,

	/// Scramble the cube with the given number of random turns
	#[arg(short, long)]
	random: Option<usize>,

	/// Solve the cube (the output is a sequence)
	#[arg(long, default_value_t = false)]
	solve: bool,

	/// Specify the algorithm used for solving
	#[arg(long, default_value_t = Algorithm::default())]
	algorithm: Algorithm,

	/// Specify the heuristic used by the A* searches
	#[arg(long, default_value_t = HeuristicKind::default())]
	heuristic: HeuristicKind,

	/// Longest solution to search for
	#[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
	max_depth: usize,

	/// Where the pattern database is read from and saved to
	#[arg(long, default_value_t = String::from(DEFAULT_TABLE_PATH))]
	table: String,

	/// Build the pattern database, save it and quit
	#[arg(long, default_value_t = false)]
	build_table: bool,

	/// Depth up to which the pattern database is built
	#[arg(long, default_value_t = DEFAULT_TABLE_DEPTH)]
	table_depth: usize,

	/// Print all possible algorithms and heuristics and quit
	#[arg(long, default_value_t = false)]
	list_algorithm: bool,

	/// Output length of sequence (if --solve is used)
	#[arg(short, long, default_value_t = false)]
	length: bool,

	/// Output the number of expanded nodes and explored states (if --solve is used)
	#[arg(long, default_value_t = false)]
	stats: bool,

	/// Output the cube as a string rather than colored
	#[arg(short, long, default_value_t = false)]
	char_print: bool,

	/// Print the output to a file rather to the stdout
	#[arg(short, long, default_value_t = String::new())]
	output: String,

	/// Log progress (-v for info, -vv for debug)
	#[arg(short, action = clap::ArgAction::Count)]
	verbose: u8,
}

fn main() -> Result<(), Box<dyn Error>> {
	let args = Args::parse();

	let level = match args.verbose {
		0 => LevelFilter::Warn,
		1 => LevelFilter::Info,
		_ => LevelFilter::Debug,
	};
	simple_logger::SimpleLogger::new().with_level(level).init()?;

	// Whether to redirect it to the stdout or a file
	let mut out: Box<dyn Write> = if args.output.is_empty() {
		Box::new(std::io::stdout())
	} else {
		Box::new(std::fs::File::create(&args.output)?)
	};

	// List the algorithms and exit
	if args.list_algorithm {
		for algo in Algorithm::iter() {
			writeln!(out, "{}", algo)?;
		}
		writeln!(out)?;
		for heuristic in HeuristicKind::iter() {
			writeln!(out, "{}", heuristic)?;
		}
		return Ok(());
	}

	if args.build_table {
		let table = HeuristicTable::build(GOAL, args.table_depth);
		table.save(&args.table)?;
		writeln!(out, "Saved {} states to {}", table.len(), args.table)?;
		return Ok(());
	}

	let mut cube = PocketCube::goal();

	// Generate a random input cube
	if let Some(len) = args.random {
		let (scrambled, turns) = PocketCube::random(&mut rand::thread_rng(), len);
		log::info!("Scrambled with {}", Solution { depth: len, turns });
		cube = scrambled;
	}

	// Parses a cube out of the cube string
	if !args.set.is_empty() {
		cube = PocketCube::from_str(&args.set)?;
	}

	cube.apply_turns(&parse_turns(&args.sequence)?);

	if args.interactive {
		let stdin = std::io::stdin();
		cube = interactive::interactive_mode(&mut stdin.lock(), &mut std::io::stdout())?;
	}

	// Solve the cube and only output the sequence
	if args.solve {
		let config = SearchConfig {
			algorithm: args.algorithm,
			heuristic: args.heuristic,
			max_depth: args.max_depth,
		};
		let table = match config.heuristic {
			HeuristicKind::PatternDb => HeuristicTable::load(&args.table),
			_ => HeuristicTable::Unloaded,
		};

		let mut problem = Problem::new(cube, GOAL);
		let solution = solve(&mut problem, &config, &table);

		if args.stats {
			writeln!(
				out,
				"Nodes expanded: {}, states explored: {}",
				problem.stats.nodes_expanded, problem.stats.states_explored
			)?;
		}

		return match solution {
			Some(solution) => {
				write!(out, "{}", solution)?;
				if args.length {
					writeln!(out, " (len={})", solution.len())?;
				} else {
					writeln!(out)?;
				}
				Ok(())
			}
			None => Err(format!(
				"Could not solve the given Pocket Cube in {} turns! Check the entered colors.",
				config.max_depth
			)
			.into()),
		};
	}

	// Print the resulting cube (either as a string or with colors)
	if args.char_print {
		writeln!(out, "{}", cube)?;
	} else {
		cube.print();
	}

	Ok(())
}
