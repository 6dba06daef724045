//! # Formic CLI - Ant Colony DNA Reconstruction
//!
//! Command-line driver for the Formic reconstruction engine.
//!
//! ## Usage
//!
//! ```bash
//! # Reconstruct from an instance file
//! formic -i data.txt
//!
//! # Reproducible run with custom colony parameters
//! formic -i data.txt -a 50 --alpha 2 --beta 3 -e 0.2 -n 100 -s 42
//!
//! # Generate a synthetic instance with 5% errors
//! formic -p generate -o data.txt --dna-size 200 --oligo-size 10 --error-percent 5
//! ```
//!
//! ## Options
//!
//! - `-p, --mode <MODE>`: Run mode: solve or generate (default: solve)
//! - `-i, --input <FILE>`: Instance file to reconstruct (solve mode)
//! - `-o, --output <FILE>`: Instance file to write (generate mode)
//! - `-a, --ants <N>`: Ants per iteration (default: 20)
//! - `--alpha <A>`: Pheromone influence exponent (default: 2)
//! - `--beta <B>`: Overlap influence exponent (default: 3)
//! - `-e, --evaporation <E>`: Pheromone evaporation in [0,1) (default: 0.1)
//! - `-n, --iterations <N>`: Iteration budget (default: 50)
//! - `-s, --seed <SEED>`: Random seed for reproducible runs
//! - `--dna-size <N>`: Generated sequence length (default: 200)
//! - `--oligo-size <N>`: Generated fragment length (default: 10)
//! - `--error-percent <P>`: Spectrum corruption percentage (default: 5)
//! - `-q, --quiet`: Suppress progress messages

mod generate;
mod spectrum_file;

use std::path::Path;

use clap::{Arg, ArgAction, Command};
use formic_core::{Colony, ColonyConfig};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::generate::{generate_instance, GeneratorParams};
use crate::spectrum_file::{load_instance, write_instance};

fn main() {
    if let Err(error) = run() {
        eprintln!("Error: {}", error);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("formic")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Ant colony optimization for DNA reconstruction from SBH spectra")
        .arg(
            Arg::new("mode")
                .short('p')
                .long("mode")
                .value_name("MODE")
                .help("Run mode: solve or generate")
                .default_value("solve"),
        )
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("FILE")
                .help("Instance file to reconstruct (solve mode)"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Instance file to write (generate mode)"),
        )
        .arg(
            Arg::new("ants")
                .short('a')
                .long("ants")
                .value_name("N")
                .help("Ants per iteration")
                .default_value("20"),
        )
        .arg(
            Arg::new("alpha")
                .long("alpha")
                .value_name("A")
                .help("Pheromone influence exponent")
                .default_value("2"),
        )
        .arg(
            Arg::new("beta")
                .long("beta")
                .value_name("B")
                .help("Overlap influence exponent")
                .default_value("3"),
        )
        .arg(
            Arg::new("evaporation")
                .short('e')
                .long("evaporation")
                .value_name("E")
                .help("Pheromone evaporation fraction in [0, 1)")
                .default_value("0.1"),
        )
        .arg(
            Arg::new("iterations")
                .short('n')
                .long("iterations")
                .value_name("N")
                .help("Iteration budget")
                .default_value("50"),
        )
        .arg(
            Arg::new("seed")
                .short('s')
                .long("seed")
                .value_name("SEED")
                .help("Random seed for reproducible runs"),
        )
        .arg(
            Arg::new("dna-size")
                .long("dna-size")
                .value_name("N")
                .help("Generated sequence length")
                .default_value("200"),
        )
        .arg(
            Arg::new("oligo-size")
                .long("oligo-size")
                .value_name("N")
                .help("Generated fragment length")
                .default_value("10"),
        )
        .arg(
            Arg::new("error-percent")
                .long("error-percent")
                .value_name("P")
                .help("Spectrum corruption percentage")
                .default_value("5"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Quiet mode")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let quiet = matches.get_flag("quiet");
    let seed: Option<u64> = match matches.get_one::<String>("seed") {
        Some(raw) => Some(raw.parse().map_err(|_| "Invalid seed")?),
        None => None,
    };

    match matches.get_one::<String>("mode").unwrap().as_str() {
        "solve" => {
            let input = matches
                .get_one::<String>("input")
                .ok_or("solve mode requires --input")?;
            let config = ColonyConfig {
                ants_count: parse_arg(&matches, "ants")?,
                alpha: parse_arg(&matches, "alpha")?,
                beta: parse_arg(&matches, "beta")?,
                evaporation: parse_arg(&matches, "evaporation")?,
                iterations: parse_arg(&matches, "iterations")?,
                seed,
                quiet,
            };

            let instance = load_instance(Path::new(input))?;
            if !quiet {
                eprintln!(
                    "Loaded instance: {} bp target, {} spectrum entries",
                    instance.original_sequence.len(),
                    instance.oligos.len()
                );
            }

            let mut colony = Colony::new(&instance, config)?;
            let results = colony.run();

            println!(
                "Original sequence:\n{} {}",
                instance.original_sequence,
                instance.original_sequence.len()
            );
            println!(
                "Generated sequence:\n{} {}",
                results.sequence,
                results.sequence.len()
            );
            println!("Levenshtein distance: {}", results.score);

            if !quiet {
                eprintln!(
                    "Stopped by {} after {} iterations",
                    results.stop_reason, results.iterations_run
                );
            }
        }
        "generate" => {
            let output = matches
                .get_one::<String>("output")
                .ok_or("generate mode requires --output")?;
            let params = GeneratorParams {
                dna_size: parse_arg(&matches, "dna-size")?,
                oligo_size: parse_arg(&matches, "oligo-size")?,
                error_percent: parse_arg(&matches, "error-percent")?,
            };

            let mut rng = match seed {
                Some(seed) => ChaCha8Rng::seed_from_u64(seed),
                None => ChaCha8Rng::from_entropy(),
            };
            let instance = generate_instance(&params, &mut rng)?;
            write_instance(Path::new(output), &instance)?;

            if !quiet {
                eprintln!(
                    "Wrote instance with {} spectrum entries to {}",
                    instance.oligos.len(),
                    output
                );
            }
        }
        mode => return Err(format!("Invalid mode {:?} (expected solve or generate)", mode).into()),
    }

    Ok(())
}

fn parse_arg<T: std::str::FromStr>(
    matches: &clap::ArgMatches,
    name: &str,
) -> Result<T, Box<dyn std::error::Error>> {
    matches
        .get_one::<String>(name)
        .unwrap()
        .parse()
        .map_err(|_| format!("Invalid value for --{}", name).into())
}
