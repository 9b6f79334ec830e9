//! Demo driver for matrix-chain ordering.
//!
//! Takes a dimension sequence either from the command line or from a seeded
//! random generator, then prints the minimum cost, the optimal
//! parenthesization, and the Catalan number for the chain length. Optionally
//! dumps the DP tables and writes a plain-text results summary to a file.

use std::env;
use std::fs;
use std::process;

use chain_opt::gen::{random_dimensions, DEFAULT_DIM_RANGE, DEFAULT_MATRIX_COUNT};
use chain_opt::{ChainOptimizer, Summary, TableView};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("chain_probe: {err}");
            Options::print_help();
            process::exit(2);
        }
    };

    let dims = match &options.dims {
        Some(dims) => dims.clone(),
        None => {
            let mut rng = StdRng::seed_from_u64(options.seed);
            let n = options
                .matrices
                .unwrap_or_else(|| rng.gen_range(DEFAULT_MATRIX_COUNT));
            let dims = random_dimensions(&mut rng, n, DEFAULT_DIM_RANGE);
            println!("Randomly generated {n} matrices (seed {}).", options.seed);
            dims
        }
    };

    let opt = match ChainOptimizer::new(dims) {
        Ok(opt) => opt,
        Err(err) => {
            eprintln!("chain_probe: {err}");
            process::exit(1);
        }
    };

    let summary = Summary::new(&opt);
    print!("{summary}");

    if options.show_tables {
        println!();
        print!("{}", TableView::new(&opt));
    }

    if let Some(path) = &options.out {
        if let Err(err) = fs::write(path, summary.to_string()) {
            eprintln!("chain_probe: failed to write {path}: {err}");
            process::exit(1);
        }
        println!("\nResults saved to file: {path}");
    }
}

struct Options {
    dims: Option<Vec<u64>>,
    matrices: Option<usize>,
    seed: u64,
    show_tables: bool,
    out: Option<String>,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut dims = None;
        let mut matrices = None;
        let mut seed = 0u64;
        let mut show_tables = false;
        let mut out = None;

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                process::exit(0);
            } else if let Some(value) = arg.strip_prefix("--dims=") {
                dims = Some(parse_dims(value)?);
            } else if arg == "--dims" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --dims".to_string())?
                    .into();
                dims = Some(parse_dims(&value)?);
            } else if let Some(value) = arg.strip_prefix("--matrices=") {
                matrices = Some(parse_count(value)?);
            } else if arg == "--matrices" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --matrices".to_string())?
                    .into();
                matrices = Some(parse_count(&value)?);
            } else if let Some(value) = arg.strip_prefix("--seed=") {
                seed = value
                    .parse::<u64>()
                    .map_err(|_| "seed must be a non-negative integer".to_string())?;
            } else if arg == "--seed" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --seed".to_string())?
                    .into();
                seed = value
                    .parse::<u64>()
                    .map_err(|_| "seed must be a non-negative integer".to_string())?;
            } else if arg == "--tables" {
                show_tables = true;
            } else if let Some(value) = arg.strip_prefix("--out=") {
                out = Some(value.to_string());
            } else if arg == "--out" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --out".to_string())?
                    .into();
                out = Some(value);
            } else {
                return Err(format!("unrecognized argument '{arg}'"));
            }
        }

        Ok(Self {
            dims,
            matrices,
            seed,
            show_tables,
            out,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --bin chain_probe [-- <options>]

Options:
  --dims <d0,d1,...,dn>   Dimension sequence for n matrices (n + 1 values)
  --matrices <N>          Number of matrices to generate randomly (default: drawn from 5..=15)
  --seed <S>              Seed for random generation (default: 0)
  --tables                Also print the cost and split tables
  --out <FILE>            Write the results summary to FILE
  -h, --help              Print this help message

Examples:
  cargo run --bin chain_probe -- --dims 10,20,30,40,30 --tables
  cargo run --bin chain_probe -- --matrices 8 --seed 42 --out results.txt"
        );
    }
}

fn parse_dims(value: &str) -> Result<Vec<u64>, String> {
    value
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<u64>()
                .map_err(|_| format!("invalid dimension '{part}'"))
        })
        .collect()
}

fn parse_count(value: &str) -> Result<usize, String> {
    let n = value
        .parse::<usize>()
        .map_err(|_| "matrix count must be a positive integer".to_string())?;
    if n == 0 {
        return Err("matrix count must be at least 1".to_string());
    }
    Ok(n)
}
