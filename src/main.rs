//! CalcKit - partial-input formula calculator
//!
//! Resolves a builtin quantity network from the values given on the command
//! line and prints the full set of quantities.
//!
//! # Usage
//!
//! ```bash
//! calckit ohms-law voltage=12 current=3
//! calckit power power=100 resistance=25
//! calckit ohms-law voltage=9 resistance=4.7k
//! ```

use clap::Parser;
use calckit_core::{
    error::{ResolveError, Result},
    input, networks,
    resolver::{resolve, Derivation},
};

/// Partial-input formula calculator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Builtin network to resolve ("ohms-law" or "power")
    #[arg(value_name = "NETWORK")]
    network: String,

    /// Known quantities as name=value pairs; values accept SI suffixes
    /// (e.g. resistance=4.7k)
    #[arg(value_name = "NAME=VALUE", required = true)]
    assignments: Vec<String>,
}

fn split_pair(arg: &str) -> Result<(&str, &str)> {
    arg.split_once('=')
        .filter(|(name, _)| !name.is_empty())
        .ok_or_else(|| ResolveError::invalid_number(arg, arg))
}

fn main() -> Result<()> {
    let args = Args::parse();

    let network = networks::by_name(&args.network)?;

    let pairs = args
        .assignments
        .iter()
        .map(|a| split_pair(a))
        .collect::<Result<Vec<_>>>()?;
    let assignment = input::assignment_from_fields(pairs)?;

    let resolution = resolve(&network, &assignment)?;

    println!("{}", resolution.network());
    for entry in resolution.entries() {
        let provenance = match entry.derivation {
            Derivation::Given => "(given)".to_string(),
            Derivation::Computed { formula } => format!("via {formula}"),
            Derivation::Undetermined => String::new(),
        };
        match entry.value {
            Some(value) => {
                println!(
                    "  {:<12} {} = {} {}  {}",
                    entry.name, entry.symbol, value, entry.unit, provenance
                );
            }
            None => println!("  {:<12} {} = undetermined", entry.name, entry.symbol),
        }
    }
    for name in resolution.ignored() {
        eprintln!("warning: supplied value for '{name}' was ignored");
    }

    Ok(())
}
