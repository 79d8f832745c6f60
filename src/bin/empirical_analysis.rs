use std::error::Error;

use clap::Parser;
use kselect::cs::select::analysis::{format_table, run_analysis, AnalysisConfig, Distribution};
use kselect::{select_deterministic, select_randomized_with};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

#[derive(Debug, Parser)]
#[command(version, about = "Time deterministic and randomized selection", long_about = None)]
struct Cli {
    #[arg(
        long = "sizes",
        value_delimiter = ',',
        default_values_t = vec![10, 100, 1000, 10000],
        help = "comma separated input sizes"
    )]
    sizes: Vec<usize>,

    #[arg(
        long = "distribution",
        help = "random, sorted or reverse_sorted; repeatable, default: all"
    )]
    distributions: Vec<Distribution>,

    #[arg(long = "seed", help = "seed for inputs and pivots, default: entropy")]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Cli::parse();

    let arr = [12, 3, 5, 7, 19, 1, 4, 10, 6];
    let k = 4;
    let mut rng = match args.seed {
        Some(s) => ChaCha20Rng::seed_from_u64(s),
        None => ChaCha20Rng::from_entropy(),
    };
    println!("Deterministic Selection: {}", select_deterministic(&arr, k)?);
    println!(
        "Randomized Selection: {}",
        select_randomized_with(&arr, k, &mut rng)?
    );
    println!();

    let mut config = AnalysisConfig::default().sizes(args.sizes);
    if !args.distributions.is_empty() {
        config = config.distributions(args.distributions);
    }
    config.seed = args.seed;

    let rows = run_analysis(&config)?;
    print!("{}", format_table(&rows));
    Ok(())
}
