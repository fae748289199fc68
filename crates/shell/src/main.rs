//! CLI for nem-distance: edit distances between strings and phrases.

mod algorithms;
mod commands;
mod config;
mod logger;

use clap::Parser;

use commands::Commands;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The random seed to use for synthetic data.
    #[arg(short('s'), long, default_value = "42")]
    seed: u64,

    /// The subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<(), String> {
    let args = Args::parse();

    let config = config::Config::from_env()?;
    let (_guard, log_path) = logger::configure_logger("nem", &config)?;
    ftlog::info!("{args:?}");
    ftlog::info!("Logging to {log_path:?}");

    match args.command {
        Commands::Distance {
            x,
            y,
            algorithm,
            add_delete_weight,
            substitute_weight,
            phrase,
            json,
        } => commands::distance::run(
            &x,
            &y,
            algorithm.algorithm(),
            nem_distance::Weights::new(add_delete_weight, substitute_weight),
            phrase,
            json,
        )?,
        Commands::Tokenize { text, trailing, json } => commands::tokenize::run(&text, trailing, json)?,
        Commands::Score {
            expected,
            actual,
            algorithm,
            phrase,
            json,
        } => commands::score::run(&expected, &actual, algorithm.algorithm(), phrase, json)?,
        Commands::Bench {
            pairs,
            algorithm,
            phrase,
            parallel,
        } => commands::bench::run(pairs, algorithm.algorithm(), phrase, parallel, args.seed)?,
    }

    Ok(())
}
