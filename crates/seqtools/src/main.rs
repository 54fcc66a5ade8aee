//! CLI for generating, encoding and batching sequence datasets.

mod commands;
mod utils;

use std::path::PathBuf;

use clap::Parser;

use commands::Commands;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The random seed to use.
    #[arg(short('s'), long, default_value = "42")]
    seed: Option<u64>,

    /// The name of the log file, written under `./logs`.
    #[arg(short('l'), long, default_value = "seqtools")]
    log_name: String,

    /// Also log debug messages from the libraries.
    #[arg(short('v'), long)]
    verbose: bool,

    /// The subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<(), String> {
    let args = Args::parse();
    println!("Args: {args:?}");

    let (_guard, log_path) = utils::configure_logger(&args.log_name, args.verbose)?;
    println!("Log file: {log_path:?}");

    ftlog::info!("{args:?}");

    let seed = args.seed;

    let written: Option<PathBuf> = match args.command {
        Commands::Generate {
            alphabet,
            num,
            length,
            k,
            copies,
            val_fraction,
            test_fraction,
            out_path,
        } => Some(commands::generate::generate(
            alphabet.alphabet(),
            num,
            length,
            k,
            copies,
            (val_fraction, test_fraction),
            out_path,
            seed,
        )?),
        Commands::Encode {
            inp_path,
            alphabet,
            length,
            split,
            out_path,
        } => Some(commands::encode::encode(inp_path, alphabet.alphabet(), length, &split, out_path)?),
        Commands::OneHot {
            inp_path,
            alphabet,
            out_path,
        } => Some(commands::one_hot::one_hot(inp_path, alphabet.alphabet(), out_path)?),
        Commands::Batches {
            inp_path,
            batch_size,
            workers,
        } => {
            commands::batches::batches(inp_path, batch_size, workers, seed)?;
            None
        }
    };

    if let Some(path) = written {
        ftlog::info!("Wrote {path:?}");
        println!("Wrote {path:?}");
    }

    Ok(())
}
