use std::error::Error;
use std::fs::File;
use std::io;
use std::io::BufReader;
use std::path::PathBuf;

use clap::Parser;
use hash_table::logger::initialize_logger;
use hash_table::menu::Session;
use log::{info, LevelFilter};

#[derive(Parser, Debug)]
#[command(author, version, about = "Separate chaining hash table console", long_about = None)]
struct Args {
    /// Read menu input from a file instead of stdin
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Do not print the menu and prompts
    #[arg(short, long)]
    quiet: bool,

    /// Log level, overridden by RUST_LOG
    #[arg(short, long, default_value_t = LevelFilter::Warn)]
    log_level: LevelFilter,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    initialize_logger(args.log_level);

    let stdout = io::stdout();
    match args.input {
        Some(path) => {
            info!("reading session from {}", path.display());
            let file = File::open(&path)?;
            Session::new(BufReader::new(file), stdout.lock())
                .with_quiet(args.quiet)
                .run()?;
        }
        None => {
            Session::new(io::stdin().lock(), stdout.lock())
                .with_quiet(args.quiet)
                .run()?;
        }
    }

    Ok(())
}
