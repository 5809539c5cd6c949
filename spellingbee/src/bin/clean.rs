use std::error::Error;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use clap::Parser;
use log::info;
use spellingbee::dictionary::{clean, dictionary_path, DEFAULT_DIRECTORY};

/// Strip affix annotations and digits from a raw word list.
#[derive(Parser, Debug)]
#[command(name = "clean")]
struct Args {
    /// Raw word list (.txt or .dic)
    #[arg(value_parser = parse_input)]
    input: PathBuf,

    /// Name of the cleaned dictionary, written as <DICTIONARIES>/<NAME>.txt
    name: String,

    #[arg(long, default_value = DEFAULT_DIRECTORY)]
    dictionaries: PathBuf,
}

fn parse_input(s: &str) -> Result<PathBuf, String> {
    if s.ends_with(".txt") || s.ends_with(".dic") {
        Ok(PathBuf::from(s))
    } else {
        Err("expected a .txt or .dic file".to_owned())
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let reader = BufReader::new(File::open(&args.input)?);
    fs::create_dir_all(&args.dictionaries)?;
    let output = dictionary_path(&args.dictionaries, &args.name);
    let writer = BufWriter::new(File::create(&output)?);

    info!("Cleaning {} into {}", args.input.display(), output.display());
    let count = clean(reader, writer)?;

    println!("Wrote {} lines to {}", count, output.display());

    Ok(())
}
