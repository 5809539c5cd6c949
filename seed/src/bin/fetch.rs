use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Parser;
use log::info;
use spellingbee::dictionary::{dictionary_path, DEFAULT_DIRECTORY};

/// Download a newline separated word list into <DICTIONARIES>/<LOCALE>.txt.
#[derive(Parser, Debug)]
#[command(name = "fetch")]
struct Args {
    url: String,

    locale: String,

    #[arg(long, default_value = DEFAULT_DIRECTORY)]
    dictionaries: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    info!("Fetching {}", args.url);
    let body = reqwest::get(&args.url)
        .await?
        .error_for_status()?
        .text()
        .await?;

    let words = seed::word_list(&body);
    fs::create_dir_all(&args.dictionaries)?;
    let path = dictionary_path(&args.dictionaries, &args.locale);

    let contents: String = words.iter().map(|word| format!("{word}\n")).collect();
    fs::write(&path, contents)?;

    println!("Wrote {} words to {}", words.len(), path.display());

    Ok(())
}
