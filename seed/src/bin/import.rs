extern crate entity;
extern crate indicatif;

use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use clap::Parser;
use indicatif::ProgressBar;
use log::{info, warn};
use sea_orm::DatabaseConnection;
use spellingbee::dictionary::DEFAULT_DIRECTORY;

/// Load every <locale>.txt dictionary into the word table.
#[derive(Parser, Debug)]
#[command(name = "import")]
struct Args {
    #[arg(long, default_value = DEFAULT_DIRECTORY)]
    dictionaries: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let db: DatabaseConnection = entity::get_connection().await?;
    let files = seed::dictionary_files(&args.dictionaries)?;
    if files.is_empty() {
        warn!("No dictionaries found in {}", args.dictionaries.display());
    }

    let mut total = 0;
    for path in files {
        let Some(locale) = seed::locale_from_path(&path) else {
            warn!("Skipping {}", path.display());
            continue;
        };

        let words = seed::read_words(BufReader::new(File::open(&path)?))?;
        println!("Importing {} words for locale: {}", words.len(), locale);

        let pb = ProgressBar::new(words.len() as u64);
        total += seed::insert_words(&db, &locale, &words, &pb).await?;
        pb.finish_and_clear();
        info!("Imported {}", path.display());
    }

    println!("Imported {} words.", total);

    Ok(())
}
