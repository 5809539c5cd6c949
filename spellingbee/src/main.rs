use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use spellingbee::dictionary::{dictionary_path, DEFAULT_DIRECTORY, DEFAULT_LOCALE};
use spellingbee::{SearchConstraints, SearchResponse, VowelForms, WordMatcher};

const ALLOWED_LETTERS: usize = 6;

#[derive(Parser, Debug)]
#[command(name = "spellingbee")]
#[command(about = "Find every dictionary word spelled from a required letter and six others")]
struct Args {
    /// Letter every word must contain
    #[arg(value_parser = parse_required)]
    required: char,

    /// The six other letters words may use
    #[arg(value_parser = parse_allowed)]
    allowed: String,

    /// Exact word length, 0 for any
    #[arg(default_value_t = 0)]
    length: usize,

    /// Dictionary locale
    #[arg(short, long, env = "WBLANG", default_value = DEFAULT_LOCALE)]
    locale: String,

    /// Directory holding <locale>.txt dictionaries
    #[arg(long, default_value = DEFAULT_DIRECTORY)]
    dictionaries: PathBuf,

    /// Search this file instead of the locale's dictionary
    #[arg(short, long)]
    dictionary: Option<PathBuf>,

    /// Print the results as JSON
    #[arg(long)]
    json: bool,
}

impl Args {
    fn dictionary_path(&self) -> PathBuf {
        self.dictionary
            .clone()
            .unwrap_or_else(|| dictionary_path(&self.dictionaries, &self.locale))
    }
}

fn parse_required(s: &str) -> Result<char, String> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err("must be a single letter".to_owned()),
    }
}

fn parse_allowed(s: &str) -> Result<String, String> {
    if s.chars().count() != ALLOWED_LETTERS {
        return Err(format!("must be a string of {ALLOWED_LETTERS} characters"));
    }
    Ok(s.to_owned())
}

fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let vowels = VowelForms::standard();
    let constraints = SearchConstraints::new(args.required, &args.allowed, args.length);
    let matcher = WordMatcher::new(constraints, &vowels);

    let results = matcher.search_file(args.dictionary_path())?;

    if args.json {
        let response = SearchResponse::new(matcher.constraints(), results);
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        for word in &results {
            println!("{}", word);
        }
        println!("Number of matching words: {}", results.len());
    }

    Ok(())
}
