use clap::{Parser, Subcommand};
use std::path::PathBuf;

use scrabble_engine::logging::setup_logging;
use scrabble_engine::{Board, EngineConfig, Language, WordValidator};

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LanguageCli {
    En,
    De,
}

impl From<LanguageCli> for Language {
    fn from(cli: LanguageCli) -> Self {
        match cli {
            LanguageCli::En => Language::En,
            LanguageCli::De => Language::De,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "scrabble_engine", version, about = "Word list and board checks for the Scrabble engine")]
struct Config {
    /// Language of the word list and tile set
    #[arg(short = 'l', long, value_enum, default_value = "en")]
    language: LanguageCli,

    /// Word list to load instead of the configured one
    #[arg(short = 'w', long)]
    word_list: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Write rotated log files to this directory instead of stderr
    #[arg(long)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check words against the word list, '_' stands for a blank tile
    Check {
        #[arg(required = true)]
        words: Vec<String>,
    },
    /// Print the multiplier layout of the board
    Layout,
    /// Print the tile distribution of the language
    Tiles,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Config::parse();
    let _logger = setup_logging(&args.log_level, args.log_dir.as_deref())?;
    let language = Language::from(args.language);

    match args.command {
        Command::Check { words } => {
            let mut config = EngineConfig::default();
            if let Some(path) = args.word_list {
                config = config.with_word_list(language, path);
            }
            let path = config
                .word_list(language)
                .ok_or(scrabble_engine::ScrabbleError::MissingWordList(language))?;
            let validator = WordValidator::from_file(path, language)?;
            for word in words {
                if !validator.contains_word(&word) {
                    println!("{word}: not in the word list");
                    continue;
                }
                match validator.description(&word) {
                    Some(description) => println!("{word}: valid - {description}"),
                    None => println!("{word}: valid"),
                }
            }
        }
        Command::Layout => print!("{}", Board::new()),
        Command::Tiles => {
            println!("{} ({} tiles)", language, language.total_tiles());
            for &(letter, value, count) in language.tile_distribution() {
                let letter = if letter == scrabble_engine::JOKER_LETTER { '_' } else { letter };
                println!("{letter}  value {value:>2}  count {count:>2}");
            }
        }
    }
    Ok(())
}
