// lexicat CLI - a thin front-end over the command layer

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use lexicat::commands::{self, App, CommandError};
use lexicat::word::Word;

#[derive(Parser)]
#[command(name = "lexicat", version, about = env!("CARGO_PKG_DESCRIPTION"))]
struct Cli {
    /// Data directory override (defaults to the platform data directory)
    #[arg(long, value_name = "DIR", global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Look up a cached word
    Define { word: String },
    /// Import entry graphs from JSON files into the cache
    Import {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Suggest cached words for a prefix
    Suggest {
        prefix: String,
        #[arg(long, default_value_t = 8)]
        limit: usize,
    },
    /// Show a random cached word
    Random,
    /// Manage starred words
    Favourites {
        #[command(subcommand)]
        action: Option<CrudAction>,
    },
    /// Manage the search history
    History {
        #[command(subcommand)]
        action: Option<CrudAction>,
    },
    /// Read or change settings
    Settings {
        #[command(subcommand)]
        action: Option<SettingsAction>,
    },
    /// Show version and data locations
    About,
}

#[derive(Subcommand)]
enum CrudAction {
    /// List all words
    List,
    /// Add a word
    Add { word: String },
    /// Remove a word
    Remove { word: String },
    /// Remove every word
    Clear,
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Show every setting
    Show,
    /// Read one setting
    Get { key: String },
    /// Change one setting
    Set { key: String, value: String },
}

#[tokio::main]
async fn main() {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("warn"));

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CommandError> {
    let data_dir = match cli.data_dir {
        Some(dir) => dir,
        None => lexicat::data_dir()?,
    };
    let app = App::init(&data_dir).await?;

    match cli.command {
        Command::Define { word } => {
            match commands::words::define(&app.db, &app.history, &word).await? {
                Some(entry) => print_word(&entry),
                None => println!(
                    "no cached entry for '{}'; add one with `lexicat import`",
                    Word::normalize(&word)
                ),
            }
        }
        Command::Import { files } => {
            let mut total = 0;
            for file in &files {
                total += commands::words::import_file(&app.db, file).await?;
            }
            println!("imported {total} entries");
        }
        Command::Suggest { prefix, limit } => {
            print_lines(&commands::words::suggest(&app.db, &prefix, limit).await?);
        }
        Command::Random => match commands::words::random(&app.db).await? {
            Some(word) => println!("{word}"),
            None => println!("the cache is empty"),
        },
        Command::Favourites { action } => match action.unwrap_or(CrudAction::List) {
            CrudAction::List => print_lines(&app.favourites.words()),
            CrudAction::Add { word } => {
                let word = commands::prefs::add_favourite(&app.favourites, &word).await?;
                println!("starred '{word}'");
            }
            CrudAction::Remove { word } => {
                if commands::prefs::remove_favourite(&app.favourites, &word).await? {
                    println!("removed '{}'", Word::normalize(&word));
                } else {
                    println!("'{}' was not starred", Word::normalize(&word));
                }
            }
            CrudAction::Clear => {
                commands::prefs::clear_favourites(&app.favourites).await?;
                println!("favourites cleared");
            }
        },
        Command::History { action } => match action.unwrap_or(CrudAction::List) {
            CrudAction::List => print_lines(&app.history.words()),
            CrudAction::Add { word } => {
                let word = commands::prefs::record_history(&app.history, &word).await?;
                println!("recorded '{word}'");
            }
            CrudAction::Remove { word } => {
                if commands::prefs::remove_history(&app.history, &word).await? {
                    println!("removed '{}'", Word::normalize(&word));
                } else {
                    println!("'{}' was not in the history", Word::normalize(&word));
                }
            }
            CrudAction::Clear => {
                commands::prefs::clear_history(&app.history).await?;
                println!("history cleared");
            }
        },
        Command::Settings { action } => match action.unwrap_or(SettingsAction::Show) {
            SettingsAction::Show => {
                for key in commands::prefs::SETTING_KEYS {
                    println!("{key} = {}", commands::prefs::get_setting(&app.settings, key)?);
                }
            }
            SettingsAction::Get { key } => {
                println!("{}", commands::prefs::get_setting(&app.settings, &key)?);
            }
            SettingsAction::Set { key, value } => {
                commands::prefs::set_setting(&app.settings, &key, &value).await?;
                println!("{key} = {}", commands::prefs::get_setting(&app.settings, &key)?);
            }
        },
        Command::About => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            println!("{}", env!("CARGO_PKG_DESCRIPTION"));
            println!("data directory: {}", app.data_dir().display());
            println!("cached words: {}", app.db.terms().await?.len());
        }
    }

    Ok(())
}

/// Render a cached entry graph for the terminal.
fn print_word(word: &Word) {
    let phonetics: Vec<&str> = word
        .phonetics
        .iter()
        .filter_map(|p| p.text.as_deref())
        .collect();
    if phonetics.is_empty() {
        println!("{}", word.word);
    } else {
        println!("{} {}", word.word, phonetics.join(", "));
    }

    for meaning in &word.meanings {
        println!();
        println!("{}", meaning.part_of_speech);
        for (i, definition) in meaning.definitions.iter().enumerate() {
            println!("  {}. {}", i + 1, definition.definition);
            if let Some(example) = &definition.example {
                println!("     \"{example}\"");
            }
        }
        if !meaning.synonyms.is_empty() {
            println!("  synonyms: {}", meaning.synonyms.join(", "));
        }
        if !meaning.antonyms.is_empty() {
            println!("  antonyms: {}", meaning.antonyms.join(", "));
        }
    }
}

fn print_lines(words: &[String]) {
    if words.is_empty() {
        println!("(empty)");
        return;
    }
    for word in words {
        println!("{word}");
    }
}
