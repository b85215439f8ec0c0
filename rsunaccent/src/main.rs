use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use env_logger::Env;
use log::debug;
use std::path::PathBuf;
use std::process::ExitCode;
use tabled::{settings::Style, Table, Tabled};

use rsunaccent::{texts_or_stdin, Mode};
use unaccent::tokenize::{accented_words, strip_words};
use unaccent::{has_accents, SpecialCaseMapper, SPECIAL_CASES_VERSION};

#[derive(Parser)]
#[command(name = "unaccent")]
#[command(version, about = "Remove accents and diacritics from text")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Remove combining diacritical marks (reads stdin when no TEXT is given)
    Strip { text: Vec<String> },

    /// Remove accents and rewrite ligatures, ß, þ, ø and friends
    Enhanced {
        text: Vec<String>,

        /// CSV file with extra `source,target` rows
        #[arg(short = 'm', long = "mappings")]
        mappings: Option<PathBuf>,

        /// Print each changed word with its rewritten form
        #[arg(short = 'w', long = "words")]
        words: bool,
    },

    /// Report whether each input carries accents; exits with 1 if any does
    Check {
        text: Vec<String>,

        /// List the accented words instead of true/false
        #[arg(short = 'w', long = "words")]
        words: bool,
    },

    /// Print the effective special-case table
    Table {
        /// CSV file with extra `source,target` rows
        #[arg(short = 'm', long = "mappings")]
        mappings: Option<PathBuf>,
    },
}

#[derive(Tabled)]
struct TableRow {
    #[tabled(rename = "Source")]
    source: String,
    #[tabled(rename = "Code point")]
    code_point: String,
    #[tabled(rename = "Target")]
    target: String,
}

fn load_mapper(mappings: Option<PathBuf>) -> Result<SpecialCaseMapper> {
    match mappings {
        Some(path) => {
            debug!("loading mappings from {}", path.display());
            SpecialCaseMapper::from_csv_file(path)
        }
        None => Ok(SpecialCaseMapper::new()),
    }
}

fn print_transformed(mode: Mode, texts: Vec<String>, mapper: &SpecialCaseMapper) -> Result<()> {
    let from_stdin = texts.is_empty();
    for text in texts_or_stdin(texts)? {
        let output = mode.apply(&text, mapper);
        if from_stdin {
            // Keep the input's own line endings
            print!("{}", output);
        } else {
            println!("{}", output);
        }
    }
    Ok(())
}

fn print_changed_words(texts: Vec<String>, mapper: &SpecialCaseMapper) -> Result<()> {
    for text in texts_or_stdin(texts)? {
        for (word, stripped) in strip_words(&text, mapper) {
            println!("{} {} {}", word, "->".dimmed(), stripped);
        }
    }
    Ok(())
}

/// Returns true when any input had accents
fn check(texts: Vec<String>, words: bool) -> Result<bool> {
    let from_stdin = texts.is_empty();
    let inputs = texts_or_stdin(texts)?;
    let lines: Vec<&str> = if from_stdin {
        inputs.iter().flat_map(|input| input.lines()).collect()
    } else {
        inputs.iter().map(String::as_str).collect()
    };

    let mut any_accents = false;
    for line in lines {
        let accented = has_accents(line);
        any_accents |= accented;
        if words {
            for word in accented_words(line) {
                println!("{}", word.yellow());
            }
        } else if accented {
            println!("{}", "true".green());
        } else {
            println!("{}", "false".red());
        }
    }
    Ok(any_accents)
}

fn table_rows(mapper: &SpecialCaseMapper) -> Vec<TableRow> {
    mapper
        .mappings()
        .into_iter()
        .map(|(source, target)| TableRow {
            source: source.to_string(),
            code_point: format!("U+{:04X}", source as u32),
            target: target.to_string(),
        })
        .collect()
}

fn print_table(mapper: &SpecialCaseMapper) {
    println!(
        "{} {}",
        "Special cases".bold(),
        format!("(table version {})", SPECIAL_CASES_VERSION).dimmed()
    );
    let table = Table::new(table_rows(mapper))
        .with(Style::modern())
        .to_string();
    println!("{}", table);
    println!("{} entries", mapper.len());
}

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match cli.command {
        Command::Strip { text } => {
            print_transformed(Mode::Strip, text, &SpecialCaseMapper::new())?;
        }
        Command::Enhanced { text, mappings, words } => {
            let mapper = load_mapper(mappings)?;
            if words {
                print_changed_words(text, &mapper)?;
            } else {
                print_transformed(Mode::Enhanced, text, &mapper)?;
            }
        }
        Command::Check { text, words } => {
            if check(text, words)? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Table { mappings } => {
            let mapper = load_mapper(mappings)?;
            print_table(&mapper);
        }
    }

    Ok(ExitCode::SUCCESS)
}
