use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use itertools::Itertools;

use conjugation::{generate_full_paradigm, Dialect};

mod display;
mod drill;
mod verb_list;

/// Browses and drills the paradigms of regular Irish verbs.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Path to the verb data file.
    #[arg(long, default_value = "data/verbs.json")]
    file: PathBuf,
    /// Dialect code: O (Official), C (Connacht), U (Ulster), or M (Munster).
    #[arg(long, default_value = "O")]
    dialect: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Lists the loaded verbs with their definitions.
    List,
    /// Prints the full paradigm of one verb.
    Show {
        /// The dictionary form of the verb.
        verb: String,
    },
    /// Prints a randomly chosen form to practice.
    Drill,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let dialect = Dialect::parse(&args.dialect)
        .with_context(|| format!("unknown dialect {:?}", args.dialect))?;
    let verbs = verb_list::load_verbs(&args.file)?;

    match args.command {
        Command::List => {
            for verb in verbs.iter().sorted_by_key(|v| v.verb.clone()) {
                println!("{} - {}", verb.verb, verb.definition);
            }
        }
        Command::Show { verb } => {
            let record = verb_list::find_verb(&verbs, &verb)
                .with_context(|| format!("verb {verb:?} is not in the verb list"))?;
            let paradigm = generate_full_paradigm(record, dialect)
                .with_context(|| format!("couldn't conjugate {verb:?}"))?;
            display::print_paradigm(record, &paradigm);
        }
        Command::Drill => {
            let prompt = drill::random_form(&verbs, dialect)?;
            display::print_drill(&prompt);
        }
    }

    Ok(())
}
