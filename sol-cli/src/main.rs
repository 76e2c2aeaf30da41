#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::missing_safety_doc,
    clippy::missing_const_for_fn
)]
#![allow(clippy::as_conversions, clippy::mod_module_files)]

use std::process;

mod interact;

use sol::{format_results, search_books, SearchConfig, SearchRequest, SearchType};

use clap::Parser;
use log::trace;

fn main() {
    if let Err(err) = try_main() {
        eprintln!("{err}");
        process::exit(2);
    }
}

fn try_main() -> eyre::Result<()> {
    let cli = Cli::parse();

    setup_errlog(cli.verbosity as usize, cli.quiet)?;

    let config = SearchConfig::default();

    if let Some(term) = cli.term {
        trace!("One-shot search for '{term}'");
        let request = SearchRequest {
            term,
            search_type: if cli.author {
                SearchType::Author
            } else {
                SearchType::Title
            },
            fields: cli
                .fields
                .map(|fields| fields.split(',').map(str::to_owned).collect()),
            limit: cli.limit,
        };

        let outcome = search_books(&request, &config);
        println!("{}", format_results(&outcome));
    } else {
        trace!("No search term given - starting an interactive session");
        interact::run(&config)?;
    }

    Ok(())
}

fn setup_errlog(verbosity: usize, quiet: bool) -> eyre::Result<()> {
    // if quiet then ignore verbosity but still show errors
    let verbosity = if quiet { 1 } else { verbosity + 1 };

    stderrlog::new().verbosity(verbosity).init()?;
    Ok(())
}

#[derive(Parser)]
#[clap(name = "sol")]
#[clap(about = "Search the Open Library book catalogue from the terminal")]
#[clap(version, author)]
struct Cli {
    /// The term to search for
    ///
    /// When no term is given an interactive search session is started.
    term: Option<String>,

    /// Search by author name instead of title
    #[clap(short, long)]
    author: bool,

    /// Maximum number of results to request
    #[clap(short, long)]
    limit: Option<usize>,

    /// Comma-separated list of result fields to request
    #[clap(short, long)]
    fields: Option<String>,

    /// How chatty the program is when performing commands
    ///
    /// The number of times this flag is used will increase how chatty
    /// the program is.
    #[clap(short, long, parse(from_occurrences))]
    verbosity: u8,

    /// Prevents the program from logging to stderr, errors will still be printed.
    #[clap(short, long)]
    quiet: bool,
}
