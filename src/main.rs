use clap::Parser;
use dialoguer::{Input, Select};
use show_sleuth::{
    BrowseError, BrowserSession, CacheStorage, CachedDirectory, ShowDirectory, ShowSleuthError,
    Toggle, TvMazeDirectory,
};
use std::io::{self, Write};
use std::process;
use std::time::Duration;

/// How long cached directory answers stay valid.
const CACHE_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Search TV shows and browse their episode lists from the terminal.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Search term for the first search; prompts interactively when omitted
    query: Option<String>,

    /// Query the directory directly, bypassing the on-disk cache
    #[arg(long)]
    no_cache: bool,
}

/// Builds the directory backend, wrapped in the cache unless disabled
fn build_directory(no_cache: bool) -> Result<Box<dyn ShowDirectory>, ShowSleuthError> {
    let tvmaze = TvMazeDirectory::new();

    if no_cache {
        return Ok(Box::new(tvmaze));
    }

    let search_cache = CacheStorage::open("searches", Some(CACHE_TTL))?;
    let episode_cache = CacheStorage::open("episodes", Some(CACHE_TTL))?;

    Ok(Box::new(CachedDirectory::new(
        tvmaze,
        search_cache,
        episode_cache,
    )))
}

/// Prompts for a search term; None means the user wants to leave
fn prompt_search_term() -> Option<String> {
    let term: String = Input::new()
        .with_prompt("Search for shows (empty to quit)")
        .allow_empty(true)
        .interact_text()
        .ok()?;

    let term = term.trim().to_string();
    if term.is_empty() { None } else { Some(term) }
}

/// Writes the current page to stdout
fn print_page<D: ShowDirectory>(session: &BrowserSession<D>) {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let _ = writeln!(handle);
    let _ = session.write_page(&mut handle);
}

/// Runs the selection loop over one result set
///
/// Returns false when the user wants to quit entirely.
fn browse_results<D: ShowDirectory>(session: &mut BrowserSession<D>) -> bool {
    loop {
        let mut items: Vec<String> = session
            .list()
            .blocks()
            .iter()
            .map(|block| format!("{}: {}", block.toggle_label, block.name))
            .collect();
        items.push("Search again".to_string());
        items.push("Quit".to_string());

        let choice = Select::new()
            .with_prompt("Pick a show to toggle its episodes")
            .items(&items)
            .default(0)
            .interact_opt();

        let show_count = session.shows().len();
        match choice {
            Ok(Some(index)) if index < show_count => {
                let id = session.list().blocks()[index].show_id;
                match session.toggle_episodes(id) {
                    Ok(Toggle::Opened { .. }) | Ok(Toggle::Closed) => print_page(session),
                    Err(e @ BrowseError::Directory(_)) => {
                        eprintln!("Could not fetch episodes: {}", e);
                    }
                    Err(e) => eprintln!("Error: {}", e),
                }
            }
            Ok(Some(index)) if index == show_count => return true,
            _ => return false,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let directory = match build_directory(cli.no_cache) {
        Ok(directory) => directory,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let mut session = BrowserSession::new(directory);
    let mut pending_query = cli.query;

    loop {
        let term = match pending_query.take() {
            Some(term) => term,
            None => match prompt_search_term() {
                Some(term) => term,
                None => break,
            },
        };

        println!("Searching for '{}'...", term);
        match session.search(&term) {
            Ok(shows) if shows.is_empty() => {
                println!("No shows found for '{}'.", term);
                continue;
            }
            Ok(shows) => {
                println!("Found {} show(s).", shows.len());
            }
            Err(e) => {
                eprintln!("Search failed: {}", e);
                continue;
            }
        }

        print_page(&session);

        if !browse_results(&mut session) {
            break;
        }
    }
}
