use dialoguer::Input;
use eyre::{eyre, Context, Result};
use sol::{format_results, search_books, SearchConfig, SearchRequest, SearchType};

const DEFAULT_LIMIT: usize = 3;
const MIN_LIMIT: i64 = 1;
const MAX_LIMIT: i64 = 10;

/// Runs an interactive search session until the user enters `quit`.
///
/// Each iteration asks for a term, a title/author selector, and a result
/// count, then performs the search and prints the formatted result. A failed
/// request prints the same "No results found." as an empty match, the session
/// always continues to the next prompt.
pub fn run(config: &SearchConfig) -> Result<()> {
    println!("Open Library Book Search");
    println!("Enter 'quit' to exit\n");

    loop {
        let term = user_input("Enter a book title or author")?;
        let term = term.trim();
        if term.eq_ignore_ascii_case("quit") {
            break;
        }

        let selector = user_input("Search by [t]itle or [a]uthor? (t/a)")?;
        let limit = user_input("Number of results (1-10, default 3)")?;

        let request = SearchRequest {
            term: term.to_owned(),
            search_type: parse_search_type(&selector),
            // the interactive path never overrides the configured field list
            fields: None,
            limit: Some(parse_limit(&limit)),
        };

        let outcome = search_books(&request, config);

        println!("\nSearch Results:");
        println!("{}", format_results(&outcome));
        println!("{}\n", "-".repeat(50));
    }

    Ok(())
}

fn user_input(prompt: &str) -> Result<String> {
    Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .wrap_err_with(|| eyre!("User input cancelled"))
}

// Only an explicit 'a' selects an author search, anything else is a title
// search.
fn parse_search_type(input: &str) -> SearchType {
    if input.trim().eq_ignore_ascii_case("a") {
        SearchType::Author
    } else {
        SearchType::Title
    }
}

// Blank or unparsable input takes the default, integers are clamped to the
// interactive range.
fn parse_limit(input: &str) -> usize {
    let input = input.trim();
    if input.is_empty() {
        return DEFAULT_LIMIT;
    }

    input
        .parse::<i64>()
        .map_or(DEFAULT_LIMIT, |limit| limit.clamp(MIN_LIMIT, MAX_LIMIT) as usize)
}
