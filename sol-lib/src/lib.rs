#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::missing_safety_doc,
    clippy::missing_const_for_fn
)]
#![warn(missing_docs, rust_2018_idioms)]
#![allow(clippy::module_name_repetitions)]
#![doc = include_str!("../README.md")]

mod api;
mod error;
pub mod format;

pub use api::open_library::{
    Doc, SearchConfig, SearchOutcome, SearchRequest, SearchResponse, SearchType,
};
pub use error::{Error, ErrorKind};
pub use format::format_results;

use log::trace;

type Client = reqwest::blocking::Client;

/// Search the Open Library catalogue for books matching `request`.
///
/// A single GET request is made, with no retries and no timeout beyond the
/// transport's own. Any failure - transport error, HTTP error status, or an
/// unparsable body - is reported on standard output with the
/// `Error making API request: ` prefix and collapsed into
/// [`SearchOutcome::FetchFailed`], which [`format_results`] renders exactly
/// like an empty result set.
#[must_use]
pub fn search_books(request: &SearchRequest, config: &SearchConfig) -> SearchOutcome {
    trace!("Search for books with a term of '{}'", request.term);
    match api::open_library::search::<Client>(request, config) {
        Ok(response) => SearchOutcome::Response(response),
        Err(err) => {
            println!("Error making API request: {err}");
            SearchOutcome::FetchFailed
        }
    }
}
