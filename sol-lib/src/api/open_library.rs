use log::{info, trace};
use serde::Deserialize;

use crate::Error;

use super::Client;

const OPEN_LIBRARY_URL: &str = "https://openlibrary.org/search.json";

const DEFAULT_FIELDS: [&str; 5] = [
    "title",
    "author_name",
    "first_publish_year",
    "publisher",
    "isbn",
];

const DEFAULT_LIMIT: usize = 3;

/// Process-wide search defaults, constructed once and passed by reference.
///
/// Holds the field list and result limit used whenever a [`SearchRequest`]
/// does not override them. Fields are private so the value stays immutable
/// after construction.
#[derive(Clone, Debug)]
pub struct SearchConfig {
    default_fields: Vec<String>,
    default_limit: usize,
}

impl SearchConfig {
    /// Creates a config with a custom field list and result limit.
    #[must_use]
    pub fn new(default_fields: Vec<String>, default_limit: usize) -> Self {
        Self {
            default_fields,
            default_limit,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_fields: DEFAULT_FIELDS.iter().map(|s| (*s).to_owned()).collect(),
            default_limit: DEFAULT_LIMIT,
        }
    }
}

/// Selects which field the Open Library endpoint matches the term against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchType {
    /// Match the term against book titles.
    #[default]
    Title,
    /// Match the term against author names.
    Author,
}

impl SearchType {
    /// The query-string key used for this type of search.
    #[must_use]
    pub const fn as_query_key(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Author => "author",
        }
    }
}

/// A single search to perform against the Open Library endpoint.
///
/// `fields` and `limit` fall back to the [`SearchConfig`] defaults when
/// `None`. The limit is not range-checked here, the interactive front end is
/// expected to clamp its own input.
#[derive(Clone, Debug)]
pub struct SearchRequest {
    /// Free-text term to match against titles or author names.
    pub term: String,
    /// Which field of the catalogue to match against.
    pub search_type: SearchType,
    /// Result fields to request, in the order they should appear in the URL.
    pub fields: Option<Vec<String>>,
    /// Maximum number of docs to request.
    pub limit: Option<usize>,
}

/// The parsed body of a successful search response.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    /// Matched books, one entry per doc. A body without a `docs` key
    /// deserializes to an empty list.
    #[serde(default)]
    pub docs: Vec<Doc>,
}

/// A single matched book. Every field is optional, the endpoint omits any
/// field a record has no value for.
#[derive(Debug, Default, Deserialize)]
pub struct Doc {
    /// Book title.
    pub title: Option<String>,
    /// Author names.
    pub author_name: Option<Vec<String>>,
    /// Year of first publication.
    pub first_publish_year: Option<i64>,
    /// Publisher names.
    pub publisher: Option<Vec<String>>,
    /// Known ISBNs, 10 and 13 digit forms mixed.
    pub isbn: Option<Vec<String>>,
}

/// The result of a search: either a parsed response or an explicit marker
/// that the request failed.
///
/// `FetchFailed` stands in for every failure class - transport errors, HTTP
/// error statuses, and unparsable bodies. The formatter treats it exactly
/// like a response with no docs.
#[derive(Debug)]
pub enum SearchOutcome {
    /// The request succeeded and the body parsed.
    Response(SearchResponse),
    /// The request failed, to be rendered as "no results".
    FetchFailed,
}

// Spaces become '+' and nothing else is escaped, matching what the endpoint
// accepts for its query values.
fn format_search_term(term: &str) -> String {
    term.trim().replace(' ', "+")
}

pub(crate) fn build_search_url(request: &SearchRequest, config: &SearchConfig) -> String {
    let term = format_search_term(&request.term);
    let fields = request
        .fields
        .as_deref()
        .unwrap_or(&config.default_fields)
        .join(",");
    let limit = request.limit.unwrap_or(config.default_limit);

    format!(
        "{OPEN_LIBRARY_URL}?{}={term}&fields={fields}&limit={limit}",
        request.search_type.as_query_key()
    )
}

pub(crate) fn search<C: Client>(
    request: &SearchRequest,
    config: &SearchConfig,
) -> Result<SearchResponse, Error> {
    info!(
        "Searching Open Library by {} for '{}'",
        request.search_type.as_query_key(),
        request.term
    );
    let url = build_search_url(request, config);

    let client = C::default();
    let response: SearchResponse = client.get_json(&url)?;

    trace!("Request was successful - {} docs returned", response.docs.len());

    Ok(response)
}
