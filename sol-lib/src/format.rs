//! Rendering of search outcomes as readable text.

use crate::{Doc, SearchOutcome};

const NO_RESULTS: &str = "No results found.";
const UNKNOWN: &str = "Unknown";

/// Renders a [`SearchOutcome`] as a readable multi-line block.
///
/// A failed fetch, a response without docs, and a response with an empty doc
/// list all render as the literal `No results found.` - the caller cannot
/// distinguish "the request failed" from "nothing matched", by contract.
/// Each doc renders as a 5-line block and blocks are separated by a single
/// blank line.
#[must_use]
pub fn format_results(outcome: &SearchOutcome) -> String {
    let docs = match outcome {
        SearchOutcome::Response(response) if !response.docs.is_empty() => &response.docs,
        _ => return NO_RESULTS.to_owned(),
    };

    docs.iter()
        .map(format_doc)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn format_doc(doc: &Doc) -> String {
    let title = doc.title.as_deref().unwrap_or(UNKNOWN);
    let authors = doc
        .author_name
        .as_ref()
        .map_or_else(|| UNKNOWN.to_owned(), |names| names.join(", "));
    let year = doc
        .first_publish_year
        .map_or_else(|| UNKNOWN.to_owned(), |year| year.to_string());
    let publisher = doc
        .publisher
        .as_ref()
        .map_or_else(|| UNKNOWN.to_owned(), |names| names.join(", "));

    // The joined ISBN string is cut to its first 3 characters, not the first
    // 3 ISBNs. Long-standing output quirk that downstream consumers expect,
    // so a missing isbn field renders as "ISBN: ...".
    let isbn: String = doc
        .isbn
        .as_deref()
        .unwrap_or_default()
        .join(", ")
        .chars()
        .take(3)
        .collect();

    format!(
        "Title: {title}\n\
         Author(s): {authors}\n\
         First Published: {year}\n\
         Publisher: {publisher}\n\
         ISBN: {isbn}..."
    )
}

#[cfg(test)]
mod tests {
    use super::format_results;
    use crate::{Doc, SearchOutcome, SearchResponse};

    fn outcome_of(docs: Vec<Doc>) -> SearchOutcome {
        SearchOutcome::Response(SearchResponse { docs })
    }

    #[test]
    fn fetch_failed_renders_as_no_results() {
        assert_eq!("No results found.", format_results(&SearchOutcome::FetchFailed));
    }

    #[test]
    fn empty_docs_renders_as_no_results() {
        assert_eq!("No results found.", format_results(&outcome_of(vec![])));
    }

    #[test]
    fn complete_doc_renders_all_five_lines() {
        let doc = Doc {
            title: Some("The Hobbit".to_owned()),
            author_name: Some(vec!["J.R.R. Tolkien".to_owned()]),
            first_publish_year: Some(1937),
            publisher: Some(vec![
                "Houghton Mifflin".to_owned(),
                "George Allen & Unwin".to_owned(),
            ]),
            isbn: Some(vec!["9780618260300".to_owned(), "0618260307".to_owned()]),
        };

        assert_eq!(
            "Title: The Hobbit\n\
             Author(s): J.R.R. Tolkien\n\
             First Published: 1937\n\
             Publisher: Houghton Mifflin, George Allen & Unwin\n\
             ISBN: 978...",
            format_results(&outcome_of(vec![doc]))
        );
    }

    #[test]
    fn missing_fields_render_as_unknown() {
        let doc = Doc {
            title: None,
            author_name: None,
            first_publish_year: None,
            publisher: None,
            isbn: None,
        };

        let text = format_results(&outcome_of(vec![doc]));

        assert!(text.contains("Title: Unknown"));
        assert!(text.contains("Author(s): Unknown"));
        assert!(text.contains("First Published: Unknown"));
        assert!(text.contains("Publisher: Unknown"));
    }

    #[test]
    fn missing_isbn_renders_as_bare_ellipsis() {
        let doc = Doc::default();

        let text = format_results(&outcome_of(vec![doc]));

        assert!(text.ends_with("ISBN: ..."));
    }

    #[test]
    fn isbn_line_truncates_the_joined_string_to_three_characters() {
        let doc = Doc {
            isbn: Some(vec!["11".to_owned(), "22".to_owned()]),
            ..Doc::default()
        };

        let text = format_results(&outcome_of(vec![doc]));

        // "11, 22" joined, then cut to "11,"
        assert!(text.ends_with("ISBN: 11,..."));
    }

    #[test]
    fn doc_blocks_are_joined_by_a_single_blank_line() {
        let first = Doc {
            title: Some("First".to_owned()),
            ..Doc::default()
        };
        let second = Doc {
            title: Some("Second".to_owned()),
            ..Doc::default()
        };

        let text = format_results(&outcome_of(vec![first, second]));

        assert_eq!(1, text.matches("\n\n").count());
        assert!(text.contains("ISBN: ...\n\nTitle: Second"));
    }
}
