//! Link extraction from page text
//!
//! Only lines that start with `[` are link lines. The target is everything
//! after the first `(` except the line's final character, so
//! `[Go](go.md)` links to `go.md`.
//!
//! Two departures from slicing the raw line are deliberate: trailing
//! whitespace is trimmed before the last character is dropped, and a `[`
//! line with no `(` yields no link instead of the whole line minus its last
//! character.

use super::types::LinkEdge;
use tracing::debug;

/// Target of a single link line, or `None` if the line is not a link
pub fn parse_link_line(line: &str) -> Option<&str> {
    let line = line.trim_end();
    if !line.starts_with('[') {
        return None;
    }

    let Some(open) = line.find('(') else {
        debug!("Link line without target: {}", line);
        return None;
    };

    let mut target = line[open + 1..].chars();
    target.next_back();
    Some(target.as_str())
}

/// Every link found in `text`, attributed to `page`
pub fn extract_links(page: &str, text: &str) -> Vec<LinkEdge> {
    text.lines()
        .filter_map(parse_link_line)
        .map(|target| LinkEdge::new(page, target))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_link_line() {
        assert_eq!(parse_link_line("[Go](go.md)"), Some("go.md"));
        assert_eq!(parse_link_line("[Go](go.md)  \r"), Some("go.md"));
        assert_eq!(parse_link_line("[Java docs](./java.md)"), Some("./java.md"));
    }

    #[test]
    fn test_parse_non_link_lines() {
        assert_eq!(parse_link_line("# Heading"), None);
        assert_eq!(parse_link_line("See [Go](go.md) too"), None);
        assert_eq!(parse_link_line("[no target here]"), None);
        assert_eq!(parse_link_line(""), None);
    }

    #[test]
    fn test_parse_empty_target() {
        assert_eq!(parse_link_line("[x]()"), Some(""));
        assert_eq!(parse_link_line("[x]("), Some(""));
    }

    #[test]
    fn test_extract_links() {
        let text = "# README\n\nLanguages:\n\n[Go](go.md)\n[Java](java.md)\n[Python](python.md)\n";
        let edges = extract_links("README.md", text);
        assert_eq!(
            edges,
            vec![
                LinkEdge::new("README.md", "go.md"),
                LinkEdge::new("README.md", "java.md"),
                LinkEdge::new("README.md", "python.md"),
            ]
        );
    }
}
