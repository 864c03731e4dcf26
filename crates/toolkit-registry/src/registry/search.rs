//! Free-text matching over tool names and descriptions

use super::Tool;

/// A case-folded search needle.
///
/// Matching is plain substring containment against the lowercased name and
/// description, so partial words match (`"calc"` finds every calculator).
/// There is no tokenization and no relevance ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    /// Parse raw input into a query.
    ///
    /// Returns `None` for empty or whitespace-only input, which matches
    /// nothing. Otherwise the needle is the input as typed, lowercased.
    pub fn parse(input: &str) -> Option<Self> {
        if input.trim().is_empty() {
            return None;
        }
        Some(Self {
            needle: input.to_lowercase(),
        })
    }

    /// The lowercased needle.
    pub fn needle(&self) -> &str {
        &self.needle
    }

    /// Check whether the tool's name or description contains the needle.
    pub fn matches(&self, tool: &Tool) -> bool {
        tool.name.to_lowercase().contains(&self.needle)
            || tool.description.to_lowercase().contains(&self.needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn make_tool() -> Tool {
        Tool::new(
            "uuid-generator",
            "UUID Generator",
            "Generate random version 4 UUIDs",
            "generators",
            "/tools/uuid-generator",
            "fingerprint",
        )
    }

    #[rstest]
    #[case("")]
    #[case(" ")]
    #[case("\t\n")]
    fn test_blank_input_is_rejected(#[case] input: &str) {
        assert_eq!(SearchQuery::parse(input), None);
    }

    #[test]
    fn test_needle_is_lowercased() {
        let query = SearchQuery::parse("UuId").unwrap();
        assert_eq!(query.needle(), "uuid");
    }

    #[rstest]
    #[case("uuid", true)]
    #[case("UUID", true)]
    #[case("generator", true)]
    #[case("random version", true)]
    #[case("gen", true)]
    #[case("qr code", false)]
    #[case("uuids", true)]
    #[case("uuids ", false)]
    fn test_matches(#[case] input: &str, #[case] expected: bool) {
        let query = SearchQuery::parse(input).unwrap();
        assert_eq!(query.matches(&make_tool()), expected, "query {input:?}");
    }

    #[test]
    fn test_matches_description_only() {
        let query = SearchQuery::parse("version 4").unwrap();
        assert!(query.matches(&make_tool()));
    }
}
