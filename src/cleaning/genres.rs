use anyhow::{Context, Result};
use regex::Regex;
use std::collections::HashSet;

/// Parses raw genre labels into normalized tag sets
pub struct GenreParser {
    qualifier_regex: Regex,
}

impl GenreParser {
    pub fn new() -> Result<Self> {
        // Qualifiers like "(early)" or "(later)" carry era information, not genre
        let qualifier_regex = Regex::new(r"\([^)]*\)")
            .context("Failed to compile genre qualifier regex")?;

        Ok(Self { qualifier_regex })
    }

    /// Lowercase the label, strip parenthesized qualifiers, split on the
    /// separators the source data uses, and trim each piece. Empty pieces
    /// are dropped; an unusable label yields an empty set.
    pub fn parse(&self, label: &str) -> HashSet<String> {
        let lowered = label.to_lowercase();
        let stripped = self.qualifier_regex.replace_all(&lowered, "");

        stripped
            .split([',', ';', '/'])
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(label: &str) -> HashSet<String> {
        GenreParser::new().unwrap().parse(label)
    }

    #[test]
    fn splits_on_commas_and_slashes() {
        let tags = parse("Doom/Death Metal, Gothic Metal");

        assert_eq!(tags.len(), 3);
        assert!(tags.contains("doom"));
        assert!(tags.contains("death metal"));
        assert!(tags.contains("gothic metal"));
    }

    #[test]
    fn strips_parenthesized_qualifiers() {
        let tags = parse("Progressive Death Metal (early); Atmospheric Black Metal (later)");

        assert_eq!(tags.len(), 2);
        assert!(tags.contains("progressive death metal"));
        assert!(tags.contains("atmospheric black metal"));
    }

    #[test]
    fn lowercases_tags() {
        let tags = parse("Death Metal");
        assert!(tags.contains("death metal"));
    }

    #[test]
    fn unusable_label_yields_empty_set() {
        assert!(parse("").is_empty());
        assert!(parse("(early)").is_empty());
        assert!(parse(" , ; / ").is_empty());
    }

    #[test]
    fn duplicate_pieces_collapse() {
        let tags = parse("Black Metal, Black Metal (later)");
        assert_eq!(tags.len(), 1);
    }
}
