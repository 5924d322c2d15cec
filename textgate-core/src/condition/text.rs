//! Regular-expression condition over document text

use super::StringCondition;
use crate::{
    document::{HandlerDoc, ParseState},
    error::Result,
};
use regex::{Regex, RegexBuilder};

/// Matches documents whose text contains a pattern
///
/// Each section is searched independently, so a match spanning two sections
/// is only found when the reader's boundary detection keeps it within one.
/// Paragraph and sentence breaks are preferred, which keeps phrases intact in
/// practice.
#[derive(Debug, Clone)]
pub struct TextCondition {
    pattern: Regex,
}

impl TextCondition {
    /// Match the regular expression `pattern`
    pub fn new(pattern: &str) -> Result<Self> {
        Self::build(pattern, false, false)
    }

    /// Match `text` literally
    pub fn literal(text: &str) -> Result<Self> {
        Self::build(text, true, false)
    }

    /// Match the regular expression `pattern`, ignoring case
    pub fn ignore_case(pattern: &str) -> Result<Self> {
        Self::build(pattern, false, true)
    }

    /// Match `pattern`, either as a regular expression or as literal text
    pub fn build(pattern: &str, literal: bool, ignore_case: bool) -> Result<Self> {
        let source = if literal {
            regex::escape(pattern)
        } else {
            pattern.to_string()
        };
        let pattern = RegexBuilder::new(&source)
            .case_insensitive(ignore_case)
            .build()?;
        Ok(Self { pattern })
    }

    /// Whether `text` contains the pattern
    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    /// Source of the compiled pattern
    pub fn as_str(&self) -> &str {
        self.pattern.as_str()
    }
}

impl StringCondition for TextCondition {
    fn test_section(
        &self,
        _doc: &mut HandlerDoc,
        section: &str,
        _parse_state: ParseState,
        _section_index: usize,
    ) -> Result<bool> {
        Ok(self.is_match(section))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::{DocumentCondition, Sectioned};
    use crate::config::EvaluatorConfig;
    use crate::error::EvalError;
    use std::io::Cursor;

    fn test_text(condition: TextCondition, max: usize, text: &str) -> bool {
        let condition = Sectioned::with_config(condition, EvaluatorConfig::new(max)).unwrap();
        let mut doc = HandlerDoc::new("test");
        let mut content = Cursor::new(text.to_string());
        condition
            .test_document(&mut doc, Some(&mut content), ParseState::Post)
            .unwrap()
    }

    #[test]
    fn test_regex_match() {
        let condition = TextCondition::new(r"\bw[aeiou]rld\b").unwrap();
        assert!(test_text(condition, 100, "hello world"));
    }

    #[test]
    fn test_literal_escapes_metacharacters() {
        let condition = TextCondition::literal("a+b").unwrap();
        assert!(condition.is_match("x a+b y"));
        assert!(!condition.is_match("aab"));
    }

    #[test]
    fn test_literal_ignoring_case() {
        let condition = TextCondition::build("C++", true, true).unwrap();
        assert!(condition.is_match("written in c++ mostly"));
    }

    #[test]
    fn test_ignore_case() {
        let condition = TextCondition::ignore_case("WORLD").unwrap();
        assert!(condition.is_match("hello world"));
        assert!(!TextCondition::new("WORLD").unwrap().is_match("hello world"));
    }

    #[test]
    fn test_match_in_late_section() {
        let text = "Nothing here.\n\nStill nothing.\n\nThe needle is here.";
        let condition = TextCondition::literal("needle").unwrap();
        assert!(test_text(condition, 20, text));
    }

    #[test]
    fn test_no_match_across_document() {
        let condition = TextCondition::literal("absent").unwrap();
        assert!(!test_text(condition, 8, "some words without it"));
    }

    #[test]
    fn test_empty_content_only_matches_empty_pattern() {
        assert!(!test_text(TextCondition::literal("x").unwrap(), 10, ""));
        assert!(test_text(TextCondition::new("^$").unwrap(), 10, ""));
    }

    #[test]
    fn test_invalid_pattern() {
        let result = TextCondition::new("(unclosed");
        assert!(matches!(result, Err(EvalError::InvalidPattern(_))));
    }
}
