use std::{collections::HashMap, sync::OnceLock};

use log::warn;
use regex::Regex;

/// A single frontmatter value. Only flat strings and flat string lists exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum FieldValue {
    Scalar(String),
    List(Vec<String>),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Metadata(HashMap<String, FieldValue>);

impl Metadata {
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Scalar as is; a list is joined with `", "`.
    pub fn get_str(&self, key: &str) -> Option<String> {
        self.get(key).map(|v| match v {
            FieldValue::Scalar(s) => s.clone(),
            FieldValue::List(l) => l.join(", "),
        })
    }

    /// List as is; a scalar becomes a one-element list.
    pub fn get_list(&self, key: &str) -> Option<Vec<String>> {
        self.get(key).map(|v| match v {
            FieldValue::Scalar(s) => vec![s.clone()],
            FieldValue::List(l) => l.clone(),
        })
    }
}

fn header_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        regex::RegexBuilder::new(r"\A---\s*\n(.*?)\n---\s*\n")
            .dot_matches_new_line(true)
            .build()
            .unwrap()
    })
}

/// Splits `content` into its metadata block and the remaining body.
///
/// The block has to start at the very first byte. Without it, `None` and the
/// untouched content are returned.
pub(crate) fn parse(content: &str) -> (Option<Metadata>, &str) {
    let Some(caps) = header_pattern().captures(content) else {
        return (None, content);
    };
    let (Some(whole), Some(header)) = (caps.get(0), caps.get(1)) else {
        return (None, content);
    };

    let mut metadata = Metadata::default();
    for line in header.as_str().trim().split('\n') {
        let Some((name, value)) = line.split_once(':') else {
            continue;
        };
        let name = name.trim();
        let value = value.trim();
        metadata
            .0
            .insert(name.to_string(), parse_value(name, value));
    }

    (Some(metadata), &content[whole.end()..])
}

fn parse_value(name: &str, value: &str) -> FieldValue {
    if value.len() >= 2 && value.starts_with('[') && value.ends_with(']') {
        let items = value[1..value.len() - 1]
            .split(',')
            .map(|item| item.trim().trim_matches(&['"', '\''][..]).to_string())
            .collect();
        return FieldValue::List(items);
    }

    if let Some(quote) = value.chars().next().filter(|c| *c == '"' || *c == '\'') {
        if value.len() < 2 || !value.ends_with(quote) {
            warn!("value of `{name}` is not closed by {quote}: last character is dropped anyway");
        }
        let mut chars = value.chars();
        chars.next();
        chars.next_back();
        return FieldValue::Scalar(chars.as_str().to_string());
    }

    FieldValue::Scalar(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scalar(s: &str) -> FieldValue {
        FieldValue::Scalar(s.to_string())
    }

    fn list(items: &[&str]) -> FieldValue {
        FieldValue::List(items.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn extracts_block_and_body() {
        let content = "---\ntitle: Hello\ndate: 2024-01-01\n---\nbody line\nmore\n";
        let (meta, body) = parse(content);
        let meta = meta.unwrap();
        assert_eq!(meta.get("title"), Some(&scalar("Hello")));
        assert_eq!(meta.get("date"), Some(&scalar("2024-01-01")));
        assert_eq!(body, "body line\nmore\n");
    }

    #[test]
    fn content_without_block_is_returned_unchanged() {
        let content = "# just markdown\n\ntitle: nope\n";
        let (meta, body) = parse(content);
        assert!(meta.is_none());
        assert_eq!(body, content);
    }

    #[test]
    fn block_must_be_at_start() {
        let content = "\n---\ntitle: Hello\n---\nbody\n";
        assert!(parse(content).0.is_none());
    }

    #[test]
    fn unclosed_block_is_not_frontmatter() {
        let content = "---\ntitle: Hello\nsome body text without a fence\n";
        let (meta, body) = parse(content);
        assert!(meta.is_none());
        assert_eq!(body, content);
    }

    #[test]
    fn closing_fence_needs_trailing_newline() {
        assert!(parse("---\ntitle: Hello\n---").0.is_none());
        assert!(parse("---\ntitle: Hello\n---\n").0.is_some());
    }

    #[test]
    fn fences_tolerate_trailing_whitespace_and_crlf() {
        let (meta, body) = parse("---  \r\ntitle: Hello\r\n---\r\nbody");
        assert_eq!(meta.unwrap().get("title"), Some(&scalar("Hello")));
        assert_eq!(body, "body");
    }

    #[test]
    fn splits_on_first_colon_only() {
        let (meta, _) = parse("---\ntitle: Time: 10:30\n---\n");
        assert_eq!(meta.unwrap().get("title"), Some(&scalar("Time: 10:30")));
    }

    #[test]
    fn lines_without_colon_are_ignored() {
        let (meta, _) = parse("---\ntitle: Hello\njust some words\n\n---\n");
        let meta = meta.unwrap();
        assert_eq!(meta, {
            let mut expected = Metadata::default();
            expected.0.insert("title".to_string(), scalar("Hello"));
            expected
        });
    }

    #[test]
    fn block_without_any_pair_is_empty() {
        let (meta, body) = parse("---\njust words\nmore words\n---\nbody\n");
        assert!(meta.unwrap().is_empty());
        assert_eq!(body, "body\n");
    }

    #[test]
    fn array_values_are_split_and_unquoted() {
        let (meta, _) = parse("---\ntags: [a, \"b\", 'c' ,d]\n---\n");
        assert_eq!(meta.unwrap().get("tags"), Some(&list(&["a", "b", "c", "d"])));
    }

    #[test]
    fn array_quotes_are_stripped_per_end() {
        let (meta, _) = parse("---\ntags: [\"a', 'b]\n---\n");
        assert_eq!(meta.unwrap().get("tags"), Some(&list(&["a", "b"])));
    }

    #[test]
    fn empty_array_has_one_empty_item() {
        let (meta, _) = parse("---\ntags: []\n---\n");
        assert_eq!(meta.unwrap().get("tags"), Some(&list(&[""])));
    }

    #[test]
    fn quoted_scalars_lose_first_and_last_character() {
        let (meta, _) = parse("---\na: \"World\"\nb: 'single'\nc: \"unterminated\n---\n");
        let meta = meta.unwrap();
        assert_eq!(meta.get("a"), Some(&scalar("World")));
        assert_eq!(meta.get("b"), Some(&scalar("single")));
        assert_eq!(meta.get("c"), Some(&scalar("unterminate")));
    }

    #[test]
    fn lone_quote_becomes_empty() {
        let (meta, _) = parse("---\na: \"\n---\n");
        assert_eq!(meta.unwrap().get("a"), Some(&scalar("")));
    }

    #[test]
    fn no_type_coercion() {
        let (meta, _) = parse("---\ncount: 42\ndraft: true\n---\n");
        let meta = meta.unwrap();
        assert_eq!(meta.get("count"), Some(&scalar("42")));
        assert_eq!(meta.get("draft"), Some(&scalar("true")));
    }

    #[test]
    fn last_duplicate_wins() {
        let (meta, _) = parse("---\ntitle: first\ntitle: second\n---\n");
        assert_eq!(meta.unwrap().get("title"), Some(&scalar("second")));
    }

    #[test]
    fn non_ascii_values() {
        let (meta, _) = parse("---\ntitle: \"안녕하세요\"\ncategory: 일상\n---\n");
        let meta = meta.unwrap();
        assert_eq!(meta.get("title"), Some(&scalar("안녕하세요")));
        assert_eq!(meta.get("category"), Some(&scalar("일상")));
    }

    #[test]
    fn accessors_coerce_shapes() {
        let (meta, _) = parse("---\ntags: solo\ntitle: [a, b]\n---\n");
        let meta = meta.unwrap();
        assert_eq!(meta.get_list("tags"), Some(vec!["solo".to_string()]));
        assert_eq!(meta.get_str("title"), Some("a, b".to_string()));
        assert_eq!(meta.get_str("missing"), None);
    }
}
