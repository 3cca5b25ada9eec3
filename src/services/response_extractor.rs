use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};
use crate::errors::{ReviewError, ReviewResult};
use crate::structs::partial_analysis::PartialAnalysis;

/// Section label for one field plus the synonyms tried after it.
#[derive(Debug, Clone, Copy)]
pub struct FieldLabels {
    pub label: &'static str,
    pub alternatives: &'static [&'static str],
}

pub const SUMMARY_LABELS: FieldLabels = FieldLabels { label: "summary", alternatives: &["overall assessment"] };
pub const RISKY_FILES_LABELS: FieldLabels = FieldLabels { label: "risky files", alternatives: &["need attention"] };
pub const COMPLEX_FUNCTIONS_LABELS: FieldLabels = FieldLabels { label: "complex functions", alternatives: &[] };
pub const REFACTORING_SUGGESTIONS_LABELS: FieldLabels = FieldLabels { label: "refactoring suggestions", alternatives: &[] };
pub const SECURITY_ISSUES_LABELS: FieldLabels = FieldLabels { label: "security issues", alternatives: &["security", "vulnerabilities"] };

/// `(text, label) -> items`. `None` when the pattern does not match or yields nothing.
pub type ListStrategy = fn(&str, &str) -> Option<Vec<String>>;

pub struct NamedStrategy {
    pub name: &'static str,
    pub run: ListStrategy,
}

/// Tried in order for the primary label, then again for each alternative.
pub const LABELLED_LIST_STRATEGIES: &[NamedStrategy] = &[
    NamedStrategy { name: "bullet list", run: bullet_block },
    NamedStrategy { name: "numbered list", run: numbered_block },
    NamedStrategy { name: "json array", run: json_array_fragment },
];

/// Anything after a label: closing quote or markdown emphasis, then a colon or line break.
const LABEL_TAIL: &str = r#"["*]*[ \t]*(?::[*]*|\r?\n)"#;

static LIST_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*(?:[-*•]|\d+[.)])\s*").expect("valid list marker pattern"));

static SECTION_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^\s*["*#]*[A-Za-z][A-Za-z _-]{0,40}["*]*\s*:"#).expect("valid section header pattern")
});

pub struct ResponseExtractor;

impl ResponseExtractor {
    /// Recovers as much of the five-field record as possible from raw model text.
    ///
    /// A JSON object is tried first; fields it does not provide fall through to
    /// the label-based strategies. Never fails.
    pub fn extract(text: &str) -> PartialAnalysis {
        let mut partial = match Self::extract_structured(text) {
            Ok(partial) => partial,
            Err(e) => {
                log::debug!("Structured extraction failed, using pattern fallbacks: {}", e);
                PartialAnalysis::default()
            }
        };

        if partial.is_complete() {
            return partial;
        }

        if partial.summary.is_none() {
            partial.summary = Self::extract_section(text, &SUMMARY_LABELS);
        }
        if partial.risky_files.is_none() {
            partial.risky_files = Self::extract_list(text, &RISKY_FILES_LABELS);
        }
        if partial.complex_functions.is_none() {
            partial.complex_functions = Self::extract_list(text, &COMPLEX_FUNCTIONS_LABELS);
        }
        if partial.refactoring_suggestions.is_none() {
            partial.refactoring_suggestions = Self::extract_list(text, &REFACTORING_SUGGESTIONS_LABELS);
        }
        if partial.security_issues.is_none() {
            partial.security_issues = Self::extract_list(text, &SECURITY_ISSUES_LABELS);
        }

        log::debug!("Extracted {}/5 analysis fields", partial.found_fields());
        partial
    }

    /// Parses the first `{...}` span as a record carrying any of the five fields.
    pub fn extract_structured(text: &str) -> ReviewResult<PartialAnalysis> {
        let object = Self::find_json_object(text)?;

        let partial = PartialAnalysis {
            summary: field(&object, &["summary", "overallAssessment", "overall_assessment"]).and_then(value_to_text),
            risky_files: field(&object, &["riskyFiles", "risky_files"]).and_then(value_to_items),
            complex_functions: field(&object, &["complexFunctions", "complex_functions"]).and_then(value_to_items),
            refactoring_suggestions: field(&object, &["refactoringSuggestions", "refactoring_suggestions"]).and_then(value_to_items),
            security_issues: field(&object, &["securityIssues", "security_issues"]).and_then(value_to_items),
        };

        if partial.found_fields() == 0 {
            return Err(ReviewError::parse_failure("JSON", "object carries none of the analysis fields"));
        }

        Ok(partial)
    }

    pub fn extract_section(text: &str, labels: &FieldLabels) -> Option<String> {
        std::iter::once(labels.label)
            .chain(labels.alternatives.iter().copied())
            .find_map(|label| section_text(text, label))
    }

    pub fn extract_list(text: &str, labels: &FieldLabels) -> Option<Vec<String>> {
        for label in std::iter::once(labels.label).chain(labels.alternatives.iter().copied()) {
            for strategy in LABELLED_LIST_STRATEGIES {
                if let Some(items) = (strategy.run)(text, label) {
                    log::debug!("Matched '{}' via {}", label, strategy.name);
                    return Some(items);
                }
            }
        }

        std::iter::once(labels.label)
            .chain(labels.alternatives.iter().copied())
            .find_map(|label| {
                let items = generic_block(text, label);
                if items.is_some() {
                    log::debug!("Matched '{}' via free text", label);
                }
                items
            })
    }

    fn find_json_object(text: &str) -> ReviewResult<Map<String, Value>> {
        let start = text.find('{')
            .ok_or_else(|| ReviewError::parse_failure("JSON", "no '{' in response"))?;

        let mut candidates: Vec<&str> = Vec::with_capacity(2);
        if let Some(end) = text.rfind('}') {
            if end > start {
                candidates.push(&text[start..=end]);
            }
        }
        if let Some(balanced) = balanced_object(&text[start..]) {
            if !candidates.contains(&balanced) {
                candidates.push(balanced);
            }
        }

        let mut last_error = ReviewError::parse_failure("JSON", "no closing '}' in response");
        for candidate in candidates {
            match serde_json::from_str::<Value>(candidate) {
                Ok(Value::Object(object)) => return Ok(object),
                Ok(_) => last_error = ReviewError::parse_failure("JSON", "top-level value is not an object"),
                Err(e) => last_error = e.into(),
            }
        }

        Err(last_error)
    }
}

/// Bullet lines (`-`, `*`, `•`) directly under the label. `**bold**` lines are not bullets.
pub fn bullet_block(text: &str, label: &str) -> Option<Vec<String>> {
    let pattern = format!(r"(?i){}{}\s*((?:[ \t]*(?:[-•]|\*[^*\n])[^\n]*(?:\n|$))+)", label_pattern(label), LABEL_TAIL);
    capture_lines(text, &pattern)
}

/// Numbered lines (`1.`, `2)`) directly under the label.
pub fn numbered_block(text: &str, label: &str) -> Option<Vec<String>> {
    let pattern = format!(r"(?i){}{}\s*((?:[ \t]*\d+[.)][^\n]*(?:\n|$))+)", label_pattern(label), LABEL_TAIL);
    capture_lines(text, &pattern)
}

/// `"label": [ ... ]`, parsed as JSON or split on commas when that fails.
pub fn json_array_fragment(text: &str, label: &str) -> Option<Vec<String>> {
    let pattern = format!(r#"(?is)"{}"\s*:\s*\[(.*?)\]"#, label_pattern(label));
    let regex = Regex::new(&pattern).ok()?;
    let inner = regex.captures(text)?.get(1)?.as_str();

    let items: Vec<String> = match serde_json::from_str::<Vec<Value>>(&format!("[{}]", inner)) {
        Ok(values) => values
            .iter()
            .filter_map(value_to_text)
            .map(|item| item.trim().to_string())
            .filter(|item| !item.is_empty())
            .collect(),
        Err(_) => inner
            .split(',')
            .map(|item| item.trim_matches(|c: char| c == '"' || c == '\'' || c.is_whitespace()).to_string())
            .filter(|item| !item.is_empty())
            .collect(),
    };

    non_empty(items)
}

/// `label: free text` up to a blank line or a line starting with a capital letter.
pub fn generic_block(text: &str, label: &str) -> Option<Vec<String>> {
    let pattern = format!(r"(?i){}{}\s*", label_pattern(label), LABEL_TAIL);
    let regex = Regex::new(&pattern).ok()?;
    let rest = &text[regex.find(text)?.end()..];

    let bytes = rest.as_bytes();
    let mut end = rest.len();
    for (i, _) in rest.match_indices('\n') {
        match bytes.get(i + 1) {
            Some(b'\n') => {
                end = i;
                break;
            }
            Some(next) if next.is_ascii_uppercase() => {
                end = i;
                break;
            }
            _ => {}
        }
    }

    non_empty(clean_lines(&rest[..end]))
}

fn section_text(text: &str, label: &str) -> Option<String> {
    let pattern = format!(r"(?i){}{}\s*", label_pattern(label), LABEL_TAIL);
    let regex = Regex::new(&pattern).ok()?;
    let rest = &text[regex.find(text)?.end()..];

    let mut lines: Vec<&str> = Vec::new();
    for (index, line) in rest.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            break;
        }
        if index > 0 && (SECTION_HEADER.is_match(line) || LIST_MARKER.is_match(line)) {
            break;
        }
        lines.push(line);
    }

    let joined = lines.join("\n");
    let cleaned = joined
        .trim()
        .trim_end_matches(',')
        .trim_matches('"')
        .trim();

    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.to_string())
    }
}

/// Label words joined so `risky files`, `riskyFiles`, `risky_files` and `Risky-Files` all match.
fn label_pattern(label: &str) -> String {
    let words: Vec<String> = label.split_whitespace().map(regex::escape).collect();
    format!(r"\b{}", words.join(r"[\s_-]*"))
}

fn capture_lines(text: &str, pattern: &str) -> Option<Vec<String>> {
    let regex = Regex::new(pattern).ok()?;
    let block = regex.captures(text)?.get(1)?.as_str();
    non_empty(clean_lines(block))
}

fn clean_lines(block: &str) -> Vec<String> {
    block
        .lines()
        .map(|line| LIST_MARKER.replace(line, "").trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}

fn non_empty(items: Vec<String>) -> Option<Vec<String>> {
    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}

fn field<'a>(object: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|key| object.get(*key))
}

fn value_to_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn value_to_items(value: &Value) -> Option<Vec<String>> {
    match value {
        Value::Null => None,
        Value::Array(items) => Some(items.iter().filter_map(value_to_text).collect()),
        Value::String(s) if s.trim().is_empty() => Some(Vec::new()),
        other => value_to_text(other).map(|item| vec![item]),
    }
}

/// The first `{ ... }` whose braces balance, skipping braces inside strings.
fn balanced_object(text: &str) -> Option<&str> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in text.char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(&text[..=i]);
                }
            }
            _ => {}
        }
    }

    None
}
