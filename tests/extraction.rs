use pr_review_helper::config::constants::SUMMARY_PLACEHOLDER;
use pr_review_helper::services::response_extractor::ResponseExtractor;
use pr_review_helper::services::response_normalizer::ResponseNormalizer;

fn names(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn markdown_review_is_fully_recovered() {
    let reply = "\
## Summary
The change adds a retry wrapper around the HTTP client. Overall quality is good.

## Risky Files
- src/http/retry.rs
- src/http/client.rs

## Complex Functions
1. retry_with_backoff() - three nested loops
2. build_request() - many optional branches

## Refactoring Suggestions
* Move backoff constants into config
* Split build_request into smaller helpers

## Security Issues
- Authorization header is logged at debug level
";

    let result = ResponseNormalizer::normalize_text(reply, &names(&["ignored.rs"]));

    assert_eq!(
        result.summary,
        "The change adds a retry wrapper around the HTTP client. Overall quality is good."
    );
    assert_eq!(result.risky_files, names(&["src/http/retry.rs", "src/http/client.rs"]));
    assert_eq!(
        result.complex_functions,
        names(&["retry_with_backoff() - three nested loops", "build_request() - many optional branches"])
    );
    assert_eq!(
        result.refactoring_suggestions,
        names(&["Move backoff constants into config", "Split build_request into smaller helpers"])
    );
    assert_eq!(result.security_issues, names(&["Authorization header is logged at debug level"]));
}

#[test]
fn json_wrapped_in_prose_wins_over_patterns() {
    let reply = r#"Sure! Here is the analysis you asked for.

{
  "summary": "Small, focused change.",
  "riskyFiles": [],
  "complexFunctions": ["parse() has 12 branches"],
  "refactoringSuggestions": [],
  "securityIssues": []
}

Risky files:
- this/should/not/appear.rs
"#;

    let partial = ResponseExtractor::extract(reply);
    assert_eq!(partial.risky_files, Some(Vec::new()));

    let result = ResponseNormalizer::normalize(partial, &names(&["a.rs", "b.rs"]));
    assert_eq!(result.summary, "Small, focused change.");
    assert_eq!(result.risky_files, names(&["a.rs", "b.rs"]));
    assert_eq!(result.complex_functions, names(&["parse() has 12 branches"]));
}

#[test]
fn truncated_json_still_yields_fragments() {
    let reply = r#"{
  "summary": "Reasonable change",
  "riskyFiles": ["src/main.rs", "src/db.rs"],
  "complexFunctions": ["migrate()"#;

    let result = ResponseNormalizer::normalize_text(reply, &[]);
    assert_eq!(result.summary, "Reasonable change");
    assert_eq!(result.risky_files, names(&["src/main.rs", "src/db.rs"]));
}

#[test]
fn empty_reply_gets_every_default() {
    let result = ResponseNormalizer::normalize_text("", &names(&["1.rs", "2.rs", "3.rs", "4.rs", "5.rs"]));
    assert_eq!(result.summary, SUMMARY_PLACEHOLDER);
    assert_eq!(result.risky_files, names(&["1.rs", "2.rs", "3.rs"]));
    assert!(result.complex_functions.is_empty());
    assert!(result.refactoring_suggestions.is_empty());
    assert!(result.security_issues.is_empty());
}
