pub const ANALYSIS_PROMPT: &str = r#"Analyze the following code from a GitHub Pull Request for:
1. Code quality issues
2. Complex functions that could be simplified
3. Potential security vulnerabilities
4. Refactoring suggestions
5. Overall code health assessment

Code:
{code}

Provide your analysis in the following JSON format:
{
  "summary": "Overall assessment of the code",
  "riskyFiles": ["list of files that need attention"],
  "complexFunctions": ["list of complex functions with descriptions"],
  "refactoringSuggestions": ["list of specific refactoring suggestions"],
  "securityIssues": ["list of potential security concerns"]
}
"#;
