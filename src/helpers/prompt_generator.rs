use std::borrow::Cow;
use crate::config::constants::{CONTENT_UNAVAILABLE, TRUNCATION_MARKER};
use crate::prompts::analysis_prompt::ANALYSIS_PROMPT;
use crate::structs::pr_file::PrFile;

/// Cuts `content` to `max_chars` characters and appends the truncation marker.
pub fn truncate_content(content: &str, max_chars: usize) -> Cow<'_, str> {
    match content.char_indices().nth(max_chars) {
        Some((cut, _)) => Cow::Owned(format!("{}{}", &content[..cut], TRUNCATION_MARKER)),
        None => Cow::Borrowed(content),
    }
}

pub fn build_code_content(owner: &str, repo: &str, pr_number: u64, files: &[PrFile], max_chars: usize) -> String {
    let mut code = format!("Pull Request #{} from {}/{}\n\n", pr_number, owner, repo);

    for file in files {
        let content = match &file.content {
            Some(content) if !content.is_empty() => truncate_content(content, max_chars),
            _ => Cow::Borrowed(CONTENT_UNAVAILABLE),
        };
        code.push_str(&format!("\n--- {} ---\n{}\n", file.filename, content));
    }

    code
}

pub fn generate_prompt(code_content: &str) -> String {
    ANALYSIS_PROMPT.replacen("{code}", code_content, 1)
}
