use std::io::{self, BufRead, Write};
use crate::errors::ReviewResult;
use crate::structs::pull_request::PullRequest;

fn read_line(question: &str) -> ReviewResult<String> {
    print!("{}", question);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Asks a yes/no question; anything but `y`/`yes` counts as no.
pub fn confirm(question: &str) -> ReviewResult<bool> {
    let answer = read_line(&format!("{} [y/N] ", question))?;
    Ok(matches!(answer.to_lowercase().as_str(), "y" | "yes"))
}

pub fn select_pull_requests(pull_requests: &[PullRequest]) -> ReviewResult<Vec<u64>> {
    println!("\n📋 Open pull requests:");
    for pr in pull_requests {
        println!(
            "   #{:<5} {} (by {})",
            pr.number,
            pr.title,
            pr.user.as_deref().unwrap_or("unknown")
        );
    }

    let answer = read_line("\nEnter PR numbers to analyze (comma separated, empty for all): ")?;
    Ok(parse_selection(&answer, pull_requests))
}

/// Comma separated PR numbers, restricted to the open ones. Empty input selects all.
pub fn parse_selection(input: &str, pull_requests: &[PullRequest]) -> Vec<u64> {
    if input.trim().is_empty() {
        return pull_requests.iter().map(|pr| pr.number).collect();
    }

    let mut selected: Vec<u64> = Vec::new();
    for part in input.split(',') {
        let part = part.trim().trim_start_matches('#');
        match part.parse::<u64>() {
            Ok(number) if pull_requests.iter().any(|pr| pr.number == number) => {
                if !selected.contains(&number) {
                    selected.push(number);
                }
            }
            Ok(number) => log::warn!("⚠️ PR #{} is not open, skipping", number),
            Err(_) if part.is_empty() => {}
            Err(_) => log::warn!("⚠️ Ignoring invalid PR number '{}'", part),
        }
    }
    selected
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prs(numbers: &[u64]) -> Vec<PullRequest> {
        numbers
            .iter()
            .map(|n| PullRequest {
                number: *n,
                title: format!("PR {}", n),
                user: None,
                created_at: String::new(),
                updated_at: String::new(),
            })
            .collect()
    }

    #[test]
    fn empty_input_selects_everything() {
        assert_eq!(parse_selection("  ", &prs(&[1, 2, 3])), vec![1, 2, 3]);
    }

    #[test]
    fn keeps_only_open_numbers_in_order() {
        assert_eq!(parse_selection("3, #1, 9, abc, 3,", &prs(&[1, 2, 3])), vec![3, 1]);
    }
}
