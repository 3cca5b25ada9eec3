pub mod github_content;
pub mod github_pr_file;
pub mod github_pull_request;
pub mod github_user;
