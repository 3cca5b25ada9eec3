mod common;

mod extraction;
mod github_client;
