use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "pr-review")]
#[clap(about = "Automated PR Review Helper using Amazon Q Developer", version, long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}
