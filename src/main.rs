use clap::Parser;
use pr_review_helper::errors::ErrorHandler;
use pr_review_helper::structs::cli::Cli;
use pr_review_helper::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let cli = Cli::parse();
    let mut runner = CommandRunner::new();

    if let Err(e) = runner.run_command(cli.command).await {
        ErrorHandler::handle_error(&e);
        return Err(e.into());
    }

    Ok(())
}
