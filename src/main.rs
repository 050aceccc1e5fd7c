use clap::Parser;
use text_stats_lib::cli::Cli;

#[tokio::main]
async fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    text_stats_lib::init_logging();
    text_stats_lib::run(cli).await
}
