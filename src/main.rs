use clap::Parser;
use flairtally::cli::{self, Config, Runner};

#[tokio::main]
async fn main() {
    let config = Config::parse();
    env_logger::Builder::new()
        .filter_level(config.verbosity().log_level_filter())
        .init();

    let runner = Runner::new(config);
    if let Err(error) = runner.run().await {
        cli::die(1, &format!("Error: {error}"));
    }
}
