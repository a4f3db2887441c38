mod cli;
mod serve;
mod telemetry;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    telemetry::init_telemetry("voxgate");

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Serve {
        host: "127.0.0.1".to_string(),
        port: 8000,
        model: "gpt-4o".to_string(),
        persona_file: None,
    }) {
        Commands::Serve { host, port, model, persona_file } => {
            serve::run_serve(&host, port, &model, persona_file.as_deref()).await
        }
    }
}
