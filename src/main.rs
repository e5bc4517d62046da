use clap::Parser;
use tracing_subscriber::EnvFilter;

use varint::cli::{self, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(e) => {
            if cli.json {
                let message = format!("Failed to load config: {}", e);
                println!("{}", serde_json::json!({"error": message}));
            } else {
                eprintln!("❌ Failed to load config: {}", e);
            }
            return Err(e);
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli::run(&cli.command, &config) {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            if config.json {
                println!("{}", serde_json::json!({"error": format!("{:#}", e)}));
            } else {
                eprintln!("❌ {:#}", e);
            }
            Err(e)
        }
    }
}
