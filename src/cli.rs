use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use crate::codec::{self, VarintBuffer};
use crate::config::{ToolConfig, DEFAULT_CONFIG_FILE};
use crate::report::{DecodeReport, EncodeReport, RoundTripReport};
use crate::roundtrip;
use crate::utils::io::open_block;

#[derive(Parser, Debug)]
#[command(name = "varint")]
#[command(about = "Big-endian word to varint round trips")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, help = "Config file path")]
    pub config: Option<String>,

    #[arg(long, global = true, help = "Bytes per word, 1-8 (overrides config)")]
    pub word_size: Option<usize>,

    #[arg(long, global = true, help = "Byte offset into the input file (overrides config)")]
    pub offset: Option<u64>,

    #[arg(long, global = true, help = "Output as JSON")]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Read a word from FILE, encode it, decode it and compare
    Roundtrip { file: PathBuf },
    /// Encode a decimal value
    Encode { value: u64 },
    /// Decode a hex varint such as 9601
    Decode { hex: String },
    /// Write the default configuration
    GenerateConfig {
        #[arg(long, default_value = DEFAULT_CONFIG_FILE, help = "Config file path")]
        output: PathBuf,
    },
}

impl Cli {
    /// Config file values with command-line overrides applied
    pub fn resolve_config(&self) -> Result<ToolConfig> {
        let mut config = ToolConfig::load(self.config.as_deref())?;

        if let Some(word_size) = self.word_size {
            config.word_size = word_size;
        }
        if let Some(offset) = self.offset {
            config.offset = offset;
        }
        if self.json {
            config.json = true;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Run one command and return its rendered output
pub fn run(command: &Commands, config: &ToolConfig) -> Result<String> {
    match command {
        Commands::Roundtrip { file } => {
            let raw = open_block(file, config.offset, config.word_size).with_context(|| {
                format!("cannot read {} bytes from {}", config.word_size, file.display())
            })?;
            let trip = roundtrip::verify_block(&raw, config.word_size)?;
            info!("{} bytes from {:?} verified: {}", config.word_size, file, trip.value);

            let report = RoundTripReport::new(&raw, &trip);
            render(config, &report, RoundTripReport::render_text)
        }
        Commands::Encode { value } => {
            let encoded = codec::encode(*value);
            render(config, &EncodeReport::new(*value, &encoded), EncodeReport::render_text)
        }
        Commands::Decode { hex } => {
            let bytes = hex::decode(strip_hex_prefix(hex))
                .with_context(|| format!("invalid hex: {}", hex))?;
            let encoded = VarintBuffer::from_bytes(&bytes)?;
            let value = codec::decode(encoded.as_slice())?;
            render(config, &DecodeReport::new(&encoded, value), DecodeReport::render_text)
        }
        Commands::GenerateConfig { output } => {
            ToolConfig::default().save(output)?;
            info!("Wrote default config to {:?}", output);
            if config.json {
                Ok(serde_json::json!({"success": true, "output": output}).to_string())
            } else {
                Ok(format!("✅ Config written to {}", output.display()))
            }
        }
    }
}

/// Drop a single leading `0x` or `0X`
fn strip_hex_prefix(input: &str) -> &str {
    let input = input.trim();
    input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input)
}

fn render<T: serde::Serialize>(
    config: &ToolConfig,
    report: &T,
    text: fn(&T) -> String,
) -> Result<String> {
    if config.json {
        Ok(serde_json::to_string_pretty(report)?)
    } else {
        Ok(text(report))
    }
}
