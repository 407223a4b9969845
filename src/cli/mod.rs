use crate::config::Config;
use crate::core::Resolver;
use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

#[derive(Parser)]
#[command(name = "yt-audio-api")]
#[command(about = "Resolve playable audio streams for YouTube videos")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Resolve a playable audio stream for a URL or bare video id
    Resolve {
        /// YouTube URL (watch or youtu.be form) or 11-character video id
        #[arg(value_name = "INPUT")]
        input: String,
    },

    /// Exercise every provider for a URL or video id and report outcomes
    Probe {
        #[arg(value_name = "INPUT")]
        input: String,
    },
}

impl Cli {
    pub async fn run(&self) -> Result<()> {
        let config = Config::load()?;

        if config.has_api_key() {
            info!("RapidAPI key configured");
        } else {
            info!("RapidAPI key not configured, keyed providers disabled");
        }

        let resolver = Resolver::new(&config);

        match &self.command {
            Command::Resolve { input } => {
                let track = resolver.resolve(input).await?;
                println!("{}", serde_json::to_string_pretty(&track)?);
            }
            Command::Probe { input } => {
                let report = resolver.probe_all(input).await?;
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
        }

        Ok(())
    }
}
