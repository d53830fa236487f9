use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod commands;

use crate::config::AppConfig;
use commands::{forecast, overview, serve};

#[derive(Parser)]
#[command(name = "fluwatch")]
#[command(about = "FluWatch disease trend tracker and outbreak predictor")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the case dataset and start the web server
    Serve {
        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080).
        /// Defaults to FLUWATCH_BIND_ADDRESS or 0.0.0.0:3000.
        #[arg(short, long)]
        bind_address: Option<String>,

        /// Seed for the synthetic dataset
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print the trend forecast of one region and disease
    ///
    /// Examples:
    ///   fluwatch forecast --region Delhi --disease Flu --days 7
    ///   fluwatch forecast -r Mumbai -d COVID-19 --days 30 --seed 42
    Forecast {
        /// Region label
        #[arg(short, long)]
        region: String,

        /// Disease label
        #[arg(short, long)]
        disease: String,

        /// Days into the future
        #[arg(long, default_value_t = 7)]
        days: u32,

        /// Number of most recent historical days to print
        #[arg(long, default_value_t = 14)]
        history: usize,

        /// Seed for the synthetic dataset
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print latest, peak and mean cases of every series
    Overview {
        /// Seed for the synthetic dataset
        #[arg(long)]
        seed: Option<u64>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let mut config = AppConfig::load()?;

        match self.command {
            Commands::Serve { bind_address, seed } => {
                if let Some(bind_address) = bind_address {
                    config.bind_address = bind_address;
                }
                config.seed = seed.or(config.seed);
                serve(&config).await?;
            }
            Commands::Forecast {
                region,
                disease,
                days,
                history,
                seed,
            } => {
                config.seed = seed.or(config.seed);
                forecast(&config, &region, &disease, days, history)?;
            }
            Commands::Overview { seed } => {
                config.seed = seed.or(config.seed);
                overview(&config)?;
            }
        }
        Ok(())
    }
}
