//! gog-price-checker - Regional price lookup service for GOG game listings

use anyhow::Result;
use clap::{Parser, Subcommand};
use gog_price_checker::aggregate::collect_prices;
use gog_price_checker::cache::PriceCache;
use gog_price_checker::config::Config;
use gog_price_checker::gog::client::GogClient;
use gog_price_checker::gog::regions::REGIONS;
use gog_price_checker::gog::urls::GameUrl;
use gog_price_checker::server::{self, AppState};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "gog-price-checker",
    version,
    about = "Regional price lookup service for GOG game listings",
    long_about = "Looks up the USD price of a GOG game across every supported storefront \
                  region in parallel and serves the results as JSON."
)]
struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Proxy URL (e.g., socks5://host:port)
    #[arg(long, global = true, env = "GOG_PROXY")]
    proxy: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the price API server
    Serve {
        /// Address to bind
        #[arg(short, long)]
        bind: Option<String>,

        /// Port to listen on
        #[arg(short, long, env = "GOG_PORT")]
        port: Option<u16>,

        /// Cache TTL in seconds
        #[arg(long, env = "GOG_CACHE_TTL")]
        ttl: Option<u64>,
    },

    /// Look up prices for a game URL once and print them
    #[command(alias = "c")]
    Check {
        /// GOG game URL (e.g., https://www.gog.com/game/some_title)
        url: String,

        /// Print raw JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List queried storefront regions
    Regions,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::INFO.into())
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    // Load config with layered overrides
    let mut config = Config::load(cli.config.as_deref())?.with_env();

    if let Some(proxy) = cli.proxy {
        config.proxy = Some(proxy);
    }

    match cli.command {
        Commands::Serve { bind, port, ttl } => {
            if let Some(bind) = bind {
                config.bind = bind;
            }
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(ttl) = ttl {
                config.cache_ttl_secs = ttl;
            }

            let addr: SocketAddr = format!("{}:{}", config.bind, config.port).parse()?;
            let state = AppState {
                client: Arc::new(GogClient::new(&config)?),
                cache: Arc::new(PriceCache::new(config.cache_ttl())),
            };

            server::serve(addr, state).await?;
        }

        Commands::Check { url, json } => {
            let Some(game) = GameUrl::parse(&url) else {
                anyhow::bail!(
                    "Invalid GOG game URL: '{}'. Expected format: \
                     https://www.gog.com/game/game_name",
                    url
                );
            };

            let client = GogClient::new(&config)?;
            let observations = collect_prices(&client, &game.request_path()).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&observations)?);
            } else {
                println!("{:<8} {:>10}", "Region", "USD");
                println!("{:-<8} {:->10}", "", "");
                for obs in &observations {
                    println!("{:<8} {:>10.2}", obs.country, obs.price);
                }
            }
        }

        Commands::Regions => {
            println!("Queried storefront regions ({}):\n", REGIONS.len());
            for chunk in REGIONS.chunks(10) {
                println!("  {}", chunk.join(" "));
            }
        }
    }

    Ok(())
}
