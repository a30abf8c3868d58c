//! Schema Registry Server
//!
//! JSON Schema registry and document validation service as a standalone
//! binary.
//!
//! ## Usage
//!
//! ```bash
//! # Start with in-memory storage on the default port
//! schema-registry
//!
//! # Start with a configuration file
//! schema-registry --conf conf.json
//! ```

use clap::Parser;
use schema_registry::{Conf, SchemaRegistry, SchemaServer};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "schema-registry")]
#[command(
    author,
    version,
    about = "JSON Schema registry and document validation service"
)]
struct Cli {
    /// Path to the JSON configuration file (defaults apply when omitted)
    #[arg(long)]
    conf: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let conf = match &cli.conf {
        Some(path) => {
            info!("loading configuration from {}", path.display());
            Conf::load_json(path)?
        }
        None => Conf::default(),
    };

    let registry = SchemaRegistry::new(conf.registry)?;
    let server = SchemaServer::new(registry, conf.server);

    server.run().await
}
