//! NetBox provider CLI
//!
//! Drives the provider from the command line:
//! - `schema`: print every resource and data source schema
//! - `create` / `read` / `update` / `delete` / `import`: resource lifecycle
//! - `lookup`: data source query
//!
//! Attributes are read as a JSON object from `--config <file>` or stdin.
//! Resulting state is printed as JSON on stdout; logs go to stderr.

use anyhow::Context;
use clap::{Parser, Subcommand};
use netbox_provider::{ConnectionArgs, Diagnostic, Provider, ProviderConfig, ProviderError, Registry};
use serde_json::Value;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "terraform-provider-netbox")]
#[command(about = "Manage NetBox objects with Terraform-style resources", long_about = None)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    connection: ConnectionArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the schema of every resource and data source
    Schema,

    /// Create an object
    Create {
        /// Resource type, e.g. netbox_site
        resource_type: String,

        /// JSON attribute file (stdin when omitted)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Read an object by ID
    Read {
        resource_type: String,
        id: String,
    },

    /// Update an object by ID
    Update {
        resource_type: String,
        id: String,

        /// JSON attribute file (stdin when omitted)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Delete an object by ID
    Delete {
        resource_type: String,
        id: String,
    },

    /// Adopt an existing object by ID
    Import {
        resource_type: String,
        id: String,
    },

    /// Query a data source
    Lookup {
        /// Data source type, e.g. netbox_device
        data_source: String,

        /// JSON attribute file (stdin when omitted)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn read_attributes(path: Option<&PathBuf>) -> anyhow::Result<Value> {
    let raw = match path {
        Some(path) => std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).context("reading attributes from stdin")?;
            buf
        }
    };
    if raw.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(&raw).context("attributes must be a JSON object")
}

fn print_json(value: &impl serde::Serialize) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run(cli: Cli) -> anyhow::Result<Result<(), ProviderError>> {
    // Schemas do not need a connection
    if let Command::Schema = cli.command {
        print_json(&Registry::default().schemas())?;
        return Ok(Ok(()));
    }

    let config = match ProviderConfig::try_from(cli.connection) {
        Ok(config) => config,
        Err(e) => return Ok(Err(e)),
    };
    let provider = match Provider::configure(&config).await {
        Ok(provider) => provider,
        Err(e) => return Ok(Err(e)),
    };

    let result = match &cli.command {
        Command::Schema => Ok(None),
        Command::Create { resource_type, config } => {
            let attrs = read_attributes(config.as_ref())?;
            provider.create(resource_type, attrs).await.map(Some)
        }
        Command::Read { resource_type, id } => provider.read(resource_type, id).await.map(Some),
        Command::Update { resource_type, id, config } => {
            let attrs = read_attributes(config.as_ref())?;
            provider.update(resource_type, id, attrs).await.map(Some)
        }
        Command::Delete { resource_type, id } => provider.delete(resource_type, id).await.map(|()| None),
        Command::Import { resource_type, id } => provider.import(resource_type, id).await.map(Some),
        Command::Lookup { data_source, config } => {
            let attrs = read_attributes(config.as_ref())?;
            provider.lookup(data_source, attrs).await.map(Some)
        }
    };

    match result {
        Ok(Some(state)) => {
            print_json(&state)?;
            Ok(Ok(()))
        }
        Ok(None) => {
            info!("Done");
            Ok(Ok(()))
        }
        Err(e) => Ok(Err(e)),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli).await? {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            error!("{}", e);
            print_json(&Diagnostic::from(&e))?;
            Ok(ExitCode::FAILURE)
        }
    }
}
