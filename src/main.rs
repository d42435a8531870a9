// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;
use threatfox_connector::utils::logging::{format_info, format_success};
use threatfox_connector::{
    Config, DatasetConnector, JsonExporter, ThreatFoxConnector, Validator,
};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "threatfox_connector")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "ThreatFox IOC feed connector for abuse.ch exports", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download the feed and stream records to stdout as JSON lines
    Fetch {
        /// Override the configured IOC type for this run
        #[arg(long)]
        ioc_type: Option<String>,

        #[arg(short, long, value_name = "NUM")]
        limit: Option<usize>,
    },

    /// Download the feed and write records plus a manifest to a directory
    Export {
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(long)]
        ioc_type: Option<String>,

        #[arg(short, long, value_name = "NUM")]
        limit: Option<usize>,

        #[arg(short, long)]
        pretty: bool,
    },

    /// List the dataset's partitions
    Partitions,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    threatfox_connector::utils::logging::init_logger(cli.color, cli.verbose);

    info!("ThreatFox IOC feed connector");
    info!("Loading configuration from: {}", cli.config.display());

    let config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    match cli.command {
        Commands::Fetch { ioc_type, limit } => {
            cmd_fetch(&config, ioc_type, limit).await?;
        }
        Commands::Export {
            output,
            ioc_type,
            limit,
            pretty,
        } => {
            cmd_export(&config, output, ioc_type, limit, pretty).await?;
        }
        Commands::Partitions => {
            cmd_partitions(&config)?;
        }
    }

    Ok(())
}

fn build_connector(config: &Config, ioc_type: Option<String>) -> Result<ThreatFoxConnector> {
    let mut feed_config = config.feed.clone();
    if let Some(ioc_type) = ioc_type {
        Validator::validate_ioc_type(&ioc_type)?;
        feed_config.ioc_type = ioc_type;
    }

    ThreatFoxConnector::new(feed_config).context("Failed to build connector")
}

async fn cmd_fetch(
    config: &Config,
    ioc_type: Option<String>,
    limit: Option<usize>,
) -> Result<()> {
    if let Some(limit) = limit {
        Validator::validate_records_limit(limit)?;
    }

    let connector = build_connector(config, ioc_type)?;
    let start_time = Instant::now();

    let records = connector
        .generate_rows(limit)
        .await
        .context("Feed read failed")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut count = 0usize;

    for record in records {
        let record = record.context("Record parse failed")?;
        serde_json::to_writer(&mut out, &record)?;
        out.write_all(b"\n")?;
        count += 1;
    }
    out.flush()?;

    let elapsed = start_time.elapsed();
    info!(
        "Fetched {} records from {} feed in {:.2}s",
        count,
        connector.ioc_type(),
        elapsed.as_secs_f64()
    );

    Ok(())
}

async fn cmd_export(
    config: &Config,
    output: Option<PathBuf>,
    ioc_type: Option<String>,
    limit: Option<usize>,
    pretty: bool,
) -> Result<()> {
    if let Some(limit) = limit {
        Validator::validate_records_limit(limit)?;
    }

    let connector = build_connector(config, ioc_type)?;
    let output_dir = output.unwrap_or_else(|| config.export.output_dir.clone());
    let pretty = pretty || config.export.pretty;

    info!("Initializing JSON export to {}", output_dir.display());
    let start_time = Instant::now();

    let records = connector
        .generate_rows(limit)
        .await
        .context("Feed read failed")?;

    let exporter = JsonExporter::new(output_dir)?;
    let manifest = exporter
        .export_records(connector.ioc_type(), records, pretty)
        .context("Export failed")?;

    let elapsed = start_time.elapsed();
    println!(
        "{}",
        format_success(&format!(
            "Exported {} records ({} files) in {:.2}s",
            manifest.total_records,
            manifest.files.len(),
            elapsed.as_secs_f64()
        ))
    );

    Ok(())
}

fn cmd_partitions(config: &Config) -> Result<()> {
    let connector = build_connector(config, None)?;
    let partitions = connector
        .list_partitions()
        .context("Partition listing failed")?;

    if partitions.is_empty() {
        println!(
            "{}",
            format_info(&format!(
                "The {} feed dataset is unpartitioned",
                connector.ioc_type()
            ))
        );
    } else {
        for partition in partitions {
            println!("{}", partition);
        }
    }

    Ok(())
}
