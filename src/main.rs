use anyhow::Result;
use clap::{Parser, Subcommand};

/// krishvatech - contact inquiries for the KrishvaTech site
#[derive(Parser)]
#[command(name = "krishvatech")]
#[command(about = "Serves the contact form and forwards inquiries", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Validate configuration and print the delivery channel in use
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = krishvatech::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    krishvatech::observability::init_observability(
        &config.logging.level,
        &config.logging.format,
    )?;

    match cli.command {
        Commands::Serve { host, port } => krishvatech::cli::serve(config, host, port).await,
        Commands::Check => krishvatech::cli::check(&config),
    }
}
