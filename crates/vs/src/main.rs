use clap::{Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use miette::Result;
use tracing_subscriber::EnvFilter;

pub mod commands;
pub mod config;

use commands::{decode::DecodeArgs, parse::ParseArgs};
use config::{Config, OutputFormat};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    /// Output format
    #[arg(long, global = true, env = "VS_FORMAT", default_value = "text")]
    format: OutputFormat,

    /// Treat input as a `;`-separated list of versions
    #[arg(long, global = true)]
    list: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            format: self.format.clone(),
            list: self.list,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Parse a version string and print its fields")]
    Parse(ParseArgs),
    #[command(about = "Decode stored JSON in either form and print it")]
    Decode(DecodeArgs),
}

fn init_tracing(verbose: &Verbosity<WarnLevel>) {
    let filter = EnvFilter::builder()
        .with_default_directive(verbose.tracing_level_filter().into())
        .with_env_var("VS_LOG")
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.verbose);

    let config = cli.config();

    match &cli.command {
        Commands::Parse(args) => commands::parse::parse(&config, args)?,
        Commands::Decode(args) => commands::decode::decode(&config, args)?,
    }

    Ok(())
}
