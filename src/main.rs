use cat_facts::{cli, logging};
use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cat-facts")]
#[command(about = "Random cat facts in your terminal", long_about = None)]
#[command(disable_version_flag = true)]
#[command(after_help = "Examples:\n  cat-facts              Show one random cat fact\n  cat-facts -n 3         Show three random cat facts")]
struct Cli {
    /// Number of cat facts to display
    #[arg(short = 'n', long, value_name = "NUMBER", default_value = "1", value_parser = cli::parse_count)]
    count: u32,

    /// Path to an optional cat-facts.toml config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log diagnostics to stderr
    #[arg(long)]
    verbose: bool,

    /// Show version number
    #[arg(short = 'v', long)]
    version: bool,
}

#[tokio::main]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let message = e.to_string();
            eprintln!("Error: {}", message.trim_start_matches("error: ").trim_end());
            eprintln!("Run with --help for usage information.");
            std::process::exit(1);
        }
    };

    if cli.version {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return;
    }

    logging::init(cli.verbose);

    if let Err(e) = cli::show::facts(cli.count, cli.config).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
