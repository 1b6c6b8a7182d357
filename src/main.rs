use apigw_smoke::check::{run_check, CheckSpec};
use apigw_smoke::config::{self, Config, Overrides};
use apigw_smoke::exit_codes::{codes, exit_code_for_error};
use apigw_smoke::inventory::ApiGatewayInventory;
use apigw_smoke::report::{self, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "apigw-smoke")]
#[command(
    about = "Smoke check: verify REST APIs exist in an AWS account/region",
    long_about = "apigw-smoke lists the API Gateway REST APIs visible to the current AWS\ncredentials in one region and fails unless at least one exists.\n\nExit codes:\n  0  check passed\n  1  REST APIs not found\n  2  AWS query failed (credentials, authorization, network)\n  3  configuration error"
)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Region to check (overrides config)
    #[arg(short, long, env = "APIGW_SMOKE_REGION")]
    region: Option<String>,

    /// AWS profile to use (overrides config)
    #[arg(long)]
    profile: Option<String>,

    /// Minimum number of REST APIs required (overrides config)
    #[arg(long)]
    min: Option<usize>,

    /// Only count APIs whose name contains this or whose tag value equals it
    #[arg(long)]
    name: Option<String>,

    /// List the REST APIs that were found
    #[arg(short, long)]
    detailed: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "text")]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default configuration file
    Init {
        /// Path of the config file to create
        #[arg(default_value = ".apigw-smoke.toml")]
        path: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    std::process::exit(execute(cli).await);
}

async fn execute(cli: Cli) -> i32 {
    if let Some(Commands::Init { path }) = &cli.command {
        return match config::init_config(path) {
            Ok(()) => codes::SUCCESS,
            Err(e) => {
                eprintln!("Error: {:#}", e);
                codes::CONFIG_ERROR
            }
        };
    }

    let mut config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return codes::CONFIG_ERROR;
        }
    };
    config.apply(Overrides {
        region: cli.region,
        profile: cli.profile,
        min_resources: cli.min,
        name_filter: cli.name,
    });
    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        return codes::CONFIG_ERROR;
    }

    let spec = match CheckSpec::from_config(&config) {
        Ok(spec) => spec,
        Err(e) => {
            eprintln!("Error: {}", e);
            return exit_code_for_error(&e);
        }
    };

    let inventory = ApiGatewayInventory::load(config.aws.profile.as_deref()).await;
    let result = run_check(&inventory, &spec).await;

    match report::render(&spec, &result, cli.output, cli.detailed) {
        Ok(rendered) => println!("{}", rendered),
        Err(e) => {
            eprintln!("Error: failed to render report: {}", e);
            return exit_code_for_error(&e);
        }
    }

    match result {
        Ok(_) => codes::SUCCESS,
        Err(e) => exit_code_for_error(&e),
    }
}
