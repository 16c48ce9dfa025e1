use clap::{Parser, Subcommand};
use std::process::ExitCode;

use catalogue_desk::infrastructure::catalogue::create_catalogue_service;
use catalogue_desk::infrastructure::config::{Config, ServiceKind};
use catalogue_desk::{AddCatalogueItemCommand, CatalogueItemsState, CatalogueSnapshot, CatalogueUses, Metadata};

#[derive(Parser)]
#[command(name = "catalogue-desk")]
#[command(about = "List and add catalogue items", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "catalogue.yaml")]
    config: String,

    /// Service implementation (overrides config)
    #[arg(long, value_parser = parse_service_kind)]
    service: Option<ServiceKind>,

    /// Catalogue API base URL (overrides config)
    #[arg(long)]
    base_url: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalogue items
    List {
        /// Print items as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add a catalogue item
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        category: String,
        #[arg(long)]
        quantity: u32,
        /// JSON object attached as item metadata
        #[arg(long)]
        metadata: Option<String>,
    },
    /// Show version
    Version,
    /// Generate default config
    InitConfig,
}

fn parse_service_kind(s: &str) -> Result<ServiceKind, String> {
    s.parse().map_err(|e: catalogue_desk::ConfigError| e.to_string())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(level.into()),
        )
        .init();

    match cli.command {
        Commands::Version => {
            println!("catalogue-desk v{}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Commands::InitConfig => init_config(),
        ref command => {
            let config = load_config(&cli);
            let state = match create_catalogue_service(&config.catalogue) {
                Ok(service) => CatalogueItemsState::new(CatalogueUses::new(service)),
                Err(e) => {
                    tracing::error!("Failed to create catalogue service: {}", e);
                    return ExitCode::FAILURE;
                }
            };

            let rt = match tokio::runtime::Runtime::new() {
                Ok(rt) => rt,
                Err(e) => {
                    tracing::error!("Failed to start runtime: {}", e);
                    return ExitCode::FAILURE;
                }
            };
            rt.block_on(run_command(command, &state))
        }
    }
}

fn load_config(cli: &Cli) -> Config {
    let mut config = if std::path::Path::new(&cli.config).exists() {
        Config::load(&cli.config)
            .map(Config::with_env_overrides)
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to load config: {}, using defaults", e);
                Config::load_env()
            })
    } else {
        Config::load_env()
    };

    if let Some(kind) = cli.service {
        config.catalogue.service = kind;
    }
    if let Some(url) = &cli.base_url {
        config.catalogue.base_url = Some(url.clone());
    }
    config
}

async fn run_command(command: &Commands, state: &CatalogueItemsState) -> ExitCode {
    match command {
        Commands::List { json } => {
            state.fetch_catalogue_items().await;
            let snapshot = state.snapshot().await;
            if let Some(error) = &snapshot.error {
                eprintln!("Failed to list catalogue items: {}", error);
                return ExitCode::FAILURE;
            }
            if *json {
                match serde_json::to_string_pretty(&snapshot.catalogue_items) {
                    Ok(out) => println!("{}", out),
                    Err(e) => {
                        eprintln!("Failed to render items: {}", e);
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                print_table(&snapshot);
            }
            ExitCode::SUCCESS
        }
        Commands::Add { name, category, quantity, metadata } => {
            let mut command = AddCatalogueItemCommand::new(name.clone(), category.clone(), *quantity);
            if let Some(raw) = metadata {
                match serde_json::from_str::<Metadata>(raw) {
                    Ok(map) => command = command.with_metadata(map),
                    Err(e) => {
                        eprintln!("--metadata must be a JSON object: {}", e);
                        return ExitCode::FAILURE;
                    }
                }
            }

            state.add_catalogue_item(command).await;
            let snapshot = state.snapshot().await;
            if let Some(error) = &snapshot.error {
                eprintln!("Failed to add catalogue item: {}", error);
                return ExitCode::FAILURE;
            }
            match snapshot.catalogue_items.first() {
                Some(item) => println!("Added {}: {}", item.id, item),
                None => println!("Added"),
            }
            ExitCode::SUCCESS
        }
        Commands::Version | Commands::InitConfig => ExitCode::SUCCESS,
    }
}

fn print_table(snapshot: &CatalogueSnapshot) {
    if snapshot.catalogue_items.is_empty() {
        println!("No catalogue items.");
        return;
    }
    println!("{:<20} {:<28} {:<16} {:>8} {:>8}", "ID", "NAME", "CATEGORY", "TOTAL", "RESERVED");
    for item in &snapshot.catalogue_items {
        println!(
            "{:<20} {:<28} {:<16} {:>8} {:>8}",
            item.id,
            item.name,
            item.category,
            item.total_quantity,
            item.reserved_quantity.map(|r| r.to_string()).unwrap_or_else(|| "-".to_string()),
        );
    }
    println!("\nTotal: {}", snapshot.total_count);
}

fn init_config() -> ExitCode {
    match Config::default().to_yaml() {
        Ok(yaml) => {
            println!("{}", yaml);
            println!("\nSave this to catalogue.yaml and adjust as needed.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
