use clap::{Parser, Subcommand};

use cycle_booking::infrastructure::config::Config;
use cycle_booking::infrastructure::web::{self, AppState};
use cycle_booking::BookingService;

#[derive(Parser)]
#[command(name = "cycle-booking")]
#[command(about = "Bicycle repair booking form with Telegram notifications", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    /// Port to listen on (overrides config and PORT)
    #[arg(short, long)]
    port: Option<u16>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the booking form server
    Run,
    /// Show version
    Version,
    /// Print a default config
    InitConfig,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run => {
            if let Err(e) = run_server(&cli.config, cli.port) {
                tracing::error!("{}", e);
                std::process::exit(1);
            }
        }
        Commands::Version => {
            println!("cycle-booking v{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::InitConfig => {
            init_config();
        }
    }
}

fn load_config(config_path: &str) -> Config {
    if !std::path::Path::new(config_path).exists() {
        return Config::load_env();
    }

    let mut config = Config::load(config_path).unwrap_or_else(|e| {
        tracing::warn!("Failed to load config: {}, using defaults", e);
        Config::default()
    });
    config.apply_env();
    config
}

fn run_server(config_path: &str, port_override: Option<u16>) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = load_config(config_path);
    if let Some(port) = port_override {
        config.server.port = port;
    }

    tracing::info!("Starting booking form for {}", config.shop.name);

    let bookings = BookingService::from_config(&config)?;
    let addr = config.bind_addr()?;

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(web::serve(addr, AppState { bookings }))?;
    Ok(())
}

fn init_config() {
    match Config::default().to_yaml() {
        Ok(yaml) => {
            println!("{}", yaml);
            println!("\nSave this to config.yaml and adjust as needed.");
        }
        Err(e) => eprintln!("{}", e),
    }
}
