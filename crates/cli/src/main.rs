use clap::{Parser, Subcommand};
use extman_api::AppState;
use extman_domain::{CliOverrides, ExtensionFilter};
use std::net::SocketAddr;
use tracing::info;

mod bootstrap;
mod commands;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "extman")]
#[command(version)]
#[command(about = "Extension Manager - browser extension directory server and terminal client")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// HTTP server port
    #[arg(short = 'p', long, env = "PORT", global = true)]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long, global = true)]
    bind: Option<String>,

    /// Seed data file
    #[arg(long, value_name = "FILE", global = true)]
    seed: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// API base URL used by the client commands
    #[arg(long, value_name = "URL", global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the extension directory over HTTP (default)
    Serve,
    /// Interactive terminal client
    Ui,
    /// Print the directory once
    List {
        #[arg(short, long, default_value = "all")]
        filter: ExtensionFilter,
    },
    /// Flip an extension between active and inactive
    Toggle { id: i64 },
    /// Remove an extension
    Remove {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        port: cli.port,
        bind_address: cli.bind.clone(),
        seed_path: cli.seed.clone(),
        log_level: cli.log_level.clone(),
        api_url: cli.api_url.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config.logging);

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => {}
        Command::Ui => return commands::run_interactive(&config.client).await,
        Command::List { filter } => return commands::list(&config.client, filter).await,
        Command::Toggle { id } => return commands::toggle(&config.client, id).await,
        Command::Remove { id, yes } => return commands::remove(&config.client, id, yes).await,
    }

    info!("Starting Extension Manager v{}", env!("CARGO_PKG_VERSION"));

    let repos = di::Repositories::new(&config.seed)?;
    let use_cases = di::UseCases::new(&repos);

    let app_state = AppState {
        get_extensions: use_cases.get_extensions,
        toggle_extension: use_cases.toggle_extension,
        remove_extension: use_cases.remove_extension,
    };

    let web_addr: SocketAddr = format!("{}:{}", config.server.bind_address, config.server.port)
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid bind address: {}", e))?;

    let extension_count = repos.extension.len().await;
    server::start_web_server(web_addr, app_state, &config.cors, extension_count).await?;

    info!("Server shutdown complete");
    Ok(())
}
