//! CLI command implementations

use std::path::Path;
use std::sync::Arc;

use super::args::Command;
use super::config::{Config, StorageBackend, StorageConfig};
use super::errors::{CliError, CliResult};
use crate::employee::EmployeeService;
use crate::http_server::HttpServer;
use crate::observability::init_logging;
use crate::repository::{
    EmployeeRepository, InMemoryEmployeeRepository, SqliteEmployeeRepository, StorageResult,
};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Init { config } => init(&config),
        Command::Serve {
            config,
            port,
            memory,
        } => serve(&config, port, memory),
    }
}

/// Write the default configuration to `config_path`.
///
/// Refuses to overwrite an existing file.
pub fn init(config_path: &Path) -> CliResult<()> {
    if config_path.exists() {
        return Err(CliError::already_initialized(config_path.display()));
    }

    Config::default().write(config_path)?;
    println!("Wrote default configuration to {}", config_path.display());
    Ok(())
}

/// Load configuration, open storage and serve the HTTP API until Ctrl-C
pub fn serve(config_path: &Path, port: Option<u16>, memory: bool) -> CliResult<()> {
    let mut config = Config::load_or_default(config_path)?;
    if let Some(port) = port {
        config.http.port = port;
    }
    if memory {
        config.storage.backend = StorageBackend::Memory;
    }
    config.validate()?;

    init_logging(config.log_format);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        let repository = open_repository(&config.storage).await?;
        let service = EmployeeService::new(repository);
        let server = HttpServer::with_config(config.http.clone(), service);

        server
            .start()
            .await
            .map_err(|e| CliError::serve_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Open the configured storage collaborator
pub async fn open_repository(config: &StorageConfig) -> StorageResult<Arc<dyn EmployeeRepository>> {
    match config.backend {
        StorageBackend::Sqlite => {
            tracing::info!(url = %config.database_url, "opening SQLite storage");
            let repository =
                SqliteEmployeeRepository::connect(&config.database_url, config.max_connections)
                    .await?;
            Ok(Arc::new(repository))
        }
        StorageBackend::Memory => {
            tracing::info!("using in-memory storage");
            Ok(Arc::new(InMemoryEmployeeRepository::new()))
        }
    }
}
