//! mouser-mcp: MCP server for the Mouser Electronics API
//!
//! This tool exposes Mouser's part search, cart, and order endpoints as
//! tools that enable AI assistants to find and purchase electronic
//! components.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, Level};
use tracing_subscriber::EnvFilter;

use mouser_mcp::config;
use mouser_mcp::mcp::server::McpServer;

/// MCP server for the Mouser Electronics API.
///
/// Exposes part search, cart management, and order tracking tools that
/// enable AI assistants to work with electronic components. Requires
/// MOUSER_PART_API_KEY and MOUSER_ORDER_API_KEY in the environment or a
/// .env file.
#[derive(Parser, Debug)]
#[command(name = "mouser-mcp")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a .env file with API credentials
    #[arg(long, value_name = "ENV_FILE")]
    env_file: Option<PathBuf>,

    /// Increase logging verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease logging verbosity (only show errors)
    #[arg(short, long)]
    quiet: bool,
}

/// Determines the log level from CLI arguments and configuration.
fn get_log_level(verbose: u8, quiet: bool, debug: bool) -> Level {
    if quiet {
        return Level::ERROR;
    }

    match verbose {
        0 => {
            if debug {
                Level::DEBUG
            } else {
                Level::WARN
            }
        }
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Initialises the tracing subscriber for logging.
///
/// Logging goes to stderr; stdout is reserved for the MCP protocol.
fn init_tracing(level: Level) {
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Entry point for the mouser-mcp server.
fn main() -> ExitCode {
    let args = Args::parse();

    // Load credentials from a .env file, then validate the environment
    if let Err(e) = config::load_env_file(args.env_file.as_deref()) {
        eprintln!("Configuration error: {e}");
        return ExitCode::FAILURE;
    }

    let settings = match config::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            eprintln!(
                "\nSet {} and {} in the environment or a .env file.",
                config::ENV_PART_API_KEY,
                config::ENV_ORDER_API_KEY
            );
            return ExitCode::FAILURE;
        }
    };

    // Initialise logging
    let log_level = get_log_level(args.verbose, args.quiet, settings.debug);
    init_tracing(log_level);

    // Display GPL license notice (required by GPLv3 Section 5d)
    eprintln!(
        "mouser-mcp {}  Copyright (C) 2026  The Embedded Society",
        env!("CARGO_PKG_VERSION")
    );
    eprintln!("This program comes with ABSOLUTELY NO WARRANTY.");
    eprintln!("This is free software, licensed under GPL-3.0-or-later.");
    eprintln!("Source: {}", env!("CARGO_PKG_REPOSITORY"));
    eprintln!();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        base_url = %settings.base_url,
        "Starting mouser-mcp server"
    );

    // Create MCP server
    let mut server = match McpServer::new(&settings) {
        Ok(server) => server,
        Err(e) => {
            error!(error = %e, "Failed to build API client");
            return ExitCode::FAILURE;
        }
    };

    info!("MCP server ready, waiting for client connection...");

    // Run the server
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!(error = %e, "Failed to create Tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    let result = runtime.block_on(server.run());

    match result {
        Ok(()) => {
            info!("Server shut down gracefully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Server error");
            ExitCode::FAILURE
        }
    }
}
