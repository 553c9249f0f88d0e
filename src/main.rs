//! Life MCP Server - Main Entry Point
//!
//! This is the main entry point for the life-mcp server application.
//! The actual implementation is in the `life_mcp` library.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use life_mcp::LifeServerHandler;
use mcp_attr::server::serve_stdio;
use tracing_subscriber::EnvFilter;

/// Life MCP Server - hierarchical list and task management via Model Context Protocol
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the data file
    file: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 {
        // No arguments provided, show help and exit with error code
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!(); // Add a newline after help
        std::process::exit(2);
    }

    // Logs go to stderr; stdout is the MCP transport
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let handler = LifeServerHandler::new(&args.file);
    serve_stdio(handler).await?;
    Ok(())
}
