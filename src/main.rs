//! # Comanda CLI
//!
//! Command-line interface for the order ticket service.
//!
//! ## Usage
//!
//! ```bash
//! # Run the HTTP service (listen address falls back to $PORT, then 8080)
//! comanda serve
//!
//! # Run against a different relay
//! comanda serve --listen 0.0.0.0:9000 --relay-url https://relay.example/orders
//!
//! # Render an order document to stdout without printing
//! comanda render order.json
//!
//! # Same, with control bytes shown as \xNN escapes
//! comanda render --escape order.json
//! ```

use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;

use comanda::{
    ComandaError, OrderSummary,
    relay::DEFAULT_RELAY_URL,
    server::{self, ServerConfig},
    ticket::{TicketMeta, build_ticket},
};
use serde::Deserialize;

/// Comanda - takeaway order ticket service
#[derive(Parser, Debug)]
#[command(name = "comanda")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP printing service
    Serve {
        /// Address to listen on (default: 0.0.0.0:$PORT, or 0.0.0.0:8080)
        #[arg(long)]
        listen: Option<String>,

        /// Cloud printing relay endpoint
        #[arg(long, default_value = DEFAULT_RELAY_URL)]
        relay_url: String,
    },

    /// Render an order ticket to stdout without printing
    Render {
        /// Path to an order JSON document (reads stdin when omitted)
        input: Option<PathBuf>,

        /// Show control bytes as \xNN escapes instead of writing them raw
        #[arg(long)]
        escape: bool,
    },
}

/// Order document accepted by `comanda render`: the same shape as the
/// /print body, minus the printer address.
#[derive(Debug, Deserialize)]
struct RenderInput {
    #[serde(rename = "orderSummary")]
    order_summary: OrderSummary,
    #[serde(flatten)]
    meta: TicketMeta,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ComandaError> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { listen, relay_url } => {
            let listen_addr = listen.unwrap_or_else(default_listen_addr);
            server::serve(ServerConfig {
                listen_addr,
                relay_url,
            })
            .await
        }
        Commands::Render { input, escape } => render_order(input, escape),
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();
}

/// Listen address from the PORT environment variable, matching how the
/// hosting platform injects the port, with 8080 as the fallback.
fn default_listen_addr() -> String {
    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    format!("0.0.0.0:{}", port)
}

fn render_order(input: Option<PathBuf>, escape: bool) -> Result<(), ComandaError> {
    let raw = match input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let doc: RenderInput = serde_json::from_str(&raw)
        .map_err(|e| ComandaError::InvalidRequest(format!("Invalid order JSON: {}", e)))?;

    let ticket = build_ticket(&doc.order_summary, &doc.meta);
    if escape {
        print!("{}", escape_control(&ticket));
    } else {
        print!("{}", ticket);
    }
    Ok(())
}

/// Replace control characters (except newline) with visible \xNN escapes.
fn escape_control(ticket: &str) -> String {
    let mut out = String::with_capacity(ticket.len());
    for c in ticket.chars() {
        match c {
            '\n' => out.push(c),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\x{:02x}", c as u32)),
            c => out.push(c),
        }
    }
    out
}
