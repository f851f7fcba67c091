//! CLI definition using clap

use clap::{Parser, Subcommand};
use jubgoong_types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "jubgoong")]
#[command(version)]
#[command(about = "Shrimp weighing ledger - record baskets, compute weights and prices")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Data directory override
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage lots (catches)
    Lot {
        #[command(subcommand)]
        command: LotCommands,
    },

    /// Manage transports within a lot
    Transport {
        #[command(subcommand)]
        command: TransportCommands,
    },

    /// Record and correct weighing entries
    Basket {
        #[command(subcommand)]
        command: BasketCommands,
    },

    /// Export the whole ledger as JSON
    Export {
        /// Output file path
        #[arg(long, short = 'o')]
        output: PathBuf,
    },

    /// Import a previously exported ledger, replacing the current one
    Import {
        /// Path to exported JSON file
        input: PathBuf,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set the default output format
        #[arg(long)]
        set_format: Option<OutputFormat>,

        /// Set the default basket weight for new lots (kg)
        #[arg(long)]
        set_tare: Option<f64>,
    },
}

#[derive(Subcommand)]
pub enum LotCommands {
    /// Create a new lot
    New {
        /// Default basket weight for the lot (kg). Uses config value if not specified.
        #[arg(long)]
        tare: Option<f64>,
    },

    /// List all lots with their statistics
    List,

    /// Show one lot with per-transport statistics
    Show {
        /// Lot id, id prefix, name, or 1-based index
        lot: String,
    },

    /// Rename a lot
    Rename {
        lot: String,
        name: String,
    },

    /// Delete a lot and everything in it
    Delete {
        lot: String,
    },

    /// Generate a text report for a lot
    Report {
        lot: String,

        /// Write the report to a file instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum TransportCommands {
    /// Add a transport to a lot
    Add {
        lot: String,
    },

    /// Show one transport with its entries
    Show {
        lot: String,
        /// Transport id, id prefix, name, or 1-based index
        transport: String,
    },

    /// Rename a transport
    Rename {
        lot: String,
        transport: String,
        name: String,
    },

    /// Set price per kg and deduction percentage
    SetPrice {
        lot: String,
        transport: String,
        /// Price per kg (฿)
        price: f64,

        /// Deduction percentage (0-100)
        #[arg(long, default_value_t = 0.0)]
        deduction: f64,
    },

    /// Set the basket tare weight (kg)
    SetTare {
        lot: String,
        transport: String,
        tare: f64,
    },

    /// Set the quick-add weight (kg)
    SetQuickAdd {
        lot: String,
        transport: String,
        weight: f64,
    },

    /// Enable or disable auto-decimal input for this transport
    SetAutoDecimal {
        lot: String,
        transport: String,
        #[arg(value_parser = clap::builder::BoolishValueParser::new())]
        enabled: bool,
    },

    /// Delete a transport and its entries
    Delete {
        lot: String,
        transport: String,
    },
}

#[derive(Subcommand)]
pub enum BasketCommands {
    /// Record one or more weighings
    Add {
        lot: String,
        transport: String,

        /// Weights to record. With auto-decimal mode, digit strings with
        /// two implied decimals (567 -> 5.67 kg).
        weights: Vec<String>,

        /// Record as remain (ชั่งเศษ) entries: pure shrimp weight, no tare
        #[arg(long)]
        remain: bool,

        /// Record one entry at the transport's quick-add weight
        #[arg(long)]
        quick: bool,
    },

    /// Correct the weight of an entry
    Edit {
        lot: String,
        transport: String,
        /// Entry id, id prefix, or 1-based index
        entry: String,
        weight: f64,

        /// Resolve a numeric index against the remain list
        #[arg(long)]
        remain: bool,
    },

    /// Delete an entry
    Delete {
        lot: String,
        transport: String,
        entry: String,

        /// Resolve a numeric index against the remain list
        #[arg(long)]
        remain: bool,
    },
}
