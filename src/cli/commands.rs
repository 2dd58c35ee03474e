//! CLI commands and argument parsing

use crate::api::{OrderBy, OrderDirection};
use crate::models::{AuctionType, EventType, Side};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Pull records from the OpenSea marketplace API as JSON lines
#[derive(Parser, Debug)]
#[command(name = "opensea-feed")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Client configuration file (YAML); environment variables override it
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Stream asset events, following the cursor to the end
    Events {
        #[arg(long)]
        contract: Option<String>,

        #[arg(long)]
        token_id: Option<String>,

        #[arg(long)]
        account: Option<String>,

        #[arg(long)]
        collection: Option<String>,

        /// created, successful, cancelled, bid_entered, transfer, ...
        #[arg(long)]
        event_type: Option<EventType>,

        /// english, dutch or min-price
        #[arg(long)]
        auction_type: Option<AuctionType>,

        /// Only events on the marketplace itself
        #[arg(long)]
        only_opensea: bool,

        /// Resume from a cursor returned earlier
        #[arg(long)]
        cursor: Option<String>,

        /// Unix seconds
        #[arg(long)]
        after: Option<i64>,

        /// Unix seconds
        #[arg(long)]
        before: Option<i64>,

        /// Page size (0 = configured default)
        #[arg(long, default_value = "0")]
        limit: u32,
    },

    /// Query the legacy order book
    Orders {
        #[arg(long)]
        contract: Option<String>,

        /// Token ids (comma-separated)
        #[arg(long, value_delimiter = ',')]
        token_ids: Vec<String>,

        #[arg(long)]
        maker: Option<String>,

        #[arg(long)]
        owner: Option<String>,

        #[arg(long)]
        side: Option<SideArg>,

        /// Only orders listed after this unix timestamp
        #[arg(long)]
        listed_after: Option<i64>,

        /// created_date or eth_price
        #[arg(long, default_value = "created_date")]
        order_by: OrderBy,

        /// asc or desc
        #[arg(long, default_value = "desc")]
        direction: OrderDirection,

        /// Page size (0 = configured default)
        #[arg(long, default_value = "0")]
        limit: u32,

        #[arg(long, default_value = "0")]
        offset: u32,

        /// Walk every page instead of returning one
        #[arg(long)]
        all: bool,
    },

    /// Active listings of specific tokens
    Listings {
        contract: String,

        /// Token ids (comma-separated)
        #[arg(long, value_delimiter = ',', required = true)]
        token_ids: Vec<String>,

        /// Use the per-token legacy endpoint
        #[arg(long)]
        legacy: bool,

        /// Pause between tokens on the legacy endpoint, in milliseconds
        #[arg(long, default_value = "0")]
        interval_ms: u64,
    },

    /// One asset, or a sample asset of the contract when no token id is given
    Asset {
        contract: String,
        token_id: Option<String>,
    },

    /// One collection by slug
    Collection { slug: String },

    /// A window of the collection list
    Collections {
        #[arg(long, default_value = "0")]
        offset: u32,

        #[arg(long, default_value = "300")]
        limit: u32,
    },
}

/// Order side on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SideArg {
    Buy,
    Sell,
}

impl From<SideArg> for Side {
    fn from(side: SideArg) -> Self {
        match side {
            SideArg::Buy => Side::Buy,
            SideArg::Sell => Side::Sell,
        }
    }
}
