//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{DEFAULT_COLLECTION, DEFAULT_SOLR_URL, DEFAULT_TIMEOUT_SECS};
use solr_indexer_repository::config::DEFAULT_ID_FIELD;

#[derive(Parser, Debug)]
#[command(name = "solr-indexer")]
#[command(about = "Administer and query Solr collections", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Solr base URL, including the context path
    #[arg(long, env = "SOLR_URL", default_value = DEFAULT_SOLR_URL, global = true)]
    pub solr_url: String,

    /// Collection to operate on
    #[arg(long, env = "SOLR_COLLECTION", default_value = DEFAULT_COLLECTION, global = true)]
    pub collection: String,

    /// Per-request timeout in seconds
    #[arg(long, env = "SOLR_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS, global = true)]
    pub timeout_secs: u64,

    /// Field used to look documents up by identifier
    #[arg(long, env = "SOLR_ID_FIELD", default_value = DEFAULT_ID_FIELD, global = true)]
    pub id_field: String,

    /// Refuse to send more than this many records in one add request
    #[arg(long, env = "SOLR_MAX_BATCH_SIZE", global = true)]
    pub max_batch_size: Option<usize>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create the collection
    CreateCollection {
        /// Number of shards
        #[arg(long, default_value_t = 1)]
        num_shards: u32,
        /// Copies of each shard
        #[arg(long, default_value_t = 1)]
        replication_factor: u32,
    },
    /// Load a CSV file and index every row, leaving one column out
    Index {
        /// Path to the CSV file (header row required)
        #[arg(long)]
        csv: PathBuf,
        /// Column to drop from every record
        #[arg(long)]
        exclude: String,
    },
    /// Find documents where a field equals a value
    Search {
        #[arg(long)]
        field: String,
        #[arg(long)]
        value: String,
        /// Maximum documents to return (service default when omitted)
        #[arg(long)]
        rows: Option<usize>,
    },
    /// Print the number of documents in the collection
    Count,
    /// Delete the document with the given identifier
    Delete {
        #[arg(long)]
        id: String,
    },
    /// Print facet counts for a field
    Facet {
        #[arg(long)]
        field: String,
    },
    /// Check that the collection answers requests
    Ping,
}
