use std::path::PathBuf;

use clap::Parser;

/// Application-level constants
pub const APP_NAME: &str = "imaging-api";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Server configuration, parsed from the command line. The database path
/// is explicit state handed to the storage accessor at construction —
/// nothing reads it from process-wide globals.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "imaging-api",
    version,
    about = "Read-only HTTP query API over a medical imaging metadata store"
)]
pub struct ServerConfig {
    /// Path to the SQLite database populated by the ingestion process
    #[arg(long, default_value = "medical_imaging.db")]
    pub db_path: PathBuf,

    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind (0 picks an ephemeral port)
    #[arg(long, default_value_t = 5000)]
    pub port: u16,
}
