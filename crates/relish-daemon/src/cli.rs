//! Command-line arguments.

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "relish-hub", version, about = "RELiSH MR Hub session registry")]
pub struct Cli {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 8000)]
    pub port: u16,

    /// Public base URL for join links (overrides RElish_BASE_URL / RELISH_BASE_URL)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Serve join.html and assets from this directory instead of the built-in ones
    #[arg(long)]
    pub static_dir: Option<PathBuf>,
}

impl Cli {
    pub fn addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| format!("Invalid address: {}", e))
    }
}
