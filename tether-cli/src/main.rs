use anyhow::Result;
use clap::Parser;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use tether::server::{DEFAULT_COMMAND_BUFFER, DEFAULT_PORT, ServerConfig, serve};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tether")]
#[command(about = "WebRTC signaling relay: room discovery and offer/answer/ICE forwarding")]
struct Cli {
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    host: IpAddr,

    #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Serve a frontend build from this directory on the same port.
    #[arg(long, env = "TETHER_STATIC_DIR")]
    static_dir: Option<PathBuf>,

    #[arg(long, default_value_t = DEFAULT_COMMAND_BUFFER)]
    command_buffer: usize,

    /// Used when RUST_LOG is not set.
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Cli {
    fn server_config(&self) -> ServerConfig {
        ServerConfig {
            addr: SocketAddr::new(self.host, self.port),
            static_dir: self.static_dir.clone(),
            command_buffer: self.command_buffer.max(1),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Initializing signaling relay...");
    serve(cli.server_config()).await
}
