use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Port the relay listens on when nothing else is configured.
pub const DEFAULT_PORT: u16 = 5000;

/// Depth of the hub's command queue shared by all connections.
pub const DEFAULT_COMMAND_BUFFER: usize = 256;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address for both the signaling socket and static assets.
    pub addr: SocketAddr,
    /// Directory served for every path that is not a relay route.
    pub static_dir: Option<PathBuf>,
    pub command_buffer: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
            static_dir: None,
            command_buffer: DEFAULT_COMMAND_BUFFER,
        }
    }
}
