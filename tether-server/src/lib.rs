mod app;
mod config;
mod error;
mod hub;
mod protocol;
mod registry;
mod signaling;

pub use app::*;
pub use config::*;
pub use error::*;
pub use hub::*;
pub use protocol::*;
pub use registry::*;
pub use signaling::*;
