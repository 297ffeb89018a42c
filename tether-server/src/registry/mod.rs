mod connection;
mod connection_registry;
mod room_directory;

pub use connection::*;
pub use connection_registry::*;
pub use room_directory::*;
