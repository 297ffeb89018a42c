mod hub;
mod hub_command;
mod hub_handle;
mod hub_snapshot;

pub use hub::*;
pub use hub_command::*;
pub use hub_handle::*;
pub use hub_snapshot::*;
