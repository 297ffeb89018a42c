pub use tether_core::model::{ConnectionId, RoomId};

pub mod model {
    pub use tether_core::model::*;
    pub use tether_core::ProtocolError;
}

#[cfg(feature = "server")]
pub mod server {
    pub use tether_server::*;
}
